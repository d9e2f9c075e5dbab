//! Key symbol mapping for platform-specific display
//!
//! Provides the substitution table for rendering logical key names
//! as Mac glyphs, and helpers for mapping whole key combinations.

/// Mac display glyphs for the substituted modifier keys
pub mod glyphs {
    /// Command glyph shown in place of Ctrl on Mac
    pub const COMMAND: &str = "⌘";
    /// Option glyph shown in place of Alt on Mac
    pub const OPTION: &str = "⌥";
    /// Shift glyph on Mac
    pub const SHIFT: &str = "⇧";
}

/// Map a logical key name to its display label for the given platform mode.
///
/// When `mac` is true, `Ctrl`, `Alt`, and `Shift` are replaced by their
/// Mac glyphs; every other key passes through unchanged. When `mac` is
/// false this is the identity. Pure and idempotent: mapping an already
/// mapped glyph returns it unchanged.
pub fn map_key(key: &str, mac: bool) -> &str {
    if !mac {
        return key;
    }
    match key {
        "Ctrl" => glyphs::COMMAND,
        "Alt" => glyphs::OPTION,
        "Shift" => glyphs::SHIFT,
        other => other,
    }
}

/// Map an ordered key combination, preserving order.
pub fn map_combo<'a>(keys: &'a [String], mac: bool) -> Vec<&'a str> {
    keys.iter().map(|k| map_key(k, mac)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_mode_is_identity() {
        assert_eq!(map_key("Ctrl", false), "Ctrl");
        assert_eq!(map_key("Alt", false), "Alt");
        assert_eq!(map_key("Shift", false), "Shift");
        assert_eq!(map_key("Space", false), "Space");
    }

    #[test]
    fn test_mac_substitutions() {
        assert_eq!(map_key("Ctrl", true), "⌘");
        assert_eq!(map_key("Alt", true), "⌥");
        assert_eq!(map_key("Shift", true), "⇧");
    }

    #[test]
    fn test_unrecognized_keys_pass_through() {
        assert_eq!(map_key("Space", true), "Space");
        assert_eq!(map_key("[", true), "[");
        assert_eq!(map_key("0-9", true), "0-9");
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let once = map_key("Ctrl", true);
        assert_eq!(map_key(once, true), once);
    }

    #[test]
    fn test_mapping_is_deterministic() {
        assert_eq!(map_key("Ctrl", true), map_key("Ctrl", true));
    }

    #[test]
    fn test_combo_preserves_order() {
        let keys = vec![
            "Ctrl".to_string(),
            "Shift".to_string(),
            "Z".to_string(),
        ];
        assert_eq!(map_combo(&keys, true), vec!["⌘", "⇧", "Z"]);
        assert_eq!(map_combo(&keys, false), vec!["Ctrl", "Shift", "Z"]);
    }
}
