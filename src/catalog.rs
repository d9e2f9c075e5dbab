//! Static reference-card content
//!
//! The shortcut catalog is immutable data, defined once and read-only at
//! runtime. All types serialize to JSON for host UIs that consume the
//! card as data.

use serde::{Deserialize, Serialize};

/// Named icon reference, resolved by the host's icon set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Hand,
    ZoomIn,
    Maximize,
    MousePointer,
    SwatchBook,
    Paintbrush,
    Eraser,
    ClipboardCopy,
    ClipboardPaste,
    Scissors,
    Layers,
    Copy,
    Eye,
    MonitorSmartphone,
    Move3d,
    Undo,
    Redo,
    Info,
}

/// Supplementary secondary-key behavior for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifierHint {
    /// Key or key sequence, in press order
    pub keys: Vec<String>,
    /// What holding it does
    pub description: String,
}

/// One keyboard-command reference item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortcutEntry {
    pub title: String,
    /// Ordered key combination
    pub keys: Vec<String>,
    pub description: String,
    pub icon: Icon,
    /// Modifier hints, present only for entries with secondary-key behavior
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<ModifierHint>>,
}

impl ShortcutEntry {
    /// Whether this entry carries modifier hint data
    pub fn has_modifiers(&self) -> bool {
        self.modifiers.as_ref().is_some_and(|m| !m.is_empty())
    }
}

/// A titled group of related shortcuts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortcutSection {
    pub title: String,
    /// Grid columns the host should lay the section out in
    pub columns: u8,
    pub entries: Vec<ShortcutEntry>,
}

fn entry(title: &str, keys: &[&str], description: &str, icon: Icon) -> ShortcutEntry {
    ShortcutEntry {
        title: title.to_string(),
        keys: keys.iter().map(|k| k.to_string()).collect(),
        description: description.to_string(),
        icon,
        modifiers: None,
    }
}

fn modifier(keys: &[&str], description: &str) -> ModifierHint {
    ModifierHint {
        keys: keys.iter().map(|k| k.to_string()).collect(),
        description: description.to_string(),
    }
}

fn section(title: &str, columns: u8, entries: Vec<ShortcutEntry>) -> ShortcutSection {
    ShortcutSection {
        title: title.to_string(),
        columns,
        entries,
    }
}

/// The full Photoshop reference-card catalog
pub fn default_catalog() -> Vec<ShortcutSection> {
    vec![
        section(
            "Essential Navigation",
            2,
            vec![
                entry(
                    "Pan Around Canvas",
                    &["Space"],
                    "Hold spacebar and click + drag to pan around the canvas. \
                     Double-click Hand tool to fit to screen.",
                    Icon::Hand,
                ),
                entry(
                    "Zoom In/Out",
                    &["Ctrl", "Scroll"],
                    "Use Ctrl + Mouse Wheel or Ctrl + [+]/[-] to zoom. \
                     Ctrl + 0 fits to screen, Ctrl + 1 for 100%",
                    Icon::ZoomIn,
                ),
                entry(
                    "Zoom to Fit",
                    &["Ctrl", "0"],
                    "Fit the entire canvas to your screen. Ctrl + 1 returns to 100% zoom",
                    Icon::Maximize,
                ),
                entry(
                    "Select All",
                    &["Ctrl", "A"],
                    "Select everything on the current layer. Double-click for all layers",
                    Icon::MousePointer,
                ),
                entry(
                    "Deselect",
                    &["Ctrl", "D"],
                    "Clear any active selection. Use Ctrl + Shift + D to reselect",
                    Icon::MousePointer,
                ),
                entry(
                    "Swap Colors",
                    &["X"],
                    "Swap between primary and secondary colors. Press D to reset to black/white",
                    Icon::SwatchBook,
                ),
            ],
        ),
        section(
            "Quick Tools",
            2,
            vec![
                entry(
                    "Brush Tool",
                    &["B"],
                    "Switch to Brush. [ or ] to resize, Shift + [ or ] for hardness. \
                     Hold Shift for straight lines",
                    Icon::Paintbrush,
                ),
                entry(
                    "Eraser Tool",
                    &["E"],
                    "Switch to Eraser. [ or ] to resize, Shift + [ or ] for hardness. \
                     Hold Shift for straight erasing",
                    Icon::Eraser,
                ),
                entry(
                    "Move Tool",
                    &["V"],
                    "Switch to Move tool. Hold Shift to constrain movement to 45° angles",
                    Icon::Hand,
                ),
                entry(
                    "Color Picker",
                    &["Alt"],
                    "Hold Alt to temporarily switch to Color Picker with any tool",
                    Icon::SwatchBook,
                ),
                entry(
                    "Brush Size",
                    &["[", "]"],
                    "[ decreases and ] increases brush size. Add Shift to adjust hardness",
                    Icon::Paintbrush,
                ),
                entry(
                    "Default Colors",
                    &["D"],
                    "Reset colors to black and white. Press X to swap between them",
                    Icon::SwatchBook,
                ),
            ],
        ),
        section(
            "Tool Modifiers",
            1,
            vec![
                ShortcutEntry {
                    modifiers: Some(vec![
                        modifier(&["Shift"], "Draw straight lines"),
                        modifier(&["Alt"], "Sample color"),
                        modifier(&["[/]"], "Size adjustment"),
                    ]),
                    ..entry(
                        "Brush Modifiers",
                        &["Alt"],
                        "Hold Alt for color picker, Shift for straight lines",
                        Icon::Paintbrush,
                    )
                },
                ShortcutEntry {
                    modifiers: Some(vec![
                        modifier(&["Shift"], "Add to selection"),
                        modifier(&["Alt"], "Subtract from selection"),
                        modifier(&["Shift", "Alt"], "Intersect with selection"),
                    ]),
                    ..entry(
                        "Selection Modifiers",
                        &["Shift"],
                        "Hold Shift to add, Alt to subtract from selection",
                        Icon::MousePointer,
                    )
                },
                ShortcutEntry {
                    modifiers: Some(vec![
                        modifier(&["Shift"], "Maintain aspect ratio"),
                        modifier(&["Alt"], "Transform from center"),
                        modifier(&["Ctrl"], "Distort/perspective"),
                    ]),
                    ..entry(
                        "Transform Modifiers",
                        &["Ctrl", "T"],
                        "Free transform with modifiers for precise control",
                        Icon::Move3d,
                    )
                },
            ],
        ),
        section(
            "View Controls",
            2,
            vec![
                entry(
                    "Full Screen",
                    &["F"],
                    "Cycle through screen modes. Press Tab to hide panels",
                    Icon::Maximize,
                ),
                entry(
                    "Hide Panels",
                    &["Tab"],
                    "Toggle all panels. Shift+Tab keeps toolbar visible",
                    Icon::MonitorSmartphone,
                ),
                entry(
                    "Actual Pixels",
                    &["Ctrl", "1"],
                    "View at 100% zoom. Double-click Zoom tool for same",
                    Icon::ZoomIn,
                ),
                entry(
                    "Screen Modes",
                    &["F"],
                    "Cycle through: Standard, Full with Menu, Full Screen",
                    Icon::Maximize,
                ),
            ],
        ),
        section(
            "Layer Operations",
            2,
            vec![
                entry(
                    "New Layer",
                    &["Ctrl", "Shift", "N"],
                    "Create new layer. Hold Alt for options dialog",
                    Icon::Layers,
                ),
                entry(
                    "Duplicate Layer",
                    &["Ctrl", "J"],
                    "Duplicate selected layer or selection to new layer",
                    Icon::Copy,
                ),
                entry(
                    "Delete Layer",
                    &["Delete"],
                    "Delete selected layer(s). Hold Alt to skip confirmation",
                    Icon::Scissors,
                ),
                entry(
                    "Merge Layers",
                    &["Ctrl", "E"],
                    "Merge selected layers. Ctrl+Shift+E merges all visible",
                    Icon::Layers,
                ),
                entry(
                    "Layer Opacity",
                    &["0-9"],
                    "Quick opacity: 0 = 0%, 1 = 10%, 9 = 90%, 0 = 100%",
                    Icon::Eye,
                ),
            ],
        ),
        section(
            "Clipboard Operations",
            2,
            vec![
                entry(
                    "Copy",
                    &["Ctrl", "C"],
                    "Copy selected area or layer. Works with multiple selected layers",
                    Icon::ClipboardCopy,
                ),
                entry(
                    "Cut",
                    &["Ctrl", "X"],
                    "Cut selection to clipboard. Removes content from current layer",
                    Icon::Scissors,
                ),
                entry(
                    "Paste",
                    &["Ctrl", "V"],
                    "Paste as new layer. Content centers in view by default",
                    Icon::ClipboardPaste,
                ),
                entry(
                    "Copy Merged",
                    &["Ctrl", "Shift", "C"],
                    "Copy combined visible content from all layers",
                    Icon::Layers,
                ),
                entry(
                    "Paste in Place",
                    &["Ctrl", "Shift", "V"],
                    "Paste content exactly where it was copied from",
                    Icon::ClipboardPaste,
                ),
                entry(
                    "Paste Special",
                    &["Ctrl", "Alt", "V"],
                    "Opens paste options dialog for more control",
                    Icon::ClipboardPaste,
                ),
            ],
        ),
        section(
            "Undo/Redo",
            2,
            vec![
                entry("Undo", &["Ctrl", "Z"], "Undo the last action", Icon::Undo),
                entry(
                    "Redo",
                    &["Ctrl", "Shift", "Z"],
                    "Redo the last undone action",
                    Icon::Redo,
                ),
            ],
        ),
    ]
}

/// Footer tips shown below the card sections
pub fn pro_tips() -> Vec<&'static str> {
    vec![
        "Hold Shift while using any tool to constrain to straight lines or 45° angles",
        "Ctrl-click layer thumbnail to select all non-transparent pixels",
        "Hold Space while using any tool to temporarily switch to Hand tool",
        "Right-click while transforming for additional options",
        "Hold Alt + Ctrl + Rightclick-Drag left/right to adjust brush size without \
         opening the brush panel",
        "Hold Alt + Ctrl + Rightclick-Drag up/down to adjust brush hardness",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_tool_modifiers_carry_hints() {
        for s in default_catalog() {
            for e in &s.entries {
                assert_eq!(
                    e.has_modifiers(),
                    s.title == "Tool Modifiers",
                    "unexpected modifier data on {}",
                    e.title
                );
            }
        }
    }

    #[test]
    fn test_entry_serialization() {
        let catalog = default_catalog();
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.contains("Brush Modifiers"));
        // Entries without modifiers omit the field entirely
        let undo = &catalog.last().unwrap().entries[0];
        let json = serde_json::to_string(undo).unwrap();
        assert!(!json.contains("modifiers"));
    }

    #[test]
    fn test_catalog_round_trips() {
        let catalog = default_catalog();
        let json = serde_json::to_string(&catalog).unwrap();
        let back: Vec<ShortcutSection> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), catalog.len());
        assert!(back[2].entries.iter().all(|e| e.has_modifiers()));
    }
}
