//! shortcut-hints: Interaction core for a keyboard-shortcut reference card
//!
//! This crate provides the stateful logic behind two informational pages:
//! - Key-label rendering with Mac vs. Windows glyph substitution
//! - A one-time-seen flag persisted across runs, soft-failing to "unseen"
//! - Visibility-gated tooltip triggering at a 50% viewport threshold
//! - Per-card expand/collapse hints with a cancelable 5 second auto-dismiss
//! - An expandable municipal-issues panel with embedded chart data
//!
//! Rendering stays with the host: the crate exposes hint states, key
//! labels, and event streams; the host supplies containers, icons, and
//! charts, and reports element visibility and clicks back in.

pub mod card;
pub mod catalog;
pub mod config;
pub mod events;
pub mod hint;
pub mod issues;
pub mod keys;
pub mod store;
pub mod visibility;

pub use card::{CardSection, CheatsheetPage, ShortcutCard};
pub use catalog::{default_catalog, pro_tips, Icon, ModifierHint, ShortcutEntry, ShortcutSection};
pub use config::Config;
pub use events::{DismissReason, HintEvent};
pub use hint::{HintDriver, HintInput, HintMachine, HintState, AUTO_DISMISS_MS};
pub use issues::{default_issues, Issue, IssuePanel};
pub use keys::{map_combo, map_key};
pub use store::{FileSeenFlagStore, MemorySeenFlagStore, SeenFlagStore, SEEN_FLAG_KEY};
pub use visibility::{Subscription, ViewportObserver, VisibilityOptions};
