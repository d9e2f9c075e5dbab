//! Card and page composition
//!
//! A [`ShortcutCard`] pairs one catalog entry with a hint machine when the
//! entry carries modifier data. The [`CheatsheetPage`] owns the platform
//! mode toggle and the shared seen-flag store; the first card whose hint
//! is clicked commits the flag for every card on the page.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::debug;

use crate::catalog::{ShortcutEntry, ShortcutSection};
use crate::events::HintEvent;
use crate::hint::{HintMachine, HintState, TimerToken};
use crate::keys::map_combo;
use crate::store::SeenFlagStore;

/// One reference item plus its interaction state
pub struct ShortcutCard {
    entry: ShortcutEntry,
    /// Present only when the entry has modifier hints
    machine: Option<HintMachine>,
}

impl ShortcutCard {
    /// Build a card, instantiating a hint machine only for entries with
    /// modifier data
    pub fn new(
        entry: ShortcutEntry,
        seen: &Arc<dyn SeenFlagStore>,
        event_tx: &broadcast::Sender<HintEvent>,
    ) -> Self {
        let machine = entry
            .has_modifiers()
            .then(|| HintMachine::new(Arc::clone(seen), event_tx.clone()));
        Self { entry, machine }
    }

    /// The underlying catalog entry
    pub fn entry(&self) -> &ShortcutEntry {
        &self.entry
    }

    /// Current hint state; entries without modifiers are always `Idle`
    pub fn state(&self) -> HintState {
        self.machine
            .as_ref()
            .map(HintMachine::state)
            .unwrap_or_default()
    }

    /// Forward a qualifying visibility crossing to the hint machine
    pub fn on_visible(&mut self) -> Option<TimerToken> {
        self.machine.as_mut().and_then(HintMachine::on_visible)
    }

    /// Handle a user click; a no-op for entries without modifiers
    pub fn click(&mut self) {
        match self.machine.as_mut() {
            Some(machine) => machine.on_click(),
            None => debug!(title = %self.entry.title, "click ignored, no modifier data"),
        }
    }

    /// Forward auto-dismiss timer expiry to the hint machine
    pub fn on_timer(&mut self, token: TimerToken) {
        if let Some(machine) = self.machine.as_mut() {
            machine.on_timer(token);
        }
    }

    /// The entry's key combination rendered for the given platform mode
    pub fn key_labels(&self, mac: bool) -> Vec<&str> {
        map_combo(&self.entry.keys, mac)
    }
}

/// A titled group of cards, laid out in the section's column count
pub struct CardSection {
    pub title: String,
    pub columns: u8,
    pub cards: Vec<ShortcutCard>,
}

/// The reference-card page: platform mode, sections, shared seen flag
pub struct CheatsheetPage {
    /// Mac vs. Windows glyph mode, owned here and passed down read-only
    mac: bool,
    sections: Vec<CardSection>,
    event_tx: broadcast::Sender<HintEvent>,
}

impl CheatsheetPage {
    /// Build a page over the given catalog and seen-flag store
    pub fn new(catalog: Vec<ShortcutSection>, seen: Arc<dyn SeenFlagStore>) -> Self {
        let (event_tx, _) = broadcast::channel(64);
        let sections = catalog
            .into_iter()
            .map(|s| CardSection {
                cards: s
                    .entries
                    .into_iter()
                    .map(|e| ShortcutCard::new(e, &seen, &event_tx))
                    .collect(),
                title: s.title,
                columns: s.columns,
            })
            .collect();

        Self {
            mac: false,
            sections,
            event_tx,
        }
    }

    /// Current platform mode
    pub fn is_mac(&self) -> bool {
        self.mac
    }

    /// Flip between Mac and Windows glyphs. Never touches hint state.
    pub fn toggle_platform(&mut self) {
        self.mac = !self.mac;
        debug!(mac = self.mac, "platform mode toggled");
    }

    /// The page's sections
    pub fn sections(&self) -> &[CardSection] {
        &self.sections
    }

    /// Mutable access for dispatching visibility and click events
    pub fn sections_mut(&mut self) -> &mut [CardSection] {
        &mut self.sections
    }

    /// Subscribe to hint events from every card on the page
    pub fn subscribe(&self) -> broadcast::Receiver<HintEvent> {
        self.event_tx.subscribe()
    }
}
