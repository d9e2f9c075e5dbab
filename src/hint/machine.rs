//! Core hint state machine implementation
//!
//! Handles transitions between Idle, Hinting, and Expanded for one
//! shortcut card, based on visibility crossings, user clicks, and the
//! auto-dismiss timer.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::events::{DismissReason, HintEvent};
use crate::store::SeenFlagStore;

/// How long the first-use tooltip stays up without interaction
pub const AUTO_DISMISS_MS: u64 = 5000;

/// The three possible states of a card's modifier hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HintState {
    /// No tooltip showing, detail panel closed
    #[default]
    Idle,
    /// One-time tooltip affordance showing, auto-dismiss pending
    Hinting,
    /// Modifier detail panel open
    Expanded,
}

impl std::fmt::Display for HintState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HintState::Idle => write!(f, "Idle"),
            HintState::Hinting => write!(f, "Hinting"),
            HintState::Expanded => write!(f, "Expanded"),
        }
    }
}

/// Identifies one arming of the auto-dismiss timer.
///
/// Every transition out of `Hinting` other than timer elapse invalidates
/// the pending token, so a sleep that was not canceled in time fires
/// stale and is ignored instead of forcing `Expanded` back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken(u64);

/// The state machine driving one card's expandable hint.
///
/// Constructed only for entries that carry modifier data; entries without
/// it have no machine and their clicks are no-ops at the card layer.
pub struct HintMachine {
    /// Current state
    state: HintState,
    /// Process-wide one-time seen flag, shared across all cards
    seen: Arc<dyn SeenFlagStore>,
    /// Channel for emitting hint events
    event_tx: broadcast::Sender<HintEvent>,
    /// Generation counter for auto-dismiss arming
    generation: u64,
    /// Token of the currently armed auto-dismiss, if any
    armed: Option<TimerToken>,
    /// Time when a non-Idle state was entered
    state_entered_at: Option<Instant>,
}

impl HintMachine {
    /// Create a new machine in `Idle`
    pub fn new(seen: Arc<dyn SeenFlagStore>, event_tx: broadcast::Sender<HintEvent>) -> Self {
        Self {
            state: HintState::Idle,
            seen,
            event_tx,
            generation: 0,
            armed: None,
            state_entered_at: None,
        }
    }

    /// Get the current state
    pub fn state(&self) -> HintState {
        self.state
    }

    /// Handle the first qualifying visibility crossing.
    ///
    /// Enters `Hinting` only from `Idle` and only while the seen flag is
    /// still false. Returns the token of the armed auto-dismiss timer when
    /// a hint was started; the caller schedules the delay and feeds the
    /// token back through [`Self::on_timer`].
    pub fn on_visible(&mut self) -> Option<TimerToken> {
        if self.state != HintState::Idle {
            return None;
        }
        if self.seen.read() {
            debug!("hint suppressed, tooltip already seen");
            return None;
        }

        self.generation += 1;
        let token = TimerToken(self.generation);
        self.armed = Some(token);

        self.transition_to(HintState::Hinting);
        self.emit(HintEvent::HintShown);

        Some(token)
    }

    /// Handle a user click on the card.
    ///
    /// `Hinting` commits the seen flag and opens the panel; `Idle` and
    /// `Expanded` toggle the panel freely.
    pub fn on_click(&mut self) {
        match self.state {
            HintState::Hinting => {
                self.armed = None;
                self.transition_to(HintState::Expanded);
                self.emit(HintEvent::HintDismissed {
                    reason: DismissReason::Clicked,
                });
                self.seen.commit();
                self.emit(HintEvent::SeenCommitted);
                self.emit(HintEvent::Expanded);
            }
            HintState::Idle => {
                self.transition_to(HintState::Expanded);
                self.emit(HintEvent::Expanded);
            }
            HintState::Expanded => {
                self.transition_to(HintState::Idle);
                self.emit(HintEvent::Collapsed);
            }
        }
    }

    /// Handle auto-dismiss timer expiry.
    ///
    /// Only a token matching the currently armed timer dismisses the hint;
    /// stale fires from a canceled arming are ignored.
    pub fn on_timer(&mut self, token: TimerToken) {
        if self.armed != Some(token) {
            debug!(?token, "stale auto-dismiss fire ignored");
            return;
        }

        self.armed = None;
        self.transition_to(HintState::Idle);
        self.emit(HintEvent::HintDismissed {
            reason: DismissReason::TimedOut,
        });
    }

    /// Whether an auto-dismiss timer is armed
    pub fn timer_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Perform a state transition
    fn transition_to(&mut self, new_state: HintState) {
        let old_state = self.state;
        let duration_ms = self
            .state_entered_at
            .map(|t| t.elapsed().as_millis() as u64)
            .unwrap_or(0);

        info!(
            from = %old_state,
            to = %new_state,
            duration_ms = duration_ms,
            "hint transition"
        );

        self.state = new_state;
        self.state_entered_at = if new_state != HintState::Idle {
            Some(Instant::now())
        } else {
            None
        };
    }

    /// Emit a hint event, ignoring the no-subscriber case
    fn emit(&self, event: HintEvent) {
        debug!(%event, "emitting hint event");
        let _ = self.event_tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemorySeenFlagStore;

    fn create_machine() -> (
        HintMachine,
        Arc<MemorySeenFlagStore>,
        broadcast::Receiver<HintEvent>,
    ) {
        let seen = Arc::new(MemorySeenFlagStore::new());
        let (tx, rx) = broadcast::channel(16);
        (HintMachine::new(Arc::clone(&seen) as _, tx), seen, rx)
    }

    #[test]
    fn test_initial_state() {
        let (sm, _, _) = create_machine();
        assert_eq!(sm.state(), HintState::Idle);
    }

    #[test]
    fn test_visibility_starts_hinting() {
        let (mut sm, seen, _) = create_machine();

        let token = sm.on_visible();
        assert!(token.is_some());
        assert_eq!(sm.state(), HintState::Hinting);
        assert!(sm.timer_armed());
        // Showing the hint does not commit the flag
        assert!(!seen.read());
    }

    #[test]
    fn test_seen_flag_suppresses_hinting() {
        let (mut sm, seen, _) = create_machine();
        seen.commit();

        assert!(sm.on_visible().is_none());
        assert_eq!(sm.state(), HintState::Idle);
    }

    #[test]
    fn test_timeout_returns_to_idle_without_commit() {
        let (mut sm, seen, _) = create_machine();

        let token = sm.on_visible().unwrap();
        sm.on_timer(token);

        assert_eq!(sm.state(), HintState::Idle);
        assert!(!seen.read());
        assert!(!sm.timer_armed());
    }

    #[test]
    fn test_click_while_hinting_expands_and_commits() {
        let (mut sm, seen, _) = create_machine();

        let token = sm.on_visible().unwrap();
        sm.on_click();

        assert_eq!(sm.state(), HintState::Expanded);
        assert!(seen.read());
        assert!(!sm.timer_armed());

        // A stale timer fire must not force Expanded back to Idle
        sm.on_timer(token);
        assert_eq!(sm.state(), HintState::Expanded);
    }

    #[test]
    fn test_expand_collapse_toggles_freely() {
        let (mut sm, _, _) = create_machine();

        sm.on_click();
        assert_eq!(sm.state(), HintState::Expanded);
        sm.on_click();
        assert_eq!(sm.state(), HintState::Idle);
        sm.on_click();
        assert_eq!(sm.state(), HintState::Expanded);
    }

    #[test]
    fn test_expanded_does_not_revisit_hinting() {
        let (mut sm, seen, _) = create_machine();

        let _ = sm.on_visible().unwrap();
        sm.on_click();
        sm.on_click(); // collapse
        assert_eq!(sm.state(), HintState::Idle);

        // Seen flag is committed, so later crossings stay Idle
        assert!(seen.read());
        assert!(sm.on_visible().is_none());
        assert_eq!(sm.state(), HintState::Idle);
    }

    #[test]
    fn test_visibility_while_hinting_is_ignored() {
        let (mut sm, _, _) = create_machine();

        let first = sm.on_visible().unwrap();
        assert!(sm.on_visible().is_none());
        assert_eq!(sm.state(), HintState::Hinting);

        // The original arming is still the live one
        sm.on_timer(first);
        assert_eq!(sm.state(), HintState::Idle);
    }

    #[test]
    fn test_rearmed_timer_gets_fresh_token() {
        let (mut sm, _, _) = create_machine();

        let first = sm.on_visible().unwrap();
        sm.on_timer(first);
        assert_eq!(sm.state(), HintState::Idle);

        // Seen flag still false, so a second crossing may hint again
        let second = sm.on_visible().unwrap();
        assert_ne!(first, second);

        // The old token no longer dismisses
        sm.on_timer(first);
        assert_eq!(sm.state(), HintState::Hinting);
        sm.on_timer(second);
        assert_eq!(sm.state(), HintState::Idle);
    }

    #[test]
    fn test_events_on_click_while_hinting() {
        let (mut sm, _, mut rx) = create_machine();

        let _ = sm.on_visible().unwrap();
        sm.on_click();

        assert!(matches!(rx.try_recv().unwrap(), HintEvent::HintShown));
        assert!(matches!(
            rx.try_recv().unwrap(),
            HintEvent::HintDismissed {
                reason: DismissReason::Clicked
            }
        ));
        assert!(matches!(rx.try_recv().unwrap(), HintEvent::SeenCommitted));
        assert!(matches!(rx.try_recv().unwrap(), HintEvent::Expanded));
    }
}
