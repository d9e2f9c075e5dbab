//! Expandable hint module
//!
//! Provides the per-card state machine with three states:
//! - Idle: no tooltip, detail panel closed
//! - Hinting: one-time tooltip showing, auto-dismiss pending
//! - Expanded: modifier detail panel open
//!
//! plus the async driver that owns the real auto-dismiss timer.

mod driver;
mod machine;

pub use driver::{HintDriver, HintInput};
pub use machine::{HintMachine, HintState, TimerToken, AUTO_DISMISS_MS};
