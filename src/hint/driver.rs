//! Async runner for one hint state machine
//!
//! Owns the real auto-dismiss delay: visibility crossings and clicks
//! arrive over a channel, and an armed `tokio` sleep feeds timer expiry
//! back into the machine. Clicks that leave `Hinting` drop the sleep, so
//! a canceled arming never fires. Closing the input channel tears the
//! driver down, pending timer included.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::Instant;
use tracing::{debug, info};

use super::machine::{HintMachine, HintState, TimerToken, AUTO_DISMISS_MS};

/// Inputs fed to a hint driver from the host UI
#[derive(Debug, Clone, Copy)]
pub enum HintInput {
    /// The card's anchor element crossed the visibility threshold
    VisibilityCrossed,
    /// The user clicked the card
    Click,
}

/// Drives a [`HintMachine`] from a stream of host inputs
pub struct HintDriver {
    machine: HintMachine,
    state_tx: watch::Sender<HintState>,
}

impl HintDriver {
    /// Wrap a machine; the returned receiver tracks the current state
    pub fn new(machine: HintMachine) -> (Self, watch::Receiver<HintState>) {
        let (state_tx, state_rx) = watch::channel(machine.state());
        (Self { machine, state_tx }, state_rx)
    }

    /// Run the driver until the input channel closes
    pub async fn run(mut self, mut input_rx: mpsc::Receiver<HintInput>) {
        info!("hint driver started");

        // Token and deadline of the armed auto-dismiss, if any
        let mut armed: Option<(TimerToken, Instant)> = None;

        loop {
            let dismiss_at = armed.map(|(_, at)| at);

            tokio::select! {
                maybe_input = input_rx.recv() => {
                    match maybe_input {
                        Some(HintInput::VisibilityCrossed) => {
                            if let Some(token) = self.machine.on_visible() {
                                let at = Instant::now()
                                    + Duration::from_millis(AUTO_DISMISS_MS);
                                armed = Some((token, at));
                            }
                        }
                        Some(HintInput::Click) => {
                            self.machine.on_click();
                            if self.machine.state() != HintState::Hinting {
                                if armed.take().is_some() {
                                    debug!("auto-dismiss canceled by click");
                                }
                            }
                        }
                        None => break,
                    }
                }

                _ = async move {
                    match dismiss_at {
                        Some(at) => tokio::time::sleep_until(at).await,
                        None => std::future::pending().await,
                    }
                } => {
                    if let Some((token, _)) = armed.take() {
                        self.machine.on_timer(token);
                    }
                }
            }

            let _ = self.state_tx.send(self.machine.state());
        }

        info!("hint driver stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemorySeenFlagStore, SeenFlagStore};
    use tokio_test::assert_ok;
    use std::sync::Arc;
    use tokio::sync::broadcast;

    fn spawn_driver() -> (
        mpsc::Sender<HintInput>,
        watch::Receiver<HintState>,
        Arc<MemorySeenFlagStore>,
        tokio::task::JoinHandle<()>,
    ) {
        let seen = Arc::new(MemorySeenFlagStore::new());
        let (event_tx, _) = broadcast::channel(16);
        let machine = HintMachine::new(Arc::clone(&seen) as _, event_tx);
        let (driver, state_rx) = HintDriver::new(machine);
        let (input_tx, input_rx) = mpsc::channel(8);
        let handle = tokio::spawn(driver.run(input_rx));
        (input_tx, state_rx, seen, handle)
    }

    #[tokio::test(start_paused = true)]
    async fn test_hint_auto_dismisses_after_timeout() {
        let (tx, mut rx, seen, _handle) = spawn_driver();

        tx.send(HintInput::VisibilityCrossed).await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), HintState::Hinting);

        // Paused time fast-forwards through the 5 second sleep
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), HintState::Idle);
        assert!(!seen.read());
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_while_hinting_cancels_auto_dismiss() {
        let (tx, mut rx, seen, _handle) = spawn_driver();

        tx.send(HintInput::VisibilityCrossed).await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), HintState::Hinting);

        tx.send(HintInput::Click).await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), HintState::Expanded);
        assert!(seen.read());

        // Well past the auto-dismiss mark, the panel must stay open
        tokio::time::advance(Duration::from_millis(AUTO_DISMISS_MS * 2)).await;
        tokio::task::yield_now().await;
        assert_eq!(*rx.borrow(), HintState::Expanded);
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_with_pending_timer() {
        let (tx, mut rx, _seen, handle) = spawn_driver();

        tx.send(HintInput::VisibilityCrossed).await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), HintState::Hinting);

        // Closing the input channel stops the driver even mid-hint
        drop(tx);
        assert_ok!(handle.await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_viewport_observer_feeds_driver() {
        use crate::visibility::{ViewportObserver, VisibilityOptions};

        let (tx, mut rx, _seen, _handle) = spawn_driver();

        let observer = ViewportObserver::new();
        let obs_tx = tx.clone();
        let _sub = observer.observe(
            "transform-modifiers",
            move || {
                let _ = obs_tx.try_send(HintInput::VisibilityCrossed);
            },
            VisibilityOptions::default(),
        );

        observer.report("transform-modifiers", 0.6);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), HintState::Hinting);
    }

    #[tokio::test(start_paused = true)]
    async fn test_expand_collapse_through_driver() {
        let (tx, mut rx, seen, _handle) = spawn_driver();
        seen.commit();

        tx.send(HintInput::Click).await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), HintState::Expanded);

        tx.send(HintInput::Click).await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), HintState::Idle);
    }
}
