//! Viewport visibility observation
//!
//! Models the host UI's intersection capability: the host reports visible
//! fractions for named elements, and registered observations fire their
//! callbacks when an element first reaches the configured threshold.
//! Dropping a [`Subscription`] tears the observation down whether or not
//! it ever fired.

use std::sync::{Arc, Mutex, Weak};

use tracing::debug;

/// Options controlling when an observation fires
#[derive(Debug, Clone, Copy)]
pub struct VisibilityOptions {
    /// Visible fraction that must be reached, in `0.0..=1.0`
    pub threshold: f64,
    /// Fire at most once, then remove the observation
    pub trigger_once: bool,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            trigger_once: true,
        }
    }
}

type Callback = Box<dyn FnMut() + Send>;

struct Observation {
    id: u64,
    target: String,
    options: VisibilityOptions,
    callback: Callback,
    /// Last reported fraction was at or above the threshold
    above: bool,
}

#[derive(Default)]
struct Inner {
    observations: Vec<Observation>,
    next_id: u64,
}

/// Visibility source driven by host-reported element fractions
#[derive(Default)]
pub struct ViewportObserver {
    inner: Arc<Mutex<Inner>>,
}

impl ViewportObserver {
    /// Create an observer with no registered observations
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for the named target element.
    ///
    /// The callback fires whenever the reported fraction crosses the
    /// threshold from below. With `trigger_once` it fires at most once and
    /// the observation is removed immediately after. The returned
    /// [`Subscription`] removes the observation on drop.
    pub fn observe(
        &self,
        target: impl Into<String>,
        callback: impl FnMut() + Send + 'static,
        options: VisibilityOptions,
    ) -> Subscription {
        let mut inner = self.inner.lock().expect("observer lock poisoned");
        let id = inner.next_id;
        inner.next_id += 1;

        let target = target.into();
        debug!(%target, threshold = options.threshold, "observing element");

        inner.observations.push(Observation {
            id,
            target,
            options,
            callback: Box::new(callback),
            above: false,
        });

        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Report the current visible fraction of a target element.
    ///
    /// Elements that are detached or never rendered are simply never
    /// reported; their observations never fire.
    pub fn report(&self, target: &str, fraction: f64) {
        let mut inner = self.inner.lock().expect("observer lock poisoned");
        let mut fired_once = Vec::new();

        for obs in inner.observations.iter_mut() {
            if obs.target != target {
                continue;
            }
            let above = fraction >= obs.options.threshold;
            if above && !obs.above {
                debug!(%target, fraction, "visibility threshold crossed");
                (obs.callback)();
                if obs.options.trigger_once {
                    fired_once.push(obs.id);
                }
            }
            obs.above = above;
        }

        inner.observations.retain(|o| !fired_once.contains(&o.id));
    }

    /// Number of live observations
    pub fn len(&self) -> usize {
        self.inner.lock().expect("observer lock poisoned").observations.len()
    }

    /// Whether no observations are registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Handle to a registered observation; dropping it unobserves
pub struct Subscription {
    id: u64,
    inner: Weak<Mutex<Inner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            let mut inner = inner.lock().expect("observer lock poisoned");
            inner.observations.retain(|o| o.id != self.id);
        }
    }
}
