//! Trailing-edge debouncing of input values
//!
//! [`Debouncer`] is clock-driven rather than timer-driven: callers report
//! input with [`Debouncer::update`] and advance time with
//! [`Debouncer::poll`], passing the current [`Instant`] each time. The event
//! loop sleeps until [`Debouncer::next_deadline`]. At most one emission is
//! pending at any moment; a new input replaces it and restarts the window.
//!
//! ```
//! use smartsearch::debounce::Debouncer;
//! use std::time::{Duration, Instant};
//!
//! let start = Instant::now();
//! let mut debouncer = Debouncer::new(String::new(), Duration::from_millis(300));
//!
//! debouncer.update("j".to_string(), start);
//! debouncer.update("jo".to_string(), start + Duration::from_millis(100));
//! assert_eq!(debouncer.poll(start + Duration::from_millis(350)), None);
//! assert_eq!(
//!     debouncer.poll(start + Duration::from_millis(400)).map(String::as_str),
//!     Some("jo")
//! );
//! ```

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

/// Delays a value until it has been stable for a quiet period
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    value: T,
    input: T,
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    /// Create a debouncer whose output starts at `initial`
    #[must_use]
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            input: initial.clone(),
            value: initial,
            delay,
            pending: None,
        }
    }

    /// Current debounced output
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Latest raw input
    #[must_use]
    pub const fn input(&self) -> &T {
        &self.input
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether an emission is scheduled
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the scheduled emission is due, if any
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Report a new raw input at `now`
    ///
    /// An input equal to the previous raw input is ignored. Anything else
    /// replaces the pending emission and restarts the window. Never emits
    /// synchronously, even with a zero delay. Returns whether a new emission
    /// was scheduled.
    pub fn update(&mut self, value: T, now: Instant) -> bool {
        if value == self.input {
            return false;
        }
        self.input = value.clone();
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
        tracing::trace!(delay_ms = self.delay.as_millis(), "debounce scheduled");
        true
    }

    /// Fire the pending emission if it is due at `now`
    ///
    /// Returns the new output when it fired.
    pub fn poll(&mut self, now: Instant) -> Option<&T> {
        let due = self.pending.as_ref().is_some_and(|p| p.deadline <= now);
        if !due {
            return None;
        }
        let pending = self.pending.take()?;
        self.value = pending.value;
        tracing::trace!("debounce emitted");
        Some(&self.value)
    }

    /// Drop the pending emission, if any
    ///
    /// Used on teardown: nothing fires after this until the next update.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            tracing::trace!("debounce cancelled");
        }
    }

    /// Set input and output to `value` at once, dropping any pending emission
    pub fn reset(&mut self, value: T) {
        self.pending = None;
        self.input = value.clone();
        self.value = value;
    }

    /// Change the delay
    ///
    /// A pending emission restarts its window under the new delay.
    pub fn set_delay(&mut self, delay: Duration, now: Instant) {
        self.delay = delay;
        if let Some(pending) = &mut self.pending {
            pending.deadline = now + delay;
        }
    }
}
