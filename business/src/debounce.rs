//! Single-slot debouncer.
//!
//! Each `push` supersedes whatever was pending, so a burst of events collapses
//! into one firing carrying the last value, `delay` after the last event.
//! The debouncer never sleeps; the owner polls it with the current time and
//! uses [`Debouncer::deadline`] to schedule its next wake-up.

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebounceState<T> {
    Idle,
    Pending { value: T, deadline: DateTime<Utc> },
}

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    state: DebounceState<T>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: DebounceState::Idle,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn state(&self) -> &DebounceState<T> {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, DebounceState::Pending { .. })
    }

    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        match &self.state {
            DebounceState::Idle => None,
            DebounceState::Pending { deadline, .. } => Some(*deadline),
        }
    }

    /// Schedules `value` to fire at `now + delay`, dropping any earlier entry.
    pub fn push(&mut self, value: T, now: DateTime<Utc>) {
        self.state = DebounceState::Pending {
            value,
            deadline: now + self.delay,
        };
    }

    /// Returns the pending value once its deadline has been reached.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<T> {
        let due = matches!(
            &self.state,
            DebounceState::Pending { deadline, .. } if now >= *deadline
        );
        if !due {
            return None;
        }
        match std::mem::replace(&mut self.state, DebounceState::Idle) {
            DebounceState::Pending { value, .. } => Some(value),
            DebounceState::Idle => None,
        }
    }

    /// Drops the pending entry, if any. Returns whether one was dropped.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.is_pending();
        self.state = DebounceState::Idle;
        was_pending
    }
}
