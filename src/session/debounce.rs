//! Single-slot debounce timer
//!
//! The timer is a deadline, not a thread: the owner polls it from its event
//! loop. Scheduling replaces whatever was pending, so at most one deadline
//! exists at a time and the most recent one wins. Dropping the timer drops
//! the deadline with it; nothing can fire afterwards.

use std::time::{Duration, Instant};

/// Handle for one scheduled deadline
///
/// Tickets are never reused within a `Debouncer`, so a stale ticket can be
/// told apart from the live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy)]
struct Pending {
    ticket: Ticket,
    deadline: Instant,
}

/// Cancellable, restartable deadline
#[derive(Debug, Default)]
pub struct Debouncer {
    issued: u64,
    pending: Option<Pending>,
}

impl Debouncer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            issued: 0,
            pending: None,
        }
    }

    /// Arm the timer to fire `delay` after `now`, replacing any pending deadline
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.pending = Some(Pending {
            ticket,
            deadline: now + delay,
        });
        ticket
    }

    /// Disarm the timer; returns whether a deadline was pending
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether `ticket` belongs to the deadline that is still pending
    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.pending.is_some_and(|p| p.ticket == ticket)
    }

    /// Time left until the pending deadline, zero if already due
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|p| p.deadline.saturating_duration_since(now))
    }

    /// Fire the pending deadline if it is due
    ///
    /// A deadline fires once; the timer is disarmed afterwards.
    pub fn poll(&mut self, now: Instant) -> Option<Ticket> {
        match self.pending {
            Some(p) if now >= p.deadline => {
                self.pending = None;
                Some(p.ticket)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(100);

    #[test]
    fn test_fires_once_after_deadline() {
        let start = Instant::now();
        let mut timer = Debouncer::new();
        let ticket = timer.schedule(start, DELAY);

        assert_eq!(timer.poll(start + Duration::from_millis(99)), None);
        assert_eq!(timer.poll(start + DELAY), Some(ticket));
        assert_eq!(timer.poll(start + DELAY * 2), None);
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_reschedule_invalidates_previous() {
        let start = Instant::now();
        let mut timer = Debouncer::new();
        let first = timer.schedule(start, DELAY);
        let second = timer.schedule(start + Duration::from_millis(80), DELAY);

        assert_ne!(first, second);
        assert!(!timer.is_current(first));
        assert!(timer.is_current(second));

        // The first deadline has passed but was replaced
        assert_eq!(timer.poll(start + DELAY), None);
        assert_eq!(timer.poll(start + Duration::from_millis(180)), Some(second));
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut timer = Debouncer::new();
        timer.schedule(start, DELAY);

        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert_eq!(timer.poll(start + DELAY), None);
    }

    #[test]
    fn test_remaining() {
        let start = Instant::now();
        let mut timer = Debouncer::new();
        assert_eq!(timer.remaining(start), None);

        timer.schedule(start, DELAY);
        assert_eq!(timer.remaining(start + Duration::from_millis(40)), Some(Duration::from_millis(60)));
        assert_eq!(timer.remaining(start + DELAY * 3), Some(Duration::ZERO));
    }
}
