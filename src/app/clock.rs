//! Virtual clock for driving scheduled timers deterministically in tests.

use crate::app::event::TimerKind;
use crate::app::sink::Scheduler;
use std::time::Duration;

#[derive(Debug, Default)]
pub struct VirtualClock {
    now: Duration,
    next_seq: u64,
    queue: Vec<(Duration, u64, TimerKind)>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to
    /// its deadline. Timers with equal deadlines fire in scheduling order.
    pub fn fire_next(&mut self, until: Duration) -> Option<TimerKind> {
        let idx = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, (deadline, _, _))| *deadline <= until)
            .min_by_key(|(_, (deadline, seq, _))| (*deadline, *seq))
            .map(|(i, _)| i)?;
        let (deadline, _, timer) = self.queue.remove(idx);
        self.now = deadline;
        Some(timer)
    }

    pub fn advance_to(&mut self, until: Duration) {
        if until > self.now {
            self.now = until;
        }
    }
}

impl Scheduler for VirtualClock {
    fn schedule(&mut self, after: Duration, timer: TimerKind) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push((self.now + after, seq, timer));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_in_deadline_order() {
        let mut clock = VirtualClock::new();
        clock.schedule(Duration::from_millis(3000), TimerKind::HideHelp(1));
        clock.schedule(Duration::from_millis(2000), TimerKind::SpinForwardDone);
        clock.schedule(Duration::from_millis(2000), TimerKind::SpinUnwindDone);

        let until = Duration::from_millis(2500);
        assert_eq!(clock.fire_next(until), Some(TimerKind::SpinForwardDone));
        assert_eq!(clock.now(), Duration::from_millis(2000));
        assert_eq!(clock.fire_next(until), Some(TimerKind::SpinUnwindDone));
        assert_eq!(clock.fire_next(until), None);
        assert_eq!(clock.pending(), 1);

        clock.advance_to(until);
        clock.schedule(Duration::from_millis(100), TimerKind::SpinForwardDone);
        assert_eq!(
            clock.fire_next(Duration::from_millis(2600)),
            Some(TimerKind::SpinForwardDone)
        );
    }
}
