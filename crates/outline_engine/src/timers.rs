use std::time::Duration;

/// Deferred work ordered by deadline on a virtual clock the host advances.
/// Timers sharing a deadline fire in scheduling order.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    now: Duration,
    next_seq: u64,
    pending: Vec<(Duration, u64, T)>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn schedule(&mut self, after: Duration, timer: T) {
        self.next_seq += 1;
        self.pending.push((self.now + after, self.next_seq, timer));
    }

    /// Earliest timer due at or before `until`. The clock moves to its deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<T> {
        let (position, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (deadline, _, _))| *deadline <= until)
            .min_by_key(|(_, (deadline, seq, _))| (*deadline, *seq))?;
        let (deadline, _, timer) = self.pending.remove(position);
        self.now = self.now.max(deadline);
        Some(timer)
    }

    /// Move the clock forward without firing anything.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
