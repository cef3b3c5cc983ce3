//! Event queue with immediate and deferred delivery
//!
//! Games post their own event type `E`. Immediate events are delivered on
//! the next drain; deferred events wait until the clock reaches their
//! delivery time. This is how delayed calls ("check again in 100 ms") are
//! expressed without wall-clock timers.

/// Event queue with registration-free, pull-based delivery
#[derive(Debug)]
pub struct EventQueue<E> {
    immediate_queue: Vec<E>,
    deferred_queue: Vec<(f64, u64, E)>,
    next_sequence: u64,
}

impl<E> EventQueue<E> {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self {
            immediate_queue: Vec::new(),
            deferred_queue: Vec::new(),
            next_sequence: 0,
        }
    }

    /// Send event for handling on the next drain
    pub fn send(&mut self, event: E) {
        self.immediate_queue.push(event);
    }

    /// Post event for deferred delivery at the given time (seconds)
    pub fn post(&mut self, delivery_time: f64, event: E) {
        self.deferred_queue.push((delivery_time, self.next_sequence, event));
        self.next_sequence += 1;
    }

    /// Take every immediate event plus the deferred events due at `now`.
    ///
    /// Immediate events come first in send order, then due deferred events
    /// by delivery time (ties in post order).
    pub fn drain_due(&mut self, now: f64) -> Vec<E> {
        let mut due = std::mem::take(&mut self.immediate_queue);

        let (mut ready, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.deferred_queue)
            .into_iter()
            .partition(|(time, _, _)| *time <= now);
        self.deferred_queue = pending;

        ready.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        due.extend(ready.into_iter().map(|(_, _, event)| event));
        due
    }

    /// Number of events still waiting
    pub fn pending(&self) -> usize {
        self.immediate_queue.len() + self.deferred_queue.len()
    }

    /// Clear all queued events (useful for state transitions)
    pub fn clear(&mut self) {
        self.immediate_queue.clear();
        self.deferred_queue.clear();
    }
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    enum Ping {
        Now,
        Later(u32),
    }

    #[test]
    fn test_immediate_dispatch() {
        let mut queue = EventQueue::new();
        queue.send(Ping::Now);
        assert_eq!(queue.drain_due(0.0), vec![Ping::Now]);
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn test_deferred_dispatch() {
        let mut queue = EventQueue::new();
        queue.post(1.0, Ping::Later(1));

        assert!(queue.drain_due(0.5).is_empty());
        assert_eq!(queue.pending(), 1);

        assert_eq!(queue.drain_due(1.0), vec![Ping::Later(1)]);
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn test_deferred_order_by_time_then_post_order() {
        let mut queue = EventQueue::new();
        queue.post(2.0, Ping::Later(3));
        queue.post(1.0, Ping::Later(1));
        queue.post(1.0, Ping::Later(2));
        queue.send(Ping::Now);

        assert_eq!(
            queue.drain_due(5.0),
            vec![Ping::Now, Ping::Later(1), Ping::Later(2), Ping::Later(3)]
        );
    }

    #[test]
    fn test_clear() {
        let mut queue = EventQueue::new();
        queue.send(Ping::Now);
        queue.post(1.0, Ping::Later(0));
        queue.clear();
        assert!(queue.drain_due(10.0).is_empty());
    }
}
