//! Timer Queue
//!
//! One-shot timers driven by an explicit clock. Nothing fires until the
//! caller advances time with `tick`; a zero delay therefore means "the next
//! tick", not "right now".

/// Handle to a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u32);

#[derive(Debug)]
struct Entry<T> {
    id: TimerId,
    task: T,
    due_at: u64,
    /// Scheduling order, breaks ties between timers due at the same instant
    seq: u64,
}

/// Pending one-shot tasks ordered by expiry
#[derive(Debug)]
pub struct TimerQueue<T> {
    entries: Vec<Entry<T>>,
    now_ms: u64,
    next_id: u32,
    next_seq: u64,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            now_ms: 0,
            next_id: 0,
            next_seq: 0,
        }
    }

    /// Schedule `task` to fire once, `delay_ms` from now
    pub fn schedule(&mut self, task: T, delay_ms: u64) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let seq = self.next_seq;
        self.next_seq += 1;

        self.entries.push(Entry {
            id,
            task,
            due_at: self.now_ms + delay_ms,
            seq,
        });
        tracing::trace!(?id, delay_ms, "timer scheduled");
        id
    }

    /// Cancel a pending timer. Returns false if it already fired.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Advance the clock by `delta_ms` and drain every due task.
    ///
    /// Tasks come back in expiry order (scheduling order for ties), which can
    /// differ from the order they were scheduled in.
    pub fn tick(&mut self, delta_ms: u64) -> Vec<T> {
        self.now_ms += delta_ms;
        let now = self.now_ms;

        let mut due = Vec::new();
        let mut i = 0;
        while i < self.entries.len() {
            if self.entries[i].due_at <= now {
                due.push(self.entries.swap_remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|e| (e.due_at, e.seq));
        due.into_iter().map(|e| e.task).collect()
    }

    /// Number of timers that have not fired yet
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Check if no timers are pending
    pub fn is_idle(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current clock value in milliseconds
    pub fn now(&self) -> u64 {
        self.now_ms
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
