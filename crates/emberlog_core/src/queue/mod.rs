//! # Bounded Ring Queue
//!
//! Fixed-capacity circular buffer with drop-oldest overflow. Enqueue never
//! blocks and never fails: when the queue is full the slot at the write
//! cursor is overwritten and the oldest unread element is silently discarded.
//!
//! Cursors increase monotonically and are reduced modulo capacity on access,
//! so "empty" (`next_read == next_write`) and "full"
//! (`next_write - next_read == capacity`) are never ambiguous the way plain
//! wrap-around indices would be.
//!
//! ## Thread Safety
//!
//! One exclusive lock serializes every operation — a deliberate
//! strict-mutual-exclusion design that buys exact FIFO and drop-oldest
//! semantics at the cost of throughput under heavy contention.

use parking_lot::Mutex;

/// Cursor state and slot storage, guarded as a unit.
struct State<T> {
    slots: Box<[Option<T>]>,
    next_read: usize,
    next_write: usize,
}

/// A bounded, thread-safe circular queue with drop-oldest overflow.
pub struct RingQueue<T> {
    state: Mutex<State<T>>,
    capacity: usize,
}

impl<T> RingQueue<T> {
    /// Creates a queue holding at most `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; a zero-capacity queue is a
    /// configuration error.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "ring queue capacity must be greater than zero");

        let slots: Vec<Option<T>> = (0..capacity).map(|_| None).collect();
        Self {
            state: Mutex::new(State {
                slots: slots.into_boxed_slice(),
                next_read: 0,
                next_write: 0,
            }),
            capacity,
        }
    }

    /// Appends `item`, overwriting the oldest unread element if the queue is
    /// full. Never blocks beyond the internal lock, never fails.
    pub fn enqueue(&self, item: T) {
        let mut state = self.state.lock();

        let write = state.next_write % self.capacity;
        state.slots[write] = Some(item);

        state.next_write += 1;
        if state.next_write - state.next_read > self.capacity {
            state.next_read += 1;
        }
    }

    /// Removes and returns the oldest unread element, or `None` when the
    /// queue holds nothing unread.
    pub fn dequeue(&self) -> Option<T> {
        let mut state = self.state.lock();

        if state.next_read == state.next_write {
            return None;
        }

        let read = state.next_read % self.capacity;
        let item = state.slots[read].take();
        state.next_read += 1;
        item
    }

    /// Number of unread elements.
    #[must_use]
    pub fn len(&self) -> usize {
        let state = self.state.lock();
        state.next_write - state.next_read
    }

    /// Whether the queue holds no unread elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The fixed capacity chosen at construction.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every unread element and collapses occupancy to zero.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        while state.next_read != state.next_write {
            let read = state.next_read % self.capacity;
            state.slots[read] = None;
            state.next_read += 1;
        }
    }
}
