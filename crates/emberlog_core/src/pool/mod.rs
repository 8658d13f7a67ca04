//! # Recycling Event Pool
//!
//! Per-event-type allocator that reuses previously released storage. Under
//! steady load every acquire is served from the free list and the heap is
//! never touched; the heap is only reached when the free list runs dry, and
//! each such miss permanently grows the pool.
//!
//! ## Lifecycle
//!
//! ```text
//!   acquire ──> EventRef ──(move)──> queue ──> flush ──┐
//!      ▲                                               │ drop
//!      │                                               ▼
//!   free list <───────────── release (payload destroyed,
//!                                     storage recycled)
//! ```
//!
//! ## Thread Safety
//!
//! One exclusive lock guards the free list; the `capacity`/`in_use` counters
//! are relaxed atomics read outside the lock and are suitable for monitoring
//! only. Growth allocations run outside the lock. Each concrete event type
//! gets its own pool instance with fully independent state.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::event::{ErasedSlot, Event, EventRef};

/// One recyclable storage block: the payload plus the back-reference used to
/// return the block to the pool that issued it.
struct Slot<T: Event> {
    value: Option<T>,
    owner: Weak<Shared<T>>,
}

impl<T: Event + 'static> ErasedSlot for Slot<T> {
    fn event(&self) -> &(dyn Event + 'static) {
        self.value.as_ref().expect("pool slot vacated while owned")
    }

    fn event_mut(&mut self) -> &mut (dyn Event + 'static) {
        self.value.as_mut().expect("pool slot vacated while owned")
    }

    fn release(mut self: Box<Self>) {
        // Destroy the payload now; the block outlives it on the free list.
        self.value = None;
        if let Some(owner) = self.owner.upgrade() {
            owner.recycle(self);
        }
        // Pool already gone: the block itself is freed here.
    }
}

/// State shared by all clones of a pool and by its outstanding handles.
struct Shared<T: Event> {
    free: Mutex<Vec<Box<Slot<T>>>>,
    capacity: AtomicUsize,
    in_use: AtomicUsize,
}

impl<T: Event> Shared<T> {
    fn recycle(&self, slot: Box<Slot<T>>) {
        self.free.lock().push(slot);
        self.in_use.fetch_sub(1, Ordering::Relaxed);
    }
}

/// A recycling allocator for one concrete event type.
///
/// Cloning is cheap and yields a handle to the same underlying pool, so
/// producer threads can each hold their own copy. Invariant at quiescence:
/// `capacity() == in-use handles + free blocks`.
///
/// # Example
///
/// ```rust,ignore
/// let pool: EventPool<TextEvent> = EventPool::with_capacity(256);
///
/// // Hot path: no heap allocation while the free list holds blocks.
/// let event = pool.acquire(TextEvent::new("ready"));
/// manager.enqueue(event);
/// ```
pub struct EventPool<T: Event> {
    shared: Arc<Shared<T>>,
}

impl<T: Event> Clone for EventPool<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Event + 'static> EventPool<T> {
    /// Creates an empty pool. The first acquires all fall through to the
    /// heap; call [`EventPool::add_capacity`] ahead of steady-state load to
    /// keep allocation off the hot path.
    #[must_use]
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                free: Mutex::new(Vec::new()),
                capacity: AtomicUsize::new(0),
                in_use: AtomicUsize::new(0),
            }),
        }
    }

    /// Creates a pool pre-grown by `capacity` blocks.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let pool = Self::new();
        pool.add_capacity(capacity);
        pool
    }

    /// Returns a handle to a newly constructed event.
    ///
    /// If a free storage block exists it is reused and no heap allocation
    /// occurs; otherwise a fresh block is allocated and the pool's capacity
    /// grows by one. Never fails: storage-allocation failure aborts the
    /// process, as there is no safe degraded mode on this path.
    pub fn acquire(&self, event: T) -> EventRef {
        let recycled = self.shared.free.lock().pop();

        let slot = match recycled {
            Some(mut slot) => {
                slot.value = Some(event);
                slot
            }
            None => {
                self.shared.capacity.fetch_add(1, Ordering::Relaxed);
                Box::new(Slot {
                    value: Some(event),
                    owner: Arc::downgrade(&self.shared),
                })
            }
        };

        self.shared.in_use.fetch_add(1, Ordering::Relaxed);
        EventRef::new(slot)
    }

    /// Pre-allocates `additional` storage blocks and appends them to the
    /// free list. A zero `additional` is a no-op. Safe to call concurrently
    /// with [`EventPool::acquire`] and handle drops; the allocations happen
    /// outside the free-list lock.
    pub fn add_capacity(&self, additional: usize) {
        if additional == 0 {
            return;
        }

        let mut blocks: Vec<Box<Slot<T>>> = (0..additional)
            .map(|_| {
                Box::new(Slot {
                    value: None,
                    owner: Arc::downgrade(&self.shared),
                })
            })
            .collect();

        self.shared.free.lock().append(&mut blocks);
        self.shared.capacity.fetch_add(additional, Ordering::Relaxed);
        tracing::debug!(additional, "event pool grew");
    }

    /// Total storage blocks owned by the pool. Non-decreasing over time;
    /// approximate under concurrency.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.shared.capacity.load(Ordering::Relaxed)
    }

    /// Blocks currently on the free list (capacity minus in-use handles).
    /// Approximate under concurrency; for monitoring, not synchronization.
    #[inline]
    #[must_use]
    pub fn available(&self) -> usize {
        let capacity = self.shared.capacity.load(Ordering::Relaxed);
        let in_use = self.shared.in_use.load(Ordering::Relaxed);
        capacity.saturating_sub(in_use)
    }
}

impl<T: Event + 'static> Default for EventPool<T> {
    fn default() -> Self {
        Self::new()
    }
}
