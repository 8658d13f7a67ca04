//! # Event Manager
//!
//! Aggregates events from many producer threads into one bounded ring queue
//! and, on demand, drains them to a sink. If producers outrun the consumer
//! the queue silently sheds its oldest events; the lifetime counters keep
//! the loss observable (`received - published` bounds the number dropped or
//! still pending).
//!
//! ## Thread Safety
//!
//! Producers contend only on the queue's lock (O(1) per enqueue). Consumers
//! hold the sink's lock for the duration of a [`EventManager::flush`] or
//! [`EventManager::dump`], so concurrent consumers are safe and serialize
//! with each other while rendering.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::event::EventRef;
use crate::queue::RingQueue;
use crate::render::render_line;

/// Aggregates and publishes log events.
pub struct EventManager {
    /// Where rendered events are written.
    sink: Mutex<Box<dyn io::Write + Send>>,
    /// Where events wait between enqueue and flush.
    queue: RingQueue<EventRef>,
    /// Lifetime count of events handed to [`EventManager::enqueue`].
    received: AtomicUsize,
    /// Lifetime count of events successfully written to the sink.
    published: AtomicUsize,
}

impl EventManager {
    /// Creates a manager that can hold at most `capacity` events before
    /// older events are overwritten.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; a zero-capacity queue is a
    /// configuration error.
    #[must_use]
    pub fn new<W>(sink: W, capacity: usize) -> Self
    where
        W: io::Write + Send + 'static,
    {
        Self {
            sink: Mutex::new(Box::new(sink)),
            queue: RingQueue::new(capacity),
            received: AtomicUsize::new(0),
            published: AtomicUsize::new(0),
        }
    }

    /// Moves `event` into the queue.
    ///
    /// Always counts the arrival, even if the event is later overwritten
    /// before it can be flushed.
    pub fn enqueue(&self, event: EventRef) {
        self.queue.enqueue(event);
        self.received.fetch_add(1, Ordering::Relaxed);
    }

    /// Renders and writes up to `count` queued events in FIFO order,
    /// returning the number actually written. Stops early once the queue is
    /// empty; `count` is a ceiling, not a requirement.
    ///
    /// A sink write failure loses that event (it was already dequeued) but
    /// never fails the flush; the loss is reported through `tracing` and
    /// excluded from the published count.
    pub fn flush(&self, count: usize) -> usize {
        let mut sink = self.sink.lock();
        let mut written = 0;

        for _ in 0..count {
            let Some(event) = self.queue.dequeue() else {
                break;
            };

            match render_line(&*event, sink.as_mut()) {
                Ok(()) => {
                    self.published.fetch_add(1, Ordering::Relaxed);
                    written += 1;
                }
                Err(error) => {
                    tracing::warn!(%error, "event lost: sink write failed");
                }
            }
        }

        written
    }

    /// Drains everything currently queued; [`EventManager::flush`] with no
    /// upper bound.
    pub fn dump(&self) -> usize {
        self.flush(usize::MAX)
    }

    /// Discards all pending events without writing them. The published
    /// counter is untouched.
    pub fn clear(&self) {
        self.queue.clear();
    }

    /// Lifetime count of enqueued events, including any later overwritten.
    #[inline]
    #[must_use]
    pub fn received(&self) -> usize {
        self.received.load(Ordering::Relaxed)
    }

    /// Lifetime count of events written to the sink.
    #[inline]
    #[must_use]
    pub fn published(&self) -> usize {
        self.published.load(Ordering::Relaxed)
    }
}
