//! # Event Model
//!
//! The capability every log event provides: a severity, a timestamp, and a
//! payload renderer dispatched per concrete type. Concrete events embed an
//! [`EventHeader`] and implement [`Event`]; producers hand them to an
//! [`crate::pool::EventPool`] and receive an [`EventRef`] — the owning,
//! move-only handle whose drop returns the event's storage to the pool it
//! came from.

mod generic;
mod severity;

pub use generic::{GenericEvent, TextEvent, Value};
pub use severity::Severity;

use std::io;
use std::ops::{Deref, DerefMut};
use std::time::SystemTime;

/// Severity and timestamp state common to all events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EventHeader {
    severity: Severity,
    timestamp: SystemTime,
}

impl EventHeader {
    /// Creates a header with the given severity, timestamped now.
    #[must_use]
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            timestamp: SystemTime::now(),
        }
    }

    /// Creates a header with an explicit timestamp.
    #[must_use]
    pub const fn with_timestamp(severity: Severity, timestamp: SystemTime) -> Self {
        Self {
            severity,
            timestamp,
        }
    }

    /// Returns the severity.
    #[inline]
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the event time.
    #[inline]
    #[must_use]
    pub const fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    /// Resets the severity.
    #[inline]
    pub fn set_severity(&mut self, severity: Severity) {
        self.severity = severity;
    }

    /// Resets the event time.
    #[inline]
    pub fn set_timestamp(&mut self, timestamp: SystemTime) {
        self.timestamp = timestamp;
    }
}

impl Default for EventHeader {
    fn default() -> Self {
        Self::new(Severity::Debug)
    }
}

/// A structured log event.
///
/// Implementors store an [`EventHeader`] and render their payload to a sink;
/// the textual line layout around the payload belongs to the rendering layer
/// ([`crate::render::render_line`]).
pub trait Event: Send {
    /// Returns the common header state.
    fn header(&self) -> &EventHeader;

    /// Returns the common header state for mutation.
    fn header_mut(&mut self) -> &mut EventHeader;

    /// Writes the payload (and only the payload) to `out`.
    fn render_payload(&self, out: &mut dyn io::Write) -> io::Result<()>;

    /// Returns the event severity.
    fn severity(&self) -> Severity {
        self.header().severity()
    }

    /// Resets the event severity.
    fn set_severity(&mut self, severity: Severity) {
        self.header_mut().set_severity(severity);
    }

    /// Returns the event time.
    fn timestamp(&self) -> SystemTime {
        self.header().timestamp()
    }

    /// Resets the event time.
    fn set_timestamp(&mut self, timestamp: SystemTime) {
        self.header_mut().set_timestamp(timestamp);
    }
}

/// Storage block holding a live event, bound to its release action.
///
/// Implemented by the pool's slot type; `release` destroys the payload and
/// returns the block to the free list of the pool that issued it.
pub(crate) trait ErasedSlot: Send {
    /// The live event stored in this block.
    fn event(&self) -> &(dyn Event + 'static);

    /// The live event stored in this block, for mutation.
    fn event_mut(&mut self) -> &mut (dyn Event + 'static);

    /// Destroys the payload and recycles the block's storage.
    fn release(self: Box<Self>);
}

/// Owning handle to one pooled event.
///
/// There is exactly one live owner at a time; ownership transfers by move
/// and dropping the handle is the only way the event's storage is reclaimed.
/// Dereferences to [`Event`], so severity/timestamp resets and payload
/// rendering are available directly on the handle.
pub struct EventRef {
    slot: Option<Box<dyn ErasedSlot>>,
}

impl EventRef {
    pub(crate) fn new(slot: Box<dyn ErasedSlot>) -> Self {
        Self { slot: Some(slot) }
    }
}

impl Deref for EventRef {
    type Target = dyn Event;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.slot
            .as_ref()
            .expect("event handle used after release")
            .event()
    }
}

impl DerefMut for EventRef {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.slot
            .as_mut()
            .expect("event handle used after release")
            .event_mut()
    }
}

impl Drop for EventRef {
    fn drop(&mut self) {
        if let Some(slot) = self.slot.take() {
            slot.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_header_defaults() {
        let header = EventHeader::default();
        assert_eq!(header.severity(), Severity::Debug);
    }

    #[test]
    fn test_header_resets() {
        let mut header = EventHeader::new(Severity::Info);
        header.set_severity(Severity::Fatal);
        assert_eq!(header.severity(), Severity::Fatal);

        let epoch = SystemTime::UNIX_EPOCH + Duration::from_secs(42);
        header.set_timestamp(epoch);
        assert_eq!(header.timestamp(), epoch);
    }

    #[test]
    fn test_trait_accessors_delegate_to_header() {
        let mut event = TextEvent::new("payload");
        event.set_severity(Severity::Alert);
        assert_eq!(event.severity(), Severity::Alert);
        assert_eq!(event.header().severity(), Severity::Alert);
    }
}
