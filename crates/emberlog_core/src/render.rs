//! Textual rendering of events.
//!
//! One event becomes one line: UTC timestamp with microsecond precision, a
//! fixed-width severity tag, the payload, and a newline terminator. The
//! layout lives entirely in this module; the event model only knows how to
//! render its payload.

use std::io::{self, Write};

use chrono::{DateTime, Utc};

use crate::event::Event;

/// Timestamp layout: `2023-05-17 09:41:26.031842`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Renders `event` as one serialized line and writes it to `out`.
///
/// # Errors
///
/// Propagates any sink write failure.
pub fn render_line(event: &dyn Event, out: &mut dyn io::Write) -> io::Result<()> {
    let timestamp: DateTime<Utc> = event.timestamp().into();
    write!(
        out,
        "{} [{:<8}] ",
        timestamp.format(TIMESTAMP_FORMAT),
        event.severity()
    )?;
    event.render_payload(out)?;
    out.write_all(b"\n")
}
