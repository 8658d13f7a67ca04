//! Ready-made event payloads: plain text and heterogeneous field lists.

use std::fmt;
use std::io::{self, Write};

use super::{Event, EventHeader, Severity};

/// A single value in a [`GenericEvent`] field list.
///
/// Values render through their default formatting; composing a message is a
/// matter of interleaving text fields with data fields.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// An unsigned integer.
    UInt(u64),
    /// A floating point number.
    Float(f64),
    /// A text fragment.
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::UInt(u64::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// An event carrying an ordered list of mixed-type fields.
///
/// Rendering concatenates the default formatting of each field in order,
/// with no separator:
///
/// ```rust,ignore
/// let event = GenericEvent::new(Severity::Info)
///     .field("this is an int: ")
///     .field(21)
///     .field(", this is a double: ")
///     .field(7.8);
/// // renders as "this is an int: 21, this is a double: 7.8"
/// ```
#[derive(Debug)]
pub struct GenericEvent {
    header: EventHeader,
    fields: Vec<Value>,
}

impl GenericEvent {
    /// Creates an empty event with the given severity.
    #[must_use]
    pub fn new(severity: Severity) -> Self {
        Self {
            header: EventHeader::new(severity),
            fields: Vec::new(),
        }
    }

    /// Creates an event from an already-built field list.
    #[must_use]
    pub fn with_fields(severity: Severity, fields: Vec<Value>) -> Self {
        Self {
            header: EventHeader::new(severity),
            fields,
        }
    }

    /// Appends a field (builder style).
    #[must_use]
    pub fn field(mut self, value: impl Into<Value>) -> Self {
        self.fields.push(value.into());
        self
    }

    /// Appends a field in place.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.fields.push(value.into());
    }

    /// The captured fields, in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[Value] {
        &self.fields
    }
}

impl Event for GenericEvent {
    fn header(&self) -> &EventHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut EventHeader {
        &mut self.header
    }

    fn render_payload(&self, out: &mut dyn io::Write) -> io::Result<()> {
        for field in &self.fields {
            write!(out, "{field}")?;
        }
        Ok(())
    }
}

/// An event carrying a single text message.
#[derive(Debug)]
pub struct TextEvent {
    header: EventHeader,
    text: String,
}

impl TextEvent {
    /// Creates a debug-severity event with the given message.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            header: EventHeader::default(),
            text: text.into(),
        }
    }

    /// Creates an event with an explicit severity.
    #[must_use]
    pub fn with_severity(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            header: EventHeader::new(severity),
            text: text.into(),
        }
    }

    /// The message text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Event for TextEvent {
    fn header(&self) -> &EventHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut EventHeader {
        &mut self.header
    }

    fn render_payload(&self, out: &mut dyn io::Write) -> io::Result<()> {
        out.write_all(self.text.as_bytes())
    }
}
