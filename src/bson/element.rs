//! Binary-document value types.

use std::fmt;

use bytes::{Buf, Bytes, BytesMut};

use super::{decode, encode, marker};
use crate::error::NullError;

/// A decoded document element.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Double(f64),
    String(String),
    Document(Document),
    Array(Vec<Element>),
    Boolean(bool),
    Null,
    Int32(i32),
    Int64(i64),
}

impl Element {
    /// The element type byte written before the element's name.
    pub fn kind(&self) -> u8 {
        match self {
            Self::Double(_) => marker::DOUBLE,
            Self::String(_) => marker::STRING,
            Self::Document(_) => marker::DOCUMENT,
            Self::Array(_) => marker::ARRAY,
            Self::Boolean(_) => marker::BOOLEAN,
            Self::Null => marker::NULL,
            Self::Int32(_) => marker::INT_32,
            Self::Int64(_) => marker::INT_64,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Double(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Document(d) => write!(f, "<document of {} fields>", d.len()),
            Self::Array(items) => write!(f, "<array of {} items>", items.len()),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::Int32(i) => write!(f, "{i}"),
            Self::Int64(i) => write!(f, "{i}"),
        }
    }
}

/// An ordered list of named elements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    entries: Vec<(String, Element)>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `name`, replacing an existing entry in place.
    pub fn insert(&mut self, name: impl Into<String>, element: impl Into<Element>) {
        let name = name.into();
        let element = element.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = element,
            None => self.entries.push((name, element)),
        }
    }

    /// Appends without checking for an existing entry of the same name.
    pub(crate) fn push(&mut self, name: String, element: Element) {
        self.entries.push((name, element));
    }

    pub fn get(&self, name: &str) -> Option<&Element> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Element)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, Element)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, Element)>>(iter: I) -> Self {
        let mut doc = Self::new();
        for (k, v) in iter {
            doc.insert(k, v);
        }
        doc
    }
}

/// One field of a document, not yet decoded: its type byte and payload bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct RawElement {
    pub kind: u8,
    pub data: Bytes,
}

impl RawElement {
    pub fn from_element(element: &Element) -> Self {
        let mut buf = BytesMut::new();
        encode::encode_payload(&mut buf, element);
        Self {
            kind: element.kind(),
            data: buf.freeze(),
        }
    }

    /// Decodes the payload according to `kind`.
    pub fn element(&self) -> Result<Element, NullError> {
        let mut data = self.data.clone();
        let element = decode::decode_payload(self.kind, &mut data)?;
        if data.has_remaining() {
            return Err(NullError::Document(format!(
                "{} trailing bytes after element of type 0x{:02X}",
                data.remaining(),
                self.kind
            )));
        }
        Ok(element)
    }
}

// -- Convenience conversions --

impl From<f64> for Element {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<i32> for Element {
    fn from(v: i32) -> Self {
        Self::Int32(v)
    }
}

impl From<i64> for Element {
    fn from(v: i64) -> Self {
        Self::Int64(v)
    }
}

impl From<bool> for Element {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Element {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Element {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Document> for Element {
    fn from(d: Document) -> Self {
        Self::Document(d)
    }
}
