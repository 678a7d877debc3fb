//! BSON encoding: `Element` → bytes.
//!
//! All multi-byte integers and doubles are little-endian.

use bytes::{BufMut, BytesMut};

use super::element::{Document, Element};
use super::marker;

/// Encodes a length-prefixed, zero-terminated document.
pub fn encode_document(buf: &mut BytesMut, doc: &Document) {
    encode_framed(buf, |buf| {
        for (name, element) in doc.iter() {
            encode_element(buf, name, element);
        }
    });
}

/// Encodes one named element: type byte, name, payload.
pub fn encode_element(buf: &mut BytesMut, name: &str, element: &Element) {
    buf.put_u8(element.kind());
    encode_cstring(buf, name);
    encode_payload(buf, element);
}

/// Encodes only the payload of an element, without type byte or name.
pub fn encode_payload(buf: &mut BytesMut, element: &Element) {
    match element {
        Element::Double(v) => buf.put_f64_le(*v),
        Element::String(s) => encode_string(buf, s),
        Element::Document(d) => encode_document(buf, d),
        Element::Array(items) => encode_array(buf, items),
        Element::Boolean(b) => buf.put_u8(u8::from(*b)),
        Element::Null => {}
        Element::Int32(v) => buf.put_i32_le(*v),
        Element::Int64(v) => buf.put_i64_le(*v),
    }
}

/// Arrays are documents keyed by decimal index.
fn encode_array(buf: &mut BytesMut, items: &[Element]) {
    encode_framed(buf, |buf| {
        for (i, item) in items.iter().enumerate() {
            encode_element(buf, &i.to_string(), item);
        }
    });
}

/// Writes an i32 total length (including itself), the body, then a terminator.
fn encode_framed(buf: &mut BytesMut, body: impl FnOnce(&mut BytesMut)) {
    let start = buf.len();
    buf.put_i32_le(0);
    body(buf);
    buf.put_u8(marker::TERMINATOR);
    let len = (buf.len() - start) as i32;
    buf[start..start + 4].copy_from_slice(&len.to_le_bytes());
}

/// String payload: i32 byte length (including the terminator), bytes, 0x00.
fn encode_string(buf: &mut BytesMut, value: &str) {
    buf.put_i32_le(value.len() as i32 + 1);
    buf.put_slice(value.as_bytes());
    buf.put_u8(marker::TERMINATOR);
}

fn encode_cstring(buf: &mut BytesMut, value: &str) {
    debug_assert!(!value.contains('\0'), "element names must not contain NUL");
    buf.put_slice(value.as_bytes());
    buf.put_u8(marker::TERMINATOR);
}
