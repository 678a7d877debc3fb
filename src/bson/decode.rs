//! BSON decoding: bytes → `Element`.

use bytes::{Buf, Bytes};

use super::element::{Document, Element, RawElement};
use super::marker;
use crate::error::NullError;

/// Decodes a complete document, decoding every field.
pub fn decode_document(buf: &mut impl Buf) -> Result<Document, NullError> {
    let mut doc = Document::new();
    for (name, raw) in decode_raw_document(buf)? {
        doc.push(name, raw.element()?);
    }
    Ok(doc)
}

/// Splits a document into named raw fields without decoding their payloads.
pub fn decode_raw_document(buf: &mut impl Buf) -> Result<Vec<(String, RawElement)>, NullError> {
    let mut body = decode_framed(buf)?;
    let mut entries = Vec::new();
    while body.has_remaining() {
        let kind = body.get_u8();
        let name = decode_cstring(&mut body)?;
        let size = payload_size(kind, &body)?;
        ensure_remaining(&body, size)?;
        let data = body.copy_to_bytes(size);
        entries.push((name, RawElement { kind, data }));
    }
    Ok(entries)
}

/// Decodes a single payload of the given element type.
pub fn decode_payload(kind: u8, buf: &mut impl Buf) -> Result<Element, NullError> {
    match kind {
        marker::DOUBLE => {
            ensure_remaining(buf, 8)?;
            Ok(Element::Double(buf.get_f64_le()))
        }
        marker::INT_32 => {
            ensure_remaining(buf, 4)?;
            Ok(Element::Int32(buf.get_i32_le()))
        }
        marker::INT_64 => {
            ensure_remaining(buf, 8)?;
            Ok(Element::Int64(buf.get_i64_le()))
        }
        marker::STRING => decode_string(buf).map(Element::String),
        marker::DOCUMENT => decode_document(buf).map(Element::Document),
        marker::ARRAY => {
            let items = decode_document(buf)?;
            Ok(Element::Array(
                items.iter().map(|(_, v)| v.clone()).collect(),
            ))
        }
        marker::BOOLEAN => {
            ensure_remaining(buf, 1)?;
            match buf.get_u8() {
                0 => Ok(Element::Boolean(false)),
                1 => Ok(Element::Boolean(true)),
                b => Err(NullError::Document(format!("invalid boolean byte 0x{b:02X}"))),
            }
        }
        marker::NULL | marker::UNDEFINED => Ok(Element::Null),
        _ => Err(unsupported_kind(kind)),
    }
}

fn unsupported_kind(kind: u8) -> NullError {
    tracing::trace!(kind, "unsupported BSON element type");
    NullError::Document(format!("unsupported element type 0x{kind:02X}"))
}

/// Byte size of the payload that starts at the front of `buf`.
fn payload_size(kind: u8, buf: &Bytes) -> Result<usize, NullError> {
    match kind {
        marker::DOUBLE | marker::INT_64 => Ok(8),
        marker::INT_32 => Ok(4),
        marker::BOOLEAN => Ok(1),
        marker::NULL | marker::UNDEFINED => Ok(0),
        // length prefix excludes itself
        marker::STRING => Ok(4 + peek_length(buf)?),
        // length prefix includes itself
        marker::DOCUMENT | marker::ARRAY => peek_length(buf),
        _ => Err(unsupported_kind(kind)),
    }
}

fn peek_length(buf: &Bytes) -> Result<usize, NullError> {
    ensure_remaining(buf, 4)?;
    let mut prefix = &buf[..4];
    let len = prefix.get_i32_le();
    usize::try_from(len).map_err(|_| NullError::Document(format!("negative length {len}")))
}

/// Reads a length-prefixed, zero-terminated body and returns it without the
/// prefix and terminator.
fn decode_framed(buf: &mut impl Buf) -> Result<Bytes, NullError> {
    ensure_remaining(buf, 4)?;
    let len = buf.get_i32_le();
    if len < 5 {
        return Err(NullError::Document(format!("document length {len} is too short")));
    }
    let body_len = len as usize - 4;
    ensure_remaining(buf, body_len)?;
    let mut body = buf.copy_to_bytes(body_len);
    if body[body_len - 1] != marker::TERMINATOR {
        return Err(NullError::Document("document is not terminated".into()));
    }
    body.truncate(body_len - 1);
    Ok(body)
}

fn decode_string(buf: &mut impl Buf) -> Result<String, NullError> {
    ensure_remaining(buf, 4)?;
    let len = buf.get_i32_le();
    if len < 1 {
        return Err(NullError::Document(format!("string length {len} is too short")));
    }
    let len = len as usize;
    ensure_remaining(buf, len)?;
    let mut data = vec![0u8; len];
    buf.copy_to_slice(&mut data);
    if data.pop() != Some(marker::TERMINATOR) {
        return Err(NullError::Document("string is not terminated".into()));
    }
    String::from_utf8(data)
        .map_err(|e| NullError::Document(format!("invalid UTF-8 string: {e}")))
}

fn decode_cstring(buf: &mut Bytes) -> Result<String, NullError> {
    let end = buf
        .iter()
        .position(|&b| b == marker::TERMINATOR)
        .ok_or_else(|| NullError::Document("unterminated element name".into()))?;
    let name = buf.split_to(end);
    buf.advance(1);
    String::from_utf8(name.to_vec())
        .map_err(|e| NullError::Document(format!("invalid UTF-8 element name: {e}")))
}

fn ensure_remaining(buf: &impl Buf, needed: usize) -> Result<(), NullError> {
    if buf.remaining() < needed {
        Err(NullError::Document(format!(
            "need {needed} bytes but only {} remaining",
            buf.remaining()
        )))
    } else {
        Ok(())
    }
}
