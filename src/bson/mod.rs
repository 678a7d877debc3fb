//! Binary-document (BSON) codec.
//!
//! Encoding maps a valid scalar onto the document's native numeric element for
//! its width, and null onto the null element. Decoding converts the raw field
//! into a JSON value and runs it through the structured-document decode path,
//! so both formats accept exactly the same inputs.

mod decode;
mod element;
mod encode;
pub mod marker;

pub use decode::{decode_document, decode_payload, decode_raw_document};
pub use element::{Document, Element, RawElement};
pub use encode::{encode_document, encode_element, encode_payload};

use serde_json::{Map, Number, Value};

use crate::error::NullError;
use crate::nullable::Nullable;
use crate::scalar::Scalar;

impl<T: Scalar> Nullable<T> {
    /// Builds an instance from a raw document field.
    pub fn from_bson(raw: &RawElement) -> Result<Self, NullError> {
        let element = raw.element()?;
        let value = element_to_json::<T>(&element)?;
        Self::from_json(&value)
    }

    /// Decodes a raw document field in place. On error the instance is reset
    /// to null.
    pub fn set_bson(&mut self, raw: &RawElement) -> Result<(), NullError> {
        let result = Self::from_bson(raw);
        self.settle(result)
    }

    /// The element to store for this value: null, or the native numeric form.
    pub fn get_bson(&self) -> Result<Element, NullError> {
        if !self.valid {
            return Ok(Element::Null);
        }
        self.value.check_encodable()?;
        self.value.to_element()
    }
}

fn element_to_json<T: Scalar>(element: &Element) -> Result<Value, NullError> {
    Ok(match element {
        Element::Null => Value::Null,
        Element::Boolean(b) => Value::Bool(*b),
        Element::Int32(i) => Value::from(*i),
        Element::Int64(i) => Value::from(*i),
        Element::Double(f) => Number::from_f64(*f)
            .map(Value::Number)
            .ok_or_else(|| NullError::mismatch(T::KIND, format!("non-finite double {element}")))?,
        Element::String(s) => Value::String(s.clone()),
        Element::Array(items) => Value::Array(
            items
                .iter()
                .map(element_to_json::<T>)
                .collect::<Result<_, _>>()?,
        ),
        Element::Document(doc) => Value::Object(
            doc.iter()
                .map(|(k, v)| Ok((k.to_owned(), element_to_json::<T>(v)?)))
                .collect::<Result<Map<_, _>, NullError>>()?,
        ),
    })
}
