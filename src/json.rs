//! Structured-document (JSON) codec.
//!
//! Decoding works on an already-parsed [`serde_json::Value`] and dispatches on
//! its kind:
//!
//! - `null` and `""` decode to null
//! - numbers are narrowed to the target kind
//! - non-empty strings are parsed as base-10 numbers
//! - objects are read as an embedded `{"value": n, "valid": b}` shape
//! - anything else is a type mismatch
//!
//! Encoding emits `null` for invalid instances and the shortest round-trip
//! decimal form otherwise.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use serde_json::{Map, Value};

use crate::error::NullError;
use crate::nullable::Nullable;
use crate::scalar::Scalar;

const NULL_LITERAL: &[u8] = b"null";

impl<T: Scalar> Nullable<T> {
    /// Builds an instance from a parsed JSON value.
    pub fn from_json(value: &Value) -> Result<Self, NullError> {
        match value {
            Value::Null => Ok(Self::null()),
            Value::Number(n) => Self::from_json_number(value, n),
            Value::String(s) if s.is_empty() => Ok(Self::null()),
            Value::String(s) => T::parse_text(s).map(Self::from_value),
            Value::Object(map) => Self::from_json_object(map),
            Value::Bool(_) | Value::Array(_) => {
                Err(NullError::mismatch(T::KIND, json_kind(value)))
            }
        }
    }

    /// Parses JSON text and decodes it.
    pub fn parse_json(data: &[u8]) -> Result<Self, NullError> {
        let value: Value = serde_json::from_slice(data)?;
        Self::from_json(&value)
    }

    /// Decodes a parsed JSON value in place.
    ///
    /// On error the instance is reset to null.
    pub fn decode_json(&mut self, value: &Value) -> Result<(), NullError> {
        let result = Self::from_json(value);
        self.settle(result)
    }

    /// Decodes JSON text in place. On error the instance is reset to null.
    pub fn decode_json_slice(&mut self, data: &[u8]) -> Result<(), NullError> {
        let result = Self::parse_json(data);
        self.settle(result)
    }

    /// Encodes to JSON text: `null`, or the decimal form of the value.
    pub fn encode_json(&self) -> Result<Vec<u8>, NullError> {
        if !self.valid {
            return Ok(NULL_LITERAL.to_vec());
        }
        self.value.check_encodable()?;
        Ok(self.value.to_string().into_bytes())
    }

    fn from_json_number(value: &Value, n: &serde_json::Number) -> Result<Self, NullError> {
        T::from_number(n)
            .map(Self::from_value)
            .ok_or_else(|| NullError::mismatch(T::KIND, format!("number {value}")))
    }

    fn from_json_object(map: &Map<String, Value>) -> Result<Self, NullError> {
        match lookup(map, "valid") {
            None | Some(Value::Bool(true)) => {}
            Some(Value::Bool(false)) => return Ok(Self::null()),
            Some(other) => {
                return Err(NullError::mismatch(
                    T::KIND,
                    format!("{} validity flag", json_kind(other)),
                ));
            }
        }

        let inner = lookup(map, "value")
            .or_else(|| lookup(map, T::KIND))
            .ok_or_else(|| NullError::mismatch(T::KIND, "object without a value field"))?;

        match inner {
            Value::Null => Ok(Self::null()),
            Value::Number(n) => Self::from_json_number(inner, n),
            other => Err(NullError::mismatch(T::KIND, json_kind(other))),
        }
    }
}

/// Case-insensitive key lookup, matching `Float64`/`float64`/`FLOAT64`.
fn lookup<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    map.get(key).or_else(|| {
        map.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// -- serde integration --

/// Text formats receive the same decimal token as [`Nullable::encode_json`]
/// (`3`, never `3.0` or `1e+21`); binary formats get the native number.
impl<T: Scalar> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.valid {
            return serializer.serialize_none();
        }
        self.value.check_encodable().map_err(S::Error::custom)?;
        if !serializer.is_human_readable() {
            return self.value.serialize(serializer);
        }
        RawValue::from_string(self.value.to_string())
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

/// A missing field decodes to null, so `skip_serializing_if = "Nullable::is_zero"`
/// round-trips.
impl<'de, T: Scalar> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<Value>::deserialize(deserializer)? {
            Some(value) => Self::from_json(&value).map_err(D::Error::custom),
            None => Ok(Self::null()),
        }
    }
}
