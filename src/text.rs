//! Plain-text codec.
//!
//! Null encodes as the empty string. Both `""` and `"null"` decode to null.

use std::fmt;
use std::str::FromStr;

use crate::error::NullError;
use crate::nullable::Nullable;
use crate::scalar::Scalar;

impl<T: Scalar> Nullable<T> {
    /// Builds an instance from UTF-8 text.
    pub fn from_text(text: &[u8]) -> Result<Self, NullError> {
        let s = std::str::from_utf8(text)
            .map_err(|e| NullError::parse(String::from_utf8_lossy(text), T::KIND, e))?;
        match s {
            "" | "null" => Ok(Self::null()),
            _ => T::parse_text(s).map(Self::from_value),
        }
    }

    /// Decodes text in place. On error the instance is reset to null.
    pub fn decode_text(&mut self, text: &[u8]) -> Result<(), NullError> {
        let result = Self::from_text(text);
        self.settle(result)
    }

    /// Encodes to text: empty for null, the decimal value otherwise.
    pub fn encode_text(&self) -> Result<Vec<u8>, NullError> {
        if !self.valid {
            return Ok(Vec::new());
        }
        self.value.check_encodable()?;
        Ok(self.value.to_string().into_bytes())
    }
}

impl<T: Scalar> fmt::Display for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            write!(f, "{}", self.value)
        } else {
            Ok(())
        }
    }
}

impl<T: Scalar> FromStr for Nullable<T> {
    type Err = NullError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nullable::{
        Float32, Float64, Int8, Int16, Int32, Int64, Uint8, Uint16, Uint32, Uint64,
    };

    #[test]
    fn decode_null_forms() {
        let mut n = Int16::from(4);
        n.decode_text(b"null").unwrap();
        assert_eq!(n, Int16::new(0, false));

        let mut n = Int16::from(4);
        n.decode_text(b"").unwrap();
        assert_eq!(n, Int16::null());
    }

    #[test]
    fn decode_out_of_range() {
        let mut n = Int16::from(4);
        let err = n.decode_text(b"32768").unwrap_err();
        assert!(err.is_parse());
        assert_eq!(n, Int16::null());

        assert!(Uint8::from_text(b"300").unwrap_err().is_parse());
        assert!(Uint32::from_text(b"-1").unwrap_err().is_parse());
    }

    #[test]
    fn decode_values() {
        assert_eq!(Int16::from_text(b"-32768").unwrap(), Int16::from(i16::MIN));
        assert_eq!(Float64::from_text(b"6.02e23").unwrap(), Float64::from(6.02e23));
        assert_eq!(Int64::from_text(b"0").unwrap(), Int64::from(0));
    }

    #[test]
    fn decode_invalid_utf8() {
        let err = Int16::from_text(&[0xFF, 0x31]).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn decode_rejects_words() {
        assert!(Int16::from_text(b"NULL").unwrap_err().is_parse());
        assert!(Float32::from_text(b"inf").unwrap_err().is_parse());
    }

    #[test]
    fn encode_forms() {
        assert_eq!(Int16::null().encode_text().unwrap(), b"");
        assert_eq!(Int16::from(0).encode_text().unwrap(), b"0");
        assert_eq!(Float64::from(3.0).encode_text().unwrap(), b"3");
        assert_eq!(Float64::from(-2.5).encode_text().unwrap(), b"-2.5");
        assert!(
            Float64::from(f64::NAN)
                .encode_text()
                .unwrap_err()
                .is_unsupported()
        );
    }

    #[test]
    fn display_and_from_str() {
        assert_eq!(Uint8::from(200).to_string(), "200");
        assert_eq!(Uint8::null().to_string(), "");
        assert_eq!("17".parse::<Int64>().unwrap(), Int64::from(17));
        assert_eq!("null".parse::<Int64>().unwrap(), Int64::null());
        assert!("x".parse::<Int64>().is_err());
    }

    #[test]
    fn round_trip_all_kinds() {
        fn check<T: Scalar>(n: Nullable<T>) {
            let text = n.encode_text().unwrap();
            assert_eq!(Nullable::<T>::from_text(&text).unwrap(), n);
        }
        check(Int8::from(i8::MIN));
        check(Int16::from(i16::MAX));
        check(Int32::from(0));
        check(Int64::from(i64::MIN));
        check(Uint8::from(u8::MAX));
        check(Uint16::from(1));
        check(Uint32::from(u32::MAX));
        check(Uint64::from(u64::MAX));
        check(Float32::from(0.3));
        check(Float32::from(-1e-7));
        check(Float64::from(f64::MAX));
        check(Float64::from(5e-324));
        check(Uint64::null());
        check(Float32::null());
    }
}
