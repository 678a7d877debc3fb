//! Primitive kinds that can be wrapped in a [`Nullable`](crate::Nullable).
//!
//! Each kind carries its own parsing bounds: text and JSON numbers are parsed
//! directly at the target width and signedness, so an out-of-range input fails
//! instead of wrapping or saturating.

use std::fmt;

use serde::Serialize;
use serde_json::Number;

#[cfg(feature = "bson")]
use crate::bson::Element;
use crate::error::NullError;

mod private {
    pub trait Sealed {}
}

/// A primitive numeric type with a defined zero, text form and document mapping.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32`, `u64`, `f32`
/// and `f64`. The trait is sealed.
pub trait Scalar:
    Copy + Default + PartialEq + fmt::Debug + fmt::Display + Serialize + private::Sealed
{
    /// Kind name used in error messages and nested-object keys.
    const KIND: &'static str;

    /// Parses a base-10 number constrained to this kind's range.
    fn parse_text(text: &str) -> Result<Self, NullError>;

    /// Narrows a JSON number to this kind, or `None` if it does not fit.
    fn from_number(n: &Number) -> Option<Self>;

    /// Rejects values that have no textual or document representation.
    fn check_encodable(self) -> Result<(), NullError> {
        Ok(())
    }

    /// Maps the value onto the binary document's native numeric element.
    #[cfg(feature = "bson")]
    fn to_element(self) -> Result<Element, NullError>;
}

macro_rules! impl_int_scalar {
    ($($ty:ty => $kind:literal, |$v:ident| $element:expr;)+) => {$(
        impl private::Sealed for $ty {}

        impl Scalar for $ty {
            const KIND: &'static str = $kind;

            fn parse_text(text: &str) -> Result<Self, NullError> {
                text.parse::<$ty>()
                    .map_err(|e| NullError::parse(text, $kind, e))
            }

            fn from_number(n: &Number) -> Option<Self> {
                if let Some(i) = n.as_i64() {
                    return <$ty>::try_from(i).ok();
                }
                n.as_u64().and_then(|u| <$ty>::try_from(u).ok())
            }

            #[cfg(feature = "bson")]
            fn to_element(self) -> Result<Element, NullError> {
                let $v = self;
                Ok($element)
            }
        }
    )+};
}

macro_rules! impl_float_scalar {
    ($($ty:ty => $kind:literal;)+) => {$(
        impl private::Sealed for $ty {}

        impl Scalar for $ty {
            const KIND: &'static str = $kind;

            fn parse_text(text: &str) -> Result<Self, NullError> {
                let v = text
                    .parse::<$ty>()
                    .map_err(|e| NullError::parse(text, $kind, e))?;
                if v.is_finite() {
                    Ok(v)
                } else {
                    Err(NullError::parse(text, $kind, "value is not finite"))
                }
            }

            fn from_number(n: &Number) -> Option<Self> {
                // f64 -> f32 overflows to infinity rather than failing
                let v = n.as_f64()? as $ty;
                v.is_finite().then_some(v)
            }

            fn check_encodable(self) -> Result<(), NullError> {
                if self.is_finite() {
                    Ok(())
                } else {
                    Err(NullError::unsupported(self))
                }
            }

            #[cfg(feature = "bson")]
            fn to_element(self) -> Result<Element, NullError> {
                Ok(Element::Double(f64::from(self)))
            }
        }
    )+};
}

impl_int_scalar! {
    i8 => "int8", |v| Element::Int32(i32::from(v));
    i16 => "int16", |v| Element::Int32(i32::from(v));
    i32 => "int32", |v| Element::Int32(v);
    i64 => "int64", |v| Element::Int64(v);
    u8 => "uint8", |v| Element::Int32(i32::from(v));
    u16 => "uint16", |v| Element::Int32(i32::from(v));
    u32 => "uint32", |v| Element::Int64(i64::from(v));
    u64 => "uint64", |v| Element::Int64(i64::try_from(v).map_err(|_| {
        NullError::unsupported(format!("{v} exceeds the signed 64-bit document range"))
    })?);
}

impl_float_scalar! {
    f32 => "float32";
    f64 => "float64";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_respects_width() {
        assert_eq!(i16::parse_text("-32768").unwrap(), i16::MIN);
        assert!(i16::parse_text("32768").unwrap_err().is_parse());
        assert!(u8::parse_text("300").unwrap_err().is_parse());
        assert!(u8::parse_text("-1").unwrap_err().is_parse());
        assert!(i8::parse_text("128").unwrap_err().is_parse());
        assert_eq!(u64::parse_text("18446744073709551615").unwrap(), u64::MAX);
        assert!(u32::parse_text("4294967296").unwrap_err().is_parse());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(i32::parse_text("12a").unwrap_err().is_parse());
        assert!(i32::parse_text(" 12").unwrap_err().is_parse());
        assert!(i32::parse_text("1.5").unwrap_err().is_parse());
    }

    #[test]
    fn parse_float_rejects_non_finite() {
        assert_eq!(f64::parse_text("2.5").unwrap(), 2.5);
        assert!(f64::parse_text("NaN").unwrap_err().is_parse());
        assert!(f64::parse_text("inf").unwrap_err().is_parse());
        assert!(f64::parse_text("1e400").unwrap_err().is_parse());
        assert!(f32::parse_text("1e39").unwrap_err().is_parse());
    }

    #[test]
    fn number_narrowing() {
        assert_eq!(u8::from_number(&Number::from(255)), Some(255));
        assert_eq!(u8::from_number(&Number::from(256)), None);
        assert_eq!(u8::from_number(&Number::from(-1)), None);
        assert_eq!(i64::from_number(&Number::from(u64::MAX)), None);
        assert_eq!(u64::from_number(&Number::from(u64::MAX)), Some(u64::MAX));
        let fractional = Number::from_f64(1.5).unwrap();
        assert_eq!(i32::from_number(&fractional), None);
        assert_eq!(f32::from_number(&fractional), Some(1.5));
        let huge = Number::from_f64(1e39).unwrap();
        assert_eq!(f32::from_number(&huge), None);
        assert_eq!(f64::from_number(&Number::from(7)), Some(7.0));
    }

    #[test]
    fn encodable_floats() {
        assert!(1.0f64.check_encodable().is_ok());
        assert!(f64::NAN.check_encodable().unwrap_err().is_unsupported());
        assert!(f32::NEG_INFINITY.check_encodable().unwrap_err().is_unsupported());
        assert!(i8::MIN.check_encodable().is_ok());
    }

    #[cfg(feature = "bson")]
    #[test]
    fn native_document_widths() {
        assert_eq!(7u8.to_element().unwrap(), Element::Int32(7));
        assert_eq!(u32::MAX.to_element().unwrap(), Element::Int64(4_294_967_295));
        assert_eq!(1.5f32.to_element().unwrap(), Element::Double(1.5));
        assert!(u64::MAX.to_element().unwrap_err().is_unsupported());
        assert_eq!(
            (i64::MAX as u64).to_element().unwrap(),
            Element::Int64(i64::MAX)
        );
    }
}
