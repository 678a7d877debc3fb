//! The generic nullable scalar and its per-kind aliases.

use crate::error::NullError;
use crate::scalar::Scalar;

/// A primitive value paired with a validity flag.
///
/// `valid == false` means "no value"; the stored `value` is then the kind's
/// zero. A valid zero is a real value and never collapses into null.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Nullable<T> {
    pub value: T,
    pub valid: bool,
}

pub type Int8 = Nullable<i8>;
pub type Int16 = Nullable<i16>;
pub type Int32 = Nullable<i32>;
pub type Int64 = Nullable<i64>;
pub type Uint8 = Nullable<u8>;
pub type Uint16 = Nullable<u16>;
pub type Uint32 = Nullable<u32>;
pub type Uint64 = Nullable<u64>;
pub type Float32 = Nullable<f32>;
pub type Float64 = Nullable<f64>;

impl<T: Scalar> Nullable<T> {
    /// Stores both fields verbatim.
    pub fn new(value: T, valid: bool) -> Self {
        Self { value, valid }
    }

    /// An invalid instance holding zero.
    pub fn null() -> Self {
        Self::new(T::default(), false)
    }

    /// A valid instance holding `value`.
    pub fn from_value(value: T) -> Self {
        Self::new(value, true)
    }

    /// `None` becomes null, `Some(v)` becomes valid.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::from_value(v),
            None => Self::null(),
        }
    }

    pub fn value_or_zero(&self) -> T {
        if self.valid { self.value } else { T::default() }
    }

    /// Assigns `value` and marks the instance valid.
    pub fn set_valid(&mut self, value: T) {
        self.value = value;
        self.valid = true;
    }

    /// Returns `true` when the instance is null, for omit-if-empty policies.
    ///
    /// A valid zero is not "zero" here.
    pub fn is_zero(&self) -> bool {
        !self.valid
    }

    pub fn is_null(&self) -> bool {
        !self.valid
    }

    /// Borrows the contained value if valid.
    pub fn as_option(&self) -> Option<&T> {
        self.valid.then_some(&self.value)
    }

    pub fn to_option(&self) -> Option<T> {
        self.valid.then_some(self.value)
    }

    /// Applies a decode result: stores the decoded value, or resets to null
    /// and passes the error on.
    pub(crate) fn settle(&mut self, result: Result<Self, NullError>) -> Result<(), NullError> {
        match result {
            Ok(decoded) => {
                if !decoded.valid {
                    tracing::trace!(kind = T::KIND, "decoded null");
                }
                *self = decoded;
                Ok(())
            }
            Err(e) => {
                tracing::debug!(kind = T::KIND, error = %e, "nullable decode failed");
                *self = Self::null();
                Err(e)
            }
        }
    }
}

// -- Convenience conversions --

impl<T: Scalar> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

impl<T: Scalar> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T: Scalar> From<Nullable<T>> for Option<T> {
    fn from(n: Nullable<T>) -> Self {
        n.to_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction() {
        assert_eq!(Int16::new(5, false), Nullable { value: 5, valid: false });
        assert_eq!(Int16::from(5), Int16::new(5, true));
        assert_eq!(Uint8::from_option(None), Uint8::new(0, false));
        assert_eq!(Uint8::from_option(Some(9)), Uint8::new(9, true));
        assert_eq!(Float64::default(), Float64::null());
        assert_eq!(Float64::null(), Float64::new(0.0, false));
    }

    #[test]
    fn value_or_zero() {
        assert_eq!(Int32::new(42, false).value_or_zero(), 0);
        assert_eq!(Int32::from(42).value_or_zero(), 42);
        assert_eq!(Float32::from(-1.5).value_or_zero(), -1.5);
    }

    #[test]
    fn set_valid_marks_valid() {
        let mut n = Uint64::null();
        n.set_valid(0);
        assert!(n.valid);
        assert_eq!(n.value, 0);
        assert!(!n.is_zero());
    }

    #[test]
    fn valid_zero_is_not_zero() {
        assert!(!Int8::from(0).is_zero());
        assert!(Int8::null().is_zero());
        assert!(Int8::null().is_null());
    }

    #[test]
    fn option_projection() {
        let n = Uint16::from(7);
        assert_eq!(n.as_option(), Some(&7));
        assert_eq!(n.to_option(), Some(7));
        assert_eq!(Option::<u16>::from(n), Some(7));
        assert_eq!(Uint16::null().as_option(), None);
        assert_eq!(Option::<u16>::from(Uint16::new(3, false)), None);
        assert_eq!(Uint16::from(Some(3)), Uint16::from(3));
    }
}
