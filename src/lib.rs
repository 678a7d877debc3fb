//! nullscalar: nullable scalar types with JSON, text and BSON codecs.
//!
//! A [`Nullable<T>`] pairs a primitive number with a validity flag, so "absent"
//! and "present and zero" stay distinct through every format. The ten kinds
//! ([`Int8`] through [`Float64`]) share one generic implementation.
//!
//! # Architecture
//!
//! - **`scalar`**: the sealed [`Scalar`] trait with per-kind parsing bounds and
//!   native document widths
//! - **`nullable`**: the value type, construction and `Option` interop
//! - **`json`**: structured-document codec and `serde` integration
//! - **`text`**: plain-text codec, `Display` and `FromStr`
//! - **`bson`**: binary-document codec (feature `bson`, on by default)
//!
//! # Example
//!
//! ```
//! use nullscalar::{Float64, Int16, Uint8};
//!
//! assert_eq!(Float64::from(3.0).encode_json().unwrap(), b"3");
//! assert_eq!(Uint8::new(0, false).encode_json().unwrap(), b"null");
//!
//! let mut n = Int16::from(1);
//! n.decode_text(b"null").unwrap();
//! assert!(n.is_null());
//! assert!(n.decode_text(b"32768").is_err());
//! ```

pub mod error;
pub mod json;
pub mod nullable;
pub mod scalar;
pub mod text;

#[cfg(feature = "bson")]
pub mod bson;

pub use error::NullError;
pub use nullable::{
    Float32, Float64, Int8, Int16, Int32, Int64, Nullable, Uint8, Uint16, Uint32, Uint64,
};
pub use scalar::Scalar;
