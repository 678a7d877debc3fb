//! BSON element type bytes.

// Numeric
pub const DOUBLE: u8 = 0x01;
pub const INT_32: u8 = 0x10;
pub const INT_64: u8 = 0x12;

// Text and containers
pub const STRING: u8 = 0x02;
pub const DOCUMENT: u8 = 0x03;
pub const ARRAY: u8 = 0x04;

pub const BOOLEAN: u8 = 0x08;

// Null and its deprecated alias
pub const NULL: u8 = 0x0A;
pub const UNDEFINED: u8 = 0x06;

/// Terminates names (cstrings) and documents.
pub const TERMINATOR: u8 = 0x00;
