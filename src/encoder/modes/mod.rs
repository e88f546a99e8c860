//! QR code data mode encoders
//!
//! This module contains the payload packers for the supported data modes:
//! - Numeric: Efficient encoding for digits (0-9)
//! - Alphanumeric: Letters, numbers, and symbols
//! - Byte: 8-bit data (UTF-8, binary, etc.)

pub mod alphanumeric;
pub mod byte;
pub mod numeric;

pub use alphanumeric::AlphanumericEncoder;
pub use byte::ByteEncoder;
pub use numeric::NumericEncoder;
