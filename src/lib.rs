//! qrgen - QR code symbol encoder
//!
//! A pure Rust QR code encoding library implementing ISO/IEC 18004
//! Model 2, versions 1-40: segment classification, Reed-Solomon error
//! correction, mask selection by penalty minimization, and exact binary
//! layout. Rendering helpers turn the module matrix into pixel grids,
//! grayscale images, or terminal art.
//!
//! ```
//! use qrgen::{ECLevel, encode};
//!
//! let symbol = encode(b"HELLO WORLD", ECLevel::M).unwrap();
//! assert_eq!(symbol.dimension, 21);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR symbol encoding pipeline (segments, codewords, matrix, masking)
pub mod encoder;
/// Core data structures (QrSymbol, BitMatrix, Version, ECLevel)
pub mod models;
/// Raster and terminal rendering helpers
pub mod render;

pub use encoder::{EncodeError, EncoderOptions};
pub use models::{BitMatrix, ECLevel, MaskPattern, QrSymbol, Version};

/// Encode one byte segment with default options at the given EC level.
pub fn encode(data: &[u8], ec_level: ECLevel) -> Result<QrSymbol, EncodeError> {
    Encoder::with_options(EncoderOptions {
        ec_level,
        ..EncoderOptions::default()
    })?
    .encode(data)
}

/// Encode pre-split byte segments, each classified independently, with
/// default options at the given EC level.
pub fn encode_segments(segments: &[&[u8]], ec_level: ECLevel) -> Result<QrSymbol, EncodeError> {
    Encoder::with_options(EncoderOptions {
        ec_level,
        ..EncoderOptions::default()
    })?
    .encode_segments(segments)
}

/// Encoder holding a validated configuration.
///
/// Each call owns its scratch state, so one encoder can be shared freely
/// across threads.
pub struct Encoder {
    options: EncoderOptions,
}

impl Encoder {
    /// Create an encoder with default options
    pub fn new() -> Self {
        Self {
            options: EncoderOptions::default(),
        }
    }

    /// Create an encoder from options, validating them up front
    pub fn with_options(options: EncoderOptions) -> Result<Self, EncodeError> {
        Ok(Self {
            options: options.validated()?,
        })
    }

    /// The validated configuration in effect
    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Encode a single byte segment
    pub fn encode(&self, data: &[u8]) -> Result<QrSymbol, EncodeError> {
        encoder::encode_segments(&[data], &self.options)
    }

    /// Encode multiple pre-split segments
    pub fn encode_segments(&self, segments: &[&[u8]]) -> Result<QrSymbol, EncodeError> {
        encoder::encode_segments(segments, &self.options)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
