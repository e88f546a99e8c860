//! QR code encoding modules
//!
//! This module contains all the logic for turning byte segments into a
//! finished symbol matrix:
//! - Segment classification and data mode packing (numeric, alphanumeric, byte)
//! - Version selection and codeword assembly
//! - Reed-Solomon error correction and block interleaving
//! - Matrix construction, mask trials, format/version information

/// MSB-first bit packer feeding the codeword builder
pub mod bitstream;
/// Base matrix construction and zig-zag data placement
pub mod builder;
/// Codeword assembly, padding, and block interleaving
pub mod codewords;
/// Format and version information placement
pub mod format;
/// GF(256) arithmetic and generator polynomials
pub mod gf256;
/// Mask trials and penalty scoring
pub mod mask;
/// Data mode payload packers (numeric, alphanumeric, byte)
pub mod modes;
/// Systematic Reed-Solomon encoder
pub mod reed_solomon;
/// Input segment classification
pub mod segment;
/// QR specification tables (blocks, alignment, format/version words)
pub mod tables;
/// Smallest-fitting version search
pub mod version_select;

use log::debug;
use thiserror::Error;

use crate::models::{ECLevel, QrSymbol};
use builder::MatrixBuilder;
use segment::Segment;

/// Encoding failures; both kinds are permanent and yield no matrix at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Input or configuration rejected before any computation
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// No version 1-40 holds the encoded bits at the requested EC level
    #[error("data exceeds version 40 capacity at the requested error correction level")]
    CapacityExceeded,
}

/// Encoder configuration; see [`EncoderOptions::validated`] for the ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderOptions {
    /// Error correction level (default M)
    pub ec_level: ECLevel,
    /// Pixels per module when rasterizing, 1-100
    pub module_size: usize,
    /// Quiet zone in pixels, at least 4 modules wide, at most 400
    pub quiet_zone: usize,
    /// ECI assignment value, `None` or 0-999999
    pub eci: Option<u32>,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            ec_level: ECLevel::M,
            module_size: 2,
            quiet_zone: 8,
            eci: None,
        }
    }
}

impl EncoderOptions {
    /// Range-check the configuration. A quiet zone below the 4-module
    /// minimum is raised to it rather than rejected.
    pub fn validated(mut self) -> Result<Self, EncodeError> {
        if !(1..=100).contains(&self.module_size) {
            return Err(EncodeError::InvalidArgument(
                "module size must be 1-100 pixels",
            ));
        }
        if self.quiet_zone > 400 {
            return Err(EncodeError::InvalidArgument(
                "quiet zone must be at most 400 pixels",
            ));
        }
        let minimum = 4 * self.module_size;
        if self.quiet_zone < minimum {
            self.quiet_zone = minimum;
        }
        if let Some(value) = self.eci {
            if value > 999_999 {
                return Err(EncodeError::InvalidArgument(
                    "ECI assignment value must be 0-999999",
                ));
            }
        }
        Ok(self)
    }
}

/// Encode byte segments into a symbol.
///
/// Each segment is classified independently; the smallest version holding
/// all of them at the requested EC level is used. All scratch state lives
/// in this call, so concurrent invocations never interfere.
pub fn encode_segments(data: &[&[u8]], options: &EncoderOptions) -> Result<QrSymbol, EncodeError> {
    let options = options.validated()?;
    if data.is_empty() {
        return Err(EncodeError::InvalidArgument("no input segments"));
    }
    if data.iter().any(|segment| segment.is_empty()) {
        return Err(EncodeError::InvalidArgument("empty input segment"));
    }

    let segments: Vec<Segment> = data.iter().map(|bytes| Segment::classify(bytes)).collect();
    let (version, plan) = version_select::select_version(&segments, options.ec_level, options.eci)
        .ok_or(EncodeError::CapacityExceeded)?;

    let data_codewords =
        codewords::build_data_codewords(&segments, version.number(), options.eci, &plan);
    let stream = codewords::interleave(&data_codewords, &plan);

    let mut builder = MatrixBuilder::new(version);
    builder.place_codewords(&stream);

    let (mask_pattern, mut matrix) = mask::select_mask(&builder);
    format::write_format_info(&mut matrix, options.ec_level, mask_pattern);
    format::write_version_info(&mut matrix, version);

    let dimension = version.dimension();
    debug!(
        "encoded {} segment(s): version {}, {}x{}, mask {}",
        segments.len(),
        version.number(),
        dimension,
        dimension,
        mask_pattern.index()
    );

    Ok(QrSymbol {
        matrix,
        version,
        dimension,
        image_dimension: 2 * options.quiet_zone + dimension * options.module_size,
        ec_level: options.ec_level,
        mask: mask_pattern,
    })
}
