//! Format and version information placement
//!
//! The 15-bit format word (EC level + mask, BCH-protected and XOR-masked)
//! and the 18-bit version word (versions 7+) come from the precomputed
//! tables; this module only writes their bits into the fixed locations of
//! a committed matrix.

use crate::encoder::tables::{FORMAT_INFO_WORDS, VERSION_INFO_WORDS};
use crate::models::{BitMatrix, ECLevel, MaskPattern, Version};

/// Write both copies of the format word for the committed EC level + mask.
pub fn write_format_info(matrix: &mut BitMatrix, ec_level: ECLevel, mask: MaskPattern) {
    let d = matrix.width();
    let word = FORMAT_INFO_WORDS[((ec_level.format_bits() as usize) << 3) | mask.index()];
    let bit = |i: usize| (word >> i) & 1 == 1;

    // Copy around the top-left finder: bits 0-5 up column 8, bit 6 past
    // the timing row, bits 7-8 across the corner, bits 9-14 out along
    // row 8 toward the left edge.
    for i in 0..6 {
        matrix.set(8, i, bit(i));
    }
    matrix.set(8, 7, bit(6));
    matrix.set(8, 8, bit(7));
    matrix.set(7, 8, bit(8));
    for i in 9..15 {
        matrix.set(14 - i, 8, bit(i));
    }

    // Second copy, split between the top-right and bottom-left corners.
    for i in 0..8 {
        matrix.set(d - 1 - i, 8, bit(i));
    }
    for i in 8..15 {
        matrix.set(8, d - 15 + i, bit(i));
    }
}

/// Write both 3x6 version info blocks; no-op below version 7.
pub fn write_version_info(matrix: &mut BitMatrix, version: Version) {
    if version.number() < 7 {
        return;
    }
    let d = matrix.width();
    let word = VERSION_INFO_WORDS[version.number() as usize - 7];
    for i in 0..18 {
        let dark = (word >> i) & 1 == 1;
        let x = d - 11 + i % 3;
        let y = i / 3;
        matrix.set(x, y, dark);
        matrix.set(y, x, dark);
    }
}
