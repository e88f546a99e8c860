/// Smallest-fitting version search
use log::debug;

use crate::encoder::segment::Segment;
use crate::encoder::tables::{BlockPlan, block_plan};
use crate::models::{ECLevel, Version};

/// Bits occupied by the ECI header (mode indicator + assignment value),
/// zero when no ECI is configured.
pub fn eci_header_bits(eci: Option<u32>) -> usize {
    match eci {
        None => 0,
        Some(value) if value <= 127 => 4 + 8,
        Some(value) if value <= 16383 => 4 + 16,
        Some(_) => 4 + 24,
    }
}

/// Total encoded bits for the segments at `version`, ECI header included.
///
/// The count is version-dependent because the character count fields widen
/// at versions 10 and 27.
pub fn required_bits(segments: &[Segment], version: u8, eci: Option<u32>) -> usize {
    eci_header_bits(eci)
        + segments
            .iter()
            .map(|segment| segment.encoded_bits(version))
            .sum::<usize>()
}

/// Scan versions 1-40 ascending and return the first whose data capacity
/// holds the encoded bits, together with its block plan. `None` means the
/// input does not fit any version at this EC level.
pub fn select_version(
    segments: &[Segment],
    ec_level: ECLevel,
    eci: Option<u32>,
) -> Option<(Version, BlockPlan)> {
    for number in 1..=40u8 {
        let plan = block_plan(number, ec_level)?;
        let bits = required_bits(segments, number, eci);
        if bits <= 8 * plan.data_codewords {
            debug!(
                "selected version {} ({} bits into {} data codewords)",
                number, bits, plan.data_codewords
            );
            return Some((Version::new(number)?, plan));
        }
    }
    None
}
