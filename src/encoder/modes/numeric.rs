/// Numeric mode encoder (Mode 0001)
use crate::encoder::bitstream::BitWriter;

/// Pack digits into the bitstream.
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits.
pub struct NumericEncoder;

impl NumericEncoder {
    pub fn encode(data: &[u8], writer: &mut BitWriter) {
        for chunk in data.chunks(3) {
            let mut value = 0u32;
            for &digit in chunk {
                debug_assert!(digit.is_ascii_digit());
                value = value * 10 + (digit - b'0') as u32;
            }
            let bits = match chunk.len() {
                3 => 10,
                2 => 7,
                _ => 4,
            };
            writer.push_bits(value, bits);
        }
    }
}
