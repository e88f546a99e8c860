/// Byte mode encoder (Mode 0100)
use crate::encoder::bitstream::BitWriter;

/// Pack bytes into the bitstream verbatim, 8 bits each.
pub struct ByteEncoder;

impl ByteEncoder {
    pub fn encode(data: &[u8], writer: &mut BitWriter) {
        for &byte in data {
            writer.push_bits(byte as u32, 8);
        }
    }
}
