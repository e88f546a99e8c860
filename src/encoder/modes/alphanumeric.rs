/// Alphanumeric mode encoder (Mode 0010)
use crate::encoder::bitstream::BitWriter;
use crate::encoder::segment::alphanumeric_code;

/// Pack alphanumeric characters into the bitstream.
/// Pairs = 11 bits with value 45*code(a) + code(b), single = 6 bits.
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    pub fn encode(data: &[u8], writer: &mut BitWriter) {
        for chunk in data.chunks(2) {
            match *chunk {
                [a, b] => {
                    let value =
                        45 * Self::code(a) + Self::code(b);
                    writer.push_bits(value, 11);
                }
                [a] => writer.push_bits(Self::code(a), 6),
                _ => unreachable!(),
            }
        }
    }

    fn code(byte: u8) -> u32 {
        // Classification guarantees membership before this runs.
        alphanumeric_code(byte).expect("byte outside alphanumeric set") as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair() {
        // "A1" = 10*45 + 1 = 451 = 0b00111000011
        let mut writer = BitWriter::new();
        AlphanumericEncoder::encode(b"A1", &mut writer);
        assert_eq!(writer.bit_len(), 11);
        assert_eq!(writer.into_bytes(), vec![0b0011_1000, 0b0110_0000]);
    }

    #[test]
    fn test_single_leftover() {
        // "HELLO" -> two 11-bit pairs + one 6-bit single.
        let mut writer = BitWriter::new();
        AlphanumericEncoder::encode(b"HELLO", &mut writer);
        assert_eq!(writer.bit_len(), 28);
    }

    #[test]
    fn test_hello_world_first_pair() {
        // "HE" = 17*45 + 14 = 779 = 0b01100001011
        let mut writer = BitWriter::new();
        AlphanumericEncoder::encode(b"HE", &mut writer);
        assert_eq!(writer.into_bytes(), vec![0b0110_0001, 0b0110_0000]);
    }
}
