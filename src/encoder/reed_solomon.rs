/// Systematic Reed-Solomon encoder for QR code blocks
use crate::encoder::gf256::{Gf256, generator_poly};

/// Produces EC codewords for data blocks sharing one generator polynomial.
pub struct ReedSolomonEncoder {
    generator: Vec<u8>,
    ec_codewords: usize,
}

impl ReedSolomonEncoder {
    /// Build an encoder emitting `ec_codewords` EC bytes per block
    pub fn new(ec_codewords: usize) -> Self {
        Self {
            generator: generator_poly(ec_codewords),
            ec_codewords,
        }
    }

    /// Compute the EC codewords for one block of data codewords.
    ///
    /// The message is treated as a polynomial, multiplied by x^ec and
    /// divided by the generator; the remainder, highest degree first, is
    /// the EC sequence appended by the interleaver.
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        // Scratch buffer: data codewords followed by a zeroed EC region.
        let mut scratch = vec![0u8; data.len() + self.ec_codewords];
        scratch[..data.len()].copy_from_slice(data);

        for i in 0..data.len() {
            let factor = scratch[i];
            if factor != 0 {
                for (j, &coeff) in self.generator.iter().enumerate() {
                    scratch[i + j] ^= Gf256::mul(factor, coeff);
                }
            }
        }

        scratch.split_off(data.len())
    }
}
