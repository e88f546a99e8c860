//! Data codeword assembly and block interleaving
//!
//! Turns classified segments into the final transmission-order codeword
//! stream: mode headers and payloads are packed MSB-first, terminated and
//! padded to the data capacity, split into blocks, extended with
//! Reed-Solomon codewords, and interleaved column-wise.

use crate::encoder::bitstream::BitWriter;
use crate::encoder::modes::{AlphanumericEncoder, ByteEncoder, NumericEncoder};
use crate::encoder::reed_solomon::ReedSolomonEncoder;
use crate::encoder::segment::{EncodingMode, Segment};
use crate::encoder::tables::BlockPlan;

/// Alternating pad codewords filling unused data capacity.
const PAD_CODEWORDS: [u8; 2] = [0xEC, 0x11];

/// Pack the segments into exactly `plan.data_codewords` bytes.
///
/// The caller must have selected `version` so the bits fit; the terminator
/// is truncated when fewer than 4 bits of capacity remain.
pub fn build_data_codewords(
    segments: &[Segment],
    version: u8,
    eci: Option<u32>,
    plan: &BlockPlan,
) -> Vec<u8> {
    let mut writer = BitWriter::with_capacity(plan.data_codewords);

    if let Some(value) = eci {
        writer.push_bits(EncodingMode::Eci.indicator(), 4);
        if value <= 127 {
            writer.push_bits(value, 8);
        } else if value <= 16383 {
            writer.push_bits(0x8000 | value, 16);
        } else {
            writer.push_bits(0xC0_0000 | value, 24);
        }
    }

    for segment in segments {
        writer.push_bits(segment.mode.indicator(), 4);
        writer.push_bits(
            segment.data.len() as u32,
            segment.mode.char_count_bits(version),
        );
        match segment.mode {
            EncodingMode::Numeric => NumericEncoder::encode(&segment.data, &mut writer),
            EncodingMode::Alphanumeric => AlphanumericEncoder::encode(&segment.data, &mut writer),
            EncodingMode::Byte | EncodingMode::Eci => {
                ByteEncoder::encode(&segment.data, &mut writer)
            }
        }
    }

    // Terminator: up to 4 zero bits, truncated at capacity.
    let capacity_bits = 8 * plan.data_codewords;
    let terminator = (capacity_bits - writer.bit_len()).min(4);
    writer.push_bits(0, terminator);

    // Flush to a byte boundary.
    let partial = writer.bit_len() % 8;
    if partial != 0 {
        writer.push_bits(0, 8 - partial);
    }

    let mut codewords = writer.into_bytes();
    let mut pad_index = 0;
    while codewords.len() < plan.data_codewords {
        codewords.push(PAD_CODEWORDS[pad_index]);
        pad_index ^= 1;
    }
    codewords
}

/// Compute each block's EC codewords and emit the transmission order:
/// data codewords round-robin across blocks (short group 1 blocks drop out
/// once exhausted), then EC codewords round-robin.
pub fn interleave(data: &[u8], plan: &BlockPlan) -> Vec<u8> {
    let rs = ReedSolomonEncoder::new(plan.ec_codewords_per_block);

    let mut blocks: Vec<&[u8]> = Vec::with_capacity(plan.block_count());
    let mut offset = 0;
    for _ in 0..plan.blocks_group1 {
        blocks.push(&data[offset..offset + plan.data_codewords_group1]);
        offset += plan.data_codewords_group1;
    }
    for _ in 0..plan.blocks_group2 {
        blocks.push(&data[offset..offset + plan.data_codewords_group2]);
        offset += plan.data_codewords_group2;
    }
    let ec_blocks: Vec<Vec<u8>> = blocks.iter().map(|block| rs.encode(block)).collect();

    let mut stream = Vec::with_capacity(plan.total_codewords);
    let longest = plan
        .data_codewords_group1
        .max(plan.data_codewords_group2);
    for column in 0..longest {
        for block in &blocks {
            if column < block.len() {
                stream.push(block[column]);
            }
        }
    }
    for column in 0..plan.ec_codewords_per_block {
        for ec in &ec_blocks {
            stream.push(ec[column]);
        }
    }
    stream
}
