use crate::models::ECLevel;

/// Block structure for one (version, EC level) pair.
///
/// Group 1 blocks are the short ones; group 2 blocks carry one extra data
/// codeword. Every block gets the same number of EC codewords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPlan {
    pub blocks_group1: usize,
    pub data_codewords_group1: usize,
    pub blocks_group2: usize,
    pub data_codewords_group2: usize,
    pub ec_codewords_per_block: usize,
    /// Total codewords in the symbol (data + EC)
    pub total_codewords: usize,
    /// Data codewords across all blocks
    pub data_codewords: usize,
}

impl BlockPlan {
    pub fn block_count(&self) -> usize {
        self.blocks_group1 + self.blocks_group2
    }
}

// Tables from the QR Code specification (Model 2) via Nayuki QR Code generator.
// Index: [ec_level][version]
const ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

/// Total codewords per version (ISO 18004 Table 1, data + EC combined).
const TOTAL_CODEWORDS: [u16; 40] = [
    26, 44, 70, 100, 134, 172, 196, 242, 292, 346, 404, 466, 532, 581, 655, 733, 815, 901, 991,
    1085, 1156, 1258, 1364, 1474, 1588, 1706, 1828, 1921, 2051, 2185, 2323, 2465, 2611, 2761, 2876,
    3034, 3196, 3362, 3532, 3706,
];

/// Look up the block plan for a version and EC level.
pub fn block_plan(version: u8, ec_level: ECLevel) -> Option<BlockPlan> {
    if !(1..=40).contains(&version) {
        return None;
    }
    let idx = ec_level.index();
    let ecc = ECC_CODEWORDS_PER_BLOCK[idx][version as usize];
    let blocks = NUM_ERROR_CORRECTION_BLOCKS[idx][version as usize];
    if ecc <= 0 || blocks <= 0 {
        return None;
    }
    let ecc = ecc as usize;
    let blocks = blocks as usize;
    let total = TOTAL_CODEWORDS[version as usize - 1] as usize;
    let data = total - ecc * blocks;

    // Short blocks first; data % blocks of them carry one extra codeword.
    let blocks_group2 = data % blocks;
    let blocks_group1 = blocks - blocks_group2;
    let data_codewords_group1 = data / blocks;

    Some(BlockPlan {
        blocks_group1,
        data_codewords_group1,
        blocks_group2,
        data_codewords_group2: if blocks_group2 > 0 {
            data_codewords_group1 + 1
        } else {
            0
        },
        ec_codewords_per_block: ecc,
        total_codewords: total,
        data_codewords: data,
    })
}

/// Alignment pattern center coordinates per version (both axes).
pub fn alignment_positions(version: u8) -> &'static [usize] {
    match version {
        2 => &[6, 18],
        3 => &[6, 22],
        4 => &[6, 26],
        5 => &[6, 30],
        6 => &[6, 34],
        7 => &[6, 22, 38],
        8 => &[6, 24, 42],
        9 => &[6, 26, 46],
        10 => &[6, 28, 50],
        11 => &[6, 30, 54],
        12 => &[6, 32, 58],
        13 => &[6, 34, 62],
        14 => &[6, 26, 46, 66],
        15 => &[6, 26, 48, 70],
        16 => &[6, 26, 50, 74],
        17 => &[6, 30, 54, 78],
        18 => &[6, 30, 56, 82],
        19 => &[6, 30, 58, 86],
        20 => &[6, 34, 62, 90],
        21 => &[6, 28, 50, 72, 94],
        22 => &[6, 26, 50, 74, 98],
        23 => &[6, 30, 54, 78, 102],
        24 => &[6, 28, 54, 80, 106],
        25 => &[6, 32, 58, 84, 110],
        26 => &[6, 30, 58, 86, 114],
        27 => &[6, 34, 62, 90, 118],
        28 => &[6, 26, 50, 74, 98, 122],
        29 => &[6, 30, 54, 78, 102, 126],
        30 => &[6, 26, 52, 78, 104, 130],
        31 => &[6, 30, 56, 82, 108, 134],
        32 => &[6, 34, 60, 86, 112, 138],
        33 => &[6, 30, 58, 86, 114, 142],
        34 => &[6, 34, 62, 90, 118, 146],
        35 => &[6, 30, 54, 78, 102, 126, 150],
        36 => &[6, 24, 50, 76, 102, 128, 154],
        37 => &[6, 28, 54, 80, 106, 132, 158],
        38 => &[6, 32, 58, 84, 110, 136, 162],
        39 => &[6, 26, 54, 82, 110, 138, 166],
        40 => &[6, 30, 58, 86, 114, 142, 170],
        _ => &[],
    }
}

/// Precomputed 15-bit format information words, BCH(15,5)-protected and
/// XOR-masked. Index: (ec format bits << 3) | mask index.
pub const FORMAT_INFO_WORDS: [u16; 32] = [
    0x5412, 0x5125, 0x5E7C, 0x5B4B, 0x45F9, 0x40CE, 0x4F97, 0x4AA0, 0x77C4, 0x72F3, 0x7DAA, 0x789D,
    0x662F, 0x6318, 0x6C41, 0x6976, 0x1689, 0x13BE, 0x1CE7, 0x19D0, 0x0762, 0x0255, 0x0D0C, 0x083B,
    0x355F, 0x3068, 0x3F31, 0x3A06, 0x24B4, 0x2183, 0x2EDA, 0x2BED,
];

/// Precomputed 18-bit version information words for versions 7-40,
/// BCH(18,6)-protected. Index: version - 7.
pub const VERSION_INFO_WORDS: [u32; 34] = [
    0x07C94, 0x085BC, 0x09A99, 0x0A4D3, 0x0BBF6, 0x0C762, 0x0D847, 0x0E60D, 0x0F928, 0x10B78,
    0x1145D, 0x12A17, 0x13532, 0x149A6, 0x15683, 0x168C9, 0x177EC, 0x18EC4, 0x191E1, 0x1AFAB,
    0x1B08E, 0x1CC1A, 0x1D33F, 0x1ED75, 0x1F250, 0x209D5, 0x216F0, 0x228BA, 0x2379F, 0x24B0B,
    0x2542E, 0x26A64, 0x27541, 0x28C69,
];
