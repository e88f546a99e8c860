//! Base matrix construction and data placement
//!
//! Builds the function patterns for a version (finders, separators, timing,
//! alignment, reserved format/version areas, dark module) and writes the
//! interleaved codeword bits into the remaining cells in the two-column
//! zig-zag order. Colors and roles live in two parallel bit matrices;
//! function and reserved cells are never masked.

use crate::encoder::tables::alignment_positions;
use crate::models::{BitMatrix, Version};

/// Module colors plus a function-role map for one symbol under construction.
pub struct MatrixBuilder {
    version: u8,
    dimension: usize,
    colors: BitMatrix,
    function: BitMatrix,
}

impl MatrixBuilder {
    /// Build the base matrix for a version: all function patterns placed,
    /// every data cell still light.
    pub fn new(version: Version) -> Self {
        let dimension = version.dimension();
        let mut builder = Self {
            version: version.number(),
            dimension,
            colors: BitMatrix::square(dimension),
            function: BitMatrix::square(dimension),
        };
        builder.place_finder_patterns();
        builder.place_timing_patterns();
        builder.place_alignment_patterns();
        builder.reserve_format_areas();
        builder.reserve_version_areas();
        builder
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Module colors laid down so far (function patterns + placed data)
    pub fn colors(&self) -> &BitMatrix {
        &self.colors
    }

    /// true when (x, y) is a function or reserved cell, exempt from masking
    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.function.get(x, y)
    }

    /// Number of cells available for payload bits
    pub fn data_module_count(&self) -> usize {
        let d = self.dimension;
        let mut count = 0;
        for y in 0..d {
            for x in 0..d {
                if !self.function.get(x, y) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Write the codeword bits MSB-first into the data cells, traversing
    /// two-column strips right to left, alternating up and down, skipping
    /// the vertical timing column. Versions whose data-cell count is not a
    /// multiple of 8 leave the final 0-7 remainder cells light.
    pub fn place_codewords(&mut self, codewords: &[u8]) {
        let d = self.dimension;
        let mut bit_index = 0usize;
        let mut upward = true;
        let mut col = d as i32 - 1;

        while col > 0 {
            if col == 6 {
                col -= 1;
                continue;
            }
            if upward {
                for row in (0..d).rev() {
                    self.place_pair(col as usize, row, codewords, &mut bit_index);
                }
            } else {
                for row in 0..d {
                    self.place_pair(col as usize, row, codewords, &mut bit_index);
                }
            }
            upward = !upward;
            col -= 2;
        }

        debug_assert_eq!(bit_index, self.data_module_count());
        debug_assert!(bit_index >= codewords.len() * 8);
        debug_assert!(bit_index - codewords.len() * 8 < 8);
    }

    fn place_pair(&mut self, col: usize, row: usize, codewords: &[u8], bit_index: &mut usize) {
        for x in [col, col - 1] {
            if self.function.get(x, row) {
                continue;
            }
            let placed = *bit_index;
            if placed < codewords.len() * 8 {
                let dark = (codewords[placed / 8] >> (7 - placed % 8)) & 1 == 1;
                self.colors.set(x, row, dark);
            }
            *bit_index += 1;
        }
    }

    fn set_function(&mut self, x: usize, y: usize, dark: bool) {
        self.colors.set(x, y, dark);
        self.function.set(x, y, true);
    }

    fn place_finder_patterns(&mut self) {
        let d = self.dimension as isize;
        self.place_finder(0, 0);
        self.place_finder(d - 7, 0);
        self.place_finder(0, d - 7);
    }

    /// 7x7 finder core plus its one-module separator ring, clipped at the
    /// matrix edge.
    fn place_finder(&mut self, left: isize, top: isize) {
        let d = self.dimension as isize;
        for dy in -1..=7 {
            for dx in -1..=7 {
                let x = left + dx;
                let y = top + dy;
                if x < 0 || y < 0 || x >= d || y >= d {
                    continue;
                }
                let dark = if dx == -1 || dx == 7 || dy == -1 || dy == 7 {
                    false
                } else if dx == 0 || dx == 6 || dy == 0 || dy == 6 {
                    true
                } else {
                    (2..=4).contains(&dx) && (2..=4).contains(&dy)
                };
                self.set_function(x as usize, y as usize, dark);
            }
        }
    }

    fn place_timing_patterns(&mut self) {
        let d = self.dimension;
        for i in 8..d - 8 {
            let dark = i % 2 == 0;
            self.set_function(i, 6, dark);
            self.set_function(6, i, dark);
        }
    }

    fn place_alignment_patterns(&mut self) {
        let d = self.dimension;
        let centers = alignment_positions(self.version);
        for &cy in centers {
            for &cx in centers {
                // The three candidates overlapping finder corners are skipped.
                let in_tl = cx <= 8 && cy <= 8;
                let in_tr = cx >= d - 9 && cy <= 8;
                let in_bl = cx <= 8 && cy >= d - 9;
                if in_tl || in_tr || in_bl {
                    continue;
                }
                for dy in -2isize..=2 {
                    for dx in -2isize..=2 {
                        let dark = dx.abs() == 2 || dy.abs() == 2 || (dx == 0 && dy == 0);
                        self.set_function(
                            (cx as isize + dx) as usize,
                            (cy as isize + dy) as usize,
                            dark,
                        );
                    }
                }
            }
        }
    }

    /// Reserve the format strips light; the format word is written into the
    /// committed matrix after mask selection. The dark module is fixed here.
    fn reserve_format_areas(&mut self) {
        let d = self.dimension;
        for i in 0..9 {
            if i != 6 {
                self.function.set(8, i, true);
                self.function.set(i, 8, true);
            }
        }
        for i in 0..8 {
            self.function.set(d - 1 - i, 8, true);
            self.function.set(8, d - 1 - i, true);
        }
        self.set_function(8, d - 8, true);
    }

    /// Reserve the two 3x6 version info blocks for versions 7+.
    fn reserve_version_areas(&mut self) {
        if self.version < 7 {
            return;
        }
        let d = self.dimension;
        for i in 0..18 {
            let x = d - 11 + i % 3;
            let y = i / 3;
            self.function.set(x, y, true);
            self.function.set(y, x, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::tables::block_plan;
    use crate::models::ECLevel;

    fn builder(version: u8) -> MatrixBuilder {
        MatrixBuilder::new(Version::new(version).unwrap())
    }

    /// Remainder bits left after 8 * total codewords, per version tier.
    fn remainder_bits(version: u8) -> usize {
        match version {
            1 => 0,
            2..=6 => 7,
            7..=13 => 0,
            14..=20 => 3,
            21..=27 => 4,
            28..=34 => 3,
            _ => 0,
        }
    }

    #[test]
    fn test_finder_ring_structure() {
        let builder = builder(1);
        let matrix = builder.colors();
        // Dark border ring.
        for i in 0..7 {
            assert!(matrix.get(i, 0), "top edge col {i}");
            assert!(matrix.get(i, 6), "bottom edge col {i}");
            assert!(matrix.get(0, i), "left edge row {i}");
            assert!(matrix.get(6, i), "right edge row {i}");
        }
        // Light ring inside it.
        for i in 1..6 {
            assert!(!matrix.get(i, 1));
            assert!(!matrix.get(1, i));
        }
        // 3x3 dark core.
        for y in 2..5 {
            for x in 2..5 {
                assert!(matrix.get(x, y), "core ({x}, {y})");
            }
        }
        // Separator strip stays light but is a function cell.
        assert!(!matrix.get(7, 0));
        assert!(builder.is_function(7, 0));
        assert!(!matrix.get(0, 7));
    }

    #[test]
    fn test_timing_alternates() {
        let builder = builder(2);
        for i in 8..17 {
            assert_eq!(builder.colors().get(i, 6), i % 2 == 0, "row timing {i}");
            assert_eq!(builder.colors().get(6, i), i % 2 == 0, "col timing {i}");
        }
    }

    #[test]
    fn test_dark_module_fixed() {
        for version in [1u8, 7, 40] {
            let builder = builder(version);
            let d = builder.dimension();
            assert!(builder.colors().get(8, d - 8), "v{version}");
            assert!(builder.is_function(8, d - 8));
        }
    }

    #[test]
    fn test_alignment_skips_finder_corners() {
        let builder = builder(7);
        let d = builder.dimension();
        // Center (22, 22) is placed: dark border, light ring, dark center.
        assert!(builder.colors().get(20, 22));
        assert!(!builder.colors().get(21, 22));
        assert!(builder.colors().get(22, 22));
        // Candidates at the three finder corners are not: the cells their
        // 5x5 extent would claim stay plain data cells.
        assert!(!builder.is_function(d - 9, 8), "top-right candidate placed");
        assert!(!builder.is_function(8, d - 9), "bottom-left candidate placed");
    }

    #[test]
    fn test_data_module_count_matches_codeword_capacity() {
        // The free cells must hold exactly 8 * total codewords plus the
        // version's remainder bits. Ties the tables to the geometry.
        for version in 1..=40u8 {
            let builder = builder(version);
            let plan = block_plan(version, ECLevel::L).unwrap();
            assert_eq!(
                builder.data_module_count(),
                8 * plan.total_codewords + remainder_bits(version),
                "v{version}"
            );
        }
    }

    #[test]
    fn test_version_1_has_208_data_cells() {
        assert_eq!(builder(1).data_module_count(), 208);
    }

    #[test]
    fn test_place_codewords_fills_every_data_cell() {
        let plan = block_plan(1, ECLevel::M).unwrap();
        let mut builder = builder(1);
        builder.place_codewords(&vec![0xFF; plan.total_codewords]);
        let d = builder.dimension();
        for y in 0..d {
            for x in 0..d {
                if !builder.is_function(x, y) {
                    assert!(builder.colors().get(x, y), "({x}, {y}) not written");
                }
            }
        }
    }

    #[test]
    fn test_placement_starts_bottom_right_upward() {
        // First byte 0b10110000: bit 7 lands at (d-1, d-1), bit 6 at
        // (d-2, d-1), bit 5 at (d-1, d-2), bit 4 at (d-2, d-2).
        let plan = block_plan(1, ECLevel::M).unwrap();
        let mut codewords = vec![0u8; plan.total_codewords];
        codewords[0] = 0b1011_0000;
        let mut builder = builder(1);
        builder.place_codewords(&codewords);
        let d = builder.dimension();
        assert!(builder.colors().get(d - 1, d - 1));
        assert!(!builder.colors().get(d - 2, d - 1));
        assert!(builder.colors().get(d - 1, d - 2));
        assert!(builder.colors().get(d - 2, d - 2));
        assert!(!builder.colors().get(d - 1, d - 3));
    }

    #[test]
    fn test_version_reservation_blocks() {
        let builder = builder(7);
        let d = builder.dimension();
        // Top-right block: 3 columns x 6 rows.
        for y in 0..6 {
            for x in d - 11..d - 8 {
                assert!(builder.is_function(x, y), "({x}, {y})");
            }
        }
        // Bottom-left transpose: 6 columns x 3 rows.
        for y in d - 11..d - 8 {
            for x in 0..6 {
                assert!(builder.is_function(x, y), "({x}, {y})");
            }
        }
        // Version 6 reserves neither.
        let small = MatrixBuilder::new(Version::new(6).unwrap());
        let d = small.dimension();
        assert!(!small.is_function(d - 11, 0));
    }
}
