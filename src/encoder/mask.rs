//! Mask trials and penalty scoring
//!
//! Each of the eight mask patterns produces a pure candidate matrix; the
//! four penalty rules score every candidate and the lowest total wins,
//! ties going to the lowest pattern index. Candidates are scored with the
//! format strips still reserved-light; the format word is written into the
//! winner afterwards.

use log::debug;
use rayon::prelude::*;

use crate::encoder::builder::MatrixBuilder;
use crate::models::{BitMatrix, MaskPattern};

/// XOR one mask pattern over the data cells, leaving function cells alone.
pub fn apply_mask(builder: &MatrixBuilder, pattern: MaskPattern) -> BitMatrix {
    let d = builder.dimension();
    let mut candidate = builder.colors().clone();
    for y in 0..d {
        for x in 0..d {
            if !builder.is_function(x, y) && pattern.is_masked(y, x) {
                candidate.toggle(x, y);
            }
        }
    }
    candidate
}

/// Score all eight candidates and keep the arg-min by (score, index).
pub fn select_mask(builder: &MatrixBuilder) -> (MaskPattern, BitMatrix) {
    let (pattern, score, candidate) = MaskPattern::ALL
        .par_iter()
        .map(|&pattern| {
            let candidate = apply_mask(builder, pattern);
            let score = penalty(&candidate);
            (pattern, score, candidate)
        })
        .min_by_key(|(pattern, score, _)| (*score, pattern.index()))
        .expect("eight candidates scored");
    debug!("mask {} committed with penalty {}", pattern.index(), score);
    (pattern, candidate)
}

/// Combined penalty over the four rules
pub fn penalty(matrix: &BitMatrix) -> u32 {
    run_penalty(matrix)
        + block_penalty(matrix)
        + finder_lookalike_penalty(matrix)
        + dark_ratio_penalty(matrix)
}

/// Rule 1: every run of 5+ same-colored cells in a row or column scores
/// its length minus 2.
fn run_penalty(matrix: &BitMatrix) -> u32 {
    let d = matrix.width();
    let mut penalty = 0u32;
    for y in 0..d {
        let mut run = 1u32;
        let mut prev = matrix.get(0, y);
        for x in 1..d {
            let cell = matrix.get(x, y);
            if cell == prev {
                run += 1;
            } else {
                if run >= 5 {
                    penalty += run - 2;
                }
                run = 1;
                prev = cell;
            }
        }
        if run >= 5 {
            penalty += run - 2;
        }
    }
    for x in 0..d {
        let mut run = 1u32;
        let mut prev = matrix.get(x, 0);
        for y in 1..d {
            let cell = matrix.get(x, y);
            if cell == prev {
                run += 1;
            } else {
                if run >= 5 {
                    penalty += run - 2;
                }
                run = 1;
                prev = cell;
            }
        }
        if run >= 5 {
            penalty += run - 2;
        }
    }
    penalty
}

/// Rule 2: every 2x2 block of one color scores 3; blocks overlap.
fn block_penalty(matrix: &BitMatrix) -> u32 {
    let d = matrix.width();
    let mut penalty = 0u32;
    for y in 0..d - 1 {
        for x in 0..d - 1 {
            let color = matrix.get(x, y);
            if matrix.get(x + 1, y) == color
                && matrix.get(x, y + 1) == color
                && matrix.get(x + 1, y + 1) == color
            {
                penalty += 3;
            }
        }
    }
    penalty
}

/// 1:1:3:1:1 dark run followed by four light cells, and its mirror.
const FINDER_RUN_FWD: [bool; 11] = [
    true, false, true, true, true, false, true, false, false, false, false,
];
const FINDER_RUN_BWD: [bool; 11] = [
    false, false, false, false, true, false, true, true, true, false, true,
];

/// Rule 3: 40 per finder-lookalike run, horizontally and vertically.
fn finder_lookalike_penalty(matrix: &BitMatrix) -> u32 {
    let d = matrix.width();
    if d < 11 {
        return 0;
    }
    let mut penalty = 0u32;
    for y in 0..d {
        for start in 0..=d - 11 {
            let mut fwd = true;
            let mut bwd = true;
            for i in 0..11 {
                let cell = matrix.get(start + i, y);
                fwd &= cell == FINDER_RUN_FWD[i];
                bwd &= cell == FINDER_RUN_BWD[i];
                if !fwd && !bwd {
                    break;
                }
            }
            if fwd || bwd {
                penalty += 40;
            }
        }
    }
    for x in 0..d {
        for start in 0..=d - 11 {
            let mut fwd = true;
            let mut bwd = true;
            for i in 0..11 {
                let cell = matrix.get(x, start + i);
                fwd &= cell == FINDER_RUN_FWD[i];
                bwd &= cell == FINDER_RUN_BWD[i];
                if !fwd && !bwd {
                    break;
                }
            }
            if fwd || bwd {
                penalty += 40;
            }
        }
    }
    penalty
}

/// Rule 4: deviation of the dark-cell fraction from 1/2, in truncated
/// 5%-steps outside the 45-55% band. The truncation is part of the
/// output contract.
fn dark_ratio_penalty(matrix: &BitMatrix) -> u32 {
    let total = matrix.width() * matrix.height();
    let ratio = matrix.count_dark() as f64 / total as f64;
    if ratio > 0.55 {
        ((20.0 * (ratio - 0.5)) as i32 * 10) as u32
    } else if ratio < 0.45 {
        ((20.0 * (0.5 - ratio)) as i32 * 10) as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::codewords::{build_data_codewords, interleave};
    use crate::encoder::segment::Segment;
    use crate::encoder::tables::block_plan;
    use crate::models::{ECLevel, Version};

    fn checkerboard(d: usize) -> BitMatrix {
        let mut matrix = BitMatrix::square(d);
        for y in 0..d {
            for x in 0..d {
                matrix.set(x, y, (x + y) % 2 == 0);
            }
        }
        matrix
    }

    #[test]
    fn test_uniform_matrix_penalty() {
        // All-light 21x21: rule 1 gives (21-2) per row and column, rule 2
        // gives 3 per overlapping block, rule 4 tops out at 10 steps.
        let matrix = BitMatrix::square(21);
        assert_eq!(run_penalty(&matrix), 2 * 21 * 19);
        assert_eq!(block_penalty(&matrix), 20 * 20 * 3);
        assert_eq!(finder_lookalike_penalty(&matrix), 0);
        assert_eq!(dark_ratio_penalty(&matrix), 100);
        assert_eq!(penalty(&matrix), 798 + 1200 + 100);
    }

    #[test]
    fn test_checkerboard_scores_zero() {
        assert_eq!(penalty(&checkerboard(21)), 0);
    }

    #[test]
    fn test_finder_lookalike_detected() {
        let mut matrix = checkerboard(21);
        // Overwrite one row with dark-light-dark-dark-dark-light-dark and
        // four trailing light cells.
        for (i, &dark) in FINDER_RUN_FWD.iter().enumerate() {
            matrix.set(i, 10, dark);
        }
        assert!(finder_lookalike_penalty(&matrix) >= 40);
    }

    #[test]
    fn test_dark_ratio_truncation() {
        // 300 dark of 441 is ratio 0.6803; 20*(r-0.5) = 3.60 truncates to
        // 3, scoring 30 rather than a rounded 40.
        let mut matrix = BitMatrix::square(21);
        let mut set = 0;
        'outer: for y in 0..21 {
            for x in 0..21 {
                if set == 300 {
                    break 'outer;
                }
                matrix.set(x, y, true);
                set += 1;
            }
        }
        assert_eq!(dark_ratio_penalty(&matrix), 30);
    }

    #[test]
    fn test_selected_mask_is_arg_min() {
        let segments = vec![Segment::classify(b"HELLO WORLD")];
        let plan = block_plan(1, ECLevel::M).unwrap();
        let data = build_data_codewords(&segments, 1, None, &plan);
        let stream = interleave(&data, &plan);
        let mut builder = MatrixBuilder::new(Version::new(1).unwrap());
        builder.place_codewords(&stream);

        let (mask, matrix) = select_mask(&builder);
        let scores: Vec<u32> = MaskPattern::ALL
            .iter()
            .map(|&pattern| penalty(&apply_mask(&builder, pattern)))
            .collect();
        let best = scores
            .iter()
            .enumerate()
            .min_by_key(|(index, score)| (**score, *index))
            .map(|(index, _)| index)
            .unwrap();
        assert_eq!(mask.index(), best);
        assert_eq!(matrix, apply_mask(&builder, mask));
    }

    #[test]
    fn test_mask_leaves_function_cells_alone() {
        let builder = MatrixBuilder::new(Version::new(1).unwrap());
        for &pattern in &MaskPattern::ALL {
            let candidate = apply_mask(&builder, pattern);
            let d = builder.dimension();
            for y in 0..d {
                for x in 0..d {
                    if builder.is_function(x, y) {
                        assert_eq!(
                            candidate.get(x, y),
                            builder.colors().get(x, y),
                            "pattern {} touched ({x}, {y})",
                            pattern.index()
                        );
                    }
                }
            }
        }
    }
}
