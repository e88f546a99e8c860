//! Raster and terminal rendering helpers
//!
//! The encoder's output is a module matrix; downstream embedding wants
//! pixels. `rasterize` expands modules into a boolean pixel grid,
//! `to_luma_image` bridges that grid into an `image` buffer, and
//! `to_ascii` prints the symbol with half-block characters for terminals.

use image::{GrayImage, Luma};

use crate::models::{BitMatrix, QrSymbol};

/// Quiet zone used by the terminal renderer, in modules.
const ASCII_QUIET: usize = 2;

/// Expand the module matrix into a pixel grid: each module becomes a
/// `module_size` square block, offset by `quiet_zone` light pixels on
/// every side. `true` = dark pixel.
pub fn rasterize(symbol: &QrSymbol, module_size: usize, quiet_zone: usize) -> BitMatrix {
    let dimension = symbol.dimension;
    let side = 2 * quiet_zone + dimension * module_size;
    let mut pixels = BitMatrix::square(side);
    for y in 0..dimension {
        for x in 0..dimension {
            if !symbol.matrix.get(x, y) {
                continue;
            }
            for py in 0..module_size {
                for px in 0..module_size {
                    pixels.set(
                        quiet_zone + x * module_size + px,
                        quiet_zone + y * module_size + py,
                        true,
                    );
                }
            }
        }
    }
    pixels
}

/// Rasterize into a grayscale image: dark modules black, everything else
/// white.
pub fn to_luma_image(symbol: &QrSymbol, module_size: usize, quiet_zone: usize) -> GrayImage {
    let pixels = rasterize(symbol, module_size, quiet_zone);
    let side = pixels.width() as u32;
    GrayImage::from_fn(side, side, |x, y| {
        if pixels.get(x as usize, y as usize) {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    })
}

/// Render the symbol with Unicode half-block characters, two module rows
/// per text line, with a two-module quiet zone.
pub fn to_ascii(symbol: &QrSymbol) -> String {
    let total = symbol.dimension + 2 * ASCII_QUIET;
    let mut out = String::with_capacity((total + 1) * total.div_ceil(2));

    let mut row = 0;
    while row < total {
        for col in 0..total {
            let top = module_at(symbol, col, row);
            let bottom = module_at(symbol, col, row + 1);
            out.push(match (top, bottom) {
                (false, false) => ' ',
                (true, false) => '\u{2580}',
                (false, true) => '\u{2584}',
                (true, true) => '\u{2588}',
            });
        }
        out.push('\n');
        row += 2;
    }
    out
}

fn module_at(symbol: &QrSymbol, col: usize, row: usize) -> bool {
    if col < ASCII_QUIET || row < ASCII_QUIET {
        return false;
    }
    let x = col - ASCII_QUIET;
    let y = row - ASCII_QUIET;
    x < symbol.dimension && y < symbol.dimension && symbol.matrix.get(x, y)
}
