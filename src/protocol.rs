//! Wire encoding of the logical screen
//!
//! The panel is 1 bit per dot. Each logical pixel of the 8x8 screen is backed
//! by a block of 10 columns on one page, and its gray level is faked with a
//! fixed dot pattern for that block.
//!
//! The panel scans opposite to the logical buffer in both directions: page
//! `p` shows logical row `7 - p`, and each page is written from logical column
//! 7 down to column 0.

use crate::command::SET_PAGE;
use crate::pix::{LEVEL_MASK, Pix};

/// Logical screen width in pixels
pub const SCREEN_WIDTH: usize = 8;

/// Logical screen height in pixels
pub const SCREEN_HEIGHT: usize = 8;

/// Bytes (panel columns) backing one logical pixel
pub const PATTERN_LEN: usize = 10;

/// Bytes written per page
pub const PAGE_BYTES: usize = SCREEN_WIDTH * PATTERN_LEN;

/// Pages written per frame
pub const PAGES: usize = SCREEN_HEIGHT;

/// Dither pattern for each gray level
pub const PATTERNS: [[u8; PATTERN_LEN]; 4] = [
    [0x00; PATTERN_LEN],
    [0x44, 0x11, 0x44, 0x11, 0x44, 0x11, 0x44, 0x11, 0x44, 0x11],
    [0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA],
    [0xFF; PATTERN_LEN],
];

/// Dither pattern for the low two bits of `level`
#[inline]
pub fn pattern(level: u8) -> &'static [u8; PATTERN_LEN] {
    &PATTERNS[usize::from(level & LEVEL_MASK)]
}

/// Page address command for `page`
#[inline]
pub fn page_address(page: u8) -> u8 {
    SET_PAGE | page
}

/// Encode page `page` (`0..PAGES`) of `pix` into `out`
///
/// Pixels outside `pix` encode as level 0.
pub fn encode_page<B>(pix: &Pix<B>, page: usize, out: &mut [u8; PAGE_BYTES])
where
    B: AsRef<[u8]>,
{
    let row = (SCREEN_HEIGHT - 1).saturating_sub(page) as i32;

    for (slot, block) in out.chunks_exact_mut(PATTERN_LEN).enumerate() {
        let col = (SCREEN_WIDTH - 1 - slot) as i32;
        block.copy_from_slice(pattern(pix.pixel(col, row)));
    }
}
