//! Built-in 4x6 font
//!
//! The font covers printable ASCII (`0x20..=0x7F`) with one 4x6 glyph per
//! character. Each glyph cell holds a 2-bit value, which lets the font carry a
//! small antialiasing ramp: `0` is full ink, `1` and `2` are intermediate
//! shades, and `3` is background.
//!
//! ## Table Layout
//!
//! Every glyph is stored as 6 bytes, one per row. A byte packs the 4 columns
//! of its row, two bits each, with the least-significant pair holding the
//! leftmost column. The whole table is XOR-ed with [`SALT`], which keeps every
//! byte inside the printable range.
//!
//! ## Example
//!
//! ```
//! use pewpew_lcd::font::glyph;
//!
//! let space = glyph(' ').unwrap_or_default();
//! assert!(space.rows().iter().flatten().all(|&value| value == 3));
//!
//! // No glyph outside of printable ASCII
//! assert!(glyph('\n').is_none());
//! assert!(glyph('é').is_none());
//! ```

/// Glyph width in pixels (also the horizontal advance)
pub const GLYPH_WIDTH: usize = 4;

/// Glyph height in pixels
pub const GLYPH_HEIGHT: usize = 6;

/// Number of glyphs in [`FONT`]
pub const GLYPH_COUNT: usize = 96;

/// First character covered by the font
pub const FIRST_CHAR: u32 = 0x20;

/// XOR mask applied to every byte of [`FONT`]
pub const SALT: u8 = 132;

/// Salted glyph table, [`GLYPH_HEIGHT`] bytes per glyph
pub const FONT: &[u8; GLYPH_COUNT * GLYPH_HEIGHT] = b"\
{{{{{{wws{w{HY{{{{YDYDY{sUtGUsH[wyH{uHgHE{ws{{{{vyxyv{g[K[g{{]f]{{{wDw{{\
{{{wy{{{D{{{{{{{w{K_w}x{VHLHe{wuwww{`KfyD{UKgKU{w}XDK{DxTKT{VxUHU{D[wyx{\
UHfHU{UHEKe{{w{w{{{w{wy{KwxwK{{D{D{{xwKwx{eKg{w{VIHyB{fYH@H{dHdHd{FyxyF{\
`XHX`{DxtxD{Dxtxx{FyxIF{HHDHH{wwwww{KKKHU{HXpXH{xxxxD{Y@DLH{IL@LX{fYHYf{\
`HH`x{fYHIF{`HH`H{UxUKU{Dwwww{HHHIR{HHH]w{HHLD@{HYsYH{HYbww{D[wyD{txxxt{\
x}w_K{GKKKG{wLY{{{{{{{{Dxs{{{{{BIIB{x`XX`{{ByyB{KBIIB{{WIpF{OwUwww{`YB[`\
x`XHH{w{vwc{K{OKHUxHpXH{vwws_{{dD@H{{`XHH{{fYYf{{`XX`x{bYIBK{Ipxx{{F}_d{\
wUws_{{HHIV{{HH]s{{HLD@{{HbbH{{HHV[a{D_}D{Cw|wC{wwwwwwpwOwp{WKfxu{@YYY@{";

/// One decoded glyph
///
/// Values are in `0..=3`, indexed as `rows()[row][col]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Glyph {
    rows: [[u8; GLYPH_WIDTH]; GLYPH_HEIGHT],
}

impl Glyph {
    /// Decode glyph number `index` (`0..GLYPH_COUNT`) from the salted table
    fn decode(index: usize) -> Self {
        let start = index * GLYPH_HEIGHT;
        let mut rows = [[0u8; GLYPH_WIDTH]; GLYPH_HEIGHT];

        for (row, &salted) in rows.iter_mut().zip(&FONT[start..start + GLYPH_HEIGHT]) {
            let mut bits = salted ^ SALT;
            for value in row.iter_mut() {
                *value = bits & 0x03;
                bits >>= 2;
            }
        }

        Self { rows }
    }

    /// Value at (`col`, `row`), or `None` outside the 4x6 cell
    pub fn value(&self, col: usize, row: usize) -> Option<u8> {
        self.rows.get(row)?.get(col).copied()
    }

    /// All rows of the glyph, top to bottom
    pub fn rows(&self) -> &[[u8; GLYPH_WIDTH]; GLYPH_HEIGHT] {
        &self.rows
    }
}

/// Look up and decode the glyph for `c`
///
/// Returns `None` for characters outside `0x20..=0x7F`.
pub fn glyph(c: char) -> Option<Glyph> {
    let index = (c as u32).checked_sub(FIRST_CHAR)? as usize;
    if index >= GLYPH_COUNT {
        return None;
    }
    Some(Glyph::decode(index))
}
