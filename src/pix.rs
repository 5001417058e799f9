//! Logical 2-bit framebuffer
//!
//! [`Pix`] is a rectangular grid of logical pixels, one byte per pixel, each
//! holding a gray level in `0..=3`. It is independent of the physical panel:
//! [`Display::show`](crate::display::Display::show) dithers it onto the wire.
//!
//! Every geometry operation is permissive. Reads outside the grid return `0`,
//! writes outside it are dropped, and fills and blits are clipped to the part
//! that overlaps.
//!
//! ## Example
//!
//! ```
//! use pewpew_lcd::{Blit, Pix, Rect};
//!
//! let mut screen = Pix::new(8, 8, [0u8; 64])?;
//! screen.set_pixel(1, 1, 3);
//! screen.fill_rect(2, Rect::new(4, 4, 10, 10)); // clipped to 4x4
//!
//! let sprite = Pix::new(2, 2, [1u8, 0, 0, 1])?;
//! screen.blit(&sprite, Blit::new().dest(-1, 0).key(0));
//!
//! assert_eq!(screen.pixel(0, 1), 1);
//! assert_eq!(screen.pixel(1, 1), 3);
//! assert_eq!(screen.pixel(7, 7), 2);
//! assert_eq!(screen.pixel(-1, 0), 0);
//! # Ok::<(), pewpew_lcd::PixError>(())
//! ```

use core::fmt::{self, Write};

#[cfg(any(test, feature = "alloc"))]
use alloc::{vec, vec::Vec};

use crate::error::PixError;
use crate::font::{self, GLYPH_HEIGHT, GLYPH_WIDTH};

/// Mask selecting the two bits of a gray level
pub const LEVEL_MASK: u8 = 0x03;

/// Characters used by the [`Display`](fmt::Display) impl, darkest last
const SHADES: [char; 4] = ['.', '+', '*', '@'];

/// Rectangle for [`Pix::fill_rect`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle starting at (`x`, `y`) and extending to the far edges
    pub fn from_origin(x: i32, y: i32) -> Self {
        Self::new(x, y, u16::MAX, u16::MAX)
    }
}

/// Parameters for [`Pix::blit`]
///
/// The default copies the whole source to the destination origin, opaque.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Blit {
    /// Destination left edge
    pub dst_x: i32,
    /// Destination top edge
    pub dst_y: i32,
    /// Source left edge
    pub src_x: i32,
    /// Source top edge
    pub src_y: i32,
    /// Copy width (`None` = source width)
    pub width: Option<u16>,
    /// Copy height (`None` = source height)
    pub height: Option<u16>,
    /// Transparent color key
    pub key: Option<u8>,
}

impl Blit {
    /// Blit the whole source to (0, 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the destination origin
    pub fn dest(mut self, x: i32, y: i32) -> Self {
        self.dst_x = x;
        self.dst_y = y;
        self
    }

    /// Set the source origin
    pub fn source(mut self, x: i32, y: i32) -> Self {
        self.src_x = x;
        self.src_y = y;
        self
    }

    /// Limit the copied region
    pub fn size(mut self, width: u16, height: u16) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Skip source pixels equal to `key`
    ///
    /// Keys outside `0..=3` are accepted and never match pixels written
    /// through [`Pix::set_pixel`].
    pub fn key(mut self, key: u8) -> Self {
        self.key = Some(key);
        self
    }
}

/// Color selection for text rendering
///
/// Glyph cells carry a 2-bit value (`0` = ink .. `3` = background) which is
/// mapped through [`palette`](Self::palette):
///
/// - `colors` set: used as-is
/// - `color` set: `[color, color, background, background]` (no antialiasing)
/// - neither: `[3, 2, 1, background]`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextStyle {
    /// Single ink color
    pub color: Option<u8>,
    /// Background color
    pub background: u8,
    /// Explicit colors for glyph values 0, 1, 2 and 3
    pub colors: Option<[u8; 4]>,
}

impl TextStyle {
    /// Default antialiased style on background 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw with a single ink color
    pub fn color(mut self, color: u8) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the background color
    pub fn background(mut self, background: u8) -> Self {
        self.background = background;
        self
    }

    /// Set all four glyph colors explicitly
    pub fn colors(mut self, colors: [u8; 4]) -> Self {
        self.colors = Some(colors);
        self
    }

    /// Resolve the color for each glyph value
    pub fn palette(&self) -> [u8; 4] {
        match (self.colors, self.color) {
            (Some(colors), _) => colors,
            (None, Some(color)) => [color, color, self.background, self.background],
            (None, None) => [3, 2, 1, self.background],
        }
    }
}

/// 2-bit-per-pixel framebuffer
///
/// Row-major, one byte per pixel, over any byte storage `B`. A fixed-size
/// array works without an allocator; with the `alloc` feature an owned
/// `Vec<u8>` buffer can be created with [`Pix::blank`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pix<B> {
    /// Pixel storage, `width * height` bytes
    buffer: B,
    /// Width in pixels
    width: u16,
    /// Height in pixels
    height: u16,
}

impl<B> Pix<B>
where
    B: AsRef<[u8]>,
{
    /// Wrap an existing buffer
    ///
    /// # Errors
    ///
    /// Returns [`PixError::SizeMismatch`] unless the buffer holds exactly
    /// `width * height` bytes.
    pub fn new(width: u16, height: u16, buffer: B) -> Result<Self, PixError> {
        let required = usize::from(width) * usize::from(height);
        let provided = buffer.as_ref().len();
        if provided != required {
            return Err(PixError::SizeMismatch { required, provided });
        }
        Ok(Self {
            buffer,
            width,
            height,
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Raw pixel values, row-major
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_ref()
    }

    /// Give back the underlying storage
    pub fn into_inner(self) -> B {
        self.buffer
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x >= usize::from(self.width) || y >= usize::from(self.height) {
            return None;
        }
        Some(x + y * usize::from(self.width))
    }

    /// Read the pixel at (`x`, `y`), `0` when out of bounds
    pub fn pixel(&self, x: i32, y: i32) -> u8 {
        self.index(x, y)
            .and_then(|index| self.buffer.as_ref().get(index).copied())
            .unwrap_or(0)
    }
}

impl<B> Pix<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Write the pixel at (`x`, `y`); ignored when out of bounds
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u8) {
        if let Some(pixel) = self
            .index(x, y)
            .and_then(|index| self.buffer.as_mut().get_mut(index))
        {
            *pixel = color & LEVEL_MASK;
        }
    }

    /// Fill the whole buffer
    pub fn fill(&mut self, color: u8) {
        self.buffer.as_mut().fill(color & LEVEL_MASK);
    }

    /// Fill a rectangle, clipped to the buffer
    ///
    /// A negative origin is pulled in to the edge without shrinking the
    /// rectangle; the extent is then cut at the far edges. Rectangles lying
    /// entirely past an edge draw nothing.
    pub fn fill_rect(&mut self, color: u8, area: Rect) {
        let width = i32::from(self.width);
        let height = i32::from(self.height);
        if width == 0 || height == 0 || area.x >= width || area.y >= height {
            return;
        }
        if area.x.saturating_add(i32::from(area.width)) <= 0
            || area.y.saturating_add(i32::from(area.height)) <= 0
        {
            return;
        }

        let x = area.x.clamp(0, width - 1);
        let y = area.y.clamp(0, height - 1);
        let w = i32::from(area.width).min(width - x) as usize;
        let h = i32::from(area.height).min(height - y) as usize;
        let (x, y) = (x as usize, y as usize);

        let stride = usize::from(self.width);
        let color = color & LEVEL_MASK;
        let buffer = self.buffer.as_mut();
        for row in y..y + h {
            let start = row * stride + x;
            buffer[start..start + w].fill(color);
        }
    }

    /// Copy a region of `source` into this buffer
    ///
    /// Negative offsets on either side shift the other side's offset and
    /// shrink the region by the same amount, so only the overlap is copied.
    /// The region is then limited to what remains of both buffers.
    pub fn blit<S>(&mut self, source: &Pix<S>, op: Blit)
    where
        S: AsRef<[u8]>,
    {
        let Blit {
            mut dst_x,
            mut dst_y,
            mut src_x,
            mut src_y,
            width,
            height,
            key,
        } = op;
        let mut width = width.map_or(i32::from(source.width), i32::from);
        let mut height = height.map_or(i32::from(source.height), i32::from);

        if dst_x < 0 {
            src_x = src_x.saturating_sub(dst_x);
            width = width.saturating_add(dst_x);
            dst_x = 0;
        }
        if src_x < 0 {
            dst_x = dst_x.saturating_sub(src_x);
            width = width.saturating_add(src_x);
            src_x = 0;
        }
        if dst_y < 0 {
            src_y = src_y.saturating_sub(dst_y);
            height = height.saturating_add(dst_y);
            dst_y = 0;
        }
        if src_y < 0 {
            dst_y = dst_y.saturating_sub(src_y);
            height = height.saturating_add(src_y);
            src_y = 0;
        }

        let width = width
            .min(i32::from(source.width).saturating_sub(src_x))
            .min(i32::from(self.width).saturating_sub(dst_x));
        let height = height
            .min(i32::from(source.height).saturating_sub(src_y))
            .min(i32::from(self.height).saturating_sub(dst_y));
        if width <= 0 || height <= 0 {
            return;
        }

        let (width, height) = (width as usize, height as usize);
        let (src_x, src_y) = (src_x as usize, src_y as usize);
        let (dst_x, dst_y) = (dst_x as usize, dst_y as usize);
        let src_stride = usize::from(source.width);
        let dst_stride = usize::from(self.width);
        let src = source.buffer.as_ref();
        let dst = self.buffer.as_mut();

        for row in 0..height {
            let from = (src_y + row) * src_stride + src_x;
            let to = (dst_y + row) * dst_stride + dst_x;
            let src_row = &src[from..from + width];
            let dst_row = &mut dst[to..to + width];
            match key {
                None => dst_row.copy_from_slice(src_row),
                Some(key) => {
                    for (pixel, &color) in dst_row.iter_mut().zip(src_row) {
                        if color != key {
                            *pixel = color;
                        }
                    }
                }
            }
        }
    }

    /// Draw `text` with its top-left corner at (`x`, `y`)
    ///
    /// Each character advances 4 pixels. Characters without a glyph are
    /// skipped and take no space.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, style: TextStyle) {
        let palette = style.palette();
        let mut cursor = x;

        for c in text.chars() {
            let Some(glyph) = font::glyph(c) else {
                continue;
            };
            for (row, values) in glyph.rows().iter().enumerate() {
                for (col, &value) in values.iter().enumerate() {
                    self.set_pixel(
                        cursor.saturating_add(col as i32),
                        y.saturating_add(row as i32),
                        palette[usize::from(value & LEVEL_MASK)],
                    );
                }
            }
            cursor = cursor.saturating_add(GLYPH_WIDTH as i32);
        }
    }
}

#[cfg(any(test, feature = "alloc"))]
impl Pix<Vec<u8>> {
    /// Allocate a zero-filled buffer
    pub fn blank(width: u16, height: u16) -> Self {
        Self {
            buffer: vec![0; usize::from(width) * usize::from(height)],
            width,
            height,
        }
    }

    /// Build a buffer from rows of pixel values
    ///
    /// The width is taken from the first row. Longer rows are cut, shorter
    /// rows leave zeros.
    pub fn from_rows<R>(rows: &[R]) -> Self
    where
        R: AsRef<[u8]>,
    {
        let height = u16::try_from(rows.len()).unwrap_or(u16::MAX);
        let width = rows.first().map_or(0, |row| {
            u16::try_from(row.as_ref().len()).unwrap_or(u16::MAX)
        });

        let mut pix = Self::blank(width, height);
        for (y, row) in rows.iter().enumerate().take(usize::from(height)) {
            for (x, &color) in row.as_ref().iter().enumerate().take(usize::from(width)) {
                pix.set_pixel(x as i32, y as i32, color);
            }
        }
        pix
    }

    /// Render `text` into a new buffer, 4 pixels per character by 6
    ///
    /// The width is counted in characters, including ones without a glyph;
    /// those leave zero columns at the right end.
    pub fn from_text(text: &str, style: TextStyle) -> Self {
        let max_chars = usize::from(u16::MAX) / GLYPH_WIDTH;
        let chars = text.chars().count().min(max_chars);
        let mut pix = Self::blank((chars * GLYPH_WIDTH) as u16, GLYPH_HEIGHT as u16);
        pix.draw_text(0, 0, text, style);
        pix
    }
}

impl<B> fmt::Display for Pix<B>
where
    B: AsRef<[u8]>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..i32::from(self.height) {
            if y > 0 {
                f.write_char('\n')?;
            }
            for x in 0..i32::from(self.width) {
                f.write_char(SHADES[usize::from(self.pixel(x, y) & LEVEL_MASK)])?;
            }
        }
        Ok(())
    }
}
