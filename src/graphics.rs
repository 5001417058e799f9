//! Graphics support via embedded-graphics
//!
//! [`Pix`] implements [`DrawTarget`] with [`Gray2`] colors, so the
//! embedded-graphics primitives, images and fonts can draw into it. Gray
//! levels map one-to-one onto pixel values through [`GrayColor::luma`].
//!
//! ## Example
//!
//! ```rust
//! use embedded_graphics::{
//!     pixelcolor::Gray2,
//!     prelude::*,
//!     primitives::{Line, PrimitiveStyle},
//! };
//! use pewpew_lcd::Pix;
//!
//! let mut screen = Pix::new(8, 8, [0u8; 64])?;
//!
//! let _ = Line::new(Point::new(0, 0), Point::new(7, 7))
//!     .into_styled(PrimitiveStyle::with_stroke(Gray2::new(3), 1))
//!     .draw(&mut screen);
//!
//! assert_eq!(screen.pixel(4, 4), 3);
//! # Ok::<(), pewpew_lcd::PixError>(())
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::{Gray2, GrayColor},
    prelude::Pixel,
};

use crate::pix::Pix;

impl<B> DrawTarget for Pix<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = Gray2;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.set_pixel(x, y, color.luma());
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.luma());
        Ok(())
    }
}

impl<B> OriginDimensions for Pix<B>
where
    B: AsRef<[u8]>,
{
    fn size(&self) -> Size {
        Size::new(u32::from(self.width()), u32::from(self.height()))
    }
}
