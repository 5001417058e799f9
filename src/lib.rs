//! PewPew-style LCD handheld support
//!
//! A 2-bit framebuffer, tiny font and page encoder for 8x8 handhelds whose
//! 1-bit LCD shows four gray levels by ordered dithering.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Clipped fills, color-keyed blits and text rendering
//! - Touch pads, PWM backlight and frame pacing
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use pewpew_lcd::{Builder, Display, Interface, Pix, Rect, TextStyle};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! let interface = Interface::new(spi, dc);
//! let config = match Builder::new().column_offset(8).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let mut display = Display::new(interface, config);
//! let _ = display.blank();
//!
//! let mut screen = match Pix::new(8, 8, [0u8; 64]) {
//!     Ok(screen) => screen,
//!     Err(_) => return,
//! };
//! screen.fill_rect(1, Rect::new(0, 6, 8, 2));
//! screen.draw_text(0, 0, "Hi", TextStyle::new().color(3));
//! let _ = display.show(&screen);
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Backlight brightness over PWM
pub mod backlight;
/// Controller command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Game-facing device context
pub mod device;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Built-in 4x6 font
pub mod font;
/// Hardware interface abstraction
pub mod interface;
/// Touch pad bitmask
pub mod keys;
/// 2-bit framebuffer
pub mod pix;
/// Page encoding and dither patterns
pub mod protocol;
/// Frame pacing
pub mod tick;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use backlight::{Backlight, MAX_BRIGHTNESS};
pub use config::{Builder, Config, MAX_COLUMNS, MAX_PAGES};
pub use device::Device;
pub use display::Display;
pub use error::{BuilderError, Error, GameOver, PixError};
pub use interface::{DisplayInterface, Interface, InterfaceError};
pub use keys::{K_DOWN, K_LEFT, K_O, K_RIGHT, K_UP, K_X, Keys};
pub use pix::{Blit, Pix, Rect, TextStyle};
pub use tick::{Monotonic, Ticker};
