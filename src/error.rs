//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! framebuffer construction ([`PixError`]) and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`PixError`] - Buffer does not match the requested dimensions
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//! - [`GameOver`] - Application signal for the end of a game
//!
//! Drawing itself never fails: coordinates outside a buffer are clipped.
//!
//! ## Example
//!
//! ```
//! use pewpew_lcd::{Builder, BuilderError, Pix, PixError};
//!
//! // Panel too narrow for the 80 frame columns at offset 8
//! let result = Builder::new().columns(64).build();
//! assert!(matches!(result, Err(BuilderError::InvalidColumns { .. })));
//!
//! // Buffer does not match 8x8
//! let result = Pix::new(8, 8, [0u8; 32]);
//! assert!(matches!(result, Err(PixError::SizeMismatch { required: 64, provided: 32 })));
//! ```

use crate::interface::DisplayInterface;

/// Highest column count supported by the controller
pub const MAX_COLUMNS: u8 = 128;

/// Highest page count supported by the controller
pub const MAX_PAGES: u8 = 16;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying hardware error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Column offset does not fit the low-nibble column command
    ///
    /// The offset must be at most `0x0F`.
    InvalidColumnOffset {
        /// Requested offset
        column_offset: u8,
    },
    /// Panel columns cannot hold a frame
    ///
    /// Must satisfy `column_offset + 80 <= columns <= MAX_COLUMNS` (128).
    InvalidColumns {
        /// Requested column count
        columns: u8,
        /// Configured column offset
        column_offset: u8,
    },
    /// Page count outside `8..=MAX_PAGES` (16)
    InvalidPages {
        /// Requested page count
        pages: u8,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidColumnOffset { column_offset } => {
                write!(f, "Invalid column offset {column_offset} (max 15)")
            }
            Self::InvalidColumns {
                columns,
                column_offset,
            } => write!(
                f,
                "Invalid column count {columns} for offset {column_offset} (max {MAX_COLUMNS})"
            ),
            Self::InvalidPages { pages } => {
                write!(f, "Invalid page count {pages} (8..={MAX_PAGES})")
            }
        }
    }
}

impl core::error::Error for BuilderError {}

/// Errors that can occur when wrapping a framebuffer
#[derive(Debug, PartialEq)]
pub enum PixError {
    /// Buffer length differs from `width * height`
    SizeMismatch {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl core::fmt::Display for PixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::SizeMismatch { required, provided } => write!(
                f,
                "Buffer size mismatch: required {required} bytes, provided {provided}"
            ),
        }
    }
}

impl core::error::Error for PixError {}

/// The game has ended
///
/// Raised by game code to unwind out of its main loop. Nothing in this crate
/// returns it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameOver;

impl core::fmt::Display for GameOver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Game over")
    }
}

impl core::error::Error for GameOver {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_builder_error_messages() {
        assert_eq!(
            BuilderError::InvalidPages { pages: 3 }.to_string(),
            "Invalid page count 3 (8..=16)"
        );
        assert_eq!(
            BuilderError::InvalidColumnOffset { column_offset: 20 }.to_string(),
            "Invalid column offset 20 (max 15)"
        );
    }

    #[test]
    fn test_pix_error_message() {
        let err = PixError::SizeMismatch {
            required: 64,
            provided: 10,
        };
        assert_eq!(
            err.to_string(),
            "Buffer size mismatch: required 64 bytes, provided 10"
        );
    }

    #[test]
    fn test_game_over_is_error() {
        fn takes_error(_: &dyn core::error::Error) {}
        takes_error(&GameOver);
        assert_eq!(GameOver.to_string(), "Game over");
    }
}
