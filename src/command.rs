//! Display controller command definitions
//!
//! The panel controller uses page addressing: the display RAM is split into
//! horizontal pages of 8 pixel rows, and each data byte written to a page
//! covers one column of 8 vertical dots. Before writing a page the column
//! pointer is set with a pair of nibble commands.
//!
//! ## Command Structure
//!
//! Every transfer is a command byte followed by an optional payload:
//! 1. Set DC low (command mode)
//! 2. Send command byte
//! 3. Set DC high (data mode)
//! 4. Send payload bytes (if any)
//!
//! ## Example
//!
//! ```
//! use pewpew_lcd::{command, DisplayInterface};
//!
//! /// Counts the bytes that would go over the wire
//! struct Meter(usize);
//!
//! impl DisplayInterface for Meter {
//!     type Error = ();
//!
//!     fn send(&mut self, _command: u8, payload: &[u8]) -> Result<(), ()> {
//!         self.0 += 1 + payload.len();
//!         Ok(())
//!     }
//! }
//!
//! // Point at column 0 of page 3 and write 4 columns
//! let mut meter = Meter(0);
//! meter.send(command::SET_COLUMN_LOW, &[])?;
//! meter.send(command::SET_COLUMN_HIGH, &[])?;
//! meter.send(command::SET_PAGE | 3, &[0xFF, 0x00, 0xFF, 0x00])?;
//! assert_eq!(meter.0, 7);
//! # Ok::<(), ()>(())
//! ```

/// Set lower column address nibble (0x00-0x0F)
///
/// OR the low four bits of the column address into this command.
pub const SET_COLUMN_LOW: u8 = 0x00;

/// Set higher column address nibble (0x10-0x17)
///
/// OR the high bits of the column address into this command.
pub const SET_COLUMN_HIGH: u8 = 0x10;

/// Set page address (0xB0-0xBF)
///
/// OR the page index into this command. The payload that follows is written
/// to consecutive columns of that page.
pub const SET_PAGE: u8 = 0xB0;
