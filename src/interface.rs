//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for communicating with the panel controller over SPI.
//!
//! ## Hardware Requirements
//!
//! The controller requires:
//! - SPI bus (MOSI + SCK, chip select handled by the [`SpiDevice`])
//! - 1 GPIO pin:
//!   - **DC**: Data/Command select (output)
//!
//! Reset and power-up sequencing are left to the board code.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use pewpew_lcd::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! // Create interface with SPI and the DC pin
//! let mut interface = Interface::new(MockSpi, MockPin);
//!
//! // Command without payload
//! let _ = interface.send(0x10, &[]);
//!
//! // Command followed by data
//! let _ = interface.send(0xB0, &[0xFF, 0x00, 0xFF]);
//! ```

use core::fmt::Debug;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the transport to the panel controller
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// bus that can carry a command byte followed by a payload.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. If the board
/// routes the display through something else (a shared bus, a display
/// coprocessor), implement this trait on your own type.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a command byte followed by its payload
    ///
    /// The implementation must:
    /// 1. Send `command` in command mode
    /// 2. Send `payload` in data mode (nothing when empty)
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transfer fails.
    fn send(&mut self, command: u8, payload: &[u8]) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over SPI and GPIO error types.
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// SPI communication error
    Spi(SpiErr),
    /// GPIO pin error
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// 4-wire SPI implementation of [`DisplayInterface`]
///
/// ## Type Parameters
///
/// * `SPI` - SPI device implementing [`SpiDevice`]
/// * `DC` - Data/Command pin implementing [`OutputPin`]
pub struct Interface<SPI, DC> {
    /// SPI device for communication
    spi: SPI,
    /// Data/Command select pin (low=command, high=data)
    dc: DC,
}

impl<SPI, DC> Interface<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    /// Create a new Interface
    ///
    /// # Arguments
    ///
    /// * `spi` - SPI device (must implement [`SpiDevice`])
    /// * `dc` - Data/Command pin (output, low=command, high=data)
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self { spi, dc }
    }

    /// Release the SPI device and DC pin
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }
}

impl<SPI, DC> DisplayInterface for Interface<SPI, DC>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin,
    DC::Error: Debug,
{
    type Error = InterfaceError<SPI::Error, DC::Error>;

    fn send(&mut self, command: u8, payload: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)?;
        if payload.is_empty() {
            return Ok(());
        }
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        self.spi.write(payload).map_err(InterfaceError::Spi)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use embedded_hal::digital::ErrorType;
    use embedded_hal::spi::{ErrorType as SpiErrorType, Operation};

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Event {
        DcLow,
        DcHigh,
        Write(usize),
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct MockError;

    impl embedded_hal::digital::Error for MockError {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    impl embedded_hal::spi::Error for MockError {
        fn kind(&self) -> embedded_hal::spi::ErrorKind {
            embedded_hal::spi::ErrorKind::Other
        }
    }

    #[derive(Debug, Default)]
    struct MockSpi {
        events: Vec<Event>,
        bytes: Vec<u8>,
        fail: bool,
    }

    impl SpiErrorType for MockSpi {
        type Error = MockError;
    }

    impl SpiDevice for MockSpi {
        fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockError);
            }
            for op in operations {
                if let Operation::Write(data) = op {
                    self.events.push(Event::Write(data.len()));
                    self.bytes.extend_from_slice(data);
                }
            }
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct MockDc {
        events: Vec<Event>,
        fail: bool,
    }

    impl ErrorType for MockDc {
        type Error = MockError;
    }

    impl OutputPin for MockDc {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockError);
            }
            self.events.push(Event::DcLow);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockError);
            }
            self.events.push(Event::DcHigh);
            Ok(())
        }
    }

    #[test]
    fn test_send_command_and_payload() {
        let mut interface = Interface::new(MockSpi::default(), MockDc::default());
        interface.send(0xB2, &[1, 2, 3]).unwrap();

        let (spi, dc) = interface.release();
        assert_eq!(spi.bytes, [0xB2, 1, 2, 3]);
        assert_eq!(spi.events, [Event::Write(1), Event::Write(3)]);
        assert_eq!(dc.events, [Event::DcLow, Event::DcHigh]);
    }

    #[test]
    fn test_send_empty_payload_stays_in_command_mode() {
        let mut interface = Interface::new(MockSpi::default(), MockDc::default());
        interface.send(0x10, &[]).unwrap();

        let (spi, dc) = interface.release();
        assert_eq!(spi.bytes, [0x10]);
        assert_eq!(dc.events, [Event::DcLow]);
    }

    #[test]
    fn test_spi_error_is_wrapped() {
        let spi = MockSpi {
            fail: true,
            ..MockSpi::default()
        };
        let mut interface = Interface::new(spi, MockDc::default());
        assert!(matches!(
            interface.send(0x00, &[]),
            Err(InterfaceError::Spi(MockError))
        ));
    }

    #[test]
    fn test_pin_error_is_wrapped() {
        let dc = MockDc {
            fail: true,
            ..MockDc::default()
        };
        let mut interface = Interface::new(MockSpi::default(), dc);
        assert!(matches!(
            interface.send(0x00, &[]),
            Err(InterfaceError::Pin(MockError))
        ));
    }
}
