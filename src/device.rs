//! Whole-device context
//!
//! [`Device`] gathers the peripherals a game talks to: the display, the
//! backlight, the touch pads and the frame ticker. It is built once by the
//! board code and handed to the game, which calls [`Device::init`] before
//! its first frame.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;
use embedded_hal::pwm::SetDutyCycle;
use log::debug;

use crate::backlight::Backlight;
use crate::display::Display;
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::keys::Keys;
use crate::pix::Pix;
use crate::tick::{Monotonic, Ticker};

type DeviceResult<I> = core::result::Result<(), Error<I>>;

/// Display, backlight, touch pads and ticker of one handheld
///
/// ## Type Parameters
///
/// * `I` - Display transport implementing [`DisplayInterface`]
/// * `P` - Backlight PWM implementing [`SetDutyCycle`]
/// * `T` - Touch channel implementing [`InputPin`]
/// * `C` - Clock implementing [`Monotonic`]
/// * `D` - Sleep implementing [`DelayNs`]
pub struct Device<I, P, T, C, D>
where
    I: DisplayInterface,
{
    display: Display<I>,
    backlight: Backlight<P>,
    keys: Keys<T>,
    ticker: Ticker<C, D>,
    /// Set once `init` has blanked the panel
    initialized: bool,
}

impl<I, P, T, C, D> Device<I, P, T, C, D>
where
    I: DisplayInterface,
    P: SetDutyCycle,
    T: InputPin,
    C: Monotonic,
    D: DelayNs,
{
    /// Bundle the peripherals; nothing is sent until [`init`](Self::init)
    pub fn new(
        display: Display<I>,
        backlight: Backlight<P>,
        keys: Keys<T>,
        ticker: Ticker<C, D>,
    ) -> Self {
        Self {
            display,
            backlight,
            keys,
            ticker,
            initialized: false,
        }
    }

    /// Blank the panel and start the frame ticker
    ///
    /// Does nothing after the first successful call.
    pub fn init(&mut self) -> DeviceResult<I> {
        if self.initialized {
            return Ok(());
        }
        self.display.blank()?;
        self.ticker.start();
        self.initialized = true;
        debug!("device initialized");
        Ok(())
    }

    /// Whether [`init`](Self::init) has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Write a frame to the display
    pub fn show<B>(&mut self, pix: &Pix<B>) -> DeviceResult<I>
    where
        B: AsRef<[u8]>,
    {
        self.display.show(pix)
    }

    /// Currently pressed pads as a `K_*` bitmask
    pub fn keys(&mut self) -> Result<u8, T::Error> {
        self.keys.read()
    }

    /// Set backlight brightness `0..=15`
    pub fn brightness(&mut self, level: u8) -> Result<(), P::Error> {
        self.backlight.set_brightness(level)
    }

    /// Wait out the rest of a frame of `delay_us` microseconds
    pub fn tick(&mut self, delay_us: u32) {
        self.ticker.tick(delay_us);
    }

    /// Access the display
    pub fn display_mut(&mut self) -> &mut Display<I> {
        &mut self.display
    }

    /// Access the backlight
    pub fn backlight_mut(&mut self) -> &mut Backlight<P> {
        &mut self.backlight
    }

    /// Access the touch pads
    pub fn keys_mut(&mut self) -> &mut Keys<T> {
        &mut self.keys
    }

    /// Access the ticker
    pub fn ticker_mut(&mut self) -> &mut Ticker<C, D> {
        &mut self.ticker
    }

    /// Release all peripherals
    pub fn release(self) -> (Display<I>, Backlight<P>, Keys<T>, Ticker<C, D>) {
        (self.display, self.backlight, self.keys, self.ticker)
    }
}
