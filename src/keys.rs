//! Touch buttons
//!
//! The six touch pads are read as one bitmask. Channels are sampled in a
//! fixed order (X, O, right, left, down, up), shifting the mask left before
//! each one, so X ends up in the highest bit and up in the lowest.

use embedded_hal::digital::InputPin;

/// Up pad
pub const K_UP: u8 = 0x01;
/// Down pad
pub const K_DOWN: u8 = 0x02;
/// Left pad
pub const K_LEFT: u8 = 0x04;
/// Right pad
pub const K_RIGHT: u8 = 0x08;
/// O pad
pub const K_O: u8 = 0x10;
/// X pad
pub const K_X: u8 = 0x20;

/// Number of touch channels
pub const KEY_COUNT: usize = 6;

/// The six touch channels
pub struct Keys<T> {
    /// Channels in sampling order: X, O, right, left, down, up
    channels: [T; KEY_COUNT],
}

impl<T> Keys<T>
where
    T: InputPin,
{
    /// Wrap channels already in sampling order (X, O, right, left, down, up)
    pub fn new(channels: [T; KEY_COUNT]) -> Self {
        Self { channels }
    }

    /// Wrap one channel per pad
    pub fn from_pins(x: T, o: T, right: T, left: T, down: T, up: T) -> Self {
        Self::new([x, o, right, left, down, up])
    }

    /// Sample all channels into a `K_*` bitmask
    pub fn read(&mut self) -> Result<u8, T::Error> {
        let mut keys = 0u8;
        for channel in &mut self.channels {
            keys <<= 1;
            keys |= u8::from(channel.is_high()?);
        }
        Ok(keys)
    }

    /// Release the channels
    pub fn release(self) -> [T; KEY_COUNT] {
        self.channels
    }
}
