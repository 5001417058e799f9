//! Backlight brightness
//!
//! Brightness is set in 16 steps, `0` (off) to [`MAX_BRIGHTNESS`], spread
//! linearly over the full duty range of a PWM channel.
//!
//! ## Example
//!
//! ```
//! use pewpew_lcd::backlight::{duty_for_level, BRIGHTNESS_SCALE};
//!
//! assert_eq!(duty_for_level(0), 0);
//! assert_eq!(duty_for_level(1), BRIGHTNESS_SCALE);
//! assert_eq!(duty_for_level(15), u16::MAX);
//! ```

use embedded_hal::pwm::SetDutyCycle;
use log::warn;

/// Highest brightness level
pub const MAX_BRIGHTNESS: u8 = 15;

/// 16-bit duty per brightness level
pub const BRIGHTNESS_SCALE: u16 = u16::MAX / MAX_BRIGHTNESS as u16;

/// `level` limited to [`MAX_BRIGHTNESS`]
pub const fn clamp_level(level: u8) -> u8 {
    if level > MAX_BRIGHTNESS {
        MAX_BRIGHTNESS
    } else {
        level
    }
}

/// 16-bit duty cycle for `level`, clamped to [`MAX_BRIGHTNESS`]
pub const fn duty_for_level(level: u8) -> u16 {
    clamp_level(level) as u16 * BRIGHTNESS_SCALE
}

/// Backlight on a PWM channel
pub struct Backlight<P> {
    pwm: P,
}

impl<P> Backlight<P>
where
    P: SetDutyCycle,
{
    /// Wrap a PWM channel
    pub fn new(pwm: P) -> Self {
        Self { pwm }
    }

    /// Set brightness `0..=15`
    ///
    /// Levels above [`MAX_BRIGHTNESS`] are clamped.
    pub fn set_brightness(&mut self, level: u8) -> Result<(), P::Error> {
        let clamped = clamp_level(level);
        if clamped != level {
            warn!("brightness {level} clamped to {MAX_BRIGHTNESS}");
        }
        self.pwm
            .set_duty_cycle_fraction(u16::from(clamped), u16::from(MAX_BRIGHTNESS))
    }

    /// Release the PWM channel
    pub fn release(self) -> P {
        self.pwm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::pwm::ErrorType;

    struct MockPwm {
        max: u16,
        duty: u16,
    }

    impl ErrorType for MockPwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for MockPwm {
        fn max_duty_cycle(&self) -> u16 {
            self.max
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            Ok(())
        }
    }

    #[test]
    fn test_scale_covers_full_range() {
        assert_eq!(BRIGHTNESS_SCALE, 4369);
        assert_eq!(duty_for_level(15), 65535);
        assert_eq!(duty_for_level(200), 65535);
    }

    #[test]
    fn test_clamp_level() {
        assert_eq!(clamp_level(0), 0);
        assert_eq!(clamp_level(MAX_BRIGHTNESS), MAX_BRIGHTNESS);
        assert_eq!(clamp_level(16), MAX_BRIGHTNESS);
        assert_eq!(clamp_level(u8::MAX), MAX_BRIGHTNESS);
    }

    #[test]
    fn test_set_brightness_clamps_like_duty_for_level() {
        let mut backlight = Backlight::new(MockPwm {
            max: u16::MAX,
            duty: 0,
        });
        for level in [16, 99, u8::MAX] {
            backlight.set_brightness(level).unwrap();
            assert_eq!(backlight.pwm.duty, duty_for_level(level));
        }
    }

    #[test]
    fn test_set_brightness_matches_fixed_scale() {
        let mut backlight = Backlight::new(MockPwm {
            max: u16::MAX,
            duty: 0,
        });
        for level in 0..=MAX_BRIGHTNESS {
            backlight.set_brightness(level).unwrap();
            assert_eq!(backlight.pwm.duty, duty_for_level(level));
        }
    }

    #[test]
    fn test_set_brightness_scales_to_channel() {
        let mut backlight = Backlight::new(MockPwm { max: 1500, duty: 0 });
        backlight.set_brightness(5).unwrap();
        assert_eq!(backlight.pwm.duty, 500);
        backlight.set_brightness(99).unwrap();
        assert_eq!(backlight.release().duty, 1500);
    }
}
