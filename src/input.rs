//! Digital input abstraction.

/// Raw electrical level of a digital pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinLevel {
    /// Logic low.
    Low,
    /// Logic high.
    High,
}

impl From<bool> for PinLevel {
    /// `true` maps to `High`.
    fn from(high: bool) -> Self {
        if high { PinLevel::High } else { PinLevel::Low }
    }
}

/// Trait for abstracting a digital input pin.
///
/// Implement this for your GPIO so a [`Button`](crate::Button) can sample
/// it. The read is a plain synchronous sample: no debounce, no pull
/// configuration. Configure the pin as an input before handing it over.
pub trait DigitalInput {
    /// Samples the current level of the pin.
    ///
    /// Handle any hardware errors internally - this method cannot fail.
    fn read(&mut self) -> PinLevel;
}

impl<D: DigitalInput + ?Sized> DigitalInput for &mut D {
    fn read(&mut self) -> PinLevel {
        (**self).read()
    }
}

#[cfg(feature = "embedded-hal")]
pub use hal::HalInput;

#[cfg(feature = "embedded-hal")]
mod hal {
    use super::{DigitalInput, PinLevel};
    use core::convert::Infallible;
    use embedded_hal::digital::InputPin;

    /// Adapts an `embedded-hal` 1.0 input pin to [`DigitalInput`].
    ///
    /// Only infallible pins are accepted, which covers the GPIO inputs of
    /// the common HALs.
    pub struct HalInput<P> {
        pin: P,
    }

    impl<P: InputPin<Error = Infallible>> HalInput<P> {
        /// Wraps an already configured input pin.
        pub fn new(pin: P) -> Self {
            Self { pin }
        }

        /// Returns the wrapped pin.
        pub fn release(self) -> P {
            self.pin
        }
    }

    impl<P: InputPin<Error = Infallible>> DigitalInput for HalInput<P> {
        fn read(&mut self) -> PinLevel {
            match self.pin.is_high() {
                Ok(high) => PinLevel::from(high),
                Err(never) => match never {},
            }
        }
    }

}
