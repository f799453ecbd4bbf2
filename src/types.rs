//! Core types for button configuration and classification.

use crate::input::PinLevel;

/// Default long-press threshold in milliseconds.
pub const DEFAULT_HELD_THRESHOLD_MS: u32 = 500;

/// Classified state of a button for a single poll.
///
/// This is a transient report, not stored state. Each event is reported on
/// exactly one poll; every other poll reports `NotPressed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Nothing to report.
    #[default]
    NotPressed,

    /// Rising edge of a latching button.
    Pressed,

    /// Momentary button pressed and released before the held threshold.
    ShortPress,

    /// Momentary button held for at least the held threshold. It may still
    /// be held.
    LongPress,

    /// Momentary button released after a long press.
    Released,
}

impl ButtonState {
    /// Returns true for every state other than `NotPressed`.
    #[inline]
    pub fn is_event(&self) -> bool {
        *self != ButtonState::NotPressed
    }
}

/// Mechanical kind of the attached button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonType {
    /// Springs back when released. Distinguishes short and long presses.
    #[default]
    Momentary,

    /// Stays down until toggled again. Only reports the press edge.
    Latching,
}

/// Which electrical level means "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonPolarity {
    /// Pressed reads low (pull-up, switch to ground).
    #[default]
    ActiveLow,

    /// Pressed reads high (pull-down, switch to supply).
    ActiveHigh,
}

impl ButtonPolarity {
    /// Pin level that counts as pressed.
    #[inline]
    pub fn pressed_level(&self) -> PinLevel {
        match self {
            ButtonPolarity::ActiveLow => PinLevel::Low,
            ButtonPolarity::ActiveHigh => PinLevel::High,
        }
    }

    /// Returns true if `level` means pressed under this polarity.
    #[inline]
    pub fn is_pressed(&self, level: PinLevel) -> bool {
        level == self.pressed_level()
    }
}

/// Runtime configuration of a single button.
///
/// A `held_threshold_ms` of zero is accepted: every hold becomes a long press
/// on the poll after it is first seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Button kind.
    pub button_type: ButtonType,

    /// Pressed level.
    pub polarity: ButtonPolarity,

    /// Boundary between a short and a long press, in milliseconds.
    pub held_threshold_ms: u32,
}

impl ButtonConfig {
    /// Creates a configuration.
    #[inline]
    pub const fn new(
        button_type: ButtonType,
        polarity: ButtonPolarity,
        held_threshold_ms: u32,
    ) -> Self {
        Self {
            button_type,
            polarity,
            held_threshold_ms,
        }
    }

    /// Momentary button with the given polarity and threshold.
    pub const fn momentary(polarity: ButtonPolarity, held_threshold_ms: u32) -> Self {
        Self::new(ButtonType::Momentary, polarity, held_threshold_ms)
    }

    /// Latching button with the given polarity.
    pub const fn latching(polarity: ButtonPolarity) -> Self {
        Self::new(ButtonType::Latching, polarity, DEFAULT_HELD_THRESHOLD_MS)
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::momentary(ButtonPolarity::ActiveLow, DEFAULT_HELD_THRESHOLD_MS)
    }
}
