//! Debounced button with short/long press classification.
//!
//! Provides [`Button`], which samples one input pin each time it is polled
//! and turns the raw level into edge-triggered [`ButtonState`] reports.

use crate::id::{ButtonId, IdAllocator};
use crate::input::DigitalInput;
use crate::log;
use crate::time::{TimeSource, deadline_after, deadline_reached};
use crate::types::{ButtonConfig, ButtonPolarity, ButtonState, ButtonType};

/// Suppression window after a long press is released, in milliseconds.
///
/// Contact bounce on release would otherwise be seen as a fresh press.
pub const COOLOFF_MS: u32 = 100;

/// Internal progress of the current press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Not pressed, nothing pending.
    Idle,
    /// Momentary press seen; becomes a long press at `long_press_at`.
    Tracking { long_press_at: u32 },
    /// Long press reported, waiting for release.
    Held,
    /// Long press released, input ignored until `until`.
    CoolingOff { until: u32 },
}

/// A single pushbutton polled from the main loop.
///
/// Each button owns its input pin and borrows the shared time source. Call
/// [`poll`](Self::poll) at a steady short period (every 5-10 ms); the timing
/// thresholds are only as precise as the polling period.
///
/// Every user action is reported exactly once:
/// - momentary: `ShortPress` on release before the threshold, or `LongPress`
///   once the threshold is crossed followed by `Released` on release;
/// - latching: `Pressed` on the press edge only.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `P` - Input pin implementation type
/// * `T` - Time source implementation type
pub struct Button<'t, P: DigitalInput, T: TimeSource> {
    pin: P,
    time_source: &'t T,
    id: ButtonId,
    config: ButtonConfig,
    phase: Phase,
    // Latching button is down. Kept apart from `phase` so a type switch
    // does not lose a pending release or cooloff.
    latched: bool,
}

impl<'t, P: DigitalInput, T: TimeSource> Button<'t, P, T> {
    /// Creates an idle button and assigns it the next id from `ids`.
    ///
    /// The pin must already be configured as an input.
    pub fn new<A: IdAllocator>(
        pin: P,
        time_source: &'t T,
        ids: &A,
        config: ButtonConfig,
    ) -> Self {
        let id = ids.allocate();
        log::debug!("button {=u8} created", id.0);

        Self {
            pin,
            time_source,
            id,
            config,
            phase: Phase::Idle,
            latched: false,
        }
    }

    /// Replaces the button configuration.
    ///
    /// Timing state is kept. A press already being tracked keeps the
    /// long-press deadline it was armed with.
    pub fn update_properties(
        &mut self,
        button_type: ButtonType,
        polarity: ButtonPolarity,
        held_threshold_ms: u32,
    ) {
        self.set_config(ButtonConfig::new(button_type, polarity, held_threshold_ms));
    }

    /// Replaces the button configuration. See [`update_properties`](Self::update_properties).
    pub fn set_config(&mut self, config: ButtonConfig) {
        self.config = config;
    }

    /// Classifies the button for this tick.
    ///
    /// Returns an event at most once per user action and `NotPressed`
    /// otherwise.
    pub fn poll(&mut self) -> ButtonState {
        let state = match self.config.button_type {
            ButtonType::Momentary => self.poll_momentary(),
            ButtonType::Latching => self.poll_latching(),
        };

        if state.is_event() {
            log::trace!("button {=u8}: {}", self.id.0, state);
        }

        state
    }

    fn poll_momentary(&mut self) -> ButtonState {
        let now = self.time_source.now_ms();
        self.latched = false;

        if let Phase::CoolingOff { until } = self.phase {
            if !deadline_reached(now, until) {
                return ButtonState::NotPressed;
            }
            self.phase = Phase::Idle;
        }

        let pressed = self.is_pressed();

        match (self.phase, pressed) {
            (Phase::Tracking { long_press_at }, true) => {
                if deadline_reached(now, long_press_at) {
                    self.phase = Phase::Held;
                    ButtonState::LongPress
                } else {
                    ButtonState::NotPressed
                }
            }
            (Phase::Tracking { .. }, false) => {
                self.phase = Phase::Idle;
                ButtonState::ShortPress
            }
            (Phase::Held, true) => ButtonState::NotPressed,
            (Phase::Held, false) => {
                self.phase = Phase::CoolingOff {
                    until: deadline_after(now, COOLOFF_MS),
                };
                ButtonState::Released
            }
            (Phase::Idle | Phase::CoolingOff { .. }, true) => {
                self.phase = Phase::Tracking {
                    long_press_at: deadline_after(now, self.config.held_threshold_ms),
                };
                ButtonState::NotPressed
            }
            (Phase::Idle | Phase::CoolingOff { .. }, false) => {
                self.phase = Phase::Idle;
                ButtonState::NotPressed
            }
        }
    }

    // Held and CoolingOff are left alone so a later switch back to
    // momentary still reports the pending release and honours the cooloff.
    fn poll_latching(&mut self) -> ButtonState {
        let was_down = self.latched || matches!(self.phase, Phase::Tracking { .. });

        if self.is_pressed() {
            self.latched = true;
            if was_down {
                ButtonState::NotPressed
            } else {
                ButtonState::Pressed
            }
        } else {
            self.latched = false;
            if let Phase::Tracking { .. } = self.phase {
                self.phase = Phase::Idle;
            }
            ButtonState::NotPressed
        }
    }

    /// Returns true if the pin currently reads as pressed.
    ///
    /// Raw sample through the configured polarity, no debounce.
    pub fn is_pressed(&mut self) -> bool {
        self.config.polarity.is_pressed(self.pin.read())
    }

    /// Returns the id assigned at construction.
    pub fn id(&self) -> ButtonId {
        self.id
    }

    /// Returns the current configuration.
    pub fn config(&self) -> ButtonConfig {
        self.config
    }

    /// Returns the button type.
    pub fn button_type(&self) -> ButtonType {
        self.config.button_type
    }

    /// Returns the button polarity.
    pub fn polarity(&self) -> ButtonPolarity {
        self.config.polarity
    }

    /// Returns the long-press threshold in milliseconds.
    pub fn held_threshold_ms(&self) -> u32 {
        self.config.held_threshold_ms
    }

    /// Consumes the button and returns its pin.
    pub fn release(self) -> P {
        self.pin
    }
}
