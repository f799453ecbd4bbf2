//! Shared test infrastructure for button-sense integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use button_sense::{Button, ButtonState, DigitalInput, PinLevel, TimeSource};
use core::cell::Cell;

/// Polling period used by the scenarios, in milliseconds.
pub const TICK_MS: u32 = 10;

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock millisecond clock with controllable time advancement
pub struct MockClock {
    now: Cell<u32>,
}

impl MockClock {
    pub fn new() -> Self {
        Self { now: Cell::new(0) }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }

    pub fn set(&self, ms: u32) {
        self.now.set(ms);
    }

    pub fn now(&self) -> u32 {
        self.now.get()
    }
}

impl TimeSource for MockClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}

// ============================================================================
// Mock Pin
// ============================================================================

/// Level shared between a test and the pin a button owns
pub struct PinDriver {
    level: Cell<PinLevel>,
}

impl PinDriver {
    pub fn new(level: PinLevel) -> Self {
        Self {
            level: Cell::new(level),
        }
    }

    pub fn set(&self, level: PinLevel) {
        self.level.set(level);
    }

    pub fn pin(&self) -> MockPin<'_> {
        MockPin { level: &self.level }
    }
}

/// Mock pin that reads whatever its driver was last set to
pub struct MockPin<'a> {
    level: &'a Cell<PinLevel>,
}

impl DigitalInput for MockPin<'_> {
    fn read(&mut self) -> PinLevel {
        self.level.get()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Polls `button` every `TICK_MS` from the current time until `until_ms`
/// (exclusive), with the pin at `level`. Returns `(time, state)` for every
/// tick that reported an event.
pub fn run_until<'t>(
    button: &mut Button<'t, MockPin<'_>, MockClock>,
    clock: &MockClock,
    driver: &PinDriver,
    level: PinLevel,
    until_ms: u32,
) -> heapless::Vec<(u32, ButtonState), 64> {
    let mut events = heapless::Vec::new();
    driver.set(level);

    while clock.now() < until_ms {
        let state = button.poll();
        if state.is_event() {
            events.push((clock.now(), state)).unwrap();
        }
        clock.advance(TICK_MS);
    }

    events
}
