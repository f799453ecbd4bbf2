#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Button`**: Samples one input pin per poll and classifies it into a `ButtonState`
//! - **`ButtonState`**: What a poll reports (`NotPressed`, `Pressed`, `ShortPress`, `LongPress`, `Released`)
//! - **`ButtonConfig`**: Button type, polarity and long-press threshold
//! - **`ButtonType`**: `Momentary` (short/long press) or `Latching` (press edge only)
//! - **`ButtonPolarity`**: Whether `Low` or `High` means pressed
//! - **`ButtonId`** / **`IdAllocator`**: Per-button 8-bit ids handed out at construction
//! - **`ButtonCollection`**: Fixed-capacity set of buttons polled together
//! - **`DigitalInput`**: Trait to implement for your GPIO input
//! - **`TimeSource`**: Trait to implement for your millisecond tick counter
//!
//! Buttons never allocate and never fail. Poll them from the main loop at a
//! steady period of a few milliseconds.

mod log;

pub mod time;
pub mod input;
pub mod types;
pub mod id;
pub mod button;
pub mod collection;

pub use button::{Button, COOLOFF_MS};
pub use collection::{ButtonCollection, ButtonEvent, CollectionError};
pub use id::{ButtonId, IdAllocator, IdCounter, SharedIdCounter};
#[cfg(feature = "embedded-hal")]
pub use input::HalInput;
pub use input::{DigitalInput, PinLevel};
pub use time::TimeSource;
pub use types::{ButtonConfig, ButtonPolarity, ButtonState, ButtonType, DEFAULT_HELD_THRESHOLD_MS};
