use crate::button::Button;
use crate::id::{ButtonId, IdCounter};
use crate::input::DigitalInput;
use crate::log;
use crate::time::TimeSource;
use crate::types::{ButtonConfig, ButtonPolarity, ButtonState, ButtonType};
use heapless::Vec;

/// Errors that can occur during collection operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CollectionError {
    /// The specified button ID does not exist in the collection.
    InvalidButtonId(ButtonId),

    /// The collection is full and cannot accept more buttons.
    CollectionFull,
}

impl core::fmt::Display for CollectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CollectionError::InvalidButtonId(id) => {
                write!(f, "button ID {} does not exist in collection", id.0)
            }
            CollectionError::CollectionFull => {
                write!(f, "collection is full, cannot add more buttons")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CollectionError {}

/// A classified state together with the button that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    pub id: ButtonId,
    pub state: ButtonState,
}

/// Owns a fixed set of buttons that share one time source.
///
/// The collection owns the id counter its buttons are numbered from, so ids
/// start at 0 for every collection and stay unique within it. `MAX_BUTTONS`
/// is capped at 256, the number of distinct ids. All buttons must use the same pin type; wrap
/// heterogeneous pins in an enum implementing [`DigitalInput`].
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `P` - Input pin implementation type
/// * `T` - Time source implementation type
/// * `MAX_BUTTONS` - Maximum number of buttons this collection can hold
pub struct ButtonCollection<'t, P: DigitalInput, T: TimeSource, const MAX_BUTTONS: usize> {
    buttons: Vec<Button<'t, P, T>, MAX_BUTTONS>,
    ids: IdCounter,
    time_source: &'t T,
}

impl<'t, P, T, const MAX_BUTTONS: usize> ButtonCollection<'t, P, T, MAX_BUTTONS>
where
    P: DigitalInput,
    T: TimeSource,
{
    /// Creates a new empty collection.
    ///
    /// Fails to compile if `MAX_BUTTONS` exceeds 256.
    pub fn new(time_source: &'t T) -> Self {
        const { assert!(MAX_BUTTONS <= 256, "button ids are 8-bit, at most 256 buttons") };

        Self {
            buttons: Vec::new(),
            ids: IdCounter::new(),
            time_source,
        }
    }

    /// Adds a button on `pin` and returns the id it was given.
    ///
    /// # Errors
    /// * `CollectionFull` - The collection already holds `MAX_BUTTONS` buttons
    pub fn add_button(
        &mut self,
        pin: P,
        config: ButtonConfig,
    ) -> Result<ButtonId, CollectionError> {
        if self.buttons.is_full() {
            log::debug!("button collection full ({=usize})", MAX_BUTTONS);
            return Err(CollectionError::CollectionFull);
        }

        let button = Button::new(pin, self.time_source, &self.ids, config);
        let id = button.id();
        self.buttons
            .push(button)
            .map_err(|_| CollectionError::CollectionFull)?;

        Ok(id)
    }

    /// Polls every button once and collects the ones that reported an event.
    ///
    /// Buttons are polled in insertion order. Call this once per loop tick.
    pub fn poll_all(&mut self) -> Vec<ButtonEvent, MAX_BUTTONS> {
        let mut events = Vec::new();

        for button in self.buttons.iter_mut() {
            let state = button.poll();
            if state.is_event() {
                // One slot per button, cannot overflow.
                let _ = events.push(ButtonEvent {
                    id: button.id(),
                    state,
                });
            }
        }

        events
    }

    /// Polls a single button.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the collection.
    pub fn poll(&mut self, id: ButtonId) -> Result<ButtonState, CollectionError> {
        Ok(self.get_mut(id)?.poll())
    }

    /// Reconfigures a single button.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the collection.
    pub fn update_properties(
        &mut self,
        id: ButtonId,
        button_type: ButtonType,
        polarity: ButtonPolarity,
        held_threshold_ms: u32,
    ) -> Result<(), CollectionError> {
        self.get_mut(id)?
            .update_properties(button_type, polarity, held_threshold_ms);
        Ok(())
    }

    /// Returns whether the given button currently reads as pressed.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the collection.
    pub fn is_pressed(&mut self, id: ButtonId) -> Result<bool, CollectionError> {
        Ok(self.get_mut(id)?.is_pressed())
    }

    /// Returns the configuration of the given button.
    ///
    /// # Errors
    /// Returns `InvalidButtonId` if the button does not exist in the collection.
    pub fn config(&self, id: ButtonId) -> Result<ButtonConfig, CollectionError> {
        self.get(id)
            .map(|button| button.config())
            .ok_or(CollectionError::InvalidButtonId(id))
    }

    /// Returns a reference to the given button.
    pub fn get(&self, id: ButtonId) -> Option<&Button<'t, P, T>> {
        self.buttons.iter().find(|button| button.id() == id)
    }

    fn get_mut(&mut self, id: ButtonId) -> Result<&mut Button<'t, P, T>, CollectionError> {
        self.buttons
            .iter_mut()
            .find(|button| button.id() == id)
            .ok_or(CollectionError::InvalidButtonId(id))
    }

    /// Returns the number of buttons currently in the collection.
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    /// Returns true if the collection contains no buttons.
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Returns true if the collection contains a button with the given ID.
    pub fn contains(&self, id: ButtonId) -> bool {
        self.get(id).is_some()
    }
}
