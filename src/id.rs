//! Button identity allocation.
//!
//! Every button gets an 8-bit id when it is constructed. Ids count up from 0
//! and wrap silently after 256 allocations, so they are only unique while a
//! program creates at most 256 buttons from the same allocator. Create
//! buttons once at startup and keep them for the life of the program.

use core::cell::Cell;
use portable_atomic::{AtomicU8, Ordering};

/// An identifier for a button.
///
/// A thin wrapper around `u8`. Assigned once at construction and never
/// changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonId(pub u8);

impl From<u8> for ButtonId {
    fn from(id: u8) -> Self {
        ButtonId(id)
    }
}

impl From<ButtonId> for u8 {
    fn from(id: ButtonId) -> Self {
        id.0
    }
}

impl core::fmt::Display for ButtonId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of button ids.
pub trait IdAllocator {
    /// Hands out the next id.
    fn allocate(&self) -> ButtonId;
}

impl<A: IdAllocator + ?Sized> IdAllocator for &A {
    fn allocate(&self) -> ButtonId {
        (**self).allocate()
    }
}

/// Id counter for a single execution context.
///
/// Not `Sync`. Use [`SharedIdCounter`] if buttons can be constructed from
/// more than one context.
#[derive(Debug, Default)]
pub struct IdCounter {
    next: Cell<u8>,
}

impl IdCounter {
    /// Creates a counter starting at 0.
    pub const fn new() -> Self {
        Self { next: Cell::new(0) }
    }

    /// Id the next allocation will return.
    pub fn peek(&self) -> ButtonId {
        ButtonId(self.next.get())
    }

    /// Starts counting from 0 again.
    pub fn reset(&self) {
        self.next.set(0);
    }
}

impl IdAllocator for IdCounter {
    fn allocate(&self) -> ButtonId {
        let id = self.next.get();
        self.next.set(id.wrapping_add(1));
        ButtonId(id)
    }
}

/// Id counter backed by an atomic, usable as a `static`.
///
/// On targets without native atomic read-modify-write, enable one of
/// `portable-atomic`'s `critical-section` or `unsafe-assume-single-core`
/// features in the final binary.
#[derive(Debug, Default)]
pub struct SharedIdCounter {
    next: AtomicU8,
}

impl SharedIdCounter {
    /// Creates a counter starting at 0.
    pub const fn new() -> Self {
        Self {
            next: AtomicU8::new(0),
        }
    }

    /// Id the next allocation will return.
    pub fn peek(&self) -> ButtonId {
        ButtonId(self.next.load(Ordering::Relaxed))
    }

    /// Starts counting from 0 again.
    pub fn reset(&self) {
        self.next.store(0, Ordering::Relaxed);
    }
}

impl IdAllocator for SharedIdCounter {
    fn allocate(&self) -> ButtonId {
        // fetch_add wraps on overflow
        ButtonId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}
