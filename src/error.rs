//! Unified error type for present-demo.
//!
//! We avoid `alloc` - all error variants are fieldless.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Display
    /// A draw call to the display failed (SPI or controller error).
    Display,

    /// The display controller could not be initialised.
    DisplayInit,

    // Runtime
    /// A background task could not be spawned.
    Spawn,
}
