//! nRF52840 drivers behind the library's `Canvas` and `Tone` seams.
//!
//! ## Components
//!
//! - **Display**: ST7735S 128×160 colour LCD via SPIM3
//! - **Buzzer**: piezo on PWM0 channel 0
//! - **Buttons**: 4 tactile switches with debouncing

pub mod buttons;
pub mod buzzer;
pub mod display;
