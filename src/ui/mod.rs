//! User-facing I/O seen from the scenes - LCD, buttons, buzzer.
//!
//! Everything here is plain logic or a trait seam, so it builds and tests
//! on the host. The nRF52840 drivers behind the traits live in `board`.
//!
//! ## Components
//!
//! - **Canvas**: rectangle/text/clear primitives over a 128×160 RGB565 LCD
//! - **Input**: 4 tactile switches, active-low, reported as a state set
//! - **Tone**: buzzer start/stop plus the tune played by the Song scene

pub mod canvas;
pub mod input_logic;
pub mod tone;

/// Physical buttons, in priority order.
///
///   - 1: play the song
///   - 2: open the present (only while the stripes are showing)
///   - 3: pause
///   - 4: reset the demo
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    One,
    Two,
    Three,
    Four,
}

impl Button {
    /// All buttons, highest priority first.
    pub const ALL: [Button; 4] = [Button::One, Button::Two, Button::Three, Button::Four];

    /// Bit of this button on the switch port.
    pub const fn mask(self) -> u8 {
        match self {
            Button::One => 0x01,
            Button::Two => 0x02,
            Button::Three => 0x04,
            Button::Four => 0x08,
        }
    }
}
