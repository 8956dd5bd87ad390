use super::Button;

/// Mask of the four switch bits on the input port.
pub const SWITCH_MASK: u8 = 0x0F;

/// Down/up state of the four buttons at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchStates(u8);

impl SwitchStates {
    /// No button held.
    pub const fn released() -> Self {
        Self(0)
    }

    /// Decode raw port bits. Switches are active-low: a cleared bit is a
    /// button held down.
    pub fn from_port(raw: u8) -> Self {
        Self(!raw & SWITCH_MASK)
    }

    /// Only `button` held.
    pub fn only(button: Button) -> Self {
        Self(button.mask())
    }

    pub fn with(self, button: Button) -> Self {
        Self(self.0 | button.mask())
    }

    pub fn is_down(&self, button: Button) -> bool {
        self.0 & button.mask() != 0
    }

    pub fn any_down(&self) -> bool {
        self.0 != 0
    }

    /// First held button in priority order (button 1 highest).
    pub fn highest_priority(&self) -> Option<Button> {
        Button::ALL.into_iter().find(|&b| self.is_down(b))
    }
}

/// Tracks the last debounced switch reading and reports changes.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwitchBank {
    states: SwitchStates,
}

impl SwitchBank {
    pub const fn new() -> Self {
        Self {
            states: SwitchStates::released(),
        }
    }

    /// Feed a debounced port reading. Returns the new states if any
    /// button changed since the previous reading.
    pub fn update(&mut self, raw: u8) -> Option<SwitchStates> {
        let states = SwitchStates::from_port(raw);
        if states == self.states {
            return None;
        }
        self.states = states;
        Some(states)
    }

    pub fn states(&self) -> SwitchStates {
        self.states
    }
}
