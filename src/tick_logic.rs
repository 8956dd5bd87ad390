use crate::config::TICKS_PER_REDRAW;

/// Divides the periodic tick down to the redraw rate.
///
/// The flag starts raised so the first scene step happens right after boot.
#[derive(Clone, Copy, Debug)]
pub struct RedrawTimer {
    ticks: u8,
    pending: bool,
}

impl RedrawTimer {
    pub const fn new() -> Self {
        Self {
            ticks: 0,
            pending: true,
        }
    }

    /// Count one tick; raises the redraw flag every `TICKS_PER_REDRAW` ticks.
    pub fn tick(&mut self) {
        self.ticks += 1;
        if self.ticks >= TICKS_PER_REDRAW {
            self.ticks = 0;
            self.pending = true;
        }
    }

    /// Clear the redraw flag, returning whether it was set.
    pub fn take(&mut self) -> bool {
        core::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

impl Default for RedrawTimer {
    fn default() -> Self {
        Self::new()
    }
}
