//! Buzzer abstraction and the tune played by the Song scene.
//!
//! The board driver owns a [`Melody`] and asks it for the next pitch every
//! time the Song scene calls [`Tone::tone_start`], i.e. once per redraw.

/// Audible output consumed by the scene dispatcher.
///
/// Both calls are idempotent with respect to sound on/off: starting a tone
/// that is already playing just carries the tune on, stopping a silent
/// buzzer does nothing.
pub trait Tone {
    /// Start playback, or continue it by one step if already playing.
    fn tone_start(&mut self);

    /// Silence the buzzer and rewind the tune.
    fn tone_stop(&mut self);
}

/// Largest counter top the nRF PWM accepts (15 bits).
pub const PWM_MAX_TOP: u16 = 0x7FFF;

/// One entry in a tune. `hz == 0` is a rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Note {
    pub hz: u16,
    /// Number of redraw steps the note is held for.
    pub steps: u8,
}

impl Note {
    pub const fn new(hz: u16, steps: u8) -> Self {
        Self { hz, steps }
    }

    pub const fn rest(steps: u8) -> Self {
        Self { hz: 0, steps }
    }

    pub fn is_rest(&self) -> bool {
        self.hz == 0
    }
}

const C5: u16 = 523;
const D5: u16 = 587;
const E5: u16 = 659;
const G5: u16 = 784;

/// Opening bars of "Jingle Bells" at 10 steps per second.
pub static JINGLE_BELLS: [Note; 14] = [
    Note::new(E5, 2),
    Note::new(E5, 2),
    Note::new(E5, 4),
    Note::new(E5, 2),
    Note::new(E5, 2),
    Note::new(E5, 4),
    Note::new(E5, 2),
    Note::new(G5, 2),
    Note::new(C5, 3),
    Note::new(D5, 1),
    Note::new(E5, 6),
    Note::rest(2),
    Note::new(E5, 2),
    Note::rest(4),
];

/// Cursor over a looping note table.
#[derive(Clone, Debug)]
pub struct Melody {
    notes: &'static [Note],
    index: usize,
    held: u8,
}

impl Melody {
    pub const fn new(notes: &'static [Note]) -> Self {
        Self {
            notes,
            index: 0,
            held: 0,
        }
    }

    /// Pitch to sound for this step (`None` for a rest), then move on.
    ///
    /// Each note lasts `steps` calls; the tune wraps around at the end.
    pub fn advance(&mut self) -> Option<u16> {
        let note = *self.notes.get(self.index)?;
        self.held += 1;
        if self.held >= note.steps {
            self.held = 0;
            self.index = (self.index + 1) % self.notes.len();
        }
        (!note.is_rest()).then_some(note.hz)
    }

    /// Go back to the first note.
    pub fn rewind(&mut self) {
        self.index = 0;
        self.held = 0;
    }

    /// Index of the note that the next `advance` will play.
    pub fn position(&self) -> usize {
        self.index
    }
}

/// PWM counter top producing `hz` from a counter running at `clock_hz`.
pub fn pwm_top(hz: u16, clock_hz: u32) -> u16 {
    let top = clock_hz / u32::from(hz.max(1));
    top.min(u32::from(PWM_MAX_TOP)) as u16
}
