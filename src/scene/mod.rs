//! Scene state machine - the demo's only control logic.
//!
//! [`Demo`] owns the active [`Scene`], the animation [`Progress`] and the
//! redraw divider. The platform feeds it two kinds of events:
//!
//! - `poll_tick()` on every periodic tick; returns `true` when a redraw is due
//! - `on_switches()` / `on_button_edge()` when the buttons change
//!
//! and calls `dispatch()` to run one step of the active scene.

pub mod present;


use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::Error;
use crate::tick_logic::RedrawTimer;
use crate::ui::canvas::{Canvas, Palette};
use crate::ui::input_logic::SwitchStates;
use crate::ui::tone::Tone;
use crate::ui::Button;

pub use present::{Geometry, Opening, Progress, StripeStep};

/// Modes of the demo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Scene {
    /// Painting the box stripe by stripe, then the lid.
    DrawingStripes,
    /// Walls, hollow interior and a lifting flap.
    OpeningPresent,
    /// "Hello There" inside the open box.
    ShowingMessage,
    /// Nothing moves, buzzer silent.
    Paused,
    /// Buzzer plays the tune.
    Song,
    /// Blank screen. No button leads here.
    Off,
}

/// The whole demo state, created once at start-up.
#[derive(Clone, Debug)]
pub struct Demo {
    scene: Scene,
    progress: Progress,
    geometry: Geometry,
    redraw: RedrawTimer,
    clear_pending: bool,
}

impl Demo {
    /// Fresh demo for the board's screen: stripes, counters zero, screen
    /// cleared on the first dispatch.
    pub fn new() -> Self {
        Self::with_geometry(Geometry::for_screen(SCREEN_WIDTH, SCREEN_HEIGHT))
    }

    pub fn with_geometry(geometry: Geometry) -> Self {
        Self {
            scene: Scene::DrawingStripes,
            progress: Progress::default(),
            geometry,
            redraw: RedrawTimer::new(),
            clear_pending: true,
        }
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// True while a screen clear is waiting for the next dispatch.
    pub fn clear_pending(&self) -> bool {
        self.clear_pending
    }

    /// Count one periodic tick. Returns `true` (and clears the redraw flag)
    /// when the caller should `dispatch()`.
    pub fn poll_tick(&mut self) -> bool {
        self.redraw.tick();
        self.redraw.take()
    }

    /// Apply a new switch reading.
    ///
    /// Only the highest-priority held button is considered, even when its
    /// rule does nothing (button 2 outside the stripes scene shadows
    /// buttons 3 and 4).
    pub fn on_switches(&mut self, states: SwitchStates) -> Scene {
        match states.highest_priority() {
            Some(button) => self.on_button_edge(button),
            None => self.scene,
        }
    }

    /// React to a single button press. Returns the scene now active.
    pub fn on_button_edge(&mut self, button: Button) -> Scene {
        match button {
            Button::One => self.enter(Scene::Song),
            Button::Two => {
                if self.scene == Scene::DrawingStripes {
                    self.enter(Scene::OpeningPresent);
                }
            }
            Button::Three => self.enter(Scene::Paused),
            Button::Four => self.reset(),
        }
        self.scene
    }

    /// Back to the first scene with all counters zeroed; the screen is
    /// cleared by the next dispatch.
    pub fn reset(&mut self) {
        self.progress = Progress::default();
        self.clear_pending = true;
        self.enter(Scene::DrawingStripes);
    }

    /// Switch scenes without touching the counters.
    pub fn enter(&mut self, scene: Scene) {
        if scene != self.scene {
            #[cfg(feature = "defmt")]
            defmt::info!("Scene: {} -> {}", self.scene, scene);
            self.scene = scene;
        }
    }

    /// Run one step of the active scene.
    ///
    /// Every scene except Song silences the buzzer, whether or not a tone
    /// was playing.
    pub fn dispatch<C, T>(&mut self, canvas: &mut C, tone: &mut T) -> Result<(), Error>
    where
        C: Canvas,
        T: Tone,
    {
        if self.scene == Scene::Song {
            tone.tone_start();
        } else {
            tone.tone_stop();
        }

        if self.clear_pending {
            canvas.clear_screen(Palette::Black)?;
            self.clear_pending = false;
        }

        match self.scene {
            Scene::DrawingStripes => {
                present::draw_stripes(&mut self.progress, &self.geometry, canvas)?;
            }
            Scene::OpeningPresent => {
                if present::open_present(&mut self.progress, &self.geometry, canvas)?
                    == Opening::Open
                {
                    self.enter(Scene::ShowingMessage);
                }
            }
            Scene::ShowingMessage => present::show_message(&self.geometry, canvas)?,
            Scene::Off => canvas.clear_screen(Palette::Black)?,
            Scene::Paused | Scene::Song => {}
        }
        Ok(())
    }
}

impl Default for Demo {
    fn default() -> Self {
        Self::new()
    }
}
