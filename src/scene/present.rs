//! One-step renderers for the gift-box animation.
//!
//! Each function draws a single frame's worth of change and advances the
//! matching counters in [`Progress`]. Counters only move after the draw
//! calls for that step succeeded, so a failed step is simply retried on
//! the next redraw.
//!
//! On the 128×160 screen the box sits at x = 16, y = 55 and is 96 px
//! square; the lid overhangs it by 8 px on each side.

use crate::error::Error;
use crate::ui::canvas::{Canvas, Palette};

/// Width of one stripe (px).
pub const STRIPE_WIDTH: u8 = 16;

/// Height of the lid cap and of the opening flap (px).
pub const LID_HEIGHT: u8 = 16;

/// How far the lid sticks out past the box on each side (px).
pub const LID_OVERHANG: u8 = 8;

/// Width of a side wall while the box is opening (px).
pub const WALL_WIDTH: u8 = 4;

/// Growth of the hollow interior per step (px).
pub const REVEAL_STEP: u8 = 3;

/// Upward movement of the flap per step (px).
pub const FLAP_STEP: u8 = 3;

/// Flap offset at which the box counts as open.
pub const FLAP_CEILING: u8 = 30;

/// Height of the black band that erases the flap's previous position.
pub const FLAP_ERASE_HEIGHT: u8 = 3;

/// Text shown once the present is open.
pub const MESSAGE: &str = "Hello There";

/// Column of the message text.
pub const MESSAGE_X: i32 = 15;

/// Fixed screen positions of the present, derived once from the screen size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    /// Left edge of the box (a quarter of the centre column).
    pub left: i32,
    /// Top edge of the box.
    pub top: i32,
    /// x of the right wall while opening.
    pub right_wall: i32,
    /// Box size; used both as stripe height and as box width.
    pub present_height: u8,
    /// Row of the message text.
    pub message_y: i32,
}

impl Geometry {
    pub const fn for_screen(width: u8, height: u8) -> Self {
        let col = width as i32 / 2;
        let row = height as i32 / 2;
        Self {
            left: col / 4,
            top: row - 25,
            right_wall: width as i32 - 36 + 16,
            present_height: (width as u16 * 3 / 4) as u8,
            message_y: row - 50,
        }
    }

    pub fn lid_x(&self) -> i32 {
        self.left - i32::from(LID_OVERHANG)
    }

    pub fn lid_width(&self) -> u32 {
        u32::from(self.present_height) + 2 * u32::from(LID_OVERHANG)
    }

    /// Largest interior reveal: the box height minus one wall.
    pub fn reveal_limit(&self) -> u8 {
        self.present_height.saturating_sub(WALL_WIDTH)
    }
}

/// Animation counters. All zero on a fresh or reset demo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    /// `false` = next stripe is yellow, `true` = brown.
    pub stripe_parity: bool,
    /// Horizontal offset of the next stripe from the box's left edge.
    pub stripe_offset: u8,
    /// Height of the hollowed-out interior.
    pub reveal: u8,
    /// How far the flap has lifted above the box top.
    pub flap: u8,
}

impl Progress {
    pub fn stripe_color(&self) -> Palette {
        if self.stripe_parity {
            Palette::Brown
        } else {
            Palette::Yellow
        }
    }

    /// True once another full stripe would run past the box.
    pub fn stripes_complete(&self, geometry: &Geometry) -> bool {
        u16::from(self.stripe_offset) + u16::from(STRIPE_WIDTH) > u16::from(geometry.present_height)
    }
}

/// What a stripe step drew.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StripeStep {
    /// A full stripe; offset advanced and colour flipped.
    Stripe,
    /// The closing segment and the lid; nothing advanced.
    Lid,
}

/// What an opening step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opening {
    /// The flap moved up another step.
    Lifting,
    /// The flap reached the ceiling; the box is open.
    Open,
}

/// Draw the next stripe, or the lid once the box is full.
pub fn draw_stripes<C: Canvas>(
    progress: &mut Progress,
    geometry: &Geometry,
    canvas: &mut C,
) -> Result<StripeStep, Error> {
    let color = progress.stripe_color();
    let height = u32::from(geometry.present_height);

    if !progress.stripes_complete(geometry) {
        canvas.fill_rect(
            geometry.left + i32::from(progress.stripe_offset),
            geometry.top,
            STRIPE_WIDTH.into(),
            height,
            color,
        )?;
        progress.stripe_offset += STRIPE_WIDTH;
        progress.stripe_parity = !progress.stripe_parity;
        return Ok(StripeStep::Stripe);
    }

    canvas.fill_rect(
        geometry.left + i32::from(geometry.present_height) - i32::from(progress.stripe_offset),
        geometry.top,
        STRIPE_WIDTH.into(),
        height,
        color,
    )?;
    canvas.fill_rect(
        geometry.lid_x(),
        geometry.top - i32::from(LID_HEIGHT),
        geometry.lid_width(),
        LID_HEIGHT.into(),
        Palette::Yellow,
    )?;
    Ok(StripeStep::Lid)
}

/// Redraw the walls, hollow out a little more and lift the flap a step.
pub fn open_present<C: Canvas>(
    progress: &mut Progress,
    geometry: &Geometry,
    canvas: &mut C,
) -> Result<Opening, Error> {
    let height = u32::from(geometry.present_height);
    let wall = u32::from(WALL_WIDTH);

    canvas.fill_rect(geometry.left, geometry.top, wall, height, Palette::Blue)?;
    canvas.fill_rect(geometry.right_wall, geometry.top, wall, height, Palette::Blue)?;

    let limit = geometry.reveal_limit();
    if progress.reveal < limit {
        let reveal = progress.reveal.saturating_add(REVEAL_STEP).min(limit);
        canvas.fill_rect(
            geometry.left + i32::from(WALL_WIDTH),
            geometry.top,
            height.saturating_sub(2 * wall),
            reveal.into(),
            Palette::Black,
        )?;
        progress.reveal = reveal;
    }

    if progress.flap >= FLAP_CEILING {
        return Ok(Opening::Open);
    }
    draw_flap(geometry, progress.flap, canvas)?;
    progress.flap += FLAP_STEP;
    Ok(Opening::Lifting)
}

/// Erase band under the flap, then the flap itself, `lift` px above the box.
fn draw_flap<C: Canvas>(geometry: &Geometry, lift: u8, canvas: &mut C) -> Result<(), Error> {
    let y = geometry.top - i32::from(lift);
    canvas.fill_rect(
        geometry.lid_x(),
        y,
        geometry.lid_width(),
        FLAP_ERASE_HEIGHT.into(),
        Palette::Black,
    )?;
    canvas.fill_rect(
        geometry.lid_x(),
        y - i32::from(LID_HEIGHT),
        geometry.lid_width(),
        LID_HEIGHT.into(),
        Palette::Brown,
    )
}

pub fn show_message<C: Canvas>(geometry: &Geometry, canvas: &mut C) -> Result<(), Error> {
    canvas.draw_text(
        MESSAGE_X,
        geometry.message_y,
        MESSAGE,
        Palette::White,
        Palette::Black,
    )
}
