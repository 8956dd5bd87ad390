//! Drawing surface used by the scenes.
//!
//! Scenes only ever fill rectangles, print a line of text and blank the
//! screen, so that is all the [`Canvas`] trait asks for. [`GraphicsCanvas`]
//! implements it for any `embedded-graphics` draw target with an RGB565
//! colour format, which covers the ST7735S driver on the board and
//! `MockDisplay` in tests.

use embedded_graphics::mono_font::ascii::FONT_5X7;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::{Rgb565, WebColors};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::error::Error;

/// The fixed set of colours the demo paints with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Palette {
    Black,
    Yellow,
    Brown,
    Blue,
    White,
}

impl From<Palette> for Rgb565 {
    fn from(color: Palette) -> Self {
        match color {
            Palette::Black => Rgb565::BLACK,
            Palette::Yellow => Rgb565::YELLOW,
            Palette::Brown => Rgb565::CSS_BROWN,
            Palette::Blue => Rgb565::BLUE,
            Palette::White => Rgb565::WHITE,
        }
    }
}

/// Primitive drawing operations consumed by the scenes.
///
/// Coordinates are screen pixels with the origin at the top-left corner.
/// Clipping of out-of-bounds areas is left to the implementation.
pub trait Canvas {
    /// Paint an opaque `width` × `height` rectangle with its top-left at (x, y).
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Palette)
        -> Result<(), Error>;

    /// Render `text` in 5×7 glyphs, left to right, top-left at (x, y).
    fn draw_text(&mut self, x: i32, y: i32, text: &str, fg: Palette, bg: Palette)
        -> Result<(), Error>;

    /// Fill the whole screen with one colour.
    fn clear_screen(&mut self, color: Palette) -> Result<(), Error>;
}

/// [`Canvas`] over an `embedded-graphics` draw target.
pub struct GraphicsCanvas<D> {
    target: D,
}

impl<D> GraphicsCanvas<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: D) -> Self {
        Self { target }
    }

    /// Borrow the wrapped draw target.
    pub fn target(&self) -> &D {
        &self.target
    }
}

fn text_style(fg: Palette, bg: Palette) -> MonoTextStyle<'static, Rgb565> {
    MonoTextStyleBuilder::new()
        .font(&FONT_5X7)
        .text_color(fg.into())
        .background_color(bg.into())
        .build()
}

impl<D> Canvas for GraphicsCanvas<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn fill_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: Palette,
    ) -> Result<(), Error> {
        Rectangle::new(Point::new(x, y), Size::new(width, height))
            .into_styled(PrimitiveStyle::with_fill(color.into()))
            .draw(&mut self.target)
            .map_err(|_| Error::Display)
    }

    fn draw_text(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        fg: Palette,
        bg: Palette,
    ) -> Result<(), Error> {
        Text::with_baseline(text, Point::new(x, y), text_style(fg, bg), Baseline::Top)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| Error::Display)
    }

    fn clear_screen(&mut self, color: Palette) -> Result<(), Error> {
        self.target.clear(color.into()).map_err(|_| Error::Display)
    }
}
