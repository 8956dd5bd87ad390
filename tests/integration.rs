//! Integration tests for present-demo host-testable logic.
//!
//! These drive the demo the way the firmware loop does: periodic ticks,
//! switch readings from the port, and a dispatch whenever a redraw is due.

use embedded_graphics::mock_display::MockDisplay;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use present_demo::config::TICKS_PER_REDRAW;
use present_demo::scene::present::{FLAP_CEILING, FLAP_STEP, STRIPE_WIDTH};
use present_demo::ui::canvas::{Canvas, GraphicsCanvas, Palette};
use present_demo::ui::input_logic::SwitchBank;
use present_demo::ui::tone::{Melody, Tone, JINGLE_BELLS};
use present_demo::{Demo, Error, Scene};

/// Canvas that only remembers the stripe-sized and lid-sized fills.
#[derive(Default)]
struct Log {
    fills: Vec<(i32, i32, u32, u32, Palette)>,
    clears: usize,
}

impl Canvas for Log {
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Palette) -> Result<(), Error> {
        self.fills.push((x, y, w, h, color));
        Ok(())
    }

    fn draw_text(&mut self, _: i32, _: i32, _: &str, _: Palette, _: Palette) -> Result<(), Error> {
        Ok(())
    }

    fn clear_screen(&mut self, _: Palette) -> Result<(), Error> {
        self.clears += 1;
        Ok(())
    }
}

/// Buzzer double that plays the real tune and remembers the last pitch.
struct TuneRecorder {
    melody: Melody,
    pitch: Option<u16>,
}

impl TuneRecorder {
    fn new() -> Self {
        Self {
            melody: Melody::new(&JINGLE_BELLS),
            pitch: None,
        }
    }
}

impl Tone for TuneRecorder {
    fn tone_start(&mut self) {
        self.pitch = self.melody.advance();
    }

    fn tone_stop(&mut self) {
        self.pitch = None;
        self.melody.rewind();
    }
}

/// Feed ticks until `redraws` dispatches have happened.
fn run(demo: &mut Demo, redraws: u32, canvas: &mut impl Canvas, tone: &mut impl Tone) {
    let mut ticks = 0u32;
    let mut done = 0;
    while done < redraws {
        ticks += 1;
        if demo.poll_tick() {
            demo.dispatch(canvas, tone).unwrap();
            done += 1;
        }
    }
    assert!(ticks <= redraws * u32::from(TICKS_PER_REDRAW));
}

#[test]
fn fresh_start_draws_alternating_stripes_then_lid() {
    let mut demo = Demo::new();
    let geo = *demo.geometry();
    let mut log = Log::default();
    let mut tone = TuneRecorder::new();

    // N stripes with N * 16 <= 96.
    let n = u32::from(geo.present_height / STRIPE_WIDTH);
    run(&mut demo, n, &mut log, &mut tone);

    assert_eq!(log.clears, 1);
    assert_eq!(log.fills.len(), n as usize);
    for (i, &(x, y, w, h, color)) in log.fills.iter().enumerate() {
        assert_eq!(x, geo.left + i as i32 * i32::from(STRIPE_WIDTH));
        assert_eq!(y, geo.top);
        assert_eq!(w, u32::from(STRIPE_WIDTH));
        assert_eq!(h, u32::from(geo.present_height));
        let expected = if i % 2 == 0 { Palette::Yellow } else { Palette::Brown };
        assert_eq!(color, expected);
    }

    // The next redraw closes the box with the lid.
    log.fills.clear();
    run(&mut demo, 1, &mut log, &mut tone);
    assert_eq!(log.fills.len(), 2);
    assert_eq!(log.fills[1].4, Palette::Yellow);
    assert_eq!(log.fills[1].1, geo.top - 16);
    assert_eq!(demo.scene(), Scene::DrawingStripes);
}

#[test]
fn full_demo_sequence_through_switch_bank() {
    let mut demo = Demo::new();
    let mut bank = SwitchBank::new();
    let mut log = Log::default();
    let mut tone = TuneRecorder::new();

    run(&mut demo, 3, &mut log, &mut tone);

    // Press and release button 2 (bit 1 low = down).
    if let Some(states) = bank.update(0x0D) {
        demo.on_switches(states);
    }
    assert_eq!(demo.scene(), Scene::OpeningPresent);
    if let Some(states) = bank.update(0x0F) {
        demo.on_switches(states);
    }
    assert_eq!(demo.scene(), Scene::OpeningPresent);

    let lifts = u32::from(FLAP_CEILING / FLAP_STEP);
    run(&mut demo, lifts + 1, &mut log, &mut tone);
    assert_eq!(demo.scene(), Scene::ShowingMessage);

    // Button 1: song plays on the next redraw.
    if let Some(states) = bank.update(0x0E) {
        demo.on_switches(states);
    }
    run(&mut demo, 1, &mut log, &mut tone);
    assert_eq!(demo.scene(), Scene::Song);
    assert_eq!(tone.pitch, Some(659));

    // Button 1 released, button 4 pressed: reset silences the buzzer.
    bank.update(0x0F);
    if let Some(states) = bank.update(0x07) {
        demo.on_switches(states);
    }
    assert_eq!(demo.scene(), Scene::DrawingStripes);
    assert_eq!(demo.progress().stripe_offset, 0);

    let clears = log.clears;
    run(&mut demo, 1, &mut log, &mut tone);
    assert_eq!(tone.pitch, None);
    assert_eq!(log.clears, clears + 1);
}

#[test]
fn stripes_render_onto_a_real_draw_target() {
    let mut display: MockDisplay<Rgb565> = MockDisplay::new();
    display.set_allow_overdraw(true);
    display.set_allow_out_of_bounds_drawing(true);
    let mut canvas = GraphicsCanvas::new(display);
    let mut tone = TuneRecorder::new();

    let mut demo = Demo::new();
    let geo = *demo.geometry();
    demo.dispatch(&mut canvas, &mut tone).unwrap();
    demo.dispatch(&mut canvas, &mut tone).unwrap();

    // MockDisplay is 64×64, enough to see the first two stripes.
    let first = Point::new(geo.left, geo.top);
    let second = Point::new(geo.left + i32::from(STRIPE_WIDTH), geo.top);
    assert_eq!(canvas.target().get_pixel(first), Some(Rgb565::YELLOW));
    assert_eq!(
        canvas.target().get_pixel(second),
        Some(Rgb565::from(Palette::Brown))
    );
    assert_eq!(
        canvas.target().get_pixel(Point::new(0, 0)),
        Some(Rgb565::BLACK)
    );
}
