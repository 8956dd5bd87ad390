//! Application-wide constants and compile-time configuration.
//!
//! Screen geometry, timing parameters and the pin map live here so they
//! can be tuned in one place. There is no runtime configuration.

// Display

/// LCD width in pixels (ST7735S, portrait).
pub const SCREEN_WIDTH: u8 = 128;

/// LCD height in pixels.
pub const SCREEN_HEIGHT: u8 = 160;

/// SPI clock for the LCD (MHz). The ST7735S tolerates up to 15 MHz writes.
pub const LCD_SPI_MHZ: u32 = 8;

// Timing

/// Rate of the periodic tick that drives the animation (Hz).
pub const TICK_HZ: u64 = 250;

/// Ticks accumulated before a redraw is requested. 250 Hz / 25 = 10 redraws/s.
pub const TICKS_PER_REDRAW: u8 = 25;

/// Switch debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 20;

// Buzzer

/// PWM counter clock after the /16 prescaler (Hz).
pub const PWM_CLOCK_HZ: u32 = 1_000_000;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the actual `embassy_nrf::peripherals::*` are
// taken in `main.rs`.  Adjust for your own wiring.
//
//   Button 1 (song)     → P0.11
//   Button 2 (open)     → P0.12
//   Button 3 (pause)    → P0.24
//   Button 4 (reset)    → P0.25
//   LCD SCK             → P1.15
//   LCD MOSI            → P1.13
//   LCD CS              → P1.12
//   LCD DC              → P1.11
//   LCD RST             → P1.10
//   Buzzer              → P1.08
//   Status LED          → P0.13 (active-low)
