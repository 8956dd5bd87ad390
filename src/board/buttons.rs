//! GPIO switch input with async debouncing.
//!
//! Four physical buttons (active-low with internal pull-up), read as one
//! 4-bit port so simultaneous presses reach the scene logic together:
//!   - 1 - play the song
//!   - 2 - open the present
//!   - 3 - pause
//!   - 4 - reset
//!
//! A single task waits for an edge on any switch, debounces, samples all
//! four and sends the new `SwitchStates` to the main loop whenever they
//! changed. Releases are reported too.

use defmt::debug;
use embassy_futures::select::select4;
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, Timer};
use present_demo::config::BUTTON_DEBOUNCE_MS;
use present_demo::ui::input_logic::{SwitchBank, SwitchStates};
use present_demo::ui::Button;

/// Debounced switch changes, consumed by the scene loop.
pub static SWITCH_EVENTS: Channel<CriticalSectionRawMutex, SwitchStates, 4> = Channel::new();

/// Sample the four switches into port bits (bit set = released).
fn read_port(switches: &[Input<'static>; 4]) -> u8 {
    Button::ALL
        .iter()
        .zip(switches)
        .fold(0xFF, |raw, (button, input)| {
            if input.is_low() {
                raw & !button.mask()
            } else {
                raw
            }
        })
}

/// Run the switch polling loop. `pins` are in button order 1..=4.
#[embassy_executor::task]
pub async fn switch_task(pins: [AnyPin; 4]) -> ! {
    let mut switches = pins.map(|pin| Input::new(pin, Pull::Up));
    let mut bank = SwitchBank::new();

    loop {
        {
            let [s1, s2, s3, s4] = &mut switches;
            select4(
                s1.wait_for_any_edge(),
                s2.wait_for_any_edge(),
                s3.wait_for_any_edge(),
                s4.wait_for_any_edge(),
            )
            .await;
        }

        // Debounce: wait, then sample every switch.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;

        if let Some(states) = bank.update(read_port(&switches)) {
            debug!("Switches: {}", states);
            SWITCH_EVENTS.send(states).await;
        }
    }
}
