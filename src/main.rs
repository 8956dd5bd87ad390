//! present-demo firmware for the nRF52840-DK.
//!
//! Boots the chip, brings up the LCD, buzzer and switches, then runs the
//! scene loop: wait for the next tick or switch change, feed it to the
//! demo, and dispatch a scene step whenever a redraw is due. While waiting
//! the executor sleeps (WFE) and the status LED is off.

#![no_std]
#![no_main]

mod board;

use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{Level, Output, OutputDrive, Pin};
use embassy_nrf::pwm::SimplePwm;
use embassy_nrf::{bind_interrupts, peripherals, spim};
use embassy_time::{Duration, Ticker};
use present_demo::config::TICK_HZ;
use present_demo::{Demo, Error};
use {defmt_rtt as _, panic_probe as _};

use crate::board::buttons::{switch_task, SWITCH_EVENTS};
use crate::board::buzzer::Buzzer;

bind_interrupts!(struct Irqs {
    SPIM3 => spim::InterruptHandler<peripherals::SPI3>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("present-demo starting");

    // Status LED, active-low: lit while the CPU is awake.
    let mut led = Output::new(p.P0_13, Level::Low, OutputDrive::Standard);

    // LCD
    let mut spi_config = spim::Config::default();
    spi_config.frequency = board::display::configured_frequency();
    let spi = spim::Spim::new_txonly(p.SPI3, Irqs, p.P1_15, p.P1_13, spi_config);
    let cs = Output::new(p.P1_12, Level::High, OutputDrive::Standard);
    let dc = Output::new(p.P1_11, Level::Low, OutputDrive::Standard);
    let rst = Output::new(p.P1_10, Level::High, OutputDrive::Standard);
    let mut canvas = match board::display::init(spi, cs, dc, rst) {
        Ok(canvas) => canvas,
        Err(e) => {
            error!("LCD init failed: {}", e);
            return;
        }
    };

    // Buzzer
    let mut buzzer = Buzzer::new(SimplePwm::new_1ch(p.PWM0, p.P1_08));

    // Switches 1..=4
    let pins = [
        p.P0_11.degrade(),
        p.P0_12.degrade(),
        p.P0_24.degrade(),
        p.P0_25.degrade(),
    ];
    if spawner.spawn(switch_task(pins)).is_err() {
        error!("Switch task: {}", Error::Spawn);
        return;
    }

    let mut demo = Demo::new();
    let mut ticker = Ticker::every(Duration::from_hz(TICK_HZ));
    info!("Scene: {}", demo.scene());

    loop {
        led.set_high();
        let event = select(ticker.next(), SWITCH_EVENTS.receive()).await;
        led.set_low();

        match event {
            Either::First(()) => {
                if demo.poll_tick() {
                    if let Err(e) = demo.dispatch(&mut canvas, &mut buzzer) {
                        warn!("Redraw failed: {}", e);
                    }
                }
            }
            Either::Second(states) => {
                demo.on_switches(states);
            }
        }
    }
}
