//! Piezo buzzer on a PWM channel.
//!
//! Each `tone_start()` plays the next step of the tune: the PWM top is set
//! for the note's pitch with a 50 % duty cycle. Rests and `tone_stop()`
//! turn the PWM off.

use embassy_nrf::peripherals::PWM0;
use embassy_nrf::pwm::{Prescaler, SimplePwm};
use present_demo::config::PWM_CLOCK_HZ;
use present_demo::ui::tone::{pwm_top, Melody, Tone, JINGLE_BELLS};

pub struct Buzzer {
    pwm: SimplePwm<'static, PWM0>,
    melody: Melody,
    sounding: bool,
}

impl Buzzer {
    pub fn new(mut pwm: SimplePwm<'static, PWM0>) -> Self {
        // 16 MHz / 16 = PWM_CLOCK_HZ
        pwm.set_prescaler(Prescaler::Div16);
        pwm.set_duty(0, 0);
        pwm.disable();
        Self {
            pwm,
            melody: Melody::new(&JINGLE_BELLS),
            sounding: false,
        }
    }

    fn silence(&mut self) {
        if self.sounding {
            self.pwm.set_duty(0, 0);
            self.pwm.disable();
            self.sounding = false;
        }
    }
}

impl Tone for Buzzer {
    fn tone_start(&mut self) {
        match self.melody.advance() {
            Some(hz) => {
                let top = pwm_top(hz, PWM_CLOCK_HZ);
                self.pwm.enable();
                self.pwm.set_max_duty(top);
                self.pwm.set_duty(0, top / 2);
                self.sounding = true;
            }
            None => self.silence(),
        }
    }

    fn tone_stop(&mut self) {
        self.silence();
        self.melody.rewind();
    }
}
