// Analoge Ein- und Ausgänge
//
// Eingänge: ADC1 Einzelmessung mit Kurven-Kalibrierung (Ergebnis in mV).
// Ausgang: der ESP32-C6 hat keinen DAC, daher LEDC-PWM mit 8 Bit
// Auflösung; ein RC-Tiefpass am Pin glättet zur Spannung.

use esp_core::{AnalogChannel, AnalogInput, AnalogOutput, HalError};
use esp_hal::Blocking;
use esp_hal::analog::adc::{Adc, AdcCalCurve, AdcConfig, AdcPin, Attenuation};
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::ledc::channel::{self, ChannelHW, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{Ledc, LowSpeed};
use esp_hal::peripherals::{ADC1, GPIO0, GPIO1, GPIO6};
use esp_hal::time::Rate;

use crate::config::PWM_FREQUENCY_KHZ;

type Calibration = AdcCalCurve<ADC1<'static>>;

/// Drei ADC1-Kanäle (GPIO0, GPIO1, GPIO6), 11 dB Dämpfung (~0-3.1 V)
pub struct AdcChannels {
    adc: Adc<'static, ADC1<'static>, Blocking>,
    ch1: AdcPin<GPIO0<'static>, ADC1<'static>, Calibration>,
    ch2: AdcPin<GPIO1<'static>, ADC1<'static>, Calibration>,
    ch3: AdcPin<GPIO6<'static>, ADC1<'static>, Calibration>,
}

impl AdcChannels {
    pub fn new(
        adc1: ADC1<'static>,
        gpio0: GPIO0<'static>,
        gpio1: GPIO1<'static>,
        gpio6: GPIO6<'static>,
    ) -> Self {
        let mut config = AdcConfig::new();
        let ch1 = config.enable_pin_with_cal::<_, Calibration>(gpio0, Attenuation::_11dB);
        let ch2 = config.enable_pin_with_cal::<_, Calibration>(gpio1, Attenuation::_11dB);
        let ch3 = config.enable_pin_with_cal::<_, Calibration>(gpio6, Attenuation::_11dB);

        Self {
            adc: Adc::new(adc1, config),
            ch1,
            ch2,
            ch3,
        }
    }
}

impl AnalogInput for AdcChannels {
    fn read_single(&mut self, channel: AnalogChannel) -> Result<u16, HalError> {
        let sample = match channel {
            AnalogChannel::Ch1 => nb::block!(self.adc.read_oneshot(&mut self.ch1)),
            AnalogChannel::Ch2 => nb::block!(self.adc.read_oneshot(&mut self.ch2)),
            AnalogChannel::Ch3 => nb::block!(self.adc.read_oneshot(&mut self.ch3)),
        };
        sample.map_err(|_| HalError::ReadFailed)
    }
}

/// Konfiguriert LEDC Timer 0 mit 8 Bit Auflösung
pub fn pwm_timer<'a>(ledc: &Ledc<'a>) -> Result<timer::Timer<'a, LowSpeed>, HalError> {
    let mut pwm_timer = ledc.timer::<LowSpeed>(timer::Number::Timer0);
    pwm_timer
        .configure(timer::config::Config {
            duty: timer::config::Duty::Duty8Bit,
            clock_source: timer::LSClockSource::APBClk,
            frequency: Rate::from_khz(PWM_FREQUENCY_KHZ),
        })
        .map_err(|_| HalError::WriteFailed)?;
    Ok(pwm_timer)
}

/// Analoger Ausgang über LEDC Kanal 0
pub struct PwmAnalogOutput<'a> {
    channel: channel::Channel<'a, LowSpeed>,
}

impl<'a> PwmAnalogOutput<'a> {
    /// `pwm_timer` muss mit [`pwm_timer`] konfiguriert sein
    pub fn new(
        ledc: &Ledc<'a>,
        pwm_timer: &'a timer::Timer<'a, LowSpeed>,
        pin: impl PeripheralOutput<'a>,
    ) -> Result<Self, HalError> {
        let mut channel = ledc.channel(channel::Number::Channel0, pin);
        channel
            .configure(channel::config::Config {
                timer: pwm_timer,
                duty_pct: 0,
                pin_config: channel::config::PinConfig::PushPull,
            })
            .map_err(|_| HalError::WriteFailed)?;
        Ok(Self { channel })
    }
}

impl AnalogOutput for PwmAnalogOutput<'_> {
    fn write(&mut self, value: u8) -> Result<(), HalError> {
        // 8 Bit Duty: 0 = 0 V, 255 = ~3.3 V
        self.channel.set_duty_hw(value as u32);
        Ok(())
    }
}
