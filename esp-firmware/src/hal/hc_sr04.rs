// HC-SR04 Ultraschall-Sensor
//
// Ablauf einer Messung:
// 1. Trigger 10 µs high
// 2. Warten bis Echo high wird (Sensor sendet Burst)
// 3. Dauer des Echo-Pulses messen → Entfernung
//
// Beide Wartephasen sind auf HCSR04_TIMEOUT_MS begrenzt, ein fehlendes Echo
// liefert HalError::Timeout statt den Task zu blockieren.

use embassy_time::{Duration, Instant, with_timeout};
use esp_core::{DistanceSensor, HalError};
use esp_hal::delay::Delay;
use esp_hal::gpio::{Input, InputConfig, InputPin, Level, Output, OutputConfig, OutputPin, Pull};

use crate::config::{HCSR04_TIMEOUT_MS, HCSR04_TRIGGER_US, HCSR04_US_PER_CM};

pub struct Hcsr04 {
    trigger: Output<'static>,
    echo: Input<'static>,
    delay: Delay,
}

impl Hcsr04 {
    pub fn new(trigger: impl OutputPin + 'static, echo: impl InputPin + 'static) -> Self {
        Self {
            trigger: Output::new(trigger, Level::Low, OutputConfig::default()),
            echo: Input::new(echo, InputConfig::default().with_pull(Pull::Down)),
            delay: Delay::new(),
        }
    }
}

/// Echo-Dauer in µs → Entfernung in cm (gesättigt auf u16)
pub fn echo_to_centimeters(echo_us: u64) -> u16 {
    (echo_us / HCSR04_US_PER_CM).min(u16::MAX as u64) as u16
}

impl DistanceSensor for Hcsr04 {
    async fn read_centimeters(&mut self) -> Result<u16, HalError> {
        let timeout = Duration::from_millis(HCSR04_TIMEOUT_MS);

        // Trigger-Puls: kurz genug für blockierendes Warten
        self.trigger.set_high();
        self.delay.delay_micros(HCSR04_TRIGGER_US);
        self.trigger.set_low();

        with_timeout(timeout, self.echo.wait_for_high())
            .await
            .map_err(|_| HalError::Timeout)?;
        let start = Instant::now();

        with_timeout(timeout, self.echo.wait_for_low())
            .await
            .map_err(|_| HalError::Timeout)?;

        Ok(echo_to_centimeters(start.elapsed().as_micros()))
    }
}
