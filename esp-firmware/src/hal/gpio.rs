// GPIO-Adapter: Platinen-LEDs und einzelne Ausgänge
//
// esp-hal `Output` kann nicht fehlschlagen, die Trait-Methoden liefern
// daher immer Ok.

use esp_core::{DigitalOutput, HalError, Led, LedBank};
use esp_hal::gpio::{Input, InputConfig, InputPin, Level, Output, OutputConfig, OutputPin, Pull};

/// Die drei Platinen-LEDs (aktiv high)
pub struct GpioLeds {
    leds: [Output<'static>; 3],
}

impl GpioLeds {
    /// Erstellt die LED-Bank, alle LEDs starten aus
    pub fn new(
        led1: impl OutputPin + 'static,
        led2: impl OutputPin + 'static,
        led3: impl OutputPin + 'static,
    ) -> Self {
        Self {
            leds: [
                Output::new(led1, Level::Low, OutputConfig::default()),
                Output::new(led2, Level::Low, OutputConfig::default()),
                Output::new(led3, Level::Low, OutputConfig::default()),
            ],
        }
    }
}

impl LedBank for GpioLeds {
    fn set(&mut self, led: Led, on: bool) -> Result<(), HalError> {
        self.leds[led.index()].set_level(Level::from(on));
        Ok(())
    }

    fn toggle(&mut self, led: Led) -> Result<(), HalError> {
        self.leds[led.index()].toggle();
        Ok(())
    }
}

/// Einzelner Ausgang (Summer, LCD-Daten- und Latch-Leitungen)
pub struct GpioPin(Output<'static>);

impl GpioPin {
    pub fn new(pin: impl OutputPin + 'static) -> Self {
        Self(Output::new(pin, Level::Low, OutputConfig::default()))
    }
}

impl DigitalOutput for GpioPin {
    fn set_high(&mut self) -> Result<(), HalError> {
        self.0.set_high();
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), HalError> {
        self.0.set_low();
        Ok(())
    }

    fn toggle(&mut self) -> Result<(), HalError> {
        self.0.toggle();
        Ok(())
    }
}

/// Taster mit internem Pull-up (gedrückt = low)
pub fn switch_input(pin: impl InputPin + 'static) -> Input<'static> {
    Input::new(pin, InputConfig::default().with_pull(Pull::Up))
}
