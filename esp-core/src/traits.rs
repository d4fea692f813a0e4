//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung. Die Firmware implementiert sie für
//! die ESP32-C6 Peripherie, die Tests mit In-Memory Mocks.

use rgb::RGB8;

use crate::types::{AnalogChannel, Led, LedPattern};

/// Fehler-Typ für Peripherie-Zugriffe
///
/// Fehler werden an den Aufrufer gemeldet, es gibt keine automatischen Retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalError {
    WriteFailed,
    ReadFailed,
    Timeout,
}

#[cfg(feature = "defmt")]
impl defmt::Format for HalError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            HalError::WriteFailed => defmt::write!(fmt, "Write failed"),
            HalError::ReadFailed => defmt::write!(fmt, "Read failed"),
            HalError::Timeout => defmt::write!(fmt, "Timeout"),
        }
    }
}

/// Trait für die drei Platinen-LEDs
pub trait LedBank {
    fn set(&mut self, led: Led, on: bool) -> Result<(), HalError>;

    fn toggle(&mut self, led: Led) -> Result<(), HalError>;

    /// Setzt alle drei LEDs auf ein Muster
    fn show(&mut self, pattern: LedPattern) -> Result<(), HalError> {
        for led in Led::ALL {
            self.set(led, pattern.is_on(led))?;
        }
        Ok(())
    }
}

/// Trait für einen einzelnen digitalen Ausgang (Summer, LCD-Leitungen)
pub trait DigitalOutput {
    fn set_high(&mut self) -> Result<(), HalError>;

    fn set_low(&mut self) -> Result<(), HalError>;

    fn toggle(&mut self) -> Result<(), HalError>;

    fn set_level(&mut self, high: bool) -> Result<(), HalError> {
        if high { self.set_high() } else { self.set_low() }
    }
}

/// Trait für den Ultraschall-Abstandssensor (HC-SR04)
///
/// Die Messung blockiert den aufrufenden Task bis zum Echo (begrenzte Latenz).
#[allow(async_fn_in_trait)]
pub trait DistanceSensor {
    async fn read_centimeters(&mut self) -> Result<u16, HalError>;
}

/// Trait für analoge Eingänge (Einzelmessung)
pub trait AnalogInput {
    /// Liefert einen Rohwert (0-4095 bzw. Millivolt, je nach Kalibrierung)
    fn read_single(&mut self, channel: AnalogChannel) -> Result<u16, HalError>;
}

/// Trait für einen analogen Ausgang
pub trait AnalogOutput {
    /// Setzt den Ausgang sofort auf den Wert (8 Bit)
    fn write(&mut self, value: u8) -> Result<(), HalError>;
}

/// Trait für Status-Meldungen über UART
#[allow(async_fn_in_trait)]
pub trait SerialWriter {
    async fn send_str(&mut self, text: &str) -> Result<(), HalError>;
}

/// Trait für eine mehrstellige Ziffernanzeige
pub trait DigitDisplay {
    fn write(&mut self, value: u16) -> Result<(), HalError>;

    fn off(&mut self) -> Result<(), HalError>;
}

/// Trait für SmartLED Hardware-Zugriff
///
/// Abstrahiert die Onboard RGB LED (WS2812) die die Warnstufe anzeigt.
///
/// # Implementierungen
/// - **Production:** RmtLedWriter (ESP32 RMT Peripheral)
/// - **Testing:** MockLedWriter (in-memory Mock)
pub trait SmartLedWriter {
    /// Schreibt eine RGB-Farbe auf die LED
    ///
    /// # Fehlerbehandlung
    /// Gibt `HalError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, color: RGB8) -> Result<(), HalError>;
}
