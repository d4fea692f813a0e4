//! Task-Schritte für Messen, Entscheiden und Ansteuern
//!
//! Jede Funktion entspricht einem Durchlauf eines Worker-Tasks nach einer
//! Timer-Benachrichtigung. Die Firmware ruft sie in ihren Task-Schleifen auf,
//! die Tests direkt mit Mock-Peripherie.

use core::fmt::Write as _;

use heapless::String;
use rgb::RGB8;

use crate::band::{buzzer_cadence, distance_bar, proximity_level};
use crate::state::{ModeFlags, SharedReading};
use crate::traits::{
    DigitDisplay, DigitalOutput, DistanceSensor, HalError, LedBank, SerialWriter, SmartLedWriter,
};
use crate::types::{AlertLevel, BuzzerCadence, LedPattern, Mode};

/// Ergebnis eines Mess-Durchlaufs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleOutcome {
    /// Neuer Wert gemessen und gespeichert
    Measured(u16),
    /// System hält den letzten Wert
    Held,
    /// System aus, Messwert auf 0 gesetzt
    Reset,
}

#[cfg(feature = "defmt")]
impl defmt::Format for SampleOutcome {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SampleOutcome::Measured(cm) => defmt::write!(fmt, "Measured({} cm)", cm),
            SampleOutcome::Held => defmt::write!(fmt, "Held"),
            SampleOutcome::Reset => defmt::write!(fmt, "Reset"),
        }
    }
}

/// Mess-Task: liest den Sensor und schreibt den geteilten Messwert
pub struct DistanceSampler<S> {
    sensor: S,
}

impl<S: DistanceSensor> DistanceSampler<S> {
    pub fn new(sensor: S) -> Self {
        Self { sensor }
    }

    /// Ein Durchlauf nach einer Benachrichtigung
    ///
    /// Bei einem Sensorfehler bleibt der letzte Wert stehen und der Fehler
    /// geht an den Aufrufer (kein Retry).
    pub async fn on_tick(
        &mut self,
        flags: &ModeFlags,
        reading: &SharedReading,
    ) -> Result<SampleOutcome, HalError> {
        let mode = flags.snapshot();
        if !mode.enabled {
            reading.reset();
            return Ok(SampleOutcome::Reset);
        }
        if mode.hold {
            return Ok(SampleOutcome::Held);
        }

        let distance = self.sensor.read_centimeters().await?;
        reading.store(distance);
        Ok(SampleOutcome::Measured(distance))
    }

    pub fn sensor_mut(&mut self) -> &mut S {
        &mut self.sensor
    }
}

/// Balkenanzeige des Entfernungsmessers
///
/// System aus → alle LEDs aus.
pub fn show_distance_bar<L: LedBank>(
    leds: &mut L,
    mode: Mode,
    distance_cm: u16,
) -> Result<LedPattern, HalError> {
    let pattern = if mode.enabled {
        distance_bar(distance_cm)
    } else {
        LedPattern::OFF
    };
    leds.show(pattern)?;
    Ok(pattern)
}

/// LED-Anzeige des Abstandswarners
///
/// System aus → alle LEDs aus, sonst Muster der Warnstufe.
pub fn show_proximity<L: LedBank>(
    leds: &mut L,
    mode: Mode,
    distance_cm: u16,
) -> Result<Option<AlertLevel>, HalError> {
    if !mode.enabled {
        leds.show(LedPattern::OFF)?;
        return Ok(None);
    }
    let level = proximity_level(distance_cm);
    leds.show(level.pattern())?;
    Ok(Some(level))
}

/// Zeigt die Warnstufe auf der Onboard RGB LED (None → LED aus)
pub fn show_alert_color<W: SmartLedWriter>(
    led: &mut W,
    level: Option<AlertLevel>,
) -> Result<RGB8, HalError> {
    let color = level.map_or(RGB8::default(), AlertLevel::color);
    led.write(color)?;
    Ok(color)
}

/// Ergebnis eines Durchlaufs der Abstandswarner-Anzeige
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indication {
    /// Angezeigte Warnstufe (None = System aus)
    pub level: Option<AlertLevel>,
    /// Fehler der Status-LED, die drei LEDs sind trotzdem gesetzt
    pub status_error: Option<HalError>,
}

/// LED-Muster und Status-Farbe des Abstandswarners
///
/// Die drei LEDs hängen nicht an der Status-LED: fehlt sie (`None`) oder
/// schlägt sie fehl, wird trotzdem das Muster der Warnstufe gesetzt.
/// Nur ein Fehler der LED-Bank ergibt `Err`.
pub fn indicate_proximity<L: LedBank, W: SmartLedWriter>(
    leds: &mut L,
    status: Option<&mut W>,
    mode: Mode,
    distance_cm: u16,
) -> Result<Indication, HalError> {
    let level = show_proximity(leds, mode, distance_cm)?;
    let status_error = status.and_then(|led| show_alert_color(led, level).err());
    Ok(Indication {
        level,
        status_error,
    })
}

/// Sendet die Warnmeldung für eine Entfernung (Sicher → keine Meldung)
pub async fn report_proximity<W: SerialWriter>(
    serial: &mut W,
    distance_cm: u16,
) -> Result<AlertLevel, HalError> {
    let level = proximity_level(distance_cm);
    if let Some(warning) = level.warning() {
        serial.send_str(warning).await?;
    }
    Ok(level)
}

/// Textzeile für eine Entfernung: `"<cm> cm\r\n"`
pub fn distance_line(distance_cm: u16) -> String<16> {
    let mut line = String::new();
    // 5 Stellen + " cm\r\n" passt immer in 16 Bytes
    let _ = write!(line, "{} cm\r\n", distance_cm);
    line
}

/// Sendet die aktuelle Entfernung, nur wenn das System eingeschaltet ist
pub async fn report_distance<W: SerialWriter>(
    serial: &mut W,
    mode: Mode,
    distance_cm: u16,
) -> Result<bool, HalError> {
    if !mode.enabled {
        return Ok(false);
    }
    serial.send_str(&distance_line(distance_cm)).await?;
    Ok(true)
}

/// Was die LCD-Aktualisierung getan hat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayAction {
    Written(u16),
    Frozen,
    Off,
}

/// Aktualisiert die Ziffernanzeige
///
/// System aus → dunkel, "hold" → unverändert, sonst aktueller Wert.
pub fn refresh_display<D: DigitDisplay>(
    display: &mut D,
    mode: Mode,
    distance_cm: u16,
) -> Result<DisplayAction, HalError> {
    if !mode.enabled {
        display.off()?;
        return Ok(DisplayAction::Off);
    }
    if mode.hold {
        return Ok(DisplayAction::Frozen);
    }
    display.write(distance_cm)?;
    Ok(DisplayAction::Written(distance_cm))
}

/// Summer des Abstandswarners
///
/// Läuft unabhängig vom Timer: jeder Schritt schaltet den Summer um und
/// liefert die Wartezeit bis zum nächsten Schritt. Je näher das Fahrzeug,
/// desto kürzer die Wartezeit.
#[derive(Default)]
pub struct BuzzerAlarm {
    on: bool,
}

impl BuzzerAlarm {
    pub const fn new() -> Self {
        Self { on: false }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Ein Schritt; liefert die Wartezeit in ms
    pub fn step<P: DigitalOutput>(
        &mut self,
        pin: &mut P,
        mode: Mode,
        distance_cm: u16,
    ) -> Result<u32, HalError> {
        let cadence = if mode.enabled {
            buzzer_cadence(distance_cm)
        } else {
            BuzzerCadence::Silent
        };

        let next = cadence.is_active() && !self.on;
        pin.set_level(next)?;
        self.on = next;
        Ok(cadence.half_period_ms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_line() {
        assert_eq!(distance_line(0).as_str(), "0 cm\r\n");
        assert_eq!(distance_line(788).as_str(), "788 cm\r\n");
        assert_eq!(distance_line(u16::MAX).as_str(), "65535 cm\r\n");
    }
}
