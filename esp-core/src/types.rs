//! Core Types für die Sensor-Übungen
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

/// Helligkeit der Status-LED (0-255), gedimmt für Augenschonung
pub const STATUS_BRIGHTNESS: u8 = 10;

/// Die drei LEDs der Übungsplatine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Led {
    Led1,
    Led2,
    Led3,
}

impl Led {
    /// Alle LEDs in Anzeige-Reihenfolge
    pub const ALL: [Led; 3] = [Led::Led1, Led::Led2, Led::Led3];

    /// Index der LED im Pattern (0..3)
    pub const fn index(self) -> usize {
        match self {
            Led::Led1 => 0,
            Led::Led2 => 1,
            Led::Led3 => 2,
        }
    }
}

/// Zustand aller drei LEDs (true = an)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedPattern(pub [bool; 3]);

impl LedPattern {
    pub const OFF: LedPattern = LedPattern([false; 3]);
    pub const ALL: LedPattern = LedPattern([true; 3]);

    /// Die ersten `n` LEDs an, der Rest aus (Balkenanzeige)
    pub const fn first(n: usize) -> Self {
        LedPattern([n > 0, n > 1, n > 2])
    }

    pub const fn is_on(&self, led: Led) -> bool {
        self.0[led.index()]
    }

    /// Anzahl eingeschalteter LEDs
    pub fn lit(&self) -> usize {
        self.0.iter().filter(|on| **on).count()
    }
}

/// Warnstufe des Abstandswarners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    /// Fahrzeug sehr nah
    Danger,
    /// Fahrzeug in mittlerer Entfernung
    Caution,
    /// Kein Fahrzeug in der Nähe
    Safe,
}

impl AlertLevel {
    /// LED-Muster: Gefahr = 3 LEDs, Vorsicht = 2 LEDs, Sicher = 1 LED
    pub const fn pattern(self) -> LedPattern {
        match self {
            AlertLevel::Danger => LedPattern::first(3),
            AlertLevel::Caution => LedPattern::first(2),
            AlertLevel::Safe => LedPattern::first(1),
        }
    }

    /// Warnmeldung für die serielle Schnittstelle (None = keine Meldung)
    pub const fn warning(self) -> Option<&'static str> {
        match self {
            AlertLevel::Danger => Some("Gefahr, Fahrzeug nah\r\n"),
            AlertLevel::Caution => Some("Vorsicht, Fahrzeug nah\r\n"),
            AlertLevel::Safe => None,
        }
    }

    /// Farbe der Onboard-Status-LED
    pub const fn color(self) -> RGB8 {
        match self {
            AlertLevel::Danger => RGB8 {
                r: STATUS_BRIGHTNESS,
                g: 0,
                b: 0,
            },
            AlertLevel::Caution => RGB8 {
                r: STATUS_BRIGHTNESS,
                g: STATUS_BRIGHTNESS,
                b: 0,
            },
            AlertLevel::Safe => RGB8 {
                r: 0,
                g: STATUS_BRIGHTNESS,
                b: 0,
            },
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            AlertLevel::Danger => "Gefahr",
            AlertLevel::Caution => "Vorsicht",
            AlertLevel::Safe => "Sicher",
        }
    }
}

/// Blink-Takt des Summers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuzzerCadence {
    /// Schnelles Blinken (Gefahr)
    Fast,
    /// Langsames Blinken (Vorsicht)
    Slow,
    /// Summer aus
    Silent,
}

impl BuzzerCadence {
    /// Halbe Periodendauer in ms (Zeit zwischen zwei Umschaltungen)
    ///
    /// Im Ruhezustand wird mit dem langsamen Takt weiter gepollt.
    pub const fn half_period_ms(self) -> u32 {
        match self {
            BuzzerCadence::Fast => 250,
            BuzzerCadence::Slow | BuzzerCadence::Silent => 500,
        }
    }

    pub const fn is_active(self) -> bool {
        !matches!(self, BuzzerCadence::Silent)
    }
}

/// Analoge Eingangskanäle (Beschleunigungssensor X/Y/Z bzw. Signal-Eingang)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalogChannel {
    Ch1,
    Ch2,
    Ch3,
}

/// Kommandos über die serielle Schnittstelle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialCommand {
    /// 'O' / 'o': System ein-/ausschalten
    Power,
    /// 'H' / 'h': Messwert halten
    Hold,
}

impl SerialCommand {
    /// Dekodiert ein empfangenes Byte, unbekannte Bytes werden ignoriert
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'O' | b'o' => Some(SerialCommand::Power),
            b'H' | b'h' => Some(SerialCommand::Hold),
            _ => None,
        }
    }
}

/// Momentaufnahme der Betriebs-Flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mode {
    pub enabled: bool,
    pub hold: bool,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Led {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "LED{}", self.index() + 1)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedPattern {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "[{} {} {}]",
            if self.0[0] { "X" } else { "-" },
            if self.0[1] { "X" } else { "-" },
            if self.0[2] { "X" } else { "-" }
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AlertLevel {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BuzzerCadence {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            BuzzerCadence::Fast => defmt::write!(fmt, "Fast"),
            BuzzerCadence::Slow => defmt::write!(fmt, "Slow"),
            BuzzerCadence::Silent => defmt::write!(fmt, "Silent"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SerialCommand {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SerialCommand::Power => defmt::write!(fmt, "Power"),
            SerialCommand::Hold => defmt::write!(fmt, "Hold"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Mode {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Mode {{ enabled: {}, hold: {} }}",
            self.enabled,
            self.hold
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_led_pattern_first() {
        assert_eq!(LedPattern::first(0), LedPattern::OFF);
        assert_eq!(LedPattern::first(2), LedPattern([true, true, false]));
        assert_eq!(LedPattern::first(3), LedPattern::ALL);
    }

    #[test]
    fn test_alert_level_patterns() {
        assert_eq!(AlertLevel::Danger.pattern().lit(), 3);
        assert_eq!(AlertLevel::Caution.pattern().lit(), 2);
        assert_eq!(AlertLevel::Safe.pattern().lit(), 1);
        assert!(AlertLevel::Safe.pattern().is_on(Led::Led1));
    }

    #[test]
    fn test_serial_command_from_byte() {
        assert_eq!(SerialCommand::from_byte(b'O'), Some(SerialCommand::Power));
        assert_eq!(SerialCommand::from_byte(b'o'), Some(SerialCommand::Power));
        assert_eq!(SerialCommand::from_byte(b'h'), Some(SerialCommand::Hold));
        assert_eq!(SerialCommand::from_byte(b'x'), None);
    }

    #[test]
    fn test_safe_has_no_warning() {
        assert!(AlertLevel::Safe.warning().is_none());
        assert!(AlertLevel::Danger.warning().is_some());
    }
}
