//! Sturzerkennung mit einem analogen 3-Achsen Beschleunigungssensor
//!
//! Die Skalierung (Nullpunkt 1650 mV, 0.3 mV pro Einheit, /1000) und die
//! Schwelle 4 sind nicht physikalisch verifiziert, nur numerisch übernommen.

use crate::traits::{AnalogInput, HalError, SerialWriter};
use crate::types::AnalogChannel;

/// Nullpunkt des Sensors (mV)
pub const ZERO_OFFSET_MV: f32 = 1650.0;

/// Empfindlichkeit (mV pro Einheit)
pub const SENSITIVITY: f32 = 0.3;

/// Teiler für die Summe der drei Achsen
pub const SUM_SCALE: f32 = 1000.0;

/// Schwelle: Sturz wenn die Summe echt größer ist
pub const FALL_THRESHOLD: f32 = 4.0;

pub const FALL_MESSAGE: &str = "Sturz erkannt\r\n";

/// Rohwert einer Achse → Beschleunigung
pub fn axis_acceleration(sample: u16) -> f32 {
    (sample as f32 - ZERO_OFFSET_MV) / SENSITIVITY
}

/// Skalierte Summe der drei Achsen
pub fn fall_score(samples: [u16; 3]) -> f32 {
    samples.iter().map(|s| axis_acceleration(*s)).sum::<f32>() / SUM_SCALE
}

pub fn is_fall(score: f32) -> bool {
    score > FALL_THRESHOLD
}

/// Liest die drei Achsen und meldet einen Sturz über UART
#[derive(Default)]
pub struct FallDetector {
    falls: u32,
}

impl FallDetector {
    pub const fn new() -> Self {
        Self { falls: 0 }
    }

    /// Ein Abtast-Schritt; liefert `true` wenn ein Sturz erkannt wurde
    pub async fn on_tick<A: AnalogInput, W: SerialWriter>(
        &mut self,
        adc: &mut A,
        serial: &mut W,
    ) -> Result<bool, HalError> {
        let samples = [
            adc.read_single(AnalogChannel::Ch1)?,
            adc.read_single(AnalogChannel::Ch2)?,
            adc.read_single(AnalogChannel::Ch3)?,
        ];

        if !is_fall(fall_score(samples)) {
            return Ok(false);
        }

        self.falls = self.falls.wrapping_add(1);
        serial.send_str(FALL_MESSAGE).await?;
        Ok(true)
    }

    /// Anzahl erkannter Stürze seit dem Start
    pub fn falls(&self) -> u32 {
        self.falls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_at_rest_is_zero() {
        assert_eq!(axis_acceleration(1650), 0.0);
    }

    #[test]
    fn test_axis_scaling() {
        // (1653 - 1650) / 0.3 = 10
        assert!((axis_acceleration(1653) - 10.0).abs() < 1e-3);
        assert!(axis_acceleration(1000) < 0.0);
    }

    #[test]
    fn test_fall_threshold_is_strict() {
        assert!(!is_fall(4.0));
        assert!(is_fall(4.01));
    }

    #[test]
    fn test_fall_score_at_rest() {
        assert!(!is_fall(fall_score([1650, 1650, 1650])));
    }

    #[test]
    fn test_fall_score_high_acceleration() {
        // Jede Achse (2100 - 1650) / 0.3 = 1500 -> Summe 4500 / 1000 = 4.5
        let score = fall_score([2100, 2100, 2100]);
        assert!((score - 4.5).abs() < 1e-3);
        assert!(is_fall(score));
    }
}
