//! Signal-Generator und Abtastung
//!
//! Gibt eine gespeicherte EKG-Kurve zyklisch auf einem analogen Ausgang aus
//! und streamt Messwerte eines analogen Eingangs über UART.

use core::fmt::Write as _;

use heapless::String;

use crate::traits::{AnalogInput, AnalogOutput, HalError, SerialWriter};
use crate::types::AnalogChannel;

/// Eine EKG-Periode (8 Bit Samples)
pub const ECG_WAVEFORM: [u8; 231] = [
    76, 77, 78, 77, 79, 86, 81, 76, 84, 93, 85, 80, 89, 95, 89, 85, 93, 98, 94, 88, 98, 105, 96,
    91, 99, 105, 101, 96, 102, 106, 101, 96, 100, 107, 101, 94, 100, 104, 100, 91, 99, 103, 98, 91,
    96, 105, 95, 88, 95, 100, 94, 85, 93, 99, 92, 84, 91, 96, 87, 80, 83, 92, 86, 78, 84, 89, 79,
    73, 81, 83, 78, 70, 80, 82, 79, 69, 80, 82, 81, 70, 75, 81, 77, 74, 79, 83, 82, 72, 80, 87, 79,
    76, 85, 95, 87, 81, 88, 93, 88, 84, 87, 94, 86, 82, 85, 94, 85, 82, 85, 95, 86, 83, 92, 99, 91,
    88, 94, 98, 95, 90, 97, 105, 104, 94, 98, 114, 117, 124, 144, 180, 210, 236, 253, 227, 171, 99,
    49, 34, 29, 43, 69, 89, 89, 90, 98, 107, 104, 98, 104, 110, 102, 98, 103, 111, 101, 94, 103,
    108, 102, 95, 97, 106, 100, 92, 101, 103, 100, 94, 98, 103, 96, 90, 98, 103, 97, 90, 99, 104,
    95, 90, 99, 104, 100, 93, 100, 106, 101, 93, 101, 105, 103, 96, 105, 112, 105, 99, 103, 108,
    99, 96, 102, 106, 99, 90, 92, 100, 87, 80, 82, 88, 77, 69, 75, 79, 74, 67, 71, 78, 72, 67, 73,
    81, 77, 71, 75, 84, 79, 77, 77, 76, 76,
];

/// Spielt eine Sample-Tabelle zyklisch ab
pub struct WaveformPlayer<'a> {
    samples: &'a [u8],
    index: usize,
}

impl<'a> WaveformPlayer<'a> {
    pub const fn new(samples: &'a [u8]) -> Self {
        Self { samples, index: 0 }
    }

    /// Aktuelles Sample, ohne weiterzuschalten (None bei leerer Tabelle)
    pub fn current(&self) -> Option<u8> {
        self.samples.get(self.index).copied()
    }

    /// Schaltet weiter, nach dem letzten Sample wieder an den Anfang
    fn advance(&mut self) {
        if !self.samples.is_empty() {
            self.index = (self.index + 1) % self.samples.len();
        }
    }

    /// Nächstes Sample, springt nach dem letzten wieder an den Anfang
    pub fn next_sample(&mut self) -> Option<u8> {
        let sample = self.current()?;
        self.advance();
        Some(sample)
    }

    /// Schreibt das aktuelle Sample auf den Ausgang
    ///
    /// Weitergeschaltet wird erst nach erfolgreichem Schreiben: nach einem
    /// Fehler kommt beim nächsten Tick dasselbe Sample noch einmal.
    pub fn on_tick<O: AnalogOutput>(&mut self, output: &mut O) -> Result<Option<u8>, HalError> {
        let Some(sample) = self.current() else {
            return Ok(None);
        };
        output.write(sample)?;
        self.advance();
        Ok(Some(sample))
    }

    pub fn position(&self) -> usize {
        self.index
    }
}

/// Textzeile für einen Messwert: `"<wert>\r\n"`
pub fn sample_line(value: u16) -> String<8> {
    let mut line = String::new();
    // u16 hat maximal 5 Stellen + CRLF, passt immer
    let _ = write!(line, "{}\r\n", value);
    line
}

/// Liest Kanal 1 und sendet den Wert über UART
pub async fn stream_sample<A: AnalogInput, W: SerialWriter>(
    adc: &mut A,
    serial: &mut W,
) -> Result<u16, HalError> {
    let value = adc.read_single(AnalogChannel::Ch1)?;
    serial.send_str(&sample_line(value)).await?;
    Ok(value)
}
