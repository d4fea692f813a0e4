//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, Schwellwert-Tabellen, den geteilten Zustand
//! und die testbaren Schritte der Worker-Tasks.

#![no_std]

pub mod accel;
pub mod alarm;
pub mod band;
pub mod bcd;
pub mod env;
pub mod leds;
pub mod notify;
pub mod state;
pub mod traits;
pub mod types;
pub mod waveform;

// Re-exports für einfachen Zugriff
pub use accel::FallDetector;
pub use alarm::{BuzzerAlarm, DisplayAction, DistanceSampler, Indication, SampleOutcome};
pub use band::{BandTable, Bound, ThresholdBand};
pub use bcd::{BcdLcd, to_bcd_digits};
pub use leds::{KeyState, LedSequence, SequenceMode, toggle_target};
pub use notify::{Notification, TimerNotifier};
pub use state::{ModeFlags, SharedReading};
pub use traits::{
    AnalogInput, AnalogOutput, DigitDisplay, DigitalOutput, DistanceSensor, HalError, LedBank,
    SerialWriter, SmartLedWriter,
};
pub use types::{AlertLevel, AnalogChannel, BuzzerCadence, Led, LedPattern, Mode, SerialCommand};
pub use waveform::{ECG_WAVEFORM, WaveformPlayer};
