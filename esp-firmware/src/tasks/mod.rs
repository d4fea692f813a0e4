// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Worker wartet auf seine Timer-Benachrichtigung (Notification),
// liest den geteilten Zustand und ruft die testbaren Schritte aus esp-core.
// Die *_logic Funktionen sind generisch über die Traits, die Tasks binden
// sie an die ESP32-C6 Peripherie.

pub mod accel;
pub mod buzzer;
pub mod indicators;
pub mod input;
pub mod sampler;
pub mod waveform;

// Re-export Tasks für einfachen Import
pub use accel::fall_detection_task;
pub use buzzer::buzzer_task;
pub use indicators::{Lcd, meter_display_task, proximity_indicator_task};
pub use input::{key_leds_task, serial_command_task, switch_task};
pub use sampler::{meter_sampler_task, proximity_sampler_task};
pub use waveform::{sample_stream_task, waveform_output_task};
