// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die Traits aus esp-core für die ESP32-C6 Peripherie.
// Die Logik in esp-core kennt nur die Traits und ist auf dem Host testbar.

pub mod analog;
pub mod gpio;
pub mod hc_sr04;
pub mod led_writer;
pub mod timer;
pub mod uart;

pub use analog::{AdcChannels, PwmAnalogOutput, pwm_timer};
pub use gpio::{GpioLeds, GpioPin, switch_input};
pub use hc_sr04::Hcsr04;
pub use led_writer::RmtLedWriter;
pub use timer::{start_timer_a, start_timer_b};
pub use uart::{SharedSerial, UartWriter, init_serial};
