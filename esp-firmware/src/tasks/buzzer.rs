// Summer-Task: läuft frei, nicht am Timer
//
// Die Wartezeit hängt von der Warnstufe ab, dadurch blinkt der Summer bei
// Gefahr schneller ohne einen zusätzlichen Timer-Interrupt.
use defmt::{info, warn};
use embassy_time::Timer;
use esp_core::{BuzzerAlarm, BuzzerCadence, DigitalOutput, ModeFlags, SharedReading};

use crate::hal::GpioPin;

/// Summer-Logik - schaltet im Takt der Warnstufe um
///
/// Ein Pin-Fehler wird geloggt, danach wartet die Schleife den langsamen
/// Takt ab und versucht es erneut.
///
/// # Parameter
/// - `pin`: Summer-Ausgang (Hardware oder Mock)
/// - `flags`: Betriebs-Flags (aus → Summer still)
/// - `reading`: letzter Messwert in cm
pub async fn buzzer_logic<P: DigitalOutput>(
    mut pin: P,
    flags: &ModeFlags,
    reading: &SharedReading,
) -> ! {
    let mut alarm = BuzzerAlarm::new();

    loop {
        let wait_ms = match alarm.step(&mut pin, flags.snapshot(), reading.latest()) {
            Ok(wait_ms) => wait_ms,
            Err(e) => {
                warn!("Buzzer: Pin nicht gesetzt: {}", e);
                BuzzerCadence::Silent.half_period_ms()
            }
        };
        Timer::after_millis(wait_ms as u64).await;
    }
}

/// Summer-Task des Abstandswarners
///
/// # Parameter
/// - `pin`: GPIO des Summers
/// - `flags`: Betriebs-Flags
/// - `reading`: letzter Messwert in cm
#[embassy_executor::task]
pub async fn buzzer_task(
    pin: GpioPin,
    flags: &'static ModeFlags,
    reading: &'static SharedReading,
) {
    info!("Buzzer: gestartet");
    buzzer_logic(pin, flags, reading).await;
}
