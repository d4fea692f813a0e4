// Mess-Task: HC-SR04 auslesen und den geteilten Messwert schreiben
use defmt::{debug, info, warn};
use esp_core::alarm::report_proximity;
use esp_core::{
    DistanceSampler, DistanceSensor, ModeFlags, Notification, SampleOutcome, SerialWriter,
    SharedReading,
};

use crate::hal::{Hcsr04, SharedSerial, UartWriter};

/// Mess-Logik - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Wartet auf den Timer, misst und speichert. Ist `serial` gesetzt, wird
/// nach jeder Messung die Warnmeldung der Stufe gesendet (Abstandswarner).
/// Sensorfehler werden geloggt, der letzte Messwert bleibt stehen.
///
/// # Parameter
/// - `sampler`: Mess-Schritt um den Sensor (Hardware oder Mock)
/// - `serial`: UART für Warnmeldungen, `None` ohne Meldungen
/// - `tick`: Benachrichtigung vom Mess-Timer
/// - `flags`: Betriebs-Flags (ein/aus, halten)
/// - `reading`: geteilter Messwert, den dieser Task schreibt
pub async fn distance_sampler_logic<S: DistanceSensor, W: SerialWriter>(
    mut sampler: DistanceSampler<S>,
    mut serial: Option<W>,
    tick: &Notification,
    flags: &ModeFlags,
    reading: &SharedReading,
) -> ! {
    loop {
        tick.wait().await;

        let distance = match sampler.on_tick(flags, reading).await {
            Ok(SampleOutcome::Measured(cm)) => cm,
            Ok(outcome) => {
                debug!("Sampler: {}", outcome);
                continue;
            }
            Err(e) => {
                warn!("Sampler: Messung fehlgeschlagen: {}", e);
                continue;
            }
        };
        debug!("Sampler: {} cm", distance);

        if let Some(serial) = serial.as_mut() {
            if let Err(e) = report_proximity(serial, distance).await {
                warn!("Sampler: UART-Meldung fehlgeschlagen: {}", e);
            }
        }
    }
}

/// Mess-Task des Abstandswarners (mit Warnmeldungen über UART)
///
/// # Parameter
/// - `sensor`: HC-SR04
/// - `serial`: geteilte UART-Sendehälfte
/// - `tick`, `flags`, `reading`: siehe `distance_sampler_logic()`
#[embassy_executor::task]
pub async fn proximity_sampler_task(
    sensor: Hcsr04,
    serial: &'static SharedSerial,
    tick: &'static Notification,
    flags: &'static ModeFlags,
    reading: &'static SharedReading,
) {
    info!("Sampler: Abstandswarner gestartet");
    let sampler = DistanceSampler::new(sensor);
    distance_sampler_logic(sampler, Some(UartWriter::new(serial)), tick, flags, reading).await;
}

/// Mess-Task des Entfernungsmessers (Meldungen macht der Anzeige-Task)
///
/// # Parameter
/// - `sensor`: HC-SR04
/// - `tick`, `flags`, `reading`: siehe `distance_sampler_logic()`
#[embassy_executor::task]
pub async fn meter_sampler_task(
    sensor: Hcsr04,
    tick: &'static Notification,
    flags: &'static ModeFlags,
    reading: &'static SharedReading,
) {
    info!("Sampler: Entfernungsmesser gestartet");
    let sampler = DistanceSampler::new(sensor);
    distance_sampler_logic::<_, UartWriter>(sampler, None, tick, flags, reading).await;
}
