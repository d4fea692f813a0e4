// Beschleunigungs-Task: Sturzerkennung über drei ADC-Kanäle
use defmt::{info, warn};
use esp_core::{AnalogInput, FallDetector, Notification, SerialWriter};

use crate::hal::{AdcChannels, SharedSerial, UartWriter};

/// Sturzerkennung - wertet bei jedem Tick die drei Achsen aus
///
/// # Parameter
/// - `adc`: analoge Eingänge X/Y/Z (Hardware oder Mock)
/// - `serial`: UART für die Sturz-Meldung
/// - `tick`: Benachrichtigung von Timer B
pub async fn fall_detection_logic<A: AnalogInput, W: SerialWriter>(
    mut adc: A,
    mut serial: W,
    tick: &Notification,
) -> ! {
    let mut detector = FallDetector::new();

    loop {
        tick.wait().await;

        match detector.on_tick(&mut adc, &mut serial).await {
            Ok(true) => warn!("Accel: Sturz erkannt (#{})", detector.falls()),
            Ok(false) => {}
            Err(e) => warn!("Accel: Abtastung fehlgeschlagen: {}", e),
        }
    }
}

/// Beschleunigungs-Task des Abstandswarners
///
/// # Parameter
/// - `adc`: ADC1-Kanäle des Beschleunigungssensors
/// - `serial`: geteilte UART-Sendehälfte
/// - `tick`: Benachrichtigung von Timer B
#[embassy_executor::task]
pub async fn fall_detection_task(
    adc: AdcChannels,
    serial: &'static SharedSerial,
    tick: &'static Notification,
) {
    info!("Accel: gestartet");
    fall_detection_logic(adc, UartWriter::new(serial), tick).await;
}
