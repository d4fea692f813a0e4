// Anzeige-Tasks: LEDs, Status-LED, LCD und UART-Meldungen
use defmt::{error, info, warn};
use esp_core::alarm::{indicate_proximity, refresh_display, report_distance, show_distance_bar};
use esp_core::{
    AlertLevel, BcdLcd, DigitDisplay, LedBank, ModeFlags, Notification, SerialWriter,
    SharedReading, SmartLedWriter,
};
use esp_hal_smartled::smart_led_buffer;

use crate::config::{LCD_DIGITS, RMT_CLOCK_MHZ};
use crate::hal::{GpioLeds, GpioPin, RmtLedWriter, SharedSerial, UartWriter};

/// LCD des Entfernungsmessers
pub type Lcd = BcdLcd<GpioPin, LCD_DIGITS>;

/// LED-Logik des Abstandswarners
///
/// Setzt bei jedem Tick das Muster der Warnstufe und, falls vorhanden, die
/// Farbe der Status-LED. Stufenwechsel werden geloggt.
///
/// # Parameter
/// - `leds`: die drei Platinen-LEDs (Hardware oder Mock)
/// - `status`: Onboard RGB LED; `None` wenn sie nicht initialisiert werden konnte
/// - `tick`: Benachrichtigung von Timer A
/// - `flags`: Betriebs-Flags (ein/aus)
/// - `reading`: letzter Messwert in cm
pub async fn proximity_indicator_logic<L: LedBank, W: SmartLedWriter>(
    mut leds: L,
    mut status: Option<W>,
    tick: &Notification,
    flags: &ModeFlags,
    reading: &SharedReading,
) -> ! {
    let mut last: Option<AlertLevel> = None;

    loop {
        tick.wait().await;
        let mode = flags.snapshot();

        let indication =
            match indicate_proximity(&mut leds, status.as_mut(), mode, reading.latest()) {
                Ok(indication) => indication,
                Err(e) => {
                    warn!("Indicator: LEDs nicht gesetzt: {}", e);
                    continue;
                }
            };

        if let Some(e) = indication.status_error {
            warn!("Indicator: Status-LED nicht gesetzt: {}", e);
        }

        if indication.level != last {
            match indication.level {
                Some(level) => info!("Indicator: Stufe {}", level),
                None => info!("Indicator: System aus"),
            }
            last = indication.level;
        }
    }
}

/// LED-Task des Abstandswarners
///
/// Übernimmt die RMT-Initialisierung der Status-LED und ruft dann die
/// testbare `proximity_indicator_logic()` auf. Scheitert die Status-LED,
/// laufen die drei LEDs ohne sie weiter.
///
/// # Parameter
/// - `leds`: die drei Platinen-LEDs
/// - `gpio8`: Datenleitung der Onboard RGB LED
/// - `rmt_peripheral`: RMT Peripheral für das WS2812-Timing
/// - `tick`: Benachrichtigung von Timer A
/// - `flags`: Betriebs-Flags
/// - `reading`: letzter Messwert in cm
#[embassy_executor::task]
pub async fn proximity_indicator_task(
    leds: GpioLeds,
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    tick: &'static Notification,
    flags: &'static ModeFlags,
    reading: &'static SharedReading,
) {
    // Buffer für SmartLED Daten (1 LED), lebt so lange wie der Task
    let mut rmt_buffer = smart_led_buffer!(1);

    let status = match RmtLedWriter::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer) {
        Ok(status) => Some(status),
        Err(e) => {
            error!("Indicator: RMT Init fehlgeschlagen, ohne Status-LED: {}", e);
            None
        }
    };

    proximity_indicator_logic(leds, status, tick, flags, reading).await;
}

/// Anzeige-Logik des Entfernungsmessers
///
/// LED-Balken, LCD und UART-Zeile aus dem aktuellen Messwert.
/// Ein Fehler an einem Ausgang hält die anderen nicht auf.
pub async fn meter_display_logic<L: LedBank, D: DigitDisplay, W: SerialWriter>(
    mut leds: L,
    mut display: D,
    mut serial: W,
    tick: &Notification,
    flags: &ModeFlags,
    reading: &SharedReading,
) -> ! {
    loop {
        tick.wait().await;
        let mode = flags.snapshot();
        let distance = reading.latest();

        if let Err(e) = show_distance_bar(&mut leds, mode, distance) {
            warn!("Display: LEDs nicht gesetzt: {}", e);
        }
        if let Err(e) = refresh_display(&mut display, mode, distance) {
            warn!("Display: LCD nicht gesetzt: {}", e);
        }
        if let Err(e) = report_distance(&mut serial, mode, distance).await {
            warn!("Display: UART-Meldung fehlgeschlagen: {}", e);
        }
    }
}

/// Anzeige-Task des Entfernungsmessers
///
/// Bindet `meter_display_logic()` an GPIO-LEDs, das LCD und die UART.
///
/// # Parameter
/// - `leds`: die drei Platinen-LEDs (Balkenanzeige)
/// - `lcd`: 3-stelliges BCD-LCD
/// - `serial`: geteilte UART-Sendehälfte
/// - `tick`: Benachrichtigung von Timer A
/// - `flags`: Betriebs-Flags (ein/aus, halten)
/// - `reading`: letzter Messwert in cm
#[embassy_executor::task]
pub async fn meter_display_task(
    leds: GpioLeds,
    lcd: Lcd,
    serial: &'static SharedSerial,
    tick: &'static Notification,
    flags: &'static ModeFlags,
    reading: &'static SharedReading,
) {
    info!("Display: gestartet");
    meter_display_logic(leds, lcd, UartWriter::new(serial), tick, flags, reading).await;
}
