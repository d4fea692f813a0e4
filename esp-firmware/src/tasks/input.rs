// Eingaben: Tasten und UART-Kommandos ändern den Betriebsmodus
//
// Taste 1 wirkt wie 'O' (ein/aus), Taste 2 wie 'H' (hold).
use defmt::{Debug2Format, info, warn};
use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Timer};
use embedded_hal_async::delay::DelayNs;
use esp_core::{KeyState, LedBank, LedSequence, ModeFlags, SerialCommand, toggle_target};
use esp_hal::Async;
use esp_hal::gpio::Input;
use esp_hal::uart::UartRx;

use crate::config::{DEBOUNCE_MS, KEY_POLL_MS, UART_RX_CHUNK};
use crate::hal::GpioLeds;

/// Kommando-Task: liest Bytes von der UART
///
/// Jeder empfangene Block geht an `ModeFlags::apply_bytes()`; 'O' schaltet
/// ein/aus, 'H' hält den Messwert, alles andere wird ignoriert.
///
/// # Parameter
/// - `rx`: Empfangshälfte der UART (gehört allein diesem Task)
/// - `flags`: Betriebs-Flags
#[embassy_executor::task]
pub async fn serial_command_task(mut rx: UartRx<'static, Async>, flags: &'static ModeFlags) {
    let mut buffer = [0u8; UART_RX_CHUNK];

    loop {
        match rx.read_async(&mut buffer).await {
            Ok(count) => {
                let mode = flags.apply_bytes(&buffer[..count]);
                info!("Input: {} Bytes über UART → {}", count, mode);
            }
            Err(e) => warn!("Input: UART Lesefehler: {}", Debug2Format(&e)),
        }
    }
}

/// Tasten-Task: Flanke → Kommando, dann entprellen und Loslassen abwarten
///
/// `switch_2` ist optional (der Abstandswarner hat nur die Ein/Aus-Taste).
///
/// # Parameter
/// - `switch_1`: Taste S1 (ein/aus)
/// - `switch_2`: Taste S2 (halten), falls vorhanden
/// - `flags`: Betriebs-Flags
#[embassy_executor::task]
pub async fn switch_task(
    mut switch_1: Input<'static>,
    mut switch_2: Option<Input<'static>>,
    flags: &'static ModeFlags,
) {
    info!("Input: Tasten aktiv");

    loop {
        let pressed = match switch_2.as_mut() {
            Some(switch_2) => {
                match select(switch_1.wait_for_falling_edge(), switch_2.wait_for_falling_edge())
                    .await
                {
                    Either::First(()) => SerialCommand::Power,
                    Either::Second(()) => SerialCommand::Hold,
                }
            }
            None => {
                switch_1.wait_for_falling_edge().await;
                SerialCommand::Power
            }
        };

        let mode = flags.apply_command(pressed);
        info!("Input: {} über Taste → {}", pressed, mode);

        Timer::after(Duration::from_millis(DEBOUNCE_MS)).await;
        switch_1.wait_for_high().await;
        if let Some(switch_2) = switch_2.as_mut() {
            switch_2.wait_for_high().await;
        }
    }
}

/// Tasten-LEDs: Start-Sequenz, danach Tasten abfragen und LEDs umschalten
///
/// # Parameter
/// - `leds`: LED-Bank (Hardware oder Mock)
/// - `delay`: async Delay für Sequenz und Abfrage-Intervall
/// - `startup`: Sequenz vor der Tasten-Abfrage
/// - `read_keys`: liefert die aktuell gedrückten Tasten
pub async fn key_leds_logic<L: LedBank, D: DelayNs>(
    mut leds: L,
    mut delay: D,
    startup: LedSequence,
    mut read_keys: impl FnMut() -> KeyState,
) -> ! {
    if let Err(e) = startup.run(&mut leds, &mut delay).await {
        warn!("Keys: Start-Sequenz abgebrochen: {}", e);
    }
    info!("Keys: Start-Sequenz fertig");

    loop {
        if let Some(led) = toggle_target(read_keys()) {
            if let Err(e) = leds.toggle(led) {
                warn!("Keys: LED nicht umgeschaltet: {}", e);
            }
        }
        delay.delay_ms(KEY_POLL_MS as u32).await;
    }
}

/// Tasten-LED-Task
///
/// Bindet `key_leds_logic()` an die GPIO-LEDs, `embassy_time::Delay` und
/// die beiden Tasten.
///
/// # Parameter
/// - `leds`: die drei Platinen-LEDs
/// - `switch_1`, `switch_2`: Tasten S1 und S2 (aktiv low)
/// - `startup`: Sequenz vor der Tasten-Abfrage
#[embassy_executor::task]
pub async fn key_leds_task(
    leds: GpioLeds,
    switch_1: Input<'static>,
    switch_2: Input<'static>,
    startup: LedSequence,
) {
    // Tasten sind aktiv low
    let read_keys = || KeyState::from_levels(switch_1.is_low(), switch_2.is_low());
    key_leds_logic(leds, embassy_time::Delay, startup, read_keys).await;
}
