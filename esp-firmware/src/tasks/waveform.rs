// EKG-Generator: Signal ausgeben und Kanal 1 abtasten
use defmt::{error, info, warn};
use esp_core::waveform::stream_sample;
use esp_core::{
    AnalogInput, AnalogOutput, ECG_WAVEFORM, Notification, SerialWriter, WaveformPlayer,
};
use esp_hal::ledc::{LSGlobalClkSource, Ledc};

use crate::hal::{AdcChannels, PwmAnalogOutput, SharedSerial, UartWriter, pwm_timer};

/// Gibt bei jedem Tick das nächste Sample aus
pub async fn waveform_output_logic<O: AnalogOutput>(
    mut player: WaveformPlayer<'_>,
    mut output: O,
    tick: &Notification,
) -> ! {
    loop {
        tick.wait().await;
        if let Err(e) = player.on_tick(&mut output) {
            warn!("Waveform: Ausgabe fehlgeschlagen: {}", e);
        }
    }
}

/// Ausgabe-Task: richtet LEDC ein und spielt ECG_WAVEFORM zyklisch ab
///
/// LEDC, Timer und Kanal leben im Task, der Kanal leiht sich beide.
///
/// # Parameter
/// - `ledc_peripheral`: LEDC Peripheral
/// - `pin`: PWM-Ausgang (RC-Tiefpass extern)
/// - `tick`: Benachrichtigung von Timer B
#[embassy_executor::task]
pub async fn waveform_output_task(
    ledc_peripheral: esp_hal::peripherals::LEDC<'static>,
    pin: esp_hal::peripherals::GPIO7<'static>,
    tick: &'static Notification,
) {
    let mut ledc = Ledc::new(ledc_peripheral);
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

    let timer = match pwm_timer(&ledc) {
        Ok(timer) => timer,
        Err(e) => {
            error!("Waveform: LEDC Timer fehlgeschlagen: {}", e);
            return;
        }
    };
    let output = match PwmAnalogOutput::new(&ledc, &timer, pin) {
        Ok(output) => output,
        Err(e) => {
            error!("Waveform: LEDC Kanal fehlgeschlagen: {}", e);
            return;
        }
    };

    info!("Waveform: {} Samples pro Zyklus", ECG_WAVEFORM.len());
    waveform_output_logic(WaveformPlayer::new(&ECG_WAVEFORM), output, tick).await;
}

/// Sendet bei jedem Tick den Rohwert von Kanal 1
pub async fn sample_stream_logic<A: AnalogInput, W: SerialWriter>(
    mut adc: A,
    mut serial: W,
    tick: &Notification,
) -> ! {
    loop {
        tick.wait().await;
        if let Err(e) = stream_sample(&mut adc, &mut serial).await {
            warn!("Stream: {}", e);
        }
    }
}

/// Abtast-Task des EKG-Generators
///
/// # Parameter
/// - `adc`: ADC1-Kanäle (nur Kanal 1 wird gelesen)
/// - `serial`: geteilte UART-Sendehälfte
/// - `tick`: Benachrichtigung von Timer A
#[embassy_executor::task]
pub async fn sample_stream_task(
    adc: AdcChannels,
    serial: &'static SharedSerial,
    tick: &'static Notification,
) {
    info!("Stream: gestartet");
    sample_stream_logic(adc, UartWriter::new(serial), tick).await;
}
