//! Integration Tests für Signalgenerator und Abtastung
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen Mock-Peripherie

mod common;

use common::{MockAdc, MockAnalogOut, MockSerial};
use embassy_futures::block_on;
use esp_core::waveform::stream_sample;
use esp_core::{AnalogChannel, ECG_WAVEFORM, HalError, WaveformPlayer};

#[test]
fn test_player_outputs_table_in_order() {
    let mut out = MockAnalogOut::default();
    let mut player = WaveformPlayer::new(&ECG_WAVEFORM);

    for _ in 0..ECG_WAVEFORM.len() {
        player.on_tick(&mut out).unwrap();
    }

    assert_eq!(out.written, ECG_WAVEFORM.to_vec());
    assert_eq!(player.position(), 0);
}

#[test]
fn test_player_wraps_to_first_sample() {
    let mut out = MockAnalogOut::default();
    let mut player = WaveformPlayer::new(&ECG_WAVEFORM);

    for _ in 0..ECG_WAVEFORM.len() + 2 {
        player.on_tick(&mut out).unwrap();
    }

    let tail = &out.written[ECG_WAVEFORM.len()..];
    assert_eq!(tail, &ECG_WAVEFORM[..2]);
}

#[test]
fn test_player_repeats_sample_after_failed_write() {
    let mut out = MockAnalogOut::default();
    let mut player = WaveformPlayer::new(&ECG_WAVEFORM);

    player.on_tick(&mut out).unwrap();
    out.fail_next_write = true;
    assert_eq!(player.on_tick(&mut out), Err(HalError::WriteFailed));
    assert_eq!(player.position(), 1);

    assert_eq!(player.on_tick(&mut out), Ok(Some(ECG_WAVEFORM[1])));
    assert_eq!(out.written, ECG_WAVEFORM[..2].to_vec());
    assert_eq!(player.position(), 2);
}

#[test]
fn test_player_without_samples_writes_nothing() {
    let mut out = MockAnalogOut::default();
    let mut player = WaveformPlayer::new(&[]);

    assert_eq!(player.on_tick(&mut out), Ok(None));
    assert!(out.written.is_empty());
}

#[test]
fn test_stream_sample_sends_channel_1() {
    let mut adc = MockAdc::with([1234, 9, 9]);
    let mut serial = MockSerial::new();

    assert_eq!(block_on(stream_sample(&mut adc, &mut serial)), Ok(1234));
    assert_eq!(adc.reads, vec![AnalogChannel::Ch1]);
    assert_eq!(serial.lines, vec!["1234\r\n"]);
}

#[test]
fn test_stream_sample_read_error_sends_nothing() {
    let mut adc = MockAdc::with([0; 3]);
    adc.fail = true;
    let mut serial = MockSerial::new();

    assert_eq!(
        block_on(stream_sample(&mut adc, &mut serial)),
        Err(HalError::ReadFailed)
    );
    assert!(serial.lines.is_empty());
}
