//! Integration Tests für LCD, Betriebsmodus und Tasten-LEDs
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen Mock-Peripherie

mod common;

use common::{MockDelay, MockLeds, MockPin, PinLog};
use embassy_futures::block_on;
use esp_core::alarm::refresh_display;
use esp_core::bcd::BLANK_CODE;
use esp_core::{
    BcdLcd, DigitDisplay, DisplayAction, KeyState, Led, LedSequence, Mode, ModeFlags,
    SequenceMode, to_bcd_digits, toggle_target,
};

/// LCD mit 4 Datenleitungen d0..d3 und 3 Stellen s0..s2
fn make_lcd(log: &PinLog) -> BcdLcd<MockPin, 3> {
    let data = ["d0", "d1", "d2", "d3"].map(|name| MockPin::new(name, log));
    let select = ["s0", "s1", "s2"].map(|name| MockPin::new(name, log));
    BcdLcd::new(data, select)
}

/// Ein Latch-Vorgang im Log: 4 Datenpegel, dann Puls auf der Stelle
fn latch_entries(digit: u8, select: &'static str) -> Vec<(&'static str, bool)> {
    vec![
        ("d0", digit & 1 != 0),
        ("d1", digit & 2 != 0),
        ("d2", digit & 4 != 0),
        ("d3", digit & 8 != 0),
        (select, true),
        (select, false),
    ]
}

// ============================================================================
// Tests: BCD
// ============================================================================

#[test]
fn test_bcd_digits() {
    assert_eq!(to_bcd_digits::<3>(788), [7, 8, 8]);
    assert_eq!(to_bcd_digits::<3>(5), [0, 0, 5]);
    assert_eq!(to_bcd_digits::<3>(0), [0, 0, 0]);
    assert_eq!(to_bcd_digits::<4>(4095), [4, 0, 9, 5]);
}

// ============================================================================
// Tests: LCD-Treiber
// ============================================================================

#[test]
fn test_lcd_latches_digits_msb_first() {
    let log = PinLog::default();
    let mut lcd = make_lcd(&log);

    lcd.write(788).unwrap();

    let mut expected = latch_entries(7, "s0");
    expected.extend(latch_entries(8, "s1"));
    expected.extend(latch_entries(8, "s2"));
    assert_eq!(*log.borrow(), expected);
}

#[test]
fn test_lcd_pads_short_values() {
    let log = PinLog::default();
    let mut lcd = make_lcd(&log);

    lcd.write(5).unwrap();

    let mut expected = latch_entries(0, "s0");
    expected.extend(latch_entries(0, "s1"));
    expected.extend(latch_entries(5, "s2"));
    assert_eq!(*log.borrow(), expected);
}

#[test]
fn test_lcd_off_latches_blank_code() {
    let log = PinLog::default();
    let mut lcd = make_lcd(&log);

    lcd.off().unwrap();

    let mut expected = latch_entries(BLANK_CODE, "s0");
    expected.extend(latch_entries(BLANK_CODE, "s1"));
    expected.extend(latch_entries(BLANK_CODE, "s2"));
    assert_eq!(*log.borrow(), expected);
}

#[test]
fn test_refresh_display_modes() {
    let log = PinLog::default();
    let mut lcd = make_lcd(&log);

    let on = Mode {
        enabled: true,
        hold: false,
    };
    assert_eq!(
        refresh_display(&mut lcd, on, 123),
        Ok(DisplayAction::Written(123))
    );
    let after_write = log.borrow().len();

    let hold = Mode {
        enabled: true,
        hold: true,
    };
    assert_eq!(refresh_display(&mut lcd, hold, 456), Ok(DisplayAction::Frozen));
    assert_eq!(log.borrow().len(), after_write);

    assert_eq!(
        refresh_display(&mut lcd, Mode::default(), 456),
        Ok(DisplayAction::Off)
    );
    assert_eq!(log.borrow().len(), after_write * 2);
}

// ============================================================================
// Tests: Betriebsmodus über UART-Kommandos
// ============================================================================

#[test]
fn test_serial_chunk_applies_commands_in_order() {
    let flags = ModeFlags::new();

    // 'o' ein, 'x' ignoriert, 'H' halten, 'h' wieder lösen
    let mode = flags.apply_bytes(b"oxHh");
    assert_eq!(
        mode,
        Mode {
            enabled: true,
            hold: false
        }
    );

    // 'H' vor 'o' wirkt nicht (System noch aus), 'o' danach schaltet ein
    let flags = ModeFlags::new();
    assert_eq!(
        flags.apply_bytes(b"Ho"),
        Mode {
            enabled: true,
            hold: false
        }
    );

    // Umgekehrte Reihenfolge: erst ein, dann halten
    let flags = ModeFlags::new();
    assert_eq!(
        flags.apply_bytes(b"oH"),
        Mode {
            enabled: true,
            hold: true
        }
    );
}

#[test]
fn test_serial_chunk_ignores_unknown_bytes() {
    let flags = ModeFlags::enabled();

    assert_eq!(flags.apply_bytes(b"abc\r\n"), flags.snapshot());
    assert!(flags.snapshot().enabled);

    // Ausschalten löscht auch "hold"
    flags.apply_bytes(b"h");
    assert_eq!(flags.apply_bytes(b"\x00O\xff"), Mode::default());

    // "hold" wirkt nur im eingeschalteten Zustand
    assert_eq!(flags.apply_bytes(b"hH"), Mode::default());
}

#[test]
fn test_switch_toggles_power() {
    let flags = ModeFlags::enabled();
    assert!(flags.snapshot().enabled);
    assert!(!flags.toggle_power().enabled);
    assert!(flags.toggle_power().enabled);
}

// ============================================================================
// Tests: Tasten-LEDs
// ============================================================================

#[test]
fn test_key_mapping() {
    assert_eq!(toggle_target(KeyState::from_levels(true, false)), Some(Led::Led1));
    assert_eq!(toggle_target(KeyState::from_levels(false, true)), Some(Led::Led2));
    assert_eq!(toggle_target(KeyState::from_levels(true, true)), Some(Led::Led3));
    assert_eq!(toggle_target(KeyState::NONE), None);
}

#[test]
fn test_toggle_sequence_waits_in_steps() {
    let mut leds = MockLeds::new();
    let mut delay = MockDelay::default();
    let sequence = LedSequence {
        mode: SequenceMode::Toggle,
        led: Led::Led2,
        cycles: 3,
        period_ms: 250,
    };

    block_on(sequence.run(&mut leds, &mut delay)).unwrap();

    assert_eq!(leds.toggle_count, 3);
    assert!(leds.state[Led::Led2.index()]);
    // 250 ms → 2 Schritte à 100 ms pro Umschaltung
    assert_eq!(delay.calls, 6);
    assert_eq!(delay.total_ns, 600_000_000);
    assert_eq!(sequence.effective_period_ms(), 200);
}

#[test]
fn test_on_off_sequences_do_not_wait() {
    let mut leds = MockLeds::new();
    let mut delay = MockDelay::default();

    let on = LedSequence {
        mode: SequenceMode::On,
        led: Led::Led3,
        cycles: 5,
        period_ms: 1000,
    };
    block_on(on.run(&mut leds, &mut delay)).unwrap();
    assert!(leds.state[Led::Led3.index()]);

    let off = LedSequence {
        mode: SequenceMode::Off,
        ..on
    };
    block_on(off.run(&mut leds, &mut delay)).unwrap();
    assert!(!leds.state[Led::Led3.index()]);

    assert_eq!(delay.calls, 0);
}
