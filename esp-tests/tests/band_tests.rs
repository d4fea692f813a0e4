//! Integration Tests für die Schwellwert-Tabellen
//!
//! Diese Tests laufen auf dem Host (x86_64)

use esp_core::band::{
    BUZZER_CADENCE, DISTANCE_BAR, PROXIMITY, buzzer_cadence, distance_bar, proximity_level,
};
use esp_core::{AlertLevel, BandTable, Bound, BuzzerCadence, LedPattern, ThresholdBand};

// ============================================================================
// Tests: Totalität und Determinismus
// ============================================================================

/// Jeder u16-Wert landet in genau einem Band und liefert immer dasselbe
#[test]
fn test_proximity_total_and_deterministic() {
    for d in 0..=u16::MAX {
        let first = proximity_level(d);
        assert_eq!(first, proximity_level(d));

        let matching = PROXIMITY
            .bands()
            .iter()
            .position(|band| band.upper.admits(d));
        match matching {
            Some(i) => assert_eq!(first, PROXIMITY.bands()[i].action),
            None => assert_eq!(first, PROXIMITY.otherwise()),
        }
    }
}

/// Die Stufen wechseln genau zweimal: bei 300/301 und bei 499/500
#[test]
fn test_proximity_changes_exactly_at_boundaries() {
    let mut changes = Vec::new();
    for d in 1..=2000u16 {
        if proximity_level(d - 1) != proximity_level(d) {
            changes.push(d);
        }
    }
    assert_eq!(changes, vec![301, 500]);
}

#[test]
fn test_distance_bar_changes_exactly_at_boundaries() {
    let mut changes = Vec::new();
    for d in 1..=1000u16 {
        if distance_bar(d - 1) != distance_bar(d) {
            changes.push(d);
        }
    }
    assert_eq!(changes, vec![10, 20, 31]);
}

#[test]
fn test_distance_bar_is_monotonic() {
    let mut lit = 0;
    for d in 0..=100u16 {
        let now = distance_bar(d).lit();
        assert!(now >= lit, "bar shrank at {d} cm");
        lit = now;
    }
    assert_eq!(DISTANCE_BAR.otherwise(), LedPattern::ALL);
}

// ============================================================================
// Tests: Summer-Takt
// ============================================================================

/// Summer blinkt schneller je näher das Fahrzeug
#[test]
fn test_buzzer_period_decreases_towards_danger() {
    let safe = buzzer_cadence(800);
    let caution = buzzer_cadence(400);
    let danger = buzzer_cadence(100);

    assert_eq!(safe, BuzzerCadence::Silent);
    assert!(!safe.is_active());
    assert!(caution.is_active() && danger.is_active());
    assert!(danger.half_period_ms() < caution.half_period_ms());
}

/// Der Summer behandelt 500 als Vorsicht, die LEDs als Sicher
#[test]
fn test_buzzer_and_leds_disagree_at_500() {
    assert_eq!(buzzer_cadence(500), BuzzerCadence::Slow);
    assert_eq!(proximity_level(500), AlertLevel::Safe);
    assert_eq!(BUZZER_CADENCE.bands().len(), 2);
}

// ============================================================================
// Tests: eigene Tabellen
// ============================================================================

#[test]
fn test_custom_table() {
    const TABLE: BandTable<&str, 2> = BandTable::new(
        [
            ThresholdBand::new(Bound::Below(1000), "niedrig"),
            ThresholdBand::new(Bound::AtMost(3000), "mittel"),
        ],
        "hoch",
    );

    assert_eq!(TABLE.classify(999), "niedrig");
    assert_eq!(TABLE.classify(1000), "mittel");
    assert_eq!(TABLE.classify(3000), "mittel");
    assert_eq!(TABLE.classify(3001), "hoch");
}

#[test]
#[should_panic]
fn test_descending_table_rejected() {
    let _ = BandTable::new(
        [
            ThresholdBand::new(Bound::Below(50), 'a'),
            ThresholdBand::new(Bound::Below(20), 'b'),
        ],
        'c',
    );
}
