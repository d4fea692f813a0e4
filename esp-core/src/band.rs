//! Schwellwert-Tabellen
//!
//! Ordnet einen Messwert genau einem Bereich (Band) zu. Jede Tabelle endet
//! mit einer Auffang-Aktion, dadurch ist die Klassifikation total.

use crate::types::{AlertLevel, BuzzerCadence, LedPattern};

/// Obere Grenze eines Bandes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// `value < limit` (Grenze gehört zum nächsten Band)
    Below(u16),
    /// `value <= limit` (Grenze gehört zu diesem Band)
    AtMost(u16),
}

impl Bound {
    pub const fn admits(self, value: u16) -> bool {
        match self {
            Bound::Below(limit) => value < limit,
            Bound::AtMost(limit) => value <= limit,
        }
    }

    /// Kleinster Wert der NICHT mehr im Band liegt
    const fn edge(self) -> u32 {
        match self {
            Bound::Below(limit) => limit as u32,
            Bound::AtMost(limit) => limit as u32 + 1,
        }
    }
}

/// Ein Band: alle Werte unterhalb von `upper` (und oberhalb des Vorgängers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdBand<A> {
    pub upper: Bound,
    pub action: A,
}

impl<A> ThresholdBand<A> {
    pub const fn new(upper: Bound, action: A) -> Self {
        Self { upper, action }
    }
}

/// Geordnete Band-Tabelle mit Auffang-Aktion
#[derive(Debug, Clone, Copy)]
pub struct BandTable<A, const N: usize> {
    bands: [ThresholdBand<A>; N],
    otherwise: A,
}

impl<A: Copy, const N: usize> BandTable<A, N> {
    /// Erstellt eine Tabelle
    ///
    /// # Panics
    /// Wenn die Grenzen nicht streng aufsteigend sind (überlappende oder
    /// leere Bänder). Für `const` Tabellen ist das ein Compile-Fehler.
    pub const fn new(bands: [ThresholdBand<A>; N], otherwise: A) -> Self {
        let mut i = 1;
        while i < N {
            assert!(
                bands[i - 1].upper.edge() < bands[i].upper.edge(),
                "band limits must be strictly ascending"
            );
            i += 1;
        }
        if N > 0 {
            assert!(
                bands[N - 1].upper.edge() <= u16::MAX as u32,
                "last band must leave room for the fallback"
            );
        }
        Self { bands, otherwise }
    }

    /// Liefert die Aktion des ersten Bandes das `value` enthält
    pub fn classify(&self, value: u16) -> A {
        self.bands
            .iter()
            .find(|band| band.upper.admits(value))
            .map_or(self.otherwise, |band| band.action)
    }

    pub fn bands(&self) -> &[ThresholdBand<A>] {
        &self.bands
    }

    pub fn otherwise(&self) -> A {
        self.otherwise
    }
}

/// Balkenanzeige des Entfernungsmessers (cm)
///
/// `< 10` aus, `10..20` LED1, `20..=30` LED1+2, `> 30` alle drei.
pub const DISTANCE_BAR: BandTable<LedPattern, 3> = BandTable::new(
    [
        ThresholdBand::new(Bound::Below(10), LedPattern::first(0)),
        ThresholdBand::new(Bound::Below(20), LedPattern::first(1)),
        ThresholdBand::new(Bound::AtMost(30), LedPattern::first(2)),
    ],
    LedPattern::first(3),
);

/// Warnstufen des Abstandswarners (cm)
///
/// `<= 300` Gefahr, `301..500` Vorsicht, `>= 500` Sicher.
pub const PROXIMITY: BandTable<AlertLevel, 2> = BandTable::new(
    [
        ThresholdBand::new(Bound::AtMost(300), AlertLevel::Danger),
        ThresholdBand::new(Bound::Below(500), AlertLevel::Caution),
    ],
    AlertLevel::Safe,
);

/// Summer-Takt des Abstandswarners (cm)
///
/// Der Summer schließt 500 ein, die LED-Anzeige nicht.
pub const BUZZER_CADENCE: BandTable<BuzzerCadence, 2> = BandTable::new(
    [
        ThresholdBand::new(Bound::AtMost(300), BuzzerCadence::Fast),
        ThresholdBand::new(Bound::AtMost(500), BuzzerCadence::Slow),
    ],
    BuzzerCadence::Silent,
);

/// Balken-Muster für eine Entfernung
pub fn distance_bar(distance_cm: u16) -> LedPattern {
    DISTANCE_BAR.classify(distance_cm)
}

/// Warnstufe für eine Entfernung
pub fn proximity_level(distance_cm: u16) -> AlertLevel {
    PROXIMITY.classify(distance_cm)
}

/// Summer-Takt für eine Entfernung
pub fn buzzer_cadence(distance_cm: u16) -> BuzzerCadence {
    BUZZER_CADENCE.classify(distance_cm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_admits() {
        assert!(Bound::Below(10).admits(9));
        assert!(!Bound::Below(10).admits(10));
        assert!(Bound::AtMost(10).admits(10));
        assert!(!Bound::AtMost(10).admits(11));
    }

    #[test]
    fn test_proximity_boundaries() {
        assert_eq!(proximity_level(0), AlertLevel::Danger);
        assert_eq!(proximity_level(300), AlertLevel::Danger);
        assert_eq!(proximity_level(301), AlertLevel::Caution);
        assert_eq!(proximity_level(499), AlertLevel::Caution);
        assert_eq!(proximity_level(500), AlertLevel::Safe);
        assert_eq!(proximity_level(u16::MAX), AlertLevel::Safe);
    }

    #[test]
    fn test_buzzer_includes_500() {
        assert_eq!(buzzer_cadence(300), BuzzerCadence::Fast);
        assert_eq!(buzzer_cadence(500), BuzzerCadence::Slow);
        assert_eq!(buzzer_cadence(501), BuzzerCadence::Silent);
    }

    #[test]
    fn test_distance_bar_boundaries() {
        assert_eq!(distance_bar(9).lit(), 0);
        assert_eq!(distance_bar(10).lit(), 1);
        assert_eq!(distance_bar(19).lit(), 1);
        assert_eq!(distance_bar(20).lit(), 2);
        assert_eq!(distance_bar(30).lit(), 2);
        assert_eq!(distance_bar(31).lit(), 3);
    }

    #[test]
    fn test_empty_table_uses_fallback() {
        let table: BandTable<u8, 0> = BandTable::new([], 7);
        assert_eq!(table.classify(0), 7);
        assert_eq!(table.classify(u16::MAX), 7);
    }

    #[test]
    #[should_panic(expected = "strictly ascending")]
    fn test_overlapping_bands_rejected() {
        // Below(11) und AtMost(10) haben dieselbe Kante -> leeres Band
        let _ = BandTable::new(
            [
                ThresholdBand::new(Bound::AtMost(10), 1u8),
                ThresholdBand::new(Bound::Below(11), 2u8),
            ],
            3u8,
        );
    }
}
