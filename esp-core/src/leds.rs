//! LED-Sequenzen und Tasten-Zuordnung

use embedded_hal_async::delay::DelayNs;

use crate::traits::{HalError, LedBank};
use crate::types::Led;

/// Auflösung der Wartezeit zwischen zwei Umschaltungen (ms)
pub const BLINK_STEP_MS: u32 = 100;

/// Was die Sequenz mit der LED macht
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceMode {
    On,
    Off,
    Toggle,
}

/// Beschreibt das Verhalten einer LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedSequence {
    pub mode: SequenceMode,
    pub led: Led,
    /// Anzahl der Umschaltungen (nur Toggle)
    pub cycles: u8,
    /// Wartezeit nach jeder Umschaltung in ms (nur Toggle)
    pub period_ms: u16,
}

impl LedSequence {
    /// Wartezeit pro Umschaltung, abgerundet auf ganze `BLINK_STEP_MS`
    pub const fn effective_period_ms(&self) -> u32 {
        (self.period_ms as u32 / BLINK_STEP_MS) * BLINK_STEP_MS
    }

    /// Führt die Sequenz aus
    ///
    /// On/Off setzen die LED einmal, Toggle schaltet `cycles` mal um und
    /// wartet danach jeweils in Schritten von `BLINK_STEP_MS`.
    pub async fn run<L: LedBank, D: DelayNs>(
        &self,
        leds: &mut L,
        delay: &mut D,
    ) -> Result<(), HalError> {
        match self.mode {
            SequenceMode::On => leds.set(self.led, true),
            SequenceMode::Off => leds.set(self.led, false),
            SequenceMode::Toggle => {
                let steps = self.period_ms as u32 / BLINK_STEP_MS;
                for _ in 0..self.cycles {
                    leds.toggle(self.led)?;
                    for _ in 0..steps {
                        delay.delay_ms(BLINK_STEP_MS).await;
                    }
                }
                Ok(())
            }
        }
    }
}

/// Gedrückte Tasten als Bitmaske
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState(pub u8);

impl KeyState {
    pub const NONE: KeyState = KeyState(0);
    pub const SWITCH_1: KeyState = KeyState(1 << 0);
    pub const SWITCH_2: KeyState = KeyState(1 << 1);
    pub const BOTH: KeyState = KeyState(Self::SWITCH_1.0 | Self::SWITCH_2.0);

    pub const fn from_levels(switch_1: bool, switch_2: bool) -> Self {
        KeyState((switch_1 as u8) | ((switch_2 as u8) << 1))
    }
}

/// Welche LED beim Tastendruck umgeschaltet wird
///
/// Taste 1 → LED1, Taste 2 → LED2, beide → LED3.
pub const fn toggle_target(keys: KeyState) -> Option<Led> {
    match keys {
        KeyState::SWITCH_1 => Some(Led::Led1),
        KeyState::SWITCH_2 => Some(Led::Led2),
        KeyState::BOTH => Some(Led::Led3),
        _ => None,
    }
}
