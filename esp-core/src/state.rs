//! Geteilter Zustand zwischen Tasks
//!
//! Ein Task schreibt, mehrere Tasks lesen. Leser sehen immer den zuletzt
//! geschriebenen Wert, es gibt keine Queue und keinen Rückstau.

use core::sync::atomic::{AtomicU8, AtomicU16, Ordering};

use crate::types::{Mode, SerialCommand};

/// Letzter Messwert (z.B. Entfernung in cm)
pub struct SharedReading {
    value: AtomicU16,
}

impl SharedReading {
    /// Wert nach dem Zurücksetzen (System aus)
    pub const SENTINEL: u16 = 0;

    pub const fn new() -> Self {
        Self {
            value: AtomicU16::new(Self::SENTINEL),
        }
    }

    pub fn store(&self, value: u16) {
        self.value.store(value, Ordering::Release);
    }

    pub fn latest(&self) -> u16 {
        self.value.load(Ordering::Acquire)
    }

    pub fn reset(&self) {
        self.store(Self::SENTINEL);
    }
}

impl Default for SharedReading {
    fn default() -> Self {
        Self::new()
    }
}

const ENABLED: u8 = 1 << 0;
const HOLD: u8 = 1 << 1;

/// Betriebs-Flags (ein/aus, halten)
///
/// Beide Flags liegen in einem Byte, damit Tasten- und UART-Task
/// sie gemeinsam und konsistent ändern (kein "hold" bei ausgeschaltetem System).
pub struct ModeFlags {
    bits: AtomicU8,
}

impl ModeFlags {
    pub const fn new() -> Self {
        Self {
            bits: AtomicU8::new(0),
        }
    }

    /// Startet im eingeschalteten Zustand
    pub const fn enabled() -> Self {
        Self {
            bits: AtomicU8::new(ENABLED),
        }
    }

    pub fn snapshot(&self) -> Mode {
        decode(self.bits.load(Ordering::Acquire))
    }

    pub fn enable(&self) {
        self.bits.fetch_or(ENABLED, Ordering::AcqRel);
    }

    /// Schaltet das System ein/aus. Beim Ausschalten wird "hold" gelöscht.
    pub fn toggle_power(&self) -> Mode {
        self.update(|bits| {
            if bits & ENABLED != 0 {
                0
            } else {
                bits | ENABLED
            }
        })
    }

    /// Schaltet "hold" um, nur wenn das System eingeschaltet ist
    pub fn toggle_hold(&self) -> Mode {
        self.update(|bits| {
            if bits & ENABLED != 0 {
                bits ^ HOLD
            } else {
                bits
            }
        })
    }

    /// Wendet ein serielles Kommando an
    pub fn apply_command(&self, command: SerialCommand) -> Mode {
        match command {
            SerialCommand::Power => self.toggle_power(),
            SerialCommand::Hold => self.toggle_hold(),
        }
    }

    /// Wendet empfangene Bytes der Reihe nach als Kommandos an
    ///
    /// Unbekannte Bytes werden ignoriert. Liefert den Modus nach dem
    /// letzten Kommando (ohne Kommando: unverändert).
    pub fn apply_bytes(&self, bytes: &[u8]) -> Mode {
        bytes
            .iter()
            .filter_map(|byte| SerialCommand::from_byte(*byte))
            .fold(self.snapshot(), |_, command| self.apply_command(command))
    }

    fn update(&self, f: impl Fn(u8) -> u8) -> Mode {
        let previous = self
            .bits
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |bits| Some(f(bits)))
            .unwrap_or_else(|bits| bits);
        decode(f(previous))
    }
}

impl Default for ModeFlags {
    fn default() -> Self {
        Self::new()
    }
}

fn decode(bits: u8) -> Mode {
    Mode {
        enabled: bits & ENABLED != 0,
        hold: bits & HOLD != 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_starts_at_sentinel() {
        let reading = SharedReading::new();
        assert_eq!(reading.latest(), SharedReading::SENTINEL);
        reading.store(123);
        assert_eq!(reading.latest(), 123);
        reading.reset();
        assert_eq!(reading.latest(), 0);
    }

    #[test]
    fn test_toggle_power_clears_hold() {
        let flags = ModeFlags::new();
        assert!(flags.toggle_power().enabled);
        assert!(flags.toggle_hold().hold);

        let mode = flags.toggle_power();
        assert_eq!(
            mode,
            Mode {
                enabled: false,
                hold: false
            }
        );
    }

    #[test]
    fn test_hold_ignored_while_disabled() {
        let flags = ModeFlags::new();
        let mode = flags.toggle_hold();
        assert!(!mode.hold);
        assert_eq!(flags.snapshot(), Mode::default());
    }

    #[test]
    fn test_apply_command() {
        let flags = ModeFlags::new();
        flags.apply_command(SerialCommand::Power);
        flags.apply_command(SerialCommand::Hold);
        assert_eq!(
            flags.snapshot(),
            Mode {
                enabled: true,
                hold: true
            }
        );
        flags.apply_command(SerialCommand::Hold);
        assert!(!flags.snapshot().hold);
    }

    #[test]
    fn test_apply_bytes_without_commands_keeps_mode() {
        let flags = ModeFlags::enabled();
        let mode = flags.apply_bytes(b"x\r\n");
        assert_eq!(
            mode,
            Mode {
                enabled: true,
                hold: false
            }
        );
        assert_eq!(flags.apply_bytes(&[]), mode);
    }

    #[test]
    fn test_enabled_constructor() {
        let flags = ModeFlags::enabled();
        assert!(flags.snapshot().enabled);
        flags.enable();
        assert!(flags.snapshot().enabled);
    }
}
