//! Timer-Benachrichtigung (ISR → Task)
//!
//! Eine `Notification` ist ein Weck-Signal ohne Nutzdaten. Mehrfaches
//! Signalisieren vor dem nächsten `wait()` ergibt genau ein Aufwachen:
//! ein langsamer Task läuft nicht öfter, er sieht nur den neuesten Zustand.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Weck-Signal pro Worker-Task
///
/// `CriticalSectionRawMutex` macht `signal()` aus dem Interrupt-Kontext aufrufbar.
pub type Notification = Signal<CriticalSectionRawMutex, ()>;

/// Weckt bei jedem Timer-Interrupt alle registrierten Tasks
///
/// Blockiert nicht und allokiert nicht. Die Reihenfolge der Tasks innerhalb
/// eines Ticks ist nicht festgelegt.
#[derive(Clone, Copy)]
pub struct TimerNotifier<'a> {
    targets: &'a [&'a Notification],
}

impl<'a> TimerNotifier<'a> {
    pub const fn new(targets: &'a [&'a Notification]) -> Self {
        Self { targets }
    }

    /// Signalisiert alle Ziele (aus ISR aufrufbar)
    pub fn notify_all(&self) {
        for target in self.targets {
            target.signal(());
        }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
