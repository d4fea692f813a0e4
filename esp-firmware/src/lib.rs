// Library-Root: Hardware-Adapter, Tasks und Konfiguration der Firmware-Images
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core (geteilter Zustand + Benachrichtigung)
pub use esp_core::{ModeFlags, Notification, SharedReading, TimerNotifier};
