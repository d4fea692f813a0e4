// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Pin-Belegung steht hier als Kommentar; die Binaries nehmen die passenden
// `peripherals.GPIOx` Felder direkt (Typen sind pro Pin verschieden).

use esp_core::env::parse_u32_or;

// ============================================================================
// Platine: LEDs, Tasten, Summer
// ============================================================================

// LED1 GPIO11, LED2 GPIO10, LED3 GPIO5 (aktiv high)
// S1 GPIO4, S2 GPIO15 (aktiv low, interner Pull-up)
// Summer GPIO20 (nur Abstandswarner)

/// Entprellzeit nach einer Flanke in ms
pub const DEBOUNCE_MS: u64 = 50;

// ============================================================================
// Onboard RGB LED (Status)
// ============================================================================

// RGB LED (WS2812/Neopixel) an GPIO8

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// Ultraschall-Sensor HC-SR04
// ============================================================================

// Trigger GPIO2, Echo GPIO3

/// Länge des Trigger-Pulses in µs
pub const HCSR04_TRIGGER_US: u32 = 10;

/// Maximale Wartezeit auf Echo-Beginn bzw. -Ende in ms (~6.9 m)
pub const HCSR04_TIMEOUT_MS: u64 = 40;

/// Echo-Dauer pro Zentimeter in µs (Hin- und Rückweg)
pub const HCSR04_US_PER_CM: u64 = 58;

// ============================================================================
// LCD (ITS-E0803, 3 Stellen BCD)
// ============================================================================

// Daten D0..D3: GPIO20, GPIO21, GPIO22, GPIO23
// Stellen-Latches (höchstwertige zuerst): GPIO19, GPIO18, GPIO9

/// Anzahl Stellen
pub const LCD_DIGITS: usize = 3;

// ============================================================================
// Analog: ADC-Eingänge und PWM-Ausgang
// ============================================================================

// ADC1 Kanal 1..3: GPIO0, GPIO1, GPIO6 (Beschleunigungssensor X/Y/Z)
// Analoger Ausgang: GPIO7 (LEDC PWM + RC-Tiefpass)

/// PWM-Frequenz in kHz (8 Bit Auflösung)
pub const PWM_FREQUENCY_KHZ: u32 = 20;

// ============================================================================
// UART
// ============================================================================

/// Baudrate der Meldungen, per .env überschreibbar (UART_BAUD_RATE)
pub const UART_BAUD_RATE: u32 = parse_u32_or(option_env!("UART_BAUD_RATE"), 115_200);

// UART0 → PC: TX GPIO16, RX GPIO17

/// Lese-Puffer des Kommando-Tasks in Bytes
pub const UART_RX_CHUNK: usize = 8;

// ============================================================================
// Timer-Perioden
// ============================================================================

/// Abstandswarner: Messung + LEDs (Timer A)
/// Per .env überschreibbar (SAMPLE_PERIOD_US)
pub const PROXIMITY_SAMPLE_PERIOD_US: u64 =
    parse_u32_or(option_env!("SAMPLE_PERIOD_US"), 500_000) as u64;

/// Abstandswarner: Beschleunigungssensor (Timer B)
pub const ACCEL_PERIOD_US: u64 = 10_000;

/// Entfernungsmesser: Messung, LEDs, LCD, UART
pub const METER_PERIOD_US: u64 = 1_000_000;

/// EKG-Generator: Abtastung Kanal 1 (Timer A)
pub const ECG_SAMPLE_PERIOD_US: u64 = 2_000;

/// EKG-Generator: Ausgabe des nächsten Samples (Timer B)
pub const ECG_OUTPUT_PERIOD_US: u64 = 4_000;

// ============================================================================
// Tasten-LEDs
// ============================================================================

/// Abfrage-Intervall der Tasten in ms
pub const KEY_POLL_MS: u64 = 100;

/// Start-Sequenz: LED3 10x umschalten, je 500 ms
pub const STARTUP_TOGGLE_CYCLES: u8 = 10;
pub const STARTUP_TOGGLE_PERIOD_MS: u16 = 500;
