//! Mock-Peripherie für die Host-Tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal_async::delay::DelayNs;
use esp_core::{
    AnalogChannel, AnalogInput, AnalogOutput, DigitalOutput, DistanceSensor, HalError, Led,
    LedBank, LedPattern, SerialWriter, SmartLedWriter,
};
use rgb::RGB8;

// ============================================================================
// Mock LED Bank
// ============================================================================

#[derive(Default)]
pub struct MockLeds {
    pub state: [bool; 3],
    pub write_count: usize,
    pub toggle_count: usize,
    pub fail_next_write: bool,
}

impl MockLeds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pattern(&self) -> LedPattern {
        LedPattern(self.state)
    }
}

impl LedBank for MockLeds {
    fn set(&mut self, led: Led, on: bool) -> Result<(), HalError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(HalError::WriteFailed);
        }
        self.state[led.index()] = on;
        self.write_count += 1;
        Ok(())
    }

    fn toggle(&mut self, led: Led) -> Result<(), HalError> {
        self.state[led.index()] = !self.state[led.index()];
        self.toggle_count += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Distance Sensor
// ============================================================================

/// Liefert die vorbereiteten Messwerte der Reihe nach
#[derive(Default)]
pub struct MockSensor {
    pub readings: VecDeque<Result<u16, HalError>>,
    pub read_count: usize,
}

impl MockSensor {
    pub fn with(readings: &[Result<u16, HalError>]) -> Self {
        Self {
            readings: readings.iter().copied().collect(),
            read_count: 0,
        }
    }
}

impl DistanceSensor for MockSensor {
    async fn read_centimeters(&mut self) -> Result<u16, HalError> {
        self.read_count += 1;
        self.readings.pop_front().unwrap_or(Err(HalError::Timeout))
    }
}

// ============================================================================
// Mock Serial
// ============================================================================

#[derive(Default)]
pub struct MockSerial {
    pub lines: Vec<String>,
    pub fail_next_write: bool,
}

impl MockSerial {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SerialWriter for MockSerial {
    async fn send_str(&mut self, text: &str) -> Result<(), HalError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(HalError::WriteFailed);
        }
        self.lines.push(text.into());
        Ok(())
    }
}

// ============================================================================
// Mock Digital Pin (mit gemeinsamem Log)
// ============================================================================

/// Gemeinsames Log aller Pins: (Pin-Name, Pegel)
pub type PinLog = Rc<RefCell<Vec<(&'static str, bool)>>>;

pub struct MockPin {
    pub name: &'static str,
    pub level: bool,
    pub log: PinLog,
}

impl MockPin {
    pub fn new(name: &'static str, log: &PinLog) -> Self {
        Self {
            name,
            level: false,
            log: Rc::clone(log),
        }
    }

    fn record(&mut self, level: bool) {
        self.level = level;
        self.log.borrow_mut().push((self.name, level));
    }
}

impl DigitalOutput for MockPin {
    fn set_high(&mut self) -> Result<(), HalError> {
        self.record(true);
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), HalError> {
        self.record(false);
        Ok(())
    }

    fn toggle(&mut self) -> Result<(), HalError> {
        let level = !self.level;
        self.record(level);
        Ok(())
    }
}

// ============================================================================
// Mock ADC / Analog Output
// ============================================================================

#[derive(Default)]
pub struct MockAdc {
    pub values: [u16; 3],
    pub reads: Vec<AnalogChannel>,
    pub fail: bool,
}

impl MockAdc {
    pub fn with(values: [u16; 3]) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }
}

impl AnalogInput for MockAdc {
    fn read_single(&mut self, channel: AnalogChannel) -> Result<u16, HalError> {
        if self.fail {
            return Err(HalError::ReadFailed);
        }
        self.reads.push(channel);
        let index = match channel {
            AnalogChannel::Ch1 => 0,
            AnalogChannel::Ch2 => 1,
            AnalogChannel::Ch3 => 2,
        };
        Ok(self.values[index])
    }
}

#[derive(Default)]
pub struct MockAnalogOut {
    pub written: Vec<u8>,
    pub fail_next_write: bool,
}

impl AnalogOutput for MockAnalogOut {
    fn write(&mut self, value: u8) -> Result<(), HalError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(HalError::WriteFailed);
        }
        self.written.push(value);
        Ok(())
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Zählt nur die angeforderte Wartezeit, wartet nicht wirklich
#[derive(Default)]
pub struct MockDelay {
    pub total_ns: u64,
    pub calls: usize,
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
        self.calls += 1;
    }
}

// ============================================================================
// Mock LED Writer (Status-LED)
// ============================================================================

#[derive(Default)]
pub struct MockLedWriter {
    pub last_color: Option<RGB8>,
    pub write_count: usize,
    pub fail_next_write: bool,
}

impl SmartLedWriter for MockLedWriter {
    fn write(&mut self, color: RGB8) -> Result<(), HalError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(HalError::WriteFailed);
        }

        self.last_color = Some(color);
        self.write_count += 1;
        Ok(())
    }
}
