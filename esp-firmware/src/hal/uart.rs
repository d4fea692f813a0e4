// UART: Meldungen an den PC und Kommandos vom PC
//
// Mehrere Tasks senden über denselben TX-Kanal. Die Sendehälfte liegt
// daher hinter einem async Mutex (SharedSerial), jeder Task bekommt einen
// eigenen UartWriter darauf. Die Empfangshälfte gehört allein dem
// Kommando-Task.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use esp_core::{HalError, SerialWriter};
use esp_hal::Async;
use esp_hal::gpio::interconnect::{PeripheralInput, PeripheralOutput};
use esp_hal::uart::{Config, Instance, Uart, UartRx, UartTx};
use static_cell::StaticCell;

use crate::config::UART_BAUD_RATE;

/// Gemeinsam genutzte Sendehälfte
pub type SharedSerial = Mutex<CriticalSectionRawMutex, UartTx<'static, Async>>;

static SERIAL_TX: StaticCell<SharedSerial> = StaticCell::new();

/// Initialisiert die UART (8N1, UART_BAUD_RATE) und teilt sie auf
///
/// Liefert die geteilte Sendehälfte und die Empfangshälfte.
/// Darf nur einmal aufgerufen werden.
pub fn init_serial(
    uart: impl Instance + 'static,
    tx: impl PeripheralOutput<'static>,
    rx: impl PeripheralInput<'static>,
) -> Result<(&'static SharedSerial, UartRx<'static, Async>), HalError> {
    let config = Config::default().with_baudrate(UART_BAUD_RATE);
    let uart = Uart::new(uart, config)
        .map_err(|_| HalError::WriteFailed)?
        .with_tx(tx)
        .with_rx(rx)
        .into_async();
    let (rx, tx) = uart.split();

    let shared = SERIAL_TX
        .try_init(Mutex::new(tx))
        .ok_or(HalError::WriteFailed)?;
    Ok((shared, rx))
}

/// SerialWriter auf der geteilten Sendehälfte
#[derive(Clone, Copy)]
pub struct UartWriter {
    tx: &'static SharedSerial,
}

impl UartWriter {
    pub fn new(tx: &'static SharedSerial) -> Self {
        Self { tx }
    }
}

impl SerialWriter for UartWriter {
    async fn send_str(&mut self, text: &str) -> Result<(), HalError> {
        // Lock über die ganze Zeile: Meldungen verschiedener Tasks
        // werden nicht ineinander geschoben
        let mut tx = self.tx.lock().await;

        let mut bytes = text.as_bytes();
        while !bytes.is_empty() {
            let written = tx
                .write_async(bytes)
                .await
                .map_err(|_| HalError::WriteFailed)?;
            bytes = &bytes[written..];
        }
        tx.flush_async().await.map_err(|_| HalError::WriteFailed)
    }
}
