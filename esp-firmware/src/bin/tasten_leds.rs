// Tasten-LEDs: LED3 blinkt beim Start, danach schalten die Tasten die LEDs um
//
// Taste 1 → LED1, Taste 2 → LED2, beide → LED3

// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

use esp_hal::clock::CpuClock;
use esp_hal::interrupt::software::SoftwareInterruptControl;
use esp_hal::timer::systimer::SystemTimer;

use {esp_backtrace as _, esp_println as _};

use esp_core::{Led, LedSequence, SequenceMode};
use esp_sensor_steuerung::config::{STARTUP_TOGGLE_CYCLES, STARTUP_TOGGLE_PERIOD_MS};
use esp_sensor_steuerung::hal::{GpioLeds, switch_input};
use esp_sensor_steuerung::tasks::key_leds_task;

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let systimer = SystemTimer::new(peripherals.SYSTIMER);
    let sw_interrupt = SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(systimer.alarm0, sw_interrupt.software_interrupt0);

    info!("Tasten-LEDs: Start");

    let leds = GpioLeds::new(peripherals.GPIO11, peripherals.GPIO10, peripherals.GPIO5);
    let switch_1 = switch_input(peripherals.GPIO4);
    let switch_2 = switch_input(peripherals.GPIO15);

    let startup = LedSequence {
        mode: SequenceMode::Toggle,
        led: Led::Led3,
        cycles: STARTUP_TOGGLE_CYCLES,
        period_ms: STARTUP_TOGGLE_PERIOD_MS,
    };

    spawner
        .spawn(key_leds_task(leds, switch_1, switch_2, startup))
        .unwrap();

    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
