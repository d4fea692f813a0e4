// EKG-Generator: gibt ein EKG-Signal analog aus und tastet Kanal 1 ab
//
// Timer A (2 ms): ADC Kanal 1 → UART
// Timer B (4 ms): nächstes EKG-Sample → PWM-Ausgang

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
use esp_hal::timer::timg::TimerGroup;

use {esp_backtrace as _, esp_println as _};

use esp_sensor_steuerung::config::{ECG_OUTPUT_PERIOD_US, ECG_SAMPLE_PERIOD_US};
use esp_sensor_steuerung::hal::{AdcChannels, init_serial, start_timer_a, start_timer_b};
use esp_sensor_steuerung::tasks::{sample_stream_task, waveform_output_task};
use esp_sensor_steuerung::{Notification, TimerNotifier};

esp_bootloader_esp_idf::esp_app_desc!();

static SAMPLE_TICK: Notification = Notification::new();
static OUTPUT_TICK: Notification = Notification::new();

static TIMER_A_TARGETS: [&Notification; 1] = [&SAMPLE_TICK];
static TIMER_B_TARGETS: [&Notification; 1] = [&OUTPUT_TICK];

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let systimer = SystemTimer::new(peripherals.SYSTIMER);
    let sw_interrupt = SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(systimer.alarm0, sw_interrupt.software_interrupt0);

    info!("EKG-Generator: Start");

    // Keine Kommandos, die Empfangshälfte wird nicht gebraucht
    let (serial, _serial_rx) =
        init_serial(peripherals.UART0, peripherals.GPIO16, peripherals.GPIO17)
            .expect("Failed to initialize UART");

    // Nur Kanal 1 wird gelesen, die anderen beiden bleiben konfiguriert
    let adc = AdcChannels::new(
        peripherals.ADC1,
        peripherals.GPIO0,
        peripherals.GPIO1,
        peripherals.GPIO6,
    );

    spawner
        .spawn(sample_stream_task(adc, serial, &SAMPLE_TICK))
        .unwrap();
    spawner
        .spawn(waveform_output_task(peripherals.LEDC, peripherals.GPIO7, &OUTPUT_TICK))
        .unwrap();

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let timg1 = TimerGroup::new(peripherals.TIMG1);
    start_timer_a(timg0.timer0, ECG_SAMPLE_PERIOD_US, TimerNotifier::new(&TIMER_A_TARGETS))
        .expect("Failed to start timer A");
    start_timer_b(timg1.timer0, ECG_OUTPUT_PERIOD_US, TimerNotifier::new(&TIMER_B_TARGETS))
        .expect("Failed to start timer B");

    info!(
        "EKG-Generator: Abtastung {} µs, Ausgabe {} µs",
        ECG_SAMPLE_PERIOD_US, ECG_OUTPUT_PERIOD_US
    );

    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
