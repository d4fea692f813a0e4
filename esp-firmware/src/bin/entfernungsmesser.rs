// Entfernungsmesser: LED-Balken, 3-stelliges LCD und UART-Ausgabe
//
// Timer A (1 s): Messung + Anzeige
// Taste 1 / 'O': ein/aus, Taste 2 / 'H': Wert halten

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

use esp_sensor_steuerung::config::METER_PERIOD_US;
use esp_sensor_steuerung::hal::{
    GpioLeds, GpioPin, Hcsr04, init_serial, start_timer_a, switch_input,
};
use esp_sensor_steuerung::tasks::{
    Lcd, meter_display_task, meter_sampler_task, serial_command_task, switch_task,
};
use esp_sensor_steuerung::{ModeFlags, Notification, SharedReading, TimerNotifier};

esp_bootloader_esp_idf::esp_app_desc!();

// System startet ausgeschaltet
static FLAGS: ModeFlags = ModeFlags::new();
static DISTANCE: SharedReading = SharedReading::new();

static SAMPLE_TICK: Notification = Notification::new();
static DISPLAY_TICK: Notification = Notification::new();

static TIMER_A_TARGETS: [&Notification; 2] = [&SAMPLE_TICK, &DISPLAY_TICK];

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let systimer = SystemTimer::new(peripherals.SYSTIMER);
    let sw_interrupt = SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(systimer.alarm0, sw_interrupt.software_interrupt0);

    info!("Entfernungsmesser: Start");

    let (serial, serial_rx) =
        init_serial(peripherals.UART0, peripherals.GPIO16, peripherals.GPIO17)
            .expect("Failed to initialize UART");

    let sensor = Hcsr04::new(peripherals.GPIO2, peripherals.GPIO3);
    let leds = GpioLeds::new(peripherals.GPIO11, peripherals.GPIO10, peripherals.GPIO5);

    // LCD: Daten D0..D3, Latches höchstwertige Stelle zuerst
    let lcd = Lcd::new(
        [
            GpioPin::new(peripherals.GPIO20),
            GpioPin::new(peripherals.GPIO21),
            GpioPin::new(peripherals.GPIO22),
            GpioPin::new(peripherals.GPIO23),
        ],
        [
            GpioPin::new(peripherals.GPIO19),
            GpioPin::new(peripherals.GPIO18),
            GpioPin::new(peripherals.GPIO9),
        ],
    );

    let power_switch = switch_input(peripherals.GPIO4);
    let hold_switch = switch_input(peripherals.GPIO15);

    spawner
        .spawn(meter_sampler_task(sensor, &SAMPLE_TICK, &FLAGS, &DISTANCE))
        .unwrap();
    spawner
        .spawn(meter_display_task(
            leds,
            lcd,
            serial,
            &DISPLAY_TICK,
            &FLAGS,
            &DISTANCE,
        ))
        .unwrap();
    spawner
        .spawn(switch_task(power_switch, Some(hold_switch), &FLAGS))
        .unwrap();
    spawner.spawn(serial_command_task(serial_rx, &FLAGS)).unwrap();

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    start_timer_a(timg0.timer0, METER_PERIOD_US, TimerNotifier::new(&TIMER_A_TARGETS))
        .expect("Failed to start timer A");

    info!("Entfernungsmesser: Timer A {} µs", METER_PERIOD_US);

    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
