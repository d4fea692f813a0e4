// Abstandswarner: Ultraschall-Messung, Warn-LEDs, Summer, Sturzerkennung
//
// Timer A (500 ms): Messung + LED-Anzeige
// Timer B (10 ms):  Beschleunigungssensor
// Summer:           eigener Takt je nach Warnstufe

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

// Embassy Async Runtime
use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::interrupt::software::SoftwareInterruptControl;
use esp_hal::timer::systimer::SystemTimer;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_sensor_steuerung::config::{ACCEL_PERIOD_US, PROXIMITY_SAMPLE_PERIOD_US};
use esp_sensor_steuerung::hal::{
    AdcChannels, GpioLeds, GpioPin, Hcsr04, init_serial, start_timer_a, start_timer_b,
    switch_input,
};
use esp_sensor_steuerung::tasks::{
    buzzer_task, fall_detection_task, proximity_indicator_task, proximity_sampler_task,
    serial_command_task, switch_task,
};
use esp_sensor_steuerung::{ModeFlags, Notification, SharedReading, TimerNotifier};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
esp_bootloader_esp_idf::esp_app_desc!();

// Geteilter Zustand: System startet eingeschaltet, Taste 1 schaltet um
static FLAGS: ModeFlags = ModeFlags::enabled();
static DISTANCE: SharedReading = SharedReading::new();

// Benachrichtigungen der Worker
static SAMPLE_TICK: Notification = Notification::new();
static LED_TICK: Notification = Notification::new();
static ACCEL_TICK: Notification = Notification::new();

static TIMER_A_TARGETS: [&Notification; 2] = [&SAMPLE_TICK, &LED_TICK];
static TIMER_B_TARGETS: [&Notification; 1] = [&ACCEL_TICK];

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime auf dem SYSTIMER, TIMG0/TIMG1 bleiben für Timer A/B
    let systimer = SystemTimer::new(peripherals.SYSTIMER);
    let sw_interrupt = SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(systimer.alarm0, sw_interrupt.software_interrupt0);

    info!("Abstandswarner: Start");

    // UART0 → PC (TX GPIO16, RX GPIO17)
    let (serial, serial_rx) =
        init_serial(peripherals.UART0, peripherals.GPIO16, peripherals.GPIO17)
            .expect("Failed to initialize UART");

    // Peripherie
    let sensor = Hcsr04::new(peripherals.GPIO2, peripherals.GPIO3);
    let leds = GpioLeds::new(peripherals.GPIO11, peripherals.GPIO10, peripherals.GPIO5);
    let buzzer = GpioPin::new(peripherals.GPIO20);
    let accel = AdcChannels::new(
        peripherals.ADC1,
        peripherals.GPIO0,
        peripherals.GPIO1,
        peripherals.GPIO6,
    );
    let power_switch = switch_input(peripherals.GPIO4);

    // Tasks starten, bevor die Timer feuern
    spawner
        .spawn(proximity_sampler_task(sensor, serial, &SAMPLE_TICK, &FLAGS, &DISTANCE))
        .unwrap();
    spawner
        .spawn(proximity_indicator_task(
            leds,
            peripherals.GPIO8,
            peripherals.RMT,
            &LED_TICK,
            &FLAGS,
            &DISTANCE,
        ))
        .unwrap();
    spawner.spawn(fall_detection_task(accel, serial, &ACCEL_TICK)).unwrap();
    spawner.spawn(buzzer_task(buzzer, &FLAGS, &DISTANCE)).unwrap();
    spawner.spawn(switch_task(power_switch, None, &FLAGS)).unwrap();
    spawner.spawn(serial_command_task(serial_rx, &FLAGS)).unwrap();

    // Hardware-Timer A und B
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let timg1 = TimerGroup::new(peripherals.TIMG1);
    start_timer_a(
        timg0.timer0,
        PROXIMITY_SAMPLE_PERIOD_US,
        TimerNotifier::new(&TIMER_A_TARGETS),
    )
    .expect("Failed to start timer A");
    start_timer_b(timg1.timer0, ACCEL_PERIOD_US, TimerNotifier::new(&TIMER_B_TARGETS))
        .expect("Failed to start timer B");

    info!(
        "Abstandswarner: Timer A {} µs, Timer B {} µs",
        PROXIMITY_SAMPLE_PERIOD_US, ACCEL_PERIOD_US
    );

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
