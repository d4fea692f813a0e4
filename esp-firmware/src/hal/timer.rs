// Periodische Hardware-Timer mit Interrupt
//
// Jeder Timer-Slot hält einen TIMG-Timer und den TimerNotifier seiner
// Worker-Tasks. Die ISR quittiert den Interrupt und weckt die Tasks, sonst
// nichts: kein Blockieren, keine Allokation.
//
// Timer A und Timer B sind feste Slots mit eigener ISR, da `#[handler]`
// Funktionen keine Parameter haben.

use core::cell::{Cell, RefCell};

use critical_section::Mutex;
use esp_core::TimerNotifier;
use esp_hal::Blocking;
use esp_hal::handler;
use esp_hal::interrupt::InterruptHandler;
use esp_hal::time::Duration;
use esp_hal::timer::{Error, PeriodicTimer, Timer};

struct TimerSlot {
    timer: Mutex<RefCell<Option<PeriodicTimer<'static, Blocking>>>>,
    notifier: Mutex<Cell<Option<TimerNotifier<'static>>>>,
}

impl TimerSlot {
    const fn new() -> Self {
        Self {
            timer: Mutex::new(RefCell::new(None)),
            notifier: Mutex::new(Cell::new(None)),
        }
    }

    /// Startet `timer` mit `period_us` und verbindet ihn mit `handler`
    fn start(
        &self,
        timer: impl Timer + 'static,
        period_us: u64,
        handler: InterruptHandler,
        notifier: TimerNotifier<'static>,
    ) -> Result<(), Error> {
        let mut timer = PeriodicTimer::new(timer);
        timer.set_interrupt_handler(handler);

        // Start und Übergabe in einer Critical Section: die ISR findet
        // den Timer immer vor und kann den Interrupt quittieren
        critical_section::with(|cs| {
            self.notifier.borrow(cs).set(Some(notifier));
            timer.listen();
            timer.start(Duration::from_micros(period_us))?;
            self.timer.borrow_ref_mut(cs).replace(timer);
            Ok(())
        })
    }

    /// ISR-Rumpf: Interrupt quittieren, Worker wecken
    fn on_interrupt(&self) {
        let notifier = critical_section::with(|cs| {
            if let Some(timer) = self.timer.borrow_ref_mut(cs).as_mut() {
                timer.clear_interrupt();
            }
            self.notifier.borrow(cs).get()
        });

        if let Some(notifier) = notifier {
            notifier.notify_all();
        }
    }
}

static TIMER_A: TimerSlot = TimerSlot::new();
static TIMER_B: TimerSlot = TimerSlot::new();

#[handler]
fn timer_a_isr() {
    TIMER_A.on_interrupt();
}

#[handler]
fn timer_b_isr() {
    TIMER_B.on_interrupt();
}

/// Startet Timer A: alle `period_us` werden die Ziele von `notifier` geweckt
pub fn start_timer_a(
    timer: impl Timer + 'static,
    period_us: u64,
    notifier: TimerNotifier<'static>,
) -> Result<(), Error> {
    TIMER_A.start(timer, period_us, timer_a_isr, notifier)
}

/// Startet Timer B, siehe [`start_timer_a`]
pub fn start_timer_b(
    timer: impl Timer + 'static,
    period_us: u64,
    notifier: TimerNotifier<'static>,
) -> Result<(), Error> {
    TIMER_B.start(timer, period_us, timer_b_isr, notifier)
}
