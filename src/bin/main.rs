// glyph-life entry point and main loop
//
// Boot sequence: timer -> hardware -> controller -> first frame
// Main loop: drain scheduler -> WFI -> translate tick into jobs -> repeat
//
// Every 10ms timer tick queues PollInput. PollInput feeds the decoded
// key and the uptime to the controller, which may queue Step; Render
// always follows. Priorities keep the order input -> step -> render.

#![no_std]
#![no_main]

use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal::time::Duration;
use esp_hal::timer::PeriodicTimer;
use esp_hal::timer::timg::TimerGroup;
use log::{info, warn};

use core::cell::RefCell;
use critical_section::Mutex;

use glyph_life::board::{Board, Oled, pins};
use glyph_life::config::{StepPolicy, Timing};
use glyph_life::drivers::input::InputDriver;
use glyph_life::kernel::wake::{self, TICK_MS, signal_timer, try_wake};
use glyph_life::kernel::{Job, Scheduler};
use glyph_life::life::{Controller, GRID_HEIGHT, GRID_WIDTH};
use glyph_life::ui::{GlyphCanvas, draw_frame};

esp_bootloader_esp_idf::esp_app_desc!();

static TIMER0: Mutex<RefCell<Option<PeriodicTimer<'static, esp_hal::Blocking>>>> =
    Mutex::new(RefCell::new(None));

#[esp_hal::handler(priority = esp_hal::interrupt::Priority::Priority1)]
fn timer0_handler() {
    critical_section::with(|cs| {
        if let Some(timer) = TIMER0.borrow_ref_mut(cs).as_mut() {
            timer.clear_interrupt();
        }
    });
    signal_timer();
}

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    info!("booting...");

    let timg0 = TimerGroup::new(unsafe { peripherals.TIMG0.clone_unchecked() });
    let mut timer0 = PeriodicTimer::new(timg0.timer0);
    critical_section::with(|cs| {
        timer0.set_interrupt_handler(timer0_handler);
        timer0.start(Duration::from_millis(TICK_MS as u64)).unwrap();
        timer0.listen();
        TIMER0.borrow_ref_mut(cs).replace(timer0);
    });
    info!("timer initialized.");

    let mut board = Board::init(peripherals);
    if let Err(e) = board.display.oled.init() {
        warn!("oled: init failed: {:?}", e);
    }
    info!(
        "hardware initialized. keypad adc gpio{}, oled sda gpio{} scl gpio{}",
        pins::KEYPAD_ADC,
        pins::OLED_SDA,
        pins::OLED_SCL
    );

    let timing = Timing::DEFAULT;
    let mut delay = Delay::new();
    let mut input = InputDriver::new(board.input);
    let mut oled = board.display.oled;
    let mut ctl = Controller::new(timing, wake::uptime_ms());
    let mut sched = Scheduler::new();

    render(&mut oled, &mut ctl);
    info!(
        "life ready: {}x{} grid, {:?} stepping every {}ms",
        GRID_WIDTH, GRID_HEIGHT, timing.step_policy, timing.step_ms
    );

    loop {
        // drain all pending jobs by priority (high first, FIFO within tier)
        while let Some(job) = sched.pop() {
            match job {
                Job::PollInput => {
                    let button = input.poll();
                    let tick = ctl.tick(wake::uptime_ms(), button);
                    if let Some((_, to)) = tick.transition {
                        info!("{} at {}s", to.name(), wake::uptime_secs());
                    }
                    if tick.step_due {
                        let _ = sched.push_unique(Job::Step);
                    }
                    let _ = sched.push_unique(Job::Render);
                }

                Job::Step => {
                    // Blocking reproduces the fixed delay before each
                    // generation; no input is sampled meanwhile.
                    if ctl.timing().step_policy == StepPolicy::Blocking {
                        delay.delay_millis(ctl.timing().step_ms);
                    }
                    ctl.advance(wake::uptime_ms());
                }

                Job::Render => render(&mut oled, &mut ctl),
            }
        }

        // wait for the next tick then translate it into jobs
        if try_wake() {
            let _ = sched.push_unique(Job::PollInput);
        } else {
            wake::wait_for_interrupt();
        }
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn render(oled: &mut Oled, ctl: &mut Controller) {
    let visible = ctl.update_blink(wake::uptime_ms());
    let _ = draw_frame(&mut GlyphCanvas::new(oled), ctl.grid(), ctl.cursor(), visible);
    if let Err(e) = oled.flush() {
        warn!("oled: flush failed: {:?}", e);
    }
}
