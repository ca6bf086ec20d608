// Tick signaling between the timer ISR and the main loop
//
// The ISR sets an atomic flag and advances the uptime counter; the
// main loop consumes the flag via try_wake(). Critical section guards
// riscv32imc (no atomic RMW). Uptime is in milliseconds and wraps at
// u32::MAX; compare timestamps only through elapsed_ms().

use core::sync::atomic::{AtomicBool, Ordering};

/// Period of the hardware tick interrupt.
pub const TICK_MS: u32 = 10;

static WAKE_TIMER: AtomicBool = AtomicBool::new(false);

// cs: riscv32imc has no atomic add
static UPTIME_MS: critical_section::Mutex<core::cell::Cell<u32>> =
    critical_section::Mutex::new(core::cell::Cell::new(0));

#[inline]
pub fn signal_timer() {
    WAKE_TIMER.store(true, Ordering::Release);
    critical_section::with(|cs| {
        let ms = UPTIME_MS.borrow(cs);
        ms.set(ms.get().wrapping_add(TICK_MS));
    });
}

pub fn uptime_ms() -> u32 {
    critical_section::with(|cs| UPTIME_MS.borrow(cs).get())
}

pub fn uptime_secs() -> u32 {
    uptime_ms() / 1000
}

/// Milliseconds from `since` to `now`, correct across counter wraparound.
#[inline]
pub const fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}

/// Consume the pending tick, if any.
pub fn try_wake() -> bool {
    critical_section::with(|_| {
        let timer = WAKE_TIMER.load(Ordering::Relaxed);
        if timer {
            WAKE_TIMER.store(false, Ordering::Relaxed);
        }
        timer
    })
}

#[inline]
pub fn wait_for_interrupt() {
    #[cfg(target_arch = "riscv32")]
    unsafe {
        core::arch::asm!("wfi", options(nomem, nostack));
    }

    #[cfg(not(target_arch = "riscv32"))]
    core::hint::spin_loop();
}
