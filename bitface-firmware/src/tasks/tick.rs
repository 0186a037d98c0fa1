//! Tick task
//!
//! One signal per second, driving the face redraw and VCOM upkeep.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u32 = 1000;

/// Signal to notify the face task of a tick, carrying a sequence number
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, u32> = Signal::new();

/// Tick task - sends one numbered tick per second
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));
    let mut seq: u32 = 0;

    loop {
        ticker.next().await;
        seq = seq.wrapping_add(1);
        TICK_SIGNAL.signal(seq);
    }
}
