//! A Bit Different - binary watch face firmware
//!
//! RP2040 firmware that renders the time as a binary-coded-decimal grid
//! of circles on a 144x168 Sharp memory LCD, with the month, date and a
//! Shire-style description of the hour above the grid.
//!
//! Time comes from a DS3231 RTC on I2C1; the panel hangs off SPI0. A
//! 1 Hz tick task drives the face task that does all the drawing.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_rp::spi::{self, Spi};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use bitface_drivers::{Ds3231, Ls013b7dh05};

use crate::config::FaceConfig;
use crate::tasks::face::face_task;
use crate::tasks::tick::tick_task;

mod config;
mod tasks;

/// Embedded configuration (compiled into the firmware)
/// Edit watch.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../watch.toml");

/// SPI clock for the panel; the LS013B7DH05 tops out at 2 MHz
const PANEL_SPI_HZ: u32 = 2_000_000;

bind_interrupts!(struct Irqs {
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
});

// Config must live forever for the face task to borrow it
static CONFIG: StaticCell<FaceConfig> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("bitface firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = match FaceConfig::parse(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            warn!("watch.toml rejected ({}), using defaults", e);
            FaceConfig::default()
        }
    };
    info!("Config: {}", config);
    let config = CONFIG.init(config);

    // DS3231 RTC on I2C1: SCL=GP15, SDA=GP14
    let i2c = I2c::new_async(p.I2C1, p.PIN_15, p.PIN_14, Irqs, i2c::Config::default());
    let rtc = Ds3231::new(i2c);

    // Panel on SPI0: SCK=GP18, MOSI=GP19, CS=GP17 (active high, idle low)
    let mut spi_config = spi::Config::default();
    spi_config.frequency = PANEL_SPI_HZ;
    let spi = Spi::new_txonly(p.SPI0, p.PIN_18, p.PIN_19, p.DMA_CH0, spi_config);
    let cs = Output::new(p.PIN_17, Level::Low);
    let mut panel = Ls013b7dh05::new(spi, cs, Delay);

    // Start from a known-blank panel; the first frame repaints it anyway
    if panel.clear().await.is_err() {
        warn!("panel clear failed");
    }

    unwrap!(spawner.spawn(tick_task()));
    unwrap!(spawner.spawn(face_task(rtc, panel, config)));

    info!("face running");
}
