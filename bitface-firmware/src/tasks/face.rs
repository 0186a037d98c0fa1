//! Face task
//!
//! Owns the RTC, the panel and the frame buffer. Paints once at boot,
//! then once per tick: read the clock, rebuild the model, redraw, and
//! push whichever lines changed. The memory LCD keeps its pixels, so a
//! failed RTC read simply leaves the previous face showing.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C1, SPI0};
use embassy_rp::spi::{self, Spi};
use embassy_time::Delay;

use bitface_core::{FaceModel, TimeError, TimeSource, WallClock};
use bitface_drivers::{Ds3231, Ls013b7dh05};
use bitface_render::{render_face, Frame};

use crate::config::FaceConfig;
use crate::tasks::tick::TICK_SIGNAL;

pub type Rtc = Ds3231<I2c<'static, I2C1, i2c::Async>>;
pub type Panel = Ls013b7dh05<Spi<'static, SPI0, spi::Async>, Output<'static>, Delay>;

/// Face task - redraws the watch face on every tick
#[embassy_executor::task]
pub async fn face_task(mut rtc: Rtc, mut panel: Panel, config: &'static FaceConfig) {
    info!("Face task started");

    let mut frame = Frame::new();

    // Paint immediately; the first tick is a whole second away
    redraw(&mut rtc, &mut panel, &mut frame, config).await;

    loop {
        let tick = TICK_SIGNAL.wait().await;

        if config.vcom_every_ticks != 0 && tick % config.vcom_every_ticks == 0 {
            panel.toggle_vcom();
        }

        redraw(&mut rtc, &mut panel, &mut frame, config).await;
    }
}

async fn redraw(rtc: &mut Rtc, panel: &mut Panel, frame: &mut Frame, config: &FaceConfig) {
    let clock = match rtc.now().await {
        Ok(clock) => clock,
        Err(TimeError::Unset) => {
            warn!("RTC lost power; showing power-on time until the clock is set");
            WallClock::POWER_ON
        }
        Err(e) => {
            warn!("RTC read failed: {}", e);
            return;
        }
    };

    let model = match FaceModel::build(&clock, config.hour_style, config.hobbit_text) {
        Ok(model) => model,
        Err(e) => {
            warn!("clock reading not renderable: {}", e);
            return;
        }
    };

    render_face(frame, &model);

    // An unchanged frame still owes the panel its VCOM upkeep
    let result = if frame.has_dirty_lines() {
        panel.write_lines(frame.dirty_lines()).await
    } else {
        panel.maintain_vcom().await
    };

    match result {
        Ok(()) => frame.mark_clean(),
        Err(e) => warn!("panel write failed: {}", e),
    }
}
