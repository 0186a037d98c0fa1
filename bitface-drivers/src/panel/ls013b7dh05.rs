//! LS013B7DH05 memory-in-pixel LCD
//!
//! 144x168 monochrome Sharp panel, written line-at-a-time over SPI.
//! The panel latches bits LSB-first while the SPI bus shifts MSB-first,
//! so command bytes and line addresses go out bit-reversed; pixel data
//! is already packed leftmost-pixel-in-the-MSB by the frame buffer, which
//! is exactly the order the panel wants.
//!
//! Chip select is active HIGH and is driven manually (an `SpiDevice`
//! would drive it low), with the short setup/hold delays the datasheet
//! asks for.
//!
//! The panel retains its pixels without refresh, but the VCOM polarity
//! must alternate at around 1 Hz to avoid DC bias damage. Every command
//! carries the current polarity; `toggle_vcom` flips it and
//! `maintain_vcom` sends a polarity-only command for ticks where no
//! lines changed.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::spi::SpiBus;

use bitface_core::layout::{FACE_HEIGHT, LINE_BYTES};

/// Write-line mode bit (first bit on the wire)
const CMD_WRITE: u8 = 0x80;

/// VCOM polarity bit (second bit on the wire)
const CMD_VCOM: u8 = 0x40;

/// All-clear mode bit (third bit on the wire)
const CMD_CLEAR: u8 = 0x20;

/// Chip-select setup time before the first clock, in microseconds
const CS_SETUP_US: u32 = 3;

/// Chip-select hold time after the last clock, in microseconds
const CS_HOLD_US: u32 = 1;

/// Panel driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError<E> {
    /// SPI transfer failed
    Spi(E),
    /// Chip-select pin refused to switch
    ChipSelect,
    /// Line row outside the panel
    InvalidLine,
}

/// LS013B7DH05 driver
pub struct Ls013b7dh05<SPI, CS, D> {
    spi: SPI,
    cs: CS,
    delay: D,
    vcom: bool,
}

impl<SPI, CS, D> Ls013b7dh05<SPI, CS, D>
where
    SPI: SpiBus,
    CS: OutputPin,
    D: DelayNs,
{
    /// Create a new driver; the panel needs no init sequence
    pub fn new(spi: SPI, cs: CS, delay: D) -> Self {
        Self {
            spi,
            cs,
            delay,
            vcom: false,
        }
    }

    /// Blank the whole panel with the all-clear command
    pub async fn clear(&mut self) -> Result<(), PanelError<SPI::Error>> {
        let cmd = [CMD_CLEAR | self.vcom_bit(), 0x00];
        self.select().await?;
        let res = self.spi.write(&cmd).await.map_err(PanelError::Spi);
        self.deselect(res).await
    }

    /// Send a batch of packed lines
    ///
    /// `lines` yields `(row, bytes)` with row 0 the top of the panel.
    /// An empty batch sends nothing at all; callers wanting VCOM upkeep
    /// without data use `maintain_vcom`.
    pub async fn write_lines<'a, I>(&mut self, lines: I) -> Result<(), PanelError<SPI::Error>>
    where
        I: IntoIterator<Item = (u8, &'a [u8; LINE_BYTES])>,
    {
        let mut lines = lines.into_iter().peekable();
        if lines.peek().is_none() {
            return Ok(());
        }

        self.select().await?;
        let res = self.write_lines_inner(lines).await;
        self.deselect(res).await
    }

    async fn write_lines_inner<'a, I>(&mut self, lines: I) -> Result<(), PanelError<SPI::Error>>
    where
        I: Iterator<Item = (u8, &'a [u8; LINE_BYTES])>,
    {
        let cmd = [CMD_WRITE | self.vcom_bit()];
        self.spi.write(&cmd).await.map_err(PanelError::Spi)?;

        for (row, bytes) in lines {
            if row as u32 >= FACE_HEIGHT {
                return Err(PanelError::InvalidLine);
            }
            // Line addresses are 1-based and latched LSB-first
            self.spi
                .write(&[line_address(row)])
                .await
                .map_err(PanelError::Spi)?;
            self.spi.write(bytes).await.map_err(PanelError::Spi)?;
            self.spi.write(&[0x00]).await.map_err(PanelError::Spi)?;
        }

        // Transfer trailer
        self.spi.write(&[0x00]).await.map_err(PanelError::Spi)
    }

    /// Send a polarity-only command; call when a tick changed no lines
    pub async fn maintain_vcom(&mut self) -> Result<(), PanelError<SPI::Error>> {
        let cmd = [self.vcom_bit(), 0x00];
        self.select().await?;
        let res = self.spi.write(&cmd).await.map_err(PanelError::Spi);
        self.deselect(res).await
    }

    /// Flip the VCOM polarity carried by subsequent commands
    pub fn toggle_vcom(&mut self) {
        self.vcom = !self.vcom;
    }

    fn vcom_bit(&self) -> u8 {
        if self.vcom {
            CMD_VCOM
        } else {
            0
        }
    }

    async fn select(&mut self) -> Result<(), PanelError<SPI::Error>> {
        self.cs.set_high().map_err(|_| PanelError::ChipSelect)?;
        self.delay.delay_us(CS_SETUP_US).await;
        Ok(())
    }

    /// Finish the transaction and drop chip select, preserving the first
    /// error encountered
    async fn deselect(
        &mut self,
        res: Result<(), PanelError<SPI::Error>>,
    ) -> Result<(), PanelError<SPI::Error>> {
        let flushed = self.spi.flush().await.map_err(PanelError::Spi);
        self.delay.delay_us(CS_HOLD_US).await;
        let lowered = self.cs.set_low().map_err(|_| PanelError::ChipSelect);
        res.and(flushed).and(lowered)
    }
}

/// Wire form of a line address: 1-based, bit-reversed for LSB-first latch
const fn line_address(row: u8) -> u8 {
    (row + 1).reverse_bits()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_address_is_bit_reversed() {
        // Row 0 is line 1, which latches as MSB on an MSB-first bus
        assert_eq!(line_address(0), 0x80);
        // Line 2
        assert_eq!(line_address(1), 0x40);
        // Line 168 = 0b10101000 reversed
        assert_eq!(line_address(167), 0b0001_0101);
    }

    #[test]
    fn test_mode_bits_do_not_overlap() {
        assert_eq!(CMD_WRITE & CMD_VCOM, 0);
        assert_eq!(CMD_WRITE & CMD_CLEAR, 0);
        assert_eq!(CMD_VCOM & CMD_CLEAR, 0);
    }
}
