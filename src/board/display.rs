//! ST7735S colour LCD wrapper.

use display_interface_spi::SPIInterface;
use embassy_nrf::gpio::Output;
use embassy_nrf::peripherals::SPI3;
use embassy_nrf::spim::{Frequency, Spim};
use embassy_time::Delay;
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use mipidsi::models::ST7735s;
use mipidsi::options::ColorOrder;
use mipidsi::Builder;
use present_demo::config::{LCD_SPI_MHZ, SCREEN_HEIGHT, SCREEN_WIDTH};
use present_demo::ui::canvas::GraphicsCanvas;
use present_demo::Error;

/// Type alias for the concrete display driver.
pub type Lcd = mipidsi::Display<
    SPIInterface<ExclusiveDevice<Spim<'static, SPI3>, Output<'static>, NoDelay>, Output<'static>>,
    ST7735s,
    Output<'static>,
>;

/// Closest SPIM clock not above `mhz`.
fn spi_frequency(mhz: u32) -> Frequency {
    match mhz {
        0..=1 => Frequency::M1,
        2..=3 => Frequency::M2,
        4..=7 => Frequency::M4,
        8..=15 => Frequency::M8,
        16..=31 => Frequency::M16,
        _ => Frequency::M32,
    }
}

/// SPIM clock configured in `config`.
pub fn configured_frequency() -> Frequency {
    spi_frequency(LCD_SPI_MHZ)
}

/// Reset and initialise the LCD, returning it as a scene canvas.
///
/// The screen content is undefined afterwards; the first scene dispatch
/// clears it.
pub fn init(
    spi: Spim<'static, SPI3>,
    cs: Output<'static>,
    dc: Output<'static>,
    rst: Output<'static>,
) -> Result<GraphicsCanvas<Lcd>, Error> {
    let device = ExclusiveDevice::new_no_delay(spi, cs).map_err(|_| Error::DisplayInit)?;
    let interface = SPIInterface::new(device, dc);
    let lcd = Builder::new(ST7735s, interface)
        .reset_pin(rst)
        .display_size(u16::from(SCREEN_WIDTH), u16::from(SCREEN_HEIGHT))
        .color_order(ColorOrder::Bgr)
        .init(&mut Delay)
        .map_err(|_| Error::DisplayInit)?;
    Ok(GraphicsCanvas::new(lcd))
}
