// PixelStrip Implementierungen für WS2812/Neopixel
//
// Beide Transporte puffern die Pixel im RAM und übertragen erst bei refresh().

use esp_core::{LedError, PixelStrip};
use rgb::RGB8;

use crate::config::LED_COUNT;

// ============================================================================
// RMT Transport (Feature "strip-rmt")
// ============================================================================

#[cfg(feature = "strip-rmt")]
mod rmt_impl {
    use super::*;
    use esp_hal::Blocking;
    use esp_hal::rmt::{PulseCode, Rmt};
    use esp_hal::time::Rate;
    use esp_hal_smartled::SmartLedsAdapter;
    use smart_leds_trait::SmartLedsWrite;

    /// Buffer-Größe: 3 Farben * 8 Bits pro LED + 1 Reset
    const RMT_BUFFER_SIZE: usize = LED_COUNT * 24 + 1;

    /// WS2812 Strip über das RMT Peripheral
    ///
    /// Hinweis: Der RMT-Buffer wird vom Aufrufer gehalten und nur geliehen,
    /// damit er die Lebensdauer des Strips überdauert.
    pub struct RmtPixelStrip<'a> {
        adapter: SmartLedsAdapter<'a, RMT_BUFFER_SIZE>,
        pixels: [RGB8; LED_COUNT],
    }

    impl<'a> RmtPixelStrip<'a> {
        /// Erstellt einen neuen RmtPixelStrip
        ///
        /// # Parameter
        /// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
        /// - `rmt_peripheral`: RMT Peripheral
        /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
        /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer! Macro)
        pub fn new(
            gpio8: esp_hal::peripherals::GPIO8<'a>,
            rmt_peripheral: esp_hal::peripherals::RMT<'a>,
            rmt_clock_mhz: u32,
            buffer: &'a mut [PulseCode; RMT_BUFFER_SIZE],
        ) -> Result<Self, LedError> {
            let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
                .map_err(|_| LedError::InitFailed)?;

            let adapter = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

            Ok(Self {
                adapter,
                pixels: [RGB8::default(); LED_COUNT],
            })
        }
    }

    impl PixelStrip for RmtPixelStrip<'_> {
        fn len(&self) -> usize {
            self.pixels.len()
        }

        fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), LedError> {
            let pixel = self.pixels.get_mut(index).ok_or(LedError::InvalidIndex)?;
            *pixel = color;
            Ok(())
        }

        fn refresh(&mut self) -> Result<(), LedError> {
            self.adapter
                .write(self.pixels.iter().copied())
                .map_err(|_| LedError::WriteFailed)
        }

        fn clear(&mut self) -> Result<(), LedError> {
            self.pixels = [RGB8::default(); LED_COUNT];
            self.refresh()
        }
    }
}

#[cfg(feature = "strip-rmt")]
pub use rmt_impl::RmtPixelStrip;

// ============================================================================
// SPI Transport (Feature "strip-spi")
// ============================================================================

#[cfg(feature = "strip-spi")]
mod spi_impl {
    use super::*;
    use embedded_hal::spi::SpiBus;
    use esp_core::{SPI_BYTES_PER_PIXEL, encode_ws2812_spi};
    use esp_hal::Blocking;
    use esp_hal::spi::Mode;
    use esp_hal::spi::master::{Config, Spi};
    use esp_hal::time::Rate;

    use crate::config::{SPI_FREQUENCY_KHZ, SPI_RESET_BYTES};

    /// Ein kompletter Frame: alle Pixel + Reset-Pause
    const SPI_FRAME_SIZE: usize = LED_COUNT * SPI_BYTES_PER_PIXEL + SPI_RESET_BYTES;

    /// Initialisiert SPI2 mit MOSI auf GPIO8 für WS2812-Daten
    pub fn new_strip_spi<'a>(
        spi2: esp_hal::peripherals::SPI2<'a>,
        gpio8: esp_hal::peripherals::GPIO8<'a>,
    ) -> Result<Spi<'a, Blocking>, LedError> {
        let config = Config::default()
            .with_frequency(Rate::from_khz(SPI_FREQUENCY_KHZ))
            .with_mode(Mode::_0);

        let spi = Spi::new(spi2, config).map_err(|_| LedError::InitFailed)?;
        Ok(spi.with_mosi(gpio8))
    }

    /// WS2812 Strip über einen SPI-Bus (nur MOSI wird genutzt)
    pub struct SpiPixelStrip<B> {
        bus: B,
        pixels: [RGB8; LED_COUNT],
    }

    impl<B: SpiBus> SpiPixelStrip<B> {
        pub fn new(bus: B) -> Self {
            Self {
                bus,
                pixels: [RGB8::default(); LED_COUNT],
            }
        }
    }

    impl<B: SpiBus> PixelStrip for SpiPixelStrip<B> {
        fn len(&self) -> usize {
            self.pixels.len()
        }

        fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), LedError> {
            let pixel = self.pixels.get_mut(index).ok_or(LedError::InvalidIndex)?;
            *pixel = color;
            Ok(())
        }

        fn refresh(&mut self) -> Result<(), LedError> {
            // Reset-Bytes am Ende bleiben 0 (Leitung low)
            let mut frame = [0u8; SPI_FRAME_SIZE];
            for (chunk, pixel) in frame
                .chunks_exact_mut(SPI_BYTES_PER_PIXEL)
                .zip(self.pixels.iter())
            {
                chunk.copy_from_slice(&encode_ws2812_spi(*pixel));
            }

            self.bus
                .write(&frame)
                .and_then(|()| self.bus.flush())
                .map_err(|_| LedError::WriteFailed)
        }

        fn clear(&mut self) -> Result<(), LedError> {
            self.pixels = [RGB8::default(); LED_COUNT];
            self.refresh()
        }
    }
}

#[cfg(feature = "strip-spi")]
pub use spi_impl::{SpiPixelStrip, new_strip_spi};
