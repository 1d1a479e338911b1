//! LED Backends
//!
//! Die beiden Varianten hinter `LedBackend`. Welche davon im Binary landet,
//! entscheidet das Firmware-Crate per Cargo-Feature.

use embedded_hal::digital::{OutputPin, PinState};
use rgb::RGB8;

use crate::traits::{LedBackend, LedError, PixelStrip};

/// Farbe für "an" auf dem Strip (niedrige Helligkeit, weiß)
pub const STRIP_ON_COLOR: RGB8 = RGB8 {
    r: 16,
    g: 16,
    b: 16,
};

/// Der einzige genutzte Pixel
pub const STRIP_PIXEL_INDEX: usize = 0;

// ============================================================================
// GPIO Backend
// ============================================================================

/// Einfache LED an einem Push/Pull-Ausgang
///
/// Der Pin muss bereits als Ausgang konfiguriert sein (bei esp-hal erledigt
/// das `Output::new`).
pub struct GpioLed<P> {
    pin: P,
}

impl<P: OutputPin> GpioLed<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }
}

impl<P: OutputPin> LedBackend for GpioLed<P> {
    const NAME: &'static str = "GPIO";

    fn configure(&mut self) -> Result<(), LedError> {
        self.pin.set_low().map_err(|_| LedError::InitFailed)
    }

    fn set_state(&mut self, on: bool) {
        if self.pin.set_state(PinState::from(on)).is_err() {
            #[cfg(feature = "defmt")]
            defmt::error!("Failed to set LED pin level");
        }
    }
}

// ============================================================================
// Strip Backend
// ============================================================================

/// Adressierbarer LED-Strip, von dem nur Pixel 0 genutzt wird
pub struct StripLed<S> {
    strip: S,
}

impl<S: PixelStrip> StripLed<S> {
    pub fn new(strip: S) -> Self {
        Self { strip }
    }

    pub fn strip(&self) -> &S {
        &self.strip
    }
}

impl<S: PixelStrip> LedBackend for StripLed<S> {
    const NAME: &'static str = "addressable LED strip";

    fn configure(&mut self) -> Result<(), LedError> {
        if self.strip.is_empty() {
            return Err(LedError::InitFailed);
        }
        // Alle Pixel aus, damit der Startzustand physisch "aus" ist
        self.strip.clear().map_err(|_| LedError::InitFailed)
    }

    fn set_state(&mut self, on: bool) {
        if on {
            let result = self
                .strip
                .set_pixel(STRIP_PIXEL_INDEX, STRIP_ON_COLOR)
                .and_then(|()| self.strip.refresh());
            if result.is_err() {
                #[cfg(feature = "defmt")]
                defmt::error!("Failed to write to LED strip");
            }
        }
        // "Aus" schreibt absichtlich nichts auf den Strip: das Verhalten der
        // bestehenden Geräte bleibt erhalten, der Pixel leuchtet weiter.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    struct CountingPin {
        high: bool,
        writes: usize,
    }

    impl ErrorType for CountingPin {
        type Error = Infallible;
    }

    impl OutputPin for CountingPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_gpio_configure_drives_low() {
        let mut led = GpioLed::new(CountingPin {
            high: true,
            writes: 0,
        });
        led.configure().unwrap();
        assert!(!led.pin().high);
    }

    #[test]
    fn test_gpio_set_state_follows_bool() {
        let mut led = GpioLed::new(CountingPin {
            high: false,
            writes: 0,
        });
        led.set_state(true);
        assert!(led.pin().high);
        led.set_state(false);
        assert!(!led.pin().high);
        assert_eq!(led.pin().writes, 2);
    }
}
