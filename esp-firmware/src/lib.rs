// Library-Root: Hardware-Anbindung und Build-Zeit-Auswahl des LED-Backends
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;

// Re-exports von esp-core
pub use esp_core::{Console, GpioLed, LedController, LineEditor, StripLed};

// ============================================================================
// Build-Zeit-Auswahl des LED-Backends
// ============================================================================
//
// Genau ein Backend pro Build: `led-gpio` oder `led-strip`.
// Für den Strip zusätzlich genau ein Transport: `strip-rmt` oder `strip-spi`.

#[cfg(all(feature = "led-gpio", feature = "led-strip"))]
compile_error!("Features `led-gpio` und `led-strip` schließen sich aus");

#[cfg(not(any(feature = "led-gpio", feature = "led-strip")))]
compile_error!("Kein LED-Backend gewählt: aktiviere `led-gpio` oder `led-strip`");

#[cfg(all(feature = "strip-rmt", feature = "strip-spi"))]
compile_error!("Features `strip-rmt` und `strip-spi` schließen sich aus");

#[cfg(all(
    feature = "led-strip",
    not(any(feature = "strip-rmt", feature = "strip-spi"))
))]
compile_error!("unsupported LED strip backend: aktiviere `strip-rmt` oder `strip-spi`");

// ============================================================================
// Type-Aliase
// ============================================================================
//
// Statt:  StripLed<RmtPixelStrip<'d>>
// Nutze:  SelectedLed<'d>

/// LED-Backend dieses Builds (GPIO-Ausgang)
#[cfg(feature = "led-gpio")]
pub type SelectedLed<'d> = GpioLed<esp_hal::gpio::Output<'d>>;

/// LED-Backend dieses Builds (WS2812 über RMT)
#[cfg(all(feature = "led-strip", feature = "strip-rmt"))]
pub type SelectedLed<'d> = StripLed<hal::RmtPixelStrip<'d>>;

/// LED-Backend dieses Builds (WS2812 über SPI2)
#[cfg(all(feature = "led-strip", feature = "strip-spi"))]
pub type SelectedLed<'d> =
    StripLed<hal::SpiPixelStrip<esp_hal::spi::master::Spi<'d, esp_hal::Blocking>>>;

/// Zeilen-Editor über UART0 mit History
pub type UartLineEditor<'d> =
    LineEditor<esp_hal::uart::Uart<'d, esp_hal::Blocking>, { config::HISTORY_MAX_LEN }>;

