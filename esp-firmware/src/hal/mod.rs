// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul verbindet die ESP32-C6 Peripherie mit den Traits aus esp-core.
// Welche Strip-Implementierung gebaut wird, entscheidet das Cargo-Feature.

#[cfg(feature = "led-strip")]
pub mod led_strip;

#[cfg(feature = "strip-rmt")]
pub use led_strip::RmtPixelStrip;
#[cfg(feature = "strip-spi")]
pub use led_strip::{SpiPixelStrip, new_strip_spi};
