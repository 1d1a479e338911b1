//! ESP Core - Platform-agnostic LED- und Konsolen-Logik
//!
//! Diese Crate enthält KEINE ESP-spezifischen Dependencies.
//! Hardware wird nur über Traits (`embedded-hal`, `embedded-io`, eigene Traits)
//! angesprochen, deshalb läuft alles hier auch auf dem Host (Tests!).

#![no_std]

pub mod backend;
pub mod console;
pub mod controller;
pub mod history;
pub mod line_editor;
pub mod logic;
pub mod repl;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use backend::{GpioLed, STRIP_ON_COLOR, STRIP_PIXEL_INDEX, StripLed};
pub use console::{
    Command, CommandFn, CommandRegistry, ConsoleError, MAX_CMDLINE_ARGS, MAX_CMDLINE_LENGTH,
    RegisterError,
};
pub use controller::{LED_COMMAND_COUNT, LedController};
pub use history::History;
pub use line_editor::LineEditor;
pub use logic::{SPI_BYTES_PER_PIXEL, encode_ws2812_spi};
pub use repl::{Console, StepOutcome};
pub use traits::{LedBackend, LedError, Line, LineSource, PixelStrip};
pub use types::{LedCommand, LedState};
