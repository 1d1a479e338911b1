// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die LED (einfache LED oder WS2812-Datenleitung)
/// Muss zum Peripheral in main.rs passen (peripherals.GPIO8)
pub const LED_GPIO_PIN: u8 = 8;

/// Anzahl der LEDs im Strip (mindestens eine LED auf dem Board)
pub const LED_COUNT: usize = 1;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// SPI Taktfrequenz in kHz für den SPI-Strip
/// 3.2 MHz → 4 SPI-Bits pro WS2812-Bit = 1.25 µs pro Bit
pub const SPI_FREQUENCY_KHZ: u32 = 3200;

/// Null-Bytes nach den Pixeldaten (Reset-Pause > 50 µs bei 3.2 MHz)
pub const SPI_RESET_BYTES: usize = 24;

/// Blink-Periode in Millisekunden
/// Wird von der interaktiven Konsole nicht genutzt
pub const BLINK_PERIOD_MS: u64 = 1000;

// ============================================================================
// Konsole Konfiguration
// ============================================================================

/// UART0 Baudrate (8N1, keine Flusskontrolle)
pub const UART_BAUDRATE: u32 = 115_200;

/// Prompt vor jeder Eingabezeile
pub const CONSOLE_PROMPT: &str = "cmd> ";

/// Maximale Anzahl Einträge in der Eingabe-History (nur RAM)
pub const HISTORY_MAX_LEN: usize = 50;
