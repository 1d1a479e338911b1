// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_hal bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]

use defmt::info;
use static_cell::StaticCell;

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::uart::{Config as UartConfig, Uart};

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_led_konsole::config::{CONSOLE_PROMPT, HISTORY_MAX_LEN, LED_GPIO_PIN, UART_BAUDRATE};
use esp_led_konsole::{Console, LedController, LineEditor, SelectedLed, UartLineEditor};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Konfiguriert die LED, startet die UART-Konsole und bleibt danach
/// für immer in der blockierenden Lese-Schleife.
#[esp_hal::main]
fn main() -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // ------------------------------------------------------------------------
    // LED-Backend (per Cargo-Feature gewählt)
    // ------------------------------------------------------------------------

    // Output::new setzt den Pin zurück und schaltet ihn als Push/Pull-Ausgang
    #[cfg(feature = "led-gpio")]
    let led: SelectedLed<'_> = {
        use esp_hal::gpio::{Level, Output, OutputConfig};

        let pin = Output::new(peripherals.GPIO8, Level::Low, OutputConfig::default());
        esp_led_konsole::GpioLed::new(pin)
    };

    // Buffer für SmartLED Daten (1 LED), muss länger leben als der Strip
    #[cfg(feature = "strip-rmt")]
    let mut rmt_buffer = esp_hal_smartled::smart_led_buffer!(1);

    #[cfg(feature = "strip-rmt")]
    let led: SelectedLed<'_> = {
        use esp_led_konsole::config::RMT_CLOCK_MHZ;
        use esp_led_konsole::hal::RmtPixelStrip;

        let strip = RmtPixelStrip::new(
            peripherals.GPIO8,
            peripherals.RMT,
            RMT_CLOCK_MHZ,
            &mut rmt_buffer,
        )
        .expect("Failed to initialize RMT for LED strip");
        esp_led_konsole::StripLed::new(strip)
    };

    #[cfg(feature = "strip-spi")]
    let led: SelectedLed<'_> = {
        use esp_led_konsole::hal::{SpiPixelStrip, new_strip_spi};

        let bus = new_strip_spi(peripherals.SPI2, peripherals.GPIO8)
            .expect("Failed to initialize SPI for LED strip");
        esp_led_konsole::StripLed::new(SpiPixelStrip::new(bus))
    };

    // Fehler hier ist fatal: Panic-Handler hält das Gerät an
    let controller = LedController::configure(led).expect("Failed to configure LED");
    info!(
        "LED on GPIO{} configured. Console-based control starting...",
        LED_GPIO_PIN
    );

    // ------------------------------------------------------------------------
    // UART0 Konsole (115200 8N1, TX = GPIO16, RX = GPIO17)
    // ------------------------------------------------------------------------

    let uart = Uart::new(
        peripherals.UART0,
        UartConfig::default().with_baudrate(UART_BAUDRATE),
    )
    .expect("Failed to configure UART0")
    .with_rx(peripherals.GPIO17)
    .with_tx(peripherals.GPIO16);

    // Editor inkl. History (50 * 256 Bytes) liegt statisch, nicht auf dem Stack
    static EDITOR: StaticCell<UartLineEditor<'static>> = StaticCell::new();
    let editor = EDITOR.init(LineEditor::new(uart));
    editor.history_mut().set_max_len(HISTORY_MAX_LEN);

    let mut console = Console::new(controller, editor, CONSOLE_PROMPT)
        .expect("Failed to register console commands");
    console.announce();

    // Hauptschleife: lesen → ausführen → melden, kehrt nie zurück
    console.run()
}
