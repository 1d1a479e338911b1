//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

use crate::console::MAX_CMDLINE_LENGTH;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    /// Peripherie konnte nicht initialisiert werden (fatal beim Start)
    InitFailed,
    WriteFailed,
    /// Pixel-Index liegt außerhalb des Strips
    InvalidIndex,
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::InitFailed => defmt::write!(fmt, "InitFailed"),
            LedError::WriteFailed => defmt::write!(fmt, "WriteFailed"),
            LedError::InvalidIndex => defmt::write!(fmt, "InvalidIndex"),
        }
    }
}

/// Trait für das LED-Backend
///
/// Genau eine Implementierung wird pro Build verwendet (Cargo-Feature),
/// der Controller darüber kennt nur diese beiden Operationen.
///
/// # Implementierungen
/// - **GPIO:** `GpioLed` (einfacher Push/Pull-Ausgang)
/// - **Strip:** `StripLed` (adressierbarer WS2812, 1 Pixel)
pub trait LedBackend {
    /// Name für das Startup-Log
    const NAME: &'static str;

    /// Bereitet die Hardware vor, die LED ist danach aus
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::InitFailed` zurück, der Aufrufer muss dann abbrechen
    fn configure(&mut self) -> Result<(), LedError>;

    /// Setzt den physischen Zustand (nur Seiteneffekt, kein Fehlerkanal)
    fn set_state(&mut self, on: bool);
}

/// Trait für einen adressierbaren LED-Strip
///
/// Pixel werden gepuffert und erst mit `refresh()` zum Gerät übertragen.
pub trait PixelStrip {
    /// Anzahl der Pixel
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Setzt einen Pixel im Puffer (noch keine Übertragung)
    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), LedError>;

    /// Überträgt den Puffer zum Gerät
    fn refresh(&mut self) -> Result<(), LedError>;

    /// Setzt alle Pixel auf schwarz und überträgt sofort
    fn clear(&mut self) -> Result<(), LedError>;
}

/// Eine Eingabezeile (maximal `MAX_CMDLINE_LENGTH` Bytes)
pub type Line = heapless::String<MAX_CMDLINE_LENGTH>;

/// Trait für die interaktive Zeilen-Eingabe
///
/// # Implementierungen
/// - **Production:** `LineEditor` über UART
/// - **Testing:** Mock mit vorbereiteten Zeilen
pub trait LineSource {
    /// Zeigt den Prompt und blockiert bis eine Zeile vorliegt
    ///
    /// `None` bei Ende der Eingabe, Abbruch (Ctrl-C) oder Lesefehler.
    fn read_line(&mut self, prompt: &str) -> Option<Line>;

    /// Fügt eine Zeile zur Eingabe-History hinzu
    fn add_history(&mut self, line: &str);
}

impl<T: LineSource + ?Sized> LineSource for &mut T {
    fn read_line(&mut self, prompt: &str) -> Option<Line> {
        (**self).read_line(prompt)
    }

    fn add_history(&mut self, line: &str) {
        (**self).add_history(line)
    }
}
