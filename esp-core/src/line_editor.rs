//! Zeilen-Editor für die serielle Konsole
//!
//! Minimaler linenoise-Ersatz über `embedded_io::Read + Write`:
//! Echo, Backspace, Ctrl-C/Ctrl-D/Ctrl-U und History mit Pfeil hoch/runter.
//! Multi-Line-Modus und Cursor-Bewegung innerhalb der Zeile gibt es nicht.

use embedded_io::{Read, Write};

use crate::history::History;
use crate::traits::{Line, LineSource};

const CTRL_C: u8 = 0x03;
const CTRL_D: u8 = 0x04;
const BACKSPACE: u8 = 0x08;
const CTRL_U: u8 = 0x15;
const ESC: u8 = 0x1b;
const DEL: u8 = 0x7f;
const BELL: &[u8] = b"\x07";
const ERASE_CHAR: &[u8] = b"\x08 \x08";
const ERASE_TO_END: &[u8] = b"\x1b[K";
const NEWLINE: &[u8] = b"\r\n";

/// Zustand beim Parsen von Escape-Sequenzen (`ESC [ x`, `ESC O x`)
#[derive(Clone, Copy, PartialEq, Eq)]
enum Escape {
    None,
    Esc,
    Csi,
}

/// Ergebnis eines einzelnen Bytes
enum Feed {
    Continue,
    Submit,
    Abort,
}

pub struct LineEditor<IO, const H: usize> {
    io: IO,
    buffer: Line,
    history: History<H>,
    escape: Escape,
    /// Letztes Byte war CR: ein direkt folgendes LF gehört zum selben Enter
    last_was_cr: bool,
    /// Position beim Blättern in der History (0 = neuester Eintrag)
    browse: Option<usize>,
}

impl<IO: Read + Write, const H: usize> LineEditor<IO, H> {
    pub fn new(io: IO) -> Self {
        Self {
            io,
            buffer: Line::new(),
            history: History::new(),
            escape: Escape::None,
            last_was_cr: false,
            browse: None,
        }
    }

    pub fn history(&self) -> &History<H> {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut History<H> {
        &mut self.history
    }

    pub fn io(&self) -> &IO {
        &self.io
    }

    pub fn into_inner(self) -> IO {
        self.io
    }

    // Echo-Fehler werden ignoriert, die Eingabe funktioniert trotzdem
    fn emit(&mut self, bytes: &[u8]) {
        let _ = self.io.write_all(bytes);
    }

    fn redraw(&mut self, prompt: &str) {
        self.emit(b"\r");
        self.emit(prompt.as_bytes());
        let _ = self.io.write_all(self.buffer.as_bytes());
        self.emit(ERASE_TO_END);
    }

    fn recall(&mut self, offset: Option<usize>, prompt: &str) {
        self.buffer.clear();
        if let Some(entry) = offset.and_then(|offset| self.history.get(offset)) {
            let _ = self.buffer.push_str(entry);
        }
        self.browse = offset;
        self.redraw(prompt);
    }

    fn feed(&mut self, byte: u8, prompt: &str) -> Feed {
        let after_cr = core::mem::replace(&mut self.last_was_cr, false);

        match self.escape {
            Escape::Esc => {
                // `ESC [` (CSI) und `ESC O` (SS3, Application-Cursor-Modus)
                self.escape = if matches!(byte, b'[' | b'O') {
                    Escape::Csi
                } else {
                    Escape::None
                };
                return Feed::Continue;
            }
            Escape::Csi => {
                // Parameter-Bytes (Ziffern, ';') gehören noch zur Sequenz
                if byte.is_ascii_digit() || byte == b';' {
                    return Feed::Continue;
                }
                self.escape = Escape::None;
                match byte {
                    b'A' => {
                        let next = self.browse.map_or(0, |offset| offset + 1);
                        if next < self.history.len() {
                            self.recall(Some(next), prompt);
                        }
                    }
                    b'B' => match self.browse {
                        Some(0) => self.recall(None, prompt),
                        Some(offset) => self.recall(Some(offset - 1), prompt),
                        None => {}
                    },
                    _ => {}
                }
                return Feed::Continue;
            }
            Escape::None => {}
        }

        match byte {
            b'\r' => {
                self.last_was_cr = true;
                Feed::Submit
            }
            b'\n' if after_cr => Feed::Continue,
            b'\n' => Feed::Submit,
            CTRL_C => Feed::Abort,
            CTRL_D if self.buffer.is_empty() => Feed::Abort,
            BACKSPACE | DEL => {
                if self.buffer.pop().is_some() {
                    self.emit(ERASE_CHAR);
                }
                Feed::Continue
            }
            CTRL_U => {
                self.buffer.clear();
                self.redraw(prompt);
                Feed::Continue
            }
            ESC => {
                self.escape = Escape::Esc;
                Feed::Continue
            }
            0x20..=0x7e => {
                if self.buffer.push(byte as char).is_ok() {
                    self.emit(&[byte]);
                } else {
                    self.emit(BELL);
                }
                Feed::Continue
            }
            // Sonstige Steuerzeichen
            _ => Feed::Continue,
        }
    }
}

impl<IO: Read + Write, const H: usize> LineSource for LineEditor<IO, H> {
    fn read_line(&mut self, prompt: &str) -> Option<Line> {
        self.buffer.clear();
        self.escape = Escape::None;
        self.browse = None;

        self.emit(prompt.as_bytes());
        let _ = self.io.flush();

        loop {
            let mut byte = [0u8; 1];
            match self.io.read(&mut byte) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {}
            }

            let result = self.feed(byte[0], prompt);
            let _ = self.io.flush();
            match result {
                Feed::Continue => {}
                Feed::Submit => {
                    self.emit(NEWLINE);
                    return Some(core::mem::take(&mut self.buffer));
                }
                Feed::Abort => {
                    self.emit(NEWLINE);
                    self.buffer.clear();
                    return None;
                }
            }
        }
    }

    fn add_history(&mut self, line: &str) {
        self.history.push(line);
    }
}
