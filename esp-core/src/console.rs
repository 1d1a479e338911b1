//! Kommando-Registry und Dispatch
//!
//! Eine Eingabezeile wird in Tokens zerlegt, das erste Token wählt das
//! registrierte Kommando, der Handler bekommt den Kontext (`&mut C`) und
//! alle Tokens.
//!
//! Zerlegung wie bei der ESP-IDF Konsole: `"..."` fasst Leerzeichen
//! zusammen, `\` maskiert das nächste Zeichen, überzählige Tokens
//! werden verworfen.

use heapless::{String, Vec};

/// Maximale Länge einer Kommandozeile in Bytes
pub const MAX_CMDLINE_LENGTH: usize = 256;

/// Größe der Argument-Tabelle (inkl. Kommandoname und Endmarke)
pub const MAX_CMDLINE_ARGS: usize = 8;

/// Tatsächlich genutzte Tokens, ein Platz bleibt für die Endmarke
const MAX_ARGV: usize = MAX_CMDLINE_ARGS - 1;

/// ESP-IDF Fehlercode für ungültige Argumente
const CODE_INVALID_ARG: i32 = 0x102;
/// ESP-IDF Fehlercode für "nicht gefunden"
const CODE_NOT_FOUND: i32 = 0x105;

/// Handler eines Kommandos
///
/// `Err(code)` meldet einen Fehler mit Exit-Code an die Konsole.
pub type CommandFn<C> = fn(&mut C, &[&str]) -> Result<(), i32>;

/// Ein registriertes Kommando
pub struct Command<C> {
    pub name: &'static str,
    pub help: &'static str,
    pub func: CommandFn<C>,
}

/// Fehler beim Ausführen einer Zeile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleError {
    /// Zeile enthält kein Token
    EmptyCommand,
    UnknownCommand,
    /// Handler hat einen Fehlercode gemeldet
    CommandFailed(i32),
}

impl ConsoleError {
    /// Fehlercode wie ihn die Konsole im Warn-Log ausgibt
    pub fn code(self) -> i32 {
        match self {
            ConsoleError::EmptyCommand => CODE_INVALID_ARG,
            ConsoleError::UnknownCommand => CODE_NOT_FOUND,
            ConsoleError::CommandFailed(code) => code,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConsoleError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ConsoleError::EmptyCommand => defmt::write!(fmt, "EmptyCommand"),
            ConsoleError::UnknownCommand => defmt::write!(fmt, "UnknownCommand"),
            ConsoleError::CommandFailed(code) => defmt::write!(fmt, "CommandFailed({})", code),
        }
    }
}

/// Fehler bei der Registrierung
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterError {
    /// Leerer Name oder Name mit Leerzeichen
    InvalidName,
    Duplicate,
    Full,
}

/// Registry mit fester Kapazität `N`
pub struct CommandRegistry<C, const N: usize> {
    commands: Vec<Command<C>, N>,
}

impl<C, const N: usize> Default for CommandRegistry<C, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, const N: usize> CommandRegistry<C, N> {
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub fn register(&mut self, command: Command<C>) -> Result<(), RegisterError> {
        if command.name.is_empty() || command.name.contains(char::is_whitespace) {
            return Err(RegisterError::InvalidName);
        }
        if self.find(command.name).is_some() {
            return Err(RegisterError::Duplicate);
        }
        self.commands
            .push(command)
            .map_err(|_| RegisterError::Full)
    }

    pub fn find(&self, name: &str) -> Option<&Command<C>> {
        self.commands.iter().find(|command| command.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command<C>> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Zerlegt `line` und führt das passende Kommando aus
    ///
    /// Gibt bei Erfolg den Namen des ausgeführten Kommandos zurück.
    pub fn dispatch(&self, ctx: &mut C, line: &str) -> Result<&'static str, ConsoleError> {
        let mut buffer = String::new();
        let argv = split_argv(line, &mut buffer);

        let Some(&name) = argv.first() else {
            return Err(ConsoleError::EmptyCommand);
        };
        let command = self.find(name).ok_or(ConsoleError::UnknownCommand)?;

        (command.func)(ctx, &argv).map_err(ConsoleError::CommandFailed)?;
        Ok(command.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Split {
    Space,
    Arg,
    Quoted,
    ArgEscaped,
    QuotedEscaped,
}

/// Zerlegt `line` in höchstens `MAX_ARGV` Tokens
///
/// Die entschärften Tokens landen hintereinander in `buffer`, die
/// zurückgegebenen Slices zeigen dort hinein.
fn split_argv<'b>(
    line: &str,
    buffer: &'b mut String<MAX_CMDLINE_LENGTH>,
) -> Vec<&'b str, MAX_ARGV> {
    let mut spans: Vec<(usize, usize), MAX_ARGV> = Vec::new();
    let mut state = Split::Space;
    let mut start = 0;
    buffer.clear();

    for c in line.chars() {
        let fits = match state {
            Split::Space if c.is_whitespace() => true,
            Split::Space => {
                start = buffer.len();
                match c {
                    '"' => {
                        state = Split::Quoted;
                        true
                    }
                    '\\' => {
                        state = Split::ArgEscaped;
                        true
                    }
                    _ => {
                        state = Split::Arg;
                        buffer.push(c).is_ok()
                    }
                }
            }
            Split::Arg if c.is_whitespace() => {
                state = Split::Space;
                end_arg(&mut spans, start, buffer.len());
                if spans.is_full() {
                    break;
                }
                true
            }
            Split::Arg => match c {
                '"' => {
                    state = Split::Quoted;
                    true
                }
                '\\' => {
                    state = Split::ArgEscaped;
                    true
                }
                _ => buffer.push(c).is_ok(),
            },
            Split::Quoted => match c {
                '"' => {
                    state = Split::Arg;
                    true
                }
                '\\' => {
                    state = Split::QuotedEscaped;
                    true
                }
                _ => buffer.push(c).is_ok(),
            },
            Split::ArgEscaped | Split::QuotedEscaped => {
                state = if state == Split::ArgEscaped {
                    Split::Arg
                } else {
                    Split::Quoted
                };
                push_escaped(buffer, c)
            }
        };

        // Puffer voll: Rest der Zeile wird verworfen
        if !fits {
            break;
        }
    }

    if state != Split::Space && !spans.is_full() {
        end_arg(&mut spans, start, buffer.len());
    }

    let buffer: &'b String<MAX_CMDLINE_LENGTH> = buffer;
    let text = buffer.as_str();
    spans.iter().map(|&(from, to)| &text[from..to]).collect()
}

fn end_arg(spans: &mut Vec<(usize, usize), MAX_ARGV>, start: usize, end: usize) {
    // Nach dem letzten freien Platz bricht `split_argv` ab, push scheitert nie
    let _ = spans.push((start, end));
}

/// Nur `\\`, `\"` und `\ ` sind Escapes, sonst bleibt der Backslash stehen
fn push_escaped(buffer: &mut String<MAX_CMDLINE_LENGTH>, c: char) -> bool {
    if !matches!(c, '\\' | '"' | ' ') && buffer.push('\\').is_err() {
        return false;
    }
    buffer.push(c).is_ok()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn increment(counter: &mut u32, _args: &[&str]) -> Result<(), i32> {
        *counter += 1;
        Ok(())
    }

    fn fail(_counter: &mut u32, _args: &[&str]) -> Result<(), i32> {
        Err(7)
    }

    fn count_args(counter: &mut u32, args: &[&str]) -> Result<(), i32> {
        *counter = args.len() as u32;
        Ok(())
    }

    fn registry() -> CommandRegistry<u32, 4> {
        let mut registry = CommandRegistry::new();
        registry
            .register(Command {
                name: "inc",
                help: "Increment",
                func: increment,
            })
            .unwrap();
        registry
            .register(Command {
                name: "fail",
                help: "Always fails",
                func: fail,
            })
            .unwrap();
        registry
            .register(Command {
                name: "argc",
                help: "Counts tokens",
                func: count_args,
            })
            .unwrap();
        registry
    }

    fn split(line: &str) -> std::vec::Vec<std::string::String> {
        let mut buffer = String::new();
        split_argv(line, &mut buffer)
            .iter()
            .map(|token| std::string::String::from(*token))
            .collect()
    }

    #[test]
    fn test_dispatch_runs_handler() {
        let registry = registry();
        let mut counter = 0;
        assert_eq!(registry.dispatch(&mut counter, "inc"), Ok("inc"));
        assert_eq!(registry.dispatch(&mut counter, "  inc  extra "), Ok("inc"));
        assert_eq!(counter, 2);
    }

    #[test]
    fn test_dispatch_is_case_sensitive() {
        let registry = registry();
        let mut counter = 0;
        assert_eq!(
            registry.dispatch(&mut counter, "INC"),
            Err(ConsoleError::UnknownCommand)
        );
        assert_eq!(counter, 0);
    }

    #[test]
    fn test_dispatch_handler_error_code() {
        let registry = registry();
        let mut counter = 0;
        let err = registry.dispatch(&mut counter, "fail").unwrap_err();
        assert_eq!(err, ConsoleError::CommandFailed(7));
        assert_eq!(err.code(), 7);
    }

    #[test]
    fn test_dispatch_blank_line() {
        let registry = registry();
        let mut counter = 0;
        let err = registry.dispatch(&mut counter, "   ").unwrap_err();
        assert_eq!(err, ConsoleError::EmptyCommand);
        assert_eq!(err.code(), 0x102);
    }

    #[test]
    fn test_dispatch_drops_surplus_arguments() {
        let registry = registry();
        let mut counter = 0;
        assert_eq!(
            registry.dispatch(&mut counter, "inc 1 2 3 4 5 6 7 8"),
            Ok("inc")
        );
        assert_eq!(counter, 1);

        assert_eq!(
            registry.dispatch(&mut counter, "argc 1 2 3 4 5 6 7 8"),
            Ok("argc")
        );
        assert_eq!(counter, MAX_ARGV as u32);
    }

    #[test]
    fn test_dispatch_strips_quotes() {
        let registry = registry();
        let mut counter = 0;
        assert_eq!(registry.dispatch(&mut counter, "\"inc\""), Ok("inc"));
        assert_eq!(counter, 1);
    }

    #[test]
    fn test_split_quotes_and_escapes() {
        assert_eq!(split("a \"b c\" d"), ["a", "b c", "d"]);
        assert_eq!(split("a\\ b c"), ["a b", "c"]);
        assert_eq!(split("x\\n \\\\ \\\""), ["x\\n", "\\", "\""]);
        assert_eq!(split("\"\" end"), ["", "end"]);
        assert_eq!(split("  "), [] as [&str; 0]);
    }

    #[test]
    fn test_split_keeps_first_seven_tokens() {
        assert_eq!(split("a b c d e f g h i"), ["a", "b", "c", "d", "e", "f", "g"]);
    }

    #[test]
    fn test_register_rejects_bad_names() {
        let mut registry = registry();
        let duplicate = Command {
            name: "inc",
            help: "",
            func: increment,
        };
        assert_eq!(registry.register(duplicate), Err(RegisterError::Duplicate));

        let spaced = Command {
            name: "two words",
            help: "",
            func: increment,
        };
        assert_eq!(registry.register(spaced), Err(RegisterError::InvalidName));
    }

    #[test]
    fn test_register_full() {
        let mut registry: CommandRegistry<u32, 1> = CommandRegistry::new();
        registry
            .register(Command {
                name: "a",
                help: "",
                func: increment,
            })
            .unwrap();
        let result = registry.register(Command {
            name: "b",
            help: "",
            func: increment,
        });
        assert_eq!(result, Err(RegisterError::Full));
        assert_eq!(registry.len(), 1);
    }
}
