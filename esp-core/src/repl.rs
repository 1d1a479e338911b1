//! Konsolen-Schleife: lesen, ausführen, melden
//!
//! Läuft blockierend in einem einzigen Thread. Fehler beim Ausführen
//! werden nur geloggt, die Schleife läuft immer weiter.

use crate::console::{CommandRegistry, ConsoleError, RegisterError};
use crate::controller::{LED_COMMAND_COUNT, LedController};
use crate::traits::{LedBackend, LineSource};

/// Ergebnis einer Iteration von `Console::poll`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Keine Eingabe (EOF, Ctrl-C, Lesefehler)
    NoInput,
    /// Leere Zeile, nichts ausgeführt
    Empty,
    Executed(&'static str),
    Failed(ConsoleError),
}

pub struct Console<L, S> {
    controller: LedController<L>,
    commands: CommandRegistry<LedController<L>, LED_COMMAND_COUNT>,
    source: S,
    prompt: &'static str,
}

impl<L: LedBackend, S: LineSource> Console<L, S> {
    pub fn new(
        controller: LedController<L>,
        source: S,
        prompt: &'static str,
    ) -> Result<Self, RegisterError> {
        Ok(Self {
            controller,
            commands: LedController::commands()?,
            source,
            prompt,
        })
    }

    pub fn controller(&self) -> &LedController<L> {
        &self.controller
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn commands(&self) -> &CommandRegistry<LedController<L>, LED_COMMAND_COUNT> {
        &self.commands
    }

    /// Bedienhinweis beim Start
    pub fn announce(&self) {
        #[cfg(feature = "defmt")]
        {
            defmt::info!("Type 'led_on' or 'led_off' and press ENTER to control the LED.");
            for command in self.commands.iter() {
                defmt::info!("  {} - {}", command.name, command.help);
            }
        }
    }

    /// Eine Iteration: Zeile lesen, in die History, ausführen
    pub fn poll(&mut self) -> StepOutcome {
        let Some(line) = self.source.read_line(self.prompt) else {
            return StepOutcome::NoInput;
        };

        if line.is_empty() {
            return StepOutcome::Empty;
        }
        self.source.add_history(&line);

        match self.commands.dispatch(&mut self.controller, &line) {
            Ok(name) => StepOutcome::Executed(name),
            Err(err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Command returned an error: {}", err.code());
                StepOutcome::Failed(err)
            }
        }
        // `line` wird hier freigegeben
    }

    /// Endlosschleife, kehrt nie zurück
    pub fn run(&mut self) -> ! {
        loop {
            self.poll();
        }
    }
}
