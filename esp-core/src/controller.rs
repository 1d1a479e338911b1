//! LED Controller
//!
//! Besitzt den logischen LED-Zustand und das Backend. Zustand und
//! physischer Ausgang werden immer im selben Aufruf aktualisiert.

use crate::console::{Command, CommandFn, CommandRegistry, RegisterError};
use crate::traits::{LedBackend, LedError};
use crate::types::{LedCommand, LedState};

/// Anzahl der LED-Kommandos (`led_on`, `led_off`)
pub const LED_COMMAND_COUNT: usize = LedCommand::ALL.len();

pub struct LedController<L> {
    led: L,
    state: LedState,
}

impl<L: LedBackend> LedController<L> {
    /// Konfiguriert das Backend und übernimmt es
    ///
    /// Ein Fehler hier ist fatal: ohne funktionierende LED läuft keine Konsole.
    pub fn configure(mut led: L) -> Result<Self, LedError> {
        led.configure()?;

        #[cfg(feature = "defmt")]
        defmt::info!("Configured to drive {} LED", L::NAME);

        Ok(Self {
            led,
            state: LedState::Off,
        })
    }

    pub fn state(&self) -> LedState {
        self.state
    }

    pub fn led(&self) -> &L {
        &self.led
    }

    pub fn turn_on(&mut self) {
        self.apply(LedCommand::On);
    }

    pub fn turn_off(&mut self) {
        self.apply(LedCommand::Off);
    }

    /// Führt ein Kommando aus (überschreibt den Zustand, kein Toggle)
    pub fn apply(&mut self, command: LedCommand) {
        self.state = command.target_state();
        self.led.set_state(self.state.is_on());

        #[cfg(feature = "defmt")]
        defmt::info!("LED turned {}", self.state.as_str());
    }

    /// Registry mit genau den beiden LED-Kommandos
    pub fn commands() -> Result<CommandRegistry<Self, LED_COMMAND_COUNT>, RegisterError> {
        let mut registry = CommandRegistry::new();
        for command in LedCommand::ALL {
            registry.register(Command {
                name: command.name(),
                help: command.help(),
                func: handler_for(command),
            })?;
        }
        Ok(registry)
    }
}

fn handler_for<L: LedBackend>(command: LedCommand) -> CommandFn<LedController<L>> {
    match command {
        LedCommand::On => cmd_led_on::<L>,
        LedCommand::Off => cmd_led_off::<L>,
    }
}

fn cmd_led_on<L: LedBackend>(
    controller: &mut LedController<L>,
    _args: &[&str],
) -> Result<(), i32> {
    controller.turn_on();
    Ok(())
}

fn cmd_led_off<L: LedBackend>(
    controller: &mut LedController<L>,
    _args: &[&str],
) -> Result<(), i32> {
    controller.turn_off();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeLed {
        on: bool,
        writes: usize,
        configured: bool,
    }

    impl LedBackend for FakeLed {
        const NAME: &'static str = "fake";

        fn configure(&mut self) -> Result<(), LedError> {
            self.configured = true;
            Ok(())
        }

        fn set_state(&mut self, on: bool) {
            self.on = on;
            self.writes += 1;
        }
    }

    struct BrokenLed;

    impl LedBackend for BrokenLed {
        const NAME: &'static str = "broken";

        fn configure(&mut self) -> Result<(), LedError> {
            Err(LedError::InitFailed)
        }

        fn set_state(&mut self, _on: bool) {}
    }

    #[test]
    fn test_configure_starts_off() {
        let controller = LedController::configure(FakeLed::default()).unwrap();
        assert_eq!(controller.state(), LedState::Off);
        assert!(controller.led().configured);
        assert_eq!(controller.led().writes, 0);
    }

    #[test]
    fn test_configure_failure_is_reported() {
        let result = LedController::configure(BrokenLed);
        assert!(matches!(result, Err(LedError::InitFailed)));
    }

    #[test]
    fn test_turn_on_is_not_a_toggle() {
        let mut controller = LedController::configure(FakeLed::default()).unwrap();
        controller.turn_on();
        controller.turn_on();
        assert_eq!(controller.state(), LedState::On);
        assert!(controller.led().on);
        assert_eq!(controller.led().writes, 2);
    }

    #[test]
    fn test_commands_registers_both() {
        let registry = LedController::<FakeLed>::commands().unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.find("led_on").is_some());
        assert!(registry.find("led_off").is_some());
    }

    #[test]
    fn test_dispatch_through_registry() {
        let registry = LedController::<FakeLed>::commands().unwrap();
        let mut controller = LedController::configure(FakeLed::default()).unwrap();
        assert_eq!(registry.dispatch(&mut controller, "led_on"), Ok("led_on"));
        assert_eq!(controller.state(), LedState::On);
        assert_eq!(registry.dispatch(&mut controller, "led_off"), Ok("led_off"));
        assert_eq!(controller.state(), LedState::Off);
    }
}
