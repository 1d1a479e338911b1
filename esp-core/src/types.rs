//! Core Types für LED-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Logischer Zustand der LED
///
/// Wird ausschließlich vom `LedController` gehalten und nur durch die
/// beiden Konsolen-Kommandos verändert. Startwert ist immer `Off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LedState {
    #[default]
    Off,
    On,
}

impl LedState {
    pub fn is_on(self) -> bool {
        self == LedState::On
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LedState::Off => "OFF",
            LedState::On => "ON",
        }
    }
}

impl From<bool> for LedState {
    fn from(on: bool) -> Self {
        if on { LedState::On } else { LedState::Off }
    }
}

impl From<LedState> for bool {
    fn from(state: LedState) -> Self {
        state.is_on()
    }
}

/// LED Command für die Konsolen-Steuerung
///
/// Jedes Kommando hat einen festen Namen (case-sensitive) und einen Hilfetext.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedCommand {
    /// `led_on`: LED einschalten
    On,
    /// `led_off`: LED ausschalten
    Off,
}

impl LedCommand {
    /// Alle Kommandos in Registrierungs-Reihenfolge
    pub const ALL: [LedCommand; 2] = [LedCommand::On, LedCommand::Off];

    pub fn name(self) -> &'static str {
        match self {
            LedCommand::On => "led_on",
            LedCommand::Off => "led_off",
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            LedCommand::On => "Turn the LED on",
            LedCommand::Off => "Turn the LED off",
        }
    }

    /// Zustand nach Ausführung (überschreibend, kein Toggle)
    pub fn target_state(self) -> LedState {
        match self {
            LedCommand::On => LedState::On,
            LedCommand::Off => LedState::Off,
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedState {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedCommand {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_led_state_default_is_off() {
        assert_eq!(LedState::default(), LedState::Off);
        assert!(!LedState::default().is_on());
    }

    #[test]
    fn test_led_state_bool_conversion() {
        assert_eq!(LedState::from(true), LedState::On);
        assert_eq!(LedState::from(false), LedState::Off);
        assert!(bool::from(LedState::On));
    }

    #[test]
    fn test_led_command_names() {
        assert_eq!(LedCommand::On.name(), "led_on");
        assert_eq!(LedCommand::Off.name(), "led_off");
        assert_eq!(LedCommand::Off.target_state(), LedState::Off);
    }
}
