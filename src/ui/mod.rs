//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction (mockable in tests)
//! - [`ConsoleUi`] writing styled text to stdout/stderr
//! - [`MockUi`] capturing messages for assertions

use console::Style;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including diagnostics.
    Verbose,
    /// Show status messages.
    #[default]
    Normal,
    /// Show nothing except errors.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

/// Trait for user-facing output.
///
/// This trait allows mocking the output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a warning message (stderr).
    fn warning(&mut self, msg: &str);

    /// Display an error message (stderr).
    fn error(&mut self, msg: &str);
}

/// Styling for console output, empty when colors are disabled.
#[derive(Debug, Clone)]
struct Theme {
    warning: Style,
    error: Style,
}

impl Theme {
    fn new() -> Self {
        if console::colors_enabled() {
            Self {
                warning: Style::new().color256(208),
                error: Style::new().red().bold(),
            }
        } else {
            Self {
                warning: Style::new(),
                error: Style::new(),
            }
        }
    }
}

/// Console-backed UI implementation.
pub struct ConsoleUi {
    mode: OutputMode,
    theme: Theme,
}

impl ConsoleUi {
    /// Create a console UI with the given output mode.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: Theme::new(),
        }
    }
}

impl UserInterface for ConsoleUi {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{msg}");
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("{}", self.theme.warning.apply_to(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.error.apply_to(msg));
    }
}

/// UI that records every message, for tests.
#[derive(Debug, Default)]
pub struct MockUi {
    /// Messages passed to [`UserInterface::message`].
    pub messages: Vec<String>,
    /// Messages passed to [`UserInterface::warning`].
    pub warnings: Vec<String>,
    /// Messages passed to [`UserInterface::error`].
    pub errors: Vec<String>,
}

impl UserInterface for MockUi {
    fn output_mode(&self) -> OutputMode {
        OutputMode::Normal
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_mode_hides_status() {
        assert!(!OutputMode::Quiet.shows_status());
        assert!(OutputMode::Normal.shows_status());
        assert!(OutputMode::Verbose.shows_status());
    }

    #[test]
    fn mock_ui_records_messages() {
        let mut ui = MockUi::default();
        ui.message("hello");
        ui.warning("careful");
        ui.error("boom");

        assert_eq!(ui.messages, vec!["hello"]);
        assert_eq!(ui.warnings, vec!["careful"]);
        assert_eq!(ui.errors, vec!["boom"]);
    }

    #[test]
    fn console_ui_reports_mode() {
        let ui = ConsoleUi::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
