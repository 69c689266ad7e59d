//! Non-interactive UI for CI/headless environments.

use super::theme::ShimsTheme;
use super::{OutputMode, SpinnerHandle, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Plain lines on stdout, warnings and errors on stderr, no animation.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: ShimsTheme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: ShimsTheme::plain(),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_progress() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_command_output() {
            println!("{}", message);
        }
        Box::new(NoopSpinner {
            mode: self.mode,
            theme: self.theme.clone(),
        })
    }
}

/// Spinner stand-in that prints only the final line.
struct NoopSpinner {
    mode: OutputMode,
    theme: ShimsTheme,
}

impl SpinnerHandle for NoopSpinner {
    fn finish_success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn finish_skipped(&mut self, msg: &str) {
        if self.mode.shows_command_output() {
            println!("{}", self.theme.format_skipped(msg));
        }
    }
}
