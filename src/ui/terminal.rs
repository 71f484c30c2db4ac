//! Interactive terminal UI.

use std::io::{IsTerminal, Write};

use console::Term;

use crate::error::Result;

use super::{
    prompt_user, should_use_colors, NbdepsTheme, NonInteractiveUI, OutputMode, Prompt,
    UserInterface,
};

/// Interactive terminal UI implementation.
///
/// Prompts and status go to `term`; the report always goes to stdout.
pub struct TerminalUI {
    term: Term,
    theme: NbdepsTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            NbdepsTheme::new()
        } else {
            NbdepsTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }

    /// Send prompts and status lines to stderr instead of stdout.
    pub fn with_status_on_stderr(mut self) -> Self {
        self.term = Term::stderr();
        self
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(Term::stderr(), "{}", self.theme.format_error(msg)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        prompt_user(prompt, &self.term)
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_report(&mut self, report: &str) {
        writeln!(Term::stdout(), "{}", report).ok();
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Where prompts and status lines are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusStream {
    /// Everything on stdout.
    #[default]
    Stdout,
    /// Prompts and status on stderr, so stdout carries only the report.
    Stderr,
}

/// Create the appropriate UI based on context.
///
/// The terminal UI needs both a terminal for its status stream and on stdin;
/// otherwise answers are read line by line from stdin.
pub fn create_ui(
    interactive: bool,
    mode: OutputMode,
    status: StatusStream,
) -> Box<dyn UserInterface> {
    let status_term = match status {
        StatusStream::Stdout => Term::stdout(),
        StatusStream::Stderr => Term::stderr(),
    };

    if interactive && status_term.is_term() && std::io::stdin().is_terminal() {
        let ui = TerminalUI::new(mode);
        match status {
            StatusStream::Stdout => Box::new(ui),
            StatusStream::Stderr => Box::new(ui.with_status_on_stderr()),
        }
    } else {
        let ui = NonInteractiveUI::new(mode);
        match status {
            StatusStream::Stdout => Box::new(ui),
            StatusStream::Stderr => Box::new(ui.with_status_on_stderr()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_output_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn create_ui_non_interactive() {
        let ui = create_ui(false, OutputMode::Normal, StatusStream::Stdout);
        assert!(!ui.is_interactive());
    }

    #[test]
    fn create_ui_respects_mode() {
        let ui = create_ui(false, OutputMode::Verbose, StatusStream::Stderr);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
