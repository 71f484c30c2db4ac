//! Non-interactive UI for piped input and CI.
//!
//! Answers come from `NBDEPS_PROMPT_<KEY>` environment variables first, then
//! one line at a time from the input stream (stdin by default).
//!
//! With [`NonInteractiveUI::with_status_on_stderr`] everything except the
//! report goes to stderr, leaving stdout to machine-readable output.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};

use crate::error::{NbdepsError, Result};

use super::{OutputMode, Prompt, UserInterface};

/// UI implementation for non-interactive mode.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
    input: Box<dyn BufRead>,
    status_on_stderr: bool,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI reading answers from stdin.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with("NBDEPS_PROMPT_"))
            .collect();

        Self {
            mode,
            env_overrides,
            input: Box::new(BufReader::new(std::io::stdin())),
            status_on_stderr: false,
        }
    }

    /// Create with an explicit input stream and overrides (for testing).
    pub fn with_input(
        mode: OutputMode,
        input: Box<dyn BufRead>,
        overrides: HashMap<String, String>,
    ) -> Self {
        Self {
            mode,
            env_overrides: overrides,
            input,
            status_on_stderr: false,
        }
    }

    /// Send prompts and status lines to stderr instead of stdout.
    pub fn with_status_on_stderr(mut self) -> Self {
        self.status_on_stderr = true;
        self
    }

    fn status(&self, text: &str) {
        if self.status_on_stderr {
            eprintln!("{}", text);
        } else {
            println!("{}", text);
        }
    }

    fn status_inline(&self, text: &str) {
        if self.status_on_stderr {
            eprint!("{}", text);
            std::io::stderr().flush().ok();
        } else {
            print!("{}", text);
            std::io::stdout().flush().ok();
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.status(msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            self.status(&format!("✓ {}", msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        self.status(&format!("⚠ {}", msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        self.status_inline(&format!("{}: ", prompt.question));

        // An override answers once; a rejected answer falls through to input.
        if let Some(value) = self.env_overrides.remove(&prompt.env_key()) {
            self.status(&value);
            return Ok(value);
        }

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.status("");
            return Err(NbdepsError::InputClosed {
                question: prompt.question.clone(),
            });
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            self.status(&format!("\n{}\n", title));
        }
    }

    fn show_report(&mut self, report: &str) {
        println!("{}", report);
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
