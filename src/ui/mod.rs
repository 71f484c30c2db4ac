//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for piped input and CI
//! - [`MockUI`] with scripted answers for tests
//!
//! # Example
//!
//! ```
//! use nbdeps::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_prompt_responses("install_numpy", vec!["maybe", "y"]);
//!
//! let prompt = Prompt::new("install_numpy", "Install numpy? (yes/no)");
//! assert_eq!(ui.prompt(&prompt).unwrap(), "maybe");
//! assert_eq!(ui.prompt(&prompt).unwrap(), "y");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use terminal::{create_ui, StatusStream, TerminalUI};
pub use theme::{should_use_colors, NbdepsTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message. Shown in every mode.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Show a prompt and return the raw line the user entered.
    fn prompt(&mut self, prompt: &Prompt) -> Result<String>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Print report output. Shown in every mode.
    fn show_report(&mut self, report: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// A free-text prompt to show to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Unique key for the prompt (used for overrides and scripted answers).
    pub key: String,
    /// The question to display.
    pub question: String,
}

impl Prompt {
    /// Create a new prompt.
    pub fn new(key: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            question: question.into(),
        }
    }

    /// Key as used in `NBDEPS_PROMPT_<KEY>` environment overrides.
    pub fn env_key(&self) -> String {
        let key: String = self
            .key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
            .collect();
        format!("NBDEPS_PROMPT_{}", key)
    }
}
