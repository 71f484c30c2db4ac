//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;

use crate::error::{NbdepsError, Result};

use super::Prompt;

/// Convert dialoguer errors to NbdepsError.
fn map_dialoguer_err(e: dialoguer::Error) -> NbdepsError {
    NbdepsError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Prompt the user for a line of input.
///
/// Empty input is accepted and returned as-is; the caller decides whether
/// it is a valid answer.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<String> {
    Input::<String>::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .allow_empty(true)
        .interact_text_on(term)
        .map_err(map_dialoguer_err)
}
