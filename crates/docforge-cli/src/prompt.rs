//! Terminal implementation of the core `Prompter` port, using dialoguer.
//!
//! Compiled only with the default-on `interactive` feature; without it the
//! `new` command requires every answer as a flag.

use console::Term;
use dialoguer::{
    Confirm, Input, MultiSelect,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};

use docforge_core::{
    application::{
        ApplicationError,
        ports::{Prompter, SelectChoice},
    },
    error::{ForgeError, ForgeResult},
};

/// Interactive prompter backed by the terminal.
pub struct TermPrompter {
    theme: Box<dyn Theme>,
    term: Term,
}

impl TermPrompter {
    pub fn new(color: bool) -> Self {
        let theme: Box<dyn Theme> = if color {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };
        Self {
            theme,
            term: Term::stderr(),
        }
    }
}

fn prompt_error(e: impl std::fmt::Display) -> ForgeError {
    ApplicationError::PromptFailed {
        reason: e.to_string(),
    }
    .into()
}

impl Prompter for TermPrompter {
    fn input(&self, message: &str, default: Option<&str>) -> ForgeResult<String> {
        // Validation (and re-asking) is owned by the collector, so empty
        // input must pass through.
        let mut input = Input::<String>::with_theme(self.theme.as_ref())
            .with_prompt(message)
            .allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(prompt_error)
    }

    fn integer(&self, message: &str, default: i64) -> ForgeResult<i64> {
        Input::<i64>::with_theme(self.theme.as_ref())
            .with_prompt(message)
            .default(default)
            .interact_text()
            .map_err(prompt_error)
    }

    fn multi_select(&self, message: &str, choices: &[SelectChoice]) -> ForgeResult<Vec<usize>> {
        let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
        let defaults: Vec<bool> = choices.iter().map(|c| c.checked).collect();

        MultiSelect::with_theme(self.theme.as_ref())
            .with_prompt(message)
            .items(&labels)
            .defaults(&defaults)
            .interact()
            .map_err(prompt_error)
    }

    fn confirm(&self, message: &str, default: bool) -> ForgeResult<bool> {
        Confirm::with_theme(self.theme.as_ref())
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }

    fn reject(&self, message: &str) -> ForgeResult<()> {
        self.term
            .write_line(&format!("\u{2717} {message}")) // ✗
            .map_err(prompt_error)
    }
}
