//! User interaction for the configuration form.
//! The `Prompter` trait keeps the form logic testable without a terminal.

use crate::error::{Error, Result};
use crate::manifest::ConfigEntry;
use crate::project::Project;
use dialoguer::{Confirm, Input};

/// Source of answers for the configuration form.
pub trait Prompter {
    /// Asks a yes/no question. Returns `true` without asking when `skip` is set.
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool>;

    /// Asks for the value of `entry`, starting from `current`.
    /// An empty answer means "use the default".
    fn input(&self, entry: &ConfigEntry, current: String) -> Result<String>;
}

/// Terminal prompts backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, skip: bool, prompt: String) -> Result<bool> {
        if skip {
            return Ok(true);
        }
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }

    fn input(&self, entry: &ConfigEntry, current: String) -> Result<String> {
        let prompt = format!(
            "{} [{}] (leave empty for default '{}')",
            entry.description, entry.identifier, entry.default
        );
        Input::<String>::new()
            .with_prompt(prompt)
            .with_initial_text(current)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Walks the user through every entry, storing each answer as an override.
///
/// Answers are applied as they come in, so an error part way keeps the
/// answers already given.
pub fn fill_form(prompter: &dyn Prompter, project: &mut Project) -> Result<()> {
    let entries = project.entries().to_vec();
    for entry in &entries {
        let current = project.form_value(entry);
        let answer = prompter.input(entry, current)?;
        project.set(&entry.identifier, &answer);
    }
    Ok(())
}
