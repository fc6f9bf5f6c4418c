//! User input and interaction handling.
//! Fills in project metadata that was not passed on the command line.

use crate::error::Result;
use dialoguer::Input;

/// Source of answers for interactive questions.
pub trait Prompter {
    /// Asks for free text, offering `default`.
    fn text(&self, question: &str, default: &str) -> Result<String>;
}

/// Prompter backed by the terminal.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&self, question: &str, default: &str) -> Result<String> {
        let answer = Input::<String>::new()
            .with_prompt(question)
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }
}

/// Prompter that accepts every default; used with `--yes` or without a TTY.
#[derive(Debug, Default)]
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn text(&self, _question: &str, default: &str) -> Result<String> {
        Ok(default.to_string())
    }
}

/// Project metadata supplied on the command line; `None` means "ask".
#[derive(Debug, Default, Clone)]
pub struct ProjectAnswers {
    pub description: Option<String>,
    pub author: Option<String>,
    pub port: Option<u16>,
    pub db_name: Option<String>,
}

/// Resolved project metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMetadata {
    pub description: String,
    pub author: String,
    pub port: u16,
    pub db_name: String,
}

/// Asks `prompter` for every field missing from `answers`.
///
/// A port answer that is not a number falls back to `default_port`.
pub fn ask_project_metadata(
    prompter: &dyn Prompter,
    answers: ProjectAnswers,
    default_author: &str,
    default_port: u16,
    default_db_name: &str,
    default_description: &str,
) -> Result<ProjectMetadata> {
    let description = match answers.description {
        Some(value) => value,
        None => prompter.text("Project description", default_description)?,
    };
    let author = match answers.author {
        Some(value) => value,
        None => prompter.text("Author", default_author)?,
    };
    let port = match answers.port {
        Some(value) => value,
        None => {
            let raw = prompter.text("Server port", &default_port.to_string())?;
            raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("'{}' is not a valid port, using {}", raw, default_port);
                default_port
            })
        }
    };
    let db_name = match answers.db_name {
        Some(value) => value,
        None => prompter.text("Database name", default_db_name)?,
    };
    Ok(ProjectMetadata { description, author, port, db_name })
}
