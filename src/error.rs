//! Error handling for the Wecon CLI.
//! Defines custom error types and results used throughout the application.

use colored::Colorize;
use std::io;
use thiserror::Error;

/// Custom error types for Wecon operations.
///
/// This enum represents all possible errors that can occur within the CLI.
/// It implements the standard Error trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Represents errors raised while walking a template directory
    #[error("Template walk error: {0}")]
    WalkDirError(#[from] walkdir::Error),

    /// Represents errors in compiling `.weconignore` patterns
    #[error("Ignore pattern error: {0}")]
    IgnoreError(#[from] globset::Error),

    /// Represents errors raised by interactive prompts
    #[error("Prompt error: {0}")]
    PromptError(#[from] dialoguer::Error),

    /// Represents malformed placeholders inside a template
    #[error("Template error: {0}")]
    TemplateError(String),

    /// A template root or template file could not be found
    #[error("Template not found: {template}")]
    TemplateNotFound { template: String },

    /// A placeholder referenced a helper that is not registered
    #[error("Unknown template helper '{name}'")]
    UnknownHelper { name: String },

    /// A rendered path segment cannot be used on disk
    #[error("Invalid rendered path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A project or module name cannot be used as a path segment
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// The destination directory of `create` already exists
    #[error("Directory \"{output_dir}\" already exists")]
    OutputDirectoryExists { output_dir: String },

    /// A lifecycle command was run outside of a project root
    #[error("{marker} not found")]
    NotInProject { marker: String },

    /// The module directory targeted by `generate module` already exists
    #[error("Module \"{name}\" already exists")]
    ModuleExists { name: String },

    /// None of the expected entry point files exist
    #[error("No entry point found (expected one of: {candidates})")]
    EntryPointNotFound { candidates: String },

    /// An external process could not be spawned or exited unsuccessfully
    #[error("Command `{command}` failed: {reason}")]
    ProcessError { command: String, reason: String },
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Follow-up advice printed under the error message, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::NotInProject { .. } => Some("Make sure you're in a Wecon project directory."),
            Error::OutputDirectoryExists { .. } => {
                Some("Choose another name or remove the existing directory first.")
            }
            Error::EntryPointNotFound { .. } => {
                Some("Make sure the project sources (or the build output) are in place.")
            }
            _ => None,
        }
    }
}

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message (and a hint when one applies) to stderr
/// and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", format!("Error: {err}").red());
    if let Some(hint) = err.hint() {
        eprintln!("{}", hint.bright_black());
    }
    std::process::exit(1);
}
