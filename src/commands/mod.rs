//! Command implementations for the `wecon` CLI.
//!
//! Each submodule corresponds to a top-level CLI command. Commands take the
//! directory they operate in and return the process exit code.

/// Project build: `wecon build`.
///
/// Compiles with `tsc`, then copies `public/` and the mode's env file into
/// `dist/`.
pub mod build;

/// Project scaffolding: `wecon create <name>`.
pub mod create;

/// Development server: `wecon dev`.
///
/// Runs the source entry point under `tsx watch`.
pub mod dev;

/// Code generation: `wecon generate module <name>`.
pub mod generate;

/// Postman collection export: `wecon postman`.
///
/// Runs a generated script inside the project so the collection is built by
/// the project's own framework version.
pub mod postman;

/// Production server: `wecon start`.
pub mod start;

use std::path::Path;

use crate::cli::Command;
use crate::config::get_settings;
use crate::error::Result;

/// Runs `command` in `cwd`.
pub fn dispatch(cwd: &Path, command: Command) -> Result<i32> {
    match command {
        Command::Create(args) => {
            let settings = get_settings(cwd)?;
            create::run(cwd, &args, &settings)
        }
        Command::Dev(args) => dev::run(cwd, &args),
        Command::Start(args) => start::run(cwd, &args),
        Command::Build(args) => build::run(cwd, &args),
        Command::Generate { kind } => generate::run(cwd, &kind),
        Command::Postman(args) => postman::run(cwd, &args),
    }
}
