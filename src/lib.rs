//! Wecon is the command-line companion of the Wecon web framework.
//! It scaffolds projects and modules from template trees and wraps the
//! development, build and production lifecycle of a project.

/// Command-line interface module for the Wecon application
pub mod cli;

/// Subcommand implementations
pub mod commands;

/// Tool settings from `.weconrc.*` files and the environment
pub mod config;

/// Error types and handling for the Wecon application
pub mod error;

/// External process execution and signal forwarding
pub mod exec;

/// Named value transforms usable inside placeholders
pub mod helpers;

/// File and directory ignore patterns
/// Processes .weconignore files to exclude specific paths
pub mod ignore;

/// Template sets compiled into the binary or read from disk
pub mod loader;

/// Logging setup for the command-line binary
pub mod logger;

/// Directory tree materialization
pub mod processor;

/// Project root detection and entry points
pub mod project;

/// User input and interaction handling
pub mod prompt;

/// Values substituted into templates
pub mod record;

/// Placeholder substitution
pub mod renderer;

/// Project creation and module generation
pub mod scaffold;

/// Coloured terminal output and the banner
pub mod ui;
