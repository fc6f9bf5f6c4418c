//! Command-line interface implementation for Wecon.
//! Provides argument parsing and help text formatting using clap.

use clap::{Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::record::DEFAULT_PORT;
use crate::ui::LOGO;

/// Command-line arguments structure for Wecon.
#[derive(Parser, Debug)]
#[command(
    name = "wecon",
    version,
    about = "Wecon Framework CLI",
    long_about = None,
    before_help = LOGO
)]
pub struct Cli {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Wecon project
    Create(CreateArgs),
    /// Start development server with hot reload
    Dev(DevArgs),
    /// Start production server
    Start(StartArgs),
    /// Build for production
    Build(BuildArgs),
    /// Generate new resources
    #[command(visible_alias = "g")]
    Generate {
        #[command(subcommand)]
        kind: GenerateKind,
    },
    /// Generate Postman collection
    Postman(PostmanArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Project name
    pub name: String,

    /// Initialize git repository
    #[arg(long, overrides_with = "no_git")]
    pub git: bool,

    /// Skip git repository initialization
    #[arg(long, overrides_with = "git")]
    pub no_git: bool,

    /// Skip dependency installation
    #[arg(long)]
    pub no_install: bool,

    /// Project description
    #[arg(long)]
    pub description: Option<String>,

    /// Project author
    #[arg(long)]
    pub author: Option<String>,

    /// Port the generated server listens on
    #[arg(long)]
    pub port: Option<u16>,

    /// Database name
    #[arg(long)]
    pub db_name: Option<String>,

    /// Directory to use instead of the built-in project template
    #[arg(long, value_name = "DIR")]
    pub template: Option<PathBuf>,

    /// Accept defaults for everything not given on the command line
    #[arg(short, long)]
    pub yes: bool,
}

impl CreateArgs {
    /// Whether to run `git init`; `None` leaves the decision to settings.
    pub fn git(&self) -> Option<bool> {
        if self.no_git {
            Some(false)
        } else if self.git {
            Some(true)
        } else {
            None
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct DevArgs {
    /// Port to run on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Config mode
    #[arg(short, long, default_value = "development")]
    pub mode: String,
}

#[derive(Args, Debug, Clone)]
pub struct StartArgs {
    /// Port to run on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Config mode
    #[arg(short, long, default_value = "production")]
    pub mode: String,
}

#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Config mode
    #[arg(short, long, default_value = "production")]
    pub mode: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum GenerateKind {
    /// Generate a new module
    Module {
        /// Module name
        name: String,

        /// Include CRUD controller
        #[arg(long)]
        crud: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct PostmanArgs {
    /// Environment to use
    #[arg(long, default_value = "development")]
    pub env: String,
}

/// Parses command line arguments.
///
/// # Exits
/// * With status code 0 after printing help when no subcommand is given
/// * With clap's default error handling for argument errors
pub fn get_args() -> (bool, Command) {
    let cli = Cli::parse();
    match cli.command {
        Some(command) => (cli.verbose, command),
        None => {
            if let Err(e) = Cli::command().print_help() {
                eprintln!("{e}");
            }
            std::process::exit(0);
        }
    }
}
