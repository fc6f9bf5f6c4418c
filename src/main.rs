//! Wecon's main application entry point.
//! Parses the command line, sets up logging and hands the subcommand to its
//! implementation.

use wecon::{
    cli::get_args,
    commands::dispatch,
    error::{default_error_handler, Error},
    logger::init_logger,
};

/// Main application entry point.
fn main() {
    let (verbose, command) = get_args();
    init_logger(verbose);

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => default_error_handler(Error::IoError(e)),
    };

    match dispatch(&cwd, command) {
        Ok(code) => std::process::exit(code),
        Err(err) => default_error_handler(err),
    }
}
