//! Logging configuration for Wecon.

use log::LevelFilter;

/// Sets up `env_logger`. `--verbose` shows everything; otherwise `RUST_LOG`
/// decides, falling back to warnings only.
pub fn init_logger(verbose: bool) {
    let mut builder = env_logger::Builder::new();
    if verbose {
        builder.filter_level(LevelFilter::Trace);
    } else {
        builder.filter_level(LevelFilter::Warn).parse_default_env();
    }
    builder.format_timestamp(None).init();
}
