//! User-facing progress output.
//!
//! Everything here is for people reading a terminal; diagnostics go through
//! the `log` macros instead.

use colored::Colorize;

/// ASCII banner shown above the help text.
pub const LOGO: &str = r#"
██╗    ██╗███████╗ ██████╗ ██████╗ ███╗   ██╗
██║    ██║██╔════╝██╔════╝██╔═══██╗████╗  ██║
██║ █╗ ██║█████╗  ██║     ██║   ██║██╔██╗ ██║
██║███╗██║██╔══╝  ██║     ██║   ██║██║╚██╗██║
╚███╔███╔╝███████╗╚██████╗╚██████╔╝██║ ╚████║
 ╚══╝╚══╝ ╚══════╝ ╚═════╝ ╚═════╝ ╚═╝  ╚═══╝
"#;

/// Headline printed when a command starts.
pub fn title(message: &str) {
    println!("\n{}\n", message.cyan());
}

/// A step that is about to run.
pub fn step(message: &str) {
    println!("{} {}", "→".blue(), message);
}

/// A step that finished.
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Something went wrong but the command carries on.
pub fn warn(message: &str) {
    eprintln!("{} {}", "!".yellow(), message.yellow());
}

/// A step that failed; the error itself is reported by the caller.
pub fn failure(message: &str) {
    eprintln!("{} {}", "✗".red(), message.red());
}

/// Secondary information such as paths or next steps.
pub fn hint(message: &str) {
    println!("{}", message.bright_black());
}

/// Final line of a successful command.
pub fn done(message: &str) {
    println!("\n{}\n", message.green());
}
