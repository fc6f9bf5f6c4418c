use std::path::Path;
use std::process::Command;

use crate::cli::DevArgs;
use crate::error::Result;
use crate::exec::run_foreground;
use crate::project::{ensure_project_root, require_entry_point, DEV_ENTRY_POINTS};
use crate::ui;

/// Runs the source entry point under `tsx watch` until it exits.
pub fn run(cwd: &Path, args: &DevArgs) -> Result<i32> {
    ui::title("Starting Wecon development server...");

    ensure_project_root(cwd)?;
    let entry_point = require_entry_point(cwd, &DEV_ENTRY_POINTS)?;

    ui::hint(&format!("Mode: {}", args.mode));
    ui::hint(&format!("Port: {}", args.port));
    ui::hint(&format!("Entry: {}\n", entry_point.display()));

    let mut command = Command::new("npx");
    command
        .arg("tsx")
        .arg("watch")
        .arg(&entry_point)
        .current_dir(cwd)
        .env("NODE_ENV", &args.mode)
        .env("PORT", args.port.to_string());
    run_foreground(&mut command)
}
