use std::path::Path;
use std::process::Command;

use crate::cli::StartArgs;
use crate::commands::build;
use crate::error::Result;
use crate::exec::run_foreground;
use crate::project::{ensure_project_root, require_entry_point, BUILD_DIR, START_ENTRY_POINTS};
use crate::ui;

/// Runs the compiled entry point with `node`, building first when `dist/` is
/// missing.
pub fn run(cwd: &Path, args: &StartArgs) -> Result<i32> {
    ui::title("Starting Wecon production server...");

    ensure_project_root(cwd)?;
    if !cwd.join(BUILD_DIR).is_dir() {
        ui::warn(&format!("{BUILD_DIR}/ directory not found, building first"));
        build::build(cwd, &args.mode)?;
    }

    let entry_point = require_entry_point(cwd, &START_ENTRY_POINTS)?;

    ui::hint(&format!("Mode: {}", args.mode));
    ui::hint(&format!("Port: {}\n", args.port));

    let mut command = Command::new("node");
    command
        .arg(&entry_point)
        .current_dir(cwd)
        .env("NODE_ENV", &args.mode)
        .env("PORT", args.port.to_string());
    run_foreground(&mut command)
}
