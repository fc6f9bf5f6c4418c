use std::fs;
use std::path::Path;

use log::debug;
use walkdir::WalkDir;

use crate::cli::BuildArgs;
use crate::error::Result;
use crate::exec::run_captured;
use crate::project::{ensure_project_root, env_file, BUILD_DIR, PUBLIC_DIR};
use crate::ui;

pub fn run(cwd: &Path, args: &BuildArgs) -> Result<i32> {
    ui::title("Building Wecon project...");
    build(cwd, &args.mode)?;

    ui::done("Build completed successfully!");
    ui::hint(&format!("Output: ./{BUILD_DIR}/"));
    ui::hint("Start with: wecon start\n");
    Ok(0)
}

/// Compiles the project in `cwd` into `dist/` for `mode`.
///
/// # Errors
/// * `Error::NotInProject` when `cwd` is not a project root
/// * `Error::ProcessError` when the compiler fails
pub fn build(cwd: &Path, mode: &str) -> Result<()> {
    ensure_project_root(cwd)?;

    let dist = cwd.join(BUILD_DIR);
    if dist.exists() {
        debug!("Removing '{}'", dist.display());
        fs::remove_dir_all(&dist)?;
    }

    ui::step("Compiling TypeScript...");
    if let Err(e) = run_captured("npx", &["tsc"], cwd, &[("NODE_ENV", mode)]) {
        ui::failure("Build failed");
        return Err(e);
    }
    ui::success("TypeScript compiled");

    let public = cwd.join(PUBLIC_DIR);
    if public.is_dir() {
        ui::step("Copying public files...");
        let copied = copy_dir(&public, &dist.join(PUBLIC_DIR))?;
        ui::success(&format!("Public files copied ({copied})"));
    }

    let env = cwd.join(env_file(mode));
    if env.is_file() {
        fs::create_dir_all(&dist)?;
        fs::copy(&env, dist.join(".env"))?;
        ui::success(&format!("Environment file {} copied", env_file(mode)));
    }
    Ok(())
}

/// Recursively copies `from` into `to`, returning the number of files copied.
pub fn copy_dir(from: &Path, to: &Path) -> Result<usize> {
    let mut copied = 0;
    for entry in WalkDir::new(from) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(from).unwrap_or(entry.path());
        let target = to.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}
