use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::cli::PostmanArgs;
use crate::error::{Error, Result};
use crate::exec::run_foreground;
use crate::loader::{load_template, TemplateSource, SCRIPTS_SET};
use crate::project::ensure_project_root;
use crate::record::DataRecord;
use crate::renderer::{PlaceholderRenderer, TemplateRenderer};
use crate::ui;

/// Name of the generated script, written to the project root.
pub const SCRIPT_FILE: &str = ".wecon-postman-gen.ts";

const SCRIPT_TEMPLATE: &str = "postman.ts.hbs";

pub fn run(cwd: &Path, args: &PostmanArgs) -> Result<i32> {
    ui::title("Generating Postman collection...");
    ensure_project_root(cwd)?;

    let script = write_script(cwd, &args.env)?;
    let mut command = tsx_command(cwd);
    command.arg(&script).current_dir(cwd);
    let result = run_foreground(&mut command);

    if let Err(e) = fs::remove_file(&script) {
        debug!("Could not remove '{}': {e}", script.display());
    }

    match result {
        Ok(0) => {
            ui::success("Postman collection generated!");
            Ok(0)
        }
        Ok(code) => {
            ui::failure("Failed to generate Postman collection");
            Err(Error::ProcessError {
                command: format!("tsx {SCRIPT_FILE}"),
                reason: format!("exited with status {code}"),
            })
        }
        Err(e) => {
            ui::failure("Failed to generate Postman collection");
            Err(e)
        }
    }
}

/// Renders the generator script for `env` into the project root.
pub fn write_script(cwd: &Path, env: &str) -> Result<PathBuf> {
    let loader = load_template(&TemplateSource::embedded(SCRIPTS_SET))?;
    let template = String::from_utf8(loader.read(Path::new(SCRIPT_TEMPLATE))?)
        .map_err(|e| Error::TemplateError(format!("'{SCRIPT_TEMPLATE}' is not valid UTF-8: {e}")))?;
    let record = DataRecord::new().with("env", env);
    let content = PlaceholderRenderer::new().render(&template, &record)?;

    let script = cwd.join(SCRIPT_FILE);
    fs::write(&script, content)?;
    Ok(script)
}

/// The project's own `tsx` when installed, `npx tsx` otherwise.
fn tsx_command(cwd: &Path) -> Command {
    let local = cwd.join("node_modules").join(".bin").join("tsx");
    if local.is_file() {
        Command::new(local)
    } else {
        let mut command = Command::new("npx");
        command.arg("tsx");
        command
    }
}
