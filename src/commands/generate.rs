use std::path::Path;

use crate::cli::GenerateKind;
use crate::error::Result;
use crate::project::MODULES_DIR;
use crate::scaffold::{generate_module, ModuleOptions};
use crate::ui;

pub fn run(cwd: &Path, kind: &GenerateKind) -> Result<i32> {
    match kind {
        GenerateKind::Module { name, crud } => module(cwd, name, *crud),
    }
}

fn module(cwd: &Path, name: &str, crud: bool) -> Result<i32> {
    ui::title(&format!("Generating module: {name}"));

    let options = ModuleOptions { crud, ..ModuleOptions::default() };
    let generated = match generate_module(cwd, name, &options) {
        Ok(generated) => generated,
        Err(e) => {
            ui::failure("Failed to generate module");
            return Err(e);
        }
    };
    for file in &generated.written {
        let shown = file.strip_prefix(cwd).unwrap_or(file);
        ui::success(&format!("Created {}", shown.display()));
    }

    ui::done(&format!("Module \"{name}\" created successfully!"));
    ui::hint(&format!("Location: {}", Path::new(MODULES_DIR).join(name).display()));
    ui::hint(&format!("Don't forget to register it in {MODULES_DIR}/index.ts"));
    println!();
    Ok(0)
}
