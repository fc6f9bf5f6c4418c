use std::io::IsTerminal;
use std::path::Path;

use crate::cli::CreateArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::loader::{TemplateSource, PROJECT_SET};
use crate::prompt::{ask_project_metadata, DefaultsPrompter, DialoguerPrompter, ProjectAnswers, Prompter};
use crate::record::{default_db_name, DataRecord, DEFAULT_DESCRIPTION, DEFAULT_PORT};
use crate::scaffold::{create_project, CreateOptions};
use crate::ui;

/// Creates a project, prompting for missing metadata when attached to a
/// terminal and `--yes` was not given.
pub fn run(cwd: &Path, args: &CreateArgs, settings: &Settings) -> Result<i32> {
    if args.yes || !std::io::stdin().is_terminal() {
        run_with(cwd, args, settings, &DefaultsPrompter)
    } else {
        run_with(cwd, args, settings, &DialoguerPrompter::new())
    }
}

pub fn run_with(
    cwd: &Path,
    args: &CreateArgs,
    settings: &Settings,
    prompter: &dyn Prompter,
) -> Result<i32> {
    ui::title("Creating new Wecon project...");

    let name = args.name.as_str();
    let answers = ProjectAnswers {
        description: args.description.clone(),
        author: args.author.clone(),
        port: args.port,
        db_name: args.db_name.clone(),
    };
    let metadata = ask_project_metadata(
        prompter,
        answers,
        settings.author.as_deref().unwrap_or_default(),
        DEFAULT_PORT,
        &default_db_name(name),
        DEFAULT_DESCRIPTION,
    )?;

    let record = DataRecord::project(name)
        .with("description", metadata.description)
        .with("author", metadata.author)
        .with("port", metadata.port)
        .with("dbName", metadata.db_name);

    let options = CreateOptions {
        git: args.git().unwrap_or(settings.git),
        install: !args.no_install,
        package_manager: settings.package_manager.clone(),
        template: TemplateSource::embedded_or(
            PROJECT_SET,
            args.template.clone().or_else(|| settings.templates.clone()),
        ),
    };

    if let Err(e) = create_project(cwd, name, record, &options) {
        ui::failure("Failed to create project");
        return Err(e);
    }

    ui::done("Project created successfully!");
    println!("Next steps:");
    ui::hint(&format!("  cd {name}"));
    if !options.install {
        ui::hint(&format!("  {} install", options.package_manager));
    }
    ui::hint(&format!("  {} run dev", options.package_manager));
    println!();
    Ok(0)
}
