//! Project and module scaffolding.
//!
//! Both operations take a fully populated [`DataRecord`]; where its values came
//! from (flags, prompts, rc file) is the caller's business.

use std::fs;
use std::path::{Path, PathBuf};

use cruet::Inflector;
use globset::GlobSet;
use log::{debug, warn};

use crate::error::{Error, Result};
use crate::exec;
use crate::ignore::parse_ignore_file;
use crate::loader::{load_template, TemplateSource, MODULE_SET, PROJECT_SET};
use crate::processor::{Materialized, Processor};
use crate::project::{ensure_project_root, MODULES_DIR};
use crate::record::DataRecord;
use crate::renderer::PlaceholderRenderer;
use crate::ui;

/// Directories every new project gets, whether or not the template set has
/// files in them.
pub const EXTRA_PROJECT_DIRS: [&str; 5] =
    ["public", "logs", "src/shared/middleware", "src/shared/utils", "src/shared/types"];

/// Subdirectories of a generated module.
pub const MODULE_DIRS: [&str; 5] = ["controllers", "services", "routes", "models", "i18n"];

const MODULE_DEFINITION: &str = "{{name}}.module.ts.hbs";
const MODULE_TRANSLATION: &str = "i18n/en.translation.json.hbs";
const MODULE_CONTROLLER: &str = "controllers/{{name}}.controller.ts.hbs";

#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// Run `git init` in the new project
    pub git: bool,
    /// Run `<package_manager> install` in the new project
    pub install: bool,
    pub package_manager: String,
    pub template: TemplateSource,
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            git: true,
            install: true,
            package_manager: "npm".to_string(),
            template: TemplateSource::embedded(PROJECT_SET),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModuleOptions {
    /// Also render a CRUD controller
    pub crud: bool,
    pub template: TemplateSource,
}

impl Default for ModuleOptions {
    fn default() -> Self {
        Self { crud: false, template: TemplateSource::embedded(MODULE_SET) }
    }
}

/// Checks that `name` can be used as a single path segment.
///
/// # Errors
/// * `Error::InvalidName` for empty names, `.`/`..`, names containing path
///   separators and names starting with `-`
pub fn validate_name(name: &str) -> Result<()> {
    let reason = if name.trim().is_empty() {
        Some("name cannot be empty")
    } else if name == "." || name == ".." {
        Some("name cannot be a relative directory reference")
    } else if name.contains('/') || name.contains('\\') {
        Some("name cannot contain path separators")
    } else if name.starts_with('-') {
        Some("name cannot start with '-'")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(Error::InvalidName { name: name.to_string(), reason: reason.to_string() }),
        None => Ok(()),
    }
}

/// Creates a new project named `name` inside `parent`.
///
/// Fails before touching the filesystem when the destination exists. Git and
/// install failures are reported as warnings. A failure while rendering leaves
/// the partially written project in place.
///
/// # Returns
/// * `Result<PathBuf>` - Root of the new project
pub fn create_project(
    parent: &Path,
    name: &str,
    mut record: DataRecord,
    options: &CreateOptions,
) -> Result<PathBuf> {
    validate_name(name)?;
    if !name.is_kebab_case() {
        ui::warn(&format!(
            "\"{name}\" is not kebab-case; package managers may reject it as a package name"
        ));
    }

    let project_dir = parent.join(name);
    if project_dir.exists() {
        return Err(Error::OutputDirectoryExists { output_dir: name.to_string() });
    }

    let loader = load_template(&options.template)?;
    debug!("Using {}", options.template);
    let ignored = parse_ignore_file(&*loader)?;
    record.insert("name", name);

    ui::step("Creating project structure...");
    fs::create_dir_all(&project_dir)?;
    for dir in EXTRA_PROJECT_DIRS {
        fs::create_dir_all(project_dir.join(dir))?;
    }

    let engine = PlaceholderRenderer::new();
    let processor = Processor::new(&engine, &*loader, &project_dir, &record, &ignored);
    let materialized = processor.materialize()?;
    ui::success(&format!("Project structure created ({} files)", materialized.file_count()));

    if options.git {
        ui::step("Initializing git repository...");
        match exec::run_captured("git", &["init"], &project_dir, &[]) {
            Ok(()) => ui::success("Git repository initialized"),
            Err(e) => {
                warn!("{e}");
                ui::warn("Failed to initialize git repository");
            }
        }
    }

    if options.install {
        let pm = options.package_manager.as_str();
        ui::step("Installing dependencies...");
        match exec::run_captured(pm, &["install"], &project_dir, &[]) {
            Ok(()) => ui::success("Dependencies installed"),
            Err(e) => {
                warn!("{e}");
                ui::warn(&format!("Failed to install dependencies (run {pm} install manually)"));
            }
        }
    }

    Ok(project_dir)
}

/// Generates module `name` under `src/modules` of the project in `project_dir`.
///
/// # Returns
/// * `Result<Materialized>` - Directories created and files written
pub fn generate_module(project_dir: &Path, name: &str, options: &ModuleOptions) -> Result<Materialized> {
    ensure_project_root(project_dir)?;
    validate_name(name)?;

    let module_dir = project_dir.join(MODULES_DIR).join(name);
    if module_dir.exists() {
        return Err(Error::ModuleExists { name: name.to_string() });
    }

    let loader = load_template(&options.template)?;
    let record = DataRecord::module(name);
    let engine = PlaceholderRenderer::new();
    let ignored = GlobSet::empty();
    let processor = Processor::new(&engine, &*loader, &module_dir, &record, &ignored);

    let mut result = Materialized::default();
    fs::create_dir_all(&module_dir)?;
    result.directories.push(module_dir.clone());
    for dir in MODULE_DIRS {
        let path = module_dir.join(dir);
        fs::create_dir_all(&path)?;
        result.directories.push(path);
    }

    let mut templates = vec![MODULE_DEFINITION, MODULE_TRANSLATION];
    if options.crud {
        templates.push(MODULE_CONTROLLER);
    }
    for template in templates {
        result.written.push(processor.render_file(template)?);
    }

    debug!("Generated module '{}' in '{}'", name, module_dir.display());
    Ok(result)
}
