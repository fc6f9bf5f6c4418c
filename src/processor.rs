//! Directory tree materialization.
//! Walks a template tree, renders path segments and `.hbs` files through a
//! [`TemplateRenderer`], copies every other file byte-for-byte and writes the
//! result under an output root.

use globset::GlobSet;
use log::debug;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::loader::{TemplateEntry, TemplateLoader};
use crate::record::DataRecord;
use crate::renderer::TemplateRenderer;

/// Suffix marking a file whose contents are rendered.
pub const TEMPLATE_SUFFIX: &str = ".hbs";

/// What has to happen on disk for a single template entry.
#[derive(Debug, PartialEq, Eq)]
pub enum FileOperation {
    /// Ensure a directory exists
    CreateDir { target: PathBuf },
    /// Write rendered template text
    Write { target: PathBuf, content: String },
    /// Copy an opaque file unchanged
    Copy { target: PathBuf, content: Vec<u8> },
}

impl FileOperation {
    pub fn target(&self) -> &Path {
        match self {
            FileOperation::CreateDir { target }
            | FileOperation::Write { target, .. }
            | FileOperation::Copy { target, .. } => target,
        }
    }
}

/// Paths produced by a materialization, in the order they were written.
#[derive(Debug, Default)]
pub struct Materialized {
    pub directories: Vec<PathBuf>,
    pub written: Vec<PathBuf>,
    pub copied: Vec<PathBuf>,
}

impl Materialized {
    pub fn file_count(&self) -> usize {
        self.written.len() + self.copied.len()
    }
}

/// Returns true for names like `package.json.hbs`, false for a bare `.hbs`.
pub fn is_template_path(filename: &str) -> bool {
    filename.len() > TEMPLATE_SUFFIX.len() && filename.ends_with(TEMPLATE_SUFFIX)
}

/// Checks that a rendered path segment can be used as a single file name.
pub fn is_rendered_segment_valid(segment: &str) -> bool {
    !segment.trim().is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\'])
}

/// Renders every segment of `relative_path` through `engine`.
///
/// # Errors
/// * `Error::InvalidPath` if a segment renders to something that is not a
///   plain file name (empty, `.`, `..`, or containing a separator)
pub fn render_path(
    engine: &dyn TemplateRenderer,
    relative_path: &Path,
    record: &DataRecord,
) -> Result<PathBuf> {
    let mut rendered = PathBuf::new();
    for component in relative_path.components() {
        let Component::Normal(segment) = component else {
            return Err(Error::InvalidPath {
                path: relative_path.display().to_string(),
                reason: "template paths must be relative and normalized".to_string(),
            });
        };
        let segment = segment.to_string_lossy();
        let rendered_segment = engine.render(&segment, record)?;
        if !is_rendered_segment_valid(&rendered_segment) {
            return Err(Error::InvalidPath {
                path: relative_path.display().to_string(),
                reason: format!("segment '{segment}' rendered to '{rendered_segment}'"),
            });
        }
        rendered.push(rendered_segment);
    }
    Ok(rendered)
}

/// Joins `rendered` onto `output_root`, removing the template suffix from the
/// file name when `strip_suffix` is set.
pub fn resolve_target_path<P: AsRef<Path>, Q: AsRef<Path>>(
    rendered: P,
    output_root: Q,
    strip_suffix: bool,
) -> PathBuf {
    let rendered = rendered.as_ref();
    let target = output_root.as_ref().join(rendered);
    if !strip_suffix {
        return target;
    }
    match target.file_name().and_then(|n| n.to_str()) {
        Some(name) if is_template_path(name) => {
            let stripped = &name[..name.len() - TEMPLATE_SUFFIX.len()];
            target.with_file_name(stripped)
        }
        _ => target,
    }
}

/// Writes `content`, creating missing parent directories first.
pub fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Renders one template tree into one output root.
pub struct Processor<'a> {
    engine: &'a dyn TemplateRenderer,
    loader: &'a dyn TemplateLoader,
    output_root: &'a Path,
    record: &'a DataRecord,
    ignored: &'a GlobSet,
}

impl<'a> Processor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        loader: &'a dyn TemplateLoader,
        output_root: &'a Path,
        record: &'a DataRecord,
        ignored: &'a GlobSet,
    ) -> Self {
        Self { engine, loader, output_root, record, ignored }
    }

    /// Plans the operation for one entry; `None` when the entry is ignored.
    pub fn process(&self, entry: &TemplateEntry) -> Result<Option<FileOperation>> {
        if self.ignored.is_match(&entry.relative_path) {
            debug!("Skipping '{}' (ignored)", entry.relative_path.display());
            return Ok(None);
        }
        self.plan(entry).map(Some)
    }

    fn plan(&self, entry: &TemplateEntry) -> Result<FileOperation> {
        let rendered = render_path(self.engine, &entry.relative_path, self.record)?;

        if entry.is_dir() {
            return Ok(FileOperation::CreateDir { target: self.output_root.join(rendered) });
        }

        let is_template = entry
            .relative_path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(is_template_path);
        let target = resolve_target_path(&rendered, self.output_root, is_template);
        let content = self.loader.read(&entry.relative_path)?;

        if is_template {
            let text = String::from_utf8(content).map_err(|e| {
                Error::TemplateError(format!(
                    "'{}' is not valid UTF-8: {e}",
                    entry.relative_path.display()
                ))
            })?;
            let content = self.engine.render(&text, self.record)?;
            debug!("Rendering '{}' -> '{}'", entry.relative_path.display(), target.display());
            Ok(FileOperation::Write { target, content })
        } else {
            debug!("Copying '{}' -> '{}'", entry.relative_path.display(), target.display());
            Ok(FileOperation::Copy { target, content })
        }
    }

    /// Performs a planned operation on disk.
    pub fn apply(&self, operation: &FileOperation) -> Result<()> {
        match operation {
            FileOperation::CreateDir { target } => Ok(fs::create_dir_all(target)?),
            FileOperation::Write { target, content } => write_file(target, content.as_bytes()),
            FileOperation::Copy { target, content } => write_file(target, content),
        }
    }

    /// Materializes the whole template tree under the output root.
    ///
    /// Stops at the first failure; files written before it stay in place.
    pub fn materialize(&self) -> Result<Materialized> {
        let mut result = Materialized::default();
        for entry in self.loader.entries()? {
            let Some(operation) = self.process(&entry)? else {
                continue;
            };
            self.apply(&operation)?;
            let target = operation.target().to_path_buf();
            match operation {
                FileOperation::CreateDir { .. } => result.directories.push(target),
                FileOperation::Write { .. } => result.written.push(target),
                FileOperation::Copy { .. } => result.copied.push(target),
            }
        }
        debug!(
            "Materialized {} files into '{}'",
            result.file_count(),
            self.output_root.display()
        );
        Ok(result)
    }

    /// Renders a single template file and returns where it was written.
    pub fn render_file<P: AsRef<Path>>(&self, template: P) -> Result<PathBuf> {
        let operation = self.plan(&TemplateEntry::file(template.as_ref()))?;
        self.apply(&operation)?;
        Ok(operation.target().to_path_buf())
    }
}
