//! Template loading for Wecon.
//! Handles both the template sets compiled into the binary and template
//! directories on the local filesystem.
use crate::error::{Error, Result};
use log::debug;
use rust_embed::RustEmbed;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Template sets shipped with the CLI.
#[derive(RustEmbed)]
#[folder = "templates/"]
struct BuiltinTemplates;

/// Name of the embedded template set used by `create`.
pub const PROJECT_SET: &str = "project";

/// Name of the embedded template set used by `generate module`.
pub const MODULE_SET: &str = "module";

/// Name of the embedded template set holding helper scripts.
pub const SCRIPTS_SET: &str = "scripts";

/// Represents the source location of a template tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Template set compiled into the binary, addressed by name
    Embedded(String),
    /// Template directory on the local filesystem
    FileSystem(PathBuf),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::Embedded(set) => write!(f, "built-in template set: '{set}'"),
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
        }
    }
}

impl TemplateSource {
    pub fn embedded<S: Into<String>>(set: S) -> Self {
        Self::Embedded(set.into())
    }

    /// The embedded set unless `override_dir` points somewhere else.
    pub fn embedded_or<S: Into<String>>(set: S, override_dir: Option<PathBuf>) -> Self {
        match override_dir {
            Some(path) => Self::FileSystem(path),
            None => Self::Embedded(set.into()),
        }
    }
}

/// Kind of an entry inside a template tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One entry of a template tree, relative to the template root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub relative_path: PathBuf,
    pub kind: EntryKind,
}

impl TemplateEntry {
    pub fn file<P: Into<PathBuf>>(relative_path: P) -> Self {
        Self { relative_path: relative_path.into(), kind: EntryKind::File }
    }

    pub fn directory<P: Into<PathBuf>>(relative_path: P) -> Self {
        Self { relative_path: relative_path.into(), kind: EntryKind::Directory }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Trait for reading template trees from different sources.
pub trait TemplateLoader {
    /// Lists every entry under the template root, sorted by path.
    fn entries(&self) -> Result<Vec<TemplateEntry>>;

    /// Reads the raw bytes of the file at `relative_path`.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if no such file exists in the template
    fn read(&self, relative_path: &Path) -> Result<Vec<u8>>;
}

/// Loader for the template sets embedded in the binary.
pub struct EmbeddedLoader {
    set: String,
}

impl EmbeddedLoader {
    /// Creates a loader for the embedded set `set`.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if the binary carries no such set
    pub fn new<S: Into<String>>(set: S) -> Result<Self> {
        let set = set.into();
        let prefix = format!("{set}/");
        if !BuiltinTemplates::iter().any(|file| file.starts_with(&prefix)) {
            return Err(Error::TemplateNotFound { template: set });
        }
        Ok(Self { set })
    }

    fn key(&self, relative_path: &Path) -> String {
        format!("{}/{}", self.set, to_slash(relative_path))
    }
}

impl TemplateLoader for EmbeddedLoader {
    fn entries(&self) -> Result<Vec<TemplateEntry>> {
        let prefix = format!("{}/", self.set);
        let mut directories = BTreeSet::new();
        let mut files = BTreeSet::new();

        for file in BuiltinTemplates::iter() {
            let Some(relative) = file.strip_prefix(&prefix) else {
                continue;
            };
            let relative = PathBuf::from(relative);
            // Embedded sets only list files; parent directories are implied.
            let mut parent = relative.parent();
            while let Some(dir) = parent.filter(|p| !p.as_os_str().is_empty()) {
                directories.insert(dir.to_path_buf());
                parent = dir.parent();
            }
            files.insert(relative);
        }

        let mut entries: Vec<TemplateEntry> = directories
            .into_iter()
            .map(TemplateEntry::directory)
            .chain(files.into_iter().map(TemplateEntry::file))
            .collect();
        entries.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        debug!("Embedded set '{}' has {} entries", self.set, entries.len());
        Ok(entries)
    }

    fn read(&self, relative_path: &Path) -> Result<Vec<u8>> {
        let key = self.key(relative_path);
        BuiltinTemplates::get(&key)
            .map(|file| file.data.into_owned())
            .ok_or(Error::TemplateNotFound { template: key })
    }
}

/// Loader for templates from the local filesystem.
pub struct LocalLoader<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    /// Creates a new LocalLoader instance.
    pub fn new(path: P) -> Self {
        Self { path }
    }

    /// Checks that the template root exists and is a directory.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if path doesn't exist
    pub fn validate(&self) -> Result<()> {
        let path = self.path.as_ref();
        if !path.is_dir() {
            return Err(Error::TemplateNotFound { template: path.display().to_string() });
        }
        Ok(())
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    fn entries(&self) -> Result<Vec<TemplateEntry>> {
        let root = self.path.as_ref();
        let mut entries = Vec::new();
        for dir_entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
            let dir_entry = dir_entry?;
            let relative_path = dir_entry
                .path()
                .strip_prefix(root)
                .map_err(|e| Error::TemplateError(e.to_string()))?
                .to_path_buf();
            let kind = if dir_entry.file_type().is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            entries.push(TemplateEntry { relative_path, kind });
        }
        entries.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        debug!("Template directory '{}' has {} entries", root.display(), entries.len());
        Ok(entries)
    }

    fn read(&self, relative_path: &Path) -> Result<Vec<u8>> {
        let path = self.path.as_ref().join(relative_path);
        if !path.is_file() {
            return Err(Error::TemplateNotFound { template: path.display().to_string() });
        }
        Ok(fs::read(path)?)
    }
}

/// Returns a loader for the provided template source.
pub fn load_template(source: &TemplateSource) -> Result<Box<dyn TemplateLoader>> {
    debug!("Using template from the {}", source);
    match source {
        TemplateSource::Embedded(set) => Ok(Box::new(EmbeddedLoader::new(set.as_str())?)),
        TemplateSource::FileSystem(path) => {
            let loader = LocalLoader::new(path.clone());
            loader.validate()?;
            Ok(Box::new(loader))
        }
    }
}

/// Joins the normal components of `path` with `/`.
fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
