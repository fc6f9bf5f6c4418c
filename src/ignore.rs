//! File and directory ignore pattern handling for Wecon templates.
//! This module processes .weconignore files to exclude specific paths
//! from materialization, similar to .gitignore functionality.

use crate::error::{Error, Result};
use crate::loader::TemplateLoader;
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::path::Path;

/// Wecon's ignore file name
pub const IGNORE_FILE: &str = ".weconignore";

/// Patterns that are skipped in every template tree.
pub const DEFAULT_IGNORE_PATTERNS: [&str; 3] = ["**/.DS_Store", "**/Thumbs.db", IGNORE_FILE];

/// Reads the template's .weconignore and builds the set of glob patterns.
///
/// # Returns
/// * `Result<GlobSet>` - Default patterns plus those from the ignore file
///
/// # Notes
/// - If the template has no .weconignore, only the defaults apply
/// - Any other failure to read it is returned as is
/// - Each non-empty line that does not start with `#` is a glob pattern
/// - Invalid patterns result in an `Error::IgnoreError`
///
/// # Example
/// ```ignore
/// # Contents of .weconignore:
/// *.log
/// drafts/**
/// ```
pub fn parse_ignore_file(loader: &dyn TemplateLoader) -> Result<GlobSet> {
    let contents = match loader.read(Path::new(IGNORE_FILE)) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(Error::TemplateNotFound { .. }) => {
            debug!("{} does not exist", IGNORE_FILE);
            String::new()
        }
        Err(e) => return Err(e),
    };
    build_ignore_set(contents.lines())
}

/// Compiles the default patterns plus `patterns` into one `GlobSet`.
pub fn build_ignore_set<'a, I>(patterns: I) -> Result<GlobSet>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut builder = GlobSetBuilder::new();
    for pattern in DEFAULT_IGNORE_PATTERNS {
        builder.add(Glob::new(pattern)?);
    }
    for line in patterns {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        builder.add(Glob::new(line)?);
    }
    Ok(builder.build()?)
}
