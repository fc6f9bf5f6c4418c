//! Facts about an existing project directory: the marker file that makes a
//! directory a project root and where its entry points live.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Framework configuration file whose presence marks a project root.
pub const MARKER_FILE: &str = "wecon.config.ts";

/// Directory the compiler writes to.
pub const BUILD_DIR: &str = "dist";

/// Directory copied verbatim into the build output when present.
pub const PUBLIC_DIR: &str = "public";

/// Where modules live inside a project.
pub const MODULES_DIR: &str = "src/modules";

/// Source entry points tried by `dev`, in order.
pub const DEV_ENTRY_POINTS: [&str; 4] =
    ["src/main.ts", "src/shared/server/index.ts", "src/server/index.ts", "src/index.ts"];

/// Compiled entry points tried by `start`, in order.
pub const START_ENTRY_POINTS: [&str; 4] =
    ["dist/main.js", "dist/shared/server/index.js", "dist/server/index.js", "dist/index.js"];

/// Fails with `Error::NotInProject` unless `dir` holds the marker file.
pub fn ensure_project_root(dir: &Path) -> Result<()> {
    if dir.join(MARKER_FILE).is_file() {
        Ok(())
    } else {
        Err(Error::NotInProject { marker: MARKER_FILE.to_string() })
    }
}

/// First candidate (relative to `dir`) that exists.
pub fn find_entry_point(dir: &Path, candidates: &[&str]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|candidate| PathBuf::from(*candidate))
        .find(|candidate| dir.join(candidate).is_file())
}

/// Like [`find_entry_point`], failing with `Error::EntryPointNotFound`.
pub fn require_entry_point(dir: &Path, candidates: &[&str]) -> Result<PathBuf> {
    find_entry_point(dir, candidates)
        .ok_or_else(|| Error::EntryPointNotFound { candidates: candidates.join(", ") })
}

/// Environment file copied into the build output for `mode`.
pub fn env_file(mode: &str) -> String {
    format!(".env.{mode}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn entry_point_follows_candidate_order() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/server")).unwrap();
        fs::write(dir.path().join("src/server/index.ts"), "").unwrap();
        fs::write(dir.path().join("src/index.ts"), "").unwrap();

        let found = find_entry_point(dir.path(), &DEV_ENTRY_POINTS).unwrap();
        assert_eq!(found, PathBuf::from("src/server/index.ts"));
    }

    #[test]
    fn missing_entry_point_lists_candidates() {
        let dir = TempDir::new().unwrap();
        match require_entry_point(dir.path(), &START_ENTRY_POINTS) {
            Err(Error::EntryPointNotFound { candidates }) => {
                assert!(candidates.contains("dist/main.js"));
                assert!(candidates.contains("dist/index.js"));
            }
            other => panic!("expected EntryPointNotFound, got {other:?}"),
        }
    }

    #[test]
    fn marker_decides_project_root() {
        let dir = TempDir::new().unwrap();
        assert!(ensure_project_root(dir.path()).is_err());
        fs::write(dir.path().join(MARKER_FILE), "export default {};").unwrap();
        assert!(ensure_project_root(dir.path()).is_ok());
    }
}
