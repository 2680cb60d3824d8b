pub mod analyze;
pub mod strip;

use crate::core::{Error, Result};
use std::path::{Path, PathBuf};

/// Conventional spec locations, tried in order under the project root
const CONVENTIONAL_TEST_ROOTS: &[&str] = &["cypress/e2e", "cypress/integration"];

/// Resolve the directory to walk. The project root must exist; the
/// conventional sub-tree must too, unless an explicit override is given.
pub fn resolve_test_root(root: &Path, tests_dir: Option<&Path>) -> Result<PathBuf> {
    if !root.is_dir() {
        return Err(Error::configuration(format!(
            "project root does not exist: {}",
            root.display()
        )));
    }

    if let Some(dir) = tests_dir {
        let resolved = root.join(dir);
        if resolved.is_dir() {
            return Ok(resolved);
        }
        return Err(Error::configuration(format!(
            "tests directory does not exist: {}",
            resolved.display()
        )));
    }

    for candidate in CONVENTIONAL_TEST_ROOTS {
        let resolved = root.join(candidate);
        if resolved.is_dir() {
            return Ok(resolved);
        }
    }

    Err(Error::configuration(format!(
        "no conventional test tree ({}) under {}",
        CONVENTIONAL_TEST_ROOTS.join(" or "),
        root.display()
    )))
}
