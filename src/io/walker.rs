use crate::core::{Error, Result};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// File-name suffixes that mark a candidate spec file
pub const SPEC_SUFFIXES: &[&str] = &[
    ".spec.js", ".spec.jsx", ".spec.ts", ".spec.tsx", ".cy.js", ".cy.jsx", ".cy.ts", ".cy.tsx",
];

pub struct SpecWalker {
    root: PathBuf,
    ignore_patterns: Vec<String>,
}

impl SpecWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ignore_patterns: vec![],
        }
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    /// Enumerate candidate spec files under the root, sorted by path
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(Error::configuration(format!(
                "root is not a directory: {}",
                self.root.display()
            )));
        }

        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .build();

        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        // Filesystem enumeration order is not stable across platforms
        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        if !is_spec_file(path) {
            return false;
        }

        let path_str = path.to_string_lossy();
        for pattern in &self.ignore_patterns {
            if glob::Pattern::new(pattern)
                .map(|p| p.matches(&path_str))
                .unwrap_or(false)
            {
                return false;
            }
        }

        true
    }
}

/// Whether a path carries one of the recognized two-part spec suffixes
pub fn is_spec_file(path: &Path) -> bool {
    match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => SPEC_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)),
        None => false,
    }
}

/// Convenience wrapper for a plain walk
pub fn find_spec_files(root: &Path) -> Result<Vec<PathBuf>> {
    SpecWalker::new(root.to_path_buf()).walk()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_spec_suffixes() {
        assert!(is_spec_file(Path::new("login.spec.js")));
        assert!(is_spec_file(Path::new("deep/nested/cart.cy.tsx")));
        assert!(!is_spec_file(Path::new("login.js")));
        assert!(!is_spec_file(Path::new("spec.js")));
        assert!(!is_spec_file(Path::new("login.spec.rb")));
    }

    #[test]
    fn missing_root_is_a_configuration_error() {
        let err = SpecWalker::new(PathBuf::from("/nonexistent/speclens-root"))
            .walk()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
