use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Collects the candidate source files under a directory, filtered by
/// filename suffix (e.g. `Service.java`).
pub struct FileWalker {
    root: PathBuf,
    suffix: String,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            suffix: ".java".to_string(),
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Walk the tree and return matching files. Traversal order is
    /// filesystem-determined; transformations are file-local so order does
    /// not matter.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .build();

        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.matches_suffix(path) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    fn matches_suffix(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.ends_with(&self.suffix))
            .unwrap_or(false)
    }
}
