use crate::core::TransformMode;
use crate::io::output::OutputFormat;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Everything one batch run needs. Built once from CLI arguments and passed
/// into the runner; there is no other configuration source and no state
/// persisted between runs.
#[derive(Debug, Clone)]
pub struct RewriteConfig {
    /// Directory scanned for candidate files.
    pub root: PathBuf,
    pub mode: TransformMode,
    /// Filename suffix filter, e.g. `Service.java`.
    pub suffix: String,
    /// Exact file names that must never be transformed.
    pub exclude: HashSet<String>,
    /// Run the full pipeline but skip write-back.
    pub dry_run: bool,
    pub format: OutputFormat,
}

impl RewriteConfig {
    pub fn is_excluded(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(|name| self.exclude.contains(name))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_excluding(names: &[&str]) -> RewriteConfig {
        RewriteConfig {
            root: PathBuf::from("."),
            mode: TransformMode::Constructors,
            suffix: "Service.java".to_string(),
            exclude: names.iter().map(|s| s.to_string()).collect(),
            dry_run: false,
            format: OutputFormat::Terminal,
        }
    }

    #[test]
    fn test_exclusion_matches_file_name_only() {
        let config = config_excluding(&["LegacyService.java"]);
        assert!(config.is_excluded(Path::new("src/service/LegacyService.java")));
        assert!(!config.is_excluded(Path::new("src/service/OrderService.java")));
    }
}
