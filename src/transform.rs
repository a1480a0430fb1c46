//! The per-file transformation driver: detect the marker annotation, strip
//! it and its import, extract fields, synthesize boilerplate, splice, write.
//!
//! Every precondition failure is file-scoped. Skips are derived from the
//! current text on each run, never from stored state, which is what makes a
//! second pass over an already-converted tree a no-op.

use crate::core::{FileOutcome, RewriteError, SkipReason, TransformMode};
use crate::extract::extract_fields;
use crate::synth::synthesize;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Result of transforming one file's text in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transformed {
    /// Marker removed and boilerplate spliced in.
    Rewritten { content: String, field_count: usize },
    /// Marker and import removed, but no field qualified; the stripped text
    /// is still the new file content.
    StrippedOnly { content: String },
    /// Marker not present; the file is left untouched.
    MarkerAbsent,
}

/// Run the full text-level pipeline for one file.
///
/// `class_name` is the owning class's simple name, taken from the file stem
/// under the one-class-per-file convention.
pub fn transform_source(
    content: &str,
    mode: TransformMode,
    class_name: &str,
) -> Result<Transformed, RewriteError> {
    let mut lines = match strip_marker_and_imports(content, mode) {
        Some(lines) => lines,
        None => return Ok(Transformed::MarkerAbsent),
    };

    let stripped = lines.join("\n");
    let fields = extract_fields(&stripped, mode);
    if fields.is_empty() {
        return Ok(Transformed::StrippedOnly { content: stripped });
    }

    let block = synthesize(&fields, mode, class_name, &lines)?;
    let at = block.insertion.line;
    lines.splice(at..at, block.lines);

    Ok(Transformed::Rewritten {
        content: lines.join("\n"),
        field_count: fields.len(),
    })
}

/// Remove the mode's marker annotation line(s) and Lombok import line(s).
/// Returns `None` when the marker is absent, leaving the file untouched.
///
/// Splitting on `'\n'` keeps any trailing empty segment, so rejoining
/// reproduces the file's final newline and trailing blank lines exactly.
fn strip_marker_and_imports(content: &str, mode: TransformMode) -> Option<Vec<String>> {
    let marker = mode.marker();
    let mut found = false;
    let mut kept = Vec::new();

    for line in content.split('\n') {
        let trimmed = line.trim();
        if trimmed == marker {
            found = true;
            continue;
        }
        if is_lombok_import(trimmed, mode) {
            continue;
        }
        kept.push(line.to_string());
    }

    found.then_some(kept)
}

fn is_lombok_import(trimmed: &str, mode: TransformMode) -> bool {
    match mode {
        TransformMode::Constructors => trimmed == "import lombok.RequiredArgsConstructor;",
        // @Data pulls in assorted lombok imports; drop them all.
        TransformMode::Accessors => trimmed.starts_with("import lombok."),
    }
}

/// Transform one file on disk. I/O errors carry the path; structural
/// failures surface as `RewriteError`. With `dry_run`, write-back is
/// suppressed but the outcome is reported as if it happened.
pub fn rewrite_file(path: &Path, mode: TransformMode, dry_run: bool) -> Result<FileOutcome> {
    let class_name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or(RewriteError::MissingClassName)?;

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let (new_content, outcome) = match transform_source(&content, mode, class_name)? {
        Transformed::MarkerAbsent => {
            return Ok(FileOutcome::Skipped(SkipReason::MarkerAbsent));
        }
        Transformed::StrippedOnly { content } => {
            (content, FileOutcome::Skipped(SkipReason::NoFields))
        }
        Transformed::Rewritten {
            content,
            field_count,
        } => (content, FileOutcome::Processed(field_count)),
    };

    if !dry_run {
        fs::write(path, new_content)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(outcome)
}
