use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A single field declaration lifted from a class body.
///
/// The declared type is kept verbatim from the source text; a generic
/// suffix like `List<String>` is carried as an opaque string and never
/// interpreted structurally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub type_name: String,
    pub name: String,
    /// Zero-based index of the declaration line in the source.
    pub line: usize,
}

/// Which rewrite a run performs. The mode selects both the field
/// qualification predicate and the synthesis template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformMode {
    /// Replace `@RequiredArgsConstructor` with an all-fields constructor.
    Constructors,
    /// Replace `@Data` with explicit getters and setters.
    Accessors,
}

impl TransformMode {
    /// The Lombok annotation this mode removes and materializes.
    pub fn marker(&self) -> &'static str {
        match self {
            TransformMode::Constructors => "@RequiredArgsConstructor",
            TransformMode::Accessors => "@Data",
        }
    }
}

impl fmt::Display for TransformMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformMode::Constructors => write!(f, "constructors"),
            TransformMode::Accessors => write!(f, "accessors"),
        }
    }
}

/// How the insertion line was located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    AfterLastField,
    BeforeFinalClosingBrace,
}

/// Where a synthesized block is spliced into the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionPoint {
    /// Zero-based line index the block is inserted at (existing lines from
    /// this index on shift down).
    pub line: usize,
    pub anchor: Anchor,
}

/// Why a file was left alone. Skips are expected outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The marker annotation is not present in the file.
    MarkerAbsent,
    /// The marker was present and removed, but no field qualified.
    NoFields,
    /// The file name is on the exclusion list.
    Excluded,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MarkerAbsent => write!(f, "marker absent"),
            SkipReason::NoFields => write!(f, "no qualifying fields found"),
            SkipReason::Excluded => write!(f, "excluded"),
        }
    }
}

/// Per-file result of one driver pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Boilerplate for this many fields was synthesized and spliced in.
    Processed(usize),
    Skipped(SkipReason),
}

/// End-of-run tally, returned by the batch runner instead of being
/// accumulated in process-wide counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RewriteSummary {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RewriteSummary {
    pub fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Processed(_) => self.processed += 1,
            FileOutcome::Skipped(_) => self.skipped += 1,
        }
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    pub fn total(&self) -> usize {
        self.processed + self.skipped + self.failed
    }
}

/// Structural failures during transformation. These indicate a file that
/// violates the layout conventions the rewriter assumes, and abort that
/// file only; the batch continues.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RewriteError {
    #[error("no closing brace found to insert accessors before")]
    AnchorNotFound,
    #[error("file name has no class name stem")]
    MissingClassName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_per_mode() {
        assert_eq!(
            TransformMode::Constructors.marker(),
            "@RequiredArgsConstructor"
        );
        assert_eq!(TransformMode::Accessors.marker(), "@Data");
    }

    #[test]
    fn test_summary_records_outcomes() {
        let mut summary = RewriteSummary::default();
        summary.record(&FileOutcome::Processed(3));
        summary.record(&FileOutcome::Skipped(SkipReason::MarkerAbsent));
        summary.record(&FileOutcome::Skipped(SkipReason::NoFields));
        summary.record_failure();

        assert_eq!(summary.processed, 1);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total(), 4);
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(SkipReason::MarkerAbsent.to_string(), "marker absent");
        assert_eq!(
            SkipReason::NoFields.to_string(),
            "no qualifying fields found"
        );
    }
}
