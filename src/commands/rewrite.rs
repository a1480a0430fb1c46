//! Batch runner: walk the directory, transform each candidate file,
//! report per-file outcomes and an end-of-run tally.

use crate::config::RewriteConfig;
use crate::core::{FileOutcome, RewriteSummary, SkipReason};
use crate::io::output::{create_reporter, Reporter};
use crate::io::walker::FileWalker;
use crate::transform::rewrite_file;
use anyhow::Result;

/// Run one full batch. Per-file failures are reported and counted but never
/// abort the run; the returned summary is the only success signal.
pub fn run(config: &RewriteConfig) -> Result<RewriteSummary> {
    let mut reporter = create_reporter(config.format);
    run_with_reporter(config, reporter.as_mut())
}

pub fn run_with_reporter(
    config: &RewriteConfig,
    reporter: &mut dyn Reporter,
) -> Result<RewriteSummary> {
    let files = FileWalker::new(config.root.clone())
        .with_suffix(config.suffix.clone())
        .walk()?;

    log::debug!(
        "{} candidate files under {} (mode: {})",
        files.len(),
        config.root.display(),
        config.mode
    );

    let mut summary = RewriteSummary::default();

    for path in &files {
        if config.is_excluded(path) {
            let outcome = FileOutcome::Skipped(SkipReason::Excluded);
            reporter.file_outcome(path, &outcome);
            summary.record(&outcome);
            continue;
        }

        match rewrite_file(path, config.mode, config.dry_run) {
            Ok(outcome) => {
                reporter.file_outcome(path, &outcome);
                summary.record(&outcome);
            }
            Err(error) => {
                reporter.file_error(path, &error);
                summary.record_failure();
            }
        }
    }

    reporter.finish(&summary)?;
    Ok(summary)
}
