use crate::core::{FileOutcome, RewriteSummary};
use anyhow::Result;
use colored::*;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

/// Reporting surface for a batch run: one entry per file, then a tally.
pub trait Reporter {
    fn file_outcome(&mut self, path: &Path, outcome: &FileOutcome);
    fn file_error(&mut self, path: &Path, error: &anyhow::Error);
    fn finish(&mut self, summary: &RewriteSummary) -> Result<()>;
}

pub fn create_reporter(format: OutputFormat) -> Box<dyn Reporter> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalReporter),
        OutputFormat::Json => Box::new(JsonReporter::new(std::io::stdout())),
    }
}

/// Per-file status lines as the batch progresses.
pub struct TerminalReporter;

impl Reporter for TerminalReporter {
    fn file_outcome(&mut self, path: &Path, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Processed(fields) => {
                println!(
                    "{} {} ({} fields)",
                    "rewrote".green(),
                    path.display(),
                    fields
                );
            }
            FileOutcome::Skipped(reason) => {
                println!(
                    "{} {} ({})",
                    "skipped".yellow(),
                    path.display(),
                    reason
                );
            }
        }
    }

    fn file_error(&mut self, path: &Path, error: &anyhow::Error) {
        eprintln!("{} {}: {:#}", "error".red(), path.display(), error);
    }

    fn finish(&mut self, summary: &RewriteSummary) -> Result<()> {
        println!();
        println!(
            "Done: {} rewritten, {} skipped, {} failed",
            summary.processed, summary.skipped, summary.failed
        );
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct FileEntry {
    file: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    files: &'a [FileEntry],
    summary: &'a RewriteSummary,
}

/// Collects entries and emits a single JSON document at the end.
pub struct JsonReporter<W: Write> {
    writer: W,
    entries: Vec<FileEntry>,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            entries: Vec::new(),
        }
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn file_outcome(&mut self, path: &Path, outcome: &FileOutcome) {
        let entry = match outcome {
            FileOutcome::Processed(fields) => FileEntry {
                file: path.display().to_string(),
                status: "processed",
                fields: Some(*fields),
                reason: None,
            },
            FileOutcome::Skipped(reason) => FileEntry {
                file: path.display().to_string(),
                status: "skipped",
                fields: None,
                reason: Some(reason.to_string()),
            },
        };
        self.entries.push(entry);
    }

    fn file_error(&mut self, path: &Path, error: &anyhow::Error) {
        self.entries.push(FileEntry {
            file: path.display().to_string(),
            status: "failed",
            fields: None,
            reason: Some(format!("{:#}", error)),
        });
    }

    fn finish(&mut self, summary: &RewriteSummary) -> Result<()> {
        let report = JsonReport {
            files: &self.entries,
            summary,
        };
        let json = serde_json::to_string_pretty(&report)?;
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SkipReason;
    use std::path::PathBuf;

    #[test]
    fn test_json_reporter_emits_entries_and_summary() {
        let mut buffer = Vec::new();
        {
            let mut reporter = JsonReporter::new(&mut buffer);
            reporter.file_outcome(&PathBuf::from("A.java"), &FileOutcome::Processed(2));
            reporter.file_outcome(
                &PathBuf::from("B.java"),
                &FileOutcome::Skipped(SkipReason::MarkerAbsent),
            );

            let summary = RewriteSummary {
                processed: 1,
                skipped: 1,
                failed: 0,
            };
            reporter.finish(&summary).unwrap();
        }

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["files"][0]["status"], "processed");
        assert_eq!(value["files"][0]["fields"], 2);
        assert_eq!(value["files"][1]["reason"], "marker absent");
        assert_eq!(value["summary"]["processed"], 1);
    }
}
