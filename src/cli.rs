use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "unlombok")]
#[command(about = "Replace Lombok annotations with explicit Java boilerplate", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace @RequiredArgsConstructor with an all-fields constructor
    Constructors {
        /// Directory containing the class files
        path: PathBuf,

        /// Filename suffix to select candidate files
        #[arg(long, default_value = "Service.java")]
        suffix: String,

        /// File names to leave untouched (repeatable)
        #[arg(long = "exclude", value_name = "FILE")]
        exclude: Vec<String>,

        /// Report what would change without writing anything
        #[arg(long = "dry-run")]
        dry_run: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: ReportFormat,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Replace @Data with explicit getters and setters
    Accessors {
        /// Directory containing the class files
        path: PathBuf,

        /// Filename suffix to select candidate files
        #[arg(long, default_value = ".java")]
        suffix: String,

        /// File names to leave untouched (repeatable)
        #[arg(long = "exclude", value_name = "FILE")]
        exclude: Vec<String>,

        /// Report what would change without writing anything
        #[arg(long = "dry-run")]
        dry_run: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: ReportFormat,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

impl From<ReportFormat> for crate::io::output::OutputFormat {
    fn from(f: ReportFormat) -> Self {
        match f {
            ReportFormat::Terminal => crate::io::output::OutputFormat::Terminal,
            ReportFormat::Json => crate::io::output::OutputFormat::Json,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
