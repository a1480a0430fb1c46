use anyhow::Result;
use log::LevelFilter;
use std::collections::HashSet;
use unlombok::cli::{self, Commands};
use unlombok::commands::rewrite;
use unlombok::config::RewriteConfig;
use unlombok::core::TransformMode;

fn main() -> Result<()> {
    let cli = cli::parse_args();
    let (config, verbosity) = build_config(cli.command);
    init_logging(verbosity);

    let summary = rewrite::run(&config)?;

    // Exit status reflects whether the batch ran; partial success is the
    // normal outcome and not a failure.
    log::debug!(
        "batch finished: {} rewritten, {} skipped, {} failed",
        summary.processed,
        summary.skipped,
        summary.failed
    );
    Ok(())
}

/// RUST_LOG still wins when set; `-v` flags raise the default level.
fn init_logging(verbosity: u8) {
    let level = log_level(verbosity);
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level.to_string()),
    )
    .init();
}

fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn build_config(command: Commands) -> (RewriteConfig, u8) {
    match command {
        Commands::Constructors {
            path,
            suffix,
            exclude,
            dry_run,
            format,
            verbosity,
        } => (
            RewriteConfig {
                root: path,
                mode: TransformMode::Constructors,
                suffix,
                exclude: to_set(exclude),
                dry_run,
                format: format.into(),
            },
            verbosity,
        ),
        Commands::Accessors {
            path,
            suffix,
            exclude,
            dry_run,
            format,
            verbosity,
        } => (
            RewriteConfig {
                root: path,
                mode: TransformMode::Accessors,
                suffix,
                exclude: to_set(exclude),
                dry_run,
                format: format.into(),
            },
            verbosity,
        ),
    }
}

fn to_set(names: Vec<String>) -> HashSet<String> {
    names.into_iter().collect()
}
