// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod extract;
pub mod io;
pub mod synth;
pub mod transform;

// Re-export commonly used types
pub use crate::config::RewriteConfig;
pub use crate::core::{
    Anchor, FieldDecl, FileOutcome, InsertionPoint, RewriteError, RewriteSummary, SkipReason,
    TransformMode,
};
pub use crate::extract::extract_fields;
pub use crate::io::output::{create_reporter, OutputFormat, Reporter};
pub use crate::synth::{synthesize, SynthesizedBlock};
pub use crate::transform::{rewrite_file, transform_source, Transformed};
