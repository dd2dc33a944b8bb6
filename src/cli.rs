use clap::Parser;
use std::path::PathBuf;

/// Prepend the refine license banner to source files, keeping everything
/// from the first `#include` onward.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Files to rewrite in place, processed in order
    #[arg(required = true)]
    pub filenames: Vec<PathBuf>,
}
