use std::path::PathBuf;

use clap::Parser;

pub const USAGE: &str = "Usage: js2ts <directory> [ignore-pattern1] [ignore-pattern2] ...";
pub const USAGE_EXAMPLE: &str = "Example: js2ts ./src dist build node_modules";

#[derive(Debug, Parser)]
#[command(name = "js2ts")]
#[command(version = "0.1.0")]
#[command(about = "Rename .js/.jsx files to .ts/.tsx")]
pub struct Cli {
    /// Directory to scan
    pub directory: Option<String>,

    /// Extra ignore patterns, added to node_modules, dist, build and out
    #[arg(allow_hyphen_values = true)]
    pub ignore: Vec<String>,

    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Copy to the new extension without deleting the original
    #[arg(long, default_value_t = false)]
    pub keep_originals: bool,

    /// Exit with status 1 if any file fails to convert
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Maximum number of files converted at the same time
    #[arg(long, value_name = "N")]
    pub max_concurrency: Option<usize>,

    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}
