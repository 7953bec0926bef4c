// src/cli/args.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "generate-files",
    version = crate::VERSION,
    about = "Write files.json listing a directory's files sorted by creation time"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Target directory (not scanned recursively)
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Print the manifest to stdout instead of writing files.json
    #[arg(long, conflicts_with = "check")]
    pub stdout: bool,

    /// Verify that files.json is up to date; exit with status 1 if not
    #[arg(long)]
    pub check: bool,

    /// Regenerate files.json whenever the directory changes
    #[arg(long, conflicts_with_all = ["check", "stdout"])]
    pub watch: bool,

    /// Debounce interval for watch mode, in seconds
    #[arg(long, value_name = "SECS", default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub watch_interval: u64,

    /// Fail instead of substituting the modification time when creation time is unavailable
    #[arg(long)]
    pub no_mtime_fallback: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}
