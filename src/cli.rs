//! CLI argument parsing for changelog generation.
use clap::Parser;

/// Default repository slug to compare branches in.
pub const DEFAULT_REPO: &str = "facebook/react-native";
/// Default base branch of the comparison.
pub const DEFAULT_BASE_BRANCH: &str = "0.50-stable";
/// Default branch to compare against the base.
pub const DEFAULT_COMPARE_BRANCH: &str = "0.51-stable";

/// CLI arguments selecting the repository and branch range.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = DEFAULT_REPO)]
    /// GitHub repository slug (owner/repo).
    pub repo: String,

    #[arg(long, default_value = DEFAULT_BASE_BRANCH)]
    /// Base branch of the comparison.
    pub base: String,

    #[arg(long, default_value = DEFAULT_COMPARE_BRANCH)]
    /// Branch to compare against the base.
    pub compare: String,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}
