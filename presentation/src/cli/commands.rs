//! CLI command definitions

use clap::Parser;
use millet_domain::ConcernTag;
use std::path::PathBuf;

fn parse_concern(s: &str) -> Result<ConcernTag, String> {
    s.parse::<ConcernTag>().map_err(|_| {
        let known = ConcernTag::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!("unknown health concern '{}' (expected one of: {})", s, known)
    })
}

/// CLI arguments for millet-advisor
#[derive(Parser, Debug)]
#[command(name = "millet-advisor")]
#[command(author, version, about = "Millet recommendations for your health concerns")]
#[command(long_about = r#"
Millet Advisor sends your health concerns to the recommendation backend and
shows which millets fit best, with review statistics, scientific evidence and
a link to each millet's products.

With --concern it runs once and exits; otherwise it starts an interactive
session where concerns are toggled with /toggle and fetched with /ask.

Configuration files are loaded from (in priority order):
1. MILLET_* environment variables (e.g. MILLET_API__ORIGIN)
2. --config <path>     Explicit config file
3. ./millet.toml       Project-level config
4. ~/.config/millet-advisor/config.toml   Global config

Example:
  millet-advisor --concern diabetes --concern heart
  millet-advisor -c gluten --query "breakfast ideas" --html results.html
  millet-advisor --origin http://localhost:8000
"#)]
pub struct Cli {
    /// Health concern to include (repeatable): diabetes, heart, digestive,
    /// anemia, weight, bones, gluten
    #[arg(short, long = "concern", value_name = "TAG", value_parser = parse_concern)]
    pub concerns: Vec<ConcernTag>,

    /// Free-text query sent along with the concerns
    #[arg(long, value_name = "TEXT")]
    pub query: Option<String>,

    /// Backend origin (overrides api.origin)
    #[arg(long, value_name = "URL")]
    pub origin: Option<String>,

    /// Write the rendered results as an HTML page (one-shot mode)
    #[arg(long, value_name = "PATH")]
    pub html: Option<PathBuf>,

    /// Start the interactive session even when concerns are given
    #[arg(long)]
    pub chat: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Append interaction records (JSONL) to this file
    #[arg(long, value_name = "PATH")]
    pub interaction_log: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Print product URLs instead of opening a browser
    #[arg(long)]
    pub no_browser: bool,

    /// List the millets known to the backend and exit
    #[arg(long)]
    pub list_millets: bool,

    /// Check that the backend is reachable and exit
    #[arg(long)]
    pub check: bool,
}

impl Cli {
    /// Concerns given and no --chat: fetch once and exit
    pub fn is_one_shot(&self) -> bool {
        !self.concerns.is_empty() && !self.chat
    }
}
