//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for spot-concierge
#[derive(Parser, Debug)]
#[command(name = "spot-concierge")]
#[command(author, version, about = "LINE bot that finds nearby spots by category")]
#[command(long_about = r#"
Spot Concierge answers a LINE chat in two steps: the user picks a category
from the quick-reply menu, then shares a location. Nearby places are looked up,
each one gets a short generated description, and the results are sent back
in batches.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./concierge.toml    Project-level config
3. ~/.config/spot-concierge/config.toml   Global config

Secrets are read from LINE_CHANNEL_ACCESS_TOKEN, GOOGLE_API_KEY and
OPENAI_API_KEY when they are not set in a file.

Example:
  spot-concierge --bind 127.0.0.1:8080 -v
  spot-concierge --show-config
"#)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Listen address, overriding server.bind and PORT
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
