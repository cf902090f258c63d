//! Command-line argument parsing for chatterm.
//!
//! Responsibilities:
//! - Define the CLI argument structure using clap derive macros.
//!
//! Does NOT handle:
//! - Configuration loading (see `runtime::config`).
//!
//! Invariants:
//! - Arguments are parsed once at startup via `Cli::parse()`.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for chatterm.
///
/// Config path precedence (highest to lowest):
/// 1. `--config-path`
/// 2. `CHATTERM_CONFIG_PATH`
/// 3. The platform config directory
#[derive(Debug, Parser)]
#[command(
    name = "chatterm",
    about = "Terminal chat client with remappable keybindings",
    version,
    after_help = "Examples:\n  chatterm\n  chatterm --config-path ~/.config/chatterm/config.json\n  chatterm --check-keybindings\n  chatterm --print-keybindings > keys.md\n"
)]
pub struct Cli {
    /// Path to a custom configuration file
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Check the configured keybindings for conflicts and exit
    #[arg(long, conflicts_with = "print_keybindings")]
    pub check_keybindings: bool,

    /// Print the effective keybindings as Markdown and exit
    #[arg(long)]
    pub print_keybindings: bool,
}
