//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Hierarchical survey aggregation: level values, quartiles and chart series
#[derive(Parser, Debug)]
#[command(name = "surveypie")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file (default: ./.surveypie.toml if present)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// JSON tree description (default: data_file from config)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the level hierarchy with values
    Tree,

    /// Per-question count, mean and five-number summary
    Summary {
        /// Level path below the root, e.g. "Teaching/Planning"
        #[arg(short, long)]
        level: Option<String>,
        /// Restrict to one respondent group
        #[arg(short, long)]
        group: Option<String>,
    },

    /// Sunburst projection as JSON
    Sunburst {
        /// Level path below the root
        #[arg(short, long)]
        level: Option<String>,
        /// Current navigation level
        #[arg(long, default_value_t = 0)]
        current: usize,
        /// Additional levels to include below the current one
        #[arg(long, default_value_t = 1)]
        depth: usize,
    },

    /// Radar and boxplot detail series as JSON
    Details {
        /// Level path below the root
        #[arg(short, long)]
        level: Option<String>,
    },

    /// Navigation ring series as JSON
    Ring {
        /// Level path below the root
        #[arg(short, long)]
        level: Option<String>,
        /// Selected child name (draws the level minimized)
        #[arg(short, long)]
        selected: Option<String>,
    },

    /// Gradient pie slices as JSON
    Gradient {
        /// Level path below the root
        #[arg(short, long)]
        level: Option<String>,
        /// Restrict averages to one respondent group
        #[arg(short, long)]
        group: Option<String>,
        /// Angle value of every slice
        #[arg(long, default_value_t = 100.0)]
        angle: f64,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Print a commented config template
    Template,
    /// Show config file locations
    Path,
}
