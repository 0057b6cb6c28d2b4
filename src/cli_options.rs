//! Command-line options of the `hanoi-graph` binary.
//!
//! # Examples
//!
//! Print the node and edge counts of the classic three disk, three rod graph:
//!
//! ```text
//! $ hanoi-graph -d 3 -r 3
//! ```
//!
//! Write a Graphviz file for four disks on four rods:
//!
//! ```text
//! $ hanoi-graph -d 4 -r 4 -f dot -o hanoi.dot
//! ```

use clap::{Parser, ValueEnum};
use std::env;
use std::path::PathBuf;

use hanoi_graph::core::{DEFAULT_DISK_COUNT, DEFAULT_ROD_COUNT};

/// Enumerate every state of the Tower of Hanoi puzzle and the moves between them.
#[derive(Parser, Debug)]
#[command(name = "hanoi-graph", version, long_about = None)]
pub struct Args {
    /// Number of disks
    #[arg(short, long = "disks", value_name = "DISKS", default_value_t = DEFAULT_DISK_COUNT)]
    pub disks: usize,

    /// Number of rods
    #[arg(short, long = "rods", value_name = "RODS", default_value_t = DEFAULT_ROD_COUNT)]
    pub rods: usize,

    /// What to print once the graph is saturated
    #[arg(value_enum, short, long, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// Write the output to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show a live progress panel while the graph is built
    #[arg(long, default_value_t = false)]
    pub tui: bool,

    /// Append the progress panel statistics to this file
    #[arg(long, requires = "tui")]
    pub progress_log: Option<PathBuf>,

    /// Open the interactive graph viewer once the graph is saturated
    #[arg(long, default_value_t = false)]
    pub view: bool,

    /// Enable debug messages
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Node, edge and layer counts
    Summary,
    /// Graphviz source
    Dot,
    /// Nodes and links as JSON
    Json,
    /// Tower labels, then one line per edge
    Labels,
}

/// Initialise `env_logger`, forcing debug output when asked to.
pub fn init_logging(debug: bool) {
    if debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();
}
