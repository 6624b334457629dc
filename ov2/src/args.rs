use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect Victoria II interface definitions (.gfx sprites and .gui layouts).
#[derive(Parser, Debug, PartialEq)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the .gfx and .gui files
    #[arg(long, global = true, default_value = "interface")]
    pub interface_dir: PathBuf,

    /// Also load files from subdirectories
    #[arg(long, global = true)]
    pub recursive: bool,

    /// Skip files that fail to parse instead of stopping at the first one
    #[arg(long, global = true)]
    pub keep_going: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Parse every file and print what was loaded.
    Check,

    /// Dump all sprites and widgets as JSON.
    Dump {
        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the sprite and widget with the given name as JSON.
    ///
    /// Widgets are searched through every window, not just the top level.
    Lookup {
        /// Exact, case-sensitive name (e.g. GFX_topbar_bg, topbar).
        name: String,
    },

    /// Print the widget hierarchy, one widget per line.
    Tree,
}
