use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "solidz", bin_name = "solidz", version)]
#[command(about = "Run shape-container scripts (add, rem, print)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a script file (defaults to the configured input file)
    #[command(alias = "r")]
    Run {
        /// Path of the script
        file: Option<PathBuf>,
    },

    /// Run script lines given as arguments
    #[command(alias = "x")]
    Exec {
        /// Lines to run, in order (e.g. "add sphere 1 1 A" print)
        #[arg(required = true, num_args = 1..)]
        lines: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (input-file, color)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
