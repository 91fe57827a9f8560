//! # CLI Layer
//!
//! This is **one possible UI client** for solidz. It is the only place that
//! knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Behavior
//!
//! - `solidz` with no command runs the configured input file (`data.txt`
//!   unless `solidz.json` says otherwise).
//! - `solidz run <FILE>` runs a script file.
//! - `solidz exec "<line>" ...` runs lines given as arguments.
//! - `solidz config [KEY] [VALUE]` shows or sets configuration.
//!
//! A bad script line is reported and skipped; it does not change the exit
//! status. Failing to read the input does.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `print`: Event output (colors)
//! - `setup`: Argument parsing via clap

mod commands;
mod print;
pub mod setup;

pub use commands::run;
