//! # Command-Line Interface
//!
//! User-facing commands. Every command takes a problem ID such as
//! `abc042-c`; an ID that does not parse aborts the command before anything
//! else happens.
//!
//! ## Commands
//!
//! | Command | Alias | Purpose |
//! |---------|-------|---------|
//! | `prepare` | `p` | Register the bin target, create the submission file, download test cases |
//! | `open` | `o` | Open the problem page |
//! | `download` | `d` | Download test cases with online-judge-tools |
//! | `test` | `t` | Build and test the solution |
//! | `submit` | `s` | Submit the solution |
//! | `remove` | `rm` | Remove the submission file and bin target |
//! | `run` | `r` | Run the solution |
//! | `url` | `u` | Print the problem URL |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) to echo the external commands being run:
//! ```bash
//! assist --verbose test abc042-c
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod process;
mod prepare;
mod open;
mod download;
mod test_cmd;
mod submit;
mod run_cmd;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
pub use process::{Cmd, ProcessError};
pub use test_cmd::TestOptions;
