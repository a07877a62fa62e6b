//! # Storage Layer
//!
//! Files the CLI reads and writes inside a solutions project.
//!
//! ## Files
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Config | TOML | `assist.toml` (project) or `~/.config/atcoder-assist/config.toml` |
//! | Bin targets | `[[bin]]` tables | `Cargo.toml` |
//! | Submissions | Rust source | `src/bin/{family}-{number}/{id}.rs` |
//! | Test cases | online-judge-tools layout | `test/` |
//!
//! ## Key Types
//!
//! - [`Project`] - Entry point for accessing a solutions project
//! - [`Manifest`] - Adds and removes `[[bin]]` tables
//! - [`Config`] - Project or global configuration

mod config;
mod manifest;
mod project;

pub use config::{CommandConfig, Config, ConfigError, PathConfig, TemplateConfig, PROJECT_CONFIG_FILE};
pub use manifest::{bin_target_table, Manifest, ManifestError};
pub use project::{Project, ProjectError};
