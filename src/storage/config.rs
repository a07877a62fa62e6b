//! Configuration handling for the assist CLI
//!
//! Configuration is read from `assist.toml` in the project root, falling
//! back to `~/.config/atcoder-assist/config.toml` (global) and then to the
//! built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name of the project-level configuration
pub const PROJECT_CONFIG_FILE: &str = "assist.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// External programs driven by the CLI
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CommandConfig {
    /// Build tool
    pub cargo: String,

    /// online-judge-tools executable (downloads, tests and submits)
    pub online_judge_tools: String,

    /// Program that opens a URL in the browser
    pub open_url: String,

    /// Arguments placed before the URL
    pub open_url_args: Vec<String>,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            cargo: "cargo".to_string(),
            online_judge_tools: "oj".to_string(),
            open_url: default_open_url().to_string(),
            open_url_args: default_open_url_args(),
        }
    }
}

// `explorer` exits with 1 even on success, so Windows goes through `start`.
fn default_open_url() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "cmd"
    } else {
        "xdg-open"
    }
}

fn default_open_url_args() -> Vec<String> {
    if cfg!(target_os = "windows") {
        // The empty argument is the window title `start` expects first.
        ["/c", "start", ""].iter().map(|s| s.to_string()).collect()
    } else {
        Vec::new()
    }
}

/// Locations relative to the project root
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathConfig {
    /// Manifest that the `[[bin]]` targets are registered in
    pub manifest: PathBuf,

    /// Directory test cases are downloaded into
    pub testcase_dir: PathBuf,

    /// Root directory of submission files
    pub submission_dir: PathBuf,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from("Cargo.toml"),
            testcase_dir: PathBuf::from("test"),
            submission_dir: PathBuf::from("src/bin"),
        }
    }
}

pub const DEFAULT_SUBMISSION_TEMPLATE: &str = r#"use proconio::input;

fn main() {
    input! {
    }
}
"#;

/// Templates for generated files
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TemplateConfig {
    /// Initial content of a new submission file
    pub submission_file: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            submission_file: DEFAULT_SUBMISSION_TEMPLATE.to_string(),
        }
    }
}

/// Combined configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub command: CommandConfig,
    pub path: PathConfig,
    pub template: TemplateConfig,
}

impl Config {
    /// Loads the configuration for a project root
    ///
    /// `assist.toml` in the root wins over the global file.
    pub fn load(project_root: &Path) -> Result<Self> {
        let project_path = project_root.join(PROJECT_CONFIG_FILE);
        if project_path.exists() {
            return Self::load_file(&project_path);
        }

        match Self::global_config_dir() {
            Some(dir) if dir.join("config.toml").exists() => Self::load_file(&dir.join("config.toml")),
            _ => Ok(Self::default()),
        }
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "atcoder-assist", "atcoder-assist")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let commands = [
            ("command.cargo", &self.command.cargo),
            ("command.online_judge_tools", &self.command.online_judge_tools),
            ("command.open_url", &self.command.open_url),
        ];

        for (key, value) in commands {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{} must not be empty", key)));
            }
        }

        if self.path.submission_dir.is_absolute() {
            return Err(ConfigError::Invalid(
                "path.submission_dir must be relative to the project root".to_string(),
            ));
        }

        Ok(())
    }
}
