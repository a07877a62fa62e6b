//! Project management
//!
//! A project is the Cargo package holding the solutions. Its root is the
//! nearest directory, starting from the working directory, that contains a
//! `Cargo.toml`.

use std::path::{Path, PathBuf};

use anyhow::Result;
use thiserror::Error;

use super::manifest::{bin_target_table, Manifest};
use super::Config;
use crate::domain::ProblemId;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("Not in a Cargo project (no Cargo.toml found in {0} or its parents)")]
    NotInProject(PathBuf),
}

/// A solutions project
pub struct Project {
    root: PathBuf,
    config: Config,
}

impl Project {
    /// Opens the project rooted at `root`
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let config = Config::load(&root)?;

        Ok(Self { root, config })
    }

    /// Opens the project at the current directory or a parent
    pub fn open_current() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let root = Self::find_root(&cwd).ok_or(ProjectError::NotInProject(cwd))?;

        Self::open(root)
    }

    /// Finds the nearest ancestor of `start` containing `Cargo.toml`
    pub fn find_root(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| dir.join("Cargo.toml").is_file())
            .map(Path::to_path_buf)
    }

    /// Returns the project root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the manifest the bin targets are registered in
    pub fn manifest(&self) -> Result<Manifest> {
        Manifest::open(self.root.join(&self.config.path.manifest))
    }

    pub fn testcase_dir(&self) -> PathBuf {
        self.root.join(&self.config.path.testcase_dir)
    }

    /// Submission file path relative to the root, with `/` separators
    ///
    /// `src/bin/{family}-{number:03}/{raw}.rs`
    pub fn submission_relative_path(&self, id: &ProblemId) -> String {
        let dir = self
            .config
            .path
            .submission_dir
            .to_string_lossy()
            .replace('\\', "/");
        format!(
            "{}/{}-{:03}/{}.rs",
            dir.trim_end_matches('/'),
            id.family(),
            id.number(),
            id.raw()
        )
    }

    pub fn submission_path(&self, id: &ProblemId) -> PathBuf {
        self.root.join(self.submission_relative_path(id))
    }

    /// Returns the `[[bin]]` table registered for a problem
    pub fn bin_target_table(&self, id: &ProblemId) -> String {
        bin_target_table(id, &self.submission_relative_path(id))
    }

    /// Path of the built binary, e.g. `./target/debug/abc042-c`
    pub fn binary_path(id: &ProblemId, release: bool) -> String {
        let profile = if release { "release" } else { "debug" };
        format!("./target/{}/{}", profile, id.raw())
    }
}
