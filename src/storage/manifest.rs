//! `[[bin]]` target registration in the Cargo manifest
//!
//! Each problem is its own binary target named after the raw problem id.
//! Tables are appended and removed as plain text so the rest of the manifest
//! (comments, ordering) is left untouched.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::domain::ProblemId;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Manifest not found: {0}")]
    NotFound(PathBuf),
}

/// Returns the `[[bin]]` table for a problem, starting with a newline
///
/// `source_path` is relative to the manifest and always written with `/`.
pub fn bin_target_table(id: &ProblemId, source_path: &str) -> String {
    format!(
        "\n[[bin]]\nname = \"{}\"\npath = \"{}\"\n",
        id.raw(),
        source_path
    )
}

/// A Cargo manifest on disk
pub struct Manifest {
    path: PathBuf,
}

impl Manifest {
    /// Opens an existing manifest
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(ManifestError::NotFound(path).into());
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read manifest: {}", self.path.display()))
    }

    fn write(&self, content: &str) -> Result<()> {
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write manifest: {}", self.path.display()))
    }

    /// Returns true if the exact table is already present
    pub fn contains(&self, table: &str) -> Result<bool> {
        Ok(self.read()?.contains(table))
    }

    /// Appends `table` unless it is already present
    ///
    /// The table starts with its own newline, so nothing else in the file is
    /// touched and [`Manifest::remove_table`] restores it byte for byte.
    /// Returns true if the manifest changed.
    pub fn add_table(&self, table: &str) -> Result<bool> {
        let mut content = self.read()?;
        if content.contains(table) {
            return Ok(false);
        }

        content.push_str(table);

        self.write(&content)?;
        Ok(true)
    }

    /// Removes every occurrence of `table`
    ///
    /// Returns true if the manifest changed.
    pub fn remove_table(&self, table: &str) -> Result<bool> {
        let content = self.read()?;
        if !content.contains(table) {
            return Ok(false);
        }

        self.write(&content.replace(table, ""))?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MANIFEST: &str = "[package]\nname = \"solutions\"\nversion = \"0.1.0\"\n";

    fn setup() -> (TempDir, Manifest) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Cargo.toml");
        fs::write(&path, MANIFEST).unwrap();
        let manifest = Manifest::open(&path).unwrap();
        (dir, manifest)
    }

    fn table() -> String {
        let id: ProblemId = "abc042-c".parse().unwrap();
        bin_target_table(&id, "src/bin/abc-042/abc042-c.rs")
    }

    #[test]
    fn table_format() {
        assert_eq!(
            table(),
            "\n[[bin]]\nname = \"abc042-c\"\npath = \"src/bin/abc-042/abc042-c.rs\"\n"
        );
    }

    #[test]
    fn add_is_idempotent() {
        let (_dir, manifest) = setup();

        assert!(manifest.add_table(&table()).unwrap());
        assert!(!manifest.add_table(&table()).unwrap());

        let content = fs::read_to_string(manifest.path()).unwrap();
        assert_eq!(content.matches("[[bin]]").count(), 1);
        assert!(content.starts_with(MANIFEST));
    }

    #[test]
    fn add_then_remove_restores_manifest() {
        let (_dir, manifest) = setup();

        manifest.add_table(&table()).unwrap();
        assert!(manifest.contains(&table()).unwrap());

        assert!(manifest.remove_table(&table()).unwrap());
        assert!(!manifest.remove_table(&table()).unwrap());
        assert_eq!(fs::read_to_string(manifest.path()).unwrap(), MANIFEST);
    }

    #[test]
    fn unterminated_last_line_roundtrips() {
        let (_dir, manifest) = setup();
        let unterminated = "[package]\nname = \"x\"";
        fs::write(manifest.path(), unterminated).unwrap();

        manifest.add_table(&table()).unwrap();
        let content = fs::read_to_string(manifest.path()).unwrap();
        assert!(content.starts_with("[package]\nname = \"x\"\n[[bin]]\n"));

        manifest.remove_table(&table()).unwrap();
        assert_eq!(fs::read_to_string(manifest.path()).unwrap(), unterminated);
    }

    #[test]
    fn missing_manifest_is_an_error() {
        let dir = TempDir::new().unwrap();

        assert!(Manifest::open(dir.path().join("Cargo.toml")).is_err());
    }
}
