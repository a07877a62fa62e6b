//! `prepare` and `remove`: submission file and bin target lifecycle

use std::fs;

use anyhow::{Context, Result};

use super::output::Output;
use super::{download, open};
use crate::domain::{problem_url, ProblemId};
use crate::storage::Project;

/// Registers the bin target, creates the submission file, then optionally
/// opens the problem page and downloads the test cases
pub fn run(
    output: &Output,
    project: &Project,
    id: &ProblemId,
    open_page: bool,
    download_testcases: bool,
) -> Result<()> {
    let manifest = project.manifest()?;
    let table = project.bin_target_table(id);
    let added_target = manifest.add_table(&table)?;
    if added_target {
        output.info(&format!(
            "Added binary target \"{}\" to `{}`.",
            id,
            manifest.path().display()
        ));
    } else {
        output.verbose_ctx("prepare", "Binary target already registered");
    }

    let submission_path = project.submission_path(id);
    let mut created_file = false;
    if let Some(parent) = submission_path.parent() {
        if !parent.exists() {
            output.info(&format!("Create directory `{}`.", parent.display()));
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    if !submission_path.exists() {
        output.info(&format!("Create file `{}`.", submission_path.display()));
        fs::write(&submission_path, &project.config().template.submission_file).with_context(
            || format!("Failed to write submission file: {}", submission_path.display()),
        )?;
        created_file = true;
    }

    let url = problem_url(id)?;

    if open_page {
        open::open_url(output, project, &url)?;
    }

    if download_testcases {
        download::download_testcases(output, project, &url, &[])?;
    }

    if output.is_json() {
        output.data(&serde_json::json!({
            "id": id.raw(),
            "url": url,
            "submission_file": submission_path.display().to_string(),
            "added_target": added_target,
            "created_file": created_file,
            "downloaded": download_testcases,
        }));
    }

    Ok(())
}

/// Deletes the submission file and unregisters the bin target
pub fn remove(output: &Output, project: &Project, id: &ProblemId) -> Result<()> {
    let submission_path = project.submission_path(id);
    let removed_file = submission_path.is_file();
    if removed_file {
        fs::remove_file(&submission_path).with_context(|| {
            format!("Failed to remove submission file: {}", submission_path.display())
        })?;
        output.info(&format!("Removed file `{}`.", submission_path.display()));

        if let Some(parent) = submission_path.parent() {
            let is_empty = match fs::read_dir(parent) {
                Ok(mut entries) => entries.next().is_none(),
                Err(e) => {
                    output.verbose_ctx(
                        "remove",
                        &format!("Keeping {}: {}", parent.display(), e),
                    );
                    false
                }
            };
            if is_empty {
                fs::remove_dir(parent)
                    .with_context(|| format!("Failed to remove directory: {}", parent.display()))?;
                output.info(&format!("Removed directory `{}`.", parent.display()));
            }
        }
    } else {
        output.verbose_ctx("remove", &format!("No file at {}", submission_path.display()));
    }

    let manifest = project.manifest()?;
    let removed_target = manifest.remove_table(&project.bin_target_table(id))?;
    if removed_target {
        output.info(&format!(
            "Removed binary target \"{}\" from `{}`.",
            id,
            manifest.path().display()
        ));
    }

    if output.is_json() {
        output.data(&serde_json::json!({
            "id": id.raw(),
            "removed_file": removed_file,
            "removed_target": removed_target,
        }));
    } else if !removed_file && !removed_target {
        output.info(&format!("Nothing to remove for \"{}\".", id));
    }

    Ok(())
}
