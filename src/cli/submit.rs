//! `submit`: hand the submission file to online-judge-tools

use anyhow::{bail, Result};

use super::output::Output;
use super::process::Cmd;
use crate::domain::{problem_url, ProblemId};
use crate::storage::Project;

pub fn run(output: &Output, project: &Project, id: &ProblemId, options: &[String]) -> Result<()> {
    let submission_path = project.submission_path(id);
    if !submission_path.is_file() {
        bail!(
            "Submission file not found: {}. Run 'assist prepare {}' first.",
            submission_path.display(),
            id
        );
    }

    let url = problem_url(id)?;
    Cmd::new(&project.config().command.online_judge_tools)
        .arg("submit")
        .arg(&url)
        .arg(project.submission_relative_path(id))
        .args(options)
        .cwd(project.root())
        .run(output)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "id": id.raw(),
            "url": url,
            "submission_file": submission_path.display().to_string(),
        }));
    }

    Ok(())
}
