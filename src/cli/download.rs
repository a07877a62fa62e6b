//! `download`: fetch sample test cases with online-judge-tools

use std::fs;

use anyhow::{Context, Result};

use super::output::Output;
use super::process::Cmd;
use crate::domain::{problem_url, ProblemId};
use crate::storage::Project;

pub fn run(output: &Output, project: &Project, id: &ProblemId, options: &[String]) -> Result<()> {
    let url = problem_url(id)?;
    download_testcases(output, project, &url, options)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "id": id.raw(),
            "url": url,
            "testcase_dir": project.testcase_dir().display().to_string(),
        }));
    }

    Ok(())
}

/// Replaces the test case directory with the cases of `url`
pub(super) fn download_testcases(
    output: &Output,
    project: &Project,
    url: &str,
    options: &[String],
) -> Result<()> {
    let testcase_dir = project.testcase_dir();
    if testcase_dir.exists() {
        output.verbose_ctx("download", &format!("Removing {}", testcase_dir.display()));
        fs::remove_dir_all(&testcase_dir).with_context(|| {
            format!("Failed to remove test case directory: {}", testcase_dir.display())
        })?;
    }

    Cmd::new(&project.config().command.online_judge_tools)
        .arg("download")
        .arg(url)
        .arg("--directory")
        .arg(&project.config().path.testcase_dir)
        .args(options)
        .cwd(project.root())
        .run(output)
}
