//! `open`: show the problem page in the browser

use anyhow::Result;

use super::output::Output;
use super::process::Cmd;
use crate::domain::{problem_url, ProblemId};
use crate::storage::Project;

pub fn run(output: &Output, project: &Project, id: &ProblemId) -> Result<()> {
    let url = problem_url(id)?;
    open_url(output, project, &url)?;

    if output.is_json() {
        output.data(&serde_json::json!({ "id": id.raw(), "url": url }));
    }

    Ok(())
}

pub(super) fn open_url(output: &Output, project: &Project, url: &str) -> Result<()> {
    output.verbose_ctx("open", url);
    open_command(project, url).run(output)
}

pub fn open_command(project: &Project, url: &str) -> Cmd {
    let command = &project.config().command;

    Cmd::new(&command.open_url)
        .args(&command.open_url_args)
        .arg(url)
        .cwd(project.root())
}
