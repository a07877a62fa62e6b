//! `run`: execute the solution binary through cargo

use anyhow::Result;

use super::output::Output;
use super::process::Cmd;
use crate::domain::ProblemId;
use crate::storage::Project;

pub fn run(output: &Output, project: &Project, id: &ProblemId, release: bool) -> Result<()> {
    Cmd::new(&project.config().command.cargo)
        .arg("run")
        .arg_if(release, "--release")
        .args(["--bin", id.raw()])
        .cwd(project.root())
        .run(output)
}
