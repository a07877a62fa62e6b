//! `test`: build the solution and check it against the downloaded cases

use anyhow::Result;

use super::output::Output;
use super::process::Cmd;
use crate::domain::ProblemId;
use crate::storage::Project;

/// Default time limit in seconds
pub const DEFAULT_TIME_LIMIT: f64 = 2.0;

/// Options for `assist test`
#[derive(Debug, Clone, PartialEq)]
pub struct TestOptions {
    /// Allowed absolute or relative error
    pub error: Option<f64>,
    pub time_limit: f64,
    pub release: bool,
    /// Passed through to `oj test`
    pub extra: Vec<String>,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            error: None,
            time_limit: DEFAULT_TIME_LIMIT,
            release: false,
            extra: Vec::new(),
        }
    }
}

pub fn build_command(project: &Project, id: &ProblemId, release: bool) -> Cmd {
    Cmd::new(&project.config().command.cargo)
        .arg("build")
        .arg_if(release, "--release")
        .args(["--bin", id.raw()])
        .cwd(project.root())
}

pub fn test_command(project: &Project, id: &ProblemId, options: &TestOptions) -> Cmd {
    let mut cmd = Cmd::new(&project.config().command.online_judge_tools)
        .arg("test")
        .arg("-c")
        .arg(Project::binary_path(id, options.release))
        .arg("--directory")
        .arg(&project.config().path.testcase_dir);

    if let Some(error) = options.error {
        cmd = cmd.arg("--error").arg(error.to_string());
    }

    cmd.arg("--tle")
        .arg(options.time_limit.to_string())
        .args(&options.extra)
        .cwd(project.root())
}

pub fn run(output: &Output, project: &Project, id: &ProblemId, options: &TestOptions) -> Result<()> {
    build_command(project, id, options.release).run(output)?;
    test_command(project, id, options).run(output)?;

    if output.is_json() {
        output.data(&serde_json::json!({ "id": id.raw(), "passed": true }));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Project) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Cargo.toml"), "[package]\nname = \"s\"\n").unwrap();
        let project = Project::open(dir.path()).unwrap();
        (dir, project)
    }

    #[test]
    fn build_command_line() {
        let (_dir, project) = setup();
        let id: ProblemId = "abc042-c".parse().unwrap();

        assert_eq!(build_command(&project, &id, false).display(), "cargo build --bin abc042-c");
        assert_eq!(
            build_command(&project, &id, true).display(),
            "cargo build --release --bin abc042-c"
        );
    }

    #[test]
    fn test_command_defaults() {
        let (_dir, project) = setup();
        let id: ProblemId = "abc042-c".parse().unwrap();

        assert_eq!(
            test_command(&project, &id, &TestOptions::default()).display(),
            "oj test -c ./target/debug/abc042-c --directory test --tle 2"
        );
    }

    #[test]
    fn test_command_with_options() {
        let (_dir, project) = setup();
        let id: ProblemId = "arc100-b".parse().unwrap();
        let options = TestOptions {
            error: Some(1e-6),
            time_limit: 3.5,
            release: true,
            extra: vec!["--ignore-spaces".to_string()],
        };

        assert_eq!(
            test_command(&project, &id, &options).display(),
            "oj test -c ./target/release/arc100-b --directory test --error 0.000001 --tle 3.5 --ignore-spaces"
        );
    }
}
