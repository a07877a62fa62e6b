//! External command execution
//!
//! A small builder over [`std::process::Command`]. Child processes inherit
//! the terminal so cargo and online-judge-tools output reaches the user as-is.
//! With `--format json` their stdout is redirected to stderr.
//!
//! ```ignore
//! Cmd::new("cargo")
//!     .args(["build", "--bin", "abc042-c"])
//!     .cwd(project.root())
//!     .run(output)?;
//! ```

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Result;
use thiserror::Error;

use super::output::Output;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Process terminated with return code {code}.")]
    Failed { program: String, code: i32 },

    #[error("Process `{program}` was terminated by a signal.")]
    Killed { program: String },
}

/// Command builder for external process execution
#[derive(Debug, Default)]
pub struct Cmd {
    program: OsString,
    args: Vec<OsString>,
    cwd: Option<PathBuf>,
}

impl Cmd {
    pub fn new<S: AsRef<OsStr>>(program: S) -> Self {
        Self {
            program: program.as_ref().to_owned(),
            ..Default::default()
        }
    }

    pub fn arg<S: AsRef<OsStr>>(mut self, arg: S) -> Self {
        self.args.push(arg.as_ref().to_owned());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(args.into_iter().map(|a| a.as_ref().to_owned()));
        self
    }

    /// Adds `arg` only when `cond` holds
    pub fn arg_if<S: AsRef<OsStr>>(self, cond: bool, arg: S) -> Self {
        if cond {
            self.arg(arg)
        } else {
            self
        }
    }

    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    /// Command line as shown to the user
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(|s| s.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Runs the command to completion, failing on a non-zero exit
    pub fn run(&self, output: &Output) -> Result<()> {
        output.verbose_ctx("exec", &self.display());

        let program = self.program.to_string_lossy().into_owned();
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(dir) = &self.cwd {
            command.current_dir(dir);
        }
        // stdout carries the JSON result
        if output.is_json() {
            command.stdout(std::io::stderr());
        }

        let status = command.status().map_err(|source| ProcessError::Spawn {
            program: program.clone(),
            source,
        })?;

        if status.success() {
            return Ok(());
        }

        match status.code() {
            Some(code) => Err(ProcessError::Failed { program, code }.into()),
            None => Err(ProcessError::Killed { program }.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::output::OutputFormat;

    #[test]
    fn builds_argument_list() {
        let cmd = Cmd::new("cargo")
            .args(["build", "--bin"])
            .arg("abc042-c")
            .arg_if(true, "--release")
            .arg_if(false, "--offline");

        assert_eq!(cmd.program(), "cargo");
        assert_eq!(cmd.get_args().len(), 4);
        assert_eq!(cmd.display(), "cargo build --bin abc042-c --release");
    }

    #[cfg(unix)]
    #[test]
    fn reports_exit_code() {
        let output = Output::new(OutputFormat::Text, false);

        assert!(Cmd::new("true").run(&output).is_ok());

        let err = Cmd::new("false").run(&output).unwrap_err();
        match err.downcast_ref::<ProcessError>() {
            Some(ProcessError::Failed { code, .. }) => assert_eq!(*code, 1),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.to_string(), "Process terminated with return code 1.");
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let output = Output::new(OutputFormat::Text, false);
        let err = Cmd::new("assist-test-no-such-program").run(&output).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ProcessError>(),
            Some(ProcessError::Spawn { .. })
        ));
    }
}
