//! Main CLI application structure

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::test_cmd::{TestOptions, DEFAULT_TIME_LIMIT};
use super::{download, open, prepare, run_cmd, submit, test_cmd};
use crate::domain::{ProblemId, Resolver};
use crate::storage::Project;

#[derive(Parser)]
#[command(name = "assist")]
#[command(author, version, about = "Prepare, test and submit AtCoder solutions")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the submission file, open the problem page and download the test cases
    #[command(visible_alias = "p")]
    Prepare {
        /// Problem ID (e.g. abc042-c)
        id: String,

        /// Open the problem page
        #[arg(long, short)]
        open: bool,

        /// Skip downloading the test cases
        #[arg(long)]
        no_download: bool,
    },

    /// Open the problem page in the browser
    #[command(visible_alias = "o")]
    Open {
        /// Problem ID (e.g. abc042-c)
        id: String,
    },

    /// Download the test cases for the problem
    #[command(visible_alias = "d")]
    Download {
        /// Problem ID (e.g. abc042-c)
        id: String,

        /// Other options passed to online-judge-tools
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        other_options: Vec<String>,
    },

    /// Test the solution program
    #[command(visible_alias = "t")]
    Test {
        /// Problem ID (e.g. abc042-c)
        id: String,

        /// Allowable absolute or relative error
        #[arg(long, short)]
        error: Option<f64>,

        /// Maximum execution time of the program in seconds
        #[arg(long, short, default_value_t = DEFAULT_TIME_LIMIT)]
        time_limit: f64,

        /// Build and test in release mode
        #[arg(long, short)]
        release: bool,

        /// Other options passed to online-judge-tools (e.g. --ignore-spaces)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        other_options: Vec<String>,
    },

    /// Submit the solution
    #[command(visible_alias = "s")]
    Submit {
        /// Problem ID (e.g. abc042-c)
        id: String,

        /// Other options passed to online-judge-tools
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        other_options: Vec<String>,
    },

    /// Remove the submission file and its binary target
    #[command(visible_alias = "rm")]
    Remove {
        /// Problem ID (e.g. abc042-c)
        id: String,
    },

    /// Run the solution program
    #[command(visible_alias = "r")]
    Run {
        /// Problem ID (e.g. abc042-c)
        id: String,

        /// Build and run in release mode
        #[arg(long, short)]
        release: bool,
    },

    /// Print the problem page URL
    #[command(visible_alias = "u")]
    Url {
        /// Problem ID (e.g. abc042-c)
        id: String,
    },
}

impl Commands {
    fn raw_id(&self) -> &str {
        match self {
            Commands::Prepare { id, .. }
            | Commands::Open { id }
            | Commands::Download { id, .. }
            | Commands::Test { id, .. }
            | Commands::Submit { id, .. }
            | Commands::Remove { id }
            | Commands::Run { id, .. }
            | Commands::Url { id } => id,
        }
    }
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("assist starting");

    let id: ProblemId = cli.command.raw_id().parse()?;
    output.verbose_ctx("id", &format!("contest {} slot {}", id.contest_id(), id.slot()));

    let open_project = || -> Result<Project> {
        let project = Project::open_current()?;
        output.verbose_ctx("project", &format!("root: {}", project.root().display()));
        Ok(project)
    };

    match cli.command {
        Commands::Prepare { open, no_download, .. } => {
            prepare::run(&output, &open_project()?, &id, open, !no_download)?
        }
        Commands::Open { .. } => open::run(&output, &open_project()?, &id)?,
        Commands::Download { other_options, .. } => {
            download::run(&output, &open_project()?, &id, &other_options)?
        }
        Commands::Test {
            error,
            time_limit,
            release,
            other_options,
            ..
        } => {
            let options = TestOptions {
                error,
                time_limit,
                release,
                extra: other_options,
            };
            test_cmd::run(&output, &open_project()?, &id, &options)?
        }
        Commands::Submit { other_options, .. } => {
            submit::run(&output, &open_project()?, &id, &other_options)?
        }
        Commands::Remove { .. } => prepare::remove(&output, &open_project()?, &id)?,
        Commands::Run { release, .. } => run_cmd::run(&output, &open_project()?, &id, release)?,
        Commands::Url { .. } => print_url(&output, &id)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}

/// Prints the problem URL; needs no project
fn print_url(output: &Output, id: &ProblemId) -> Result<()> {
    let resolver = Resolver::default();
    let task_id = resolver.task_id(id)?;
    let url = resolver.resolve(id)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "id": id.raw(),
            "contest_id": id.contest_id(),
            "task_id": task_id,
            "url": url,
        }));
    } else {
        println!("{}", url);
    }

    Ok(())
}
