//! assist - AtCoder solution workflow CLI

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = atcoder_assist::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
