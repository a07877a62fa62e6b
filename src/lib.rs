//! atcoder-assist - A workflow CLI for solving AtCoder problems in Rust
//!
//! A problem is named by a short ID such as `abc042-c`. From it the CLI
//! derives the problem page URL, the binary target and the submission file,
//! and drives cargo and online-judge-tools with them.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{problem_url, ContestFamily, IdError, ProblemId, ProblemSlot, ResolveError, Resolver};
