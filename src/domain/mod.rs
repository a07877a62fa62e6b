//! Domain models for the assist CLI
//!
//! Problem identifiers and their URLs, without any I/O concerns.

mod problem_id;
mod numbering;
mod url;

pub use problem_id::{ContestFamily, IdError, ProblemId, ProblemSlot, PROBLEM_ID_PATTERN};
pub use numbering::NumberingPolicy;
pub use url::{problem_url, AliasRule, ResolveError, Resolver, ALIAS_RULES, PROBLEM_URL_BASE};
