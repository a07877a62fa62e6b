//! Problem identifiers
//!
//! ID Format: `{family}{3-digit-number}-{slot}`
//! - Family: `abc`, `arc` or `agc`
//! - Slot: a single letter `a`..`h`, or `ex` for the extra problem
//!
//! Examples: `abc042-c`, `arc035-a`, `abc300-ex`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Lexical grammar for problem identifiers
pub const PROBLEM_ID_PATTERN: &str = r"^(abc|arc|agc)([0-9]{3})-([a-h]|ex)$";

fn problem_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PROBLEM_ID_PATTERN).expect("problem id pattern is valid"))
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdError {
    #[error("\"{0}\" is incorrect as a contest ID.")]
    Malformed(String),
}

/// Contest series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContestFamily {
    Abc,
    Arc,
    Agc,
}

impl ContestFamily {
    pub const ALL: [ContestFamily; 3] = [ContestFamily::Abc, ContestFamily::Arc, ContestFamily::Agc];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContestFamily::Abc => "abc",
            ContestFamily::Arc => "arc",
            ContestFamily::Agc => "agc",
        }
    }
}

impl fmt::Display for ContestFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContestFamily {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abc" => Ok(ContestFamily::Abc),
            "arc" => Ok(ContestFamily::Arc),
            "agc" => Ok(ContestFamily::Agc),
            _ => Err(IdError::Malformed(s.to_string())),
        }
    }
}

/// Position of a problem within a contest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemSlot {
    /// `a`..`h`
    Letter(char),
    /// The extra problem, written `ex`
    Ex,
}

impl ProblemSlot {
    /// 1-based position of the slot letter in the alphabet (`a` -> 1)
    ///
    /// `Ex` and letters outside `a`..`z` have no ordinal.
    pub fn ordinal(&self) -> Option<u32> {
        match self {
            ProblemSlot::Letter(c) if c.is_ascii_lowercase() => Some(*c as u32 - 'a' as u32 + 1),
            ProblemSlot::Letter(_) | ProblemSlot::Ex => None,
        }
    }
}

impl fmt::Display for ProblemSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemSlot::Letter(c) => write!(f, "{}", c),
            ProblemSlot::Ex => f.write_str("ex"),
        }
    }
}

/// A parsed problem identifier such as `abc042-c`
///
/// The raw text is kept verbatim; it names the binary target and the
/// submission file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProblemId {
    raw: String,
    family: ContestFamily,
    number: u32,
    slot: ProblemSlot,
}

impl ProblemId {
    /// Returns the identifier exactly as it was given
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn family(&self) -> ContestFamily {
        self.family
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn slot(&self) -> ProblemSlot {
        self.slot
    }

    /// Returns the contest id, e.g. `abc042`
    pub fn contest_id(&self) -> String {
        format!("{}{:03}", self.family, self.number)
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for ProblemId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || IdError::Malformed(s.to_string());
        let caps = problem_id_regex().captures(s).ok_or_else(malformed)?;

        let family = caps[1].parse()?;
        let number = caps[2].parse::<u32>().map_err(|_| malformed())?;
        let slot = match &caps[3] {
            "ex" => ProblemSlot::Ex,
            letter => ProblemSlot::Letter(letter.chars().next().ok_or_else(malformed)?),
        };

        Ok(Self {
            raw: s.to_string(),
            family,
            number,
            slot,
        })
    }
}

impl TryFrom<String> for ProblemId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProblemId> for String {
    fn from(id: ProblemId) -> Self {
        id.raw
    }
}
