//! Problem URL resolution
//!
//! URL Format: `https://atcoder.jp/contests/{contest_id}/tasks/{task_id}`
//!
//! The task id is normally `{contest_id}_{suffix}`, where the suffix follows
//! the family's [`NumberingPolicy`]. A few ABC problems were shared with a
//! concurrent ARC and are published under the ARC task id; those are listed
//! in [`ALIAS_RULES`].

use std::ops::RangeInclusive;

use thiserror::Error;

use super::numbering::NumberingPolicy;
use super::problem_id::{ContestFamily, ProblemId, ProblemSlot};

pub const PROBLEM_URL_BASE: &str = "https://atcoder.jp/contests";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("{contest_id} uses numbered tasks and has no 'ex' problem")]
    UnsupportedLegacyExSlot { contest_id: String },
}

/// Redirects a range of problems to the task id of another contest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRule {
    pub family: ContestFamily,
    pub numbers: RangeInclusive<u32>,
    /// `(source slot, target slot)` pairs; slots not listed are not aliased
    pub slots: &'static [(char, char)],
    pub target_family: ContestFamily,
    pub offset: u32,
}

impl AliasRule {
    /// Returns the aliased task id, or None if the rule does not apply
    pub fn task_id(&self, id: &ProblemId) -> Option<String> {
        if id.family() != self.family || !self.numbers.contains(&id.number()) {
            return None;
        }

        let ProblemSlot::Letter(letter) = id.slot() else {
            return None;
        };

        self.slots
            .iter()
            .find(|(from, _)| *from == letter)
            .map(|(_, to)| format!("{}{:03}_{}", self.target_family, id.number() + self.offset, to))
    }
}

/// ABC 042-050 C/D were the same problems as ARC 058-066 A/B
pub static ALIAS_RULES: &[AliasRule] = &[AliasRule {
    family: ContestFamily::Abc,
    numbers: 42..=50,
    slots: &[('c', 'a'), ('d', 'b')],
    target_family: ContestFamily::Arc,
    offset: 16,
}];

/// Maps problem ids to their URLs
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    policy: NumberingPolicy,
    aliases: &'a [AliasRule],
}

impl Default for Resolver<'static> {
    fn default() -> Self {
        Self::new(NumberingPolicy::ATCODER, ALIAS_RULES)
    }
}

impl<'a> Resolver<'a> {
    pub fn new(policy: NumberingPolicy, aliases: &'a [AliasRule]) -> Self {
        Self { policy, aliases }
    }

    pub fn policy(&self) -> &NumberingPolicy {
        &self.policy
    }

    /// Returns the platform task id, e.g. `abc015_3` or `arc058_a`
    pub fn task_id(&self, id: &ProblemId) -> Result<String, ResolveError> {
        if let Some(task_id) = self.aliases.iter().find_map(|rule| rule.task_id(id)) {
            return Ok(task_id);
        }

        let contest_id = id.contest_id();
        let suffix = if self.policy.uses_letters(id.family(), id.number()) {
            id.slot().to_string()
        } else {
            id.slot()
                .ordinal()
                .ok_or_else(|| ResolveError::UnsupportedLegacyExSlot {
                    contest_id: contest_id.clone(),
                })?
                .to_string()
        };

        Ok(format!("{}_{}", contest_id, suffix))
    }

    /// Returns the problem page URL
    pub fn resolve(&self, id: &ProblemId) -> Result<String, ResolveError> {
        let task_id = self.task_id(id)?;
        Ok(format!("{}/{}/tasks/{}", PROBLEM_URL_BASE, id.contest_id(), task_id))
    }
}

/// Resolves `id` with the atcoder.jp numbering and alias tables
pub fn problem_url(id: &ProblemId) -> Result<String, ResolveError> {
    Resolver::default().resolve(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(raw: &str) -> String {
        problem_url(&raw.parse().unwrap()).unwrap()
    }

    #[test]
    fn alias_first_in_range() {
        assert_eq!(url("abc042-c"), "https://atcoder.jp/contests/abc042/tasks/arc058_a");
        assert_eq!(url("abc042-d"), "https://atcoder.jp/contests/abc042/tasks/arc058_b");
    }

    #[test]
    fn alias_last_in_range() {
        assert_eq!(url("abc050-d"), "https://atcoder.jp/contests/abc050/tasks/arc066_b");
    }

    #[test]
    fn alias_only_applies_to_c_and_d() {
        assert_eq!(url("abc045-a"), "https://atcoder.jp/contests/abc045/tasks/abc045_a");
        assert_eq!(url("abc045-b"), "https://atcoder.jp/contests/abc045/tasks/abc045_b");
    }

    #[test]
    fn no_alias_outside_range() {
        assert_eq!(url("abc041-c"), "https://atcoder.jp/contests/abc041/tasks/abc041_c");
        assert_eq!(url("abc051-c"), "https://atcoder.jp/contests/abc051/tasks/abc051_c");
    }

    #[test]
    fn no_alias_for_other_families() {
        assert_eq!(url("arc042-c"), "https://atcoder.jp/contests/arc042/tasks/arc042_c");
    }

    #[test]
    fn legacy_numbering_uses_ordinals() {
        assert_eq!(url("abc015-c"), "https://atcoder.jp/contests/abc015/tasks/abc015_3");
        assert_eq!(url("abc019-a"), "https://atcoder.jp/contests/abc019/tasks/abc019_1");
        assert_eq!(url("arc034-d"), "https://atcoder.jp/contests/arc034/tasks/arc034_4");
    }

    #[test]
    fn letters_from_boundary_on() {
        assert_eq!(url("abc020-a"), "https://atcoder.jp/contests/abc020/tasks/abc020_a");
        assert_eq!(url("arc035-b"), "https://atcoder.jp/contests/arc035/tasks/arc035_b");
        assert_eq!(url("abc300-ex"), "https://atcoder.jp/contests/abc300/tasks/abc300_ex");
    }

    #[test]
    fn agc_has_no_legacy_range() {
        assert_eq!(url("agc001-a"), "https://atcoder.jp/contests/agc001/tasks/agc001_a");
        assert_eq!(url("agc063-f"), "https://atcoder.jp/contests/agc063/tasks/agc063_f");
    }

    #[test]
    fn legacy_ex_slot_is_rejected() {
        let id: ProblemId = "abc019-ex".parse().unwrap();

        assert_eq!(
            problem_url(&id),
            Err(ResolveError::UnsupportedLegacyExSlot {
                contest_id: "abc019".to_string()
            })
        );
    }

    #[test]
    fn boundary_is_monotonic() {
        let resolver = Resolver::default();

        for family in ContestFamily::ALL {
            let boundary = resolver.policy().boundary(family);
            for number in boundary.saturating_sub(5)..boundary + 5 {
                // Keep clear of the ABC alias range.
                let raw = format!("{}{:03}-b", family, number);
                let task_id = resolver.task_id(&raw.parse().unwrap()).unwrap();
                let expected = if number < boundary { "2" } else { "b" };
                assert_eq!(task_id, format!("{}{:03}_{}", family, number, expected), "{}", raw);
            }
        }
    }

    #[test]
    fn custom_policy_is_honoured() {
        let policy = NumberingPolicy {
            abc: 100,
            ..NumberingPolicy::ATCODER
        };
        let resolver = Resolver::new(policy, &[]);

        let id: ProblemId = "abc050-d".parse().unwrap();
        assert_eq!(
            resolver.resolve(&id).unwrap(),
            "https://atcoder.jp/contests/abc050/tasks/abc050_4"
        );
    }

    #[test]
    fn custom_alias_rules() {
        let rules = [AliasRule {
            family: ContestFamily::Arc,
            numbers: 100..=101,
            slots: &[('a', 'c')],
            target_family: ContestFamily::Agc,
            offset: 0,
        }];
        let resolver = Resolver::new(NumberingPolicy::ATCODER, &rules);

        let id: ProblemId = "arc101-a".parse().unwrap();
        assert_eq!(
            resolver.resolve(&id).unwrap(),
            "https://atcoder.jp/contests/arc101/tasks/agc101_c"
        );

        let id: ProblemId = "arc102-a".parse().unwrap();
        assert_eq!(
            resolver.resolve(&id).unwrap(),
            "https://atcoder.jp/contests/arc102/tasks/arc102_a"
        );
    }
}
