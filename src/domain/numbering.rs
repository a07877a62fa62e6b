//! Task numbering conventions per contest family
//!
//! Early contests of a family published their tasks with numeric suffixes
//! (`abc015_3`); later ones use the slot letter itself (`abc051_c`). The
//! boundary is the first contest number using letters.

use super::problem_id::ContestFamily;

/// Smallest contest number (inclusive) per family whose task ids use the slot letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberingPolicy {
    pub abc: u32,
    pub arc: u32,
    pub agc: u32,
}

impl NumberingPolicy {
    /// Boundaries used by atcoder.jp
    pub const ATCODER: NumberingPolicy = NumberingPolicy {
        abc: 20,
        arc: 35,
        agc: 1,
    };

    pub fn boundary(&self, family: ContestFamily) -> u32 {
        match family {
            ContestFamily::Abc => self.abc,
            ContestFamily::Arc => self.arc,
            ContestFamily::Agc => self.agc,
        }
    }

    /// Returns true if contest `number` of `family` uses letter suffixes
    pub fn uses_letters(&self, family: ContestFamily, number: u32) -> bool {
        number >= self.boundary(family)
    }
}

impl Default for NumberingPolicy {
    fn default() -> Self {
        Self::ATCODER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atcoder_boundaries() {
        let policy = NumberingPolicy::default();

        assert_eq!(policy.boundary(ContestFamily::Abc), 20);
        assert_eq!(policy.boundary(ContestFamily::Arc), 35);
        assert_eq!(policy.boundary(ContestFamily::Agc), 1);
    }

    #[test]
    fn boundary_is_inclusive() {
        let policy = NumberingPolicy::ATCODER;

        assert!(!policy.uses_letters(ContestFamily::Abc, 19));
        assert!(policy.uses_letters(ContestFamily::Abc, 20));
        assert!(!policy.uses_letters(ContestFamily::Arc, 34));
        assert!(policy.uses_letters(ContestFamily::Arc, 35));
        assert!(policy.uses_letters(ContestFamily::Agc, 1));
    }

    #[test]
    fn agc_zero_is_below_boundary() {
        assert!(!NumberingPolicy::ATCODER.uses_letters(ContestFamily::Agc, 0));
    }
}
