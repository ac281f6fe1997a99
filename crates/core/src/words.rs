//! Word counts per segment, compared against the duration's budget.
//!
//! Counting is a plain whitespace split with no punctuation handling, so it is
//! approximate (and meaningless for scripts without spaces, such as Thai or
//! Chinese). Budgets are guidance only: nothing is rejected or regenerated
//! for missing them.

use serde::Serialize;

use crate::{
    duration::DurationProfile,
    types::{ScriptSegments, WordCounts},
};

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn evaluate(segments: &ScriptSegments) -> WordCounts {
    let hook = count_words(&segments.hook);
    let body = count_words(&segments.body);
    let cta = count_words(&segments.cta);
    WordCounts {
        hook,
        body,
        cta,
        total: hook + body + cta,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetLine {
    pub actual: usize,
    pub target: usize,
}

impl BudgetLine {
    /// Words over (positive) or under (negative) the target
    pub fn difference(&self) -> i64 {
        self.actual as i64 - self.target as i64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BudgetReport {
    pub hook: BudgetLine,
    pub body: BudgetLine,
    pub cta: BudgetLine,
    pub total: BudgetLine,
}

pub fn budget(counts: &WordCounts, profile: &DurationProfile) -> BudgetReport {
    let line = |actual, target| BudgetLine { actual, target };
    BudgetReport {
        hook: line(counts.hook, profile.hook),
        body: line(counts.body, profile.body),
        cta: line(counts.cta, profile.cta),
        total: line(counts.total, profile.total),
    }
}
