//! Per-exercise form evaluators.
//!
//! Each evaluator walks a fixed ordered list of geometric checks against its
//! resolved landmark bag, starting from a base score of 100 and subtracting
//! a fixed penalty whenever a tolerance is exceeded. Check order doubles as
//! suggestion priority.

pub(crate) mod lunge;
pub(crate) mod plank;
pub(crate) mod pushup;
pub(crate) mod squat;

pub(crate) const BASE_SCORE: i32 = 100;

/// Accumulator threaded through one evaluator run.
pub(crate) struct Evaluation {
    score: i32,
    issues: Vec<&'static str>,
    suggestions: Vec<&'static str>,
}

impl Evaluation {
    pub fn new() -> Self {
        Self {
            score: BASE_SCORE,
            issues: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Record a failed check: subtract its penalty and queue the matching
    /// issue tag and corrective suggestion.
    pub fn penalize(&mut self, penalty: i32, issue: &'static str, suggestion: &'static str) {
        self.score -= penalty;
        self.issues.push(issue);
        self.suggestions.push(suggestion);
    }

    /// Cap the score when too few landmarks were confidently detected.
    ///
    /// A poorly visible pose must not out-score what the detector can
    /// actually vouch for, so the score is clamped to slightly above the
    /// visibility percentage.
    pub fn dampen_for_visibility(
        &mut self,
        visibility: i32,
        min_visibility: i32,
        margin: i32,
        suggestion: &'static str,
    ) {
        if visibility < min_visibility {
            self.score = self.score.min(visibility + margin);
            self.suggestions.push(suggestion);
        }
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn issues(&self) -> &[&'static str] {
        &self.issues
    }

    pub fn suggestions(&self) -> &[&'static str] {
        &self.suggestions
    }
}
