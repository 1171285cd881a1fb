use serde::{Deserialize, Serialize};

/// Default component weights. Skills coverage dominates, experience second;
/// by convention the five weights sum to 1.0 but the aggregator does not
/// enforce it — callers supplying their own weights keep them sane.
pub const DEFAULT_WEIGHTS: ScoringWeights = ScoringWeights {
    skills: 0.35,
    experience: 0.25,
    education: 0.15,
    keywords: 0.15,
    summary: 0.10,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub keywords: f64,
    pub summary: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.education + self.keywords + self.summary
    }

    /// Weights must be finite and non-negative; anything else is a caller bug
    /// surfaced as the sentinel error result at the scoring boundary.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("skills", self.skills),
            ("experience", self.experience),
            ("education", self.education),
            ("keywords", self.keywords),
            ("summary", self.summary),
        ] {
            if !value.is_finite() {
                return Err(format!("{name} weight is not finite"));
            }
            if value < 0.0 {
                return Err(format!("{name} weight is negative: {value}"));
            }
        }
        Ok(())
    }
}
