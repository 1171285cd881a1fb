pub mod extraction;
pub mod logging;
pub mod matching;
pub mod tokenize;
pub mod vocabulary;

use serde::{Deserialize, Serialize};

pub use extraction::{JobRequirements, RequirementOverrides};
pub use matching::{
    MatchDebugInfo, MatchResult, ResumeScorer, ScoreError, ScoringConfig, ScoringWeights,
    DEFAULT_WEIGHTS,
};

/// One work-experience record from the external resume parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: String,
    pub context: String,
}

/// One education record from the external resume parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub institution: String,
    pub context: String,
}

/// Structured resume record produced by an external parser.
///
/// Every field may be absent or empty; the engine substitutes neutral
/// defaults instead of erroring on missing data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedResume {
    pub skills: Vec<String>,
    pub summary: Option<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    /// Bounded excerpt of the full document text, used for supplemental
    /// skill mining.
    pub raw_text: String,
    pub total_experience_years: Option<f64>,
}

/// Score a resume against a job description with the default weights.
pub fn score(resume: &ParsedResume, job_description: &str) -> MatchResult {
    ResumeScorer::default().calculate_match_score(resume, job_description)
}

/// Score a resume against a job description with caller-supplied weights.
pub fn score_with_weights(
    resume: &ParsedResume,
    job_description: &str,
    weights: ScoringWeights,
) -> MatchResult {
    ResumeScorer::new(weights).calculate_match_score(resume, job_description)
}
