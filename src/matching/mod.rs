pub mod scorers;
pub mod scoring;
pub mod similarity;
pub mod weights;

pub use scoring::{MatchDebugInfo, MatchResult, ResumeScorer, ScoreError, ScoringConfig};
pub use similarity::{match_skills, skill_similarity, SkillMatchOutcome};
pub use weights::{ScoringWeights, DEFAULT_WEIGHTS};
