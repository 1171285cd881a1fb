use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use super::scorers::{
    score_education, score_experience, score_keywords, score_summary, ExperienceScore,
};
use super::similarity::match_skills;
use super::weights::ScoringWeights;
use crate::extraction::{
    extract_job_skills, extract_resume_skills, parse_job_requirements, RequirementOverrides,
};
use crate::ParsedResume;

// Recommendation thresholds, compared against unrounded component scores.
const SKILLS_RECOMMENDATION_THRESHOLD: f64 = 60.0;
const EXPERIENCE_RECOMMENDATION_THRESHOLD: f64 = 60.0;
const EDUCATION_RECOMMENDATION_THRESHOLD: f64 = 60.0;
const KEYWORDS_RECOMMENDATION_THRESHOLD: f64 = 50.0;
const SUMMARY_RECOMMENDATION_THRESHOLD: f64 = 50.0;

/// Load-bearing scoring constants. These are behavior, not tuning defaults:
/// changing any of them changes matched/missing partitions and scores.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Minimum best-match similarity for a job skill to count as matched.
    pub similarity_threshold: f64,
    /// Points awarded for a 100% match rate.
    pub match_rate_scale: f64,
    /// Points per resume-skill/job-skill ratio unit.
    pub abundance_multiplier: f64,
    /// Ceiling on the abundance bonus.
    pub abundance_bonus_cap: f64,
    /// Skills score when no skills could be extracted from the description.
    pub neutral_skills_score: f64,
    pub keyword_multiplier: f64,
    pub summary_multiplier: f64,
    pub neutral_keyword_score: f64,
    pub neutral_summary_score: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: env_similarity_threshold(),
            match_rate_scale: 85.0,
            abundance_multiplier: 10.0,
            abundance_bonus_cap: 15.0,
            neutral_skills_score: 50.0,
            keyword_multiplier: 2.0,
            summary_multiplier: 3.0,
            neutral_keyword_score: 50.0,
            neutral_summary_score: 50.0,
        }
    }
}

fn env_similarity_threshold() -> f64 {
    std::env::var("RM_SIMILARITY_THRESHOLD")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.7)
}

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("invalid scoring weights: {0}")]
    InvalidWeights(String),
    #[error("scoring pipeline panicked: {0}")]
    Panicked(String),
}

/// Diagnostic counts from skill matching. Informational only; downstream
/// consumers must not branch on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchDebugInfo {
    pub job_skills_found: usize,
    pub resume_skills_found: usize,
    pub job_skills_sample: Vec<String>,
    pub resume_skills_sample: Vec<String>,
    pub match_rate: f64,
    pub base_score: f64,
    pub abundance_bonus: f64,
    pub reason: Option<String>,
}

/// Final match result. Immutable once constructed; the report, chart, and
/// persistence layers consume it verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub overall_score: f64,
    pub skills_score: f64,
    pub experience_score: f64,
    pub education_score: f64,
    pub keywords_score: f64,
    pub summary_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub experience_gap: f64,
    pub recommendations: Vec<String>,
    pub debug_info: Option<MatchDebugInfo>,
}

impl MatchResult {
    /// Sentinel result for a failed analysis: all scores zeroed, the failure
    /// description as the sole recommendation. Keeps the pipeline total so
    /// downstream rendering never special-cases "no result".
    pub fn error_result(error: &ScoreError) -> Self {
        Self {
            overall_score: 0.0,
            skills_score: 0.0,
            experience_score: 0.0,
            education_score: 0.0,
            keywords_score: 0.0,
            summary_score: 0.0,
            matched_skills: vec![],
            missing_skills: vec![],
            experience_gap: 0.0,
            recommendations: vec![format!("Error in scoring: {error}")],
            debug_info: None,
        }
    }

    /// True when this carries the error sentinel shape.
    pub fn is_error(&self) -> bool {
        self.overall_score == 0.0
            && self.recommendations.len() == 1
            && self.recommendations[0].starts_with("Error in scoring:")
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Stateless scoring engine. Each call allocates its own working sets; the
/// only shared state is the read-only vocabulary, so instances are safe to
/// use across threads.
#[derive(Debug, Clone, Default)]
pub struct ResumeScorer {
    weights: ScoringWeights,
    config: ScoringConfig,
}

impl ResumeScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            config: ScoringConfig::default(),
        }
    }

    pub fn with_config(weights: ScoringWeights, config: ScoringConfig) -> Self {
        Self { weights, config }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a resume against a job description.
    ///
    /// Total function: input-shape problems degrade to neutral defaults and
    /// any truly unexpected failure is converted into the sentinel result at
    /// this boundary instead of propagating.
    pub fn calculate_match_score(&self, resume: &ParsedResume, job_description: &str) -> MatchResult {
        self.calculate_match_score_with_requirements(
            resume,
            job_description,
            &RequirementOverrides::default(),
        )
    }

    /// Same as [`calculate_match_score`](Self::calculate_match_score) but
    /// with caller-supplied requirement overrides taking precedence over the
    /// values inferred from the job description.
    pub fn calculate_match_score_with_requirements(
        &self,
        resume: &ParsedResume,
        job_description: &str,
        overrides: &RequirementOverrides,
    ) -> MatchResult {
        if let Err(reason) = self.weights.validate() {
            let err = ScoreError::InvalidWeights(reason);
            error!(error = %err, "match scoring failed");
            return MatchResult::error_result(&err);
        }

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.score_components(resume, job_description, overrides)
        }));

        match outcome {
            Ok(result) => result,
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| (*s).to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "panic payload not string".into());
                let err = ScoreError::Panicked(message);
                error!(error = %err, "match scoring failed");
                MatchResult::error_result(&err)
            }
        }
    }

    fn score_components(
        &self,
        resume: &ParsedResume,
        job_description: &str,
        overrides: &RequirementOverrides,
    ) -> MatchResult {
        let requirements = parse_job_requirements(job_description).apply_overrides(overrides);

        let job_skills = extract_job_skills(job_description);
        let resume_skills = extract_resume_skills(resume);
        let skills = match_skills(&job_skills, &resume_skills, &self.config);

        let experience = score_experience(resume, &requirements);
        let education_score = score_education(resume, &requirements);
        let keywords_score = score_keywords(resume, job_description, &self.config);
        let summary_score = score_summary(resume, job_description, &self.config);

        let overall = skills.score * self.weights.skills
            + experience.score * self.weights.experience
            + education_score * self.weights.education
            + keywords_score * self.weights.keywords
            + summary_score * self.weights.summary;

        let recommendations = generate_recommendations(
            skills.score,
            &skills.missing,
            &experience,
            education_score,
            keywords_score,
            summary_score,
        );

        MatchResult {
            overall_score: round2(overall),
            skills_score: round2(skills.score),
            experience_score: round2(experience.score),
            education_score: round2(education_score),
            keywords_score: round2(keywords_score),
            summary_score: round2(summary_score),
            matched_skills: skills.matched,
            missing_skills: skills.missing,
            experience_gap: experience.gap,
            recommendations,
            debug_info: Some(skills.debug),
        }
    }
}

/// Deterministic, ordered recommendation generation. The test order and
/// thresholds are fixed; each triggered condition appends one template.
fn generate_recommendations(
    skills_score: f64,
    missing_skills: &[String],
    experience: &ExperienceScore,
    education_score: f64,
    keywords_score: f64,
    summary_score: f64,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if skills_score < SKILLS_RECOMMENDATION_THRESHOLD && !missing_skills.is_empty() {
        let missing_count = missing_skills.len();
        let preview: Vec<&str> = missing_skills.iter().take(3).map(String::as_str).collect();
        let ellipsis = if missing_count > 3 { "..." } else { "" };
        recommendations.push(format!(
            "Skills gap identified. Missing {missing_count} key skills: {}{ellipsis}",
            preview.join(", ")
        ));
    }

    if experience.score < EXPERIENCE_RECOMMENDATION_THRESHOLD && experience.gap > 0.0 {
        recommendations.push(format!(
            "Experience gap: {:.1} years below requirement",
            experience.gap
        ));
    }

    if education_score < EDUCATION_RECOMMENDATION_THRESHOLD {
        recommendations.push("Education level may not meet job requirements".to_string());
    }

    if keywords_score < KEYWORDS_RECOMMENDATION_THRESHOLD {
        recommendations.push("Resume could better match job description keywords".to_string());
    }

    if summary_score < SUMMARY_RECOMMENDATION_THRESHOLD {
        recommendations.push(
            "Professional summary could be more aligned with job requirements".to_string(),
        );
    }

    if recommendations.is_empty() {
        recommendations.push("Strong candidate match across all criteria".to_string());
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EducationEntry, ExperienceEntry};

    fn strong_resume() -> ParsedResume {
        ParsedResume {
            skills: vec!["Python".into(), "JavaScript".into(), "React".into(), "SQL".into()],
            summary: Some("Experienced software developer with expertise in web development".into()),
            experience: vec![ExperienceEntry {
                title: "Software Developer".into(),
                context: "Built web services in python".into(),
            }],
            education: vec![EducationEntry {
                institution: "State University".into(),
                context: "Bachelor of Science".into(),
            }],
            raw_text: String::new(),
            total_experience_years: Some(5.0),
        }
    }

    const SAMPLE_JOB: &str = "We are looking for a Software Developer with:\n\
        - 3+ years of experience\n\
        - Python programming\n\
        - JavaScript and React\n\
        - Database knowledge (SQL)";

    #[test]
    fn scores_are_bounded_and_rounded() {
        let result = ResumeScorer::default().calculate_match_score(&strong_resume(), SAMPLE_JOB);

        for score in [
            result.overall_score,
            result.skills_score,
            result.experience_score,
            result.education_score,
            result.keywords_score,
            result.summary_score,
        ] {
            assert!((0.0..=100.0).contains(&score));
            assert_eq!(score, round2(score));
        }
    }

    #[test]
    fn matched_and_missing_partition_the_job_skills() {
        let result = ResumeScorer::default().calculate_match_score(&strong_resume(), SAMPLE_JOB);
        let job_skills = extract_job_skills(SAMPLE_JOB);

        let mut union: Vec<String> = result
            .matched_skills
            .iter()
            .chain(result.missing_skills.iter())
            .cloned()
            .collect();
        union.sort();
        assert_eq!(union, job_skills.into_iter().collect::<Vec<_>>());
        assert!(result
            .matched_skills
            .iter()
            .all(|s| !result.missing_skills.contains(s)));
    }

    #[test]
    fn empty_job_description_scores_neutral_skills() {
        let result = ResumeScorer::default().calculate_match_score(&strong_resume(), "");
        assert_eq!(result.skills_score, 50.0);
        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
        assert!(!result.is_error());
    }

    #[test]
    fn empty_resume_and_description_still_produce_a_result() {
        let result = ResumeScorer::default().calculate_match_score(&ParsedResume::default(), "");
        assert!(!result.is_error());
        assert!(!result.recommendations.is_empty());
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let scorer = ResumeScorer::default();
        let first = scorer.calculate_match_score(&strong_resume(), SAMPLE_JOB);
        let second = scorer.calculate_match_score(&strong_resume(), SAMPLE_JOB);
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_weights_yield_the_sentinel_result() {
        let mut weights = ScoringWeights::default();
        weights.skills = f64::NAN;
        let result = ResumeScorer::new(weights).calculate_match_score(&strong_resume(), SAMPLE_JOB);

        assert!(result.is_error());
        assert_eq!(result.overall_score, 0.0);
        assert_eq!(result.skills_score, 0.0);
        assert_eq!(result.experience_score, 0.0);
        assert_eq!(result.education_score, 0.0);
        assert_eq!(result.keywords_score, 0.0);
        assert_eq!(result.summary_score, 0.0);
        assert_eq!(result.recommendations.len(), 1);
        assert!(result.recommendations[0].contains("not finite"));
    }

    #[test]
    fn requirement_overrides_take_precedence() {
        let scorer = ResumeScorer::default();
        let overrides = RequirementOverrides {
            min_experience_years: Some(10.0),
            education_requirement: None,
        };
        let result = scorer.calculate_match_score_with_requirements(
            &strong_resume(),
            SAMPLE_JOB,
            &overrides,
        );
        assert_eq!(result.experience_gap, 5.0);
        assert_eq!(result.experience_score, 0.0);
    }

    #[test]
    fn skills_gap_recommendation_comes_alone_when_others_pass() {
        let missing = vec!["kubernetes".to_string(), "terraform".to_string()];
        let recommendations = generate_recommendations(
            40.0,
            &missing,
            &ExperienceScore { score: 80.0, gap: 0.0 },
            90.0,
            80.0,
            80.0,
        );
        assert_eq!(recommendations.len(), 1);
        assert!(recommendations[0].starts_with("Skills gap identified. Missing 2 key skills:"));
        assert!(recommendations[0].contains("kubernetes, terraform"));
        assert!(!recommendations[0].ends_with("..."));
    }

    #[test]
    fn recommendations_follow_the_fixed_order() {
        let missing = vec![
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            "d".to_string(),
        ];
        let recommendations = generate_recommendations(
            30.0,
            &missing,
            &ExperienceScore { score: 45.0, gap: 2.0 },
            40.0,
            30.0,
            20.0,
        );
        assert_eq!(recommendations.len(), 5);
        assert!(recommendations[0].contains("Missing 4 key skills: a, b, c..."));
        assert_eq!(recommendations[1], "Experience gap: 2.0 years below requirement");
        assert_eq!(recommendations[2], "Education level may not meet job requirements");
        assert_eq!(recommendations[3], "Resume could better match job description keywords");
        assert_eq!(
            recommendations[4],
            "Professional summary could be more aligned with job requirements"
        );
    }

    #[test]
    fn passing_candidate_gets_the_positive_fallback() {
        let recommendations = generate_recommendations(
            85.0,
            &[],
            &ExperienceScore { score: 90.0, gap: 0.0 },
            80.0,
            70.0,
            60.0,
        );
        assert_eq!(
            recommendations,
            vec!["Strong candidate match across all criteria".to_string()]
        );
    }

    #[test]
    fn overall_is_the_weighted_component_sum() {
        let result = ResumeScorer::default().calculate_match_score(&strong_resume(), SAMPLE_JOB);
        let weights = ScoringWeights::default();
        let expected = result.skills_score * weights.skills
            + result.experience_score * weights.experience
            + result.education_score * weights.education
            + result.keywords_score * weights.keywords
            + result.summary_score * weights.summary;
        // components are individually rounded, so allow rounding slack
        assert!((result.overall_score - expected).abs() < 0.05);
    }
}
