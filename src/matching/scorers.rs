use std::collections::HashSet;

use super::scoring::ScoringConfig;
use crate::extraction::requirements::{education_rank, highest_education_level, JobRequirements};
use crate::tokenize::{clean_tokens, tokenize};
use crate::ParsedResume;

// Experience curve: neutral baseline, surplus rewarded up to a cap, shortfall
// penalized down to zero.
const EXPERIENCE_NEUTRAL: f64 = 75.0;
const EXPERIENCE_SURPLUS_POINTS_PER_YEAR: f64 = 5.0;
const EXPERIENCE_SURPLUS_CAP: f64 = 25.0;
const EXPERIENCE_SHORTFALL_POINTS_PER_YEAR: f64 = 15.0;

// Education curve: each level step is worth a fixed number of points around
// the base; the floor only drops to NO_EDUCATION_SCORE when the resume has no
// education entries at all.
const EDUCATION_NEUTRAL: f64 = 75.0;
const NO_EDUCATION_SCORE: f64 = 30.0;
const EDUCATION_BASE: f64 = 80.0;
const EDUCATION_BONUS_PER_LEVEL: f64 = 10.0;
const EDUCATION_PENALTY_PER_LEVEL: f64 = 20.0;
const EDUCATION_FLOOR: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperienceScore {
    pub score: f64,
    /// Years the candidate falls short of the requirement, 0 when met.
    pub gap: f64,
}

/// Score demonstrated experience years against the inferred requirement.
pub fn score_experience(resume: &ParsedResume, requirements: &JobRequirements) -> ExperienceScore {
    let required = requirements.min_experience_years;
    let actual = resume.total_experience_years.unwrap_or(0.0);

    if required <= 0.0 {
        return ExperienceScore {
            score: EXPERIENCE_NEUTRAL,
            gap: 0.0,
        };
    }

    if actual >= required {
        let bonus = ((actual - required) * EXPERIENCE_SURPLUS_POINTS_PER_YEAR)
            .min(EXPERIENCE_SURPLUS_CAP);
        ExperienceScore {
            score: (EXPERIENCE_NEUTRAL + bonus).min(100.0),
            gap: 0.0,
        }
    } else {
        let gap = required - actual;
        ExperienceScore {
            score: (EXPERIENCE_NEUTRAL - gap * EXPERIENCE_SHORTFALL_POINTS_PER_YEAR).max(0.0),
            gap,
        }
    }
}

/// Score the candidate's highest attained education level against the
/// inferred requirement.
pub fn score_education(resume: &ParsedResume, requirements: &JobRequirements) -> f64 {
    let Some(required) = requirements.education_requirement.as_deref() else {
        return EDUCATION_NEUTRAL;
    };

    if resume.education.is_empty() {
        return NO_EDUCATION_SCORE;
    }

    let mut highest = 0u8;
    for entry in &resume.education {
        let text = format!(
            "{} {}",
            entry.institution.to_lowercase(),
            entry.context.to_lowercase()
        );
        highest = highest.max(highest_education_level(&text));
    }

    let required_rank = education_rank(required);

    if highest >= required_rank {
        let bonus = f64::from(highest - required_rank) * EDUCATION_BONUS_PER_LEVEL;
        (EDUCATION_BASE + bonus).min(100.0)
    } else {
        let penalty = f64::from(required_rank - highest) * EDUCATION_PENALTY_PER_LEVEL;
        (EDUCATION_BASE - penalty).max(EDUCATION_FLOOR)
    }
}

fn token_set(text: &str) -> HashSet<String> {
    clean_tokens(&tokenize(text)).into_iter().collect()
}

/// Jaccard overlap between resume keywords (skills + summary + experience
/// titles) and job-description keywords, scaled so moderate overlap does not
/// read as a failing score.
pub fn score_keywords(resume: &ParsedResume, job_description: &str, config: &ScoringConfig) -> f64 {
    let mut resume_text = resume.skills.join(" ");
    if let Some(summary) = resume.summary.as_deref() {
        resume_text.push(' ');
        resume_text.push_str(summary);
    }
    for exp in &resume.experience {
        resume_text.push(' ');
        resume_text.push_str(&exp.title);
    }

    let resume_tokens = token_set(&resume_text);
    let jd_tokens = token_set(job_description);

    if jd_tokens.is_empty() {
        return config.neutral_keyword_score;
    }

    let overlap = resume_tokens.intersection(&jd_tokens).count();
    let union = resume_tokens.union(&jd_tokens).count();
    if union == 0 {
        return 0.0;
    }

    let jaccard = overlap as f64 / union as f64 * 100.0;
    (jaccard * config.keyword_multiplier).min(100.0)
}

/// Relevance of the professional summary to the job description, measured as
/// summary-token coverage of the job tokens.
pub fn score_summary(resume: &ParsedResume, job_description: &str, config: &ScoringConfig) -> f64 {
    let Some(summary) = resume.summary.as_deref().filter(|s| !s.trim().is_empty()) else {
        return config.neutral_summary_score;
    };

    let jd_tokens = token_set(job_description);
    if jd_tokens.is_empty() {
        return config.neutral_summary_score;
    }

    let summary_tokens = token_set(summary);
    let overlap = summary_tokens.intersection(&jd_tokens).count();
    let relevance = overlap as f64 / jd_tokens.len() as f64 * 100.0;

    (relevance * config.summary_multiplier).min(100.0)
}
