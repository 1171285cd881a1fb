use std::collections::{BTreeSet, HashSet};

use super::scoring::{MatchDebugInfo, ScoringConfig};

/// Fuzzy similarity between two skill strings, in [0, 1].
///
/// Exact equality wins outright, containment counts as a near-match, and
/// everything else falls back to character-set Jaccard — or word-set Jaccard
/// when either side is a multi-word phrase, whichever is greater. Symmetric
/// in its arguments.
pub fn skill_similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    if a == b {
        return 1.0;
    }

    if a.contains(&b) || b.contains(&a) {
        return 0.9;
    }

    let chars_a: HashSet<char> = a.chars().collect();
    let chars_b: HashSet<char> = b.chars().collect();
    let char_union = chars_a.union(&chars_b).count();
    let char_similarity = if char_union > 0 {
        chars_a.intersection(&chars_b).count() as f64 / char_union as f64
    } else {
        0.0
    };

    let words_a: HashSet<&str> = a.split_whitespace().collect();
    let words_b: HashSet<&str> = b.split_whitespace().collect();
    if words_a.len() > 1 || words_b.len() > 1 {
        let word_union = words_a.union(&words_b).count();
        let word_similarity = if word_union > 0 {
            words_a.intersection(&words_b).count() as f64 / word_union as f64
        } else {
            0.0
        };
        return char_similarity.max(word_similarity);
    }

    char_similarity
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatchOutcome {
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub debug: MatchDebugInfo,
}

/// Partition the job-skill set into matched/missing against the resume-skill
/// set and derive the skills sub-score.
///
/// An empty job-skill set is a zero-signal condition, not a poor match: the
/// outcome carries the neutral score and a debug reason so callers can tell
/// the two apart.
pub fn match_skills(
    job_skills: &BTreeSet<String>,
    resume_skills: &BTreeSet<String>,
    config: &ScoringConfig,
) -> SkillMatchOutcome {
    if job_skills.is_empty() {
        return SkillMatchOutcome {
            score: config.neutral_skills_score,
            matched: vec![],
            missing: vec![],
            debug: MatchDebugInfo {
                job_skills_found: 0,
                resume_skills_found: resume_skills.len(),
                reason: Some("No skills extracted from job description".into()),
                ..MatchDebugInfo::default()
            },
        };
    }

    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for job_skill in job_skills {
        let best_similarity = resume_skills
            .iter()
            .map(|resume_skill| skill_similarity(job_skill, resume_skill))
            .fold(0.0f64, f64::max);

        if best_similarity >= config.similarity_threshold {
            matched.push(job_skill.clone());
        } else {
            missing.push(job_skill.clone());
        }
    }

    let match_rate = matched.len() as f64 / job_skills.len() as f64;
    let base_score = match_rate * config.match_rate_scale;
    let abundance_bonus = (resume_skills.len() as f64 / job_skills.len().max(1) as f64
        * config.abundance_multiplier)
        .min(config.abundance_bonus_cap);
    let score = (base_score + abundance_bonus).min(100.0);

    let debug = MatchDebugInfo {
        job_skills_found: job_skills.len(),
        resume_skills_found: resume_skills.len(),
        job_skills_sample: job_skills.iter().take(10).cloned().collect(),
        resume_skills_sample: resume_skills.iter().take(10).cloned().collect(),
        match_rate,
        base_score,
        abundance_bonus,
        reason: None,
    };

    SkillMatchOutcome {
        score,
        matched,
        missing,
        debug,
    }
}
