use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Education hierarchy keywords, highest level first. Values are ranks used
/// for meets/shortfall comparisons; synonyms share a rank.
pub const EDUCATION_HIERARCHY: &[(&str, u8)] = &[
    ("phd", 5),
    ("doctorate", 5),
    ("doctoral", 5),
    ("master", 4),
    ("masters", 4),
    ("msc", 4),
    ("mba", 4),
    ("bachelor", 3),
    ("bachelors", 3),
    ("bsc", 3),
    ("ba", 3),
    ("associate", 2),
    ("diploma", 2),
    ("certificate", 1),
    ("certification", 1),
];

lazy_static! {
    static ref EXPERIENCE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(\d+)[+\s]*years?\s+(?:of\s+)?(?:experience|exp)").unwrap(),
        Regex::new(r"minimum\s+(\d+)\s+years?").unwrap(),
        Regex::new(r"(\d+)[+\s]*years?\s+(?:in|with|of)").unwrap(),
        Regex::new(r"(\d+)\+\s*years?").unwrap(),
    ];

    // Hierarchy keywords match on word boundaries only; a raw substring scan
    // would see "ba" inside "based" and invent a bachelor requirement.
    static ref EDUCATION_KEYWORD_RES: Vec<(Regex, &'static str, u8)> = EDUCATION_HIERARCHY
        .iter()
        .map(|(keyword, rank)| {
            (
                Regex::new(&format!(r"\b{keyword}\b")).unwrap(),
                *keyword,
                *rank,
            )
        })
        .collect();
}

/// Requirements inferred from a job description by pattern scanning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRequirements {
    pub min_experience_years: f64,
    pub education_requirement: Option<String>,
}

/// Caller-supplied requirement overrides; any field present wins over the
/// value inferred from the job description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequirementOverrides {
    pub min_experience_years: Option<f64>,
    pub education_requirement: Option<String>,
}

/// Rank of the highest education keyword found in `text`, 0 if none.
pub fn highest_education_level(text: &str) -> u8 {
    EDUCATION_KEYWORD_RES
        .iter()
        .filter(|(re, _, _)| re.is_match(text))
        .map(|(_, _, rank)| *rank)
        .max()
        .unwrap_or(0)
}

/// Rank of a named education requirement, 0 if unknown.
pub fn education_rank(requirement: &str) -> u8 {
    let requirement = requirement.to_lowercase();
    EDUCATION_HIERARCHY
        .iter()
        .find(|(keyword, _)| *keyword == requirement)
        .map(|(_, rank)| *rank)
        .unwrap_or(0)
}

/// Scan a job description for "N years" constructs and education keywords,
/// taking the maximum requirement found in each dimension.
pub fn parse_job_requirements(job_description: &str) -> JobRequirements {
    let jd_lower = job_description.to_lowercase();

    let mut min_experience = 0u32;
    for pattern in EXPERIENCE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(&jd_lower) {
            if let Some(years) = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()) {
                min_experience = min_experience.max(years);
            }
        }
    }

    let mut education_requirement: Option<(&'static str, u8)> = None;
    for (re, keyword, rank) in EDUCATION_KEYWORD_RES.iter() {
        if re.is_match(&jd_lower) {
            match education_requirement {
                Some((_, best)) if best >= *rank => {}
                _ => education_requirement = Some((keyword, *rank)),
            }
        }
    }

    JobRequirements {
        min_experience_years: f64::from(min_experience),
        education_requirement: education_requirement.map(|(keyword, _)| keyword.to_string()),
    }
}

impl JobRequirements {
    pub fn apply_overrides(mut self, overrides: &RequirementOverrides) -> Self {
        if let Some(years) = overrides.min_experience_years {
            self.min_experience_years = years;
        }
        if let Some(edu) = overrides.education_requirement.as_ref() {
            self.education_requirement = Some(edu.to_lowercase());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_years_of_experience_variants() {
        assert_eq!(
            parse_job_requirements("5+ years of experience").min_experience_years,
            5.0
        );
        assert_eq!(
            parse_job_requirements("minimum 3 years in the field").min_experience_years,
            3.0
        );
        assert_eq!(
            parse_job_requirements("7 years with distributed systems").min_experience_years,
            7.0
        );
    }

    #[test]
    fn takes_the_maximum_years_requirement() {
        let req = parse_job_requirements("2 years of exp required, ideally 6+ years");
        assert_eq!(req.min_experience_years, 6.0);
    }

    #[test]
    fn no_years_stated_means_zero() {
        assert_eq!(
            parse_job_requirements("• Python\n• SQL").min_experience_years,
            0.0
        );
    }

    #[test]
    fn infers_highest_education_requirement() {
        let req = parse_job_requirements("bachelor's degree required, master preferred");
        assert_eq!(req.education_requirement.as_deref(), Some("master"));
    }

    #[test]
    fn education_keywords_do_not_fire_inside_words() {
        let req = parse_job_requirements("team-based work on web-based tooling");
        assert_eq!(req.education_requirement, None);
    }

    #[test]
    fn ranks_resume_education_text() {
        assert_eq!(highest_education_level("mba, state university"), 4);
        assert_eq!(highest_education_level("bsc computer science"), 3);
        assert_eq!(highest_education_level("self taught"), 0);
    }

    #[test]
    fn overrides_win_over_inferred_values() {
        let req = parse_job_requirements("2 years of experience, diploma required")
            .apply_overrides(&RequirementOverrides {
                min_experience_years: Some(8.0),
                education_requirement: Some("Master".into()),
            });
        assert_eq!(req.min_experience_years, 8.0);
        assert_eq!(req.education_requirement.as_deref(), Some("master"));
    }
}
