use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::vocabulary::is_ignored;
use crate::ParsedResume;

lazy_static! {
    // Technology-identifier shape: leading letter, then letters/digits/+/#/./-
    static ref TECH_TOKEN_RE: Regex = Regex::new(r"\b[a-zA-Z][a-zA-Z0-9+#.\-]*\b").unwrap();
}

/// Collect the candidate's skill set: the explicit skills list seeded first,
/// then technology-shaped tokens mined from the free-text fields.
pub fn extract_resume_skills(resume: &ParsedResume) -> BTreeSet<String> {
    let mut skills: BTreeSet<String> = resume
        .skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    let mut text_parts: Vec<&str> = Vec::new();
    if let Some(summary) = resume.summary.as_deref() {
        text_parts.push(summary);
    }
    for exp in &resume.experience {
        text_parts.push(&exp.title);
        text_parts.push(&exp.context);
    }
    for edu in &resume.education {
        text_parts.push(&edu.institution);
        text_parts.push(&edu.context);
    }
    text_parts.push(&resume.raw_text);

    let full_text = text_parts.join(" ").to_lowercase();

    for m in TECH_TOKEN_RE.find_iter(&full_text) {
        let token = m.as_str();
        if token.chars().count() > 1
            && !is_ignored(token)
            && !token.chars().all(|c| c.is_ascii_digit())
        {
            skills.insert(token.to_string());
        }
    }

    skills
}
