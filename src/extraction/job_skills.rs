use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::vocabulary::is_ignored;

lazy_static! {
    // Chunk patterns run against the lowercased description. Order is fixed;
    // the candidate set is order-insensitive but extraction must stay
    // reproducible for testing.
    static ref CHUNK_PATTERNS: Vec<Regex> = vec![
        // Labeled skills/requirements sections, up to a blank line or a new block
        Regex::new(
            r"(?im)(?:technical skills|required skills|skills|qualifications|requirements)[:\s]*([^.!?\n]*(?:\n[^.!?\n]*)*?)(?:\n\s*\n|\n[A-Z]|$)"
        )
        .unwrap(),
        // "experience with X" style lead-ins
        Regex::new(r"(?i)(?:experience with|proficiency in|knowledge of|familiar with)[:\s]*([^.!?\n]*)")
            .unwrap(),
        Regex::new(r"(?i)(?:must have|required|essential)[:\s]*([^.!?\n]*)").unwrap(),
        // Bullet lines
        Regex::new(r"[•·*\-]\s*([^•·*\n\-]+)").unwrap(),
        // Parenthetical asides
        Regex::new(r"\(([^)]+)\)").unwrap(),
        // "N years of experience in/with/using X"
        Regex::new(r"(?i)\d+\+?\s*years?\s+(?:of\s+)?(?:experience\s+)?(?:in|with|using)\s+([^,.!?\n]+)")
            .unwrap(),
    ];

    // Technology-looking tokens are matched against the original-case text so
    // acronyms survive.
    static ref TECH_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"\b[a-zA-Z][a-zA-Z0-9]*\.js\b").unwrap(),
        Regex::new(r"\b[a-zA-Z]+\+\+").unwrap(),
        Regex::new(r"\b[a-zA-Z]+#").unwrap(),
        Regex::new(r"\b[a-zA-Z]{2,}\.[a-zA-Z]{2,}\b").unwrap(),
        Regex::new(r"\b[A-Z]{2,}\b").unwrap(),
    ];

    static ref SEPARATOR_RE: Regex = Regex::new(r"[,;()&/|]").unwrap();
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    static ref PART_SPLIT_RE: Regex = Regex::new(r"\s+(?:and|or|\+|,|;)\s+").unwrap();
    static ref WORD_STRIP_RE: Regex = Regex::new(r"[^\w+#.\-]").unwrap();
    static ref PHRASE_STRIP_RE: Regex = Regex::new(r"[^\w\s+#.\-]").unwrap();
}

fn is_numeric(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_digit())
}

/// Extract candidate skill phrases from a free-text job description.
///
/// Runs the chunk-pattern battery over the lowercased text, splits each chunk
/// on common separators, and keeps both individual words and short multi-word
/// phrases that survive the ignore-set and numeric filters. An empty result
/// means "no extractable requirements", which the matcher treats as a neutral
/// outcome rather than a miss.
pub fn extract_job_skills(job_description: &str) -> BTreeSet<String> {
    let jd_lower = job_description.to_lowercase();

    let mut chunks: Vec<String> = Vec::new();
    for pattern in CHUNK_PATTERNS.iter() {
        for caps in pattern.captures_iter(&jd_lower) {
            let matched = caps
                .get(1)
                .or_else(|| caps.get(0))
                .map(|m| m.as_str().trim())
                .unwrap_or("");
            if matched.len() > 2 {
                chunks.push(matched.to_string());
            }
        }
    }

    let mut skills = BTreeSet::new();

    for chunk in &chunks {
        let cleaned = SEPARATOR_RE.replace_all(chunk, " ");
        let cleaned = WHITESPACE_RE.replace_all(&cleaned, " ");
        let cleaned = cleaned.trim();

        for part in PART_SPLIT_RE.split(cleaned) {
            let part = part.trim();
            if part.len() <= 1 {
                continue;
            }

            let words: Vec<&str> = part.split_whitespace().collect();

            for word in &words {
                let word = WORD_STRIP_RE.replace_all(word, "");
                if word.chars().count() > 1 && !is_ignored(&word) && !is_numeric(&word) {
                    skills.insert(word.to_lowercase());
                }
            }

            // Short phrases become multi-word candidates as a whole
            if words.len() <= 3 && part.len() <= 50 {
                let phrase = PHRASE_STRIP_RE.replace_all(part, "");
                let phrase = phrase.trim();
                if phrase.len() > 2 && !phrase.split_whitespace().any(is_ignored) {
                    skills.insert(phrase.to_lowercase());
                }
            }
        }
    }

    for pattern in TECH_PATTERNS.iter() {
        for m in pattern.find_iter(job_description) {
            let token = m.as_str().to_lowercase();
            if !is_ignored(&token) {
                skills.insert(token);
            }
        }
    }

    skills
}
