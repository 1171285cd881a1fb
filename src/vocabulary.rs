use std::collections::HashSet;
use std::sync::LazyLock;

/// Bundled English stop-word table (NLTK's english list). Shipping the table
/// with the crate keeps vocabulary construction offline and deterministic.
pub const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Resume boilerplate that must never be treated as a skill candidate.
pub const BOILERPLATE_WORDS: &[&str] = &[
    "experience", "knowledge", "skills", "ability", "proficiency", "familiar", "understanding",
    "working", "strong", "excellent", "good", "basic", "advanced", "expert", "years", "year",
    "plus", "bonus", "preferred", "required", "must", "should", "including", "such", "like",
    "using", "with", "of", "in", "and", "or", "the", "a", "an", "to", "for", "on", "at",
    "minimum", "maximum", "least", "development", "programming", "software", "application",
    "system", "technology", "tool", "framework", "library", "platform", "environment",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Stop words unioned with the boilerplate table. Shared by token cleaning
/// and by both skill extractors.
static IGNORE_WORD_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    STOP_WORDS
        .iter()
        .chain(BOILERPLATE_WORDS.iter())
        .copied()
        .collect()
});

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

pub fn is_ignored(word: &str) -> bool {
    IGNORE_WORD_SET.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boilerplate_is_ignored_but_not_a_stop_word() {
        assert!(is_ignored("proficiency"));
        assert!(is_ignored("framework"));
        assert!(!is_stop_word("proficiency"));
    }

    #[test]
    fn stop_words_are_part_of_the_ignore_set() {
        assert!(is_stop_word("the"));
        assert!(is_ignored("the"));
        assert!(is_ignored("with"));
    }

    #[test]
    fn technology_terms_pass_through() {
        assert!(!is_ignored("python"));
        assert!(!is_ignored("kubernetes"));
        assert!(!is_ignored("sql"));
    }
}
