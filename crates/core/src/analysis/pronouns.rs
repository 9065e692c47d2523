//! First-person pronoun counting.

use std::sync::LazyLock;

use regex::Regex;

static PERSONAL_PRONOUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\b(?:i|we|my|ours|us)\b").unwrap());

/// Counts whole-word, case-insensitive matches of I, we, my, ours and us.
///
/// An exact uppercase "US" is the country acronym and is not counted;
/// "us", "Us" and "uS" are.
///
/// ```rust
/// use readmetrics_core::count_personal_pronouns;
///
/// assert_eq!(count_personal_pronouns("I and we visited the US and us too"), 3);
/// ```
pub fn count_personal_pronouns(text: &str) -> usize {
    PERSONAL_PRONOUN.find_iter(text).filter(|m| m.as_str() != "US").count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excludes_uppercase_us() {
        assert_eq!(count_personal_pronouns("I and we visited the US and us too"), 3);
    }

    #[test]
    fn test_mixed_case_us_counted() {
        assert_eq!(count_personal_pronouns("Us, uS, US"), 2);
    }

    #[test]
    fn test_whole_words_only() {
        assert_eq!(count_personal_pronouns("myth wellbeing usual ourselves ii"), 0);
        assert_eq!(count_personal_pronouns("My, OURS; We!"), 3);
    }

    #[test]
    fn test_contraction_prefix_counts() {
        // The apostrophe is a word boundary, so the "I" in "I'm" is a match.
        assert_eq!(count_personal_pronouns("I'm sure we'll see"), 2);
    }

    #[test]
    fn test_empty() {
        assert_eq!(count_personal_pronouns(""), 0);
    }
}
