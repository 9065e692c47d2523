//! Sentence and word tokenization.

use std::sync::LazyLock;

use regex::Regex;

use crate::Lexicon;

/// One or more terminators followed by whitespace; "..." and "?!" are a single boundary.
static SENTENCE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+\s+").unwrap());

/// ASCII letters with an optional lowercase contraction suffix ("don't").
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-zA-Z]+(?:'[a-z]+)?").unwrap());

/// Splits text into trimmed, non-empty sentences.
///
/// A trailing fragment without a terminator is kept. Blank input yields an
/// empty vector; callers that divide by the sentence count floor it at 1.
pub fn tokenize_sentences(text: &str) -> Vec<String> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extracts lowercase word tokens.
///
/// Digits, punctuation and symbols never appear in a token.
pub fn tokenize_words(text: &str) -> Vec<String> {
    WORD.find_iter(text).map(|m| m.as_str().to_lowercase()).collect()
}

/// True for non-empty tokens made only of digits.
pub fn is_numeric_token(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_numeric())
}

/// Drops stopwords and numeric-only tokens, keeping order.
///
/// The result is the basis for word count, complex words, syllables per
/// word, average word length and both sentiment scores.
pub fn clean_words(words: &[String], stopwords: &Lexicon) -> Vec<String> {
    words
        .iter()
        .filter(|w| !stopwords.contains(w) && !is_numeric_token(w))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_collapse_terminators() {
        let sentences = tokenize_sentences("Hello world. How are you?! Fine.");
        assert_eq!(sentences, vec!["Hello world", "How are you", "Fine."]);
    }

    #[test]
    fn test_sentences_ellipsis_is_one_boundary() {
        let sentences = tokenize_sentences("Wait... what happened?   Nothing");
        assert_eq!(sentences, vec!["Wait", "what happened", "Nothing"]);
    }

    #[test]
    fn test_sentences_terminator_without_whitespace() {
        assert_eq!(tokenize_sentences("version 1.2 is out"), vec!["version 1.2 is out"]);
    }

    #[test]
    fn test_sentences_blank_input() {
        assert!(tokenize_sentences("").is_empty());
        assert!(tokenize_sentences("   \n\t ").is_empty());
    }

    #[test]
    fn test_sentences_leading_separator() {
        assert_eq!(tokenize_sentences(". Body only"), vec!["Body only"]);
    }

    #[test]
    fn test_words_lowercase_and_contractions() {
        let words = tokenize_words("Don't STOP me now, it's 2024!");
        assert_eq!(words, vec!["don't", "stop", "me", "now", "it's"]);
    }

    #[test]
    fn test_words_uppercase_suffix_not_joined() {
        assert_eq!(tokenize_words("DON'T"), vec!["don", "t"]);
    }

    #[test]
    fn test_words_drop_symbols() {
        assert!(tokenize_words("123 -- $$ 45.6").is_empty());
        assert_eq!(tokenize_words("café"), vec!["caf"]);
    }

    #[test]
    fn test_is_numeric_token() {
        assert!(is_numeric_token("2024"));
        assert!(!is_numeric_token(""));
        assert!(!is_numeric_token("a1"));
    }

    #[test]
    fn test_clean_words() {
        let stopwords: Lexicon = ["the", "and"].into_iter().map(String::from).collect();
        let words: Vec<String> = ["the", "cat", "and", "42", "dog"].into_iter().map(String::from).collect();
        assert_eq!(clean_words(&words, &stopwords), vec!["cat", "dog"]);
    }
}
