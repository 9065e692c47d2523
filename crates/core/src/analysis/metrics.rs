//! The per-article metric vector.

use serde::Serialize;

use super::pronouns::count_personal_pronouns;
use super::sentiment::{polarity, sentiment_scores, subjectivity};
use super::syllables::count_syllables;
use super::tokenize::{clean_words, tokenize_sentences, tokenize_words};
use crate::Lexicon;

/// Readability and sentiment metrics for one article.
///
/// Built once by [`compute_metrics`] and never mutated. Ratios are left
/// unrounded; see [`MetricsRow`](crate::MetricsRow) for the 6-decimal
/// output form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub id: String,
    pub url: String,
    pub positive_score: usize,
    pub negative_score: usize,
    pub polarity_score: f64,
    pub subjectivity_score: f64,
    /// Raw (uncleaned) words per sentence.
    pub avg_sentence_length: f64,
    /// Complex words over cleaned words, in `[0, 1]`.
    pub percent_complex_words: f64,
    pub fog_index: f64,
    /// Same value as `avg_sentence_length`; the output schema carries both columns.
    pub avg_words_per_sentence: f64,
    pub complex_word_count: usize,
    /// Cleaned word count.
    pub word_count: usize,
    pub syllables_per_word: f64,
    pub personal_pronouns: usize,
    pub avg_word_length: f64,
}

/// The three read-only lexicons an analysis run needs.
#[derive(Debug, Clone, Default)]
pub struct Lexicons {
    pub stopwords: Lexicon,
    pub positive: Lexicon,
    pub negative: Lexicon,
}

impl Lexicons {
    pub fn new(stopwords: Lexicon, positive: Lexicon, negative: Lexicon) -> Self {
        Self { stopwords, positive, negative }
    }

    /// Runs [`compute_metrics`] against these lexicons.
    pub fn analyze(&self, id: &str, url: &str, title: &str, body: &str) -> Metrics {
        compute_metrics(title, body, &self.stopwords, &self.positive, &self.negative, id, url)
    }
}

/// Computes the full metric vector for an article.
///
/// The trimmed title and body are joined as `"{title}. {body}"` so the title
/// forms its own sentence. Sentence length uses the raw word count while
/// every density metric uses the cleaned words (stopwords and numeric
/// tokens removed). Ratios over an empty cleaned sequence are `0.0`.
///
/// Total over any input: empty or malformed text only degrades the numbers.
pub fn compute_metrics(
    title: &str, body: &str, stopwords: &Lexicon, positive: &Lexicon, negative: &Lexicon, id: &str, url: &str,
) -> Metrics {
    let full_text = format!("{}. {}", title.trim(), body.trim());
    let full_text = full_text.trim();

    let sentences = tokenize_sentences(full_text);
    let words_all = tokenize_words(full_text);
    let words_clean = clean_words(&words_all, stopwords);

    let total_words = words_clean.len();
    let total_sentences = sentences.len().max(1);

    let (positive_score, negative_score) = sentiment_scores(&words_clean, positive, negative);
    let polarity_score = polarity(positive_score, negative_score);
    let subjectivity_score = subjectivity(positive_score, negative_score, total_words);

    let syllables: Vec<usize> = words_clean.iter().map(|w| count_syllables(w)).collect();
    let complex_word_count = syllables.iter().filter(|&&s| s >= 3).count();
    let total_syllables: usize = syllables.iter().sum();

    let avg_sentence_length = words_all.len() as f64 / total_sentences as f64;
    let percent_complex_words = ratio(complex_word_count, total_words);
    let fog_index = 0.4 * (avg_sentence_length + percent_complex_words * 100.0);
    let personal_pronouns = count_personal_pronouns(full_text);
    let total_chars: usize = words_clean.iter().map(|w| w.chars().count()).sum();

    Metrics {
        id: id.to_string(),
        url: url.to_string(),
        positive_score,
        negative_score,
        polarity_score,
        subjectivity_score,
        avg_sentence_length,
        percent_complex_words,
        fog_index,
        avg_words_per_sentence: avg_sentence_length,
        complex_word_count,
        word_count: total_words,
        syllables_per_word: ratio(total_syllables, total_words),
        personal_pronouns,
        avg_word_length: ratio(total_chars, total_words),
    }
}

/// Hard-zero guarded division.
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator > 0 { numerator as f64 / denominator as f64 } else { 0.0 }
}
