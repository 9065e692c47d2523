//! Dictionary-based sentiment scoring.

use crate::Lexicon;

/// Added to the polarity and subjectivity denominators.
pub const EPSILON: f64 = 1e-6;

/// Counts cleaned words found in the positive and negative lexicons.
///
/// A word listed in both lexicons counts toward both scores.
pub fn sentiment_scores(cleaned: &[String], positive: &Lexicon, negative: &Lexicon) -> (usize, usize) {
    cleaned.iter().fold((0, 0), |(pos, neg), word| {
        (pos + usize::from(positive.contains(word)), neg + usize::from(negative.contains(word)))
    })
}

/// `(pos - neg) / (pos + neg + ε)`, roughly within `[-1, 1]`.
pub fn polarity(positive: usize, negative: usize) -> f64 {
    (positive as f64 - negative as f64) / (positive as f64 + negative as f64 + EPSILON)
}

/// `(pos + neg) / (total_words + ε)`, or `0.0` when there are no cleaned words.
pub fn subjectivity(positive: usize, negative: usize, total_words: usize) -> f64 {
    if total_words > 0 { (positive + negative) as f64 / (total_words as f64 + EPSILON) } else { 0.0 }
}
