//! Text analysis engine.
//!
//! Everything in this module is pure: tokenizers, the syllable estimator,
//! the lexicon scorers and [`compute_metrics`] hold no state and perform no
//! I/O, so they can be called from any number of threads over shared,
//! read-only [`Lexicon`](crate::Lexicon)s.
//!
//! # Example
//!
//! ```rust
//! use readmetrics_core::{Lexicon, compute_metrics};
//!
//! let stopwords: Lexicon = ["the", "a"].into_iter().map(String::from).collect();
//! let positive: Lexicon = ["good"].into_iter().map(String::from).collect();
//! let negative = Lexicon::default();
//!
//! let metrics = compute_metrics("A title", "The day was good.", &stopwords, &positive, &negative, "1", "https://example.com");
//! assert_eq!(metrics.positive_score, 1);
//! ```

pub mod metrics;
pub mod pronouns;
pub mod sentiment;
pub mod syllables;
pub mod tokenize;

pub use metrics::{Lexicons, Metrics, compute_metrics};
pub use pronouns::count_personal_pronouns;
pub use sentiment::{polarity, sentiment_scores, subjectivity};
pub use syllables::count_syllables;
pub use tokenize::{clean_words, is_numeric_token, tokenize_sentences, tokenize_words};
