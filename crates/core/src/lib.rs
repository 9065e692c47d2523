pub mod analysis;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod lexicon;
pub mod parse;
pub mod pipeline;
pub mod report;
pub mod store;

pub use analysis::{
    Lexicons, Metrics, clean_words, compute_metrics, count_personal_pronouns, count_syllables, is_numeric_token,
    polarity, sentiment_scores, subjectivity, tokenize_sentences, tokenize_words,
};
pub use error::{MetricsError, Result};
pub use extract::{ExtractedArticle, Extractor, HtmlExtractor, extract_article};
#[cfg(feature = "fetch")]
pub use fetch::{HttpFetcher, fetch_url};
pub use fetch::{FetchConfig, Fetcher, fetch_file};
pub use lexicon::{Lexicon, load_master_dictionary, load_stopwords};
pub use parse::{Document, Element};
pub use pipeline::{
    Pipeline, PipelineConfig, PipelineConfigBuilder, RunSummary, analyze_article, load_lexicons_from,
};
pub use report::{MetricsRow, OUTPUT_COLUMNS, round6, rows_to_csv};
pub use store::{InputRecord, MetricsStore, read_input, save_article};
