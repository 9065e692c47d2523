//! Batch processing of an article list.
//!
//! A [`Pipeline`] reads the input list, skips ids already present in the
//! output table, fetches and extracts the remaining pages, computes their
//! [`Metrics`] and writes the combined table back.
//!
//! # Example
//!
//! ```rust,no_run
//! use readmetrics_core::{HtmlExtractor, HttpFetcher, Pipeline, PipelineConfig};
//!
//! # async fn example() -> readmetrics_core::Result<()> {
//! let config = PipelineConfig::builder()
//!     .input("Data/Input/Input.csv")
//!     .output("Data/Output/Output.csv")
//!     .concurrency(8)
//!     .build();
//! let pipeline = Pipeline::new(config);
//! let fetcher = HttpFetcher::new(pipeline.config().fetch.clone());
//! let summary = pipeline.run(&fetcher, &HtmlExtractor).await?;
//! println!("processed {}", summary.processed);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use futures::stream::{self, StreamExt};
use tracing::{error, info, warn};

use crate::extract::{ExtractedArticle, Extractor};
use crate::fetch::{FetchConfig, Fetcher};
use crate::lexicon::{load_master_dictionary, load_stopwords};
use crate::report::MetricsRow;
use crate::store::{InputRecord, MetricsStore, read_input, save_article};
use crate::{Lexicons, Metrics, MetricsError, Result};

/// Configuration for a batch run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// CSV list of `URL_ID`, `URL` pairs.
    pub input: PathBuf,

    /// Output table; also read to skip already processed ids.
    pub output: PathBuf,

    /// Where extracted article text is saved (`<id>.txt`); `None` skips saving.
    pub articles_dir: Option<PathBuf>,

    /// Glob matching every stopword file.
    pub stopwords: String,

    /// Directory holding `positive-words.txt` and `negative-words.txt`.
    pub dictionary: PathBuf,

    /// HTTP settings for the default fetcher.
    pub fetch: FetchConfig,

    /// Pages fetched at the same time (default: 4).
    pub concurrency: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("Data/Input/Input.csv"),
            output: PathBuf::from("Data/Output/Output.csv"),
            articles_dir: Some(PathBuf::from("Articles")),
            stopwords: "Data/StopWords/StopWords_*.txt".to_string(),
            dictionary: PathBuf::from("Data/MasterDictionary"),
            fetch: FetchConfig::default(),
            concurrency: 4,
        }
    }
}

impl PipelineConfig {
    /// Creates a new builder for PipelineConfig.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::new()
    }
}

/// Builder for PipelineConfig.
///
/// ```rust
/// use readmetrics_core::PipelineConfig;
///
/// let config = PipelineConfig::builder()
///     .input("list.csv")
///     .articles_dir(None::<&str>)
///     .concurrency(0)
///     .build();
/// assert_eq!(config.concurrency, 1);
/// ```
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: PipelineConfig::default() }
    }

    pub fn input(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input = path.into();
        self
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output = path.into();
        self
    }

    pub fn articles_dir<P: Into<PathBuf>>(mut self, dir: Option<P>) -> Self {
        self.config.articles_dir = dir.map(Into::into);
        self
    }

    pub fn stopwords(mut self, pattern: impl Into<String>) -> Self {
        self.config.stopwords = pattern.into();
        self
    }

    pub fn dictionary(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.dictionary = dir.into();
        self
    }

    pub fn fetch(mut self, fetch: FetchConfig) -> Self {
        self.config.fetch = fetch;
        self
    }

    /// Sets the fetch concurrency; values below 1 are raised to 1.
    pub fn concurrency(mut self, value: usize) -> Self {
        self.config.concurrency = value.max(1);
        self
    }

    /// Builds the config.
    pub fn build(self) -> PipelineConfig {
        self.config
    }
}

impl Default for PipelineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Articles analyzed and appended in this run.
    pub processed: usize,
    /// Inputs skipped because the output already had their id.
    pub skipped: usize,
    /// Inputs whose page could not be fetched or extracted.
    pub failed: usize,
    /// Where the table was written.
    pub output: PathBuf,
}

/// Batch runner over an input list.
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Loads the stopword glob and the master dictionary.
    pub fn load_lexicons(&self) -> Result<Lexicons> {
        let stopwords = load_stopwords(&self.config.stopwords)?;
        let (positive, negative) = load_master_dictionary(&self.config.dictionary)?;
        if positive.is_empty() || negative.is_empty() {
            warn!(dir = %self.config.dictionary.display(), "master dictionary files missing or empty");
        }
        info!(
            stopwords = stopwords.len(),
            positive = positive.len(),
            negative = negative.len(),
            "lexicons loaded"
        );
        Ok(Lexicons::new(stopwords, positive, negative))
    }

    /// Runs the whole batch.
    ///
    /// Fetch or extraction failures are logged and counted; they never abort
    /// the run. Neither does a failure to save an article's text, which is
    /// logged while its metrics are still recorded. Only a missing input
    /// list, unreadable lexicons or a failed write of the output table are
    /// errors.
    pub async fn run<F, E>(&self, fetcher: &F, extractor: &E) -> Result<RunSummary>
    where
        F: Fetcher,
        E: Extractor,
    {
        if !self.config.input.is_file() {
            return Err(MetricsError::FileNotFound(self.config.input.clone()));
        }

        let lexicons = self.load_lexicons()?;
        let inputs = read_input(&self.config.input)?;
        let mut store = MetricsStore::open(&self.config.output);
        let processed_ids = store.processed_ids();

        let (done, todo): (Vec<InputRecord>, Vec<InputRecord>) =
            inputs.into_iter().partition(|record| processed_ids.contains(&record.id));
        for record in &done {
            info!(id = %record.id, "skipping, already processed");
        }

        let fetched: Vec<(InputRecord, Option<ExtractedArticle>)> = stream::iter(todo)
            .map(|record| async move {
                info!(id = %record.id, url = %record.url, "processing");
                let article = fetch_article(fetcher, extractor, &record).await;
                (record, article)
            })
            .buffered(self.config.concurrency.max(1))
            .collect()
            .await;

        let mut summary = RunSummary { skipped: done.len(), output: self.config.output.clone(), ..Default::default() };
        let mut rows = Vec::new();
        for (record, article) in fetched {
            let Some(article) = article else {
                summary.failed += 1;
                continue;
            };

            if let Some(dir) = &self.config.articles_dir
                && let Err(e) = save_article(dir, &record.id, &article.title, &article.body)
            {
                error!(id = %record.id, error = %e, "could not save article text");
            }

            let metrics = lexicons.analyze(&record.id, &record.url, &article.title, &article.body);
            rows.push(MetricsRow::from(&metrics));
            summary.processed += 1;
        }

        store.append(rows);
        store.save()?;
        info!(
            processed = summary.processed,
            skipped = summary.skipped,
            failed = summary.failed,
            output = %store.path().display(),
            "saved metrics"
        );

        Ok(summary)
    }
}

async fn fetch_article<F, E>(fetcher: &F, extractor: &E, record: &InputRecord) -> Option<ExtractedArticle>
where
    F: Fetcher,
    E: Extractor,
{
    let html = match fetcher.fetch(&record.url).await {
        Ok(html) if !html.is_empty() => html,
        Ok(_) => {
            error!(id = %record.id, "skipping, empty response");
            return None;
        }
        Err(e) => {
            error!(id = %record.id, error = %e, "skipping, no HTML");
            return None;
        }
    };

    match extractor.extract(&html) {
        Ok(article) => Some(article),
        Err(e) => {
            error!(id = %record.id, error = %e, "skipping, extraction failed");
            None
        }
    }
}

/// Analyzes one already-extracted article with the pipeline's lexicons.
pub fn analyze_article(lexicons: &Lexicons, id: &str, url: &str, article: &ExtractedArticle) -> Metrics {
    lexicons.analyze(id, url, &article.title, &article.body)
}

/// Loads the lexicons a run would use, without running it.
pub fn load_lexicons_from(stopwords: &str, dictionary: &Path) -> Result<Lexicons> {
    let config = PipelineConfig::builder().stopwords(stopwords).dictionary(dictionary).build();
    Pipeline::new(config).load_lexicons()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HtmlExtractor;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    struct StaticFetcher {
        pages: HashMap<String, String>,
    }

    impl Fetcher for StaticFetcher {
        async fn fetch(&self, url: &str) -> Result<String> {
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| MetricsError::HttpStatus { url: url.to_string(), status: 404 })
        }
    }

    fn fixture(tmp: &TempDir) -> PipelineConfig {
        let root = tmp.path();
        fs::create_dir_all(root.join("StopWords")).unwrap();
        fs::create_dir_all(root.join("MasterDictionary")).unwrap();
        fs::write(root.join("StopWords/StopWords_Generic.txt"), "THE\nA\nIS\n").unwrap();
        fs::write(root.join("MasterDictionary/positive-words.txt"), "good\n").unwrap();
        fs::write(root.join("MasterDictionary/negative-words.txt"), "bad\n").unwrap();
        fs::write(
            root.join("input.csv"),
            "URL_ID,URL\n1,https://example.com/1\n2,https://example.com/2\n3,https://example.com/missing\n",
        )
        .unwrap();

        PipelineConfig::builder()
            .input(root.join("input.csv"))
            .output(root.join("out/output.csv"))
            .articles_dir(Some(root.join("articles")))
            .stopwords(root.join("StopWords/StopWords_*.txt").to_string_lossy())
            .dictionary(root.join("MasterDictionary"))
            .concurrency(2)
            .build()
    }

    fn fetcher() -> StaticFetcher {
        let mut pages = HashMap::new();
        pages.insert(
            "https://example.com/1".to_string(),
            "<html><body><h1>Good news</h1><article><p>The day is good. We won!</p></article></body></html>"
                .to_string(),
        );
        pages.insert(
            "https://example.com/2".to_string(),
            "<html><body><h1>Bad news</h1><p>A bad day.</p></body></html>".to_string(),
        );
        StaticFetcher { pages }
    }

    fn run(pipeline: &Pipeline, fetcher: &StaticFetcher) -> Result<RunSummary> {
        futures::executor::block_on(pipeline.run(fetcher, &HtmlExtractor))
    }

    #[test]
    fn test_run_processes_and_skips_failures() {
        let tmp = TempDir::new().unwrap();
        let pipeline = Pipeline::new(fixture(&tmp));

        let summary = run(&pipeline, &fetcher()).unwrap();
        assert_eq!(summary.processed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.skipped, 0);

        let store = MetricsStore::open(&summary.output);
        let rows = store.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "1");
        assert_eq!(rows[0].positive_score, 2);
        assert_eq!(rows[0].personal_pronouns, 1);
        assert_eq!(rows[1].negative_score, 2);

        let saved = fs::read_to_string(tmp.path().join("articles/1.txt")).unwrap();
        assert_eq!(saved, "Good news\n\nThe day is good. We won!");
    }

    #[test]
    fn test_run_resumes() {
        let tmp = TempDir::new().unwrap();
        let pipeline = Pipeline::new(fixture(&tmp));

        run(&pipeline, &fetcher()).unwrap();
        let second = run(&pipeline, &fetcher()).unwrap();

        assert_eq!(second.skipped, 2);
        assert_eq!(second.processed, 0);
        assert_eq!(second.failed, 1);
        assert_eq!(MetricsStore::open(&second.output).rows().len(), 2);
    }

    #[test]
    fn test_run_keeps_going_when_article_save_fails() {
        let tmp = TempDir::new().unwrap();
        let config = fixture(&tmp);
        fs::write(
            &config.input,
            "URL_ID,URL\n1,https://example.com/1\nsub/2,https://example.com/2\n../x,https://example.com/2\n",
        )
        .unwrap();

        let summary = run(&Pipeline::new(config), &fetcher()).unwrap();
        assert_eq!(summary.processed, 3);
        assert_eq!(summary.failed, 0);

        let ids: Vec<String> = MetricsStore::open(&summary.output).rows().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["1", "sub/2", "../x"]);
        assert!(tmp.path().join("articles/1.txt").is_file());
        assert!(!tmp.path().join("articles/sub").exists());
        assert!(!tmp.path().join("x.txt").exists());
    }

    #[test]
    fn test_run_missing_input() {
        let tmp = TempDir::new().unwrap();
        let config = PipelineConfig::builder().input(tmp.path().join("nope.csv")).build();

        let result = run(&Pipeline::new(config), &fetcher());
        assert!(matches!(result, Err(MetricsError::FileNotFound(_))));
    }

    #[test]
    fn test_missing_lexicons_still_run() {
        let tmp = TempDir::new().unwrap();
        let config = PipelineConfig { stopwords: "/nonexistent/*.txt".into(), dictionary: "/nonexistent".into(), ..fixture(&tmp) };

        let summary = run(&Pipeline::new(config), &fetcher()).unwrap();
        let rows = MetricsStore::open(&summary.output).rows();
        assert_eq!(rows[0].positive_score, 0);
    }

    #[test]
    fn test_load_lexicons_from() {
        let tmp = TempDir::new().unwrap();
        let config = fixture(&tmp);

        let lexicons = load_lexicons_from(&config.stopwords, &config.dictionary).unwrap();
        assert!(lexicons.stopwords.contains("the"));
        assert!(lexicons.positive.contains("good"));
        assert!(lexicons.negative.contains("bad"));
    }

    #[test]
    fn test_builder_defaults() {
        let config = PipelineConfig::builder().build();
        assert_eq!(config.concurrency, 4);
        assert_eq!(config.stopwords, "Data/StopWords/StopWords_*.txt");
        assert_eq!(config.fetch.timeout, 20);
    }
}
