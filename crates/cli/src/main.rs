use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use readmetrics_core::{
    ExtractedArticle, Extractor, FetchConfig, HtmlExtractor, HttpFetcher, Lexicons, Metrics, Pipeline,
    PipelineConfig, analyze_article, fetch_file, fetch_url, load_lexicons_from,
};
use tracing_subscriber::EnvFilter;

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Where the article(s) to analyze come from
#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    /// Plain text on stdin
    Stdin,
    /// A single page fetched over HTTP
    Url(String),
    /// A local HTML page
    HtmlFile(String),
    /// A local plain-text file
    TextFile(String),
    /// A CSV list of URL_ID/URL pairs
    Batch(PathBuf),
}

impl Source {
    fn detect(input: &str, text: bool) -> Self {
        let lower = input.to_lowercase();
        if input == "-" {
            Self::Stdin
        } else if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(input.to_string())
        } else if text {
            Self::TextFile(input.to_string())
        } else if lower.ends_with(".html") || lower.ends_with(".htm") {
            Self::HtmlFile(input.to_string())
        } else {
            Self::Batch(PathBuf::from(input))
        }
    }
}

/// Compute readability and sentiment metrics for web articles
#[derive(Parser, Debug)]
#[command(name = "readmetrics")]
#[command(version)]
#[command(about = "Compute readability and sentiment metrics for web articles", long_about = None)]
struct Args {
    /// CSV list of URL_ID,URL pairs, a single URL, a local HTML file, or "-" for text on stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file: the metrics table in batch mode, JSON otherwise (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Treat INPUT as a plain-text article instead of a list or HTML page
    #[arg(long)]
    text: bool,

    /// Directory for extracted article text (batch mode)
    #[arg(long, default_value = "Articles", value_name = "DIR")]
    articles_dir: PathBuf,

    /// Do not save extracted article text (batch mode)
    #[arg(long)]
    no_save_articles: bool,

    /// Glob matching the stopword files
    #[arg(long, default_value = "Data/StopWords/StopWords_*.txt", value_name = "GLOB")]
    stopwords: String,

    /// Directory holding positive-words.txt and negative-words.txt
    #[arg(long, default_value = "Data/MasterDictionary", value_name = "DIR")]
    dictionary: PathBuf,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "20", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Pages fetched concurrently (batch mode)
    #[arg(short = 'j', long, default_value = "4", value_name = "NUM")]
    concurrency: usize,

    /// Identifier recorded for a single article
    #[arg(long, value_name = "ID")]
    id: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn fetch_config(&self) -> FetchConfig {
        let defaults = FetchConfig::default();
        FetchConfig { timeout: self.timeout, user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent) }
    }

    fn pipeline_config(&self, input: &Path) -> PipelineConfig {
        let mut builder = PipelineConfig::builder()
            .input(input)
            .articles_dir((!self.no_save_articles).then(|| self.articles_dir.clone()))
            .stopwords(self.stopwords.as_str())
            .dictionary(&self.dictionary)
            .fetch(self.fetch_config())
            .concurrency(self.concurrency);
        if let Some(output) = &self.output {
            builder = builder.output(output);
        }
        builder.build()
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.verbose {
        echo::print_banner();
    }

    match Source::detect(&args.input, args.text) {
        Source::Batch(input) => run_batch(&args, &input).await,
        source => run_single(&args, source).await,
    }
}

async fn run_batch(args: &Args, input: &Path) -> anyhow::Result<()> {
    if !input.is_file() {
        bail!("Input list not found: {}", input.display());
    }

    let config = args.pipeline_config(input);
    if args.verbose {
        echo::print_step(1, 2, &format!("Processing {}", input.display().bright_white()));
    }

    let started = Instant::now();
    let pipeline = Pipeline::new(config);
    let fetcher = HttpFetcher::new(pipeline.config().fetch.clone());
    let summary = pipeline.run(&fetcher, &HtmlExtractor).await.context("Batch run failed")?;

    if args.verbose {
        echo::print_step(2, 2, "Writing output");
        echo::print_run_summary(&summary, started.elapsed());
    }
    if summary.failed > 0 {
        echo::print_warning(&format!("{} article(s) could not be fetched", summary.failed));
    }
    echo::print_success(&format!("Saved metrics to {}", summary.output.display().bright_white()));

    Ok(())
}

async fn run_single(args: &Args, source: Source) -> anyhow::Result<()> {
    let lexicons: Lexicons =
        load_lexicons_from(&args.stopwords, &args.dictionary).context("Failed to load lexicons")?;

    if args.verbose {
        echo::print_step(1, 3, "Reading input");
    }

    let (default_id, url, article) = match source {
        Source::Stdin => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            ("-".to_string(), String::new(), ExtractedArticle { title: String::new(), body: buffer })
        }
        Source::TextFile(path) => {
            let body = fs::read_to_string(&path).with_context(|| format!("Failed to read file: {}", path))?;
            (path.clone(), path, ExtractedArticle { title: String::new(), body })
        }
        Source::HtmlFile(path) => {
            let html = fetch_file(&path).with_context(|| format!("Failed to read file: {}", path))?;
            if args.verbose {
                eprintln!("  {} {}", "Size:".dimmed(), echo::format_size(html.len()).bright_white());
            }
            let article = HtmlExtractor.extract(&html).context("Failed to extract article")?;
            (path.clone(), path, article)
        }
        Source::Url(url) => {
            if args.verbose {
                eprintln!("  {} {}", "Fetching:".dimmed(), url.bright_white().underline());
            }
            let html = fetch_url(&url, &args.fetch_config()).await.context("Failed to fetch URL")?;
            let article = HtmlExtractor.extract(&html).context("Failed to extract article")?;
            (url.clone(), url, article)
        }
        Source::Batch(path) => bail!("Not a single article: {}", path.display()),
    };

    if args.verbose {
        echo::print_step(2, 3, "Analyzing text");
        if !article.title.is_empty() {
            eprintln!("  {} {}", "Title:".dimmed(), article.title.bright_white());
        }
    }

    let id = args.id.clone().unwrap_or(default_id);
    let metrics: Metrics = analyze_article(&lexicons, &id, &url, &article);

    if args.verbose {
        echo::print_metrics(&metrics);
        echo::print_step(3, 3, "Writing output");
    }

    let json = if args.pretty { serde_json::to_string_pretty(&metrics) } else { serde_json::to_string(&metrics) };
    let json = json.context("Failed to serialize metrics")?;

    match &args.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => println!("{}", json),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_detect() {
        assert_eq!(Source::detect("-", false), Source::Stdin);
        assert_eq!(Source::detect("https://example.com/a", false), Source::Url("https://example.com/a".into()));
        assert_eq!(Source::detect("page.HTML", false), Source::HtmlFile("page.HTML".into()));
        assert_eq!(Source::detect("notes.txt", true), Source::TextFile("notes.txt".into()));
        assert_eq!(Source::detect("Input.csv", false), Source::Batch(PathBuf::from("Input.csv")));
    }

    #[test]
    fn test_pipeline_config_from_args() {
        let args = Args::parse_from(["readmetrics", "list.csv", "--no-save-articles", "-j", "8", "-o", "out.csv"]);
        let config = args.pipeline_config(Path::new("list.csv"));

        assert_eq!(config.articles_dir, None);
        assert_eq!(config.concurrency, 8);
        assert_eq!(config.output, PathBuf::from("out.csv"));
        assert_eq!(config.fetch.timeout, 20);
    }

    #[test]
    fn test_completions_use_parser_flags() {
        use clap::CommandFactory;

        let bash = include_str!(concat!(env!("OUT_DIR"), "/completions/readmetrics.bash"));
        for arg in Args::command().get_arguments() {
            if let Some(long) = arg.get_long() {
                assert!(bash.contains(&format!("--{}", long)), "completion missing --{}", long);
            }
        }
        assert!(!bash.contains("--articles_dir"));
        assert!(!bash.contains("--user_agent"));
    }
}
