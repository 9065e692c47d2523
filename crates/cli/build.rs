use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("readmetrics")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compute readability and sentiment metrics for web articles")
        .arg(clap::arg!(<INPUT> "CSV list of URL_ID,URL pairs, a single URL, a local HTML file, or '-' for text on stdin"))
        .arg(
            clap::arg!(-o --output <FILE> "Output file: the metrics table in batch mode, JSON otherwise")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--text "Treat INPUT as a plain-text article"))
        .arg(
            clap::arg!(--"articles-dir" <DIR> "Directory for extracted article text")
                .default_value("Articles")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--"no-save-articles" "Do not save extracted article text"))
        .arg(
            clap::arg!(--stopwords <GLOB> "Glob matching the stopword files")
                .default_value("Data/StopWords/StopWords_*.txt"),
        )
        .arg(
            clap::arg!(--dictionary <DIR> "Directory holding positive-words.txt and negative-words.txt")
                .default_value("Data/MasterDictionary")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").default_value("20"))
        .arg(clap::arg!(--"user-agent" <UA> "Custom User-Agent for HTTP requests").value_name("UA"))
        .arg(clap::arg!(-j --concurrency <NUM> "Pages fetched concurrently").default_value("4"))
        .arg(clap::arg!(--id <ID> "Identifier recorded for a single article"))
        .arg(clap::arg!(--pretty "Pretty-print JSON output"))
        .arg(clap::arg!(-v --verbose "Enable debug logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "readmetrics", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "readmetrics", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "readmetrics", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "readmetrics", &completions_dir).unwrap();
}
