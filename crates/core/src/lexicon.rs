//! Word lists used for stopword removal and sentiment scoring.
//!
//! Lexicon files hold one token per line. Anything after the first `|` is an
//! annotation and is discarded, tokens are lowercased, and blank lines are
//! ignored:
//!
//! ```text
//! ABOUT | Generic
//! Able
//!
//! abundance|2009
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{MetricsError, Result};

/// File names expected inside the master dictionary directory.
pub const POSITIVE_WORDS_FILE: &str = "positive-words.txt";
pub const NEGATIVE_WORDS_FILE: &str = "negative-words.txt";

/// An immutable set of lowercase word forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// Parses lexicon text in the one-token-per-line format.
    pub fn parse(content: &str) -> Self {
        content.lines().filter_map(parse_line).collect()
    }

    /// Reads a lexicon file.
    ///
    /// Bytes that are not valid UTF-8 are dropped rather than rejected.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(MetricsError::FileNotFound(path.to_path_buf()));
        }

        let bytes = fs::read(path)?;
        let content = String::from_utf8_lossy(&bytes).replace(char::REPLACEMENT_CHARACTER, "");
        Ok(Self::parse(&content))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<String> for Lexicon {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self { words: iter.into_iter().map(|w| w.to_lowercase()).collect() }
    }
}

fn parse_line(line: &str) -> Option<String> {
    let token = line.trim().split('|').next().unwrap_or_default().trim();
    if token.is_empty() { None } else { Some(token.to_lowercase()) }
}

/// Loads and merges every stopword file matching a glob pattern.
///
/// No matching file is not an error: a warning is logged and the result is
/// an empty lexicon, so every token survives cleaning.
pub fn load_stopwords(pattern: &str) -> Result<Lexicon> {
    let paths: Vec<PathBuf> = glob::glob(pattern)?.filter_map(std::result::Result::ok).collect();
    if paths.is_empty() {
        warn!(pattern, "no stopword files found");
    }

    let mut words = Vec::new();
    for path in paths.iter().filter(|p| p.is_file()) {
        let lexicon = Lexicon::from_file(path)?;
        debug!(path = %path.display(), count = lexicon.len(), "loaded stopwords");
        words.extend(lexicon.words);
    }

    Ok(words.into_iter().collect())
}

/// Loads the positive and negative word lists from a master dictionary directory.
///
/// A missing file yields an empty lexicon and a warning.
pub fn load_master_dictionary(dir: impl AsRef<Path>) -> Result<(Lexicon, Lexicon)> {
    let dir = dir.as_ref();
    let positive = load_optional(&dir.join(POSITIVE_WORDS_FILE))?;
    let negative = load_optional(&dir.join(NEGATIVE_WORDS_FILE))?;
    Ok((positive, negative))
}

fn load_optional(path: &Path) -> Result<Lexicon> {
    match Lexicon::from_file(path) {
        Ok(lexicon) => {
            debug!(path = %path.display(), count = lexicon.len(), "loaded lexicon");
            Ok(lexicon)
        }
        Err(MetricsError::FileNotFound(_)) => {
            warn!(path = %path.display(), "lexicon file not found");
            Ok(Lexicon::default())
        }
        Err(e) => Err(e),
    }
}
