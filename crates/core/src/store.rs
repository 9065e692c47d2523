//! Input list, output table and article text persistence.
//!
//! The output table doubles as the resume log: ids already present in it are
//! skipped on the next run, and rows are de-duplicated by id keeping the
//! first occurrence.

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{info, warn};

use crate::report::{MetricsRow, rows_to_csv};
use crate::{MetricsError, Result};

/// One article to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRecord {
    pub id: String,
    pub url: String,
}

/// Reads the list of articles to process.
///
/// Uses the `URL_ID` and `URL` columns when the header has them, otherwise
/// the first two columns. Values are trimmed; rows missing either value are
/// skipped.
pub fn read_input(path: impl AsRef<Path>) -> Result<Vec<InputRecord>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(MetricsError::FileNotFound(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.trim().to_string()).collect();

    let (id_col, url_col) = match (
        headers.iter().position(|h| h == "URL_ID"),
        headers.iter().position(|h| h == "URL"),
    ) {
        (Some(id), Some(url)) => (id, url),
        _ if headers.len() >= 2 => (0, 1),
        _ => {
            return Err(MetricsError::InputError(format!(
                "{} needs URL_ID and URL columns",
                path.display()
            )));
        }
    };

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        let id = record.get(id_col).unwrap_or_default().trim();
        let url = record.get(url_col).unwrap_or_default().trim();
        if id.is_empty() || url.is_empty() {
            continue;
        }
        records.push(InputRecord { id: id.to_string(), url: url.to_string() });
    }

    Ok(records)
}

/// The output table, loaded once and written back after new rows are appended.
#[derive(Debug)]
pub struct MetricsStore {
    path: PathBuf,
    existing: Vec<MetricsRow>,
    pending: Vec<MetricsRow>,
}

impl MetricsStore {
    /// Opens the output table at `path`.
    ///
    /// A missing file starts an empty table. An unreadable one is logged and
    /// also treated as empty, so every input is processed again.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let existing = if path.is_file() {
            match read_rows(&path) {
                Ok(rows) => {
                    info!(count = rows.len(), "found already processed rows");
                    rows
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "could not read existing output");
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        Self { path, existing, pending: Vec::new() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ids already present in the table.
    pub fn processed_ids(&self) -> HashSet<String> {
        self.existing.iter().map(row_key).collect()
    }

    pub fn append(&mut self, rows: impl IntoIterator<Item = MetricsRow>) {
        self.pending.extend(rows);
    }

    /// Existing rows followed by appended ones, first occurrence of each id kept.
    pub fn rows(&self) -> Vec<MetricsRow> {
        let mut seen = HashSet::new();
        self.existing
            .iter()
            .chain(&self.pending)
            .filter(|row| seen.insert(row_key(row)))
            .cloned()
            .collect()
    }

    /// Writes the table, creating the parent directory if needed.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, rows_to_csv(&self.rows())?)?;
        Ok(())
    }
}

fn row_key(row: &MetricsRow) -> String {
    row.id.trim().to_string()
}

fn read_rows(path: &Path) -> Result<Vec<MetricsRow>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_path(path)?;
    reader.deserialize().map(|r| r.map_err(MetricsError::from)).collect()
}

/// Writes `<dir>/<id>.txt` holding the title, a blank line, then the body.
///
/// # Errors
///
/// Returns [`MetricsError::InputError`] when `id` is not a plain file name
/// (empty, `.`/`..`, or containing a path separator), so the file always
/// lands directly inside `dir`.
pub fn save_article(dir: impl AsRef<Path>, id: &str, title: &str, body: &str) -> Result<PathBuf> {
    let dir = dir.as_ref();
    if !is_plain_file_name(id) {
        return Err(MetricsError::InputError(format!("article id {:?} is not a valid file name", id)));
    }
    fs::create_dir_all(dir)?;

    let out_path = dir.join(format!("{}.txt", id));
    let mut content = String::new();
    if !title.is_empty() {
        content.push_str(title);
        content.push_str("\n\n");
    }
    content.push_str(body);

    fs::write(&out_path, content)?;
    Ok(out_path)
}

fn is_plain_file_name(id: &str) -> bool {
    if id.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(id).components();
    matches!((components.next(), components.next()), (Some(Component::Normal(_)), None))
}
