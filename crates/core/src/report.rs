//! Output table schema.
//!
//! [`MetricsRow`] is the serialized form of [`Metrics`]: fixed column
//! headers and every ratio rounded to six decimal places.

use serde::{Deserialize, Serialize};

use crate::Metrics;

/// Column headers of the output table, in order.
pub const OUTPUT_COLUMNS: [&str; 15] = [
    "URL_ID",
    "URL",
    "POSITIVE SCORE",
    "NEGATIVE SCORE",
    "POLARITY SCORE",
    "SUBJECTIVITY SCORE",
    "AVG SENTENCE LENGTH",
    "PERCENTAGE OF COMPLEX WORDS",
    "FOG INDEX",
    "AVG NUMBER OF WORDS PER SENTENCE",
    "COMPLEX WORD COUNT",
    "WORD COUNT",
    "SYLLABLE PER WORD",
    "PERSONAL PRONOUNS",
    "AVG WORD LENGTH",
];

/// One row of the output table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRow {
    #[serde(rename = "URL_ID")]
    pub id: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "POSITIVE SCORE")]
    pub positive_score: usize,
    #[serde(rename = "NEGATIVE SCORE")]
    pub negative_score: usize,
    #[serde(rename = "POLARITY SCORE")]
    pub polarity_score: f64,
    #[serde(rename = "SUBJECTIVITY SCORE")]
    pub subjectivity_score: f64,
    #[serde(rename = "AVG SENTENCE LENGTH")]
    pub avg_sentence_length: f64,
    #[serde(rename = "PERCENTAGE OF COMPLEX WORDS")]
    pub percent_complex_words: f64,
    #[serde(rename = "FOG INDEX")]
    pub fog_index: f64,
    #[serde(rename = "AVG NUMBER OF WORDS PER SENTENCE")]
    pub avg_words_per_sentence: f64,
    #[serde(rename = "COMPLEX WORD COUNT")]
    pub complex_word_count: usize,
    #[serde(rename = "WORD COUNT")]
    pub word_count: usize,
    #[serde(rename = "SYLLABLE PER WORD")]
    pub syllables_per_word: f64,
    #[serde(rename = "PERSONAL PRONOUNS")]
    pub personal_pronouns: usize,
    #[serde(rename = "AVG WORD LENGTH")]
    pub avg_word_length: f64,
}

impl From<&Metrics> for MetricsRow {
    fn from(m: &Metrics) -> Self {
        Self {
            id: m.id.clone(),
            url: m.url.clone(),
            positive_score: m.positive_score,
            negative_score: m.negative_score,
            polarity_score: round6(m.polarity_score),
            subjectivity_score: round6(m.subjectivity_score),
            avg_sentence_length: round6(m.avg_sentence_length),
            percent_complex_words: round6(m.percent_complex_words),
            fog_index: round6(m.fog_index),
            avg_words_per_sentence: round6(m.avg_words_per_sentence),
            complex_word_count: m.complex_word_count,
            word_count: m.word_count,
            syllables_per_word: round6(m.syllables_per_word),
            personal_pronouns: m.personal_pronouns,
            avg_word_length: round6(m.avg_word_length),
        }
    }
}

/// Rounds to six decimal places.
pub fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

/// Serializes rows as CSV with the [`OUTPUT_COLUMNS`] header.
pub fn rows_to_csv(rows: &[MetricsRow]) -> crate::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if rows.is_empty() {
        writer.write_record(OUTPUT_COLUMNS)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer.into_inner().map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lexicon, compute_metrics};

    #[test]
    fn test_round6() {
        assert_eq!(round6(0.333_333_333), 0.333_333);
        assert_eq!(round6(2.000_000_6), 2.000_001);
        assert_eq!(round6(0.0), 0.0);
    }

    #[test]
    fn test_row_from_metrics() {
        let empty = Lexicon::default();
        let m = compute_metrics("One", "Two three four.", &empty, &empty, &empty, "42", "https://example.com/42");
        let row = MetricsRow::from(&m);

        assert_eq!(row.id, "42");
        assert_eq!(row.word_count, 4);
        assert_eq!(row.avg_sentence_length, 2.0);
        assert_eq!(row.avg_words_per_sentence, row.avg_sentence_length);
    }

    #[test]
    fn test_csv_header_order() {
        let csv = rows_to_csv(&[]).unwrap();
        let header = csv.lines().next().unwrap();
        assert_eq!(header, OUTPUT_COLUMNS.join(","));
    }

    #[test]
    fn test_csv_serializes_rows() {
        let empty = Lexicon::default();
        let m = compute_metrics("", "Hello there.", &empty, &empty, &empty, "1", "https://example.com");
        let csv = rows_to_csv(&[MetricsRow::from(&m)]).unwrap();

        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap(), OUTPUT_COLUMNS.join(","));
        assert!(lines.next().unwrap().starts_with("1,https://example.com,0,0,"));
    }
}
