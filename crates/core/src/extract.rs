//! Best-effort title and body extraction.
//!
//! The heuristics are deliberately simple: a title from the first heading or
//! page metadata, and a body from the paragraphs of the richest `<article>`
//! (or `<body>`) on the page.

use serde::Serialize;

use crate::Result;
use crate::parse::{Document, Element};

/// Plain-text title and body of an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedArticle {
    pub title: String,
    pub body: String,
}

/// Turns raw page markup into an [`ExtractedArticle`].
pub trait Extractor {
    fn extract(&self, html: &str) -> Result<ExtractedArticle>;
}

/// [`Extractor`] using the paragraph heuristics in [`extract_article`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlExtractor;

impl Extractor for HtmlExtractor {
    fn extract(&self, html: &str) -> Result<ExtractedArticle> {
        extract_article(&Document::parse(html))
    }
}

/// Extracts the title and body text from a parsed document.
///
/// Title priority: first `<h1>`, then `og:title`, then `<title>`.
///
/// Body: for every `<article>` (or `<body>` when there is none) the text of
/// its `<p>` descendants is joined with spaces and the longest result wins.
/// A leading copy of the title is stripped. When that leaves nothing, all
/// paragraphs in the document are used instead.
pub fn extract_article(doc: &Document) -> Result<ExtractedArticle> {
    let title = extract_title(doc)?;

    let mut candidates = doc.select("article")?;
    if candidates.is_empty() {
        candidates = doc.select("body")?;
    }

    let mut body = String::new();
    for candidate in &candidates {
        let text = paragraph_text(&candidate.select("p")?);
        if text.chars().count() > body.chars().count() {
            body = text;
        }
    }
    let mut body = body.trim().to_string();

    if !title.is_empty()
        && let Some(rest) = strip_prefix_ignore_case(&body, &title)
    {
        body = rest.trim_start().to_string();
    }

    if body.is_empty() {
        body = paragraph_text(&doc.select("p")?);
    }

    Ok(ExtractedArticle { title, body })
}

fn extract_title(doc: &Document) -> Result<String> {
    if let Some(h1) = doc.select("h1")?.first() {
        let text = h1.text();
        if !text.is_empty() {
            return Ok(text);
        }
    }

    Ok(doc.meta_property("og:title").or_else(|| doc.title()).unwrap_or_default())
}

fn paragraph_text(paragraphs: &[Element<'_>]) -> String {
    paragraphs.iter().map(Element::text).collect::<Vec<_>>().join(" ")
}

/// Case-insensitive prefix strip, measured in characters of `prefix`.
fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let count = prefix.chars().count();
    let end = match text.char_indices().nth(count) {
        Some((i, _)) => i,
        None if text.chars().count() == count => text.len(),
        None => return None,
    };
    (text[..end].to_lowercase() == prefix.to_lowercase()).then(|| &text[end..])
}
