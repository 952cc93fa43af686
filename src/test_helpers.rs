//! Shared test utilities for the postgen test suite.
//!
//! Provides a seeded RNG and fixed date for reproducible posts, plus helpers
//! that pull a rendered document apart again (front matter, sections, links)
//! so tests can assert on what a reader of the file would see.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let generated = generate(&config, fixed_date(), &mut seeded(7)).unwrap();
//! let fm = parse_front_matter(&generated.text);
//! let bullets = section_lines(&generated.text, "Key Highlights");
//! ```

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::types::{FrontMatter, Post, SectionContent};

// =========================================================================
// Reproducibility
// =========================================================================

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// 2025-01-01
pub fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

// =========================================================================
// Document parsing
// =========================================================================

/// Split a rendered post into (front matter YAML, everything after it).
/// Panics if the document does not open with a `---` delimited header.
pub fn split_front_matter(doc: &str) -> (String, String) {
    let rest = doc
        .strip_prefix("---\n")
        .unwrap_or_else(|| panic!("document does not start with '---':\n{doc}"));
    let end = rest
        .find("\n---\n")
        .unwrap_or_else(|| panic!("front matter is not closed:\n{doc}"));
    (rest[..end].to_string(), rest[end + 5..].to_string())
}

pub fn parse_front_matter(doc: &str) -> FrontMatter {
    let (yaml, _) = split_front_matter(doc);
    serde_yaml_ng::from_str(&yaml)
        .unwrap_or_else(|e| panic!("front matter does not parse: {e}\n{yaml}"))
}

/// Non-empty lines under `## <heading>`, up to the next heading or the
/// structured-data block.
pub fn section_lines(doc: &str, heading: &str) -> Vec<String> {
    let marker = format!("## {heading}");
    let mut lines = doc.lines().skip_while(|l| *l != marker);
    assert!(lines.next().is_some(), "section '{heading}' not found");
    lines
        .take_while(|l| !l.starts_with("## ") && !l.starts_with("<script"))
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Replace every `[text](target)` with `text`.
pub fn strip_links(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('[') {
        let Some(mid) = rest[open..].find("](").map(|i| open + i) else {
            break;
        };
        let Some(close) = rest[mid..].find(')').map(|i| mid + i) else {
            break;
        };
        out.push_str(&rest[..open]);
        out.push_str(&rest[open + 1..mid]);
        rest = &rest[close + 1..];
    }
    out.push_str(rest);
    out
}

/// Decompose `paragraph` into the pool sentences it was joined from.
/// Panics if any part of it is not a pool entry (with `{year}` filled).
pub fn pool_sentences(paragraph: &str, pool: &[String], year: i32) -> Vec<String> {
    let filled: Vec<String> = pool
        .iter()
        .map(|s| s.replace("{year}", &year.to_string()))
        .collect();
    let mut found = Vec::new();
    let mut rest = paragraph;
    while !rest.is_empty() {
        let sentence = filled
            .iter()
            .filter(|s| rest.starts_with(s.as_str()))
            .max_by_key(|s| s.len())
            .unwrap_or_else(|| panic!("'{rest}' does not start with a pool sentence"));
        found.push(sentence.clone());
        rest = rest[sentence.len()..].trim_start_matches(' ');
    }
    found
}

// =========================================================================
// Post model lookups — panics with a clear message on miss
// =========================================================================

fn content_of<'a>(post: &'a Post, heading: &str) -> &'a SectionContent {
    post.sections
        .iter()
        .find(|s| s.heading == heading)
        .map(|s| &s.content)
        .unwrap_or_else(|| {
            let headings: Vec<&str> = post.sections.iter().map(|s| s.heading).collect();
            panic!("section '{heading}' not found. Available: {headings:?}")
        })
}

pub fn paragraphs_of<'a>(post: &'a Post, heading: &str) -> &'a [String] {
    match content_of(post, heading) {
        SectionContent::Paragraphs(p) => p,
        other => panic!("section '{heading}' is not paragraphs: {other:?}"),
    }
}

pub fn bullets_of<'a>(post: &'a Post, heading: &str) -> &'a [String] {
    match content_of(post, heading) {
        SectionContent::Bullets(b) => b,
        other => panic!("section '{heading}' is not bullets: {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_links_keeps_link_text() {
        assert_eq!(
            strip_links("Good [matchmaking](/tags/matchmaking/) and [ai](/a/)."),
            "Good matchmaking and ai."
        );
        assert_eq!(strip_links("no links [here"), "no links [here");
    }

    #[test]
    fn pool_sentences_splits_joined_paragraph() {
        let pool = vec!["One.".to_string(), "Two in {year}.".to_string()];
        assert_eq!(
            pool_sentences("Two in 2025. One.", &pool, 2025),
            vec!["Two in 2025.", "One."]
        );
    }

    #[test]
    fn split_front_matter_separates_header() {
        let (fm, body) = split_front_matter("---\ntitle: Hi\n---\n\n# Body\n");
        assert_eq!(fm, "title: Hi");
        assert_eq!(body, "\n# Body\n");
    }
}
