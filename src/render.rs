//! Post → Markdown text.
//!
//! ## Document Layout
//!
//! ```text
//! ---
//! layout: post
//! title: …
//! …                                  front matter (block or flow style)
//! ---
//!
//! _This post was auto-generated._
//!
//! ![<title>](<image>)
//!
//! {% include ad.html %}              only when configured
//!
//! ## Introduction
//! …                                  six heading-delimited sections
//!
//! Explore more from our partner network: [a](https://a) and [b](https://b).
//!
//! <script type="application/ld+json">
//! { "@context": "https://schema.org", "@type": "Article", … }
//! </script>
//! ```
//!
//! Blocks are separated by exactly one blank line, line endings are `\n`, and
//! the file ends with a single newline.
//!
//! ## Front Matter Styles
//!
//! Block style is `serde_yaml_ng` output as-is. Flow style keeps one key per
//! line but writes scalars as double-quoted strings and lists inline
//! (`tags: ["ai", "esports"]`). JSON string syntax is valid YAML, so
//! `serde_json` does the quoting.

use crate::config::MetadataStyle;
use crate::types::{FrontMatter, Post, SectionContent, StructuredData};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Line placed above and below the front matter.
pub const FRONT_MATTER_MARKER: &str = "---";

pub const DISCLAIMER: &str = "_This post was auto-generated._";

/// Render the complete post text.
pub fn render_document(post: &Post, style: MetadataStyle) -> Result<String, RenderError> {
    let fm = &post.front_matter;
    let mut blocks = vec![
        render_front_matter(fm, style)?,
        DISCLAIMER.to_string(),
        format!("![{}]({})", escape_alt(&fm.title), fm.image),
    ];
    if let Some(include) = &post.ad_include {
        blocks.push(include.clone());
    }
    for section in &post.sections {
        blocks.push(format!("## {}", section.heading));
        match &section.content {
            SectionContent::Paragraphs(paragraphs) => blocks.extend(paragraphs.iter().cloned()),
            SectionContent::Bullets(items) => blocks.push(
                items
                    .iter()
                    .map(|item| format!("- {item}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
        }
    }
    if let Some(sentence) = render_backlinks(&post.backlinks) {
        blocks.push(sentence);
    }
    blocks.push(render_structured_data(&post.structured_data)?);

    Ok(normalize_line_endings(&blocks.join("\n\n")))
}

/// Front matter including both marker lines, without a trailing newline.
pub fn render_front_matter(fm: &FrontMatter, style: MetadataStyle) -> Result<String, RenderError> {
    let body = match style {
        MetadataStyle::Block => block_yaml(fm)?,
        MetadataStyle::Flow => flow_yaml(fm)?,
    };
    Ok(format!(
        "{FRONT_MATTER_MARKER}\n{}\n{FRONT_MATTER_MARKER}",
        body.trim_end()
    ))
}

fn block_yaml(fm: &FrontMatter) -> Result<String, RenderError> {
    let yaml = serde_yaml_ng::to_string(fm)?;
    Ok(yaml
        .strip_prefix("---\n")
        .map(str::to_string)
        .unwrap_or(yaml))
}

fn flow_yaml(fm: &FrontMatter) -> Result<String, RenderError> {
    let lines = [
        ("layout", quoted(&fm.layout)?),
        ("title", quoted(&fm.title)?),
        ("date", fm.date.clone()),
        ("author", quoted(&fm.author)?),
        ("description", quoted(&fm.description)?),
        ("image", quoted(&fm.image)?),
        ("permalink", quoted(&fm.permalink)?),
        ("tags", inline_list(&fm.tags)?),
        ("categories", inline_list(&fm.categories)?),
        ("keywords", inline_list(&fm.keywords)?),
    ];
    Ok(lines
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn quoted(value: &str) -> Result<String, RenderError> {
    Ok(serde_json::to_string(value)?)
}

fn inline_list(values: &[String]) -> Result<String, RenderError> {
    let items = values
        .iter()
        .map(|v| quoted(v))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("[{}]", items.join(", ")))
}

/// Escape characters that would end Markdown image alt text early.
fn escape_alt(text: &str) -> String {
    text.replace('[', "\\[").replace(']', "\\]")
}

/// Join items as `a`, `a and b`, or `a, b and c`.
pub fn join_with_and(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

/// The trailing partner sentence, or `None` when there are no domains.
pub fn render_backlinks(domains: &[String]) -> Option<String> {
    if domains.is_empty() {
        return None;
    }
    let links: Vec<String> = domains
        .iter()
        .map(|d| format!("[{d}](https://{d})"))
        .collect();
    Some(format!(
        "Explore more from our partner network: {}.",
        join_with_and(&links)
    ))
}

/// JSON-LD wrapped in a `<script>` element.
///
/// `</` is written as `<\/` so no string value can close the element early.
pub fn render_structured_data(data: &StructuredData) -> Result<String, RenderError> {
    let json = serde_json::to_string_pretty(data)?.replace("</", "<\\/");
    Ok(format!(
        "<script type=\"application/ld+json\">\n{json}\n</script>"
    ))
}

/// Convert `\r\n` and lone `\r` to `\n` and end with exactly one newline.
pub fn normalize_line_endings(text: &str) -> String {
    let mut out = text.replace("\r\n", "\n").replace('\r', "\n");
    let trimmed = out.trim_end_matches('\n').len();
    out.truncate(trimmed);
    out.push('\n');
    out
}
