//! The generated document.
//!
//! A [`Post`] is produced once per run by [`crate::generate`], rendered to
//! text by [`crate::render`], and written by [`crate::output`]. Nothing mutates
//! it after assembly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Front matter consumed by the static-site generator.
///
/// Field order here is the key order in the rendered header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    pub layout: String,
    pub title: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub author: String,
    pub description: String,
    pub image: String,
    pub permalink: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub keywords: Vec<String>,
}

/// Body of one `##` section.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    /// Blank-line separated paragraphs.
    Paragraphs(Vec<String>),
    /// `- item` list.
    Bullets(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: &'static str,
    pub content: SectionContent,
}

/// schema.org `Article` record embedded as JSON-LD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredData {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    pub headline: String,
    pub description: String,
    pub image: String,
    pub date_published: String,
    pub date_modified: String,
    pub author: Organization,
    pub publisher: Organization,
    pub main_entity_of_page: WebPage,
    pub keywords: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObject>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub kind: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebPage {
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "@id")]
    pub id: String,
}

/// A fully assembled post, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub date: NaiveDate,
    pub slug: String,
    pub front_matter: FrontMatter,
    /// Include line placed after the hero image, if any.
    pub ad_include: Option<String>,
    pub sections: Vec<Section>,
    /// Partner domains linked in the trailing sentence; may be empty.
    pub backlinks: Vec<String>,
    pub structured_data: StructuredData,
}

impl Post {
    /// `<YYYY-MM-DD>-<slug>.md`
    pub fn file_name(&self) -> String {
        format!("{}-{}.md", self.date.format("%Y-%m-%d"), self.slug)
    }

    /// Path of this post under `posts_dir`.
    pub fn path_in(&self, posts_dir: &Path) -> PathBuf {
        posts_dir.join(self.file_name())
    }
}
