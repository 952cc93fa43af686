//! Post assembly.
//!
//! One straight-line pass from content pools to a [`GeneratedPost`]:
//!
//! ```text
//! topic + title template ──► title ──► slug ──► path, permalink
//! section pools ──► sampled sentences/bullets ──► interlinked body
//! domains − site domain ──► 0..=2 backlinks
//! image templates ──► hero image ({rand} filled)
//! tags / categories / keywords ──► sorted subsets
//!                 └──────────────► front matter + JSON-LD ──► text
//! ```
//!
//! ## Randomness
//!
//! Every choice draws from the caller's RNG, so a seeded
//! [`rand::rngs::StdRng`] and a fixed date reproduce a post exactly. Sampling
//! inside a section is without replacement; sections sample independently
//! of each other.
//!
//! ## Interlinking
//!
//! The first introduction paragraph and the case-study paragraph get up to
//! `post.links_per_paragraph` same-site links each, from
//! `pools.internal_links`. A phrase (compared case-insensitively) is linked at
//! most once per document, and only its first literal occurrence is wrapped.
//!
//! ## Collisions
//!
//! Two posts with the same date and title map to the same path. Nothing here
//! prevents that; the later write wins.

use crate::config::{GeneratorConfig, SiteSettings};
use crate::pools::InternalLink;
use crate::render::{self, RenderError};
use crate::slug::slugify;
use crate::types::{
    FrontMatter, ImageObject, Organization, Post, Section, SectionContent, StructuredData,
    WebPage,
};
use chrono::{Datelike, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("content pool '{0}' is empty")]
    EmptyPool(&'static str),
    #[error(transparent)]
    Render(#[from] RenderError),
}

pub const INTRODUCTION: &str = "Introduction";
pub const KEY_HIGHLIGHTS: &str = "Key Highlights";
pub const CASE_STUDY: &str = "Case Study";
pub const STRATEGY_BREAKDOWN: &str = "Strategy Breakdown";
pub const ACTIONABLE_TIPS: &str = "Actionable Tips";
pub const CLOSING_THOUGHTS: &str = "Closing Thoughts";

/// Result of one generation: where the post goes and what it says.
#[derive(Debug, Clone)]
pub struct GeneratedPost {
    pub path: PathBuf,
    pub text: String,
    pub post: Post,
}

/// Assemble and render one post for `date`.
pub fn generate<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    date: NaiveDate,
    rng: &mut R,
) -> Result<GeneratedPost, GenerateError> {
    let post = assemble_post(config, date, rng)?;
    let text = render::render_document(&post, config.output.metadata_style)?;
    Ok(GeneratedPost {
        path: post.path_in(&config.output.posts_dir),
        text,
        post,
    })
}

/// Make every random choice and build the [`Post`] model.
pub fn assemble_post<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    date: NaiveDate,
    rng: &mut R,
) -> Result<Post, GenerateError> {
    let pools = &config.pools;
    let shape = &config.post;
    let year = date.year();

    let topic = choose(&pools.topics, "topics", rng)?;
    let template = choose(&pools.title_templates, "title_templates", rng)?;
    let title = render_title(template, topic, year);
    let slug = slugify(&title);
    debug!(%topic, %template, %slug, "selected title");

    let mut linked = HashSet::new();

    let mut intro = sample_paragraphs(
        &pools.intro,
        "intro",
        shape.intro_paragraphs,
        shape.sentences,
        year,
        rng,
    )?;
    if let Some(first) = intro.first_mut() {
        *first = interlink(
            first,
            &pools.internal_links,
            shape.links_per_paragraph,
            &mut linked,
        );
    }

    let highlights = sample_bullets(&pools.highlights, "highlights", shape.bullets, year, rng)?;

    let mut case_study =
        sample_paragraphs(&pools.case_study, "case_study", 1, shape.sentences, year, rng)?;
    if let Some(first) = case_study.first_mut() {
        *first = interlink(
            first,
            &pools.internal_links,
            shape.links_per_paragraph,
            &mut linked,
        );
    }
    debug!(links = ?linked, "interlinked phrases");

    let strategy = sample_bullets(&pools.strategy, "strategy", shape.bullets, year, rng)?;
    let tips = sample_bullets(&pools.tips, "tips", shape.bullets, year, rng)?;
    let closing = sample_paragraphs(
        &pools.closing,
        "closing",
        1,
        shape.closing_sentences,
        year,
        rng,
    )?;

    let backlinks = pick_backlinks(&pools.domains, &config.site.domain, shape.backlinks, rng);
    debug!(?backlinks, "selected backlinks");

    let image = pick_image(&pools.images, rng)?;
    let tags = sample_sorted(&pools.tags, shape.tags, rng);
    let categories = sample_sorted(&pools.categories, shape.categories, rng);
    let keywords = sample_sorted(&pools.keywords, shape.keywords, rng);

    let link = permalink(date, &slug);

    let front_matter = FrontMatter {
        layout: config.output.layout.clone(),
        title,
        date: date.format("%Y-%m-%d").to_string(),
        author: config.site.author.clone(),
        description: config.site.description.clone(),
        image,
        permalink: link,
        tags,
        categories,
        keywords,
    };
    let structured_data = structured_data(&config.site, &front_matter);

    let ad_include = Some(config.output.ad_include.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(Post {
        date,
        slug,
        front_matter,
        ad_include,
        sections: vec![
            Section {
                heading: INTRODUCTION,
                content: SectionContent::Paragraphs(intro),
            },
            Section {
                heading: KEY_HIGHLIGHTS,
                content: SectionContent::Bullets(highlights),
            },
            Section {
                heading: CASE_STUDY,
                content: SectionContent::Paragraphs(case_study),
            },
            Section {
                heading: STRATEGY_BREAKDOWN,
                content: SectionContent::Bullets(strategy),
            },
            Section {
                heading: ACTIONABLE_TIPS,
                content: SectionContent::Bullets(tips),
            },
            Section {
                heading: CLOSING_THOUGHTS,
                content: SectionContent::Paragraphs(closing),
            },
        ],
        backlinks,
        structured_data,
    })
}

/// Fill `{year}` and `{topic}` in a title template.
///
/// `{year}` is substituted first so a topic containing that literal text is
/// left alone.
pub fn render_title(template: &str, topic: &str, year: i32) -> String {
    template
        .replace("{year}", &year.to_string())
        .replace("{topic}", topic)
}

/// `/<YYYY>/<MM>/<DD>/<slug>/`
pub fn permalink(date: NaiveDate, slug: &str) -> String {
    format!("/{}/{}/", date.format("%Y/%m/%d"), slug)
}

fn choose<'a, R: Rng + ?Sized>(
    pool: &'a [String],
    role: &'static str,
    rng: &mut R,
) -> Result<&'a str, GenerateError> {
    pool.choose(rng)
        .map(String::as_str)
        .ok_or(GenerateError::EmptyPool(role))
}

/// Sample `count` paragraphs whose sentence counts fall in `sentences`.
///
/// Sentences are drawn without replacement across all paragraphs of the
/// section. When the pool runs short, later paragraphs are shorter and empty
/// ones are dropped.
fn sample_paragraphs<R: Rng + ?Sized>(
    pool: &[String],
    role: &'static str,
    count: usize,
    [min, max]: [usize; 2],
    year: i32,
    rng: &mut R,
) -> Result<Vec<String>, GenerateError> {
    if pool.is_empty() {
        return Err(GenerateError::EmptyPool(role));
    }
    let sizes: Vec<usize> = (0..count).map(|_| rng.gen_range(min..=max)).collect();
    let total = sizes.iter().sum();
    let mut picked = pool.choose_multiple(rng, total);

    let year = year.to_string();
    let paragraphs = sizes
        .iter()
        .map(|&n| {
            picked
                .by_ref()
                .take(n)
                .map(|s| s.replace("{year}", &year))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|p| !p.is_empty())
        .collect();
    Ok(paragraphs)
}

fn sample_bullets<R: Rng + ?Sized>(
    pool: &[String],
    role: &'static str,
    [min, max]: [usize; 2],
    year: i32,
    rng: &mut R,
) -> Result<Vec<String>, GenerateError> {
    if pool.is_empty() {
        return Err(GenerateError::EmptyPool(role));
    }
    let n = rng.gen_range(min..=max);
    let year = year.to_string();
    Ok(pool
        .choose_multiple(rng, n)
        .map(|s| s.replace("{year}", &year))
        .collect())
}

/// Pick `n` entries, then de-duplicate and sort them for presentation.
fn sample_sorted<R: Rng + ?Sized>(pool: &[String], n: usize, rng: &mut R) -> Vec<String> {
    let mut picked: Vec<String> = pool.choose_multiple(rng, n).cloned().collect();
    picked.sort();
    picked.dedup();
    picked
}

/// Choose partner domains for the trailing backlink sentence.
///
/// The site's own domain (case-insensitive) and duplicate pool entries are
/// never candidates. Returns fewer than requested when candidates run out,
/// possibly none.
pub fn pick_backlinks<R: Rng + ?Sized>(
    domains: &[String],
    site_domain: &str,
    [min, max]: [usize; 2],
    rng: &mut R,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let candidates: Vec<&String> = domains
        .iter()
        .filter(|d| !d.eq_ignore_ascii_case(site_domain))
        .filter(|d| seen.insert(d.to_ascii_lowercase()))
        .collect();
    let n = rng.gen_range(min..=max);
    candidates
        .choose_multiple(rng, n)
        .map(|d| d.to_string())
        .collect()
}

/// Choose a hero image, replacing every `{rand}` with one 5-digit number.
pub fn pick_image<R: Rng + ?Sized>(images: &[String], rng: &mut R) -> Result<String, GenerateError> {
    let template = choose(images, "images", rng)?;
    if template.contains("{rand}") {
        let n: u32 = rng.gen_range(10_000..=99_999);
        Ok(template.replace("{rand}", &n.to_string()))
    } else {
        Ok(template.to_string())
    }
}

/// Wrap up to `limit` phrases of `paragraph` as `[phrase](target)` links.
///
/// `linked` carries lowercased phrases already linked elsewhere in the
/// document; they are skipped and newly linked phrases are added. Candidate
/// spans never overlap.
pub fn interlink(
    paragraph: &str,
    links: &[InternalLink],
    limit: usize,
    linked: &mut HashSet<String>,
) -> String {
    let mut spans: Vec<(usize, usize, &str)> = Vec::new();
    for link in links {
        if spans.len() >= limit {
            break;
        }
        let key = link.phrase.to_lowercase();
        if link.phrase.is_empty() || linked.contains(&key) {
            continue;
        }
        let Some(start) = paragraph.find(&link.phrase) else {
            continue;
        };
        let end = start + link.phrase.len();
        if spans.iter().any(|&(s, e, _)| start < e && s < end) {
            continue;
        }
        linked.insert(key);
        spans.push((start, end, &link.target));
    }
    spans.sort_by_key(|&(start, _, _)| start);

    let mut out = String::with_capacity(paragraph.len() + spans.len() * 32);
    let mut cursor = 0;
    for (start, end, target) in spans {
        out.push_str(&paragraph[cursor..start]);
        out.push('[');
        out.push_str(&paragraph[start..end]);
        out.push_str("](");
        out.push_str(target);
        out.push(')');
        cursor = end;
    }
    out.push_str(&paragraph[cursor..]);
    out
}

fn structured_data(site: &SiteSettings, fm: &FrontMatter) -> StructuredData {
    let logo = Some(site.logo.trim())
        .filter(|s| !s.is_empty())
        .map(|url| ImageObject {
            kind: "ImageObject".to_string(),
            url: url.to_string(),
        });
    StructuredData {
        context: "https://schema.org".to_string(),
        kind: "Article".to_string(),
        headline: fm.title.clone(),
        description: fm.description.clone(),
        image: fm.image.clone(),
        date_published: fm.date.clone(),
        date_modified: fm.date.clone(),
        author: Organization {
            kind: "Organization".to_string(),
            name: fm.author.clone(),
            logo: None,
        },
        publisher: Organization {
            kind: "Organization".to_string(),
            name: site.name.clone(),
            logo,
        },
        main_entity_of_page: WebPage {
            kind: "WebPage".to_string(),
            id: format!("{}{}", site.base_url(), fm.permalink),
        },
        keywords: fm.keywords.join(", "),
    }
}
