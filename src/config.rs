//! Generator configuration.
//!
//! Handles loading, validating, and layering `postgen.toml`. Stock defaults
//! are the base layer; a config file overrides just the keys it names; the
//! `SITE_DOMAIN` environment variable overrides `site.domain`; CLI flags are
//! applied last by the binary.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! domain = "hubgaming.io"      # Canonical domain; never used as a backlink
//! name = "HubGaming"
//! author = "HubGaming Team"
//! description = "Daily AI/esports insight from HubGaming."
//! logo = "https://hubgaming.io/assets/logo.png"
//!
//! [output]
//! posts_dir = "_posts"
//! metadata_style = "block"     # "block" or "flow"
//! layout = "post"
//! ad_include = "{% include ad.html %}"   # "" disables
//!
//! [post]
//! intro_paragraphs = 2
//! sentences = [3, 5]           # per paragraph, inclusive range
//! closing_sentences = [2, 3]
//! bullets = [4, 5]             # per bullet section, inclusive range
//! tags = 4
//! categories = 2
//! keywords = 6
//! backlinks = [1, 2]
//! links_per_paragraph = 2
//!
//! [pools]
//! # Any content pool may be replaced; see `pools` module.
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::pools::ContentPools;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "postgen.toml";

/// Environment variable overriding `site.domain`.
pub const SITE_DOMAIN_ENV: &str = "SITE_DOMAIN";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Full generator configuration.
///
/// All fields have defaults; a user config file need only specify the values
/// it wants to override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Identity of the site the posts are published on.
    pub site: SiteSettings,
    /// Where and how posts are written.
    pub output: OutputConfig,
    /// Section sizes and metadata counts.
    pub post: PostConfig,
    /// Candidate strings for every content role.
    pub pools: ContentPools,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSettings {
    /// Bare domain, e.g. `hubgaming.io`. Used for canonical URLs and excluded
    /// from backlinks.
    pub domain: String,
    pub name: String,
    pub author: String,
    pub description: String,
    /// Publisher logo URL for the structured-data block.
    pub logo: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            domain: "hubgaming.io".to_string(),
            name: "HubGaming".to_string(),
            author: "HubGaming Team".to_string(),
            description: "Daily AI/esports insight from HubGaming.".to_string(),
            logo: "https://hubgaming.io/assets/logo.png".to_string(),
        }
    }
}

impl SiteSettings {
    /// `https://<domain>`, without trailing slash.
    pub fn base_url(&self) -> String {
        format!("https://{}", self.domain)
    }
}

/// How the front matter block is serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MetadataStyle {
    /// One key per line, sequences as `- item` lists.
    #[default]
    Block,
    /// One key per line, sequences inline as `[a, b]`.
    Flow,
}

impl std::fmt::Display for MetadataStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetadataStyle::Block => write!(f, "block"),
            MetadataStyle::Flow => write!(f, "flow"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory posts are written to, created if absent.
    pub posts_dir: PathBuf,
    pub metadata_style: MetadataStyle,
    /// Front matter `layout` value.
    pub layout: String,
    /// Template include line placed after the hero image. Empty disables it.
    pub ad_include: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            posts_dir: PathBuf::from("_posts"),
            metadata_style: MetadataStyle::Block,
            layout: "post".to_string(),
            ad_include: "{% include ad.html %}".to_string(),
        }
    }
}

/// Section sizes. Ranges are inclusive `[min, max]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PostConfig {
    pub intro_paragraphs: usize,
    pub sentences: [usize; 2],
    pub closing_sentences: [usize; 2],
    pub bullets: [usize; 2],
    pub tags: usize,
    pub categories: usize,
    pub keywords: usize,
    pub backlinks: [usize; 2],
    /// Maximum internal links inserted into a single interlinked paragraph.
    pub links_per_paragraph: usize,
}

impl Default for PostConfig {
    fn default() -> Self {
        Self {
            intro_paragraphs: 2,
            sentences: [3, 5],
            closing_sentences: [2, 3],
            bullets: [4, 5],
            tags: 4,
            categories: 2,
            keywords: 6,
            backlinks: [1, 2],
            links_per_paragraph: 2,
        }
    }
}

/// Pools that must have at least one entry for a post to be assembled.
const REQUIRED_POOLS: &[&str] = &[
    "title_templates",
    "topics",
    "intro",
    "highlights",
    "case_study",
    "strategy",
    "tips",
    "closing",
    "images",
];

impl GeneratorConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_domain(&self.site.domain)?;
        if self.output.posts_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "output.posts_dir must not be empty".into(),
            ));
        }
        if self.post.intro_paragraphs == 0 {
            return Err(ConfigError::Validation(
                "post.intro_paragraphs must be at least 1".into(),
            ));
        }
        for (key, [min, max]) in [
            ("post.sentences", self.post.sentences),
            ("post.closing_sentences", self.post.closing_sentences),
            ("post.bullets", self.post.bullets),
        ] {
            if min == 0 || min > max {
                return Err(ConfigError::Validation(format!(
                    "{key} must be [min, max] with 1 <= min <= max"
                )));
            }
        }
        let [min, max] = self.post.backlinks;
        if min > max {
            return Err(ConfigError::Validation(
                "post.backlinks must be [min, max] with min <= max".into(),
            ));
        }
        for (role, pool) in self.pools.roles() {
            if pool.is_empty() && REQUIRED_POOLS.contains(&role) {
                return Err(ConfigError::Validation(format!(
                    "pools.{role} must not be empty"
                )));
            }
        }
        Ok(())
    }

    /// Replace `site.domain` with `domain` when one is given.
    pub fn apply_domain_override(&mut self, domain: Option<String>) -> Result<(), ConfigError> {
        if let Some(domain) = domain {
            validate_domain(&domain)?;
            self.site.domain = domain;
        }
        Ok(())
    }

    /// Apply the `SITE_DOMAIN` environment variable, if set.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        let domain = match std::env::var(SITE_DOMAIN_ENV) {
            Ok(value) => Some(value),
            Err(std::env::VarError::NotPresent) => None,
            Err(std::env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::Validation(format!(
                    "{SITE_DOMAIN_ENV} is not valid unicode"
                )));
            }
        };
        self.apply_domain_override(domain)
    }
}

/// A bare host name: no scheme, path, or whitespace.
fn validate_domain(domain: &str) -> Result<(), ConfigError> {
    let ok = !domain.is_empty()
        && !domain.contains("://")
        && !domain.contains('/')
        && !domain.chars().any(char::is_whitespace);
    if ok {
        Ok(())
    } else {
        Err(ConfigError::Validation(format!(
            "site domain '{domain}' must be a bare host name like 'example.com'"
        )))
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(GeneratorConfig::default())
        .map_err(|e| ConfigError::Validation(format!("stock defaults do not serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<GeneratorConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: GeneratorConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `path`, falling back to stock defaults when the file is
/// absent.
pub fn load_config(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    let overlay = load_raw_config(path)?;
    resolve_config(stock_defaults_value()?, overlay)
}

/// Load config from a path the user named explicitly; a missing file is an
/// error rather than a silent fallback.
pub fn load_explicit_config(path: &Path) -> Result<GeneratorConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    load_config(path)
}

/// Returns a fully-commented stock `postgen.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# postgen Configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.
#
# Precedence (lowest to highest):
#   stock defaults -> this file -> SITE_DOMAIN env var -> CLI flags

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
# Bare canonical domain. Used for permalinks in structured data and never
# picked as a backlink. Overridden by the SITE_DOMAIN environment variable.
domain = "hubgaming.io"
name = "HubGaming"
author = "HubGaming Team"
description = "Daily AI/esports insight from HubGaming."
logo = "https://hubgaming.io/assets/logo.png"

# ---------------------------------------------------------------------------
# Output
# ---------------------------------------------------------------------------
[output]
# Posts are written to <posts_dir>/<YYYY-MM-DD>-<slug>.md.
# A post with the same date and title overwrites the previous one.
posts_dir = "_posts"
# "block" renders lists one item per line; "flow" renders them inline.
metadata_style = "block"
layout = "post"
# Line placed after the hero image. Set to "" to omit.
ad_include = "{% include ad.html %}"

# ---------------------------------------------------------------------------
# Post shape
# ---------------------------------------------------------------------------
[post]
intro_paragraphs = 2
# Inclusive [min, max] sentence count per paragraph.
sentences = [3, 5]
closing_sentences = [2, 3]
# Inclusive [min, max] items per bullet section.
bullets = [4, 5]
tags = 4
categories = 2
keywords = 6
# Inclusive [min, max] partner domains linked at the end of the post.
backlinks = [1, 2]
# Internal links inserted per interlinked paragraph.
links_per_paragraph = 2

# ---------------------------------------------------------------------------
# Content pools
# ---------------------------------------------------------------------------
# Every pool has built-in contents. Uncomment a key to replace that pool.
# [pools]
# topics = ["Ranked Queue Health", "Scrim Scheduling"]
# domains = ["example.org", "example.net"]
#
# [[pools.internal_links]]
# phrase = "ranked queue"
# target = "/tags/ranked/"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_site_identity() {
        let config = GeneratorConfig::default();
        assert_eq!(config.site.domain, "hubgaming.io");
        assert_eq!(config.site.base_url(), "https://hubgaming.io");
        assert_eq!(config.site.author, "HubGaming Team");
    }

    #[test]
    fn default_config_post_shape() {
        let config = GeneratorConfig::default();
        assert_eq!(config.post.intro_paragraphs, 2);
        assert_eq!(config.post.sentences, [3, 5]);
        assert_eq!(config.post.bullets, [4, 5]);
        assert_eq!(config.post.backlinks, [1, 2]);
        assert_eq!(config.output.posts_dir, PathBuf::from("_posts"));
        assert_eq!(config.output.metadata_style, MetadataStyle::Block);
    }

    #[test]
    fn parse_partial_config() {
        let config: GeneratorConfig = toml::from_str(
            r#"
[site]
domain = "botplay.io"
"#,
        )
        .unwrap();
        assert_eq!(config.site.domain, "botplay.io");
        assert_eq!(config.site.name, "HubGaming");
        assert_eq!(config.post.tags, 4);
    }

    #[test]
    fn parse_flow_style() {
        let config: GeneratorConfig = toml::from_str(
            r#"
[output]
metadata_style = "flow"
"#,
        )
        .unwrap();
        assert_eq!(config.output.metadata_style, MetadataStyle::Flow);
    }

    #[test]
    fn metadata_style_display() {
        assert_eq!(MetadataStyle::Block.to_string(), "block");
        assert_eq!(MetadataStyle::Flow.to_string(), "flow");
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(config.site.domain, "hubgaming.io");
        assert_eq!(config.pools, ContentPools::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(
            &path,
            r#"
[post]
tags = 3
bullets = [2, 2]

[pools]
topics = ["Scrim Scheduling"]
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.post.tags, 3);
        assert_eq!(config.post.bullets, [2, 2]);
        assert_eq!(config.pools.topics, vec!["Scrim Scheduling"]);
        // Unspecified values should be defaults
        assert_eq!(config.post.keywords, 6);
        assert_eq!(config.pools.domains, ContentPools::default().domains);
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "[site\ndomain = ").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_explicit_config_missing_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        let err = load_explicit_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
        assert!(err.to_string().contains("nope.toml"));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("b = 3").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("a").unwrap().as_integer(), Some(1));
        assert_eq!(merged.get("b").unwrap().as_integer(), Some(3));
    }

    #[test]
    fn merge_toml_arrays_replace_not_append() {
        let base: toml::Value = toml::from_str("xs = [1, 2, 3]").unwrap();
        let overlay: toml::Value = toml::from_str("xs = [9]").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("xs").unwrap().as_array().unwrap().len(), 1);
    }

    #[test]
    fn merge_toml_nested_tables() {
        let base = stock_defaults_value().unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[site]
name = "BotPlay"
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let site = merged.get("site").unwrap();
        assert_eq!(site.get("name").unwrap().as_str(), Some("BotPlay"));
        assert_eq!(site.get("domain").unwrap().as_str(), Some("hubgaming.io"));
    }

    // =========================================================================
    // Unknown key rejection
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let result: Result<GeneratorConfig, _> = toml::from_str(
            r#"
[post]
tagz = 4
"#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<GeneratorConfig, _> = toml::from_str("[sight]\ndomain = \"x.io\"");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_metadata_style_rejected() {
        let result: Result<GeneratorConfig, _> =
            toml::from_str("[output]\nmetadata_style = \"inline\"");
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_inverted_range() {
        let mut config = GeneratorConfig::default();
        config.post.bullets = [5, 4];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("post.bullets"));
    }

    #[test]
    fn validate_zero_sentences() {
        let mut config = GeneratorConfig::default();
        config.post.sentences = [0, 3];
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_zero_backlinks_allowed() {
        let mut config = GeneratorConfig::default();
        config.post.backlinks = [0, 0];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_empty_required_pool() {
        let mut config = GeneratorConfig::default();
        config.pools.topics.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("pools.topics"));
    }

    #[test]
    fn validate_empty_optional_pool_ok() {
        let mut config = GeneratorConfig::default();
        config.pools.domains.clear();
        config.pools.keywords.clear();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "[post]\nintro_paragraphs = 0\n").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // Domain override
    // =========================================================================

    #[test]
    fn domain_override_replaces_domain() {
        let mut config = GeneratorConfig::default();
        config
            .apply_domain_override(Some("botplay.io".to_string()))
            .unwrap();
        assert_eq!(config.site.domain, "botplay.io");
    }

    #[test]
    fn domain_override_none_keeps_domain() {
        let mut config = GeneratorConfig::default();
        config.apply_domain_override(None).unwrap();
        assert_eq!(config.site.domain, "hubgaming.io");
    }

    #[test]
    fn domain_override_rejects_url() {
        let mut config = GeneratorConfig::default();
        for bad in ["", "https://botplay.io", "botplay.io/blog", "bot play.io"] {
            assert!(
                config.apply_domain_override(Some(bad.to_string())).is_err(),
                "accepted '{bad}'"
            );
        }
        assert_eq!(config.site.domain, "hubgaming.io");
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: GeneratorConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = GeneratorConfig::default();
        assert_eq!(config.site.domain, defaults.site.domain);
        assert_eq!(config.output.ad_include, defaults.output.ad_include);
        assert_eq!(config.post.sentences, defaults.post.sentences);
        assert_eq!(config.post.backlinks, defaults.post.backlinks);
        assert_eq!(config.pools, defaults.pools);
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        assert!(content.contains("[site]"));
        assert!(content.contains("[output]"));
        assert!(content.contains("[post]"));
        assert!(content.contains("# [pools]"));
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value().unwrap();
        assert!(val.is_table());
        for section in ["site", "output", "post", "pools"] {
            assert!(val.get(section).is_some(), "missing [{section}]");
        }
    }
}
