//! Writing posts and formatting CLI output.
//!
//! # Side Effects
//!
//! [`write_post`] is the only code that touches the filesystem: one
//! `create_dir_all` (a no-op when the directory exists) and one overwriting
//! `fs::write`. There is no temp-file rename and no backup, so a same-day post
//! with the same title replaces the earlier file.
//!
//! # Output Format
//!
//! ## Generate
//!
//! ```text
//! Wrote: _posts/2025-01-01-ai-agents-changing-competitive-esports-in-2025.md
//! ```
//!
//! ## Check
//!
//! ```text
//! Site
//!     Domain: hubgaming.io
//!     Author: HubGaming Team
//! Output
//!     Posts: _posts
//!     Metadata: block
//! Pools
//!     title_templates: 10
//!     topics: 10
//!     ...
//!     internal_links: 8
//! ```
//!
//! Each output has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::config::GeneratorConfig;
use crate::generate::GeneratedPost;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to create {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Write the post to `generated.path`, creating its directory if needed.
pub fn write_post(generated: &GeneratedPost) -> Result<&Path, OutputError> {
    let path = generated.path.as_path();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, &generated.text).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = generated.text.len(), "wrote post");
    Ok(path)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

pub fn format_generate_output(path: &Path) -> Vec<String> {
    vec![format!("Wrote: {}", path.display())]
}

pub fn print_generate_output(path: &Path) {
    for line in format_generate_output(path) {
        println!("{}", line);
    }
}

/// Summarize the resolved configuration and pool sizes.
pub fn format_check_output(config: &GeneratorConfig) -> Vec<String> {
    let mut lines = vec![
        "Site".to_string(),
        format!("{}Domain: {}", indent(1), config.site.domain),
        format!("{}Author: {}", indent(1), config.site.author),
        "Output".to_string(),
        format!("{}Posts: {}", indent(1), config.output.posts_dir.display()),
        format!("{}Metadata: {}", indent(1), config.output.metadata_style),
        "Pools".to_string(),
    ];
    for (role, pool) in config.pools.roles() {
        lines.push(format!("{}{}: {}", indent(1), role, pool.len()));
    }
    lines.push(format!(
        "{}internal_links: {}",
        indent(1),
        config.pools.internal_links.len()
    ));
    lines
}

pub fn print_check_output(config: &GeneratorConfig) {
    for line in format_check_output(config) {
        println!("{}", line);
    }
}
