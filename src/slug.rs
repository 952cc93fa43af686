//! Title → slug derivation.
//!
//! A slug is the filesystem- and URL-safe identifier shared by the post's
//! filename and its permalink. The same function is used everywhere a slug is
//! needed, so slugifying the `title` field of a written post always reproduces
//! the slug in its filename.
//!
//! ## Rules
//!
//! - ASCII letters are lowercased; ASCII digits are kept.
//! - Every run of other characters (spaces, punctuation, non-ASCII) becomes a
//!   single `-`.
//! - No leading or trailing `-`.
//! - At most [`MAX_SLUG_LEN`] characters. Truncation never leaves a dangling
//!   `-` at the end.
//!
//! ```text
//! "AI Agents Changing Competitive Esports in 2025" → "ai-agents-changing-competitive-esports-in-2025"
//! "Latency, Risk & Execution"                      → "latency-risk-execution"
//! ```

/// Upper bound on slug length, in characters.
pub const MAX_SLUG_LEN: usize = 75;

/// Derive a slug from a post title.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len().min(MAX_SLUG_LEN));
    let mut pending_hyphen = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                if slug.len() + 1 >= MAX_SLUG_LEN {
                    break;
                }
                slug.push('-');
            }
            pending_hyphen = false;
            if slug.len() == MAX_SLUG_LEN {
                break;
            }
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Whether `s` satisfies the slug shape: non-empty, lowercase alphanumerics
/// separated by single hyphens, no hyphen at either end, within the length cap.
pub fn is_valid_slug(s: &str) -> bool {
    !s.is_empty()
        && s.len() <= MAX_SLUG_LEN
        && !s.starts_with('-')
        && !s.ends_with('-')
        && !s.contains("--")
        && s.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
