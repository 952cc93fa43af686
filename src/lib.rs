//! # postgen
//!
//! Randomized daily post generator for Jekyll-style blogs. Each run picks a
//! title, body sentences, a hero image and a few partner links from fixed
//! content pools, and writes one Markdown file with YAML front matter:
//!
//! ```text
//! _posts/<YYYY-MM-DD>-<slug>.md
//! ```
//!
//! # Architecture: One Straight Pass
//!
//! ```text
//! config  ──►  generate  ──►  render  ──►  output
//! (layers)     (choices)      (text)       (one file write)
//! ```
//!
//! There is no pipeline state and nothing is read back from disk. A run is a
//! pure function of the config, the date and the RNG, up to the final write,
//! which keeps every stage testable with a seeded `StdRng` and no filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Layered `postgen.toml` loading, validation, `SITE_DOMAIN` override |
//! | [`pools`] | Content pools: stock literal tables and the overridable [`pools::ContentPools`] |
//! | [`slug`] | Title → filename/permalink slug |
//! | [`generate`] | Random selection and post assembly |
//! | [`render`] | Front matter, body and JSON-LD rendering |
//! | [`types`] | The assembled [`types::Post`] model |
//! | [`output`] | Writing the file and CLI output formatting |
//!
//! # Design Decisions
//!
//! ## One Configurable Generator
//!
//! Earlier revisions of this tool were separate scripts differing only in
//! their pools and front matter style. Here they are one generator: pools,
//! section sizes and the block/flow metadata style are all config.
//!
//! ## Overwrite on Collision
//!
//! The path is derived from date and title only. Generating the same title
//! twice on one day overwrites the first file; nothing checks for an existing
//! post. This matches how the site has always been fed and is left as is.

pub mod config;
pub mod generate;
pub mod output;
pub mod pools;
pub mod render;
pub mod slug;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
