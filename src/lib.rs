//! postport: convert an exported blog post into a front-matter page.
//!
//! The post is parsed with tree-sitter, its image sources are rooted at the site's blog path,
//! the leading `<hr>` + `<h2>` header block is lifted out, and the heading text is written as
//! front matter above the remaining markup. Edits are spliced into the original bytes, so
//! anything not touched comes out exactly as it went in.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod document;
pub mod edit_plan;
pub mod error;
pub mod front_matter;
pub mod header;
pub mod images;
pub mod markup;
pub mod pipeline;

pub use error::{Error, Result};
