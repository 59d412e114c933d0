//! Failure modes of a conversion run.
//!
//! I/O failures carry the path they happened on. Header-structure failures get their own
//! variants so a broken post reads differently from a missing file.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Everything that can abort a conversion.
pub enum Error {
    /// The input post could not be read or is not valid UTF-8.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The output page could not be created or written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The image trace could not be written.
    #[error("failed to write image trace: {0}")]
    Trace(#[source] io::Error),

    /// The HTML grammar is incompatible with the linked tree-sitter runtime.
    #[error("failed to load the HTML grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// The parser gave up without producing a tree.
    #[error("parser produced no tree")]
    Parse,

    /// A built-in tree query failed to compile.
    #[error("invalid tree query: {0}")]
    Query(#[from] tree_sitter::QueryError),

    /// The document has no heading to lift into front matter.
    #[error("no <{tag}> element found")]
    MissingHeading {
        /// Heading tag that was searched for.
        tag: String,
    },

    /// The heading is the first element among its siblings.
    #[error("<{tag}> has no preceding sibling element")]
    MissingSeparator {
        /// Heading tag whose sibling was missing.
        tag: String,
    },

    /// The element before the heading is not the separator.
    #[error("expected <{expected}> before the heading, found <{found}>")]
    UnexpectedSeparator {
        /// Separator tag that should precede the heading.
        expected: String,
        /// Tag that was actually found there.
        found: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
