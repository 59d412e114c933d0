//! Header block extraction.
//!
//! Exported posts open with a separator followed by the title heading. Both are dropped from
//! the body and the heading text becomes the front matter.

use crate::document::Document;
use crate::error::{Error, Result};

/// Detach the first `heading_tag` element and the `separator_tag` element right before it.
///
/// Returns the heading's text content, markup stripped and entities decoded but not trimmed.
/// Nothing is detached unless both elements are in place.
///
/// # Errors
///
/// Returns [`Error::MissingHeading`] if there is no heading, [`Error::MissingSeparator`] if
/// the heading has no sibling element before it, and [`Error::UnexpectedSeparator`] if that
/// sibling is some other element.
pub fn extract_header(doc: &mut Document, heading_tag: &str, separator_tag: &str) -> Result<String> {
    let (separator, heading, text) = {
        let heading = doc
            .first_element(heading_tag)
            .ok_or_else(|| Error::MissingHeading {
                tag: heading_tag.to_string(),
            })?;
        let separator = doc
            .preceding_element(heading)
            .ok_or_else(|| Error::MissingSeparator {
                tag: heading_tag.to_string(),
            })?;
        let found = doc.tag_name(separator).unwrap_or_default();
        if !found.eq_ignore_ascii_case(separator_tag) {
            return Err(Error::UnexpectedSeparator {
                expected: separator_tag.to_string(),
                found: found.to_string(),
            });
        }
        (
            Document::element_span(separator),
            Document::element_span(heading),
            doc.text_content(heading),
        )
    };

    doc.detach(separator, separator_tag);
    doc.detach(heading, heading_tag);
    log::debug!("extracted header text {text:?}");
    Ok(text)
}

#[cfg(test)]
#[path = "tests/header.rs"]
mod tests;
