//! Image source normalization.
//!
//! Exported posts reference images by absolute URL. The new site serves them from its own blog
//! path, so every `src` is cut back to start at the marker segment.

use crate::document::Document;
use crate::error::{Error, Result};
use std::io::Write;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Outcome of normalizing one image source.
pub struct ImageRewrite {
    /// Value as written in the source.
    pub original: String,
    /// Value written back, equal to `original` when the marker was not found.
    pub rewritten: String,
    /// Whether the marker occurred in the original value.
    pub marker_found: bool,
}

#[must_use]
/// Suffix of `value` starting at the first occurrence of `marker`.
///
/// Returns `None` when the marker does not occur. A value that already starts with the marker
/// comes back unchanged.
pub fn normalize_path<'a>(value: &'a str, marker: &str) -> Option<&'a str> {
    value.find(marker).map(|start| &value[start..])
}

/// Root every `<img src>` in `doc` at `marker`.
///
/// Each original value is written to `trace` on its own line, entities decoded, before it is
/// rewritten. Sources without the marker are left as they are.
///
/// # Errors
///
/// Returns [`Error::Trace`] if writing to `trace` fails.
pub fn normalize_images<W: Write>(
    doc: &mut Document,
    marker: &str,
    trace: &mut W,
) -> Result<Vec<ImageRewrite>> {
    let sources = doc.attributes("img", "src");
    let mut rewrites = Vec::with_capacity(sources.len());

    for attribute in sources {
        let original = attribute.value.clone();
        writeln!(trace, "{}", html_escape::decode_html_entities(&original)).map_err(Error::Trace)?;

        let rewrite = if let Some(normalized) = normalize_path(&original, marker) {
            let rewritten = normalized.to_string();
            if rewritten != original {
                doc.set_attribute(&attribute, &rewritten);
            }
            ImageRewrite {
                original,
                rewritten,
                marker_found: true,
            }
        } else {
            log::warn!("image source {original:?} has no {marker:?} segment, left unchanged");
            ImageRewrite {
                rewritten: original.clone(),
                original,
                marker_found: false,
            }
        };
        rewrites.push(rewrite);
    }

    log::debug!("normalized {} image sources", rewrites.len());
    Ok(rewrites)
}

#[cfg(test)]
#[path = "tests/images.rs"]
mod tests;
