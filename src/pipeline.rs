//! One conversion run, from exported post to front-matter page.

use crate::config::Config;
use crate::document::Document;
use crate::error::Result;
use crate::front_matter::write_post;
use crate::header::extract_header;
use crate::images::{normalize_images, ImageRewrite};
use crate::markup::html::HtmlMarkup;
use std::io::Write;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Summary of a finished conversion.
pub struct Report {
    /// Trimmed heading text written as front matter.
    pub title: String,
    /// Every image source seen, in document order.
    pub images: Vec<ImageRewrite>,
}

/// Load `input`, normalize its images, lift its header and write the page to `output`.
///
/// Original image sources are written to `trace` as they are processed.
///
/// # Errors
///
/// Returns the first failure; nothing is written to `output` unless every step before the
/// write succeeded.
pub fn convert<W: Write>(
    input: &Path,
    output: &Path,
    config: &Config,
    trace: &mut W,
) -> Result<Report> {
    let mut doc = Document::load(input, &HtmlMarkup)?;
    let images = normalize_images(&mut doc, &config.marker, trace)?;
    let header = extract_header(&mut doc, &config.heading_tag, &config.separator_tag)?;
    write_post(output, &header, &doc)?;

    if let Ok(json) = serde_json::to_string(doc.edit_plan()) {
        log::debug!("edit plan: {json}");
    }
    let report = Report {
        title: header.trim().to_string(),
        images,
    };
    log::info!(
        "{} -> {}: {:?}, {} images ({} unchanged)",
        input.display(),
        output.display(),
        report.title,
        report.images.len(),
        report.images.iter().filter(|image| !image.marker_found).count()
    );
    Ok(report)
}

#[cfg(test)]
#[path = "tests/pipeline.rs"]
mod tests;
