//! The edit plan records document modifications as byte-span splices.
//!
//! Attribute rewrites and node detachments never touch the source text directly. They are
//! collected here and spliced in one pass when the document is serialized, so everything
//! outside an edit is reproduced byte for byte.

use serde::{Deserialize, Serialize};
use std::ops::Range;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// Serialisable collection of splices against one source text.
pub struct EditPlan {
    /// Individual splices, in the order they were recorded.
    pub edits: Vec<Edit>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
/// Whether a splice rewrites its span or drops it.
pub enum EditKind {
    /// Span is replaced with new text.
    Replace,
    /// Span is removed along with everything nested inside it.
    Remove,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// Precise coordinates and content for one splice.
pub struct Edit {
    /// First byte of the span (inclusive).
    pub byte_start: usize,
    /// Final byte of the span (exclusive).
    pub byte_end: usize,
    /// Text written in place of the span.
    pub replacement: String,
    /// Replace or remove.
    pub kind: EditKind,
    /// What was edited, for tracking and debugging.
    pub item_name: String,
}

impl Edit {
    fn span(&self) -> Range<usize> {
        self.byte_start..self.byte_end
    }

    fn contains(&self, span: &Range<usize>) -> bool {
        self.byte_start <= span.start && span.end <= self.byte_end
    }
}

impl EditPlan {
    /// Record a replacement of `span`.
    ///
    /// A later replacement of the same span supersedes the earlier one. Spans inside a removed
    /// region are ignored, since there is nothing left to rewrite.
    pub fn replace(
        &mut self,
        span: Range<usize>,
        replacement: impl Into<String>,
        item_name: impl Into<String>,
    ) {
        let item_name = item_name.into();
        if self.removes(&span) {
            log::debug!("dropping rewrite of {item_name} inside a detached node");
            return;
        }
        self.edits.retain(|edit| edit.span() != span);
        self.edits.push(Edit {
            byte_start: span.start,
            byte_end: span.end,
            replacement: replacement.into(),
            kind: EditKind::Replace,
            item_name,
        });
    }

    /// Record a removal of `span`, discarding any edits nested inside it.
    pub fn remove(&mut self, span: Range<usize>, item_name: impl Into<String>) {
        if self.removes(&span) {
            return;
        }
        self.edits
            .retain(|edit| !(span.start <= edit.byte_start && edit.byte_end <= span.end));
        self.edits.push(Edit {
            byte_start: span.start,
            byte_end: span.end,
            replacement: String::new(),
            kind: EditKind::Remove,
            item_name: item_name.into(),
        });
    }

    #[must_use]
    /// Whether `span` lies within a recorded removal.
    pub fn removes(&self, span: &Range<usize>) -> bool {
        self.edits
            .iter()
            .any(|edit| edit.kind == EditKind::Remove && edit.contains(span))
    }

    #[must_use]
    /// Splice every edit into `source`.
    ///
    /// Edits are applied in span order. An edit that overlaps one already applied, or that
    /// does not fall on `source`'s character boundaries, is skipped.
    pub fn apply(&self, source: &str) -> String {
        let mut ordered: Vec<&Edit> = self.edits.iter().collect();
        ordered.sort_by_key(|edit| (edit.byte_start, edit.byte_end));

        let mut output = String::with_capacity(source.len());
        let mut cursor = 0;
        for edit in ordered {
            if edit.byte_start < cursor || source.get(edit.span()).is_none() {
                log::debug!("skipping unusable edit of {}", edit.item_name);
                continue;
            }
            output.push_str(&source[cursor..edit.byte_start]);
            output.push_str(&edit.replacement);
            cursor = edit.byte_end;
        }
        output.push_str(&source[cursor..]);
        output
    }
}

#[cfg(test)]
#[path = "tests/edit_plan.rs"]
mod tests;
