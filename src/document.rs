//! Parsed document with a pending edit plan.
//!
//! A `Document` owns the source text, the tree-sitter tree parsed from it and the edits made so
//! far. Lookups run against the original tree but skip anything that has been detached, so the
//! document behaves as if edits were applied in place. Serializing splices the edits into the
//! source.

use crate::edit_plan::EditPlan;
use crate::error::{Error, Result};
use crate::markup::html::{
    ATTRIBUTE, ATTRIBUTE_NAME, ATTRIBUTE_VALUE, COMMENT, DOCTYPE, ELEMENT, END_TAG,
    ERRONEOUS_END_TAG, QUOTED_ATTRIBUTE_VALUE, SCRIPT_ELEMENT, SELF_CLOSING_TAG, START_TAG,
    STYLE_ELEMENT, TAG_NAME,
};
use crate::markup::Markup;
use std::fs;
use std::ops::Range;
use std::path::Path;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Parser, Query, QueryCursor, Tree};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Location and raw text of one attribute value.
pub struct Attribute {
    /// Bytes of the value, excluding any quotes.
    pub span: Range<usize>,
    /// Value as written in the source, entities left encoded.
    pub value: String,
}

/// Owned document tree plus the edits recorded against it.
pub struct Document {
    source: String,
    tree: Tree,
    tags: Query,
    elements: Query,
    plan: EditPlan,
}

impl Document {
    /// Read `path` as UTF-8 and parse it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] if the file is missing or not valid UTF-8, and a parser error if
    /// the grammar cannot be loaded.
    pub fn load(path: &Path, markup: &impl Markup) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("read {} bytes from {}", source.len(), path.display());
        Self::parse(source, markup)
    }

    /// Parse `source` with an error-tolerant parser.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded, its queries do not compile, or the
    /// parser produces no tree.
    pub fn parse(source: String, markup: &impl Markup) -> Result<Self> {
        let language = markup.language();
        let mut parser = Parser::new();
        parser.set_language(&language)?;
        let tree = parser.parse(&source, None).ok_or(Error::Parse)?;
        if tree.root_node().has_error() {
            log::debug!("markup has syntax errors, continuing with the recovered tree");
        }
        let tags = Query::new(&language, markup.tag_query())?;
        let elements = Query::new(&language, markup.element_query())?;

        Ok(Self {
            source,
            tree,
            tags,
            elements,
            plan: EditPlan::default(),
        })
    }

    #[must_use]
    /// Original source text, before any edits.
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    /// Edits recorded so far.
    pub fn edit_plan(&self) -> &EditPlan {
        &self.plan
    }

    #[must_use]
    /// Source text covered by `node`.
    pub fn text(&self, node: Node<'_>) -> &str {
        self.source.get(node.byte_range()).unwrap_or_default()
    }

    #[must_use]
    /// Whether `span` has been removed from the document.
    pub fn is_detached(&self, span: &Range<usize>) -> bool {
        self.plan.removes(span)
    }

    #[must_use]
    /// Tag name of an element or opening tag, as written.
    pub fn tag_name(&self, node: Node<'_>) -> Option<&str> {
        let tag = match node.kind() {
            START_TAG | SELF_CLOSING_TAG => node,
            ELEMENT | SCRIPT_ELEMENT | STYLE_ELEMENT => {
                node.named_children(&mut node.walk()).next()?
            }
            _ => return None,
        };
        let mut cursor = tag.walk();
        let name = tag
            .named_children(&mut cursor)
            .find(|child| child.kind() == TAG_NAME)?;
        Some(self.text(name))
    }

    #[must_use]
    /// Values of attribute `name` on every live `tag` in document order.
    ///
    /// Names are matched case-insensitively. Only the first `name` on each tag counts, and an
    /// attribute written without a value is skipped.
    pub fn attributes(&self, tag: &str, name: &str) -> Vec<Attribute> {
        let mut found = Vec::new();
        let mut cursor = QueryCursor::new();
        let mut matches =
            cursor.matches(&self.tags, self.tree.root_node(), self.source.as_bytes());
        while let Some(m) = matches.next() {
            for capture in m.captures {
                let node = capture.node;
                if self.is_detached(&node.byte_range())
                    || !self
                        .tag_name(node)
                        .is_some_and(|written| written.eq_ignore_ascii_case(tag))
                {
                    continue;
                }
                let mut walker = node.walk();
                found.extend(
                    node.named_children(&mut walker)
                        .filter(|child| child.kind() == ATTRIBUTE)
                        .find_map(|attribute| self.attribute_value(attribute, name)),
                );
            }
        }
        found.sort_by_key(|attribute| attribute.span.start);
        found
    }

    fn attribute_value(&self, attribute: Node<'_>, name: &str) -> Option<Attribute> {
        let mut cursor = attribute.walk();
        let mut children = attribute.named_children(&mut cursor);
        let key = children.next().filter(|n| n.kind() == ATTRIBUTE_NAME)?;
        if !self.text(key).eq_ignore_ascii_case(name) {
            return None;
        }
        let value = children.next()?;
        let span = match value.kind() {
            ATTRIBUTE_VALUE => value.byte_range(),
            QUOTED_ATTRIBUTE_VALUE => {
                let mut inner_cursor = value.walk();
                let inner = value
                    .named_children(&mut inner_cursor)
                    .find(|n| n.kind() == ATTRIBUTE_VALUE);
                // `src=""` has no inner node; point at the empty space between the quotes
                inner.map_or(value.start_byte() + 1..value.start_byte() + 1, |n| {
                    n.byte_range()
                })
            }
            _ => return None,
        };
        Some(Attribute {
            value: self.source.get(span.clone())?.to_string(),
            span,
        })
    }

    #[must_use]
    /// First live element with tag `tag` in document order.
    pub fn first_element(&self, tag: &str) -> Option<Node<'_>> {
        let mut cursor = QueryCursor::new();
        let mut matches =
            cursor.matches(&self.elements, self.tree.root_node(), self.source.as_bytes());
        let mut first: Option<Node<'_>> = None;
        while let Some(m) = matches.next() {
            for capture in m.captures {
                let node = capture.node;
                if self.is_detached(&Self::element_span(node))
                    || !self
                        .tag_name(node)
                        .is_some_and(|written| written.eq_ignore_ascii_case(tag))
                {
                    continue;
                }
                if first.is_none_or(|current| node.start_byte() < current.start_byte()) {
                    first = Some(node);
                }
            }
        }
        first
    }

    #[must_use]
    /// Closest live sibling element before `node`.
    ///
    /// Text, entities, comments, stray closing tags and doctypes in between are passed over.
    pub fn preceding_element<'tree>(&self, node: Node<'tree>) -> Option<Node<'tree>> {
        let mut sibling = node.prev_named_sibling();
        while let Some(candidate) = sibling {
            if matches!(candidate.kind(), ELEMENT | SCRIPT_ELEMENT | STYLE_ELEMENT)
                && !self.is_detached(&Self::element_span(candidate))
            {
                return Some(candidate);
            }
            sibling = candidate.prev_named_sibling();
        }
        None
    }

    #[must_use]
    /// Bytes an element occupies in the source, from its opening tag to its last child.
    ///
    /// An element closed implicitly (a void `<hr>`, or a `<p>` ended by the next block) can
    /// extend over the whitespace and comments that follow it. Those trailing comments are
    /// not part of the element, so the span stops at the last other child.
    pub fn element_span(node: Node<'_>) -> Range<usize> {
        let mut cursor = node.walk();
        let last = node
            .named_children(&mut cursor)
            .filter(|child| child.kind() != COMMENT)
            .last();
        let end = match last {
            Some(child) if matches!(child.kind(), ELEMENT | SCRIPT_ELEMENT | STYLE_ELEMENT) => {
                Self::element_span(child).end
            }
            Some(child) => child.end_byte(),
            None => node.end_byte(),
        };
        node.start_byte()..end
    }

    #[must_use]
    /// Text inside `node` with all markup stripped and entities decoded.
    pub fn text_content(&self, node: Node<'_>) -> String {
        let mut markup = Vec::new();
        collect_markup(node, &mut markup);

        let end = Self::element_span(node).end;
        let mut text = String::new();
        let mut cursor = node.start_byte();
        for span in markup.into_iter().take_while(|span| span.start < end) {
            if span.start > cursor {
                text.push_str(self.source.get(cursor..span.start).unwrap_or_default());
            }
            cursor = cursor.max(span.end);
        }
        if end > cursor {
            text.push_str(self.source.get(cursor..end).unwrap_or_default());
        }
        html_escape::decode_html_entities(&text).into_owned()
    }

    /// Replace the value of `attribute` with `value`.
    pub fn set_attribute(&mut self, attribute: &Attribute, value: &str) {
        self.plan
            .replace(attribute.span.clone(), value, format!("attribute {:?}", attribute.value));
    }

    /// Remove `span` from the document; later lookups no longer see anything inside it.
    pub fn detach(&mut self, span: Range<usize>, item_name: &str) {
        log::debug!("detaching <{item_name}> at bytes {}..{}", span.start, span.end);
        self.plan.remove(span, item_name);
    }

    #[must_use]
    /// Document markup with every recorded edit applied.
    pub fn serialize(&self) -> String {
        self.plan.apply(&self.source)
    }
}

/// Spans of tags, comments and doctypes under `node`, in document order.
fn collect_markup(node: Node<'_>, spans: &mut Vec<Range<usize>>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            START_TAG | END_TAG | SELF_CLOSING_TAG | ERRONEOUS_END_TAG | COMMENT | DOCTYPE => {
                spans.push(child.byte_range());
            }
            _ => collect_markup(child, spans),
        }
    }
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
