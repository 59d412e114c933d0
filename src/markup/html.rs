//! HTML markup implementation using tree-sitter-html.
//!
//! Node kind names are the grammar's own and are shared with the document walker.

use crate::markup::Markup;

/// Whole element: opening tag, children and closing tag.
pub const ELEMENT: &str = "element";
/// `<script>` element, whose body is raw text.
pub const SCRIPT_ELEMENT: &str = "script_element";
/// `<style>` element, whose body is raw text.
pub const STYLE_ELEMENT: &str = "style_element";
/// Opening tag.
pub const START_TAG: &str = "start_tag";
/// Closing tag.
pub const END_TAG: &str = "end_tag";
/// `<tag />`.
pub const SELF_CLOSING_TAG: &str = "self_closing_tag";
/// Closing tag with no matching opener.
pub const ERRONEOUS_END_TAG: &str = "erroneous_end_tag";
/// Name inside an opening or self-closing tag.
pub const TAG_NAME: &str = "tag_name";
/// `name=value` pair.
pub const ATTRIBUTE: &str = "attribute";
/// Attribute key.
pub const ATTRIBUTE_NAME: &str = "attribute_name";
/// Unquoted value, or the inside of a quoted one.
pub const ATTRIBUTE_VALUE: &str = "attribute_value";
/// Quoted value including its quotes.
pub const QUOTED_ATTRIBUTE_VALUE: &str = "quoted_attribute_value";
/// `<!-- ... -->`.
pub const COMMENT: &str = "comment";
/// `<!DOCTYPE ...>`.
pub const DOCTYPE: &str = "doctype";

/// Tree-sitter queries for HTML documents.
pub struct HtmlMarkup;

impl Markup for HtmlMarkup {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_html::LANGUAGE.into()
    }

    fn tag_query(&self) -> &'static str {
        "[(start_tag) (self_closing_tag)] @tag"
    }

    fn element_query(&self) -> &'static str {
        "(element) @element"
    }
}
