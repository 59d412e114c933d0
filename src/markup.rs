//! Markup trait and implementations for document grammars.
//!
//! This module defines the `Markup` trait which pairs a tree-sitter grammar with the queries a
//! `Document` runs against it to find tags and elements.

pub mod html;

/// Grammar and queries for one markup language.
pub trait Markup {
    /// Tree-sitter language used to parse documents.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing every opening tag, including self-closing ones.
    fn tag_query(&self) -> &str;
    /// Query capturing every element.
    fn element_query(&self) -> &str;
}
