use super::extract_header;
use crate::document::Document;
use crate::error::Error;
use crate::markup::html::HtmlMarkup;

fn parse(source: &str) -> Document {
    Document::parse(source.to_string(), &HtmlMarkup).unwrap()
}

#[test]
fn test_removes_separator_and_heading() {
    let mut doc = parse("<hr><h2>My Title</h2><p>Body</p>");
    let text = extract_header(&mut doc, "h2", "hr").unwrap();

    assert_eq!(text, "My Title");
    assert_eq!(doc.serialize(), "<p>Body</p>");
}

#[test]
fn test_heading_text_has_markup_stripped() {
    let mut doc = parse("<hr>\n<h2>\n  Continuous <em>piecewise</em> &amp; more\n</h2>\n<p>x</p>");
    let text = extract_header(&mut doc, "h2", "hr").unwrap();

    assert_eq!(text.trim(), "Continuous piecewise & more");
    assert_eq!(doc.serialize(), "\n\n<p>x</p>");
}

#[test]
fn test_nested_header_block() {
    let mut doc = parse("<html><body><hr><h2>T</h2><p>b</p></body></html>");
    let text = extract_header(&mut doc, "h2", "hr").unwrap();

    assert_eq!(text, "T");
    assert_eq!(doc.serialize(), "<html><body><p>b</p></body></html>");
}

#[test]
fn test_comment_between_separator_and_heading_is_kept() {
    let mut doc = parse("<hr><!-- title --><h2>T</h2>");
    extract_header(&mut doc, "h2", "hr").unwrap();

    assert_eq!(doc.serialize(), "<!-- title -->");
}

#[test]
fn test_tags_match_case_insensitively() {
    let mut doc = parse("<HR><H2>Shouting</H2><p>b</p>");
    let text = extract_header(&mut doc, "h2", "hr").unwrap();

    assert_eq!(text, "Shouting");
    assert_eq!(doc.serialize(), "<p>b</p>");
}

#[test]
fn test_missing_heading() {
    let mut doc = parse("<hr><p>No title</p>");
    let result = extract_header(&mut doc, "h2", "hr");

    assert!(matches!(result, Err(Error::MissingHeading { ref tag }) if tag == "h2"));
    assert_eq!(doc.serialize(), "<hr><p>No title</p>");
}

#[test]
fn test_missing_separator() {
    let mut doc = parse("<h2>T</h2><hr>");
    let result = extract_header(&mut doc, "h2", "hr");

    assert!(matches!(result, Err(Error::MissingSeparator { .. })));
    assert_eq!(doc.serialize(), "<h2>T</h2><hr>");
}

#[test]
fn test_wrong_separator_fails_without_removing_anything() {
    let source = "<hr><p>intro</p><h2>T</h2>";
    let mut doc = parse(source);
    let result = extract_header(&mut doc, "h2", "hr");

    match result {
        Err(Error::UnexpectedSeparator { expected, found }) => {
            assert_eq!(expected, "hr");
            assert_eq!(found, "p");
        }
        other => panic!("expected an unexpected-separator error, got {other:?}"),
    }
    assert_eq!(doc.serialize(), source);
}

#[test]
fn test_repeated_extraction_walks_header_blocks() {
    let mut doc = parse("<hr><h2>A</h2><hr><h2>B</h2><p>z</p>");

    assert_eq!(extract_header(&mut doc, "h2", "hr").unwrap(), "A");
    assert_eq!(extract_header(&mut doc, "h2", "hr").unwrap(), "B");
    assert_eq!(doc.serialize(), "<p>z</p>");
    assert!(matches!(
        extract_header(&mut doc, "h2", "hr"),
        Err(Error::MissingHeading { .. })
    ));
}

#[test]
fn test_void_separator_keeps_following_comments_and_whitespace() {
    let mut doc = parse("<hr>\n<!--x-->\n<h2>T</h2><p>b</p>");
    extract_header(&mut doc, "h2", "hr").unwrap();

    assert_eq!(doc.serialize(), "\n<!--x-->\n<p>b</p>");
}

#[test]
fn test_self_closing_separator_keeps_following_comments() {
    let mut doc = parse("<hr/>\n<!--x-->\n<h2>T</h2>");
    extract_header(&mut doc, "h2", "hr").unwrap();

    assert_eq!(doc.serialize(), "\n<!--x-->\n");
}
