use super::convert;
use crate::config::Config;
use crate::error::Error;
use std::fs;

#[test]
fn test_end_to_end_conversion() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("post.html");
    let output = dir.path().join("page.html");
    fs::write(
        &input,
        "<hr><h2>My Title</h2><p>Body</p><img src=\"https://cdn.example.com/assets/blog/pic.png\"></p>",
    )
    .unwrap();

    let mut trace = Vec::new();
    let report = convert(&input, &output, &Config::default(), &mut trace).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "---\nMy Title\n---\n<p>Body</p><img src=\"/blog/pic.png\"></p>"
    );
    assert_eq!(
        String::from_utf8(trace).unwrap(),
        "https://cdn.example.com/assets/blog/pic.png\n"
    );
    assert_eq!(report.title, "My Title");
    assert_eq!(report.images.len(), 1);
    assert_eq!(report.images[0].rewritten, "/blog/pic.png");
}

#[test]
fn test_conversion_uses_configured_marker() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("post.html");
    let output = dir.path().join("page.html");
    fs::write(
        &input,
        "<hr><h2> Notes </h2><img src=\"https://old.site/posts/a.png\">",
    )
    .unwrap();
    let config = Config {
        marker: "/posts".to_string(),
        ..Config::default()
    };

    convert(&input, &output, &config, &mut Vec::new()).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "---\nNotes\n---\n<img src=\"/posts/a.png\">"
    );
}

#[test]
fn test_image_inside_heading_is_traced_but_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("post.html");
    let output = dir.path().join("page.html");
    fs::write(
        &input,
        "<hr><h2><img src=\"https://x.org/blog/icon.png\">Title</h2><p>b</p>",
    )
    .unwrap();

    let mut trace = Vec::new();
    let report = convert(&input, &output, &Config::default(), &mut trace).unwrap();

    assert_eq!(
        String::from_utf8(trace).unwrap(),
        "https://x.org/blog/icon.png\n"
    );
    assert_eq!(report.title, "Title");
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "---\nTitle\n---\n<p>b</p>"
    );
}

#[test]
fn test_malformed_header_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("post.html");
    let output = dir.path().join("page.html");
    fs::write(&input, "<p>intro</p><h2>T</h2>").unwrap();

    let result = convert(&input, &output, &Config::default(), &mut Vec::new());

    assert!(matches!(result, Err(Error::UnexpectedSeparator { .. })));
    assert!(!output.exists());
}

#[test]
fn test_missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.html");
    let output = dir.path().join("page.html");

    let result = convert(&input, &output, &Config::default(), &mut Vec::new());

    assert!(matches!(result, Err(Error::Read { .. })));
    assert!(!output.exists());
}
