/*!
 * Tests for the frontmatter codec and document segmentation
 */

use anyhow::Result;
use mdlingo::ContentError;
use mdlingo::app_config::SegmenterKind;
use mdlingo::document::frontmatter::try_decode;
use mdlingo::document::structure::render;
use mdlingo::document::{
    BlockSegmenter, Frontmatter, LineSegmenter, Segment, Segmenter, decode, encode, segmenter_for,
};

/// Test that encoding and decoding gives back the same metadata and body
#[test]
fn test_encode_decode_withQuotedValues_shouldRoundTrip() -> Result<()> {
    let fm: Frontmatter = [
        ("title", "Say \"hello\" to GitHub"),
        ("intro", "It's a 'quoted' value"),
        ("shortTitle", "Plain"),
    ]
    .into_iter()
    .collect();
    let body = "# Heading\n\nSome text.\n";

    let (decoded, decoded_body) = decode(&encode(&fm, body));

    assert_eq!(decoded, fm);
    assert_eq!(decoded_body, body);
    Ok(())
}

/// Test that nested YAML structures are kept verbatim
#[test]
fn test_decode_withNestedVersions_shouldKeepContinuationLines() -> Result<()> {
    let text = "---\ntitle: About\nversions:\n  fpt: '*'\n  ghes: '*'\n---\n\nBody\n";

    let (fm, body) = decode(text);

    assert_eq!(fm.get("title"), Some("About"));
    assert_eq!(fm.entries()[1].nested, vec!["  fpt: '*'", "  ghes: '*'"]);
    assert_eq!(body, "Body\n");
    assert_eq!(encode(&fm, &body), text);
    Ok(())
}

/// Test that text without a frontmatter block is all body
#[test]
fn test_decode_withoutFrontmatter_shouldReturnWholeBody() {
    let (fm, body) = decode("# Title\n\nText");
    assert!(fm.is_empty());
    assert_eq!(body, "# Title\n\nText");
}

/// Test that an unterminated block is a parse error for the strict decoder only
#[test]
fn test_decode_withUnterminatedBlock_shouldDegradeGracefully() {
    let text = "---\ntitle: Broken\n\nNo closing delimiter";

    assert!(matches!(try_decode(text), Err(ContentError::FrontmatterParse)));

    let (fm, body) = decode(text);
    assert!(fm.is_empty());
    assert_eq!(body, text);
}

/// Test that inserting an existing key replaces the value in place
#[test]
fn test_insert_withExistingKey_shouldKeepPosition() {
    let mut fm: Frontmatter = [("title", "A"), ("intro", "B")].into_iter().collect();
    fm.insert("title", "C");

    let keys: Vec<&str> = fm.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["title", "intro"]);
    assert_eq!(fm.get("title"), Some("C"));
}

/// Test the line segmenter on every segment type
#[test]
fn test_line_segmenter_withMixedBody_shouldClassifyLines() {
    let body = "## Setup\n\nFirst line.\nSecond line.\n\n- one\n- two\n\n```bash\necho hi\n```\n\n> A quote";

    let segments = LineSegmenter.segment(body);

    assert_eq!(
        segments,
        vec![
            Segment::Heading {
                level: 2,
                text: "Setup".to_string()
            },
            Segment::Paragraph("First line.".to_string()),
            Segment::Paragraph("Second line.".to_string()),
            Segment::List(vec!["one".to_string(), "two".to_string()]),
            Segment::CodeBlock {
                language: "bash".to_string(),
                text: "echo hi".to_string()
            },
            Segment::Quote("A quote".to_string()),
        ]
    );
}

/// Test that the block segmenter merges consecutive prose lines
#[test]
fn test_block_segmenter_withProseRun_shouldMergeParagraph() {
    let segments = BlockSegmenter.segment("First line.\nSecond line.\n\nThird.");
    assert_eq!(
        segments,
        vec![
            Segment::Paragraph("First line.\nSecond line.".to_string()),
            Segment::Paragraph("Third.".to_string()),
        ]
    );
}

/// Test that bold text and horizontal rules are not list items
#[test]
fn test_segmenter_withBoldAndRule_shouldKeepProse() {
    let segments = segmenter_for(SegmenterKind::Line).segment("**bold** text\n---");
    assert_eq!(
        segments,
        vec![
            Segment::Paragraph("**bold** text".to_string()),
            Segment::Paragraph("---".to_string()),
        ]
    );
}

/// Test that an unclosed fence runs to the end of the body
#[test]
fn test_segmenter_withUnclosedFence_shouldCaptureRest() {
    let segments = LineSegmenter.segment("```\nline one\n# not heading");
    assert_eq!(
        segments,
        vec![Segment::CodeBlock {
            language: String::new(),
            text: "line one\n# not heading".to_string()
        }]
    );
}

/// Test that rendering keeps code blocks byte-for-byte
#[test]
fn test_render_withCodeBlock_shouldPreserveCode() {
    let segments = LineSegmenter.segment("# Title\n\n```yaml\nkey: value\n  nested: 1\n```");
    let rendered = render(&segments);
    assert!(rendered.contains("```yaml\nkey: value\n  nested: 1\n```"));
    assert!(rendered.starts_with("# Title"));
}
