/*!
 * Document structure analysis.
 *
 * A Markdown body is split into typed segments by a single forward scan over
 * its lines. There is no nesting: nested lists and quotes are flattened to
 * their surface text. Two strategies share the `Segmenter` trait:
 *
 * - `LineSegmenter`: every non-blank prose line is its own paragraph
 * - `BlockSegmenter`: consecutive prose lines merge into one paragraph
 */

use crate::app_config::SegmenterKind;

const FENCE: &str = "```";

/// A typed unit of a document body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Heading { level: usize, text: String },
    Paragraph(String),
    List(Vec<String>),
    CodeBlock { language: String, text: String },
    Quote(String),
}

impl Segment {
    /// Apply `f` to every translatable piece of text, leaving code untouched
    pub fn map_text<F>(&self, mut f: F) -> Segment
    where
        F: FnMut(&str) -> String,
    {
        match self {
            Segment::Heading { level, text } => Segment::Heading {
                level: *level,
                text: f(text),
            },
            Segment::Paragraph(text) => Segment::Paragraph(f(text)),
            Segment::List(items) => Segment::List(items.iter().map(|item| f(item)).collect()),
            Segment::CodeBlock { .. } => self.clone(),
            Segment::Quote(text) => Segment::Quote(f(text)),
        }
    }

    /// Render the segment as Markdown followed by a blank line
    pub fn to_markdown(&self) -> String {
        match self {
            Segment::Heading { level, text } => format!("{} {}\n\n", "#".repeat(*level), text),
            Segment::Paragraph(text) => format!("{}\n\n", text),
            Segment::List(items) => {
                let mut out = String::new();
                for item in items {
                    out.push_str("- ");
                    out.push_str(item);
                    out.push('\n');
                }
                out.push('\n');
                out
            }
            Segment::CodeBlock { language, text } => {
                format!("{}{}\n{}\n{}\n\n", FENCE, language, text, FENCE)
            }
            Segment::Quote(text) => format!("> {}\n\n", text),
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, Segment::Heading { .. })
    }
}

/// Strategy for splitting a body into segments
pub trait Segmenter: Send + Sync {
    fn segment(&self, body: &str) -> Vec<Segment>;
}

/// Flat line-based analyzer
#[derive(Debug, Default, Clone, Copy)]
pub struct LineSegmenter;

impl Segmenter for LineSegmenter {
    fn segment(&self, body: &str) -> Vec<Segment> {
        scan(body, false)
    }
}

/// Like `LineSegmenter`, but merges runs of prose lines into one paragraph
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockSegmenter;

impl Segmenter for BlockSegmenter {
    fn segment(&self, body: &str) -> Vec<Segment> {
        scan(body, true)
    }
}

/// Build the segmenter selected in configuration
pub fn segmenter_for(kind: SegmenterKind) -> Box<dyn Segmenter> {
    match kind {
        SegmenterKind::Line => Box::new(LineSegmenter),
        SegmenterKind::Block => Box::new(BlockSegmenter),
    }
}

/// Text of a list item when `line` (already trimmed) is one.
///
/// The marker must be followed by whitespace or end the line, so `**bold**`
/// and `---` stay prose.
fn list_item(line: &str) -> Option<&str> {
    let mut chars = line.chars();
    let marker = chars.next()?;
    if !matches!(marker, '-' | '*' | '+') {
        return None;
    }
    let rest = chars.as_str();
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

fn heading(line: &str) -> Option<Segment> {
    if !line.starts_with('#') {
        return None;
    }
    let text = line.trim_start_matches('#');
    Some(Segment::Heading {
        level: line.len() - text.len(),
        text: text.trim().to_string(),
    })
}

fn scan(body: &str, merge_paragraphs: bool) -> Vec<Segment> {
    let lines: Vec<&str> = body.lines().collect();
    let mut segments = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].trim();

        if line.is_empty() {
            i += 1;
            continue;
        }

        if let Some(h) = heading(line) {
            segments.push(h);
            i += 1;
        } else if let Some(lang) = line.strip_prefix(FENCE) {
            let language = lang.trim().to_string();
            let mut code = Vec::new();
            i += 1;
            while i < lines.len() && !lines[i].trim().starts_with(FENCE) {
                code.push(lines[i]);
                i += 1;
            }
            // Skip the closing fence when there is one
            i += 1;
            segments.push(Segment::CodeBlock {
                language,
                text: code.join("\n"),
            });
        } else if list_item(line).is_some() {
            let mut items = Vec::new();
            while let Some(item) = lines.get(i).and_then(|l| list_item(l.trim())) {
                items.push(item.to_string());
                i += 1;
            }
            segments.push(Segment::List(items));
        } else if let Some(quote) = line.strip_prefix('>') {
            segments.push(Segment::Quote(quote.trim().to_string()));
            i += 1;
        } else {
            let mut text = line.to_string();
            i += 1;
            if merge_paragraphs {
                while let Some(next) = lines.get(i).map(|l| l.trim()) {
                    if !is_prose(next) {
                        break;
                    }
                    text.push('\n');
                    text.push_str(next);
                    i += 1;
                }
            }
            segments.push(Segment::Paragraph(text));
        }
    }

    segments
}

fn is_prose(line: &str) -> bool {
    !line.is_empty()
        && !line.starts_with('#')
        && !line.starts_with(FENCE)
        && !line.starts_with('>')
        && list_item(line).is_none()
}

/// Render a segment sequence back to Markdown
pub fn render(segments: &[Segment]) -> String {
    segments.iter().map(Segment::to_markdown).collect()
}
