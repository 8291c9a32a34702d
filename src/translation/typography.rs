/*!
 * Arabic typographic normalization.
 *
 * Only lines that already contain Arabic are rewritten. Fenced code blocks,
 * inline code, templating tags, link destinations and URLs are left as they
 * are, and so is the number of an ordered list marker.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::language_utils;

/// Spans inside a line that are never rewritten
static VERBATIM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"`[^`]+`|\{%[^%]*%\}|\{\{[^}]*\}\}|\]\([^)\n]*\)|https?://\S+")
        .expect("valid verbatim span regex")
});

/// `1.` or `1)` followed by whitespace at the start of a line's content
static ORDERED_MARKER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[.)][ \t]").expect("valid ordered list marker regex"));

static HORIZONTAL_SPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+").expect("valid horizontal space regex"));

static SPACE_BEFORE_PUNCT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]+([،؛؟!])").expect("valid punctuation spacing regex"));

static MISSING_SPACE_AFTER_PUNCT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([،؛؟])(\p{L})").expect("valid punctuation spacing regex"));

const FENCE: &str = "```";

fn to_arabic_digit(c: char) -> char {
    match c.to_digit(10) {
        // U+0660 ARABIC-INDIC DIGIT ZERO
        Some(d) if c.is_ascii_digit() => char::from_u32(0x0660 + d).unwrap_or(c),
        _ => c,
    }
}

/// Digit and punctuation conversion for a run of plain text
fn convert_glyphs(text: &str, mut prev: Option<char>) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        let converted = match c {
            ',' => '،',
            ';' => '؛',
            '?' if prev.is_some_and(|p| p.is_alphanumeric() || p == '_') => '؟',
            _ => to_arabic_digit(c),
        };
        out.push(converted);
        prev = Some(c);
    }
    out
}

fn normalize_spacing(text: &str) -> String {
    let text = HORIZONTAL_SPACE_REGEX.replace_all(text, " ");
    let text = SPACE_BEFORE_PUNCT_REGEX.replace_all(&text, "${1}");
    MISSING_SPACE_AFTER_PUNCT_REGEX
        .replace_all(&text, "${1} ${2}")
        .into_owned()
}

/// Rewrite one line that contains Arabic
fn normalize_line(line: &str) -> String {
    let content_start = line.len() - line.trim_start().len();
    let (indent, content) = line.split_at(content_start);
    // CommonMark only recognises ASCII digits in list markers
    let (marker, content) = match ORDERED_MARKER_REGEX.find(content) {
        Some(m) => content.split_at(m.end() - 1),
        None => ("", content),
    };

    let mut out = String::with_capacity(line.len());
    let mut last = 0;
    let mut prev: Option<char> = marker.chars().last();
    for span in VERBATIM_REGEX.find_iter(content) {
        let gap = &content[last..span.start()];
        out.push_str(&convert_glyphs(gap, prev));
        out.push_str(span.as_str());
        prev = span.as_str().chars().last();
        last = span.end();
    }
    out.push_str(&convert_glyphs(&content[last..], prev));

    // Spacing rules run only between verbatim spans
    let spans: Vec<&str> = VERBATIM_REGEX.find_iter(&out).map(|m| m.as_str()).collect();
    let normalized = if spans.is_empty() {
        normalize_spacing(&out)
    } else {
        let pieces: Vec<String> = VERBATIM_REGEX
            .split(&out)
            .map(normalize_spacing)
            .collect();
        let mut joined = String::with_capacity(out.len());
        for (i, piece) in pieces.iter().enumerate() {
            joined.push_str(piece);
            if let Some(span) = spans.get(i) {
                joined.push_str(span);
            }
        }
        joined
    };

    format!("{}{}{}", indent, marker, normalized)
}

/// Apply Arabic typography to every line that contains Arabic
pub fn normalize(text: &str) -> String {
    let mut in_fence = false;
    text.split('\n')
        .map(|line| {
            if line.trim_start().starts_with(FENCE) {
                in_fence = !in_fence;
                return line.to_string();
            }
            if in_fence || !language_utils::has_target_script(line) {
                return line.to_string();
            }
            normalize_line(line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
