/*!
 * Protected-span extraction.
 *
 * Spans that must pass through translation untouched are swapped for
 * placeholder tokens before any rule runs, then swapped back. Categories are
 * extracted in a fixed order and the order matters: a templating tag inside
 * inline code is captured as a templating tag.
 *
 * 1. Templating tags: `{% ... %}` and `{{ ... }}`
 * 2. Fenced code blocks
 * 3. Inline code spans
 * 4. Markdown link and image destinations: the `](...)` part
 * 5. URLs
 *
 * A placeholder is a decimal index wrapped in a delimiter pair that does not
 * occur anywhere in the input, so it can never collide with the text and no
 * word-level rule can match inside it.
 */

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::language_utils;

static TEMPLATING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{%[^%]*%\}|\{\{[^}]*\}\}").expect("valid templating regex")
});

static FENCED_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```[\s\S]*?```").expect("valid fenced code regex"));

static INLINE_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`[^`]+`").expect("valid inline code regex"));

static LINK_TARGET_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\]\([^)\n]*\)").expect("valid link target regex"));

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("valid url regex"));

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\S+@\S+\b").expect("valid email regex"));

static HTML_TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid html tag regex"));

static EXCESS_NEWLINES_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("valid newline regex"));

const DEFAULT_DELIMITERS: (char, char) = ('⟦', '⟧');

/// Kind of protected span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Templating,
    FencedCode,
    InlineCode,
    LinkTarget,
    Url,
}

impl SpanKind {
    fn regex(self) -> &'static Regex {
        match self {
            SpanKind::Templating => &TEMPLATING_REGEX,
            SpanKind::FencedCode => &FENCED_CODE_REGEX,
            SpanKind::InlineCode => &INLINE_CODE_REGEX,
            SpanKind::LinkTarget => &LINK_TARGET_REGEX,
            SpanKind::Url => &URL_REGEX,
        }
    }
}

/// Extraction order
const EXTRACTION_ORDER: [SpanKind; 5] = [
    SpanKind::Templating,
    SpanKind::FencedCode,
    SpanKind::InlineCode,
    SpanKind::LinkTarget,
    SpanKind::Url,
];

/// One placeholder and the text it stands for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedSpan {
    pub kind: SpanKind,
    pub placeholder: String,
    pub original: String,
}

/// Text with its protected spans replaced by placeholders
#[derive(Debug, Clone)]
pub struct ProtectedText {
    pub text: String,
    pub spans: Vec<ProtectedSpan>,
}

impl ProtectedText {
    /// Extract every protected span from `input`
    pub fn extract(input: &str) -> Self {
        let (open, close) = pick_delimiters(input);
        let mut spans: Vec<ProtectedSpan> = Vec::new();
        let mut text = input.to_string();

        for kind in EXTRACTION_ORDER {
            let replaced = kind.regex().replace_all(&text, |caps: &Captures| {
                let placeholder = format!("{}{}{}", open, spans.len(), close);
                spans.push(ProtectedSpan {
                    kind,
                    placeholder: placeholder.clone(),
                    original: caps[0].to_string(),
                });
                placeholder
            });
            text = replaced.into_owned();
        }

        Self { text, spans }
    }

    /// Put the original spans back into `text`.
    ///
    /// Later spans may contain earlier placeholders (a fenced block holding a
    /// templating tag), so restoration walks the list backwards.
    pub fn restore(&self, text: &str) -> String {
        let mut out = text.to_string();
        for span in self.spans.iter().rev() {
            out = out.replace(&span.placeholder, &span.original);
        }
        out
    }

    /// Delete every placeholder from `text`
    pub fn strip(&self, text: &str) -> String {
        let mut out = text.to_string();
        for span in self.spans.iter().rev() {
            out = out.replace(&span.placeholder, "");
        }
        out
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

/// First delimiter pair of which neither character occurs in `text`
fn pick_delimiters(text: &str) -> (char, char) {
    let private_use = (0xE000u32..0xF8FF)
        .step_by(2)
        .filter_map(|c| Some((char::from_u32(c)?, char::from_u32(c + 1)?)));

    std::iter::once(DEFAULT_DELIMITERS)
        .chain(private_use)
        .find(|(open, close)| !text.contains(*open) && !text.contains(*close))
        .unwrap_or(DEFAULT_DELIMITERS)
}

/// Templating tags present in `text`
pub fn templating_tags(text: &str) -> Vec<&str> {
    TEMPLATING_REGEX.find_iter(text).map(|m| m.as_str()).collect()
}

/// Templating tags of `original` that do not appear in `translated`
pub fn missing_templating_tags<'a>(original: &'a str, translated: &str) -> Vec<&'a str> {
    templating_tags(original)
        .into_iter()
        .filter(|tag| !translated.contains(tag))
        .collect()
}

/// Remove code blocks, inline code, templating tags, link destinations and URLs
pub fn strip_non_prose(text: &str) -> String {
    let cleaned = FENCED_CODE_REGEX.replace_all(text, "");
    let cleaned = INLINE_CODE_REGEX.replace_all(&cleaned, "");
    let cleaned = TEMPLATING_REGEX.replace_all(&cleaned, "");
    let cleaned = LINK_TARGET_REGEX.replace_all(&cleaned, "]");
    URL_REGEX.replace_all(&cleaned, "").into_owned()
}

/// Reduce `text` to target-script lines only.
///
/// Code, templating tags, URLs, e-mail addresses and HTML tags are removed,
/// Latin letters are dropped, and only non-empty lines that still contain a
/// target-script character survive.
pub fn strip_to_target_script(text: &str) -> String {
    let cleaned = strip_non_prose(text);
    let cleaned = EMAIL_REGEX.replace_all(&cleaned, "");
    let cleaned = HTML_TAG_REGEX.replace_all(&cleaned, " ");
    let cleaned = language_utils::strip_source_letters(&cleaned);

    let kept: Vec<&str> = cleaned
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && language_utils::has_target_script(line))
        .collect();

    let joined = kept.join("\n");
    EXCESS_NEWLINES_REGEX
        .replace_all(&joined, "\n\n")
        .trim()
        .to_string()
}
