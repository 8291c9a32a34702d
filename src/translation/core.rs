/*!
 * Rule-based translation pipeline.
 *
 * `Translator` runs one piece of text through the full chain:
 *
 * 1. protected spans swapped for placeholders
 * 2. heading rules (headings only)
 * 3. terminology table
 * 4. sentence pattern rules
 * 5. lexical fallback, when the text is still mostly Latin
 * 6. placeholders restored (or deleted in target-only mode)
 * 7. typography
 *
 * It also builds whole target documents, either as placeholder stubs or as
 * enhanced segment-by-segment translations. Every call returns its own
 * statistics; nothing is shared between calls.
 */

use serde::Serialize;
use std::ops::AddAssign;

use super::patterns;
use super::protect::{self, ProtectedText};
use super::terminology::{LEXICAL_TABLE, TERMINOLOGY_TABLE, TermTable};
use super::typography;
use crate::app_config::{ResourceLink, TranslationConfig};
use crate::document::{self, Frontmatter, Segment, Segmenter, segmenter_for, structure};
use crate::language_utils;

/// Note placed at the top of placeholder pages
pub const STUB_NOTE: &str =
    "> **ملاحظة**: هذه الصفحة تحتاج إلى ترجمة كاملة. المحتوى أدناه باللغة الإنجليزية.";

/// Heading used for a stub whose source has no title
pub const UNTRANSLATED_TITLE: &str = "صفحة غير مترجمة";

/// Heading used for an enhanced page whose source has no title
pub const DEFAULT_DOCUMENT_TITLE: &str = "مستند GitHub";

pub const RESOURCES_HEADING: &str = "## مصادر إضافية";

/// Whether a piece of text is a heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    Heading,
    Prose,
}

/// What happens to protected spans at the end of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Spans restored verbatim
    Restore,
    /// Spans deleted and everything but target-script lines dropped
    TargetOnly,
}

/// Counters for one or more translation calls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranslationStats {
    pub texts_translated: usize,
    pub terminology_applications: usize,
    pub pattern_matches: usize,
    pub lexical_fallbacks: usize,
    pub lexical_substitutions: usize,
    pub protected_spans: usize,
}

impl AddAssign for TranslationStats {
    fn add_assign(&mut self, other: Self) {
        self.texts_translated += other.texts_translated;
        self.terminology_applications += other.terminology_applications;
        self.pattern_matches += other.pattern_matches;
        self.lexical_fallbacks += other.lexical_fallbacks;
        self.lexical_substitutions += other.lexical_substitutions;
        self.protected_spans += other.protected_spans;
    }
}

/// Output text together with the statistics of producing it
#[derive(Debug, Clone)]
pub struct Translated {
    pub text: String,
    pub stats: TranslationStats,
}

impl Translated {
    fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            stats: TranslationStats::default(),
        }
    }
}

/// Rule-based translator configured for one run
pub struct Translator {
    terminology: &'static TermTable,
    lexical: &'static TermTable,
    segmenter: Box<dyn Segmenter>,
    fallback_threshold: f64,
    min_source_letters: usize,
    output_mode: OutputMode,
    translatable_fields: Vec<String>,
    add_rtl_direction: bool,
    resource_links: Vec<ResourceLink>,
}

impl Translator {
    /// Create a translator from configuration
    pub fn new(config: &TranslationConfig, aggressive: bool, target_only: bool) -> Self {
        Self {
            terminology: &TERMINOLOGY_TABLE,
            lexical: &LEXICAL_TABLE,
            segmenter: segmenter_for(config.segmenter),
            fallback_threshold: config.fallback_threshold(aggressive),
            min_source_letters: config.min_source_letters,
            output_mode: if target_only {
                OutputMode::TargetOnly
            } else {
                OutputMode::Restore
            },
            translatable_fields: config.translatable_fields.clone(),
            add_rtl_direction: config.add_rtl_direction,
            resource_links: config.resource_links.clone(),
        }
    }

    pub fn fallback_threshold(&self) -> f64 {
        self.fallback_threshold
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    pub fn translatable_fields(&self) -> &[String] {
        &self.translatable_fields
    }

    /// True when `text` is still Latin enough to warrant lexical fallback
    pub fn needs_lexical_fallback(&self, text: &str) -> bool {
        language_utils::target_script_ratio(text) < self.fallback_threshold
            && language_utils::count_source_letters(text) > self.min_source_letters
    }

    /// Translate one piece of text with the configured output mode
    pub fn translate(&self, text: &str, kind: TextKind) -> Translated {
        self.translate_with_mode(text, kind, self.output_mode)
    }

    /// Translate one piece of text through the full rule chain
    pub fn translate_with_mode(&self, text: &str, kind: TextKind, mode: OutputMode) -> Translated {
        if text.trim().is_empty() {
            return Translated::unchanged(text);
        }

        let mut stats = TranslationStats {
            texts_translated: 1,
            ..Default::default()
        };

        let protected = ProtectedText::extract(text);
        stats.protected_spans = protected.len();
        let mut working = protected.text.clone();

        if kind == TextKind::Heading {
            let (out, n) = patterns::apply_heading_rules(&working);
            working = out;
            stats.pattern_matches += n;
        }

        let (out, n) = self.terminology.apply(&working);
        working = out;
        stats.terminology_applications += n;

        let (out, n) = patterns::apply_sentence_rules(&working);
        working = out;
        stats.pattern_matches += n;

        if self.needs_lexical_fallback(&working) {
            let (out, n) = self.lexical.apply(&working);
            working = out;
            stats.lexical_fallbacks += 1;
            stats.lexical_substitutions += n;
        }

        let text = match mode {
            OutputMode::Restore => typography::normalize(&protected.restore(&working)),
            OutputMode::TargetOnly => {
                let stripped = protected.strip(&working);
                typography::normalize(&protect::strip_to_target_script(&stripped))
            }
        };

        Translated { text, stats }
    }

    /// Terminology only, with protected spans kept intact
    pub fn apply_terminology(&self, text: &str) -> Translated {
        if text.trim().is_empty() {
            return Translated::unchanged(text);
        }
        let protected = ProtectedText::extract(text);
        let (out, n) = self.terminology.apply(&protected.text);
        Translated {
            text: typography::normalize(&protected.restore(&out)),
            stats: TranslationStats {
                texts_translated: 1,
                terminology_applications: n,
                protected_spans: protected.len(),
                ..Default::default()
            },
        }
    }

    /// Rewrite the translatable frontmatter fields with `f`
    pub fn map_fields<F>(&self, fm: &Frontmatter, mut f: F) -> (Frontmatter, TranslationStats)
    where
        F: FnMut(&str) -> Translated,
    {
        let mut out = fm.clone();
        let mut stats = TranslationStats::default();
        for field in &self.translatable_fields {
            if let Some(value) = fm.get(field).filter(|v| !v.trim().is_empty()) {
                let translated = f(value);
                stats += translated.stats;
                out.insert(field.as_str(), translated.text);
            }
        }
        (out, stats)
    }

    /// Placeholder page: translated metadata, a note, and the source body
    pub fn build_stub(&self, source: &str) -> Translated {
        let (fm, body) = document::decode(source);
        let (fm, stats) = self.map_fields(&fm, |v| self.apply_terminology(v));

        let title = fm.get("title").unwrap_or(UNTRANSLATED_TITLE);
        let stub_body = format!("# {}\n\n{}\n\n---\n\n{}", title, STUB_NOTE, body);

        Translated {
            text: document::encode(&fm, &stub_body),
            stats,
        }
    }

    /// Frontmatter for an enhanced page
    pub fn enhance_frontmatter(&self, fm: &Frontmatter) -> (Frontmatter, TranslationStats) {
        let (mut out, stats) = self.map_fields(fm, |v| {
            self.translate_with_mode(v, TextKind::Prose, OutputMode::Restore)
        });
        if self.add_rtl_direction && !out.contains_key("dir") {
            out.insert("dir", "rtl");
        }
        (out, stats)
    }

    /// Metadata of an existing target with the source's translatable fields
    /// filled in where the target lacks them. Without target metadata the
    /// source's is used as a whole.
    pub fn merge_frontmatter(&self, source: &Frontmatter, target: &Frontmatter) -> Frontmatter {
        if target.is_empty() {
            return source.clone();
        }
        let mut out = target.clone();
        for field in &self.translatable_fields {
            let present = out.get(field).is_some_and(|v| !v.trim().is_empty());
            if let Some(value) = source.get(field).filter(|_| !present) {
                out.insert(field.as_str(), value);
            }
        }
        out
    }

    /// Translate a body segment by segment
    pub fn translate_body(&self, body: &str) -> Translated {
        let mut stats = TranslationStats::default();
        let mut kept: Vec<Segment> = Vec::new();

        for segment in self.segmenter.segment(body) {
            if let Segment::CodeBlock { .. } = segment {
                if self.output_mode == OutputMode::Restore {
                    kept.push(segment);
                }
                continue;
            }

            let kind = if segment.is_heading() {
                TextKind::Heading
            } else {
                TextKind::Prose
            };
            let translated = segment.map_text(|text| {
                let t = self.translate(text, kind);
                stats += t.stats;
                t.text
            });

            kept.extend(non_empty(translated));
        }

        Translated {
            text: structure::render(&kept),
            stats,
        }
    }

    /// Enhanced page: translated metadata and a rebuilt, translated body
    pub fn build_enhanced(&self, source: &str) -> Translated {
        self.build_enhanced_from(source, None)
    }

    /// Enhanced page rebuilt over an existing target.
    ///
    /// The body always comes from `source`. Metadata starts from the
    /// target's own entries, so target-only keys and already translated
    /// values survive.
    pub fn build_enhanced_from(&self, source: &str, existing: Option<&str>) -> Translated {
        let (source_fm, body) = document::decode(source);
        let fm = match existing {
            Some(target) => self.merge_frontmatter(&source_fm, &document::decode(target).0),
            None => source_fm,
        };
        let (fm, mut stats) = self.enhance_frontmatter(&fm);

        let mut out = String::new();
        let title = fm.get("title").unwrap_or(DEFAULT_DOCUMENT_TITLE);
        out.push_str(&format!("# {}\n\n", title));
        if let Some(intro) = fm.get("intro").filter(|i| !i.trim().is_empty()) {
            out.push_str(intro);
            out.push_str("\n\n");
        }

        let translated = self.translate_body(&body);
        stats += translated.stats;
        out.push_str(&translated.text);

        out.push_str(&self.resources_section());

        Translated {
            text: document::encode(&fm, &typography::normalize(&out)),
            stats,
        }
    }

    /// Trailing "additional resources" section; empty when no links are configured
    pub fn resources_section(&self) -> String {
        if self.resource_links.is_empty() {
            return String::new();
        }
        let mut out = format!("\n---\n\n{}\n\n", RESOURCES_HEADING);
        for link in &self.resource_links {
            out.push_str(&format!("- [{}]({})\n", link.title, link.url));
        }
        out
    }
}

/// A translated segment, or None when nothing is left of it
fn non_empty(segment: Segment) -> Option<Segment> {
    match segment {
        Segment::Heading { ref text, .. } | Segment::Paragraph(ref text) | Segment::Quote(ref text)
            if text.trim().is_empty() =>
        {
            None
        }
        Segment::List(items) => {
            let kept: Vec<String> = items.into_iter().filter(|i| !i.trim().is_empty()).collect();
            if kept.is_empty() {
                None
            } else {
                Some(Segment::List(kept))
            }
        }
        other => Some(other),
    }
}
