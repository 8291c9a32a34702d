/*!
 * Per-pair translation quality scoring.
 *
 * Each source/target pair gets a list of issues and a 0-100 score:
 * 100, minus 10 per issue, minus 30 more when the target is a placeholder.
 * A missing, empty or unreadable target scores 0.
 */

use chrono::Local;
use log::{debug, info};
use rand::seq::SliceRandom;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

use crate::document;
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::pairs::{ContentScan, FilePair};
use crate::translation::{STUB_NOTE, protect};

const MAX_SCORE: u32 = 100;
const ISSUE_PENALTY: u32 = 10;
const PLACEHOLDER_PENALTY: u32 = 30;

/// Bodies with fewer prose lines than this are reported as too short
pub const MIN_CONTENT_LINES: usize = 3;

/// Markers of placeholder content, including the stub note written by `translate`
const PLACEHOLDER_INDICATORS: &[&str] = &[
    STUB_NOTE,
    "# [Translation Required]",
    "يحتاج هذا المحتوى إلى ترجمة",
    "This content needs translation",
    "<!-- Translation placeholder -->",
    "هذا محتوى نائب للترجمة",
];

/// Common English words that betray an untranslated metadata value
const SOURCE_INDICATORS: &[&str] = &[
    "the", "and", "or", "for", "with", "to", "in", "on", "about", "Learn", "Get", "Start", "How",
    "What", "Why", "When",
];

/// Templating tags allowed to carry target-script text
const TAG_ALLOWLIST: &[&str] = &["data variables", "ifversion", "endif"];

/// A problem found in a target file
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum QualityIssue {
    #[error("Target translation file missing")]
    MissingTarget,

    #[error("Target file is empty")]
    EmptyTarget,

    #[error("Error reading target file: {0}")]
    Unreadable(String),

    #[error("Missing frontmatter in target file")]
    MissingFrontmatter,

    #[error("Frontmatter does not parse as YAML: {0}")]
    InvalidFrontmatter(String),

    #[error("Field '{field}' appears to be untranslated: '{value}'")]
    UntranslatedField { field: String, value: String },

    #[error("Templating tag may be corrupted: {0}")]
    CorruptedTag(String),

    #[error("Content appears to be too short or mostly placeholder")]
    TooShort,
}

/// Quality result for one pair
#[derive(Debug, Clone, Serialize)]
pub struct PairQuality {
    pub source_file: String,
    pub target_file: String,
    pub exists: bool,
    pub issues: Vec<QualityIssue>,
    /// Human-readable form of `issues`
    pub messages: Vec<String>,
    pub score: u32,
    pub is_placeholder: bool,
}

impl PairQuality {
    fn has(&self, issue: &QualityIssue) -> bool {
        self.issues.contains(issue)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QualityDistribution {
    /// 90-100
    pub excellent: usize,
    /// 70-89
    pub good: usize,
    /// 50-69
    pub fair: usize,
    /// below 50
    pub poor: usize,
}

impl QualityDistribution {
    pub fn add(&mut self, score: u32) {
        match score {
            90.. => self.excellent += 1,
            70..=89 => self.good += 1,
            50..=69 => self.fair += 1,
            _ => self.poor += 1,
        }
    }
}

/// Results of a quality run
#[derive(Debug, Clone, Serialize)]
pub struct QualitySummary {
    pub timestamp: String,
    pub total_files: usize,
    pub average_score: f64,
    pub perfect_translations: usize,
    pub files_with_issues: usize,
    pub placeholder_only: usize,
    pub missing_frontmatter: usize,
    pub empty_files: usize,
    pub distribution: QualityDistribution,
    pub results: Vec<PairQuality>,
}

impl QualitySummary {
    fn from_results(results: Vec<PairQuality>) -> Self {
        let mut distribution = QualityDistribution::default();
        for r in &results {
            distribution.add(r.score);
        }
        let total: u32 = results.iter().map(|r| r.score).sum();
        let average = if results.is_empty() {
            0.0
        } else {
            (total as f64 / results.len() as f64 * 100.0).round() / 100.0
        };

        Self {
            timestamp: Local::now().to_rfc3339(),
            total_files: results.len(),
            average_score: average,
            perfect_translations: results.iter().filter(|r| r.issues.is_empty()).count(),
            files_with_issues: results.iter().filter(|r| !r.issues.is_empty()).count(),
            placeholder_only: results.iter().filter(|r| r.is_placeholder).count(),
            missing_frontmatter: results
                .iter()
                .filter(|r| r.has(&QualityIssue::MissingFrontmatter))
                .count(),
            empty_files: results.iter().filter(|r| r.has(&QualityIssue::EmptyTarget)).count(),
            distribution,
            results,
        }
    }

    /// One-line verdict for the average score
    pub fn verdict(&self) -> &'static str {
        match self.average_score {
            s if s >= 90.0 => "Excellent translation quality",
            s if s >= 70.0 => "Good translation quality, minor issues to address",
            s if s >= 50.0 => "Fair translation quality, review recommended",
            _ => "Poor translation quality, significant work needed",
        }
    }

    pub fn log_summary(&self) {
        info!("Files checked: {}", self.total_files);
        info!("Average quality score: {:.2}/100", self.average_score);
        info!(
            "Distribution: excellent {}, good {}, fair {}, poor {}",
            self.distribution.excellent,
            self.distribution.good,
            self.distribution.fair,
            self.distribution.poor
        );
        info!("Placeholder-only files: {}", self.placeholder_only);
        info!("{}", self.verdict());
    }
}

/// Score from an issue count and the placeholder flag
pub fn score(issue_count: usize, is_placeholder: bool) -> u32 {
    let mut deduction = issue_count as u32 * ISSUE_PENALTY;
    if is_placeholder {
        deduction += PLACEHOLDER_PENALTY;
    }
    MAX_SCORE.saturating_sub(deduction)
}

fn contains_word(text: &str, word: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|token| token == word)
}

/// Quality checker for source/target pairs
#[derive(Debug, Clone)]
pub struct QualityChecker {
    translatable_fields: Vec<String>,
}

impl QualityChecker {
    pub fn new(translatable_fields: &[String]) -> Self {
        Self {
            translatable_fields: translatable_fields.to_vec(),
        }
    }

    /// Metadata values that still look like source-language text
    pub fn check_frontmatter(&self, fm: &document::Frontmatter) -> Vec<QualityIssue> {
        self.translatable_fields
            .iter()
            .filter_map(|field| {
                let value = fm.get(field)?;
                let without_brand = value.replace("GitHub", "");
                let looks_untranslated = SOURCE_INDICATORS
                    .iter()
                    .any(|w| contains_word(&without_brand, w))
                    && !language_utils::has_target_script(value);
                looks_untranslated.then(|| QualityIssue::UntranslatedField {
                    field: field.clone(),
                    value: value.to_string(),
                })
            })
            .collect()
    }

    /// Body issues and whether the body is placeholder content
    pub fn check_body(&self, body: &str) -> (Vec<QualityIssue>, bool) {
        let is_placeholder = PLACEHOLDER_INDICATORS.iter().any(|m| body.contains(m));
        let mut issues = Vec::new();

        for tag in protect::templating_tags(body) {
            if TAG_ALLOWLIST.iter().any(|allowed| tag.contains(allowed)) {
                continue;
            }
            if language_utils::has_target_script(tag) {
                issues.push(QualityIssue::CorruptedTag(tag.to_string()));
            }
        }

        let content_lines = body
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#') && !l.starts_with("<!--"))
            .count();
        if content_lines < MIN_CONTENT_LINES {
            issues.push(QualityIssue::TooShort);
        }

        (issues, is_placeholder)
    }

    /// Check one pair
    pub fn check_pair(&self, root: &Path, pair: &FilePair) -> PairQuality {
        let mut result = PairQuality {
            source_file: pair.relative.clone(),
            target_file: FileManager::relative_path(root, &pair.target),
            exists: FileManager::file_exists(&pair.target),
            issues: Vec::new(),
            messages: Vec::new(),
            score: 0,
            is_placeholder: false,
        };

        let finish = |mut result: PairQuality| {
            result.messages = result.issues.iter().map(|i| i.to_string()).collect();
            result
        };

        if !result.exists {
            result.issues.push(QualityIssue::MissingTarget);
            return finish(result);
        }

        let content = match FileManager::read_to_string(&pair.target) {
            Ok(content) => content,
            Err(e) => {
                result.issues.push(QualityIssue::Unreadable(e.to_string()));
                return finish(result);
            }
        };
        if content.trim().is_empty() {
            result.issues.push(QualityIssue::EmptyTarget);
            return finish(result);
        }

        let (fm, body) = document::decode(&content);
        if fm.is_empty() {
            result.issues.push(QualityIssue::MissingFrontmatter);
        } else {
            if let Err(e) = fm.structured() {
                result.issues.push(QualityIssue::InvalidFrontmatter(e.to_string()));
            }
            result.issues.extend(self.check_frontmatter(&fm));
        }

        let (body_issues, is_placeholder) = self.check_body(&body);
        result.issues.extend(body_issues);
        result.is_placeholder = is_placeholder;
        result.score = score(result.issues.len(), is_placeholder);

        debug!("{}: score {}", result.target_file, result.score);
        finish(result)
    }

    /// Check every pair of a scan, or a random sample of `sample` pairs
    pub fn run(&self, root: &Path, scan: &ContentScan, sample: Option<usize>) -> QualitySummary {
        let mut selected: Vec<&FilePair> = scan.pairs.iter().collect();
        if let Some(n) = sample.filter(|n| *n < selected.len()) {
            selected.shuffle(&mut rand::rng());
            selected.truncate(n);
            selected.sort_by(|a, b| a.relative.cmp(&b.relative));
            info!("Sampling {} of {} pairs", n, scan.pairs.len());
        }

        let results = selected
            .into_iter()
            .map(|pair| self.check_pair(root, pair))
            .collect();
        QualitySummary::from_results(results)
    }
}
