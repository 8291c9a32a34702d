/*!
 * Run statistics and report generation.
 *
 * - `RunStats`: counters aggregated by the controller for one run
 * - `DirectoryCoverage`: per-directory coverage breakdown
 * - `FileMetrics` / `TranslationMap`: per-file analysis of source documents
 * - `StatusReport`: machine-readable JSON status
 * - `render_text_report`: human-readable summary with recommendations
 */

use anyhow::{Context, Result};
use chrono::Local;
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::app_config::ReportConfig;
use crate::document;
use crate::file_utils::FileManager;
use crate::pairs::{ContentScan, FilePair};
use crate::translation::TranslationStats;

/// Directories with fewer source files are left out of the text breakdown
pub const MIN_DIRECTORY_FILES: usize = 5;

/// Maximum number of directories listed in the text breakdown
pub const MAX_REPORTED_DIRECTORIES: usize = 20;

const RULE_WIDTH: usize = 70;

static TEMPLATING_TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{%.*?%\}").expect("valid templating tag regex"));

static TABLE_ROW_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\|.*\|").expect("valid table row regex"));

// @struct: Counters for one run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub total_source_files: usize,
    pub total_target_files: usize,
    pub existing_count: usize,
    pub missing_count: usize,
    pub coverage_percent: f64,
    pub priority_total: usize,
    pub priority_missing: usize,
    /// Files matched by a skip pattern
    pub skipped_files: usize,
    /// Files picked for translation or enhancement this run
    pub selected_count: usize,
    pub created_count: usize,
    pub enhanced_count: usize,
    /// Files that would have been written without `--dry-run`
    pub dry_run_count: usize,
    /// Files translated by the provider
    pub ai_count: usize,
    /// Provider failures that fell back to the rule-based path
    pub fallback_count: usize,
    /// Templating tags missing from provider output
    pub lost_tags: usize,
    pub error_count: usize,
    pub translation: TranslationStats,
    pub analysis_secs: f64,
    pub translation_secs: f64,
}

impl RunStats {
    /// Coverage counters taken from a scan
    pub fn from_scan(scan: &ContentScan) -> Self {
        let missing_count = scan.missing_count();
        Self {
            total_source_files: scan.pairs.len(),
            total_target_files: scan.targets.len(),
            existing_count: scan.pairs.len() - missing_count,
            missing_count,
            coverage_percent: scan.coverage_percent(),
            priority_total: scan.pairs.iter().filter(|p| p.is_priority).count(),
            priority_missing: scan.missing().filter(|p| p.is_priority).count(),
            skipped_files: scan.skipped,
            ..Default::default()
        }
    }

    pub fn priority_coverage_percent(&self) -> f64 {
        if self.priority_total == 0 {
            return 0.0;
        }
        (self.priority_total - self.priority_missing) as f64 / self.priority_total as f64 * 100.0
    }

    /// Files written (or enhanced) this run
    pub fn written_count(&self) -> usize {
        self.created_count + self.enhanced_count
    }

    pub fn average_secs_per_file(&self) -> Option<f64> {
        match self.written_count() {
            0 => None,
            n => Some(self.translation_secs / n as f64),
        }
    }
}

/// Coverage of one directory of the content tree
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DirectoryCoverage {
    pub directory: String,
    pub total_files: usize,
    pub translated_files: usize,
    pub missing_files: usize,
    pub total_size: u64,
    pub translated_size: u64,
}

impl DirectoryCoverage {
    pub fn coverage_percent(&self) -> f64 {
        if self.total_files == 0 {
            return 0.0;
        }
        self.translated_files as f64 / self.total_files as f64 * 100.0
    }

    pub fn missing_percent(&self) -> f64 {
        if self.total_files == 0 {
            return 0.0;
        }
        self.missing_files as f64 / self.total_files as f64 * 100.0
    }
}

fn directory_of(relative: &str) -> String {
    match relative.rsplit_once('/') {
        Some((dir, _)) => dir.to_string(),
        None => "root".to_string(),
    }
}

/// Per-directory coverage, ordered by directory name
pub fn directory_breakdown(scan: &ContentScan) -> Vec<DirectoryCoverage> {
    let mut dirs: BTreeMap<String, DirectoryCoverage> = BTreeMap::new();
    for pair in &scan.pairs {
        let directory = directory_of(&pair.relative);
        let entry = dirs.entry(directory.clone()).or_insert_with(|| DirectoryCoverage {
            directory,
            ..Default::default()
        });
        entry.total_files += 1;
        entry.total_size += pair.size_bytes;
        if pair.exists {
            entry.translated_files += 1;
            entry.translated_size += pair.size_bytes;
        } else {
            entry.missing_files += 1;
        }
    }
    dirs.into_values().collect()
}

/// Directories with at least `min_files` sources, worst coverage first
pub fn worst_directories(
    dirs: &[DirectoryCoverage],
    min_files: usize,
    limit: usize,
) -> Vec<&DirectoryCoverage> {
    let mut selected: Vec<&DirectoryCoverage> =
        dirs.iter().filter(|d| d.total_files >= min_files).collect();
    selected.sort_by(|a, b| b.missing_percent().total_cmp(&a.missing_percent()));
    selected.truncate(limit);
    selected
}

/// Metrics for one source document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FileMetrics {
    pub relative_path: String,
    pub size_bytes: u64,
    pub word_count: usize,
    pub line_count: usize,
    pub char_count: usize,
    pub title: String,
    /// Product versions named under the `versions` metadata key
    pub versions: Vec<String>,
    pub has_templating_tags: bool,
    pub has_code_blocks: bool,
    pub has_tables: bool,
    pub is_priority: bool,
    pub translated: bool,
    /// Expected target path relative to the content root
    pub target_path: String,
}

impl FileMetrics {
    /// Analyze the content of a pair's source file
    pub fn analyze(root: &Path, pair: &FilePair, content: &str) -> Self {
        let (fm, _) = document::decode(content);
        Self {
            relative_path: pair.relative.clone(),
            size_bytes: pair.size_bytes,
            word_count: content.split_whitespace().count(),
            line_count: content.split('\n').count(),
            char_count: content.chars().count(),
            title: fm.get("title").unwrap_or_default().to_string(),
            versions: version_names(&fm),
            has_templating_tags: TEMPLATING_TAG_REGEX.is_match(content),
            has_code_blocks: content.contains("```"),
            has_tables: TABLE_ROW_REGEX.is_match(content),
            is_priority: pair.is_priority,
            translated: pair.exists,
            target_path: FileManager::relative_path(root, &pair.target),
        }
    }
}

/// Keys of the `versions` mapping, or the items of a `versions` list
fn version_names(fm: &document::Frontmatter) -> Vec<String> {
    let Some(value) = fm.yaml_value("versions") else {
        return Vec::new();
    };
    match value {
        serde_yaml::Value::Mapping(map) => map
            .keys()
            .filter_map(|k| k.as_str().map(str::to_string))
            .collect(),
        serde_yaml::Value::Sequence(items) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// One missing translation in the translation map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapEntry {
    pub source_file: String,
    pub target_file: String,
    pub priority: bool,
    pub word_count: usize,
    pub title: String,
    pub versions: Vec<String>,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapMetadata {
    pub created: String,
    pub target_language: String,
    pub total_files: usize,
}

/// Missing translations ordered for translators: priority first, then largest
#[derive(Debug, Clone, Serialize)]
pub struct TranslationMap {
    pub metadata: MapMetadata,
    pub missing_translations: Vec<MapEntry>,
}

impl TranslationMap {
    pub fn from_metrics(metrics: &[FileMetrics], target_language: &str) -> Self {
        let mut missing: Vec<MapEntry> = metrics
            .iter()
            .filter(|m| !m.translated)
            .map(|m| MapEntry {
                source_file: m.relative_path.clone(),
                target_file: m.target_path.clone(),
                priority: m.is_priority,
                word_count: m.word_count,
                title: m.title.clone(),
                versions: m.versions.clone(),
                size_bytes: m.size_bytes,
            })
            .collect();
        missing.sort_by_key(|e| (!e.priority, Reverse(e.word_count)));

        Self {
            metadata: MapMetadata {
                created: Local::now().to_rfc3339(),
                target_language: target_language.to_string(),
                total_files: missing.len(),
            },
            missing_translations: missing,
        }
    }
}

/// Context of a run, shared by the JSON and text reports
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub timestamp: String,
    pub content_root: String,
    pub target_language: String,
    pub mode: String,
    pub ai_enabled: bool,
    pub dry_run: bool,
    pub version: String,
}

impl ReportMetadata {
    pub fn new(content_root: &Path, target_language: &str, mode: &str, ai_enabled: bool, dry_run: bool) -> Self {
        Self {
            timestamp: Local::now().to_rfc3339(),
            content_root: content_root.display().to_string(),
            target_language: target_language.to_string(),
            mode: mode.to_string(),
            ai_enabled,
            dry_run,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusSummary {
    pub total_files: usize,
    pub missing_translations: usize,
    pub priority_missing: usize,
    pub coverage_percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MissingFile {
    pub file: String,
    pub size_bytes: u64,
    pub is_priority: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileDetails {
    pub missing_translations: Vec<MissingFile>,
    pub existing_translations: Vec<String>,
}

/// JSON status written at the end of every run
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub metadata: ReportMetadata,
    pub statistics: RunStats,
    pub summary: StatusSummary,
    pub directories: Vec<DirectoryCoverage>,
    pub file_details: FileDetails,
}

impl StatusReport {
    pub fn build(metadata: ReportMetadata, scan: &ContentScan, stats: &RunStats) -> Self {
        Self {
            metadata,
            statistics: stats.clone(),
            summary: StatusSummary {
                total_files: stats.total_source_files,
                missing_translations: stats.missing_count,
                priority_missing: stats.priority_missing,
                coverage_percent: stats.coverage_percent,
            },
            directories: directory_breakdown(scan),
            file_details: FileDetails {
                missing_translations: scan
                    .missing()
                    .map(|p| MissingFile {
                        file: p.relative.clone(),
                        size_bytes: p.size_bytes,
                        is_priority: p.is_priority,
                    })
                    .collect(),
                existing_translations: scan.existing().map(|p| p.relative.clone()).collect(),
            },
        }
    }
}

/// `1234567` -> `1,234,567`
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn section(lines: &mut Vec<String>, title: &str) {
    lines.push(title.to_string());
    lines.push("-".repeat(title.len()));
}

/// Human-readable report for a run
pub fn render_text_report(report: &StatusReport) -> String {
    let meta = &report.metadata;
    let stats = &report.statistics;
    let mut lines = Vec::new();

    lines.push("=".repeat(RULE_WIDTH));
    lines.push("MARKDOWN TRANSLATION REPORT".to_string());
    lines.push("=".repeat(RULE_WIDTH));
    lines.push(format!("Generated: {}", meta.timestamp));
    lines.push(format!("Content Root: {}", meta.content_root));
    lines.push(format!("Target Language: {}", meta.target_language));
    lines.push(format!("Mode: {}", meta.mode));
    lines.push(format!(
        "AI Provider: {}",
        if meta.ai_enabled { "Enabled" } else { "Disabled" }
    ));
    if meta.dry_run {
        lines.push("Dry Run: Yes".to_string());
    }
    lines.push(String::new());

    section(&mut lines, "SUMMARY STATISTICS");
    lines.push(format!("Total Source Files: {}", group_thousands(stats.total_source_files)));
    lines.push(format!("Total Target Files: {}", group_thousands(stats.total_target_files)));
    lines.push(format!("Existing Translations: {}", group_thousands(stats.existing_count)));
    lines.push(format!("Missing Translations: {}", group_thousands(stats.missing_count)));
    lines.push(format!("Translation Coverage: {:.1}%", stats.coverage_percent));
    lines.push(format!("Files Created This Run: {}", group_thousands(stats.created_count)));
    if stats.enhanced_count > 0 {
        lines.push(format!("Files Enhanced This Run: {}", group_thousands(stats.enhanced_count)));
    }
    if meta.dry_run {
        lines.push(format!("Files Planned (dry run): {}", group_thousands(stats.dry_run_count)));
    }
    if meta.ai_enabled {
        lines.push(format!("AI-Translated Files: {}", group_thousands(stats.ai_count)));
        lines.push(format!("Provider Fallbacks: {}", group_thousands(stats.fallback_count)));
        lines.push(format!("Templating Tags Lost: {}", group_thousands(stats.lost_tags)));
    }
    lines.push(format!("Errors Encountered: {}", group_thousands(stats.error_count)));
    lines.push(String::new());

    section(&mut lines, "PRIORITY FILES ANALYSIS");
    lines.push(format!("Total Priority Files: {}", group_thousands(stats.priority_total)));
    lines.push(format!(
        "Priority Files Translated: {}",
        group_thousands(stats.priority_total - stats.priority_missing)
    ));
    lines.push(format!("Priority Files Missing: {}", group_thousands(stats.priority_missing)));
    if stats.priority_total > 0 {
        lines.push(format!("Priority Coverage: {:.1}%", stats.priority_coverage_percent()));
    }
    lines.push(String::new());

    section(&mut lines, "DIRECTORY COVERAGE BREAKDOWN");
    let eligible = report
        .directories
        .iter()
        .filter(|d| d.total_files >= MIN_DIRECTORY_FILES)
        .count();
    let worst = worst_directories(&report.directories, MIN_DIRECTORY_FILES, MAX_REPORTED_DIRECTORIES);
    if worst.is_empty() {
        lines.push(format!("  No directory has {} or more files", MIN_DIRECTORY_FILES));
    }
    for dir in &worst {
        let name: String = dir.directory.chars().take(50).collect();
        lines.push(format!(
            "  {:<50} {:>3}/{:<3} missing ({:5.1}%)",
            name,
            dir.missing_files,
            dir.total_files,
            dir.missing_percent()
        ));
    }
    if eligible > worst.len() {
        lines.push(format!("  ... and {} more directories", eligible - worst.len()));
    }
    lines.push(String::new());

    section(&mut lines, "PERFORMANCE METRICS");
    lines.push(format!("Analysis Time: {:.1} seconds", stats.analysis_secs));
    if stats.selected_count > 0 {
        lines.push(format!("Translation Time: {:.1} seconds", stats.translation_secs));
    }
    if let Some(avg) = stats.average_secs_per_file() {
        lines.push(format!("Average Time per File: {:.2} seconds", avg));
    }
    let t = &stats.translation;
    if t.texts_translated > 0 {
        lines.push(format!(
            "Texts Translated: {} (terminology: {}, patterns: {}, lexical fallbacks: {})",
            t.texts_translated, t.terminology_applications, t.pattern_matches, t.lexical_fallbacks
        ));
    }
    lines.push(String::new());

    section(&mut lines, "RECOMMENDATIONS");
    for rec in recommendations(report) {
        lines.push(format!("• {}", rec));
    }
    lines.push(String::new());

    lines.join("\n")
}

fn recommendations(report: &StatusReport) -> Vec<String> {
    let stats = &report.statistics;
    let mut recs = Vec::new();

    if stats.coverage_percent < 50.0 {
        recs.push("Translation coverage is low - prioritize high-impact files".to_string());
    }
    if stats.priority_missing > 0 {
        recs.push(format!(
            "{} high-priority files need translation (use --priority-only)",
            stats.priority_missing
        ));
    }
    if report
        .directories
        .iter()
        .any(|d| d.total_files >= MIN_DIRECTORY_FILES && d.coverage_percent() < 25.0)
    {
        recs.push("Some directories have very low coverage - consider batch translation".to_string());
    }
    if stats.error_count > 0 {
        recs.push(format!("Review {} files that had errors", stats.error_count));
    }
    if stats.fallback_count > 0 {
        recs.push(format!(
            "{} files fell back to rule-based output - check provider settings",
            stats.fallback_count
        ));
    }
    if !report.metadata.ai_enabled {
        recs.push("Consider --ai for higher quality translations".to_string());
    }
    if stats.written_count() > 0 {
        recs.push("Review newly created translations and run the quality check".to_string());
    }
    recs.push("Run the audit regularly to catch new source content".to_string());
    recs
}

/// Serialize `value` as pretty JSON to `path`
pub fn write_json_report<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize report")?;
    FileManager::write_to_file(path, &json)
}

/// Write the configured report files for a run, returning their paths
pub fn write_reports(
    config: &ReportConfig,
    report: &StatusReport,
    map: Option<&TranslationMap>,
) -> Result<Vec<PathBuf>> {
    let now = Local::now();
    let stamp = now.format("%Y%m%d_%H%M%S");
    let dir = PathBuf::from(&config.output_dir);
    FileManager::ensure_dir(&dir)?;

    let mut written = Vec::new();

    if config.write_json {
        let path = dir.join(format!("translation_status_{}.json", stamp));
        write_json_report(&path, report)?;
        written.push(path);
    }

    if config.write_text {
        let path = dir.join(format!("translation_report_{}.txt", stamp));
        FileManager::write_to_file(&path, &render_text_report(report))?;
        written.push(path);
    }

    if let Some(map) = map {
        let path = dir.join(format!(
            "translation_map_{}_{}.json",
            map.metadata.target_language,
            now.format("%Y%m%d")
        ));
        write_json_report(&path, map)?;
        written.push(path);
    }

    for path in &written {
        info!("Report saved to: {}", path.display());
    }
    Ok(written)
}
