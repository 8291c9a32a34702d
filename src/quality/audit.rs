/*!
 * Coverage audit of a translated content tree.
 *
 * Three lists come out of an audit:
 * - sources without a target file
 * - target files that still read like source-language text
 * - target files that are too short or still carry the placeholder note
 *
 * The JSON form of the report is what `enhance --flagged` reads back.
 */

use anyhow::{Context, Result};
use chrono::Local;
use log::{error, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::file_utils::FileManager;
use crate::language_utils;
use crate::pairs::{self, ContentScan};
use crate::report::write_json_report;
use crate::translation::protect;

/// Phrases that give away an untranslated English section
static SOURCE_CUE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"\bPrerequisites\b|\bOverview\b|\bSummary\b|\bSteps\b|",
        r"\bNote:|\bTip:|\bCaution:|\bWarning:|",
        r"\bAbout GitHub\b|\bGitHub Actions\b|\bThis guide\b|",
        r"\bYou can\b|\bTo [a-z]+:|\bExample\b|\bLearn more\b"
    ))
    .expect("valid source cue regex")
});

/// Below this ratio a text with cue phrases is flagged
pub const CUE_RATIO_THRESHOLD: f64 = 0.5;

/// Below this ratio a text with many Latin letters is flagged
pub const STRICT_RATIO_THRESHOLD: f64 = 0.15;

/// Latin letter count above which the strict ratio applies
pub const STRICT_LATIN_LETTERS: usize = 150;

/// Target files shorter than this (trimmed, in characters) count as placeholders
pub const MIN_TARGET_CHARS: usize = 120;

const PLACEHOLDER_MARKERS: &[&str] = &["هذه الصفحة تحتاج", "> **ملاحظة**"];

/// True when a target text most likely still holds source-language prose
pub fn likely_untranslated(text: &str) -> bool {
    let cleaned = protect::strip_non_prose(text);
    let ratio = language_utils::target_script_ratio(&cleaned);

    if SOURCE_CUE_REGEX.is_match(&cleaned) && ratio < CUE_RATIO_THRESHOLD {
        return true;
    }
    language_utils::count_source_letters(&cleaned) > STRICT_LATIN_LETTERS
        && ratio < STRICT_RATIO_THRESHOLD
}

/// True for trivially short target files and generated stubs
pub fn is_placeholder(text: &str) -> bool {
    text.trim().chars().count() < MIN_TARGET_CHARS
        || PLACEHOLDER_MARKERS.iter().any(|m| text.contains(m))
}

// @struct: Audit results
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditReport {
    pub generated: String,
    pub target_language: String,
    pub total_source_files: usize,
    pub total_target_files: usize,
    /// Sources plus targets without a source
    pub total_pairs: usize,
    pub missing_targets: Vec<String>,
    /// Target files flagged as still in the source language
    pub likely_untranslated: Vec<String>,
    pub placeholders: Vec<String>,
    #[serde(default)]
    pub unreadable: Vec<String>,
}

impl AuditReport {
    /// Audit every pair and target file of a scan
    pub fn from_scan(root: &Path, scan: &ContentScan, target_language: &str) -> Self {
        let mut report = Self {
            generated: Local::now().to_rfc3339(),
            target_language: target_language.to_string(),
            total_source_files: scan.pairs.len(),
            total_target_files: scan.targets.len(),
            ..Default::default()
        };

        report.missing_targets = scan.missing().map(|p| p.relative.clone()).collect();

        let mut orphans = 0;
        for target in &scan.targets {
            let relative = FileManager::relative_path(root, target);
            let has_source = pairs::source_path(target, target_language)
                .is_some_and(|s| FileManager::file_exists(s));
            if !has_source {
                orphans += 1;
            }

            let text = match FileManager::read_to_string(target) {
                Ok(text) => text,
                Err(e) => {
                    error!("Cannot audit {}: {}", relative, e);
                    report.unreadable.push(relative);
                    continue;
                }
            };
            if likely_untranslated(&text) {
                report.likely_untranslated.push(relative.clone());
            }
            if is_placeholder(&text) {
                report.placeholders.push(relative);
            }
        }
        report.total_pairs = scan.pairs.len() + orphans;

        report.missing_targets.sort();
        report.likely_untranslated.sort();
        report.placeholders.sort();
        report
    }

    /// Markdown rendering of the report
    pub fn to_markdown(&self) -> String {
        let mut out = String::from("# Translation Coverage Audit\n\n");
        out.push_str(&format!("- Generated: {}\n", self.generated));
        out.push_str(&format!("- Target language: {}\n", self.target_language));
        out.push_str(&format!("- Total source files: {}\n", self.total_source_files));
        out.push_str(&format!("- Total target files: {}\n", self.total_target_files));
        out.push_str(&format!("- Total pairs discovered: {}\n\n", self.total_pairs));

        let mut list = |title: &str, items: &[String]| {
            out.push_str(&format!("- {}: {}\n", title, items.len()));
            for item in items {
                out.push_str(&format!("  - {}\n", item));
            }
            out.push('\n');
        };
        list("Missing target counterparts", &self.missing_targets);
        list("Target files with likely source-language content", &self.likely_untranslated);
        list("Target files that are too short/placeholder", &self.placeholders);
        if !self.unreadable.is_empty() {
            list("Unreadable target files", &self.unreadable);
        }
        out
    }

    /// Write `translation_audit_report.json` and `.md` into `dir`
    pub fn write(&self, dir: &Path) -> Result<(PathBuf, PathBuf)> {
        FileManager::ensure_dir(dir)?;
        let json_path = dir.join("translation_audit_report.json");
        let md_path = dir.join("translation_audit_report.md");
        write_json_report(&json_path, self)?;
        FileManager::write_to_file(&md_path, &self.to_markdown())?;
        info!("Audit report saved to: {}", md_path.display());
        Ok((json_path, md_path))
    }

    /// Load a report previously written by `write`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = FileManager::read_to_string(path)?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse audit report: {}", path.display()))
    }

    /// Log a short summary
    pub fn log_summary(&self) {
        info!("Total source files: {}", self.total_source_files);
        info!("Total target files: {}", self.total_target_files);
        info!("Missing target counterparts: {}", self.missing_targets.len());
        info!("Likely source-language content: {}", self.likely_untranslated.len());
        info!("Too short/placeholder: {}", self.placeholders.len());
    }
}
