/*!
 * Source/target file pairing and path classification.
 *
 * A source `dir/name.md` is translated by its sibling `dir/name-<lang>.md`.
 * Priority and skip rules are case-insensitive regexes matched against the
 * '/'-separated path relative to the content root.
 */

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use std::path::{Path, PathBuf};

use crate::app_config::ScanConfig;
use crate::errors::ContentError;
use crate::file_utils::FileManager;

const MARKDOWN_EXTENSION: &str = "md";

/// Expected target path for a source file: `stem-<lang>.md` next to it
pub fn target_path<P: AsRef<Path>>(source: P, lang: &str) -> PathBuf {
    let source = source.as_ref();
    let stem = source.file_stem().unwrap_or_default().to_string_lossy();
    let name = format!("{}-{}.{}", stem, lang, MARKDOWN_EXTENSION);
    match source.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}

/// True when the file name ends with `-<lang>.md`
pub fn is_target_file<P: AsRef<Path>>(path: P, lang: &str) -> bool {
    let suffix = format!("-{}.{}", lang, MARKDOWN_EXTENSION);
    path.as_ref()
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase().ends_with(&suffix.to_lowercase()))
        .unwrap_or(false)
}

/// Source path for a target file, or None when `path` is not a target file
pub fn source_path<P: AsRef<Path>>(target: P, lang: &str) -> Option<PathBuf> {
    let target = target.as_ref();
    if !is_target_file(target, lang) {
        return None;
    }
    let name = target.file_name()?.to_string_lossy().to_string();
    let suffix_len = lang.len() + 1 + MARKDOWN_EXTENSION.len() + 1;
    let stem = &name[..name.len() - suffix_len];
    Some(target.with_file_name(format!("{}.{}", stem, MARKDOWN_EXTENSION)))
}

fn compile_all(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .with_context(|| format!("Invalid path pattern: {}", p))
        })
        .collect()
}

/// Priority, skip and target classification for relative paths
#[derive(Debug, Clone)]
pub struct PathClassifier {
    skip: Vec<Regex>,
    priority: Vec<Regex>,
    target_language: String,
}

impl PathClassifier {
    pub fn new(scan: &ScanConfig, target_language: &str) -> Result<Self> {
        Ok(Self {
            skip: compile_all(&scan.skip_patterns)?,
            priority: compile_all(&scan.priority_patterns)?,
            target_language: target_language.to_string(),
        })
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    pub fn is_priority(&self, relative: &str) -> bool {
        self.priority.iter().any(|re| re.is_match(relative))
    }

    pub fn should_skip(&self, relative: &str) -> bool {
        self.skip.iter().any(|re| re.is_match(relative))
    }

    pub fn is_target(&self, path: &Path) -> bool {
        is_target_file(path, &self.target_language)
    }

    pub fn target_for(&self, source: &Path) -> PathBuf {
        target_path(source, &self.target_language)
    }
}

/// A source document and its expected translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    pub source: PathBuf,
    pub target: PathBuf,
    /// Source path relative to the content root
    pub relative: String,
    pub exists: bool,
    pub is_priority: bool,
    pub size_bytes: u64,
}

/// Result of walking a content tree
#[derive(Debug, Clone, Default)]
pub struct ContentScan {
    pub pairs: Vec<FilePair>,
    /// Every target-language file found, with or without a source
    pub targets: Vec<PathBuf>,
    pub skipped: usize,
}

impl ContentScan {
    pub fn missing(&self) -> impl Iterator<Item = &FilePair> {
        self.pairs.iter().filter(|p| !p.exists)
    }

    pub fn existing(&self) -> impl Iterator<Item = &FilePair> {
        self.pairs.iter().filter(|p| p.exists)
    }

    pub fn missing_count(&self) -> usize {
        self.missing().count()
    }

    /// Percentage of sources with a translation; 0 for an empty tree
    pub fn coverage_percent(&self) -> f64 {
        if self.pairs.is_empty() {
            return 0.0;
        }
        let existing = self.pairs.len() - self.missing_count();
        existing as f64 / self.pairs.len() as f64 * 100.0
    }
}

/// Walk `root`, pairing every source document with its target
pub fn scan_content(root: &Path, classifier: &PathClassifier) -> Result<ContentScan> {
    if !FileManager::dir_exists(root) {
        return Err(ContentError::MissingContentRoot(root.to_path_buf()).into());
    }

    let mut scan = ContentScan::default();
    for path in FileManager::find_markdown_files(root)? {
        let relative = FileManager::relative_path(root, &path);
        if classifier.should_skip(&relative) {
            log::debug!("Skipping {}", relative);
            scan.skipped += 1;
            continue;
        }

        if classifier.is_target(&path) {
            scan.targets.push(path);
            continue;
        }

        let target = classifier.target_for(&path);
        scan.pairs.push(FilePair {
            exists: FileManager::file_exists(&target),
            is_priority: classifier.is_priority(&relative),
            size_bytes: FileManager::file_size(&path),
            source: path,
            target,
            relative,
        });
    }

    Ok(scan)
}
