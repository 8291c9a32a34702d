/*!
 * Tests for the coverage audit and quality checker
 */

use anyhow::Result;

use crate::common;
use mdlingo::app_config::ScanConfig;
use mdlingo::pairs::{PathClassifier, scan_content};
use mdlingo::quality::audit::{is_placeholder, likely_untranslated};
use mdlingo::quality::checker::score;
use mdlingo::quality::{AuditReport, QualityChecker, QualityIssue};
use mdlingo::translation::STUB_NOTE;

fn checker() -> QualityChecker {
    QualityChecker::new(&["title".to_string(), "intro".to_string()])
}

/// Test the leakage heuristic on English and Arabic text
#[test]
fn test_likely_untranslated_withEnglishSection_shouldFlag() {
    assert!(likely_untranslated("## Overview\n\nThis guide explains forks."));
    assert!(!likely_untranslated("## نظرة عامة\n\nيشرح هذا الدليل النسخ المتفرعة بالتفصيل."));
}

/// Test that code and URLs do not count as leaked prose
#[test]
fn test_likely_untranslated_withEnglishCodeOnly_shouldNotFlag() {
    let text = format!(
        "شرح الأمر أدناه.\n\n```\n{}\n```\nhttps://docs.github.com/en/get-started/overview",
        "You can run git clone and git push here. ".repeat(10)
    );
    assert!(!likely_untranslated(&text));
}

/// Test placeholder detection by length and markers
#[test]
fn test_is_placeholder_withShortOrMarkedText_shouldFlag() {
    assert!(is_placeholder("# قصير"));
    let long_stub = format!("{}\n> **ملاحظة**: {}", "نص عربي طويل. ".repeat(20), "ترجمة");
    assert!(is_placeholder(&long_stub));
    assert!(!is_placeholder(&"نص عربي طويل ومفيد. ".repeat(20)));
}

/// Test the scoring formula and its floor
#[test]
fn test_score_withIssues_shouldDeductAndFloorAtZero() {
    assert_eq!(score(0, false), 100);
    assert_eq!(score(2, false), 80);
    assert_eq!(score(1, true), 60);
    assert_eq!(score(12, true), 0);
}

/// Test that a generated stub is recognised as placeholder content
#[test]
fn test_check_body_withStubNote_shouldMarkPlaceholder() {
    let body = format!("# عنوان\n\n{}\n\n---\n\nOriginal text", STUB_NOTE);
    let (issues, is_placeholder) = checker().check_body(&body);
    assert!(is_placeholder);
    assert!(!issues.contains(&QualityIssue::TooShort));
}

/// Test pair checks against real files
#[test]
fn test_check_pair_withMissingAndGoodTargets_shouldScore() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = common::create_docs_tree(&temp_dir)?;
    let classifier = PathClassifier::new(&ScanConfig::default(), "ar")?;
    let scan = scan_content(&root, &classifier)?;

    let summary = checker().run(&root, &scan, None);

    assert_eq!(summary.total_files, 2);
    let missing = summary
        .results
        .iter()
        .find(|r| r.source_file == "guides/setup.md")
        .ok_or_else(|| anyhow::anyhow!("missing pair not checked"))?;
    assert_eq!(missing.score, 0);
    assert_eq!(missing.issues, vec![QualityIssue::MissingTarget]);
    assert_eq!(missing.messages, vec!["Target translation file missing"]);

    let good = summary
        .results
        .iter()
        .find(|r| r.source_file == "get-started/index.md")
        .ok_or_else(|| anyhow::anyhow!("translated pair not checked"))?;
    assert_eq!(good.score, 100);
    assert_eq!(summary.average_score, 50.0);
    assert_eq!(summary.distribution.excellent, 1);
    assert_eq!(summary.distribution.poor, 1);
    Ok(())
}

/// Test that sampling never checks more pairs than requested
#[test]
fn test_run_withSample_shouldLimitPairs() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = common::create_docs_tree(&temp_dir)?;
    let classifier = PathClassifier::new(&ScanConfig::default(), "ar")?;
    let scan = scan_content(&root, &classifier)?;

    assert_eq!(checker().run(&root, &scan, Some(1)).total_files, 1);
    assert_eq!(checker().run(&root, &scan, Some(10)).total_files, 2);
    Ok(())
}

/// Test that an audit report survives its JSON file
#[test]
fn test_audit_report_withWriteAndReload_shouldKeepLists() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = common::create_docs_tree(&temp_dir)?;
    common::create_test_file(
        &root,
        "guides/setup-ar.md",
        "---\ntitle: Setup\n---\n\n## Prerequisites\n\nYou can create a repository on GitHub.\n",
    )?;
    let classifier = PathClassifier::new(&ScanConfig::default(), "ar")?;
    let scan = scan_content(&root, &classifier)?;

    let report = AuditReport::from_scan(&root, &scan, "ar");
    let (json, markdown) = report.write(&common::report_dir(&temp_dir))?;
    let reloaded = AuditReport::from_file(&json)?;

    assert_eq!(reloaded.likely_untranslated, vec!["guides/setup-ar.md"]);
    assert_eq!(reloaded.placeholders, vec!["guides/setup-ar.md"]);
    assert!(reloaded.missing_targets.is_empty());
    assert_eq!(reloaded.total_pairs, 2);
    assert!(std::fs::read_to_string(markdown)?.contains("# Translation Coverage Audit"));
    Ok(())
}
