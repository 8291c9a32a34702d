/*!
 * Tests for source/target pairing and content scanning
 */

use anyhow::Result;
use std::path::PathBuf;

use crate::common;
use mdlingo::ContentError;
use mdlingo::app_config::ScanConfig;
use mdlingo::pairs::{PathClassifier, is_target_file, scan_content, source_path, target_path};

/// Test the naming convention in both directions
#[test]
fn test_target_path_and_source_path_shouldMirrorEachOther() {
    let target = target_path("content/issues/about.md", "ar");
    assert_eq!(target, PathBuf::from("content/issues/about-ar.md"));
    assert!(is_target_file(&target, "ar"));
    assert_eq!(source_path(&target, "ar"), Some(PathBuf::from("content/issues/about.md")));
    assert!(!is_target_file("content/issues/about.md", "ar"));
}

/// Test that target suffixes of other languages are not targets
#[test]
fn test_is_target_file_withOtherLanguage_shouldBeFalse() {
    assert!(!is_target_file("guide-fr.md", "ar"));
    assert!(is_target_file("guide-AR.md", "ar"));
}

/// Test that scanning pairs sources, counts targets and skips assets
#[test]
fn test_scan_content_withMixedTree_shouldPairAndSkip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path();
    common::create_test_file(root, "index.md", "# Home")?;
    common::create_test_file(root, "index-ar.md", "# الرئيسية")?;
    common::create_test_file(root, "guides/setup.md", "# Setup")?;
    common::create_test_file(root, "images/readme.md", "# Asset")?;
    common::create_test_file(root, "notes.txt", "not markdown")?;

    let classifier = PathClassifier::new(&ScanConfig::default(), "ar")?;
    let scan = scan_content(root, &classifier)?;

    assert_eq!(scan.pairs.len(), 2);
    assert_eq!(scan.targets.len(), 1);
    assert_eq!(scan.skipped, 1);
    assert_eq!(scan.missing_count(), 1);
    assert!((scan.coverage_percent() - 50.0).abs() < f64::EPSILON);

    let index = scan
        .pairs
        .iter()
        .find(|p| p.relative == "index.md")
        .ok_or_else(|| anyhow::anyhow!("index.md not scanned"))?;
    assert!(index.exists);
    assert!(index.is_priority);
    assert_eq!(index.size_bytes, 6);
    Ok(())
}

/// Test that a missing content root is a distinct error
#[test]
fn test_scan_content_withMissingRoot_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let classifier = PathClassifier::new(&ScanConfig::default(), "ar")?;

    let err = match scan_content(&temp_dir.path().join("nope"), &classifier) {
        Ok(_) => anyhow::bail!("scan of a missing root should fail"),
        Err(e) => e,
    };

    assert!(matches!(
        err.downcast_ref::<ContentError>(),
        Some(ContentError::MissingContentRoot(_))
    ));
    Ok(())
}

/// Test that an empty tree has zero coverage instead of dividing by zero
#[test]
fn test_scan_content_withEmptyTree_shouldReportZeroCoverage() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let classifier = PathClassifier::new(&ScanConfig::default(), "ar")?;

    let scan = scan_content(temp_dir.path(), &classifier)?;

    assert!(scan.pairs.is_empty());
    assert_eq!(scan.coverage_percent(), 0.0);
    Ok(())
}

/// Test custom priority patterns
#[test]
fn test_classifier_withCustomPatterns_shouldMatchCaseInsensitively() -> Result<()> {
    let scan_config = ScanConfig {
        skip_patterns: vec![r"^drafts/".to_string()],
        priority_patterns: vec![r"^billing/".to_string()],
    };
    let classifier = PathClassifier::new(&scan_config, "ar")?;

    assert!(classifier.is_priority("Billing/plans.md"));
    assert!(!classifier.is_priority("get-started/index.md"));
    assert!(classifier.should_skip("drafts/wip.md"));
    Ok(())
}
