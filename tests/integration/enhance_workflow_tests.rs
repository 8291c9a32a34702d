/*!
 * Integration tests for the enhance, audit and quality workflows
 */

use anyhow::Result;
use std::fs;

use crate::common;
use mdlingo::{Controller, EnhanceOptions, EnhanceSelection};

const ENGLISH_TARGET: &str =
    "---\ntitle: About issues\n---\n\n## Prerequisites\n\nYou can track work with issues on GitHub.\n";

fn enhance_options(selection: EnhanceSelection) -> EnhanceOptions {
    EnhanceOptions {
        selection,
        aggressive: false,
        target_only: false,
        dry_run: false,
    }
}

/// Test that a single file can be enhanced through its source path
#[test]
fn test_enhance_withSourceFile_shouldWriteEnhancedTarget() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = common::create_docs_tree(&temp_dir)?;
    let controller = Controller::with_config(common::test_config(&temp_dir))?;

    let summary = tokio_test::block_on(controller.enhance(&enhance_options(
        EnhanceSelection::File(root.join("guides/setup.md")),
    )))?;

    assert_eq!(summary.stats.selected_count, 1);
    assert_eq!(summary.stats.enhanced_count, 1);
    let page = fs::read_to_string(root.join("guides/setup-ar.md"))?;
    assert!(page.contains("dir: rtl"));
    assert!(page.contains("## المتطلبات المسبقة"));
    Ok(())
}

/// Test that a missing source file is an error
#[test]
fn test_enhance_withMissingFile_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = common::create_docs_tree(&temp_dir)?;
    let controller = Controller::with_config(common::test_config(&temp_dir))?;

    let result = tokio_test::block_on(controller.enhance(&enhance_options(
        EnhanceSelection::File(root.join("guides/nothing-ar.md")),
    )));

    assert!(result.is_err());
    Ok(())
}

/// Test the audit then enhance-flagged round trip
#[test]
fn test_enhance_withFlaggedAudit_shouldRegenerateFlaggedFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = common::create_docs_tree(&temp_dir)?;
    common::create_test_file(&root, "guides/setup-ar.md", ENGLISH_TARGET)?;
    let controller = Controller::with_config(common::test_config(&temp_dir))?;

    let (audit, paths) = controller.audit()?;
    assert_eq!(audit.likely_untranslated, vec!["guides/setup-ar.md"]);
    assert_eq!(paths.len(), 2);
    let json = paths
        .iter()
        .find(|p| p.extension().is_some_and(|e| e == "json"))
        .ok_or_else(|| anyhow::anyhow!("no audit JSON"))?;

    let summary = tokio_test::block_on(
        controller.enhance(&enhance_options(EnhanceSelection::Flagged(json.clone()))),
    )?;

    assert_eq!(summary.stats.enhanced_count, 1);
    let page = fs::read_to_string(root.join("guides/setup-ar.md"))?;
    assert_ne!(page, ENGLISH_TARGET);
    assert!(page.contains("dir: rtl"));
    Ok(())
}

/// Test that a dry-run enhance leaves existing targets alone
#[test]
fn test_enhance_withDryRunSample_shouldNotModifyTargets() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = common::create_docs_tree(&temp_dir)?;
    let before = fs::read_to_string(root.join("get-started/index-ar.md"))?;
    let controller = Controller::with_config(common::test_config(&temp_dir))?;

    let summary = tokio_test::block_on(controller.enhance(&EnhanceOptions {
        selection: EnhanceSelection::Sample(5),
        aggressive: true,
        target_only: false,
        dry_run: true,
    }))?;

    assert_eq!(summary.stats.selected_count, 1);
    assert_eq!(summary.stats.dry_run_count, 1);
    assert_eq!(summary.stats.enhanced_count, 0);
    assert_eq!(fs::read_to_string(root.join("get-started/index-ar.md"))?, before);
    Ok(())
}

/// Test that the priority selection only touches existing priority targets
#[test]
fn test_enhance_withPrioritySelection_shouldSkipMissingTargets() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = common::create_docs_tree(&temp_dir)?;
    let controller = Controller::with_config(common::test_config(&temp_dir))?;

    let summary =
        tokio_test::block_on(controller.enhance(&enhance_options(EnhanceSelection::Priority)))?;

    assert_eq!(summary.stats.enhanced_count, 1);
    assert!(fs::read_to_string(root.join("get-started/index-ar.md"))?.contains("dir: rtl"));
    assert!(!root.join("guides/setup-ar.md").exists());
    Ok(())
}

/// Test that enhancing keeps the target's own metadata and translated title
#[test]
fn test_enhance_withAllSelection_shouldKeepTargetFrontmatter() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = common::create_docs_tree(&temp_dir)?;
    common::create_test_file(
        &root,
        "guides/setup-ar.md",
        "---\ntitle: حول الأدوات المصغرة\nredirect_from:\n  - /ar/old\n---\n\nقديم\n",
    )?;
    let controller = Controller::with_config(common::test_config(&temp_dir))?;

    let summary = tokio_test::block_on(controller.enhance(&enhance_options(EnhanceSelection::All)))?;

    assert_eq!(summary.stats.enhanced_count, 2);
    let page = fs::read_to_string(root.join("guides/setup-ar.md"))?;
    assert!(page.starts_with("---\ntitle: حول الأدوات المصغرة\nredirect_from:\n  - /ar/old\n"));
    assert!(page.contains("dir: rtl"));
    assert!(page.contains("# حول الأدوات المصغرة"));
    assert!(page.contains("## المتطلبات المسبقة"));
    let index = fs::read_to_string(root.join("get-started/index-ar.md"))?;
    assert!(index.contains("title: ابدأ\n"));
    Ok(())
}

/// Test the audit lists and report files
#[test]
fn test_audit_withMissingTarget_shouldListIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_docs_tree(&temp_dir)?;
    let controller = Controller::with_config(common::test_config(&temp_dir))?;

    let (audit, paths) = controller.audit()?;

    assert_eq!(audit.missing_targets, vec!["guides/setup.md"]);
    assert!(audit.likely_untranslated.is_empty());
    assert!(audit.placeholders.is_empty());
    assert!(paths.iter().all(|p| p.exists()));
    Ok(())
}

/// Test the quality workflow and its JSON report
#[test]
fn test_quality_withDocsTree_shouldWriteReport() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_docs_tree(&temp_dir)?;
    let controller = Controller::with_config(common::test_config(&temp_dir))?;

    let (summary, path) = controller.quality(None)?;

    assert_eq!(summary.total_files, 2);
    assert_eq!(summary.perfect_translations, 1);
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    assert_eq!(json["total_files"], 2);
    assert_eq!(json["results"].as_array().map(Vec::len), Some(2));
    Ok(())
}
