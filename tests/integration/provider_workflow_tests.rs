/*!
 * Integration tests for translate runs backed by a provider
 */

use anyhow::Result;
use std::fs;

use crate::common;
use mdlingo::providers::MockProvider;
use mdlingo::providers::mock::MOCK_PREFIX;
use mdlingo::translation::STUB_NOTE;
use mdlingo::{Controller, RunOptions};

fn ai_options() -> RunOptions {
    RunOptions {
        ai: true,
        ..Default::default()
    }
}

/// Test that a working provider translates metadata and body
#[test]
fn test_run_withWorkingProvider_shouldUseProviderOutput() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = common::create_docs_tree(&temp_dir)?;
    let provider = MockProvider::working();
    let controller = Controller::with_config(common::test_config(&temp_dir))?
        .with_provider(Box::new(provider.clone()));

    let summary = tokio_test::block_on(controller.run(&ai_options()))?;

    assert_eq!(summary.stats.ai_count, 1);
    assert_eq!(summary.stats.fallback_count, 0);
    assert_eq!(summary.stats.lost_tags, 0);
    // title, intro and body
    assert_eq!(provider.request_count(), 3);

    let page = fs::read_to_string(root.join("guides/setup-ar.md"))?;
    let (fm, _) = mdlingo::document::decode(&page);
    let expected_title = format!("{}About issues", MOCK_PREFIX);
    assert_eq!(fm.get("title"), Some(expected_title.as_str()));
    assert!(fm.structured().is_ok());
    assert!(page.contains("{% data reusables.repositories.create %}"));
    assert!(page.contains("versions:\n  fpt: '*'"));
    Ok(())
}

/// Test that provider failures fall back to the rule-based stub
#[test]
fn test_run_withFailingProvider_shouldFallBackToRules() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = common::create_docs_tree(&temp_dir)?;
    let controller = Controller::with_config(common::test_config(&temp_dir))?
        .with_provider(Box::new(MockProvider::failing()));

    let summary = tokio_test::block_on(controller.run(&ai_options()))?;

    assert_eq!(summary.stats.ai_count, 0);
    assert_eq!(summary.stats.fallback_count, 1);
    assert_eq!(summary.stats.created_count, 1);
    assert_eq!(summary.stats.error_count, 0);
    assert!(fs::read_to_string(root.join("guides/setup-ar.md"))?.contains(STUB_NOTE));
    Ok(())
}

/// Test that templating tags dropped by the provider are counted
#[test]
fn test_run_withTagDroppingProvider_shouldCountLostTags() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = common::create_docs_tree(&temp_dir)?;
    let controller = Controller::with_config(common::test_config(&temp_dir))?
        .with_provider(Box::new(MockProvider::dropping_tags()));

    let summary = tokio_test::block_on(controller.run(&ai_options()))?;

    assert_eq!(summary.stats.ai_count, 1);
    assert_eq!(summary.stats.lost_tags, 1);
    assert!(!fs::read_to_string(root.join("guides/setup-ar.md"))?.contains("{% data"));
    Ok(())
}

/// Test that the provider is ignored unless AI translation is requested
#[test]
fn test_run_withoutAiFlag_shouldNotCallProvider() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_docs_tree(&temp_dir)?;
    let provider = MockProvider::working();
    let controller = Controller::with_config(common::test_config(&temp_dir))?
        .with_provider(Box::new(provider.clone()));

    let summary = tokio_test::block_on(controller.run(&RunOptions::default()))?;

    assert_eq!(provider.request_count(), 0);
    assert_eq!(summary.stats.ai_count, 0);
    assert_eq!(summary.stats.created_count, 1);
    Ok(())
}
