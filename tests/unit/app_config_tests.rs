/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::common;
use mdlingo::AppError;
use mdlingo::Config;
use mdlingo::app_config::{LogLevel, SegmenterKind};

/// Test the documented defaults
#[test]
fn test_default_config_shouldMatchDocumentedDefaults() {
    let config = Config::default();

    assert_eq!(config.content_root, PathBuf::from("content"));
    assert_eq!(config.source_language, "en");
    assert_eq!(config.target_language, "ar");
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.translation.conservative_threshold, 0.25);
    assert_eq!(config.translation.aggressive_threshold, 0.6);
    assert_eq!(config.translation.min_source_letters, 50);
    assert_eq!(config.translation.segmenter, SegmenterKind::Line);
    assert_eq!(
        config.translation.translatable_fields,
        vec!["title", "shortTitle", "intro", "permissions"]
    );
    assert!(!config.provider.enabled);
    assert_eq!(config.provider.model, "gpt-4");
    assert_eq!(config.provider.rate_limit_delay_ms, 500);
    assert_eq!(config.report.output_dir, PathBuf::from("reports"));
    assert!(config.validate().is_ok());
}

/// Test that a fallback threshold is picked by mode
#[test]
fn test_fallback_threshold_withAggressiveFlag_shouldSelectThreshold() {
    let config = Config::default();
    assert_eq!(config.translation.fallback_threshold(false), 0.25);
    assert_eq!(config.translation.fallback_threshold(true), 0.6);
}

/// Test that invalid values are rejected as configuration errors
#[test]
fn test_validate_withInvalidValues_shouldFail() {
    let mut config = Config::default();
    config.target_language = "zz-invalid".to_string();
    assert!(matches!(config.validate(), Err(AppError::Config(_))));

    let mut config = Config::default();
    config.scan.priority_patterns.push("([unclosed".to_string());
    assert!(matches!(config.validate(), Err(AppError::Config(_))));

    let mut config = Config::default();
    config.translation.aggressive_threshold = 1.5;
    assert!(matches!(config.validate(), Err(AppError::Config(_))));

    let mut config = Config::default();
    config.provider.endpoint = "not a url".to_string();
    assert!(matches!(config.validate(), Err(AppError::Config(_))));
}

/// Test that a missing file is created with defaults
#[test]
fn test_load_or_create_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("mdlingo.json");

    let config = Config::load_or_create(&path)?;

    assert!(path.exists());
    assert_eq!(config.target_language, "ar");
    let reloaded = Config::from_file(&path)?;
    assert_eq!(reloaded.translation.min_source_letters, 50);
    Ok(())
}

/// Test that a partial file is completed with defaults
#[test]
fn test_from_file_withPartialJson_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "partial.json",
        r#"{"content_root": "docs", "log_level": "debug", "translation": {"segmenter": "block"}}"#,
    )?;

    let config = Config::load_or_create(&path)?;

    assert_eq!(config.content_root, PathBuf::from("docs"));
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.log_level.to_level_filter(), log::LevelFilter::Debug);
    assert_eq!(config.translation.segmenter, SegmenterKind::Block);
    assert_eq!(config.translation.conservative_threshold, 0.25);
    assert!(!config.translation.resource_links.is_empty());
    Ok(())
}

/// Test that malformed JSON is an error, not a silent default
#[test]
fn test_from_file_withMalformedJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "{ not json")?;

    assert!(Config::load_or_create(&path).is_err());
    Ok(())
}
