/*!
 * Tests for error types
 */

use std::path::PathBuf;

use mdlingo::{AppError, ContentError, ProviderError};

/// Test error messages
#[test]
fn test_error_display_withFields_shouldFormatMessages() {
    let err = ContentError::MissingContentRoot(PathBuf::from("content"));
    assert_eq!(err.to_string(), "Content directory not found: content");

    let err = ProviderError::ApiError {
        status_code: 429,
        message: "rate limited".to_string(),
    };
    assert_eq!(err.to_string(), "API responded with error: 429 - rate limited");
}

/// Test conversions into the application error
#[test]
fn test_app_error_from_withWrappedErrors_shouldConvert() {
    let err: AppError = ContentError::FrontmatterParse.into();
    assert!(matches!(err, AppError::Content(ContentError::FrontmatterParse)));
    assert_eq!(err.to_string(), "Content error: Unterminated frontmatter block");

    let err: AppError = ProviderError::ConnectionError("down".to_string()).into();
    assert!(matches!(err, AppError::Provider(_)));

    let err: AppError = std::io::Error::other("disk").into();
    assert!(matches!(err, AppError::File(_)));

    let err: AppError = anyhow::anyhow!("boom").into();
    assert_eq!(err.to_string(), "Unknown error: boom");
}
