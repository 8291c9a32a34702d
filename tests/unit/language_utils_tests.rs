/*!
 * Tests for language code and script utilities
 */

use anyhow::Result;
use mdlingo::language_utils::{
    count_source_letters, count_target_letters, has_target_script, is_rule_target,
    strip_source_letters, target_script_ratio,
};
use mdlingo::{get_language_name, language_codes_match, normalize_to_part2t};

/// Test code normalization across ISO formats
#[test]
fn test_normalize_to_part2t_withVariousFormats_shouldNormalize() -> Result<()> {
    assert_eq!(normalize_to_part2t("ar")?, "ara");
    assert_eq!(normalize_to_part2t(" AR ")?, "ara");
    assert_eq!(normalize_to_part2t("fre")?, "fra");
    assert!(normalize_to_part2t("xx").is_err());
    Ok(())
}

/// Test matching and names
#[test]
fn test_language_codes_match_withEquivalentCodes_shouldMatch() -> Result<()> {
    assert!(language_codes_match("ar", "ara"));
    assert!(!language_codes_match("ar", "en"));
    assert_eq!(get_language_name("ar")?, "Arabic");
    Ok(())
}

/// Test which languages the built-in rules serve
#[test]
fn test_is_rule_target_withArabicCodes_shouldBeTrue() {
    assert!(is_rule_target("ar"));
    assert!(is_rule_target("ara"));
    assert!(!is_rule_target("fr"));
}

/// Test letter counting and ratio
#[test]
fn test_target_script_ratio_withMixedText_shouldCountLetters() {
    let text = "abc مرحبا 123";
    assert_eq!(count_source_letters(text), 3);
    assert_eq!(count_target_letters(text), 5);
    assert!((target_script_ratio(text) - 5.0 / 8.0).abs() < 1e-9);
    assert!(has_target_script(text));
}

/// Test that text without letters counts as translated
#[test]
fn test_target_script_ratio_withoutLetters_shouldBeOne() {
    assert_eq!(target_script_ratio("123 !?"), 1.0);
    assert!(!has_target_script("123 !?"));
}

/// Test Latin stripping
#[test]
fn test_strip_source_letters_withMixedText_shouldKeepArabic() {
    assert_eq!(strip_source_letters("abc مرحبا"), " مرحبا");
}
