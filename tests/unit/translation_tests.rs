/*!
 * Tests for the rule-based translation pipeline
 */

use anyhow::Result;
use mdlingo::Translator;
use mdlingo::app_config::TranslationConfig;
use mdlingo::translation::{
    LEXICAL_TABLE, OutputMode, ProtectedText, STUB_NOTE, SpanKind, TERMINOLOGY_TABLE, TermTable,
    TextKind, protect, typography,
};

fn translator() -> Translator {
    Translator::new(&TranslationConfig::default(), false, false)
}

/// 60 Latin letters followed by `arabic`
fn mixed_text(arabic: &str) -> String {
    format!("{}{}", "abcdefghij ".repeat(6), arabic)
}

/// Test that extraction followed by restoration is the identity
#[test]
fn test_protect_withAllSpanKinds_shouldRestoreExactly() {
    let input = "Run `git push` then see https://docs.github.com/en.\n\n```yaml\nname: {% data variables.product %}\n```\n{% ifversion fpt %}Text{% endif %}";

    let protected = ProtectedText::extract(input);

    assert_eq!(protected.restore(&protected.text), input);
    assert!(!protected.text.contains("git push"));
    assert!(!protected.text.contains("https://"));
    let kinds: Vec<SpanKind> = protected.spans.iter().map(|s| s.kind).collect();
    assert!(kinds.contains(&SpanKind::Templating));
    assert!(kinds.contains(&SpanKind::FencedCode));
    assert!(kinds.contains(&SpanKind::InlineCode));
    assert!(kinds.contains(&SpanKind::Url));
}

/// Test that placeholder delimiters never collide with the input
#[test]
fn test_protect_withDefaultDelimitersInInput_shouldPickOthers() {
    let input = "Literal ⟦0⟧ and `code`";
    let protected = ProtectedText::extract(input);
    assert_eq!(protected.restore(&protected.text), input);
    assert!(protected.text.contains("⟦0⟧"));
}

/// Test that terminology only matches whole words, case-insensitively
#[test]
fn test_terminology_withWordBoundaries_shouldOnlyMatchWholeWords() {
    let (out, n) = TERMINOLOGY_TABLE.apply("Issues");
    assert_eq!(out, "القضايا");
    assert_eq!(n, 1);

    let (out, n) = TERMINOLOGY_TABLE.apply("Issuesformat");
    assert_eq!(out, "Issuesformat");
    assert_eq!(n, 0);
}

/// Test that the longest phrase wins over its prefix
#[test]
fn test_terminology_withPhrase_shouldPreferLongest() {
    let (out, _) = TERMINOLOGY_TABLE.apply("Open pull requests today");
    assert!(out.contains("طلبات السحب"));
    assert!(!out.contains("طلب السحب"));
}

/// Test a custom table built from owned pairs
#[test]
fn test_term_table_withCustomPairs_shouldLookupCaseInsensitively() -> Result<()> {
    let table = TermTable::new(&[("Deploy key".to_string(), "مفتاح النشر".to_string())])?;
    assert_eq!(table.len(), 1);
    assert_eq!(table.lookup("deploy KEY"), Some("مفتاح النشر"));
    assert!(!LEXICAL_TABLE.is_empty());
    Ok(())
}

/// Test that typography leaves text without Arabic untouched
#[test]
fn test_typography_withoutArabic_shouldBeNoOp() {
    assert_eq!(typography::normalize("Version 123, ok?"), "Version 123, ok?");
}

/// Test that digits on Arabic lines become Arabic-Indic digits
#[test]
fn test_typography_withArabicLine_shouldConvertDigits() {
    assert_eq!(typography::normalize("الإصدار 123"), "الإصدار ١٢٣");
}

/// Test that typography is idempotent
#[test]
fn test_typography_appliedTwice_shouldBeStable() {
    let once = typography::normalize("مرحبا, كيف حالك? الإصدار 2");
    assert_eq!(typography::normalize(&once), once);
}

/// Test that a mostly Latin text triggers lexical fallback
#[test]
fn test_fallback_withLowRatio_shouldTrigger() {
    // 7 Arabic letters against 60 Latin ones: ratio 0.10
    let text = mixed_text("مرحبا اه");
    let translator = translator();

    assert!(translator.needs_lexical_fallback(&text));
    let translated = translator.translate(&text, TextKind::Prose);
    assert_eq!(translated.stats.lexical_fallbacks, 1);
}

/// Test that the conservative threshold ignores a ratio of 0.30
#[test]
fn test_fallback_withRatioAboveConservative_shouldNotTrigger() {
    // 26 Arabic letters against 60 Latin ones: ratio 0.30
    let text = mixed_text("مرحبا مرحبا مرحبا مرحبا مرحبا ب");
    let conservative = translator();
    let aggressive = Translator::new(&TranslationConfig::default(), true, false);

    assert!(!conservative.needs_lexical_fallback(&text));
    assert!(aggressive.needs_lexical_fallback(&text));
}

/// Test that short texts never fall back, whatever their ratio
#[test]
fn test_fallback_withFewLatinLetters_shouldNotTrigger() {
    assert!(!translator().needs_lexical_fallback("You are here"));
}

/// Test that code and URLs survive translation byte-for-byte
#[test]
fn test_translate_withProtectedSpans_shouldKeepThemVerbatim() {
    let text = "You can run `git push origin main` with https://github.com/octo/repo.git 2 times";

    let translated = translator().translate(text, TextKind::Prose);

    assert!(translated.text.starts_with("يمكنك"));
    assert!(translated.text.contains("`git push origin main`"));
    assert!(translated.text.contains("https://github.com/octo/repo.git"));
    assert_eq!(translated.stats.protected_spans, 2);
}

/// Test heading rewrite rules
#[test]
fn test_translate_withHeading_shouldApplyHeadingRules() {
    let translated = translator().translate("About pull requests", TextKind::Heading);
    assert_eq!(translated.text, "حول طلبات السحب");
    assert!(translated.stats.pattern_matches >= 1);
}

/// Test that target-only mode drops Latin and protected spans
#[test]
fn test_translate_withTargetOnly_shouldKeepOnlyArabicLines() {
    let translator = Translator::new(&TranslationConfig::default(), false, true);
    assert_eq!(translator.output_mode(), OutputMode::TargetOnly);

    let translated = translator.translate("Create a repository with `git init`", TextKind::Prose);

    assert!(!translated.text.contains("git init"));
    assert!(!translated.text.chars().any(|c| c.is_ascii_alphabetic()));
    assert!(translated.text.contains("المستودع"));
}

/// Test that a stub keeps the source body and carries the note
#[test]
fn test_build_stub_withFrontmatter_shouldTranslateTitleAndKeepBody() {
    let source = "---\ntitle: About issues\n---\n\nOriginal body.\n";

    let stub = translator().build_stub(source);

    assert!(stub.text.starts_with("---\ntitle: About القضايا\n---\n\n"));
    assert!(stub.text.contains("# About القضايا"));
    assert!(stub.text.contains(STUB_NOTE));
    assert!(stub.text.ends_with("Original body.\n"));
}

/// Test that an enhanced page gets direction, title heading and resources
#[test]
fn test_build_enhanced_withCodeBlock_shouldTranslateProseOnly() {
    let source = "---\ntitle: About repositories\n---\n\n## Prerequisites\n\n```bash\ngit clone repo\n```\n";

    let enhanced = translator().build_enhanced(source);

    assert!(enhanced.text.contains("dir: rtl"));
    assert!(enhanced.text.contains("# About المستودعات"));
    assert!(enhanced.text.contains("المتطلبات المسبقة"));
    assert!(enhanced.text.contains("```bash\ngit clone repo\n```"));
    assert!(enhanced.text.contains("## مصادر إضافية"));
}

/// Test templating tag loss detection
#[test]
fn test_missing_templating_tags_withRewrittenTag_shouldReportIt() {
    let original = "{% data variables.product %} and {% ifversion ghes %}";
    let translated = "{% data variables.product %} و";
    assert_eq!(
        protect::missing_templating_tags(original, translated),
        vec!["{% ifversion ghes %}"]
    );
}

/// Test that relative link destinations are never translated or re-digited
#[test]
fn test_translate_withRelativeLink_shouldKeepDestination() {
    let text = "Read [the guide](/en/issues/about-issues) today, see step 2.";

    let translated = translator().translate(text, TextKind::Prose);

    assert!(translated.text.contains("](/en/issues/about-issues)"));
    assert_eq!(translated.stats.protected_spans, 1);
}

/// Test that ordered list numbers stay ASCII in enhanced output
#[test]
fn test_build_enhanced_withOrderedList_shouldKeepAsciiMarkers() {
    let source = "---\ntitle: Setup\n---\n\n1. Create a repository\n2. Clone the repository\n";

    let enhanced = translator().build_enhanced(source);

    assert!(enhanced.text.contains("\n1. "));
    assert!(enhanced.text.contains("\n2. "));
    assert!(!enhanced.text.contains("١."));
    assert!(!enhanced.text.contains("٢."));
}
