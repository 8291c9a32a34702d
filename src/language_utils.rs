use anyhow::{Result, anyhow};
use isolang::Language;
use once_cell::sync::Lazy;
use regex::Regex;

/// Language utilities
///
/// Two concerns live here: ISO 639 code handling for the configured
/// languages, and script statistics used to decide how "translated" a
/// piece of text already is. The target script is Arabic (U+0600..U+06FF),
/// the source script is ASCII Latin.

static TARGET_SCRIPT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\x{0600}-\x{06FF}]").expect("valid target script regex")
});

static SOURCE_SCRIPT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z]").expect("valid source script regex")
});

/// ISO 639-2/B codes that differ from their 639-2/T form
const PART2B_TO_PART2T: &[(&str, &str)] = &[
    ("fre", "fra"),
    ("ger", "deu"),
    ("dut", "nld"),
    ("gre", "ell"),
    ("chi", "zho"),
    ("cze", "ces"),
    ("ice", "isl"),
    ("alb", "sqi"),
    ("arm", "hye"),
    ("baq", "eus"),
    ("bur", "mya"),
    ("per", "fas"),
    ("geo", "kat"),
    ("may", "msa"),
    ("mac", "mkd"),
    ("rum", "ron"),
    ("slo", "slk"),
    ("wel", "cym"),
];

/// Normalize a language code to ISO 639-2/T (3-letter) format
pub fn normalize_to_part2t(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();

    match normalized_code.len() {
        2 => {
            if let Some(lang) = Language::from_639_1(&normalized_code) {
                return Ok(lang.to_639_3().to_string());
            }
        }
        3 => {
            if Language::from_639_3(&normalized_code).is_some() {
                return Ok(normalized_code);
            }
            if let Some((_, part2t)) = PART2B_TO_PART2T
                .iter()
                .find(|(part2b, _)| *part2b == normalized_code)
            {
                return Ok((*part2t).to_string());
            }
        }
        _ => {}
    }

    Err(anyhow!("Invalid language code: {}", code))
}

/// Check if two language codes match (represent the same language)
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    match (normalize_to_part2t(code1), normalize_to_part2t(code2)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Get the English language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = normalize_to_part2t(code)?;
    let lang = Language::from_639_3(&normalized)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", normalized))?;

    Ok(lang.to_name().to_string())
}

/// Whether the built-in rule tables produce text for this language
pub fn is_rule_target(code: &str) -> bool {
    language_codes_match(code, "ar")
}

/// Number of target-script (Arabic block) characters in `text`
pub fn count_target_letters(text: &str) -> usize {
    TARGET_SCRIPT_REGEX.find_iter(text).count()
}

/// Number of source-script (ASCII Latin) letters in `text`
pub fn count_source_letters(text: &str) -> usize {
    SOURCE_SCRIPT_REGEX.find_iter(text).count()
}

/// True when `text` contains at least one target-script character
pub fn has_target_script(text: &str) -> bool {
    TARGET_SCRIPT_REGEX.is_match(text)
}

/// Fraction of target-script letters among all letters.
///
/// Text without any letters counts as fully translated (1.0).
pub fn target_script_ratio(text: &str) -> f64 {
    let target = count_target_letters(text);
    let total = target + count_source_letters(text);
    if total == 0 {
        return 1.0;
    }
    target as f64 / total as f64
}

/// Drop every ASCII Latin letter from `text`
pub fn strip_source_letters(text: &str) -> String {
    SOURCE_SCRIPT_REGEX.replace_all(text, "").into_owned()
}
