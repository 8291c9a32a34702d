/*!
 * Phrase substitution engine shared by the terminology and lexical tables.
 *
 * All phrases of a table are compiled into one case-insensitive alternation
 * anchored on word boundaries, longest phrase first. Substitution is a single
 * non-overlapping left-to-right pass, so text produced by one replacement is
 * never matched again by another entry.
 */

use once_cell::sync::Lazy;
use regex::{Captures, Regex, RegexBuilder};
use std::collections::HashMap;

use super::dictionary;

static WHITESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Compiled size allowance for large case-insensitive alternations
const MATCHER_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Built-in terminology table
pub static TERMINOLOGY_TABLE: Lazy<TermTable> = Lazy::new(|| {
    TermTable::new(dictionary::TERMINOLOGY).expect("valid terminology table")
});

/// Built-in lexical fallback table
pub static LEXICAL_TABLE: Lazy<TermTable> =
    Lazy::new(|| TermTable::new(dictionary::LEXICAL).expect("valid lexical table"));

/// Case- and spacing-insensitive lookup key
fn normalize_key(phrase: &str) -> String {
    WHITESPACE_REGEX
        .replace_all(phrase.trim(), " ")
        .to_lowercase()
}

/// Ordered source-to-target phrase table
#[derive(Debug, Clone)]
pub struct TermTable {
    matcher: Option<Regex>,
    entries: HashMap<String, String>,
}

impl TermTable {
    /// Build a table from (source, target) pairs.
    ///
    /// When a source phrase appears more than once the later entry wins.
    pub fn new<S, T>(pairs: &[(S, T)]) -> Result<Self, regex::Error>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut entries: HashMap<String, String> = HashMap::with_capacity(pairs.len());
        for (source, target) in pairs {
            let key = normalize_key(source.as_ref());
            if key.is_empty() {
                continue;
            }
            entries.insert(key, target.as_ref().to_string());
        }

        let mut phrases: Vec<&String> = entries.keys().collect();
        // Longest first so multi-word phrases shadow their parts; ties sorted for a stable pattern
        phrases.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));

        let matcher = if phrases.is_empty() {
            None
        } else {
            let alternation = phrases
                .iter()
                .map(|p| {
                    p.split(' ')
                        .map(regex::escape)
                        .collect::<Vec<_>>()
                        .join(r"\s+")
                })
                .collect::<Vec<_>>()
                .join("|");
            Some(
                RegexBuilder::new(&format!(r"\b(?:{})\b", alternation))
                    .case_insensitive(true)
                    .size_limit(MATCHER_SIZE_LIMIT)
                    .build()?,
            )
        };

        Ok(Self { matcher, entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Target phrase for an exact (case-insensitive) source phrase
    pub fn lookup(&self, phrase: &str) -> Option<&str> {
        self.entries.get(&normalize_key(phrase)).map(String::as_str)
    }

    /// Replace every whole-word occurrence of a known phrase.
    ///
    /// Returns the new text and the number of substitutions made.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let Some(matcher) = &self.matcher else {
            return (text.to_string(), 0);
        };

        let mut count = 0;
        let replaced = matcher.replace_all(text, |caps: &Captures| {
            let found = &caps[0];
            match self.lookup(found) {
                Some(target) => {
                    count += 1;
                    target.to_string()
                }
                None => found.to_string(),
            }
        });

        (replaced.into_owned(), count)
    }
}
