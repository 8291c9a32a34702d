/*!
 * Sentence-shape and heading rewrite rules.
 *
 * Rules are applied in order, each one over the output of the previous rule.
 * Match counts feed the run statistics only.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// A regex and its replacement template (`${n}` refers to capture groups)
#[derive(Debug)]
pub struct RewriteRule {
    pattern: Regex,
    replacement: &'static str,
}

impl RewriteRule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("valid rewrite rule regex"),
            replacement,
        }
    }

    /// Apply the rule, returning the new text and the number of matches
    pub fn apply(&self, text: &str) -> (String, usize) {
        let matches = self.pattern.find_iter(text).count();
        if matches == 0 {
            return (text.to_string(), 0);
        }
        let out = self.pattern.replace_all(text, self.replacement).into_owned();
        (out, matches)
    }
}

/// Common sentence openers and navigation phrases
static SENTENCE_RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    vec![
        RewriteRule::new(r"\bYou can\s+([^.]+)", "يمكنك ${1}"),
        RewriteRule::new(r"\bTo\s+([a-zA-Z]+)", "لـ${1}"),
        RewriteRule::new(r"\bThis will\s+([^.]+)", "سيؤدي هذا إلى ${1}"),
        RewriteRule::new(r"\bLearn how to\s+([^.]+)", "تعلم كيفية ${1}"),
        RewriteRule::new(r"In this article", "في هذا المقال"),
        RewriteRule::new(r"Table of contents", "جدول المحتويات"),
        RewriteRule::new(r"See also", "انظر أيضًا"),
        RewriteRule::new(r"Related articles", "المقالات ذات الصلة"),
        RewriteRule::new(r"Further reading", "قراءة إضافية"),
    ]
});

/// Heading shapes, matched against heading text without its `#` markers
static HEADING_RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    vec![
        RewriteRule::new(r"^About (.+)", "حول ${1}"),
        RewriteRule::new(r"^What is (.+)\?$", "ما هو ${1}؟"),
        RewriteRule::new(r"^Why (.+)\?$", "لماذا ${1}؟"),
        RewriteRule::new(r"^How (.+)", "كيف ${1}"),
        RewriteRule::new(r"^When (.+)", "متى ${1}"),
        RewriteRule::new(r"^Step (\d+):", "الخطوة ${1}:"),
        RewriteRule::new(r"^Prerequisites$", "المتطلبات المسبقة"),
        RewriteRule::new(r"^Requirements$", "المتطلبات"),
        RewriteRule::new(r"^Before you begin$", "قبل أن تبدأ"),
        RewriteRule::new(r"^Next steps$", "الخطوات التالية"),
    ]
});

fn apply_all(rules: &[RewriteRule], text: &str) -> (String, usize) {
    let mut out = text.to_string();
    let mut total = 0;
    for rule in rules {
        let (next, n) = rule.apply(&out);
        out = next;
        total += n;
    }
    (out, total)
}

/// Rewrite sentence openers and navigation phrases
pub fn apply_sentence_rules(text: &str) -> (String, usize) {
    apply_all(&SENTENCE_RULES, text)
}

/// Rewrite a heading's text
pub fn apply_heading_rules(text: &str) -> (String, usize) {
    apply_all(&HEADING_RULES, text.trim())
}
