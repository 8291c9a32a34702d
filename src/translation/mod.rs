/*!
 * Rule-based English to Arabic text translation.
 *
 * - `protect`: placeholder swapping for code, templating tags and URLs
 * - `dictionary`: built-in terminology and lexical word lists
 * - `terminology`: single-pass phrase substitution engine
 * - `patterns`: sentence and heading rewrite rules
 * - `typography`: Arabic digits, punctuation and spacing
 * - `core`: the `Translator` pipeline and document builders
 */

// Re-export main types for easier usage
pub use self::core::{
    OutputMode, TextKind, Translated, TranslationStats, Translator, STUB_NOTE,
};
pub use self::protect::{ProtectedSpan, ProtectedText, SpanKind};
pub use self::terminology::{LEXICAL_TABLE, TERMINOLOGY_TABLE, TermTable};

// Submodules
pub mod core;
pub mod dictionary;
pub mod patterns;
pub mod protect;
pub mod terminology;
pub mod typography;
