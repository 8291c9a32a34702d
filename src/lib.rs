/*!
 * # mdlingo - Markdown documentation translation manager
 *
 * A Rust library that manages English to Arabic translation of a Markdown
 * documentation tree with deterministic, rule-based text rewriting.
 *
 * ## Features
 *
 * - Find source documents and their `-<lang>.md` translations
 * - Generate placeholder stubs or enhanced rule-based translations
 * - Preserve code, templating tags and URLs exactly
 * - Arabic typography: digits, punctuation and spacing
 * - Optional OpenAI-compatible provider with rule-based fallback
 * - Coverage, analysis, audit and quality reports
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `document`: Frontmatter codec and Markdown segmentation
 * - `translation`: Rule-based translation pipeline:
 *   - `translation::protect`: Placeholder swapping for protected spans
 *   - `translation::terminology`: Terminology and lexical tables
 *   - `translation::patterns`: Sentence and heading rewrite rules
 *   - `translation::typography`: Arabic typographic normalization
 *   - `translation::core`: The `Translator` and document builders
 * - `pairs`: Source/target pairing and path classification
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `report`: Run statistics and reports
 * - `quality`: Audit and quality scoring of produced files
 * - `language_utils`: ISO language codes and script statistics
 * - `providers`: Optional translation provider clients
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod document;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod pairs;
pub mod providers;
pub mod quality;
pub mod report;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, EnhanceOptions, EnhanceSelection, RunMode, RunOptions, RunSummary};
pub use errors::{AppError, ContentError, ProviderError};
pub use language_utils::{get_language_name, language_codes_match, normalize_to_part2t};
pub use translation::Translator;
