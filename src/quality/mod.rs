/*!
 * Post-hoc checks of produced target files.
 *
 * - `audit`: coverage, source-language leakage and placeholder detection
 * - `checker`: per-pair issue lists and quality scores
 */

pub mod audit;
pub mod checker;

pub use audit::AuditReport;
pub use checker::{PairQuality, QualityChecker, QualityIssue, QualitySummary};
