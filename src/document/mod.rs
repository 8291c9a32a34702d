/*!
 * Markdown document model: frontmatter codec and body structure analysis.
 */

pub mod frontmatter;
pub mod structure;

pub use frontmatter::{Frontmatter, FrontmatterEntry, decode, encode};
pub use structure::{BlockSegmenter, LineSegmenter, Segment, Segmenter, segmenter_for};
