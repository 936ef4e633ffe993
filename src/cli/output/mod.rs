//! CLI output formatting module
//!
//! Provides the Markdown table writer used for stdout.

pub mod table;

pub use table::{render_markdown_table, MarkdownTableWriter, MAX_COLUMN_WIDTH};
