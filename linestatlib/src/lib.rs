//! # linestatlib
//!
//! A colorized, column-aligned table renderer for per-file line-change
//! statistics.
//!
//! ## Overview
//!
//! Each input record describes one file: lines added, lines deleted, and the
//! file's line count before and after the change (what `git diff --numstat`
//! reports, extended with the two line counts). The table shows, per file:
//!
//! - **Path**
//! - **Old line count**: red when the file is new, green when it was deleted
//! - **Net change**: green for additions only, red for deletions only, yellow
//!   for both; hidden when nothing changed
//! - **(+additions -deletions)**: shown only when both are nonzero
//! - **New line count**: `=N` when the file exists on both sides
//!
//! With more than one file a summary row is appended: file count, added and
//! deleted file tallies, and signed sums of each change column.
//!
//! Every cell is padded to its column's width measured in visible characters,
//! so the escape sequences inside cells never break the alignment.
//!
//! ## Example
//!
//! ```rust
//! use linestatlib::{render_stream, RenderOptions};
//! use std::io::Cursor;
//!
//! let input = Cursor::new("a.txt 3 1 10 12\nb.txt 0 5 5 0\n");
//! let mut output = Vec::new();
//! let rows = render_stream(input, &mut output, &RenderOptions::new()).unwrap();
//! assert_eq!(rows, 2);
//!
//! let text = String::from_utf8(output).unwrap();
//! // two data rows plus the summary row
//! assert_eq!(text.lines().count(), 3);
//! ```

pub mod column;
pub mod error;
pub mod options;
pub mod record;
pub mod registry;
pub mod table;

pub use column::{Color, ColumnKind, ColumnValue, Summary, Token};
pub use error::LinestatError;
pub use options::RenderOptions;
pub use record::{read_records, FieldOrder, StatRecord};
pub use registry::ColumnRegistry;
pub use table::{render_cell, render_stream, StatTable};

/// Result type for linestatlib operations
pub type Result<T> = std::result::Result<T, LinestatError>;
