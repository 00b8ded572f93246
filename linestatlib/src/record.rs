//! Stat records: one file's line-change numbers, parsed from one input line.

use std::io::BufRead;

use crate::error::LinestatError;
use crate::Result;

/// Number of whitespace-separated fields in a record line.
pub const FIELD_COUNT: usize = 5;

/// Position of the path among the five fields of a record line.
///
/// The four counts always keep their relative order
/// (additions, deletions, old line count, new line count).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldOrder {
    /// `path additions deletions old_line_count new_line_count`
    #[default]
    PathFirst,
    /// `additions deletions path old_line_count new_line_count`, i.e. a
    /// `git diff --numstat` line with the two line counts appended.
    Numstat,
}

impl FieldOrder {
    /// Index of the path field within a split line.
    fn path_index(self) -> usize {
        match self {
            FieldOrder::PathFirst => 0,
            FieldOrder::Numstat => 2,
        }
    }
}

/// Line-change statistics for a single file.
///
/// `additions` and `deletions` count touched lines only; they are independent
/// of the line counts (equal additions and deletions leave the size unchanged).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatRecord {
    pub path: String,
    pub additions: u64,
    pub deletions: u64,
    pub old_line_count: u64,
    pub new_line_count: u64,
}

impl StatRecord {
    /// Create a record from its five values
    pub fn new(
        path: impl Into<String>,
        additions: u64,
        deletions: u64,
        old_line_count: u64,
        new_line_count: u64,
    ) -> Self {
        Self {
            path: path.into(),
            additions,
            deletions,
            old_line_count,
            new_line_count,
        }
    }

    /// Parse one record line. `line` is the 1-based line number used in errors.
    pub fn parse(text: &str, line: usize, order: FieldOrder) -> Result<Self> {
        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() < FIELD_COUNT {
            return Err(LinestatError::MissingFields {
                line,
                found: fields.len(),
            });
        }
        if fields.len() > FIELD_COUNT {
            return Err(LinestatError::ExtraFields {
                line,
                found: fields.len(),
            });
        }

        let path_index = order.path_index();
        let counts: Vec<&str> = fields
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != path_index)
            .map(|(_, value)| *value)
            .collect();
        let [additions, deletions, old_line_count, new_line_count]: [&str; 4] = counts
            .try_into()
            .map_err(|_| LinestatError::MissingFields {
                line,
                found: fields.len(),
            })?;

        let additions = parse_count(additions, "additions", line)?;
        let deletions = parse_count(deletions, "deletions", line)?;
        let old_line_count = parse_count(old_line_count, "old line count", line)?;
        let new_line_count = parse_count(new_line_count, "new line count", line)?;

        Ok(Self {
            path: fields[path_index].to_string(),
            additions,
            deletions,
            old_line_count,
            new_line_count,
        })
    }
}

fn parse_count(value: &str, field: &'static str, line: usize) -> Result<u64> {
    value
        .parse::<u64>()
        .map_err(|_| LinestatError::InvalidCount {
            line,
            field,
            value: value.to_string(),
        })
}

/// Read every record from `reader`.
///
/// Fails on the first malformed line; no records are returned in that case,
/// so callers never see a partial table.
pub fn read_records<R: BufRead>(reader: R, order: FieldOrder) -> Result<Vec<StatRecord>> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        records.push(StatRecord::parse(&line, index + 1, order)?);
    }
    tracing::debug!(count = records.len(), ?order, "read stat records");
    Ok(records)
}
