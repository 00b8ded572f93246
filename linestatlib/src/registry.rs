//! Per-column storage of every cell in a table.
//!
//! The registry owns all [`ColumnValue`]s of a run, grouped by
//! [`ColumnKind`] in row order. Rows are indices into it. It is filled while
//! records are read, then consulted for column widths and summary aggregates.

use crate::column::{Color, ColumnKind, ColumnValue, Summary};

/// Every cell of a table, grouped by column.
#[derive(Debug, Clone, Default)]
pub struct ColumnRegistry {
    columns: [Vec<ColumnValue>; 6],
}

impl ColumnRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row, returning its index.
    ///
    /// `row` must be in [`ColumnKind::ALL`] order.
    pub fn push_row(&mut self, row: [ColumnValue; 6]) -> usize {
        let index = self.row_count();
        for (column, value) in self.columns.iter_mut().zip(row) {
            column.push(value);
        }
        index
    }

    /// Number of rows registered so far (data and summary)
    pub fn row_count(&self) -> usize {
        self.columns[ColumnKind::Path.index()].len()
    }

    /// Every value of a column, in row order
    pub fn values(&self, kind: ColumnKind) -> &[ColumnValue] {
        &self.columns[kind.index()]
    }

    /// The cell at `row` in column `kind`
    pub fn get(&self, kind: ColumnKind, row: usize) -> Option<&ColumnValue> {
        self.columns[kind.index()].get(row)
    }

    /// Data-row values of a column, skipping summary cells.
    fn data_values(&self, kind: ColumnKind) -> impl Iterator<Item = &ColumnValue> {
        self.values(kind)
            .iter()
            .filter(|v| !matches!(v, ColumnValue::Summary(_)))
    }

    /// Widest display length registered for a column (0 when empty).
    pub fn width(&self, kind: ColumnKind) -> usize {
        self.values(kind)
            .iter()
            .map(ColumnValue::display_len)
            .max()
            .unwrap_or(0)
    }

    /// Widths of all columns, in column order
    pub fn widths(&self) -> [usize; 6] {
        ColumnKind::ALL.map(|kind| self.width(kind))
    }

    /// Aggregate the data rows of one column into its summary cell.
    pub fn summarize(&self, kind: ColumnKind) -> ColumnValue {
        let summary = match kind {
            ColumnKind::Path => Summary::Count(self.data_values(kind).count()),
            ColumnKind::LineCountChange | ColumnKind::Addition | ColumnKind::Deletion => {
                Summary::Sum(self.column_sum(kind))
            }
            ColumnKind::OldLineCount => Summary::Tally {
                count: self.deleted_count(),
                color: Color::Red,
            },
            ColumnKind::NewLineCount => Summary::Tally {
                count: self.added_count(),
                color: Color::Green,
            },
        };
        ColumnValue::Summary(summary)
    }

    /// The summary row for the data registered so far
    pub fn summary_row(&self) -> [ColumnValue; 6] {
        ColumnKind::ALL.map(|kind| self.summarize(kind))
    }

    fn column_sum(&self, kind: ColumnKind) -> i128 {
        self.data_values(kind)
            .filter_map(ColumnValue::signed_value)
            .sum()
    }

    /// Rows whose file no longer exists (new line count is zero).
    fn deleted_count(&self) -> usize {
        self.data_values(ColumnKind::OldLineCount)
            .filter(|v| matches!(v, ColumnValue::OldLineCount { new: 0, .. }))
            .count()
    }

    /// Rows whose file did not exist before (old line count is zero).
    fn added_count(&self) -> usize {
        self.data_values(ColumnKind::NewLineCount)
            .filter(|v| matches!(v, ColumnValue::NewLineCount { old: 0, .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::StatRecord;

    fn registry(records: &[StatRecord]) -> ColumnRegistry {
        let mut registry = ColumnRegistry::new();
        for record in records {
            registry.push_row(ColumnValue::row(record));
        }
        registry
    }

    fn sample() -> ColumnRegistry {
        registry(&[
            StatRecord::new("a.txt", 3, 1, 10, 12),
            StatRecord::new("b.txt", 0, 5, 5, 0),
            StatRecord::new("c.txt", 9, 0, 0, 9),
        ])
    }

    #[test]
    fn test_push_row_returns_index() {
        let mut registry = ColumnRegistry::new();
        assert_eq!(registry.row_count(), 0);
        let record = StatRecord::new("a.txt", 1, 1, 1, 1);
        assert_eq!(registry.push_row(ColumnValue::row(&record)), 0);
        assert_eq!(registry.push_row(ColumnValue::row(&record)), 1);
        assert_eq!(registry.row_count(), 2);
        for kind in ColumnKind::ALL {
            assert_eq!(registry.values(kind).len(), 2);
        }
    }

    #[test]
    fn test_get() {
        let registry = sample();
        assert_eq!(
            registry.get(ColumnKind::Path, 1),
            Some(&ColumnValue::Path("b.txt".to_string()))
        );
        assert!(registry.get(ColumnKind::Path, 3).is_none());
    }

    #[test]
    fn test_width_empty_registry() {
        let registry = ColumnRegistry::new();
        assert_eq!(registry.widths(), [0; 6]);
    }

    #[test]
    fn test_widths() {
        let registry = sample();
        // "a.txt", "10", "+9", "(+3", "-1)", "=12"
        assert_eq!(registry.widths(), [5, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn test_summary_path_counts_data_rows() {
        let registry = sample();
        assert_eq!(
            registry.summarize(ColumnKind::Path),
            ColumnValue::Summary(Summary::Count(3))
        );
    }

    #[test]
    fn test_summary_sums_raw_values() {
        // b.txt and c.txt hide their (+a -d) pair but still count toward the sums
        let registry = sample();
        assert_eq!(
            registry.summarize(ColumnKind::Addition),
            ColumnValue::Summary(Summary::Sum(12))
        );
        assert_eq!(
            registry.summarize(ColumnKind::Deletion),
            ColumnValue::Summary(Summary::Sum(-6))
        );
        assert_eq!(
            registry.summarize(ColumnKind::LineCountChange),
            ColumnValue::Summary(Summary::Sum(6))
        );
    }

    #[test]
    fn test_summary_sum_beyond_i64() {
        let big = 5_000_000_000_000_000_000;
        let registry = registry(&[
            StatRecord::new("a", big, 0, 1, 1),
            StatRecord::new("b", big, big, 1, 1),
        ]);
        assert_eq!(
            registry.summarize(ColumnKind::Addition),
            ColumnValue::Summary(Summary::Sum(10_000_000_000_000_000_000))
        );
        assert_eq!(
            registry.summarize(ColumnKind::Deletion),
            ColumnValue::Summary(Summary::Sum(-5_000_000_000_000_000_000))
        );
        assert_eq!(
            registry.summarize(ColumnKind::LineCountChange),
            ColumnValue::Summary(Summary::Sum(5_000_000_000_000_000_000))
        );
        assert_eq!(
            registry.summarize(ColumnKind::Addition).display_len(),
            "(+10000000000000000000)".len()
        );
    }

    #[test]
    fn test_summary_tallies_added_and_deleted() {
        let registry = sample();
        assert_eq!(
            registry.summarize(ColumnKind::OldLineCount),
            ColumnValue::Summary(Summary::Tally {
                count: 1,
                color: Color::Red
            })
        );
        assert_eq!(
            registry.summarize(ColumnKind::NewLineCount),
            ColumnValue::Summary(Summary::Tally {
                count: 1,
                color: Color::Green
            })
        );
    }

    #[test]
    fn test_summary_excludes_registered_summary() {
        let mut registry = sample();
        let before = registry.summary_row();
        registry.push_row(before.clone());
        assert_eq!(registry.summary_row(), before);
    }

    #[test]
    fn test_summary_can_widen_column() {
        let mut registry = registry(&[
            StatRecord::new("a", 6, 1, 10, 15),
            StatRecord::new("b", 6, 1, 10, 15),
        ]);
        assert_eq!(registry.width(ColumnKind::Addition), 3);
        let summary = registry.summary_row();
        registry.push_row(summary);
        // "(+12)"
        assert_eq!(registry.width(ColumnKind::Addition), 5);
    }
}
