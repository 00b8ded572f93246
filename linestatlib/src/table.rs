//! Stat table assembly and rendering.
//!
//! The data flow is:
//! 1. Records (one per input line, all read before anything is rendered)
//! 2. StatTable (cells registered per column, optional summary row)
//! 3. Lines (each cell padded to its column width, space-separated)
//!
//! Widths are taken from the registry only after the summary row has been
//! registered, since summary cells such as `(+12)` can be the widest.

use std::io::{BufRead, Write};

use crate::column::{Color, ColumnKind, ColumnValue};
use crate::options::RenderOptions;
use crate::record::{read_records, StatRecord};
use crate::registry::ColumnRegistry;
use crate::Result;

/// A fully built table: data rows in input order, then the summary row if any.
#[derive(Debug, Clone)]
pub struct StatTable {
    registry: ColumnRegistry,
    data_rows: usize,
    has_summary: bool,
}

impl StatTable {
    /// Build a table from parsed records.
    ///
    /// A summary row is added when enabled and there is more than one record.
    pub fn from_records(records: &[StatRecord], options: &RenderOptions) -> Self {
        let mut registry = ColumnRegistry::new();
        for record in records {
            registry.push_row(ColumnValue::row(record));
        }

        let has_summary = options.summary && records.len() > 1;
        if has_summary {
            let summary = registry.summary_row();
            tracing::debug!(rows = records.len(), ?summary, "built summary row");
            registry.push_row(summary);
        }

        Self {
            registry,
            data_rows: records.len(),
            has_summary,
        }
    }

    /// Number of data rows (excluding the summary row)
    pub fn data_row_count(&self) -> usize {
        self.data_rows
    }

    /// Whether a summary row was appended
    pub fn has_summary(&self) -> bool {
        self.has_summary
    }

    /// Total number of rows that will be rendered
    pub fn row_count(&self) -> usize {
        self.registry.row_count()
    }

    /// The underlying cell registry
    pub fn registry(&self) -> &ColumnRegistry {
        &self.registry
    }

    /// Render every row, one string per line (without trailing newline).
    pub fn lines(&self) -> Vec<String> {
        let widths = self.registry.widths();
        tracing::debug!(?widths, "computed column widths");

        (0..self.row_count())
            .map(|row| self.render_row(row, &widths))
            .collect()
    }

    fn render_row(&self, row: usize, widths: &[usize; 6]) -> String {
        let cells: Vec<String> = ColumnKind::ALL
            .iter()
            .filter_map(|&kind| self.registry.get(kind, row))
            .zip(widths)
            .map(|(value, &width)| render_cell(value, width))
            .collect();
        tracing::trace!(row, "rendered row");
        cells.join(" ")
    }

    /// Write every row to `out`, newline-terminated.
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<()> {
        for line in self.lines() {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Render a cell right-padded to `width` visible columns, then reset.
///
/// Padding is computed from the cell's display length, so the raw string
/// length varies with the escape sequences it contains.
pub fn render_cell(value: &ColumnValue, width: usize) -> String {
    let padding = width.saturating_sub(value.display_len());
    format!(
        "{}{}{}",
        value.styled_text(),
        " ".repeat(padding),
        Color::Reset.escape()
    )
}

/// Read all records from `input` and write the rendered table to `output`.
///
/// Nothing is written unless every line parses. Returns the number of data
/// rows rendered.
pub fn render_stream<R: BufRead, W: Write>(
    input: R,
    output: W,
    options: &RenderOptions,
) -> Result<usize> {
    let records = read_records(input, options.field_order)?;
    let table = StatTable::from_records(&records, options);
    table.write_to(output)?;
    Ok(table.data_row_count())
}
