//! Options controlling how stat records are read and tabulated.

use crate::record::FieldOrder;

/// Options for building and rendering a stat table.
///
/// ```rust
/// use linestatlib::{FieldOrder, RenderOptions};
///
/// let options = RenderOptions::new()
///     .field_order(FieldOrder::Numstat)
///     .summary(false);
/// assert_eq!(options.field_order, FieldOrder::Numstat);
/// assert!(!options.summary);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Where the path sits among the fields of an input line
    pub field_order: FieldOrder,
    /// Append a summary row when there is more than one data row
    pub summary: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            field_order: FieldOrder::default(),
            summary: true,
        }
    }
}

impl RenderOptions {
    /// Create options with defaults (path-first input, summary row enabled)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input field order
    pub fn field_order(mut self, order: FieldOrder) -> Self {
        self.field_order = order;
        self
    }

    /// Enable or disable the summary row
    pub fn summary(mut self, enabled: bool) -> Self {
        self.summary = enabled;
        self
    }
}
