//! Column model: the six column kinds and the values shown in their cells.
//!
//! Every cell is a [`ColumnValue`], a closed set of variants, one per column
//! kind plus a [`Summary`] variant used by the summary row. A value renders to
//! a sequence of [`Token`]s: literal text or color changes. Only text counts
//! toward the cell's display length, so columns line up on screen regardless
//! of how many escape sequences a cell carries.
//!
//! The `Addition` and `Deletion` columns form one bracketed unit, `(+3 -1)`.
//! Each side is shown only when *both* counts are nonzero, so a row never ends
//! up with half a bracket.

use std::fmt;

use console::measure_text_width;

use crate::record::StatRecord;

/// Terminal colors used in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Reset,
    Green,
    Red,
    Yellow,
}

impl Color {
    /// The escape sequence selecting this color
    pub fn escape(self) -> &'static str {
        match self {
            Color::Reset => "\x1b[0m",
            Color::Green => "\x1b[0;32m",
            Color::Red => "\x1b[0;31m",
            Color::Yellow => "\x1b[1;33m",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.escape())
    }
}

/// One element of a cell's display: literal text or a color change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Text(String),
    Color(Color),
}

impl Token {
    fn text(s: impl Into<String>) -> Self {
        Token::Text(s.into())
    }

    /// Visible width of the token (zero for color changes)
    pub fn width(&self) -> usize {
        match self {
            Token::Text(s) => measure_text_width(s),
            Token::Color(_) => 0,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Text(s) => f.write_str(s),
            Token::Color(c) => c.fmt(f),
        }
    }
}

/// Table columns, in left-to-right order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColumnKind {
    Path,
    OldLineCount,
    LineCountChange,
    Addition,
    Deletion,
    NewLineCount,
}

impl ColumnKind {
    /// All kinds in display order
    pub const ALL: [ColumnKind; 6] = [
        ColumnKind::Path,
        ColumnKind::OldLineCount,
        ColumnKind::LineCountChange,
        ColumnKind::Addition,
        ColumnKind::Deletion,
        ColumnKind::NewLineCount,
    ];

    /// Position of this kind in [`ColumnKind::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Aggregate shown in a summary row cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    /// Number of data rows: `(N)`
    Count(usize),
    /// Signed sum over a column: `(+N)` / `(-N)`
    Sum(i128),
    /// Number of rows matching a condition, colored; hidden when zero
    Tally { count: usize, color: Color },
}

/// A single cell of the table.
///
/// Paired kinds carry their row-mate's raw count, which only decides
/// coloring and suppression and never changes the cell's own value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnValue {
    Path(String),
    OldLineCount { old: u64, new: u64 },
    LineCountChange { additions: u64, deletions: u64 },
    Addition { additions: u64, deletions: u64 },
    Deletion { deletions: u64, additions: u64 },
    NewLineCount { new: u64, old: u64 },
    Summary(Summary),
}

impl ColumnValue {
    /// Build the value of column `kind` for `record`.
    pub fn from_record(kind: ColumnKind, record: &StatRecord) -> Self {
        let (additions, deletions) = (record.additions, record.deletions);
        let (old, new) = (record.old_line_count, record.new_line_count);
        match kind {
            ColumnKind::Path => ColumnValue::Path(record.path.clone()),
            ColumnKind::OldLineCount => ColumnValue::OldLineCount { old, new },
            ColumnKind::LineCountChange => ColumnValue::LineCountChange {
                additions,
                deletions,
            },
            ColumnKind::Addition => ColumnValue::Addition {
                additions,
                deletions,
            },
            ColumnKind::Deletion => ColumnValue::Deletion {
                deletions,
                additions,
            },
            ColumnKind::NewLineCount => ColumnValue::NewLineCount { new, old },
        }
    }

    /// The whole row of values for `record`, in column order.
    pub fn row(record: &StatRecord) -> [ColumnValue; 6] {
        ColumnKind::ALL.map(|kind| Self::from_record(kind, record))
    }

    /// Signed value summed by the summary row.
    ///
    /// Deletions count negatively; `LineCountChange` is the net change.
    /// Returns `None` for columns that are not summed. Every `u64` count and
    /// any realistic sum of them fits in `i128`.
    pub fn signed_value(&self) -> Option<i128> {
        match *self {
            ColumnValue::Addition { additions, .. } => Some(i128::from(additions)),
            ColumnValue::Deletion { deletions, .. } => Some(-i128::from(deletions)),
            ColumnValue::LineCountChange {
                additions,
                deletions,
            } => Some(i128::from(additions) - i128::from(deletions)),
            _ => None,
        }
    }

    /// The tokens making up this cell.
    pub fn display_tokens(&self) -> Vec<Token> {
        match self {
            ColumnValue::Path(path) => vec![Token::text(path.as_str())],
            ColumnValue::OldLineCount { old, new } => {
                let mut tokens = Vec::with_capacity(2);
                if *old == 0 {
                    tokens.push(Token::Color(Color::Red));
                } else if *new == 0 {
                    tokens.push(Token::Color(Color::Green));
                }
                tokens.push(Token::text(old.to_string()));
                tokens
            }
            ColumnValue::LineCountChange {
                additions,
                deletions,
            } => {
                if *additions == 0 && *deletions == 0 {
                    return Vec::new();
                }
                let color = if *deletions == 0 {
                    Color::Green
                } else if *additions == 0 {
                    Color::Red
                } else {
                    Color::Yellow
                };
                let net = i128::from(*additions) - i128::from(*deletions);
                vec![Token::Color(color), Token::text(format!("{net:+}"))]
            }
            ColumnValue::Addition {
                additions,
                deletions,
            } => {
                if *additions == 0 || *deletions == 0 {
                    return Vec::new();
                }
                vec![
                    Token::text("("),
                    Token::Color(Color::Green),
                    Token::text(format!("+{additions}")),
                ]
            }
            ColumnValue::Deletion {
                deletions,
                additions,
            } => {
                if *deletions == 0 || *additions == 0 {
                    return Vec::new();
                }
                vec![
                    Token::Color(Color::Red),
                    Token::text(format!("-{deletions}")),
                    Token::Color(Color::Reset),
                    Token::text(")"),
                ]
            }
            ColumnValue::NewLineCount { new, old } => {
                let mut tokens = Vec::with_capacity(3);
                if *new == 0 {
                    tokens.push(Token::Color(Color::Green));
                } else if *old == 0 {
                    tokens.push(Token::Color(Color::Red));
                } else {
                    // unchanged existence: mark as "=N"
                    tokens.push(Token::text("="));
                }
                tokens.push(Token::text(new.to_string()));
                tokens
            }
            ColumnValue::Summary(summary) => match *summary {
                Summary::Count(count) => vec![Token::text(format!("({count})"))],
                Summary::Sum(sum) => vec![Token::text(format!("({sum:+})"))],
                Summary::Tally { count: 0, .. } => Vec::new(),
                Summary::Tally { count, color } => {
                    vec![Token::Color(color), Token::text(format!("({count})"))]
                }
            },
        }
    }

    /// Visible width of the cell: text tokens only.
    pub fn display_len(&self) -> usize {
        self.display_tokens().iter().map(Token::width).sum()
    }

    /// Tokens rendered in order, without trailing reset or padding.
    pub fn styled_text(&self) -> String {
        self.display_tokens()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Tokens rendered in order and terminated by a reset.
    pub fn display_text(&self) -> String {
        let mut text = self.styled_text();
        text.push_str(Color::Reset.escape());
        text
    }
}

impl fmt::Display for ColumnValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}
