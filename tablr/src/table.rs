//! # Grammar tables
//!
//! In-memory form of a precomputed LR grammar: the rule list and the
//! action/goto matrix, as produced by an external table generator.
//!
//! The text format is a stream of whitespace-separated fields read in strict
//! order:
//!
//! ```text
//! ruleCount
//! ruleCount × (lhs  length  name)
//! rowCount  columnCount
//! rowCount × columnCount integers      (row-major)
//! ```
//!
//! `lhs` is the column of the rule's left-hand non-terminal. Rules are
//! numbered from 1 in the order they appear. In the matrix a positive cell
//! shifts to that state, a negative cell reduces by rule `-value`, and zero
//! is an error.
//!
//! ## Example
//! ```rust
//! # use tablr::{Grammar, ParserAction};
//! let grammar: Grammar = "1\n0 1 E\n1 2\n0 -1\n".parse().unwrap();
//! assert_eq!(grammar.rule(1).unwrap().len, 1);
//! assert_eq!(grammar.table().action(0, 1), Some(ParserAction::Reduce(1)));
//! ```

use crate::LoadError;
use smartstring::alias::String;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

/// A decoded table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserAction {
    /// Push this state and consume the lookahead.
    Shift(usize),
    /// Reduce by this rule (1-based).
    Reduce(usize),
    /// No action: the lookahead does not fit.
    Error,
}

impl From<i64> for ParserAction {
    fn from(cell: i64) -> Self {
        if cell > 0 {
            ParserAction::Shift(cell as usize)
        } else if cell < 0 {
            ParserAction::Reduce(cell.unsigned_abs() as usize)
        } else {
            ParserAction::Error
        }
    }
}

/// One production of the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarRule {
    /// 1-based position in the rule list.
    pub id: usize,
    /// Column of the left-hand non-terminal.
    pub lhs: usize,
    /// Number of right-hand symbols, i.e. states popped on reduction.
    pub len: usize,
    /// Label used in diagnostics.
    pub name: String,
}

/// The action/goto matrix, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTable {
    rows: usize,
    columns: usize,
    cells: Vec<i64>,
}

impl ParseTable {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Raw cell value, or `None` outside the matrix.
    #[inline]
    pub fn get(&self, state: usize, column: usize) -> Option<i64> {
        if state < self.rows && column < self.columns {
            Some(self.cells[state * self.columns + column])
        } else {
            None
        }
    }

    #[inline]
    pub fn action(&self, state: usize, column: usize) -> Option<ParserAction> {
        self.get(state, column).map(ParserAction::from)
    }
}

/// Rules plus table, loaded once and shared read-only by every parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    rules: Vec<GrammarRule>,
    table: ParseTable,
}

impl Grammar {
    /// Reads and parses a grammar table file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let grammar: Grammar = text.parse()?;
        log::debug!(
            "loaded {:?}: {} rules, {}x{} table",
            path,
            grammar.rules.len(),
            grammar.table.rows,
            grammar.table.columns
        );
        Ok(grammar)
    }

    /// Rule by its 1-based id.
    pub fn rule(&self, id: usize) -> Option<&GrammarRule> {
        id.checked_sub(1).and_then(|i| self.rules.get(i))
    }

    pub fn rules(&self) -> &[GrammarRule] {
        &self.rules
    }

    pub fn table(&self) -> &ParseTable {
        &self.table
    }
}

impl FromStr for Grammar {
    type Err = LoadError;

    fn from_str(text: &str) -> Result<Self, LoadError> {
        let mut fields = Fields::new(text);

        let rule_count: usize = fields.number("rule count")?;
        let mut rules = Vec::new();
        for id in 1..=rule_count {
            let lhs = fields.number("rule left-hand side")?;
            let len = fields.number("rule length")?;
            let name = fields.word("rule name")?;
            rules.push(GrammarRule {
                id,
                lhs,
                len,
                name: name.into(),
            });
        }

        let rows: usize = fields.number("row count")?;
        let columns: usize = fields.number("column count")?;
        let mut cells = Vec::new();
        for _ in 0..rows.saturating_mul(columns) {
            cells.push(fields.number("table cell")?);
        }

        let trailing = fields.rest();
        if trailing > 0 {
            log::warn!("ignoring {} trailing field(s) after the table", trailing);
        }

        Ok(Grammar {
            rules,
            table: ParseTable {
                rows,
                columns,
                cells,
            },
        })
    }
}

/// Whitespace-separated field reader shared by the resource loaders.
pub(crate) struct Fields<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    pub(crate) fn next_word(&mut self) -> Option<&'a str> {
        self.inner.next()
    }

    pub(crate) fn word(&mut self, what: &'static str) -> Result<&'a str, LoadError> {
        self.next_word().ok_or(LoadError::UnexpectedEnd { what })
    }

    pub(crate) fn number<T: FromStr>(&mut self, what: &'static str) -> Result<T, LoadError> {
        let word = self.word(what)?;
        word.parse().map_err(|_| LoadError::NotANumber {
            what,
            found: word.into(),
        })
    }

    /// Consumes the reader, returning how many fields were left.
    pub(crate) fn rest(self) -> usize {
        self.inner.count()
    }
}
