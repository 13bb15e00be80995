//! Error types for loading grammar resources and for running a parse.
//!
//! Two families are kept apart:
//!
//! - [`LoadError`] covers everything that can go wrong *before* the first
//!   token is scanned: unreadable files, malformed grammar tables or symbol
//!   maps, and an empty symbol map.
//! - [`ParseError`] covers the verdict-ending failures of a single parse run.
//!   None of them is recoverable; the engine stops at the first one.
//!
//! # Examples
//!
//! ```rust
//! # use tablr::ParseError;
//! let err = ParseError::Lexical { lexeme: "@".into(), offset: 3 };
//! assert_eq!(err.offset(), Some(3));
//! assert!(!err.is_internal());
//! assert!(err.to_string().starts_with("lexical error"));
//! ```

use smartstring::alias::String;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while reading a grammar table or a symbol map.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The resource could not be opened or read.
    #[error("cannot read {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input ended while a field was still expected.
    #[error("malformed input: expected {what}, found end of input")]
    UnexpectedEnd {
        /// Name of the missing field.
        what: &'static str,
    },

    /// A field that must be an integer was something else.
    #[error("malformed input: expected {what}, found {found:?}")]
    NotANumber {
        /// Name of the field being read.
        what: &'static str,
        /// The offending text.
        found: String,
    },

    /// A symbol-map entry has a name but no column.
    #[error("malformed symbol map: terminal {name:?} has no column")]
    MissingColumn { name: String },

    /// The symbol map loaded fine but holds no entries.
    #[error("symbol map is empty")]
    EmptySymbolMap,
}

/// A verdict-ending failure of one parse run.
///
/// Every variant renders as a single diagnostic line naming the kind of
/// failure and where it happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The scanner produced a character no rule recognises.
    #[error("lexical error: unknown character {lexeme:?} at offset {offset}")]
    Lexical { lexeme: String, offset: usize },

    /// The token was scanned but its terminal has no column in the symbol map.
    #[error(
        "syntax error: terminal {terminal:?} (lexeme {lexeme:?}) at offset {offset} has no entry in the symbol map"
    )]
    UnmappedTerminal {
        terminal: &'static str,
        lexeme: String,
        offset: usize,
    },

    /// The table holds no action for this state and terminal.
    #[error(
        "syntax error: unexpected terminal {terminal:?} (lexeme {lexeme:?}) in state {state} at offset {offset}"
    )]
    Syntax {
        state: usize,
        terminal: &'static str,
        lexeme: String,
        offset: usize,
    },

    /// A reduce action names a rule that does not exist.
    #[error("syntax error: invalid rule {rule} in state {state} with terminal {terminal:?}")]
    InvalidRule {
        rule: usize,
        state: usize,
        terminal: &'static str,
    },

    /// A reduction needs more states than the stack holds.
    #[error(
        "internal parser error: stack underflow while reducing rule {rule} ({name}): {depth} state(s) for a right-hand side of {len}"
    )]
    StackUnderflow {
        rule: usize,
        name: String,
        len: usize,
        depth: usize,
    },

    /// The goto cell after a reduction holds no state.
    #[error(
        "syntax error: invalid goto ({goto}) after reducing rule {name} in state {state} on non-terminal {lhs}"
    )]
    InvalidGoto {
        name: String,
        state: usize,
        lhs: usize,
        goto: i64,
    },

    /// A lookup fell outside the table.
    #[error("syntax error: table has no cell at state {state}, column {column}")]
    OutOfBounds { state: usize, column: usize },

    /// The table kept reducing without ever shifting.
    #[error(
        "internal parser error: {reductions} consecutive reductions without a shift in state {state}"
    )]
    NonTerminating { reductions: usize, state: usize },
}

impl ParseError {
    /// Returns `true` for failures that point at a corrupt table or an engine
    /// defect rather than at the input text.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            ParseError::StackUnderflow { .. } | ParseError::NonTerminating { .. }
        )
    }

    /// Source offset of the offending token, when the failure has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::Lexical { offset, .. }
            | ParseError::UnmappedTerminal { offset, .. }
            | ParseError::Syntax { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}
