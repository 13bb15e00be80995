//! Copyright (c) 2005–2025 IKH Software, Inc.
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0
//! or (at your option) any later version (LGPL-3.0-or-later).
//!
//! Runtime for table-driven LR parsing.
//!
//! `tablr` decides whether a token stream belongs to a context-free language,
//! given an LR action/goto table produced by an external generator. It does
//! not build tables and does not build trees: the outcome of a parse is a
//! verdict, plus a positional diagnostic when the input is rejected.
//!
//! Key components:
//! - [`Grammar`] / [`ParseTable`]: rule metadata and the action/goto matrix,
//!   loaded from their text format.
//! - [`SymbolMap`]: terminal name to table column.
//! - [`Lexer`] / [`Token`]: what a front end implements to feed the engine;
//!   [`Token::class`] is where lexical kinds are folded onto terminals.
//! - [`Parser`] / [`ParserCtx`]: the shift-reduce engine.
//!
//! # Example
//!
//! ```rust
//! use tablr::{Grammar, Lexer, LexerStats, Parser, SymbolMap, Token, TokenClass};
//!
//! #[derive(Debug)]
//! struct Word(usize, bool);
//!
//! impl Token for Word {
//!     fn class(&self) -> TokenClass {
//!         if self.1 { TokenClass::End } else { TokenClass::Terminal("identificador") }
//!     }
//!     fn lexeme(&self) -> &str { if self.1 { "" } else { "x" } }
//!     fn offset(&self) -> usize { self.0 }
//! }
//!
//! struct OneWord(usize);
//!
//! impl Lexer for OneWord {
//!     type Token = Word;
//!     fn next_token(&mut self) -> Word {
//!         self.0 += 1;
//!         Word(self.0 - 1, self.0 > 1)
//!     }
//!     fn stats(&self) -> LexerStats { LexerStats::default() }
//! }
//!
//! // 1: E -> identificador; column 0 is E, 1 is identificador, 2 is $.
//! let grammar: Grammar = "1\n0 1 E\n3 3\n1 2 0\n0 0 0\n0 0 -1\n".parse().unwrap();
//! let symbols: SymbolMap = "identificador 1\n$ 2\n".parse().unwrap();
//! let parser = Parser::try_new(&grammar, &symbols).unwrap();
//! assert!(parser.parse(OneWord(0)).is_ok());
//! ```

mod error;
mod lexer;
mod parser;
mod symbols;
mod table;

#[cfg(test)]
mod test_grammar_data;
#[cfg(test)]
mod test_lexer_data;

pub use crate::error::{LoadError, ParseError};
pub use crate::lexer::{END_TERMINAL, Lexer, LexerStats, Token, TokenClass};
pub use crate::parser::{
    DEFAULT_ACCEPT_STATE, DEFAULT_REDUCE_LIMIT, Parser, ParserCtx, ParserStats, START_STATE, Step,
};
pub use crate::symbols::SymbolMap;
pub use crate::table::{Grammar, GrammarRule, ParseTable, ParserAction};
