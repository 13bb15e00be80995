//! Copyright (c) 2005–2025 IKH Software, Inc.
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0
//! or (at your option) any later version (LGPL-3.0-or-later).
//!
//! # tablr-minic
//!
//! Mini-C front end for the [`tablr`] parsing runtime: a maximal-munch
//! lexer, the symbol classifier that folds its token kinds onto the
//! grammar's terminal names, and the pieces of the `tablr-minic` acceptance
//! checker.
//!
//! - [`lexer`]: [`MinicLexer`], a [`logos`]-based scanner implementing
//!   [`tablr::Lexer`].
//! - [`token`]: [`TokenKind`] with its classifier, and [`MinicToken`].
//!
//! The grammar itself is not compiled in; it is loaded at run time from a
//! table and a symbol map such as the ones under `data/`.
//!
//! ## Example
//!
//! ```rust
//! use tablr::{Grammar, Parser, SymbolMap};
//! use tablr_minic::MinicLexer;
//!
//! // 1: Declaracion -> tipo identificador ;
//! let grammar: Grammar = "1\n0 3 Declaracion\n5 5\n\
//!     1 2 0 0 0\n0 0 0 0 0\n0 0 3 0 0\n0 0 0 4 0\n0 0 0 0 -1\n"
//!     .parse()
//!     .unwrap();
//! let symbols: SymbolMap = "tipo 1 identificador 2 ; 3 $ 4".parse().unwrap();
//! let parser = Parser::try_new(&grammar, &symbols).unwrap();
//!
//! assert!(parser.parse(MinicLexer::new("float total;")).is_ok());
//! assert!(parser.parse(MinicLexer::new("float total")).is_err());
//! ```

pub mod lexer;
pub mod token;

pub use lexer::MinicLexer;
pub use token::{MinicToken, TokenKind};

use std::io::{self, BufRead};

/// Reads a whole program line by line.
///
/// Every line, the last one included, is terminated by a single `\n` in the
/// result, whatever line ending the input used.
pub fn read_source<R: BufRead>(reader: R) -> io::Result<std::string::String> {
    let mut source = std::string::String::new();
    for line in reader.lines() {
        source.push_str(&line?);
        source.push('\n');
    }
    Ok(source)
}
