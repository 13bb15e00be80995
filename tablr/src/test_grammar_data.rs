//! Table fixtures shared by the unit tests.
//!
//! `SUM_GRAMMAR` encodes the ambiguous grammar
//!
//! ```text
//! 1: E -> E opSuma E
//! 2: E -> identificador
//! ```
//!
//! with `+` made left-associative. Column 0 is the non-terminal `E`;
//! columns 1..=3 are `identificador`, `opSuma` and `$`. State 1 is the
//! accept state.

use crate::{Grammar, SymbolMap};

pub const SUM_GRAMMAR: &str = "\
2
0 3 E
0 1 E
5 4
1 2 0 0
0 0 3 0
0 0 -2 -2
4 2 0 0
0 0 -1 -1
";

pub const SUM_SYMBOLS: &str = "identificador 1\nopSuma 2\n$ 3\n";

pub fn sum_grammar() -> Grammar {
    SUM_GRAMMAR.parse().unwrap()
}

pub fn sum_symbols() -> SymbolMap {
    SUM_SYMBOLS.parse().unwrap()
}
