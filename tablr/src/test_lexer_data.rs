//! A small hand-written lexer used as a test double by the engine tests.
//!
//! Letters scan as `identificador`, digits as `entero`, `+` as `opSuma`;
//! whitespace is skipped and any other character is unknown.

use crate::{Lexer, LexerStats, Token, TokenClass};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XToken {
    pub class: TokenClass,
    pub lexeme: String,
    pub offset: usize,
}

impl Token for XToken {
    fn class(&self) -> TokenClass {
        self.class
    }
    fn lexeme(&self) -> &str {
        &self.lexeme
    }
    fn offset(&self) -> usize {
        self.offset
    }
}

pub struct XLexer {
    chars: Vec<char>,
    pos: usize,
    stats: LexerStats,
}

impl XLexer {
    pub fn new(input: &str) -> Self {
        assert!(input.is_ascii(), "test lexer takes ASCII input only");
        Self {
            chars: input.chars().collect(),
            pos: 0,
            stats: LexerStats::default(),
        }
    }

    fn run(&mut self, pred: fn(&char) -> bool) {
        while self.chars.get(self.pos).is_some_and(pred) {
            self.pos += 1;
        }
    }
}

impl Lexer for XLexer {
    type Token = XToken;

    fn next_token(&mut self) -> XToken {
        self.stats.tokens += 1;
        self.run(char::is_ascii_whitespace);
        let start = self.pos;
        let class = match self.chars.get(self.pos) {
            None => TokenClass::End,
            Some(c) if c.is_ascii_alphabetic() => {
                self.run(char::is_ascii_alphanumeric);
                TokenClass::Terminal("identificador")
            }
            Some(c) if c.is_ascii_digit() => {
                self.run(char::is_ascii_digit);
                TokenClass::Terminal("entero")
            }
            Some('+') => {
                self.pos += 1;
                TokenClass::Terminal("opSuma")
            }
            Some(_) => {
                self.pos += 1;
                self.stats.unknown += 1;
                TokenClass::Unknown
            }
        };
        self.stats.bytes = self.pos;
        XToken {
            class,
            lexeme: self.chars[start..self.pos].iter().collect(),
            offset: start,
        }
    }

    fn stats(&self) -> LexerStats {
        self.stats.clone()
    }
}
