//! # Mini-C tokens
//!
//! This module defines the token kinds produced by [`MinicLexer`] and the
//! concrete token type handed to the `tablr` engine:
//!
//! - [`TokenKind`]: the closed set of lexical kinds, together with the
//!   symbol classifier ([`TokenKind::class`]) that folds them onto the
//!   grammar's terminal names,
//! - [`MinicToken`]: a kind, the exact lexeme and its byte offset.
//!
//! [`MinicLexer`]: crate::MinicLexer
use smartstring::alias::String;
use std::fmt;
use tablr::{Token, TokenClass};

/// Lexical kind of a mini-C token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    Integer,
    Real,
    Str,
    If,
    While,
    Return,
    Else,
    Int,
    Float,
    /// `+` or `-`.
    Additive,
    /// `*` or `/`.
    Multiplicative,
    Assign,
    /// `<`, `>`, `<=` or `>=`.
    Relational,
    /// `==` or `!=`.
    Equality,
    And,
    Or,
    Not,
    Semicolon,
    Comma,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    End,
    Unknown,
}

impl TokenKind {
    /// The symbol classifier.
    ///
    /// Several kinds share a terminal because the grammar does not tell them
    /// apart: both type keywords are `tipo`, `+`/`-` are `opSuma`, and so on.
    ///
    /// ```rust
    /// # use tablr::TokenClass;
    /// # use tablr_minic::TokenKind;
    /// assert_eq!(TokenKind::Float.class(), TokenClass::Terminal("tipo"));
    /// assert_eq!(TokenKind::End.class(), TokenClass::End);
    /// ```
    pub fn class(self) -> TokenClass {
        use TokenKind::*;
        let name = match self {
            Identifier => "identificador",
            Integer => "entero",
            Real => "real",
            Str => "cadena",
            Int | Float => "tipo",
            Additive => "opSuma",
            Multiplicative => "opMul",
            Assign => "=",
            Relational => "opRelac",
            And => "opAnd",
            Or => "opOr",
            Not => "opNot",
            Equality => "opIgualdad",
            Semicolon => ";",
            Comma => ",",
            LeftParen => "(",
            RightParen => ")",
            LeftBrace => "{",
            RightBrace => "}",
            If => "if",
            While => "while",
            Return => "return",
            Else => "else",
            End => return TokenClass::End,
            Unknown => return TokenClass::Unknown,
        };
        TokenClass::Terminal(name)
    }

    /// Upper-case label used in token dumps.
    pub fn label(self) -> &'static str {
        use TokenKind::*;
        match self {
            Identifier => "IDENT",
            Integer => "INTEGER",
            Real => "REAL",
            Str => "STRING",
            If => "IF",
            While => "WHILE",
            Return => "RETURN",
            Else => "ELSE",
            Int => "INT",
            Float => "FLOAT",
            Additive => "OP_ADD",
            Multiplicative => "OP_MUL",
            Assign => "OP_ASSIGN",
            Relational => "OP_REL",
            Equality => "OP_EQ",
            And => "OP_AND",
            Or => "OP_OR",
            Not => "OP_NOT",
            Semicolon => "SEMICOLON",
            Comma => "COMMA",
            LeftParen => "LPAREN",
            RightParen => "RPAREN",
            LeftBrace => "LBRACE",
            RightBrace => "RBRACE",
            End => "END",
            Unknown => "UNKNOWN",
        }
    }
}

/// A scanned mini-C token.
///
/// `lexeme` is the exact source text (empty for [`TokenKind::End`]) and
/// `offset` the byte position of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinicToken {
    pub kind: TokenKind,
    pub lexeme: String,
    pub offset: usize,
}

impl Token for MinicToken {
    fn class(&self) -> TokenClass {
        self.kind.class()
    }

    fn lexeme(&self) -> &str {
        &self.lexeme
    }

    fn offset(&self) -> usize {
        self.offset
    }
}

/// Tab-separated `KIND lexeme offset`, one token per dump line.
impl fmt::Display for MinicToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.kind.label(), self.lexeme, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_kinds_share_terminals() {
        assert_eq!(TokenKind::Int.class(), TokenKind::Float.class());
        assert_eq!(TokenKind::Int.class(), TokenClass::Terminal("tipo"));
        assert_eq!(TokenKind::Additive.class(), TokenClass::Terminal("opSuma"));
        assert_eq!(TokenKind::Multiplicative.class(), TokenClass::Terminal("opMul"));
        assert_eq!(TokenKind::Relational.class(), TokenClass::Terminal("opRelac"));
        assert_eq!(TokenKind::Equality.class(), TokenClass::Terminal("opIgualdad"));
    }

    #[test]
    fn literals_and_punctuation() {
        let pairs = [
            (TokenKind::Identifier, "identificador"),
            (TokenKind::Integer, "entero"),
            (TokenKind::Real, "real"),
            (TokenKind::Str, "cadena"),
            (TokenKind::Assign, "="),
            (TokenKind::And, "opAnd"),
            (TokenKind::Or, "opOr"),
            (TokenKind::Not, "opNot"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Comma, ","),
            (TokenKind::LeftParen, "("),
            (TokenKind::RightParen, ")"),
            (TokenKind::LeftBrace, "{"),
            (TokenKind::RightBrace, "}"),
            (TokenKind::If, "if"),
            (TokenKind::While, "while"),
            (TokenKind::Return, "return"),
            (TokenKind::Else, "else"),
        ];
        for (kind, name) in pairs {
            assert_eq!(kind.class(), TokenClass::Terminal(name), "{kind:?}");
        }
    }

    #[test]
    fn end_and_unknown_have_no_terminal_name() {
        assert_eq!(TokenKind::End.class(), TokenClass::End);
        assert_eq!(TokenKind::End.class().terminal(), Some("$"));
        assert_eq!(TokenKind::Unknown.class(), TokenClass::Unknown);
        assert_eq!(TokenKind::Unknown.class().terminal(), None);
    }

    #[test]
    fn token_trait_accessors() {
        let t = MinicToken {
            kind: TokenKind::Real,
            lexeme: "3.14".into(),
            offset: 7,
        };
        assert_eq!(t.class(), TokenClass::Terminal("real"));
        assert_eq!(Token::lexeme(&t), "3.14");
        assert_eq!(Token::offset(&t), 7);
        assert_eq!(t.to_string(), "REAL\t3.14\t7");
    }
}
