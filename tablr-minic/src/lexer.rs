//! Lexer module.
//!
//! Maximal-munch scanner for mini-C source text, built on the [`logos`]
//! crate. The declarative `LogosToken` definition recognises keywords,
//! identifiers, numerals, string literals and operators; [`MinicLexer`]
//! drives it one token at a time and implements [`tablr::Lexer`] so the
//! table-driven parser can pull tokens on demand.
//!
//! # Notes
//! - Space, tab, carriage return and line feed separate tokens and are
//!   otherwise ignored.
//! - A character that starts no token comes back as a single
//!   [`TokenKind::Unknown`] token; scanning resumes right after it.
//! - Once the input is exhausted every call yields [`TokenKind::End`] at
//!   offset `source.len()`.
use crate::token::{MinicToken, TokenKind};
use logos::Logos;
use tablr::{Lexer, LexerStats};

/// Whether a numeral carried a fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Numeral {
    Integer,
    Real,
}

/// Raw tokens recognised by the `logos` automaton.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum LogosToken {
    #[token("if")]
    If,
    #[token("while")]
    While,
    #[token("return")]
    Return,
    #[token("else")]
    Else,
    #[token("int")]
    Int,
    #[token("float")]
    Float,

    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Identifier,

    /// Digits, optionally followed by `.` and at least one more digit.
    #[regex(r"[0-9]+", fraction)]
    Number(Numeral),

    /// From an opening quote to the next quote, or to the end of input.
    #[regex(r#""[^"]*"?"#)]
    Str,

    #[token("+")]
    #[token("-")]
    Additive,
    #[token("*")]
    #[token("/")]
    Multiplicative,
    #[token("<")]
    #[token(">")]
    #[token("<=")]
    #[token(">=")]
    Relational,
    #[token("==")]
    #[token("!=")]
    Equality,
    #[token("&&")]
    And,
    #[token("||")]
    Or,
    #[token("!")]
    Not,
    #[token("=")]
    Assign,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
}

/// Extends an integer part with `.digits` when a digit follows the dot.
///
/// `12.` stays an integer and leaves the dot for the next token.
fn fraction(lex: &mut logos::Lexer<LogosToken>) -> Numeral {
    let rest = lex.remainder();
    let Some(tail) = rest.strip_prefix('.') else {
        return Numeral::Integer;
    };
    let digits = tail.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Numeral::Integer;
    }
    lex.bump(1 + digits);
    Numeral::Real
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::If => TokenKind::If,
            LogosToken::While => TokenKind::While,
            LogosToken::Return => TokenKind::Return,
            LogosToken::Else => TokenKind::Else,
            LogosToken::Int => TokenKind::Int,
            LogosToken::Float => TokenKind::Float,
            LogosToken::Identifier => TokenKind::Identifier,
            LogosToken::Number(Numeral::Integer) => TokenKind::Integer,
            LogosToken::Number(Numeral::Real) => TokenKind::Real,
            LogosToken::Str => TokenKind::Str,
            LogosToken::Additive => TokenKind::Additive,
            LogosToken::Multiplicative => TokenKind::Multiplicative,
            LogosToken::Relational => TokenKind::Relational,
            LogosToken::Equality => TokenKind::Equality,
            LogosToken::And => TokenKind::And,
            LogosToken::Or => TokenKind::Or,
            LogosToken::Not => TokenKind::Not,
            LogosToken::Assign => TokenKind::Assign,
            LogosToken::Semicolon => TokenKind::Semicolon,
            LogosToken::Comma => TokenKind::Comma,
            LogosToken::LeftParen => TokenKind::LeftParen,
            LogosToken::RightParen => TokenKind::RightParen,
            LogosToken::LeftBrace => TokenKind::LeftBrace,
            LogosToken::RightBrace => TokenKind::RightBrace,
        }
    }
}

/// Mini-C scanner over a borrowed source string.
///
/// The source is owned by the caller for the whole scan; tokens copy their
/// lexemes out, so they outlive the lexer.
#[derive(Debug, Clone)]
pub struct MinicLexer<'source> {
    source: &'source str,
    /// Byte position of the next unread character.
    pos: usize,
    stats: LexerStats,
}

impl<'source> MinicLexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            pos: 0,
            stats: LexerStats::default(),
        }
    }

    pub fn source(&self) -> &'source str {
        self.source
    }

    /// Rewinds to the start of the source and clears the statistics.
    pub fn reset(&mut self) {
        self.pos = 0;
        self.stats = LexerStats::default();
    }

    /// Scans the whole source, returning every token up to and including
    /// the first end-of-input token.
    pub fn tokenize(source: &'source str) -> Vec<MinicToken> {
        let mut lexer = Self::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let done = token.kind == TokenKind::End;
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }
}

impl<'source> Lexer for MinicLexer<'source> {
    type Token = MinicToken;

    fn next_token(&mut self) -> MinicToken {
        self.stats.tokens += 1;
        let rest = &self.source[self.pos..];
        let mut inner = LogosToken::lexer(rest);

        let (kind, start, end) = match inner.next() {
            None => {
                self.stats.bytes += rest.len();
                self.pos = self.source.len();
                return MinicToken {
                    kind: TokenKind::End,
                    lexeme: Default::default(),
                    offset: self.pos,
                };
            }
            Some(Ok(token)) => {
                let span = inner.span();
                (TokenKind::from(token), span.start, span.end)
            }
            Some(Err(())) => {
                let start = inner.span().start;
                let width = rest[start..].chars().next().map_or(1, char::len_utf8);
                self.stats.unknown += 1;
                (TokenKind::Unknown, start, start + width)
            }
        };

        let token = MinicToken {
            kind,
            lexeme: rest[start..end].into(),
            offset: self.pos + start,
        };
        log::trace!("{:?} {:?} at {}", token.kind, token.lexeme, token.offset);
        self.stats.bytes += end;
        self.pos += end;
        token
    }

    fn stats(&self) -> LexerStats {
        self.stats.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        MinicLexer::tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    fn lexemes(source: &str) -> Vec<String> {
        MinicLexer::tokenize(source)
            .into_iter()
            .map(|t| t.lexeme.to_string())
            .collect()
    }

    #[test]
    fn declaration() {
        let tokens = MinicLexer::tokenize("int x;");
        let got: Vec<_> = tokens
            .iter()
            .map(|t| (t.kind, t.lexeme.as_str(), t.offset))
            .collect();
        assert_eq!(
            got,
            vec![
                (TokenKind::Int, "int", 0),
                (TokenKind::Identifier, "x", 4),
                (TokenKind::Semicolon, ";", 5),
                (TokenKind::End, "", 6),
            ]
        );
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(kinds(""), vec![TokenKind::End]);
        let tokens = MinicLexer::tokenize(" \t\r\n  ");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::End);
        assert_eq!(tokens[0].offset, 6);
    }

    #[test]
    fn end_repeats() {
        let mut lexer = MinicLexer::new("a");
        assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
        for _ in 0..3 {
            let t = lexer.next_token();
            assert_eq!(t.kind, TokenKind::End);
            assert_eq!(t.offset, 1);
            assert!(t.lexeme.is_empty());
        }
    }

    #[test]
    fn numerals() {
        assert_eq!(kinds("42"), vec![TokenKind::Integer, TokenKind::End]);
        assert_eq!(lexemes("12.34"), vec!["12.34", ""]);
        assert_eq!(kinds("12.34"), vec![TokenKind::Real, TokenKind::End]);
        assert_eq!(
            kinds("12."),
            vec![TokenKind::Integer, TokenKind::Unknown, TokenKind::End]
        );
        assert_eq!(
            kinds("1.2.3"),
            vec![
                TokenKind::Real,
                TokenKind::Unknown,
                TokenKind::Integer,
                TokenKind::End
            ]
        );
        assert_eq!(
            kinds("7x"),
            vec![TokenKind::Integer, TokenKind::Identifier, TokenKind::End]
        );
    }

    #[test]
    fn keywords_need_whole_word() {
        assert_eq!(kinds("ifx"), vec![TokenKind::Identifier, TokenKind::End]);
        assert_eq!(kinds("integer"), vec![TokenKind::Identifier, TokenKind::End]);
        assert_eq!(
            kinds("if while return else int float"),
            vec![
                TokenKind::If,
                TokenKind::While,
                TokenKind::Return,
                TokenKind::Else,
                TokenKind::Int,
                TokenKind::Float,
                TokenKind::End
            ]
        );
        assert_eq!(lexemes("x1y2"), vec!["x1y2", ""]);
    }

    #[test]
    fn strings() {
        assert_eq!(lexemes(r#""hola mundo" x"#), vec![r#""hola mundo""#, "x", ""]);
        assert_eq!(kinds(r#""""#), vec![TokenKind::Str, TokenKind::End]);

        let tokens = MinicLexer::tokenize("a \"abc");
        assert_eq!(tokens[1].kind, TokenKind::Str);
        assert_eq!(tokens[1].lexeme.as_str(), "\"abc");
        assert_eq!(tokens[2].kind, TokenKind::End);
        assert_eq!(tokens[2].offset, 6);
    }

    #[test]
    fn operators_prefer_longest() {
        assert_eq!(
            kinds("<= < >= > == = != ! && || + - * /"),
            vec![
                TokenKind::Relational,
                TokenKind::Relational,
                TokenKind::Relational,
                TokenKind::Relational,
                TokenKind::Equality,
                TokenKind::Assign,
                TokenKind::Equality,
                TokenKind::Not,
                TokenKind::And,
                TokenKind::Or,
                TokenKind::Additive,
                TokenKind::Additive,
                TokenKind::Multiplicative,
                TokenKind::Multiplicative,
                TokenKind::End
            ]
        );
        assert_eq!(lexemes("a<=b"), vec!["a", "<=", "b", ""]);
        assert_eq!(
            kinds("(){},;"),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::LeftBrace,
                TokenKind::RightBrace,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::End
            ]
        );
    }

    #[test]
    fn lone_ampersand_and_bar_are_unknown() {
        assert_eq!(
            kinds("a & b | c"),
            vec![
                TokenKind::Identifier,
                TokenKind::Unknown,
                TokenKind::Identifier,
                TokenKind::Unknown,
                TokenKind::Identifier,
                TokenKind::End
            ]
        );
    }

    #[test]
    fn unknown_consumes_one_character() {
        let tokens = MinicLexer::tokenize("a@@b");
        let got: Vec<_> = tokens
            .iter()
            .map(|t| (t.kind, t.lexeme.as_str(), t.offset))
            .collect();
        assert_eq!(
            got,
            vec![
                (TokenKind::Identifier, "a", 0),
                (TokenKind::Unknown, "@", 1),
                (TokenKind::Unknown, "@", 2),
                (TokenKind::Identifier, "b", 3),
                (TokenKind::End, "", 4),
            ]
        );
    }

    #[test]
    fn multibyte_unknown_character() {
        let tokens = MinicLexer::tokenize("x ñ y");
        assert_eq!(tokens[1].kind, TokenKind::Unknown);
        assert_eq!(tokens[1].lexeme.as_str(), "ñ");
        assert_eq!(tokens[1].offset, 2);
        assert_eq!(tokens[2].lexeme.as_str(), "y");
        assert_eq!(tokens[2].offset, 5);
    }

    #[test]
    fn stats_and_reset() {
        let mut lexer = MinicLexer::new("a # 1 ");
        while lexer.next_token().kind != TokenKind::End {}
        assert_eq!(
            lexer.stats(),
            LexerStats {
                tokens: 4,
                bytes: 6,
                unknown: 1,
            }
        );

        lexer.reset();
        assert_eq!(lexer.stats(), LexerStats::default());
        let first = lexer.next_token();
        assert_eq!(first.kind, TokenKind::Identifier);
        assert_eq!(first.offset, 0);
        assert_eq!(lexer.source(), "a # 1 ");
    }
}
