use std::fmt::Debug;

/// Terminal name the end-of-input token is looked up under in a symbol map.
pub const END_TERMINAL: &str = "$";

/// How the parser should treat a token.
///
/// This is the output of a front end's symbol classifier: several lexical
/// kinds may fold onto one grammar terminal, end of input has its own class,
/// and characters the scanner could not recognise are flagged so the parser
/// can stop with a lexical error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// A grammar terminal, named as in the symbol map.
    Terminal(&'static str),
    /// End of input; looked up as [`END_TERMINAL`].
    End,
    /// An unrecognised character.
    Unknown,
}

impl TokenClass {
    /// Symbol-map key for this class, or `None` for [`TokenClass::Unknown`].
    pub fn terminal(&self) -> Option<&'static str> {
        match *self {
            TokenClass::Terminal(name) => Some(name),
            TokenClass::End => Some(END_TERMINAL),
            TokenClass::Unknown => None,
        }
    }
}

pub trait Token: Debug {
    fn class(&self) -> TokenClass;
    fn lexeme(&self) -> &str;
    /// Byte offset of the first character of the lexeme.
    fn offset(&self) -> usize;
}

/// A source of tokens for the parser.
///
/// `next_token` never fails: characters that match no rule come back as
/// tokens of class [`TokenClass::Unknown`], and once the input is exhausted
/// every call yields an end-of-input token.
pub trait Lexer {
    type Token: Token;

    fn next_token(&mut self) -> Self::Token;

    fn stats(&self) -> LexerStats;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexerStats {
    /// Tokens handed out, the end-of-input token included.
    pub tokens: usize,
    /// Source bytes consumed, whitespace included.
    pub bytes: usize,
    /// Unknown-character tokens produced.
    pub unknown: usize,
}
