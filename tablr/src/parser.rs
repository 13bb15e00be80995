use crate::{
    Grammar, Lexer, LexerStats, LoadError, ParseError, ParserAction, SymbolMap, Token, TokenClass,
};
use smartstring::alias::String;
use std::fmt::Debug;

/// State every parse starts in.
pub const START_STATE: usize = 0;

/// Accept state of the augmented grammar in tables from the usual generator.
pub const DEFAULT_ACCEPT_STATE: usize = 1;

/// Consecutive reductions tolerated without a shift.
pub const DEFAULT_REDUCE_LIMIT: usize = 1 << 20;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserStats {
    pub tokens: usize,
    pub shifts: usize,
    pub reductions: usize,
}

/// What a single call to [`ParserCtx::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Pushed `state` and read a new lookahead.
    Shifted { state: usize },
    /// Reduced by `rule` and pushed the `goto` state; lookahead unchanged.
    Reduced { rule: usize, goto: usize },
    /// The input is accepted. Further steps keep returning this.
    Accepted,
}

/// A shift-reduce engine over a loaded grammar and symbol map.
///
/// `Parser` only borrows its tables and holds no per-parse state, so one
/// value can drive any number of parses, including concurrent ones on
/// different threads. Each parse gets its own [`ParserCtx`].
///
/// # Example
/// ```rust
/// # use tablr::{Grammar, Parser, SymbolMap};
/// let grammar: Grammar = "1\n0 1 E\n2 3\n0 2 0\n0 0 -1\n".parse().unwrap();
/// let symbols: SymbolMap = "identificador 1 $ 2".parse().unwrap();
/// let parser = Parser::try_new(&grammar, &symbols).unwrap().accept_state(3);
/// # let _ = parser;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Parser<'g> {
    grammar: &'g Grammar,
    symbols: &'g SymbolMap,
    accept_state: usize,
    reduce_limit: usize,
}

impl<'g> Parser<'g> {
    /// Creates a parser, refusing an empty symbol map.
    pub fn try_new(grammar: &'g Grammar, symbols: &'g SymbolMap) -> Result<Self, LoadError> {
        if symbols.is_empty() {
            return Err(LoadError::EmptySymbolMap);
        }
        Ok(Self {
            grammar,
            symbols,
            accept_state: DEFAULT_ACCEPT_STATE,
            reduce_limit: DEFAULT_REDUCE_LIMIT,
        })
    }

    /// State that accepts when a goto reaches it with end of input ahead.
    pub fn accept_state(mut self, state: usize) -> Self {
        self.accept_state = state;
        self
    }

    /// Number of back-to-back reductions after which the table is deemed
    /// non-terminating.
    pub fn reduce_limit(mut self, limit: usize) -> Self {
        self.reduce_limit = limit;
        self
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    pub fn symbols(&self) -> &'g SymbolMap {
        self.symbols
    }

    /// Begins a parse: fresh stack holding the start state, first lookahead
    /// read from `lexer`.
    pub fn start<L: Lexer>(&self, mut lexer: L) -> ParserCtx<'g, L> {
        let token = lexer.next_token();
        let ctx = ParserCtx {
            parser: *self,
            lexer,
            token,
            states: vec![START_STATE],
            stats: ParserStats {
                tokens: 1,
                ..ParserStats::default()
            },
            reductions_since_shift: 0,
            accepted: false,
        };
        if log::log_enabled!(log::Level::Trace) {
            ctx.dump_state();
        }
        ctx
    }

    /// Runs a whole parse to its verdict.
    ///
    /// Returns the lexer and parser statistics on acceptance, or the first
    /// error met. No token is read past the failing one.
    pub fn parse<L: Lexer>(&self, lexer: L) -> Result<(LexerStats, ParserStats), ParseError> {
        let mut ctx = self.start(lexer);
        loop {
            if ctx.step()? == Step::Accepted {
                return Ok(ctx.stats());
            }
        }
    }
}

/// One parse in progress: the lexer, the single lookahead token and the
/// state stack.
pub struct ParserCtx<'g, L>
where
    L: Lexer,
{
    parser: Parser<'g>,
    lexer: L,
    token: L::Token,
    states: Vec<usize>,
    stats: ParserStats,
    reductions_since_shift: usize,
    accepted: bool,
}

impl<'g, L> ParserCtx<'g, L>
where
    L: Lexer,
{
    /// The state stack, bottom first.
    pub fn states(&self) -> &[usize] {
        &self.states
    }

    pub fn depth(&self) -> usize {
        self.states.len()
    }

    pub fn lookahead(&self) -> &L::Token {
        &self.token
    }

    pub fn lexer(&self) -> &L {
        &self.lexer
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    pub fn stats(&self) -> (LexerStats, ParserStats) {
        (self.lexer.stats(), self.stats.clone())
    }

    /// Performs one shift, one reduction, or the final acceptance.
    pub fn step(&mut self) -> Result<Step, ParseError> {
        if self.accepted {
            return Ok(Step::Accepted);
        }

        let (terminal, column) = self.classify()?;
        let state = self.top();
        let action = self
            .parser
            .grammar
            .table()
            .action(state, column)
            .ok_or(ParseError::OutOfBounds { state, column })?;

        let step = match action {
            ParserAction::Shift(next) => {
                log::trace!("Shift {} on {:?}", next, terminal);
                self.states.push(next);
                self.token = self.lexer.next_token();
                self.stats.tokens += 1;
                self.stats.shifts += 1;
                self.reductions_since_shift = 0;
                Step::Shifted { state: next }
            }

            ParserAction::Reduce(rule) => self.reduce(rule, state, terminal)?,

            ParserAction::Error => {
                return Err(ParseError::Syntax {
                    state,
                    terminal,
                    lexeme: self.token.lexeme().into(),
                    offset: self.token.offset(),
                });
            }
        };

        if step == Step::Accepted {
            log::trace!("Accept");
        } else if log::log_enabled!(log::Level::Trace) {
            self.dump_state();
        }
        Ok(step)
    }

    /// Maps the lookahead to its terminal name and table column.
    fn classify(&self) -> Result<(&'static str, usize), ParseError> {
        let token = &self.token;
        let Some(terminal) = token.class().terminal() else {
            return Err(ParseError::Lexical {
                lexeme: token.lexeme().into(),
                offset: token.offset(),
            });
        };
        let column =
            self.parser
                .symbols
                .column(terminal)
                .ok_or_else(|| ParseError::UnmappedTerminal {
                    terminal,
                    lexeme: token.lexeme().into(),
                    offset: token.offset(),
                })?;
        Ok((terminal, column))
    }

    fn reduce(
        &mut self,
        rule_id: usize,
        state: usize,
        terminal: &'static str,
    ) -> Result<Step, ParseError> {
        let grammar = self.parser.grammar;
        let rule = grammar.rule(rule_id).ok_or(ParseError::InvalidRule {
            rule: rule_id,
            state,
            terminal,
        })?;

        if self.reductions_since_shift >= self.parser.reduce_limit {
            return Err(ParseError::NonTerminating {
                reductions: self.reductions_since_shift,
                state,
            });
        }

        // At least one state must survive the pops to look up the goto.
        let depth = self.states.len();
        if depth <= rule.len {
            return Err(ParseError::StackUnderflow {
                rule: rule.id,
                name: rule.name.clone(),
                len: rule.len,
                depth,
            });
        }
        self.states.truncate(depth - rule.len);

        let prev = self.top();
        let goto = match grammar.table().get(prev, rule.lhs) {
            Some(goto) if goto > 0 => goto as usize,
            Some(goto) => {
                return Err(ParseError::InvalidGoto {
                    name: rule.name.clone(),
                    state: prev,
                    lhs: rule.lhs,
                    goto,
                });
            }
            None => {
                return Err(ParseError::OutOfBounds {
                    state: prev,
                    column: rule.lhs,
                });
            }
        };
        log::trace!("Reduce {}({}), goto {}", rule.name, rule.id, goto);
        self.states.push(goto);
        self.stats.reductions += 1;
        self.reductions_since_shift += 1;

        if self.token.class() == TokenClass::End && goto == self.parser.accept_state {
            self.accepted = true;
            return Ok(Step::Accepted);
        }
        Ok(Step::Reduced { rule: rule.id, goto })
    }

    #[inline]
    fn top(&self) -> usize {
        self.states[self.states.len() - 1]
    }

    pub fn dump_state(&self) {
        let mut output = String::new();
        for state in &self.states {
            output.push_str(&format!("<{}> ", state));
        }
        output.push_str(&format!(" <-  {:?}", self.token));
        log::trace!("{}", output);
    }
}

impl<'g, L> Debug for ParserCtx<'g, L>
where
    L: Lexer,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserCtx")
            .field("states", &self.states)
            .field("token", &self.token)
            .field("stats", &self.stats)
            .field("accepted", &self.accepted)
            .finish()
    }
}
