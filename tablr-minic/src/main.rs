//! Command-line interface (CLI) for tablr-minic
//!
//! Reads a mini-C program from standard input and decides whether it belongs
//! to the language described by a grammar table and symbol map given on the
//! command line.
//!
//! Exit status is 0 when the program is accepted, 1 when it is rejected and
//! 2 when the grammar resources cannot be used.

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tablr::{DEFAULT_ACCEPT_STATE, DEFAULT_REDUCE_LIMIT, Grammar, Lexer, Parser, SymbolMap};
use tablr_minic::{MinicLexer, TokenKind, read_source};

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Grammar table file (rules followed by the action/goto matrix)
    table: PathBuf,

    /// Symbol map file (`terminal column` pairs)
    symbols: PathBuf,

    /// State whose goto after a reduction, with end of input as lookahead, accepts
    #[arg(short, long, default_value_t = DEFAULT_ACCEPT_STATE)]
    accept_state: usize,

    /// Maximum consecutive reductions without a shift
    #[arg(long, default_value_t = DEFAULT_REDUCE_LIMIT)]
    reduce_limit: usize,

    /// Print every token before parsing
    #[arg(short, long)]
    tokens: bool,
}

/// Returns whether the input was accepted; `Err` only for unusable resources.
fn run(args: &Args) -> Result<bool> {
    let grammar = Grammar::load(&args.table)
        .with_context(|| format!("cannot load grammar table {:?}", args.table))?;
    let symbols = SymbolMap::load(&args.symbols)
        .with_context(|| format!("cannot load symbol map {:?}", args.symbols))?;
    let parser = Parser::try_new(&grammar, &symbols)
        .with_context(|| format!("cannot use symbol map {:?}", args.symbols))?
        .accept_state(args.accept_state)
        .reduce_limit(args.reduce_limit);

    let source = read_source(io::stdin().lock()).context("cannot read standard input")?;
    let mut lexer = MinicLexer::new(&source);

    if args.tokens {
        let mut out = io::stdout().lock();
        loop {
            let token = lexer.next_token();
            writeln!(out, "{token}")?;
            if token.kind == TokenKind::End {
                break;
            }
        }
        lexer.reset();
    }

    log::info!("starting lexical and syntactic analysis");
    match parser.parse(lexer) {
        Ok((lexer_stats, parser_stats)) => {
            log::info!("Stats: {:?}, {:?}", lexer_stats, parser_stats);
            println!("input accepted");
            println!("analysis completed: OK");
            Ok(true)
        }
        Err(err) => {
            eprintln!("{err}");
            println!("analysis completed: FAILED");
            Ok(false)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    log::debug!("{:?}", args);

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
