use log::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_TOKEN,
};

use super::{
    actions::ScanContext,
    classifier::classify,
    table::{self, LexerState},
    tokens::{LanguageTables, Token, TokenKind, DEFAULT_TABLES},
};

/// Table-driven scanner over one source text.
///
/// Holds no global state: the language tables are borrowed and the
/// transition table is immutable, so any number of lexers can run at once.
pub struct Lexer<'t> {
    source: Vec<char>,
    tables: &'t LanguageTables,
    context: ScanContext,
    tokens: Vec<Token>,
}

impl<'t> Lexer<'t> {
    pub fn new(source: &str, tables: &'t LanguageTables) -> Lexer<'t> {
        Lexer {
            source: source.chars().collect(),
            tables,
            context: ScanContext::default(),
            tokens: vec![],
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.source.get(self.context.cursor).copied()
    }

    pub fn at_eof(&self) -> bool {
        self.context.cursor >= self.source.len()
    }

    /// Runs the automaton from `Start` until it accepts a token or fails.
    pub fn scan_one(&mut self) -> Result<Token, Error> {
        self.context.reset();

        while !self.context.state.is_terminal() {
            let ch = self.at();
            let class = classify(ch, self.tables);
            self.context.consume(ch, class);

            let state = self.context.state;
            let transition = table::lookup(state, class).ok_or_else(|| {
                Error::new(
                    ErrorImpl::MissingTransition {
                        state: state.to_string(),
                        class: class.to_string(),
                    },
                    self.context.last_position,
                )
            })?;

            trace!(
                "{} --{} {:?}--> {} ({:?})",
                state,
                class,
                ch,
                transition.next,
                transition.action
            );

            transition.action.apply(&mut self.context, self.tables)?;
            self.context.state = transition.next;
        }

        debug_assert_eq!(self.context.state, LexerState::Accept);

        let token = MK_TOKEN!(
            self.context.kind,
            self.context.buffer.clone(),
            self.context.start
        );
        debug!("token {}", token);
        Ok(token)
    }
}

/// Tokenizes `source` with the default language tables.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    tokenize_with(source, &DEFAULT_TABLES)
}

/// Tokenizes `source`; the returned sequence always ends with one `EOF` token.
pub fn tokenize_with(source: &str, tables: &LanguageTables) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, tables);

    loop {
        let token = lex.scan_one()?;
        let finished = token.kind == TokenKind::EOF;
        lex.push(token);

        if finished {
            break;
        }
    }

    debug!(
        "tokenized {} characters into {} tokens",
        lex.source.len(),
        lex.tokens.len()
    );
    Ok(lex.tokens)
}

/// Tokenizes a source that was already split into lines.
pub fn tokenize_lines<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Token>, Error> {
    let source = lines
        .iter()
        .map(|line| line.as_ref())
        .collect::<Vec<&str>>()
        .join("\n");

    tokenize(&source)
}
