//! Semantic actions executed on each automaton transition.
//!
//! Every action mutates an explicit [`ScanContext`]; none of them touch the
//! lexer itself, so each one can be exercised against a hand-built context.

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{
    classifier::CharClass,
    table::LexerState,
    tokens::{LanguageTables, TokenKind},
};

/// Which lexical error a failing cell raises.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FailReason {
    IllegalCharacter,
    MalformedNumber,
    IllegalOperator,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Action {
    /// Starts an identifier or number with the current character.
    BeginToken,
    /// Starts a relational/assignment operator; `buffered` keeps the character.
    BeginOperator { buffered: bool },
    Append,
    Skip,
    FinalizeWord,
    FinalizeNumber,
    FinalizeSymbol,
    FinalizeOperator {
        kind: TokenKind,
        text: &'static str,
        push_back: bool,
    },
    FinalizeEof,
    Fail(FailReason),
}

/// Mutable scanning state.
///
/// `buffer`, `state`, `kind` and `start` belong to the token being scanned and
/// are reset by [`ScanContext::reset`]; the cursor and line/column counters
/// live for the whole source.
#[derive(Debug, Clone)]
pub struct ScanContext {
    pub buffer: String,
    pub state: LexerState,
    pub kind: TokenKind,
    pub start: Position,
    pub last_char: Option<char>,
    pub last_class: CharClass,
    /// Where `last_char` was read from.
    pub last_position: Position,
    pub cursor: usize,
    pub line: u32,
    pub column: u32,
}

impl Default for ScanContext {
    fn default() -> Self {
        ScanContext {
            buffer: String::new(),
            state: LexerState::Start,
            kind: TokenKind::EOF,
            start: Position::start(),
            last_char: None,
            last_class: CharClass::EndOfInput,
            last_position: Position::start(),
            cursor: 0,
            line: 1,
            column: 1,
        }
    }
}

impl ScanContext {
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.state = LexerState::Start;
        self.kind = TokenKind::EOF;
    }

    /// Records the next input character. End of input is not consumed, so the
    /// cursor and column stay put.
    pub fn consume(&mut self, ch: Option<char>, class: CharClass) {
        self.last_char = ch;
        self.last_class = class;
        self.last_position = Position::new(self.line, self.column);

        if ch.is_some() {
            self.cursor += 1;
            self.column += 1;
        }
    }

    /// Re-presents the last consumed character to the next scan.
    pub fn push_back(&mut self) {
        if self.last_class == CharClass::EndOfInput {
            return;
        }
        self.cursor -= 1;
        self.column -= 1;
    }

    fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, self.last_position)
    }

    fn last_char_or_nul(&self) -> char {
        debug_assert!(
            self.last_char.is_some(),
            "character action applied at end of input in state {}",
            self.state
        );
        self.last_char.unwrap_or('\0')
    }
}

impl Action {
    pub fn apply(&self, ctx: &mut ScanContext, tables: &LanguageTables) -> Result<(), Error> {
        match *self {
            Action::BeginToken => {
                ctx.buffer = ctx.last_char_or_nul().to_string();
                ctx.start = ctx.last_position;
            }
            Action::BeginOperator { buffered } => {
                if buffered {
                    ctx.buffer = ctx.last_char_or_nul().to_string();
                }
                ctx.start = ctx.last_position;
            }
            Action::Append => {
                ctx.buffer.push(ctx.last_char_or_nul());
            }
            Action::Skip => {
                if ctx.last_char == Some('\n') {
                    ctx.line += 1;
                    ctx.column = 1;
                }
            }
            Action::FinalizeWord => {
                ctx.kind = tables.keyword(&ctx.buffer).unwrap_or(TokenKind::Identifier);
                ctx.push_back();
            }
            Action::FinalizeNumber => {
                ctx.kind = TokenKind::Number;
                ctx.push_back();
            }
            Action::FinalizeSymbol => {
                let ch = ctx.last_char_or_nul();
                let Some(kind) = tables.symbol(ch) else {
                    return Err(ctx.error(ErrorImpl::IllegalCharacter { character: ch }));
                };
                ctx.buffer = ch.to_string();
                ctx.kind = kind;
                ctx.start = ctx.last_position;
            }
            Action::FinalizeOperator { kind, text, push_back } => {
                ctx.buffer = text.to_string();
                ctx.kind = kind;
                if push_back {
                    ctx.push_back();
                }
            }
            Action::FinalizeEof => {
                ctx.buffer.clear();
                ctx.kind = TokenKind::EOF;
                ctx.start = ctx.last_position;
            }
            Action::Fail(reason) => return Err(ctx.error(reason.describe(ctx))),
        }

        Ok(())
    }
}

impl FailReason {
    fn describe(&self, ctx: &ScanContext) -> ErrorImpl {
        let character = ctx.last_char_or_nul();

        match self {
            FailReason::IllegalCharacter => ErrorImpl::IllegalCharacter { character },
            FailReason::MalformedNumber => ErrorImpl::MalformedNumericLiteral {
                literal: format!("{}{}", ctx.buffer, character),
                character,
            },
            FailReason::IllegalOperator => {
                let first = match ctx.state {
                    LexerState::AfterLess => '<',
                    LexerState::AfterGreater => '>',
                    _ => '=',
                };
                ErrorImpl::IllegalOperatorSequence {
                    sequence: format!("{}{}", first, character),
                }
            }
        }
    }
}
