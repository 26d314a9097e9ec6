use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::MK_TRANSITION;

use super::{
    actions::{Action, FailReason},
    classifier::CharClass,
    tokens::TokenKind,
};

/// States of the per-token automaton. `Accept` and `Error` end the scan of
/// the current token only; the next scan starts over from `Start`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LexerState {
    Start,
    InIdentifier,
    InNumber,
    AfterLess,
    AfterEqual,
    AfterGreater,
    Accept,
    Error,
}

impl LexerState {
    pub const SCANNING: [LexerState; 6] = [
        LexerState::Start,
        LexerState::InIdentifier,
        LexerState::InNumber,
        LexerState::AfterLess,
        LexerState::AfterEqual,
        LexerState::AfterGreater,
    ];

    pub fn is_terminal(&self) -> bool {
        matches!(self, LexerState::Accept | LexerState::Error)
    }
}

impl Display for LexerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One cell of the transition table.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Transition {
    pub next: LexerState,
    pub action: Action,
}

pub type TransitionTable = HashMap<(LexerState, CharClass), Transition>;

lazy_static! {
    pub static ref TRANSITION_TABLE: TransitionTable = build_transition_table();
}

pub fn lookup(state: LexerState, class: CharClass) -> Option<Transition> {
    TRANSITION_TABLE.get(&(state, class)).copied()
}

fn build_transition_table() -> TransitionTable {
    use CharClass::*;

    let mut table = TransitionTable::new();

    // Start
    MK_TRANSITION!(table, LexerState::Start, [Letter] => LexerState::InIdentifier, Action::BeginToken);
    MK_TRANSITION!(table, LexerState::Start, [Digit] => LexerState::InNumber, Action::BeginToken);
    MK_TRANSITION!(table, LexerState::Start, [Less] => LexerState::AfterLess, Action::BeginOperator { buffered: false });
    MK_TRANSITION!(table, LexerState::Start, [Equal] => LexerState::AfterEqual, Action::BeginOperator { buffered: true });
    MK_TRANSITION!(table, LexerState::Start, [Greater] => LexerState::AfterGreater, Action::BeginOperator { buffered: false });
    MK_TRANSITION!(table, LexerState::Start, [Whitespace] => LexerState::Start, Action::Skip);
    MK_TRANSITION!(table, LexerState::Start, [Symbol] => LexerState::Accept, Action::FinalizeSymbol);
    MK_TRANSITION!(table, LexerState::Start, [Illegal] => LexerState::Error, Action::Fail(FailReason::IllegalCharacter));
    MK_TRANSITION!(table, LexerState::Start, [EndOfInput] => LexerState::Accept, Action::FinalizeEof);

    // Identifiers and keywords
    MK_TRANSITION!(table, LexerState::InIdentifier, [Letter, Digit] => LexerState::InIdentifier, Action::Append);
    MK_TRANSITION!(
        table,
        LexerState::InIdentifier,
        [Less, Equal, Greater, Symbol, Whitespace, Illegal, EndOfInput] => LexerState::Accept,
        Action::FinalizeWord
    );

    // Integer literals
    MK_TRANSITION!(table, LexerState::InNumber, [Digit] => LexerState::InNumber, Action::Append);
    MK_TRANSITION!(table, LexerState::InNumber, [Letter] => LexerState::Error, Action::Fail(FailReason::MalformedNumber));
    MK_TRANSITION!(
        table,
        LexerState::InNumber,
        [Less, Equal, Greater, Symbol, Whitespace, Illegal, EndOfInput] => LexerState::Accept,
        Action::FinalizeNumber
    );

    // `<`
    MK_TRANSITION!(
        table,
        LexerState::AfterLess,
        [Letter, Digit, Symbol, Whitespace, Illegal, EndOfInput] => LexerState::Accept,
        Action::FinalizeOperator { kind: TokenKind::Less, text: "<", push_back: true }
    );
    MK_TRANSITION!(
        table,
        LexerState::AfterLess,
        [Less, Equal, Greater] => LexerState::Error,
        Action::Fail(FailReason::IllegalOperator)
    );

    // `>`
    MK_TRANSITION!(
        table,
        LexerState::AfterGreater,
        [Letter, Digit, Symbol, Whitespace, Illegal, EndOfInput] => LexerState::Accept,
        Action::FinalizeOperator { kind: TokenKind::Greater, text: ">", push_back: true }
    );
    MK_TRANSITION!(
        table,
        LexerState::AfterGreater,
        [Less, Equal, Greater] => LexerState::Error,
        Action::Fail(FailReason::IllegalOperator)
    );

    // `=` and `==`
    MK_TRANSITION!(
        table,
        LexerState::AfterEqual,
        [Letter, Digit, Symbol, Whitespace, Illegal, EndOfInput] => LexerState::Accept,
        Action::FinalizeOperator { kind: TokenKind::Assignment, text: "=", push_back: true }
    );
    MK_TRANSITION!(
        table,
        LexerState::AfterEqual,
        [Equal] => LexerState::Accept,
        Action::FinalizeOperator { kind: TokenKind::Equals, text: "==", push_back: false }
    );
    MK_TRANSITION!(
        table,
        LexerState::AfterEqual,
        [Less, Greater] => LexerState::Error,
        Action::Fail(FailReason::IllegalOperator)
    );

    table
}
