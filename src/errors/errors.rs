use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorImpl::MalformedNumericLiteral { .. } => "MalformedNumericLiteral",
            ErrorImpl::IllegalOperatorSequence { .. } => "IllegalOperatorSequence",
            ErrorImpl::MissingTransition { .. } => "MissingTransition",
            ErrorImpl::InvalidConfiguration { .. } => "InvalidConfiguration",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { character } => ErrorTip::Suggestion(format!(
                "character `{}` is not part of the language",
                character.escape_default()
            )),
            ErrorImpl::MalformedNumericLiteral { literal, character } => {
                ErrorTip::Suggestion(format!(
                    "`{}` is not a number, separate the digits from `{}`",
                    literal, character
                ))
            }
            ErrorImpl::IllegalOperatorSequence { sequence } => ErrorTip::Suggestion(format!(
                "`{}` is not an operator, did you mean `==`?",
                sequence
            )),
            ErrorImpl::MissingTransition { .. } => ErrorTip::None,
            ErrorImpl::InvalidConfiguration { message } => ErrorTip::Suggestion(message.clone()),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Error: {}, at line: {}, column: {}",
            self.internal_error, self.position.line, self.position.column
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("illegal character: {character:?}")]
    IllegalCharacter { character: char },
    #[error("illegal character inside numeric literal: {literal:?}")]
    MalformedNumericLiteral { literal: String, character: char },
    #[error("illegal operator sequence: {sequence:?}")]
    IllegalOperatorSequence { sequence: String },
    #[error("no transition from state {state} on {class}")]
    MissingTransition { state: String, class: String },
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}
