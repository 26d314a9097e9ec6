//! Utility macros for the lexer.
//!
//! This module defines helper macros used by the lexer implementation:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_TRANSITION!` - Registers one transition for a group of character classes
//!
//! These macros reduce boilerplate when building tokens and the transition table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's literal text
/// * `$position` - Line/column of the token's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), Position::start());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}

/// Inserts the same `(next state, action)` cell for every listed character
/// class of one automaton state.
///
/// # Example
///
/// ```ignore
/// MK_TRANSITION!(table, LexerState::InNumber, [CharClass::Digit] => LexerState::InNumber, Action::Append);
/// ```
#[macro_export]
macro_rules! MK_TRANSITION {
    ($table:expr, $state:expr, [$($class:expr),+ $(,)?] => $next:expr, $action:expr) => {
        $(
            $table.insert(
                ($state, $class),
                $crate::lexer::table::Transition {
                    next: $next,
                    action: $action,
                },
            );
        )+
    };
}
