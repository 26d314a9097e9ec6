use std::fmt::Display;

use super::tokens::LanguageTables;

/// Input alphabet of the automaton.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CharClass {
    Letter,
    Digit,
    Less,
    Equal,
    Greater,
    Symbol,
    Whitespace,
    Illegal,
    EndOfInput,
}

impl CharClass {
    pub const ALL: [CharClass; 9] = [
        CharClass::Letter,
        CharClass::Digit,
        CharClass::Less,
        CharClass::Equal,
        CharClass::Greater,
        CharClass::Symbol,
        CharClass::Whitespace,
        CharClass::Illegal,
        CharClass::EndOfInput,
    ];
}

impl Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Classifies the next input character, `None` meaning the source is exhausted.
///
/// Digits are checked before letters, and the relational characters before
/// the symbol table, so every character lands in exactly one class.
pub fn classify(ch: Option<char>, tables: &LanguageTables) -> CharClass {
    let Some(ch) = ch else {
        return CharClass::EndOfInput;
    };

    if ch.is_ascii_digit() {
        return CharClass::Digit;
    }
    if ch.is_alphabetic() {
        return CharClass::Letter;
    }

    match ch {
        '<' => CharClass::Less,
        '=' => CharClass::Equal,
        '>' => CharClass::Greater,
        c if tables.symbol(c).is_some() => CharClass::Symbol,
        c if tables.is_whitespace(c) => CharClass::Whitespace,
        _ => CharClass::Illegal,
    }
}
