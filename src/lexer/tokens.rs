use lazy_static::lazy_static;
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

use crate::Position;

lazy_static! {
    /// Default surface spellings of the reserved words.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("check", TokenKind::If);
        map.insert("notSuccess", TokenKind::Else);
        map.insert("repeatIf", TokenKind::While);
        map.insert("readFromFile", TokenKind::Read);
        map.insert("writeInFile", TokenKind::Write);
        map.insert("number", TokenKind::Int);
        map
    };

    pub static ref SYMBOL_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('+', TokenKind::Plus);
        map.insert('-', TokenKind::Dash);
        map.insert('/', TokenKind::Slash);
        map.insert('*', TokenKind::Star);
        map.insert('(', TokenKind::OpenParen);
        map.insert(')', TokenKind::CloseParen);
        map.insert('[', TokenKind::OpenBracket);
        map.insert(']', TokenKind::CloseBracket);
        map.insert(';', TokenKind::Semicolon);
        map.insert('{', TokenKind::OpenCurly);
        map.insert('}', TokenKind::CloseCurly);
        map
    };

    pub static ref DEFAULT_TABLES: LanguageTables = LanguageTables::default();
}

const WHITESPACE: [char; 4] = [' ', '\t', '\r', '\n'];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Less,
    Greater,

    Semicolon,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    If,
    Else,
    While,
    Read,
    Write,
    Int,
}

impl TokenKind {
    pub const KEYWORDS: [TokenKind; 6] = [
        TokenKind::If,
        TokenKind::Else,
        TokenKind::While,
        TokenKind::Read,
        TokenKind::Write,
        TokenKind::Int,
    ];

    pub fn is_keyword(&self) -> bool {
        TokenKind::KEYWORDS.contains(self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?} at {}", self.kind, self.value, self.position)
    }
}

impl Token {
    pub fn starts_at(&self) -> String {
        self.position.to_string()
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }
}

/// How `format_tokens` lays out a token listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingFormat {
    Plain,
    Table,
}

pub fn format_tokens(tokens: &[Token], format: ListingFormat) -> String {
    let mut out = String::new();

    match format {
        ListingFormat::Plain => {
            for token in tokens {
                out.push_str(&format!("{}\n", token));
            }
        }
        ListingFormat::Table => {
            let kind_width = tokens
                .iter()
                .map(|token| token.kind.to_string().len())
                .chain(std::iter::once("KIND".len()))
                .max()
                .unwrap_or(0);

            out.push_str(&format!("{:>4} {:>4}  {:<kind_width$}  VALUE\n", "LINE", "COL", "KIND"));
            for token in tokens {
                out.push_str(&format!(
                    "{:>4} {:>4}  {:<kind_width$}  {}\n",
                    token.line(),
                    token.column(),
                    token.kind.to_string(),
                    token.value
                ));
            }
        }
    }

    out
}

/// The data half of the language: keyword spellings, the single-character
/// symbol set and the characters the scanner skips.
///
/// Built once and shared by reference between lexers.
#[derive(Debug, Clone)]
pub struct LanguageTables {
    keywords: HashMap<String, TokenKind>,
    symbols: HashMap<char, TokenKind>,
    whitespace: HashSet<char>,
}

impl LanguageTables {
    /// Tables with the given keyword spellings and the default symbol set.
    pub fn with_keywords(keywords: HashMap<String, TokenKind>) -> Self {
        LanguageTables {
            keywords,
            symbols: SYMBOL_LOOKUP.clone(),
            whitespace: WHITESPACE.iter().copied().collect(),
        }
    }

    pub fn keyword(&self, word: &str) -> Option<TokenKind> {
        self.keywords.get(word).copied()
    }

    pub fn symbol(&self, ch: char) -> Option<TokenKind> {
        self.symbols.get(&ch).copied()
    }

    pub fn is_whitespace(&self, ch: char) -> bool {
        self.whitespace.contains(&ch)
    }

    /// Spelling currently bound to a keyword kind.
    pub fn spelling_of(&self, kind: TokenKind) -> Option<&str> {
        self.keywords
            .iter()
            .find(|(_, k)| **k == kind)
            .map(|(spelling, _)| spelling.as_str())
    }
}

impl Default for LanguageTables {
    fn default() -> Self {
        LanguageTables::with_keywords(
            RESERVED_LOOKUP
                .iter()
                .map(|(spelling, kind)| (spelling.to_string(), *kind))
                .collect(),
        )
    }
}
