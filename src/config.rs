//! Keyword spelling configuration.
//!
//! Keyword spellings are data rather than grammar: a TOML file may rebind any
//! of them, and the result is turned into a [`LanguageTables`] that the lexer
//! borrows.
//!
//! ```toml
//! [keywords]
//! if = "check"
//! while = "repeatIf"
//! ```

use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{LanguageTables, TokenKind},
    Position,
};

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LexerConfig {
    #[serde(default)]
    pub keywords: KeywordSpellings,
}

/// Surface spelling of every reserved word.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct KeywordSpellings {
    #[serde(rename = "if", default = "default_if")]
    pub if_: String,
    #[serde(rename = "else", default = "default_else")]
    pub else_: String,
    #[serde(rename = "while", default = "default_while")]
    pub while_: String,
    #[serde(default = "default_read")]
    pub read: String,
    #[serde(default = "default_write")]
    pub write: String,
    #[serde(default = "default_int")]
    pub int: String,
}

fn default_if() -> String {
    "check".to_string()
}

fn default_else() -> String {
    "notSuccess".to_string()
}

fn default_while() -> String {
    "repeatIf".to_string()
}

fn default_read() -> String {
    "readFromFile".to_string()
}

fn default_write() -> String {
    "writeInFile".to_string()
}

fn default_int() -> String {
    "number".to_string()
}

impl Default for KeywordSpellings {
    fn default() -> Self {
        KeywordSpellings {
            if_: default_if(),
            else_: default_else(),
            while_: default_while(),
            read: default_read(),
            write: default_write(),
            int: default_int(),
        }
    }
}

fn config_error(message: String) -> Error {
    Error::new(ErrorImpl::InvalidConfiguration { message }, Position::null())
}

impl KeywordSpellings {
    fn entries(&self) -> [(&str, TokenKind); 6] {
        [
            (self.if_.as_str(), TokenKind::If),
            (self.else_.as_str(), TokenKind::Else),
            (self.while_.as_str(), TokenKind::While),
            (self.read.as_str(), TokenKind::Read),
            (self.write.as_str(), TokenKind::Write),
            (self.int.as_str(), TokenKind::Int),
        ]
    }

    /// Checks that every spelling scans as a single word and that no two
    /// keywords share one.
    pub fn validate(&self) -> Result<(), Error> {
        let mut seen: HashMap<&str, TokenKind> = HashMap::new();

        for (spelling, kind) in self.entries() {
            let mut chars = spelling.chars();
            match chars.next() {
                None => {
                    return Err(config_error(format!("spelling of `{}` must not be empty", kind)))
                }
                Some(first) if !first.is_alphabetic() => {
                    return Err(config_error(format!(
                        "spelling `{}` of `{}` must start with a letter",
                        spelling, kind
                    )))
                }
                _ => {}
            }

            if !chars.all(|c| c.is_alphabetic() || c.is_ascii_digit()) {
                return Err(config_error(format!(
                    "spelling `{}` of `{}` may only contain letters and digits",
                    spelling, kind
                )));
            }

            if let Some(other) = seen.insert(spelling, kind) {
                return Err(config_error(format!(
                    "`{}` and `{}` are both spelled `{}`",
                    other, kind, spelling
                )));
            }
        }

        Ok(())
    }
}

impl LexerConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, Error> {
        let config: LexerConfig =
            toml::from_str(contents).map_err(|e| config_error(e.to_string()))?;
        config.keywords.validate()?;
        Ok(config)
    }

    pub fn into_tables(self) -> LanguageTables {
        LanguageTables::with_keywords(
            self.keywords
                .entries()
                .iter()
                .map(|(spelling, kind)| (spelling.to_string(), *kind))
                .collect(),
        )
    }
}

/// Loads a keyword override file and builds the language tables from it.
pub fn load_tables(path: &Path) -> Result<LanguageTables, Error> {
    let contents = fs::read_to_string(path)
        .map_err(|e| config_error(format!("failed to read {}: {}", path.display(), e)))?;

    let config = LexerConfig::from_toml_str(&contents)?;
    log::info!("loaded keyword spellings from {}", path.display());
    Ok(config.into_tables())
}
