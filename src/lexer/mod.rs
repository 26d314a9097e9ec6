//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a sequence of tokens for the downstream translator. It handles:
//!
//! - Character classification into the automaton's input alphabet
//! - The static transition table and its semantic actions
//! - Recognition of keywords, identifiers, integer literals, and operators
//! - Line/column tracking for every token and error

pub mod actions;
pub mod classifier;
pub mod lexer;
pub mod table;
pub mod tokens;
