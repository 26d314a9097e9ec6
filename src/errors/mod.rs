//! Error types and error handling for the lexer.
//!
//! This module defines the error types raised while tokenizing. It includes:
//!
//! - Error structures with line/column information
//! - Specific variants for each lexical failure
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
