//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Pull-based scanning, one token per call
//! - Recognition of keywords, identifiers, integers, and operators
//! - Token position tracking for error reporting
//! - Illegal characters, which become tokens rather than failures

pub mod lexer;
pub mod tokens;
