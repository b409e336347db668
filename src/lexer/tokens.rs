use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Fn);
        map.insert("let", TokenKind::Let);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("return", TokenKind::Return);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,
    Identifier,
    Integer,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Semicolon,
    Comma,

    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Fn,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl TokenKind {
    /// Looks up the kind of an identifier-shaped lexeme.
    pub fn lookup_identifier(identifier: &str) -> TokenKind {
        RESERVED_LOOKUP
            .get(identifier)
            .copied()
            .unwrap_or(TokenKind::Identifier)
    }

    pub fn is_compound_assignment(&self) -> bool {
        matches!(
            self,
            TokenKind::PlusEquals
                | TokenKind::MinusEquals
                | TokenKind::StarEquals
                | TokenKind::SlashEquals
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::Integer | TokenKind::Illegal => {
                write!(f, "{} ({})", self.kind, self.literal)
            }
            _ => write!(f, "{} ()", self.kind),
        }
    }
}
