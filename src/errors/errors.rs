use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone, PartialEq)]
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
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::InvalidAssignmentTarget { .. } => "InvalidAssignmentTarget",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, found: TokenKind::EOF, .. } => {
                ErrorTip::Suggestion(format!(
                    "Input ended while expecting {}, is something left unclosed?",
                    expected
                ))
            }
            ErrorImpl::UnexpectedToken { token, .. } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a separator?",
                token
            )),
            ErrorImpl::NoPrefixParseFn { token, .. } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                token
            )),
            ErrorImpl::IllegalCharacter { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::InvalidAssignmentTarget { .. } => ErrorTip::Suggestion(String::from(
                "Only identifiers can be assigned to",
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "Split the expression into smaller `let` bindings",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
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

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        token: String,
    },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind, token: String },
    #[error("illegal character {token:?}")]
    IllegalCharacter { token: String },
    #[error("could not parse {token:?} as integer")]
    NumberParseError { token: String },
    #[error("invalid assignment target: {token:?}")]
    InvalidAssignmentTarget { token: String },
    #[error("nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: usize },
}
