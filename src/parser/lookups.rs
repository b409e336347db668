use crate::{ast::ast::Expr, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Assignment,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Prefix,
    Call,
}

pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower) -> Result<Expr, Error>;

/// Binding power of `kind` when it follows a complete operand.
///
/// Tokens that cannot continue an expression bind at `Default`, which ends
/// the infix loop.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        kind if kind.is_compound_assignment() => BindingPower::Assignment,

        TokenKind::Equals | TokenKind::NotEquals => BindingPower::Equality,

        TokenKind::Less
        | TokenKind::LessEquals
        | TokenKind::Greater
        | TokenKind::GreaterEquals => BindingPower::Relational,

        TokenKind::Plus | TokenKind::Dash => BindingPower::Additive,
        TokenKind::Star | TokenKind::Slash => BindingPower::Multiplicative,

        TokenKind::OpenParen => BindingPower::Call,

        _ => BindingPower::Default,
    }
}

/// Null denotation: the handler for a token that starts an expression.
pub fn nud_lookup(kind: TokenKind) -> Option<NUDHandler> {
    match kind {
        // Literals and symbols
        TokenKind::Integer
        | TokenKind::Identifier
        | TokenKind::True
        | TokenKind::False => Some(parse_primary_expr),

        TokenKind::Not | TokenKind::Dash => Some(parse_prefix_expr),
        TokenKind::OpenParen => Some(parse_grouping_expr),
        TokenKind::If => Some(parse_if_expr),
        TokenKind::Fn => Some(parse_fn_expr),
        _ => None,
    }
}

/// Left denotation: the handler for a token that continues an expression.
pub fn led_lookup(kind: TokenKind) -> Option<LEDHandler> {
    match kind {
        kind if kind.is_compound_assignment() => Some(parse_assignment_expr),

        // Equality and relational
        TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::LessEquals
        | TokenKind::Greater
        | TokenKind::GreaterEquals => Some(parse_binary_expr),

        // Additive and multiplicative
        TokenKind::Plus | TokenKind::Dash | TokenKind::Star | TokenKind::Slash => {
            Some(parse_binary_expr)
        }

        TokenKind::OpenParen => Some(parse_call_expr),
        _ => None,
    }
}
