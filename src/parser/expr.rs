use crate::{
    ast::{
        ast::{Expr, Node},
        expressions::{
            AssignmentExpr, BooleanExpr, CallExpr, FunctionExpr, IfExpr, InfixExpr, IntegerExpr,
            PrefixExpr, SymbolExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    lookups::{binding_power, led_lookup, nud_lookup, BindingPower},
    parser::Parser,
    stmt::parse_block_stmt,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.enter_nesting()?;
    let expr = parse_nested_expr(parser, bp);
    parser.leave_nesting();

    expr
}

fn parse_nested_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let Some(nud) = nud_lookup(parser.current_token_kind()) else {
        return Err(no_prefix_error(parser));
    };

    let mut left = nud(parser)?;

    // While the next token binds tighter than the caller, keep extending lhs
    while binding_power(parser.current_token_kind()) > bp {
        let token_kind = parser.current_token_kind();
        let Some(led) = led_lookup(token_kind) else {
            break;
        };

        left = led(parser, left, binding_power(token_kind))?;
    }

    Ok(left)
}

fn no_prefix_error(parser: &Parser) -> Error {
    let token = parser.current_token();

    let error_impl = if token.kind == TokenKind::Illegal {
        ErrorImpl::IllegalCharacter {
            token: token.literal.clone(),
        }
    } else {
        ErrorImpl::NoPrefixParseFn {
            kind: token.kind,
            token: token.literal.clone(),
        }
    };

    Error::new(error_impl, parser.get_position())
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance();
    let span = token.span.clone();

    match token.kind {
        TokenKind::Integer => match token.literal.parse::<i64>() {
            Ok(value) => Ok(Expr::Integer(IntegerExpr { token, value, span })),
            Err(_) => Err(Error::new(
                ErrorImpl::NumberParseError {
                    token: token.literal.clone(),
                },
                span.start,
            )),
        },
        TokenKind::Identifier => Ok(Expr::Symbol(SymbolExpr {
            value: token.literal.clone(),
            token,
            span,
        })),
        TokenKind::True | TokenKind::False => Ok(Expr::Boolean(BooleanExpr {
            value: token.kind == TokenKind::True,
            token,
            span,
        })),
        _ => Err(Error::new(
            ErrorImpl::NoPrefixParseFn {
                kind: token.kind,
                token: token.literal.clone(),
            },
            span.start,
        )),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let rhs = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        span: Span {
            start: operator_token.span.start.clone(),
            end: rhs.get_span().end.clone(),
        },
        operator: operator_token,
        right_expr: Box::new(rhs),
    }))
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left: Box::new(left),
        operator: operator_token,
        right: Box::new(right),
    }))
}

/// Compound assignment. The target must be a plain identifier, and the value
/// is parsed at `Default` so that `a += b += c` groups to the right.
pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    let assignee = match left {
        Expr::Symbol(symbol) => symbol,
        other => {
            return Err(Error::new(
                ErrorImpl::InvalidAssignmentTarget {
                    token: other.token_literal().to_string(),
                },
                other.get_span().start.clone(),
            ))
        }
    };

    let operator_token = parser.advance();
    let rhs = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::Assignment(Box::new(AssignmentExpr {
        span: Span {
            start: assignee.span.start.clone(),
            end: rhs.get_span().end.clone(),
        },
        assignee,
        operator: operator_token,
        value: Box::new(rhs),
    })))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance();

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.skip(TokenKind::Else) {
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(Expr::If(Box::new(IfExpr {
        span: Span {
            start: token.span.start.clone(),
            end: parser.get_last_end(),
        },
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    })))
}

pub fn parse_fn_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance();

    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            let name = parser.expect(TokenKind::Identifier)?;
            parameters.push(SymbolExpr {
                value: name.literal.clone(),
                span: name.span.clone(),
                token: name,
            });

            if !parser.skip(TokenKind::Comma) {
                break;
            }
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let body = parse_block_stmt(parser)?;

    Ok(Expr::Function(Box::new(FunctionExpr {
        span: Span {
            start: token.span.start.clone(),
            end: parser.get_last_end(),
        },
        token,
        parameters,
        body,
    })))
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let token = parser.advance();

    let mut arguments = vec![];
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            arguments.push(parse_expr(parser, BindingPower::Default)?);

            if !parser.skip(TokenKind::Comma) {
                break;
            }
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Call(CallExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: parser.get_last_end(),
        },
        token,
        callee: Box::new(left),
        arguments,
    }))
}
