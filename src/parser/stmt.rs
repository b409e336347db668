use crate::{
    ast::{
        ast::Stmt,
        expressions::SymbolExpr,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let_stmt(parser),
        TokenKind::Return => parse_return_stmt(parser),
        TokenKind::OpenCurly => Ok(Stmt::Block(parse_block_stmt(parser)?)),
        _ => parse_expression_stmt(parser),
    }
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Default)?;

    // Trailing semicolon is optional so one-liners like `x + 1` parse.
    parser.skip(TokenKind::Semicolon);

    Ok(Stmt::Expression(ExpressionStmt {
        span: Span {
            start: token.span.start.clone(),
            end: parser.get_last_end(),
        },
        token,
        expression,
    }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.advance();

    let name = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assignment)?;

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.skip(TokenKind::Semicolon);

    Ok(Stmt::Let(LetStmt {
        span: Span {
            start: token.span.start.clone(),
            end: parser.get_last_end(),
        },
        token,
        name: SymbolExpr {
            value: name.literal.clone(),
            span: name.span.clone(),
            token: name,
        },
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.skip(TokenKind::Semicolon);

    Ok(Stmt::Return(ReturnStmt {
        span: Span {
            start: token.span.start.clone(),
            end: parser.get_last_end(),
        },
        token,
        value,
    }))
}

/// `{ stmt* }`
///
/// A failing statement inside the block is recorded and skipped; only a
/// missing `{` or `}` fails the block itself.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    parser.enter_nesting()?;
    let block = parse_block_body(parser);
    parser.leave_nesting();

    block
}

fn parse_block_body(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let token = parser.expect(TokenKind::OpenCurly)?;

    let mut body = Vec::new();
    while parser.has_tokens() && parser.current_token_kind() != TokenKind::CloseCurly {
        match parse_stmt(parser) {
            Ok(stmt) => body.push(stmt),
            Err(error) => {
                parser.record(error);
                parser.synchronize();
            }
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(BlockStmt {
        span: Span {
            start: token.span.start.clone(),
            end: parser.get_last_end(),
        },
        token,
        body,
    })
}
