use std::slice::Iter;

use crate::{lexer::tokens::Token, Span};

use super::{
    ast::{Expr, Node, Stmt},
    expressions::SymbolExpr,
};

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub token: Token,
    pub name: SymbolExpr,
    pub value: Expr,
    pub span: Span,
}

impl Node for LetStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Expr,
    pub span: Span,
}

impl Node for ReturnStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// A bare expression used as a statement, e.g. `add(1, 2);`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    /// First token of the expression
    pub token: Token,
    pub expression: Expr,
    pub span: Span,
}

impl Node for ExpressionStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    /// The opening `{`
    pub token: Token,
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

impl Node for BlockStmt {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}
