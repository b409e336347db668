use crate::Span;

use super::{
    expressions::{
        AssignmentExpr, BooleanExpr, CallExpr, FunctionExpr, IfExpr, InfixExpr, IntegerExpr,
        PrefixExpr, SymbolExpr,
    },
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
};

/// Node Trait
///
/// Behaviour shared by every node of the tree, statements and expressions alike.
pub trait Node {
    /// Returns the literal of the token the node was built from.
    fn token_literal(&self) -> &str;
    /// Returns the span of the node.
    fn get_span(&self) -> &Span;
}

/// Statement
///
/// The closed set of statement kinds. Statements own their sub-expressions.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
    Block(BlockStmt),
}

impl Node for Stmt {
    fn token_literal(&self) -> &str {
        match self {
            Stmt::Let(stmt) => stmt.token_literal(),
            Stmt::Return(stmt) => stmt.token_literal(),
            Stmt::Expression(stmt) => stmt.token_literal(),
            Stmt::Block(stmt) => stmt.token_literal(),
        }
    }
    fn get_span(&self) -> &Span {
        match self {
            Stmt::Let(stmt) => stmt.get_span(),
            Stmt::Return(stmt) => stmt.get_span(),
            Stmt::Expression(stmt) => stmt.get_span(),
            Stmt::Block(stmt) => stmt.get_span(),
        }
    }
}

/// Expression
///
/// The closed set of expression kinds. Grouping parentheses leave no node behind.
/// Variants with large payloads are boxed so recursive parse frames stay small.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Symbol(SymbolExpr),
    Integer(IntegerExpr),
    Boolean(BooleanExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    Assignment(Box<AssignmentExpr>),
    If(Box<IfExpr>),
    Function(Box<FunctionExpr>),
    Call(CallExpr),
}

impl Node for Expr {
    fn token_literal(&self) -> &str {
        match self {
            Expr::Symbol(expr) => expr.token_literal(),
            Expr::Integer(expr) => expr.token_literal(),
            Expr::Boolean(expr) => expr.token_literal(),
            Expr::Prefix(expr) => expr.token_literal(),
            Expr::Infix(expr) => expr.token_literal(),
            Expr::Assignment(expr) => expr.token_literal(),
            Expr::If(expr) => expr.token_literal(),
            Expr::Function(expr) => expr.token_literal(),
            Expr::Call(expr) => expr.token_literal(),
        }
    }
    fn get_span(&self) -> &Span {
        match self {
            Expr::Symbol(expr) => expr.get_span(),
            Expr::Integer(expr) => expr.get_span(),
            Expr::Boolean(expr) => expr.get_span(),
            Expr::Prefix(expr) => expr.get_span(),
            Expr::Infix(expr) => expr.get_span(),
            Expr::Assignment(expr) => expr.get_span(),
            Expr::If(expr) => expr.get_span(),
            Expr::Function(expr) => expr.get_span(),
            Expr::Call(expr) => expr.get_span(),
        }
    }
}

/// Program
///
/// Root of the tree, owning every top-level statement in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    /// Literal of the first statement's token, or an empty string for an empty program.
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
