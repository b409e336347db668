use crate::{lexer::tokens::Token, Span};

use super::{
    ast::{Expr, Node},
    statements::BlockStmt,
};

// LITERALS

/// Symbol Expression
/// Represents an identifier in the AST. This includes function names and parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub token: Token,
    pub value: String,
    pub span: Span,
}

impl Node for SymbolExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Integer Expression
/// Represents a 64-bit signed integer literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerExpr {
    pub token: Token,
    pub value: i64,
    pub span: Span,
}

impl Node for IntegerExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Boolean Expression
/// Represents `true` or `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanExpr {
    pub token: Token,
    pub value: bool,
    pub span: Span,
}

impl Node for BooleanExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

// COMPLEX

/// Prefix Expression
/// Represents `!operand` or `-operand`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: Token,
    pub right_expr: Box<Expr>,
    pub span: Span,
}

impl Node for PrefixExpr {
    fn token_literal(&self) -> &str {
        &self.operator.literal
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Infix Expression
/// Represents a binary arithmetic or comparison operation between two expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
    pub span: Span,
}

impl Node for InfixExpr {
    fn token_literal(&self) -> &str {
        &self.operator.literal
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Assignment Expression
/// Represents a compound assignment (`+=`, `-=`, `*=`, `/=`) to a named binding.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub assignee: SymbolExpr,
    pub operator: Token,
    pub value: Box<Expr>,
    pub span: Span,
}

impl AssignmentExpr {
    /// The arithmetic operator applied before storing, e.g. `+` for `+=`.
    pub fn arithmetic_operator(&self) -> &str {
        self.operator
            .literal
            .strip_suffix('=')
            .unwrap_or(&self.operator.literal)
    }
}

impl Node for AssignmentExpr {
    fn token_literal(&self) -> &str {
        &self.operator.literal
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// If Expression
/// `if (<condition>) { ... } else { ... }`; the alternative block is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub token: Token,
    pub condition: Box<Expr>,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
    pub span: Span,
}

impl Node for IfExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Function Expression
/// Represents a function literal `fn(a, b) { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpr {
    pub token: Token,
    pub parameters: Vec<SymbolExpr>,
    pub body: BlockStmt,
    pub span: Span,
}

impl Node for FunctionExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Call Expression
/// Represents a call of any expression, e.g. `add(1, 2)` or `fn(x) { x }(5)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    /// The opening `(`
    pub token: Token,
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

impl Node for CallExpr {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}
