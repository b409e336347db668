//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program entry points.
//! The parser pulls tokens from a [`Lexer`] into a two-token buffer
//! (current and peek). Statements are parsed by recursive descent in
//! `stmt`, expressions by the Pratt parser in `expr`.
//!
//! Handlers return `Result`; a failed statement is recorded and the parser
//! skips ahead to the next statement boundary, so one mistake does not hide
//! the ones after it.

use std::mem;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::stmt::parse_stmt;

/// Deepest expression or block nesting accepted before parsing gives up.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens
    lexer: Lexer,
    /// Next token to be consumed
    current: Token,
    /// One token of lookahead past `current`
    peek: Token,
    /// End of the most recently consumed token
    last_end: Position,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    /// Expressions and blocks currently open
    depth: usize,
}

impl Parser {
    /// Creates a new Parser, priming the lookahead buffer from `lexer`.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Parser {
            lexer,
            last_end: current.span.start.clone(),
            current,
            peek,
            errors: vec![],
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the token after the current one.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Advances to the next token and returns the previous current token.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let peek = mem::replace(&mut self.peek, next);
        let consumed = mem::replace(&mut self.current, peek);

        self.last_end = consumed.span.end.clone();
        consumed
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// Returns the consumed token if the current token matches, otherwise
    /// the given error (or an `UnexpectedToken` error) and consumes nothing.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        if self.current.kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        expected: expected_kind,
                        found: self.current.kind,
                        token: self.current.literal.clone(),
                    },
                    self.get_position(),
                )),
            }
        } else {
            Ok(self.advance())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Consumes the current token if it is of the given kind.
    pub fn skip(&mut self, kind: TokenKind) -> bool {
        if self.current.kind == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true until the current token is EOF.
    pub fn has_tokens(&self) -> bool {
        self.current.kind != TokenKind::EOF
    }

    /// Returns the start position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Returns the end position of the last consumed token.
    pub fn get_last_end(&self) -> Position {
        self.last_end.clone()
    }

    /// Opens one level of nesting, failing past [`MAX_NESTING_DEPTH`].
    ///
    /// Every successful call must be paired with [`Parser::leave_nesting`].
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Records a diagnostic without interrupting parsing.
    pub fn record(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// Skips to the next statement boundary after an error.
    ///
    /// Stops after a `;` or before a `}` that is not matched by a `{` skipped
    /// on the way, or at EOF.
    pub fn synchronize(&mut self) {
        let mut depth = 0usize;

        while self.has_tokens() {
            match self.current.kind {
                TokenKind::Semicolon if depth == 0 => {
                    self.advance();
                    return;
                }
                TokenKind::CloseCurly if depth == 0 => return,
                TokenKind::CloseCurly => depth -= 1,
                TokenKind::OpenCurly => depth += 1,
                _ => {}
            }
            self.advance();
        }
    }

    /// Parses statements until EOF.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.has_tokens() {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    self.record(error);
                    self.synchronize();

                    // A `}` with no block to close it.
                    if self.current.kind == TokenKind::CloseCurly {
                        self.advance();
                    }
                }
            }
        }

        program
    }

    /// Diagnostics found so far, as human readable messages.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Diagnostics found so far, with their positions.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    /// Consumes the parser, returning its diagnostics.
    pub fn into_diagnostics(self) -> Vec<Error> {
        self.errors
    }
}

/// Parses `source` into a program.
///
/// This is the main entry point for parsing. It creates a lexer and parser
/// for the source and parses all statements until EOF.
///
/// # Arguments
///
/// * `source` - The source text
/// * `file` - Name used in positions, `"shell"` when not given
///
/// # Returns
///
/// A tuple containing the program (possibly missing the statements that
/// failed) and every diagnostic in source order.
pub fn parse(source: &str, file: Option<String>) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    (program, parser.into_diagnostics())
}
