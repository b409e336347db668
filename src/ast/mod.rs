/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Core AST definitions, the `Node` trait and the `Program` root
/// - expressions: Definitions for the expression kinds
/// - statements: Definitions for the statement kinds
pub mod ast;
pub mod expressions;
pub mod statements;
