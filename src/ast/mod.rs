/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program, statement and expression enums
/// - expressions: Expression nodes, operators and their constructors
/// - statements: Statement nodes and their constructors
/// - types: Type descriptors and the equality/cast/promotion rules
///
/// Nodes own their children directly; lists (program body, initializer
/// elements) are plain vectors. Nothing is mutated after construction.
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;

#[cfg(test)]
mod tests;
