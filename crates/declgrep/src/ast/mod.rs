//! Typed view of the Clang JSON AST and syntax tree ownership.

mod nodes;
mod tree;

pub use nodes::{Clang, DeclData, Node, NodeKind};
pub use tree::{SyntaxTree, SyntaxTreeProvider};
