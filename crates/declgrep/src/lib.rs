//! declgrep — find function and class-like declarations in a single C/C++
//! source file by name pattern, excluding symbols that are only pulled in
//! through included headers.
//!
//! The parsing frontend is the Clang driver's JSON AST dump, deserialized
//! with `clang-ast` and walked as a typed node tree. See [`SearchProvider`]
//! for the query surface.

pub mod ast;
pub mod cache;
pub mod error;
pub mod frontend;
pub mod query;
pub mod search;

pub use ast::{NodeKind, SyntaxTree, SyntaxTreeProvider};
pub use cache::ParseCache;
pub use error::{ParseError, PatternError};
pub use frontend::{AstFrontend, ClangFrontend};
pub use query::{CompiledPattern, MatchSpan, SameFileResolver, SymbolKind};
pub use search::{SearchProvider, SymbolMatch};
