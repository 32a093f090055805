use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::ast::Node;
use crate::error::ParseError;
use crate::frontend::AstFrontend;

/// A parsed source file's declaration tree.
///
/// Owns the deserialized node graph; dropping the tree releases it. A tree is
/// either transient (built for one query, dropped when the query finishes) or
/// owned by the [`ParseCache`](crate::cache::ParseCache) until replacement.
pub struct SyntaxTree {
    root: Node,
}

impl SyntaxTree {
    pub fn root(&self) -> &Node {
        &self.root
    }
}

/// Turns source files into [`SyntaxTree`]s via an [`AstFrontend`].
///
/// The frontend is injected at construction so tests can substitute an
/// in-memory dump for the real compiler.
pub struct SyntaxTreeProvider {
    frontend: Arc<dyn AstFrontend>,
}

impl SyntaxTreeProvider {
    pub fn new(frontend: Arc<dyn AstFrontend>) -> Self {
        Self {
            frontend,
        }
    }

    /// Parse `path` with default compilation flags.
    pub fn parse(
        &self,
        path: &Path,
    ) -> Result<SyntaxTree, ParseError> {
        let json = self.frontend.ast_dump(path)?;
        let root = serde_json::from_str::<Node>(&json).map_err(|source| ParseError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("[parse] built syntax tree for {}", path.display());
        Ok(SyntaxTree {
            root,
        })
    }
}
