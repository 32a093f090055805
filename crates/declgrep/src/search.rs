use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::ast::SyntaxTreeProvider;
use crate::cache::ParseCache;
use crate::error::PatternError;
use crate::frontend::{AstFrontend, ClangFrontend};
use crate::query::{CompiledPattern, MatchSpan, RawCandidate, SameFileResolver, SymbolKind, collect};

/// A declaration whose name matched the query pattern.
///
/// `line`/`col` are 1-based source positions of the declaration's identifier
/// token; `span` is the matched sub-range within `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolMatch {
    pub name: String,
    pub line: u32,
    pub col: u32,
    pub span: MatchSpan,
}

/// Entry point for declaration searches against single source files.
///
/// Owns the syntax tree provider and the parse cache; one instance is meant
/// to be shared across queries (and threads) for the life of the process.
pub struct SearchProvider {
    provider: SyntaxTreeProvider,
    cache: ParseCache,
}

impl Default for SearchProvider {
    fn default() -> Self {
        Self::new(Arc::new(ClangFrontend::default()))
    }
}

impl SearchProvider {
    pub fn new(frontend: Arc<dyn AstFrontend>) -> Self {
        Self {
            provider: SyntaxTreeProvider::new(frontend),
            cache: ParseCache::new(),
        }
    }

    /// Find function declarations in `file` whose name matches `pattern`.
    ///
    /// A file that cannot be parsed yields an empty result set, not an
    /// error; a malformed pattern is an error regardless of cache mode.
    pub fn find_functions(
        &self,
        file: &Path,
        pattern: &str,
        use_cache: bool,
    ) -> Result<Vec<SymbolMatch>, PatternError> {
        self.find(SymbolKind::Function, file, pattern, use_cache)
    }

    /// Find class, struct and class template declarations in `file` whose
    /// name matches `pattern`.
    pub fn find_classlike(
        &self,
        file: &Path,
        pattern: &str,
        use_cache: bool,
    ) -> Result<Vec<SymbolMatch>, PatternError> {
        self.find(SymbolKind::ClassLike, file, pattern, use_cache)
    }

    /// Parse `file` now and (re)place it in the cache. Returns whether the
    /// parse succeeded.
    pub fn index_file(
        &self,
        file: &Path,
    ) -> bool {
        match self.cache.force_index(file, &self.provider) {
            Ok(()) => true,
            Err(err) => {
                warn!("[index] {err}");
                false
            },
        }
    }

    /// Drop the cached tree for `file`, if any.
    pub fn evict(
        &self,
        file: &Path,
    ) -> bool {
        self.cache.remove(file)
    }

    /// Drop every cached tree.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    fn find(
        &self,
        kind: SymbolKind,
        file: &Path,
        pattern: &str,
        use_cache: bool,
    ) -> Result<Vec<SymbolMatch>, PatternError> {
        // Compile before touching the parser or the cache: an invalid
        // pattern aborts the whole query with nothing matched.
        let compiled = CompiledPattern::new(pattern)?;
        let mut resolver = SameFileResolver::new(file);
        let kinds = kind.node_kinds();

        let candidates = if use_cache {
            match self.cache.get_or_build(file, &self.provider) {
                Ok(tree) => collect(&tree, kinds, &mut resolver),
                Err(err) => {
                    warn!("[find] {err}");
                    return Ok(Vec::new());
                },
            }
        } else {
            // The fresh tree is dropped as soon as traversal finishes.
            match self.provider.parse(file) {
                Ok(tree) => collect(&tree, kinds, &mut resolver),
                Err(err) => {
                    warn!("[find] {err}");
                    return Ok(Vec::new());
                },
            }
        };

        Ok(candidates
            .into_iter()
            .filter_map(|candidate| to_match(candidate, &compiled))
            .collect())
    }
}

fn to_match(
    candidate: RawCandidate,
    pattern: &CompiledPattern,
) -> Option<SymbolMatch> {
    let span = pattern.find(&candidate.name)?;
    Some(SymbolMatch {
        name: candidate.name,
        line: candidate.line,
        col: candidate.col,
        span,
    })
}
