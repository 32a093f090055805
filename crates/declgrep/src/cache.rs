use std::path::{Path, PathBuf};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use dashmap::mapref::one::Ref;
use tracing::debug;

use crate::ast::{SyntaxTree, SyntaxTreeProvider};
use crate::error::ParseError;

/// Process-wide cache of parsed syntax trees, keyed by canonical file path.
///
/// Keys are symlink-resolved where possible, so two spellings of one file
/// share a single entry and a single parsed tree. There is no expiry and no
/// invalidation on file modification: a cached tree is used verbatim until
/// it is replaced via [`force_index`](Self::force_index) or dropped via
/// [`remove`](Self::remove)/[`clear`](Self::clear) — staleness is the
/// caller's responsibility.
#[derive(Default)]
pub struct ParseCache {
    trees: DashMap<PathBuf, SyntaxTree>,
}

impl ParseCache {
    pub fn new() -> Self {
        Self {
            trees: DashMap::new(),
        }
    }

    fn key(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
    }

    /// Return the cached tree for `path`, parsing and caching it first if
    /// absent. The vacant-entry lock is held across the parse, so concurrent
    /// callers never build the same file twice.
    pub fn get_or_build(
        &self,
        path: &Path,
        provider: &SyntaxTreeProvider,
    ) -> Result<Ref<'_, PathBuf, SyntaxTree>, ParseError> {
        match self.trees.entry(Self::key(path)) {
            Entry::Occupied(entry) => {
                debug!("[parse-cache] hit {}", path.display());
                Ok(entry.into_ref().downgrade())
            },
            Entry::Vacant(slot) => {
                let tree = provider.parse(path)?;
                Ok(slot.insert(tree).downgrade())
            },
        }
    }

    /// Always (re)parse `path` and store the result, replacing any existing
    /// entry. The replaced tree is dropped here.
    pub fn force_index(
        &self,
        path: &Path,
        provider: &SyntaxTreeProvider,
    ) -> Result<(), ParseError> {
        let tree = provider.parse(path)?;
        self.trees.insert(Self::key(path), tree);
        debug!("[parse-cache] indexed {}", path.display());
        Ok(())
    }

    /// Drop the entry for `path`, if any. Returns whether one was present.
    pub fn remove(
        &self,
        path: &Path,
    ) -> bool {
        self.trees.remove(&Self::key(path)).is_some()
    }

    /// Drop every cached tree.
    pub fn clear(&self) {
        self.trees.clear();
    }

    pub fn contains(
        &self,
        path: &Path,
    ) -> bool {
        self.trees.contains_key(&Self::key(path))
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/src/cache_tests.rs"]
mod tests;
