use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Decides whether a node's reported defining file is the queried file.
///
/// A declaration visited while walking file A's tree may actually be spelled
/// in an included header; this resolver is the guard against misattributing
/// such symbols to file A. Comparison uses canonical (absolute,
/// symlink-resolved) identity, never string equality of paths.
///
/// The query file is resolved once at construction; per-node verdicts are
/// memoized for the lifetime of the query.
pub struct SameFileResolver {
    target: Option<PathBuf>,
    verdicts: HashMap<String, bool>,
}

impl SameFileResolver {
    pub fn new(query_file: &Path) -> Self {
        Self {
            target: query_file.canonicalize().ok(),
            verdicts: HashMap::new(),
        }
    }

    /// `true` iff `node_file` denotes the same on-disk file as the query
    /// target. Empty or unresolvable paths are never the same file.
    pub fn same_file(
        &mut self,
        node_file: &str,
    ) -> bool {
        if node_file.is_empty() {
            return false;
        }
        let Some(target) = self.target.as_deref() else {
            return false;
        };
        if let Some(&verdict) = self.verdicts.get(node_file) {
            return verdict;
        }
        let verdict = match Path::new(node_file).canonicalize() {
            Ok(canonical) => canonical == target,
            Err(_) => false,
        };
        self.verdicts.insert(node_file.to_owned(), verdict);
        verdict
    }
}

#[cfg(test)]
#[path = "../../tests/src/query/same_file_tests.rs"]
mod tests;
