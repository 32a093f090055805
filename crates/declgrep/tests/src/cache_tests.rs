use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::json;

use super::*;
use crate::frontend::AstFrontend;

struct CountingDump {
    dump: Option<String>,
    parses: AtomicUsize,
}

impl CountingDump {
    fn new(dump: Option<String>) -> Arc<Self> {
        Arc::new(Self {
            dump,
            parses: AtomicUsize::new(0),
        })
    }

    fn parse_count(&self) -> usize {
        self.parses.load(Ordering::SeqCst)
    }
}

impl AstFrontend for CountingDump {
    fn ast_dump(
        &self,
        path: &Path,
    ) -> Result<String, ParseError> {
        self.parses.fetch_add(1, Ordering::SeqCst);
        self.dump.clone().ok_or_else(|| ParseError::NoTree {
            path: path.to_path_buf(),
        })
    }
}

fn empty_dump() -> Option<String> {
    Some(json!({ "id": "0x1", "kind": "TranslationUnitDecl", "loc": {} }).to_string())
}

fn source_file() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = dir.path().join("main.cpp");
    std::fs::write(&file, "").expect("write source");
    (dir, file)
}

#[test]
fn get_or_build_parses_once_per_file() {
    let (_dir, file) = source_file();
    let frontend = CountingDump::new(empty_dump());
    let provider = SyntaxTreeProvider::new(frontend.clone());
    let cache = ParseCache::new();

    {
        let first = cache.get_or_build(&file, &provider).expect("first build");
        drop(first);
    }
    let second = cache.get_or_build(&file, &provider).expect("cache hit");
    drop(second);

    assert_eq!(frontend.parse_count(), 1);
    assert_eq!(cache.len(), 1);
}

#[test]
fn cache_key_is_canonical_across_path_spellings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let sub = dir.path().join("sub");
    std::fs::create_dir(&sub).expect("mkdir");
    let file = dir.path().join("main.cpp");
    std::fs::write(&file, "").expect("write source");
    let spelled = sub.join("..").join("main.cpp");

    let frontend = CountingDump::new(empty_dump());
    let provider = SyntaxTreeProvider::new(frontend.clone());
    let cache = ParseCache::new();

    drop(cache.get_or_build(&file, &provider).expect("build"));
    drop(cache.get_or_build(&spelled, &provider).expect("hit via other spelling"));

    assert_eq!(frontend.parse_count(), 1);
    assert_eq!(cache.len(), 1);
}

#[test]
fn force_index_always_reparses_and_replaces() {
    let (_dir, file) = source_file();
    let frontend = CountingDump::new(empty_dump());
    let provider = SyntaxTreeProvider::new(frontend.clone());
    let cache = ParseCache::new();

    cache.force_index(&file, &provider).expect("first index");
    cache.force_index(&file, &provider).expect("reindex");
    assert_eq!(frontend.parse_count(), 2);
    assert_eq!(cache.len(), 1);

    drop(cache.get_or_build(&file, &provider).expect("hit"));
    assert_eq!(frontend.parse_count(), 2);
}

#[test]
fn parse_failure_caches_nothing() {
    let (_dir, file) = source_file();
    let frontend = CountingDump::new(None);
    let provider = SyntaxTreeProvider::new(frontend.clone());
    let cache = ParseCache::new();

    assert!(cache.get_or_build(&file, &provider).is_err());
    assert!(cache.force_index(&file, &provider).is_err());
    assert!(cache.is_empty());
}

#[test]
fn remove_and_clear_drop_entries() {
    let (_dir, file) = source_file();
    let frontend = CountingDump::new(empty_dump());
    let provider = SyntaxTreeProvider::new(frontend.clone());
    let cache = ParseCache::new();

    cache.force_index(&file, &provider).expect("index");
    assert!(cache.contains(&file));
    assert!(cache.remove(&file));
    assert!(!cache.remove(&file));
    assert!(!cache.contains(&file));

    cache.force_index(&file, &provider).expect("index again");
    cache.clear();
    assert!(cache.is_empty());
}
