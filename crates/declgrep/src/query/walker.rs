use crate::ast::{Clang, Node, NodeKind, SyntaxTree};
use crate::query::same_file::SameFileResolver;

/// A declaration that passed kind and same-file filtering, pending pattern
/// matching. `line`/`col` are 1-based, as reported by the frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCandidate {
    pub name: String,
    pub line: u32,
    pub col: u32,
}

/// Depth-first collection of every in-kind, same-file declaration.
///
/// Visits all nodes regardless of kind — declarations nest (a class inside a
/// class), so children of non-matching nodes are still walked. Candidates
/// are recorded parent-before-children, children in document order.
pub fn collect(
    tree: &SyntaxTree,
    kinds: &[NodeKind],
    resolver: &mut SameFileResolver,
) -> Vec<RawCandidate> {
    let mut candidates = Vec::new();
    walk(tree.root(), None, kinds, resolver, &mut candidates);
    candidates
}

fn walk(
    node: &Node,
    template_pattern: Option<&str>,
    kinds: &[NodeKind],
    resolver: &mut SameFileResolver,
    candidates: &mut Vec<RawCandidate>,
) {
    if let Some((kind, data)) = node.kind.declared_kind()
        && kinds.contains(&kind)
        && !data.is_implicit()
        && let Some(name) = data.name()
        && !name.is_empty()
        && !is_template_pattern(template_pattern, kind, name)
        && let Some(loc) = data.location()
        && loc.line > 0
        && resolver.same_file(&loc.file)
    {
        candidates.push(RawCandidate {
            name: name.to_owned(),
            line: loc.line as u32,
            col: loc.col as u32,
        });
    }

    // The JSON dump nests a same-named pattern declaration inside every
    // template declaration; suppress it so a function template never shows
    // up as a plain function and a class template is reported exactly once.
    let child_suppression = match &node.kind {
        Clang::FunctionTemplateDecl(data) | Clang::ClassTemplateDecl(data) => data.name(),
        _ => None,
    };

    for child in &node.inner {
        walk(child, child_suppression, kinds, resolver, candidates);
    }
}

fn is_template_pattern(
    template_pattern: Option<&str>,
    kind: NodeKind,
    name: &str,
) -> bool {
    template_pattern == Some(name)
        && matches!(kind, NodeKind::Function | NodeKind::Class | NodeKind::Struct)
}

#[cfg(test)]
#[path = "../../tests/src/query/walker_tests.rs"]
mod tests;
