use crate::ast::NodeKind;

/// What a query is asking for.
///
/// Extending the search to further declaration forms (enums, namespaces)
/// only means adding a variant and its kind set here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Function,
    /// Classes, structs and class templates. Unions are not class-like.
    ClassLike,
}

impl SymbolKind {
    /// Node kinds that satisfy this request.
    pub fn node_kinds(self) -> &'static [NodeKind] {
        match self {
            SymbolKind::Function => &[NodeKind::Function],
            SymbolKind::ClassLike => {
                &[NodeKind::Class, NodeKind::Struct, NodeKind::ClassTemplate]
            },
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src/query/kinds_tests.rs"]
mod tests;
