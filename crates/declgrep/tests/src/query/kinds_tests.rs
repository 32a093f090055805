use super::*;

#[test]
fn function_requests_map_to_function_declarations_only() {
    assert_eq!(SymbolKind::Function.node_kinds(), [NodeKind::Function]);
}

#[test]
fn classlike_requests_map_to_exactly_class_struct_and_class_template() {
    assert_eq!(
        SymbolKind::ClassLike.node_kinds(),
        [NodeKind::Class, NodeKind::Struct, NodeKind::ClassTemplate]
    );
}
