use clang_ast::{BareSourceLocation, SourceLocation};
use serde::Deserialize;

pub type Node = clang_ast::Node<Clang>;

/// Typed representation of the Clang AST node kinds we search for.
///
/// Each variant corresponds to a Clang AST node `"kind"` value. The `Other`
/// fallback efficiently skips all unrecognized node kinds while still being
/// traversable (its `inner` children are deserialized as usual).
#[derive(Deserialize)]
pub enum Clang {
    FunctionDecl(DeclData),
    FunctionTemplateDecl(DeclData),
    CXXRecordDecl(DeclData),
    ClassTemplateDecl(DeclData),

    // The `loc` and `range` fields MUST be deserialized even for unrecognized
    // node kinds. The `clang-ast` crate tracks "current file" state across the
    // deserialization stream via `SourceLocation`; if we skip locations for
    // nodes that set the file path, all subsequent nodes inherit an empty file.
    #[allow(dead_code)]
    Other {
        #[serde(default)]
        loc: Option<SourceLocation>,
        #[serde(default)]
        range: Option<clang_ast::SourceRange>,
    },
}

/// Syntactic category of a declaration node, decoupled from the frontend's
/// raw kind strings. The kind classifier and walker only ever see this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Function,
    Class,
    Struct,
    ClassTemplate,
}

/// Common data for all declaration nodes.
#[derive(Deserialize, Debug)]
pub struct DeclData {
    pub name: Option<String>,
    pub loc: Option<SourceLocation>,
    #[serde(rename = "isImplicit")]
    pub is_implicit: Option<bool>,
    /// `"class"`, `"struct"` or `"union"` for record declarations.
    #[serde(rename = "tagUsed")]
    pub tag_used: Option<String>,
}

impl DeclData {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_implicit(&self) -> bool {
        self.is_implicit.unwrap_or(false)
    }

    /// Position of the declaration's identifier token.
    ///
    /// Prefers the spelling location so macro-generated declarations report
    /// the declaration text in the macro body instead of call-site lines.
    pub fn location(&self) -> Option<&BareSourceLocation> {
        let loc = self.loc.as_ref()?;
        loc.spelling_loc.as_ref().or(loc.expansion_loc.as_ref())
    }
}

impl Clang {
    /// Classify this node as a declaration the search cares about.
    ///
    /// Returns `None` for everything else, including `union` records: the
    /// class-like kind set is exactly {class, struct, class template}.
    pub fn declared_kind(&self) -> Option<(NodeKind, &DeclData)> {
        match self {
            Clang::FunctionDecl(data) => Some((NodeKind::Function, data)),
            Clang::CXXRecordDecl(data) => match data.tag_used.as_deref() {
                Some("class") => Some((NodeKind::Class, data)),
                Some("struct") => Some((NodeKind::Struct, data)),
                _ => None,
            },
            Clang::ClassTemplateDecl(data) => Some((NodeKind::ClassTemplate, data)),
            Clang::FunctionTemplateDecl(_) | Clang::Other { .. } => None,
        }
    }
}
