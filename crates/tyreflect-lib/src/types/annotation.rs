//! Lowering of tree-sitter type nodes into [`TypeAnnotation`].

use std::ops::Range;

use arborium_tree_sitter::Node;

use crate::syntax::{kinds, named_children, text};

/// Annotation shapes the transform understands.
///
/// Anything else lowers to [`TypeAnnotation::Unsupported`], which the builder
/// rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeAnnotation {
    /// `T[]`
    Array(Box<TypeAnnotation>),
    /// `Foo`, `u32`, `Array<T>`.
    ///
    /// `argument` is only populated for generics with exactly one type argument.
    Reference {
        name: String,
        argument: Option<Box<TypeAnnotation>>,
    },
    /// `left.right`
    QualifiedReference {
        left: Box<TypeAnnotation>,
        right: String,
    },
    /// `boolean`
    BooleanKeyword,
    /// `number`
    NumberKeyword,
    /// `string`
    StringKeyword,
    Unsupported {
        kind: String,
        range: Range<usize>,
    },
}

impl TypeAnnotation {
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference {
            name: name.into(),
            argument: None,
        }
    }

    pub fn generic(name: impl Into<String>, argument: TypeAnnotation) -> Self {
        Self::Reference {
            name: name.into(),
            argument: Some(Box::new(argument)),
        }
    }

    pub fn array(element: TypeAnnotation) -> Self {
        Self::Array(Box::new(element))
    }

    pub fn qualified(left: TypeAnnotation, right: impl Into<String>) -> Self {
        Self::QualifiedReference {
            left: Box::new(left),
            right: right.into(),
        }
    }

    /// Lower a type node. Accepts either a `type_annotation` (`: T`) or the
    /// type node itself.
    pub fn lower(node: Node<'_>, source: &str) -> Self {
        match node.kind() {
            kinds::TYPE_ANNOTATION => match named_children(node).first() {
                Some(inner) => Self::lower(*inner, source),
                None => unsupported(node),
            },
            kinds::ARRAY_TYPE => match named_children(node).first() {
                Some(element) => Self::array(Self::lower(*element, source)),
                None => unsupported(node),
            },
            kinds::TYPE_IDENTIFIER => Self::reference(text(node, source)),
            kinds::NESTED_TYPE_IDENTIFIER => lower_path(node, source),
            kinds::GENERIC_TYPE => lower_generic(node, source),
            kinds::PREDEFINED_TYPE => match text(node, source) {
                "boolean" => Self::BooleanKeyword,
                "number" => Self::NumberKeyword,
                "string" => Self::StringKeyword,
                other => Self::Unsupported {
                    kind: other.to_owned(),
                    range: node.byte_range(),
                },
            },
            _ => unsupported(node),
        }
    }
}

fn unsupported(node: Node<'_>) -> TypeAnnotation {
    TypeAnnotation::Unsupported {
        kind: node.kind().to_owned(),
        range: node.byte_range(),
    }
}

fn lower_generic(node: Node<'_>, source: &str) -> TypeAnnotation {
    let children = named_children(node);
    let Some(name) = node
        .child_by_field_name("name")
        .or_else(|| children.first().copied())
    else {
        return unsupported(node);
    };

    if name.kind() != kinds::TYPE_IDENTIFIER {
        // `ns.Foo<T>`: the arguments carry no runtime meaning
        return lower_path(name, source);
    }

    let arguments = children
        .iter()
        .find(|child| child.kind() == kinds::TYPE_ARGUMENTS)
        .map(|args| named_children(*args))
        .unwrap_or_default();

    match arguments.as_slice() {
        [single] => TypeAnnotation::generic(text(name, source), TypeAnnotation::lower(*single, source)),
        _ => TypeAnnotation::reference(text(name, source)),
    }
}

/// `a`, `a.b`, `a.b.C`. Dotted paths nest to the left.
fn lower_path(node: Node<'_>, source: &str) -> TypeAnnotation {
    match node.kind() {
        kinds::IDENTIFIER | kinds::TYPE_IDENTIFIER | kinds::PROPERTY_IDENTIFIER => {
            TypeAnnotation::reference(text(node, source))
        }
        kinds::NESTED_TYPE_IDENTIFIER | kinds::NESTED_IDENTIFIER | kinds::MEMBER_EXPRESSION => {
            match named_children(node).as_slice() {
                [left, .., right] => TypeAnnotation::qualified(lower_path(*left, source), text(*right, source)),
                _ => unsupported(node),
            }
        }
        _ => unsupported(node),
    }
}
