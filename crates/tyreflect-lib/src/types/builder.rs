use std::ops::Range;

use super::annotation::TypeAnnotation;
use super::expr::TypeExpr;
use super::scalar;

/// An annotation outside the supported grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported type annotation `{kind}` at {}..{}", .range.start, .range.end)]
pub struct UnsupportedTypeNode {
    pub kind: String,
    pub range: Range<usize>,
}

/// Map an annotation onto its runtime type expression.
pub fn build(annotation: &TypeAnnotation) -> Result<TypeExpr, UnsupportedTypeNode> {
    Ok(match annotation {
        TypeAnnotation::Array(element) => TypeExpr::array_of(build(element)?),
        TypeAnnotation::Reference {
            name,
            argument: Some(element),
        } if name == "Array" => TypeExpr::array_of(build(element)?),
        // Other generics keep their name and drop the arguments.
        TypeAnnotation::Reference { name, .. } => match scalar::runtime_name(name) {
            Some(runtime) => TypeExpr::NamespaceMember(runtime),
            None => TypeExpr::Identifier(name.clone()),
        },
        TypeAnnotation::QualifiedReference { left, right } => TypeExpr::member(build(left)?, right.clone()),
        TypeAnnotation::BooleanKeyword => TypeExpr::NamespaceMember("bool"),
        TypeAnnotation::NumberKeyword => TypeExpr::NamespaceMember("f64"),
        TypeAnnotation::StringKeyword => TypeExpr::NamespaceMember("string"),
        TypeAnnotation::Unsupported { kind, range } => {
            return Err(UnsupportedTypeNode {
                kind: kind.clone(),
                range: range.clone(),
            });
        }
    })
}
