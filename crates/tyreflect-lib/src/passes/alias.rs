//! Object-shaped type aliases become registered product types.
//!
//! ```ts
//! type Point = { x: f32; y: f32 };
//! ```
//! becomes
//! ```ts
//! const Point = registerType("Point", type.product({ x: type.f32, y: type.f32 }));
//! ```
//!
//! The alias name turns into a value binding, so later annotations that
//! reference `Point` resolve to the registered type at runtime.

use std::ops::Range;

use arborium_tree_sitter::Node;
use indexmap::IndexMap;
use tracing::debug;

use super::{PassOutcome, RequiredImports, RuntimeSymbol};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::emit::Edit;
use crate::syntax::{SyntaxTree, descendants_of_kind, has_token, kinds, named_children, text};
use crate::types::{TypeAnnotation, TypeExpr, UnsupportedTypeNode, build};
use crate::{Config, PassResult};

/// A type alias whose value is an object type of plain annotated fields.
#[derive(Debug)]
struct AliasSite<'s> {
    name: &'s str,
    name_range: Range<usize>,
    fields: Vec<(&'s str, TypeAnnotation)>,
}

pub fn rewrite_aliases(tree: &SyntaxTree<'_>, config: &Config) -> PassResult<PassOutcome> {
    let mut diagnostics = Diagnostics::new();
    let mut edits = Vec::new();

    for alias in descendants_of_kind(tree.root(), kinds::TYPE_ALIAS_DECLARATION) {
        let Some(site) = AliasSite::read(alias, tree.source()) else {
            continue;
        };

        match site.product() {
            Ok(product) => {
                debug!(alias = site.name, fields = site.fields.len(), "registering type alias");
                edits.push(Edit::replace(alias.byte_range(), site.declaration(&product, config)));
            }
            Err(UnsupportedTypeNode { kind, range }) => {
                debug!(
                    alias = site.name,
                    kind = %kind,
                    "type alias left as is: unsupported annotation"
                );
                diagnostics
                    .report(DiagnosticKind::UnsupportedTypeNode, range)
                    .message(kind)
                    .related_to(format!("in type alias `{}`", site.name), site.name_range.clone())
                    .emit();
            }
        }
    }

    let required: RequiredImports = if edits.is_empty() {
        RequiredImports::new()
    } else {
        [RuntimeSymbol::RegisterType, RuntimeSymbol::TypeNamespace]
            .into_iter()
            .collect()
    };

    (PassOutcome::from_edits(edits, required), diagnostics)
}

impl<'s> AliasSite<'s> {
    /// Recognize a rewritable alias. Unrecognized shapes are skipped silently.
    fn read(alias: Node<'_>, source: &'s str) -> Option<Self> {
        let name_node = alias.child_by_field_name("name")?;
        let name = text(name_node, source);

        if alias.child_by_field_name("type_parameters").is_some() {
            return skip(name, "has type parameters");
        }
        if is_ambient(alias) {
            return skip(name, "ambient declaration");
        }

        let value = alias.child_by_field_name("value")?;
        if value.kind() != kinds::OBJECT_TYPE {
            return skip(name, "value is not an object type");
        }

        let mut fields = Vec::new();
        for member in named_children(value) {
            let Some(field) = read_field(member, source) else {
                return skip(name, "member is not a plain annotated property");
            };
            if fields.iter().any(|(existing, _)| *existing == field.0) {
                return skip(name, "duplicate member");
            }
            fields.push(field);
        }

        Some(Self {
            name,
            name_range: name_node.byte_range(),
            fields,
        })
    }

    fn product(&self) -> Result<TypeExpr, UnsupportedTypeNode> {
        let mut fields = IndexMap::with_capacity(self.fields.len());
        for (field, annotation) in &self.fields {
            fields.insert((*field).to_owned(), build(annotation)?);
        }
        Ok(TypeExpr::Product(fields))
    }

    fn declaration(&self, product: &TypeExpr, config: &Config) -> String {
        format!(
            "const {name} = {register}(\"{name}\", {product});",
            name = self.name,
            register = config.register_type,
            product = product.render(&config.type_namespace),
        )
    }
}

/// `name: T` with no `?`, `readonly`, `static` or accessibility modifier.
fn read_field<'s>(member: Node<'_>, source: &'s str) -> Option<(&'s str, TypeAnnotation)> {
    if member.kind() != kinds::PROPERTY_SIGNATURE {
        return None;
    }
    if ["?", "readonly", "static"].iter().any(|token| has_token(member, token)) {
        return None;
    }

    let name = member.child_by_field_name("name")?;
    let ty = member.child_by_field_name("type")?;
    if name.kind() != kinds::PROPERTY_IDENTIFIER || named_children(member).len() != 2 {
        return None;
    }

    Some((text(name, source), TypeAnnotation::lower(ty, source)))
}

fn is_ambient(node: Node<'_>) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        if parent.kind() == kinds::AMBIENT_DECLARATION {
            return true;
        }
        current = parent.parent();
    }
    false
}

fn skip<T>(alias: &str, reason: &str) -> Option<T> {
    debug!(alias, reason, "type alias skipped");
    None
}
