use std::fmt::Write as _;

use indexmap::IndexMap;

/// A runtime type-description expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// `type.u32`
    NamespaceMember(&'static str),
    /// `type.array(T)`
    ArrayOf(Box<TypeExpr>),
    /// A user-defined name, expected to be a registered type value in scope.
    Identifier(String),
    /// `a.b`
    Member {
        object: Box<TypeExpr>,
        property: String,
    },
    /// `type.product({ field: T, ... })`, fields in declaration order.
    Product(IndexMap<String, TypeExpr>),
}

impl TypeExpr {
    pub fn array_of(element: TypeExpr) -> Self {
        Self::ArrayOf(Box::new(element))
    }

    pub fn member(object: TypeExpr, property: impl Into<String>) -> Self {
        Self::Member {
            object: Box::new(object),
            property: property.into(),
        }
    }

    /// Render as source text, qualifying runtime members with `namespace`.
    pub fn render(&self, namespace: &str) -> String {
        let mut out = String::new();
        self.write_to(&mut out, namespace);
        out
    }

    fn write_to(&self, out: &mut String, namespace: &str) {
        match self {
            Self::NamespaceMember(name) => {
                let _ = write!(out, "{namespace}.{name}");
            }
            Self::ArrayOf(element) => {
                let _ = write!(out, "{namespace}.array(");
                element.write_to(out, namespace);
                out.push(')');
            }
            Self::Identifier(name) => out.push_str(name),
            Self::Member { object, property } => {
                object.write_to(out, namespace);
                out.push('.');
                out.push_str(property);
            }
            Self::Product(fields) => {
                let _ = write!(out, "{namespace}.product({{");
                for (i, (name, ty)) in fields.iter().enumerate() {
                    out.push_str(if i == 0 { " " } else { ", " });
                    out.push_str(name);
                    out.push_str(": ");
                    ty.write_to(out, namespace);
                }
                if !fields.is_empty() {
                    out.push(' ');
                }
                out.push_str("})");
            }
        }
    }
}

/// Render a list of expressions as an array literal: `[type.u32, Foo]`.
pub fn render_list<'a>(exprs: impl IntoIterator<Item = &'a TypeExpr>, namespace: &str) -> String {
    let items: Vec<String> = exprs.into_iter().map(|e| e.render(namespace)).collect();
    format!("[{}]", items.join(", "))
}
