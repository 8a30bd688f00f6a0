//! Typed reducer registrations become explicit three-argument registrations.
//!
//! ```ts
//! useReducer("move", (id: u64, to: Point) => { ... });
//! ```
//! becomes
//! ```ts
//! registerReducer("move", [type.u64, Point], (id, to) => { ... });
//! ```
//!
//! Only the callee and the handler head are edited. The name argument and
//! the handler body keep their original bytes.

use std::ops::Range;

use arborium_tree_sitter::Node;
use tracing::debug;

use super::{PassOutcome, RequiredImports, RuntimeSymbol};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::emit::Edit;
use crate::syntax::{SyntaxTree, descendants_of_kind, has_token, kinds, named_children, text};
use crate::types::expr::render_list;
use crate::types::{TypeAnnotation, TypeExpr, UnsupportedTypeNode, build};
use crate::{Config, PassResult};

/// How a call to the source entry point is written.
#[derive(Debug, Clone, Copy)]
enum CallShape<'t> {
    /// `(name, handler)`: rewritten when the handler is fully typed.
    Direct { handler: Node<'t> },
    /// `(name, types, handler)`: already carries its types.
    Explicit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flavour<'s> {
    Arrow,
    Function {
        generator: bool,
        name: Option<&'s str>,
    },
}

/// Parameter list of a handler, as far as the rewrite is concerned.
#[derive(Debug)]
enum Params<'s> {
    /// Every parameter is a plain identifier with an annotation.
    Typed(Vec<(&'s str, TypeAnnotation)>),
    /// At least one parameter, none annotated.
    Untyped,
    /// Destructuring, defaults, optionals, rest, or partial annotations.
    Unsupported,
}

/// A direct registration whose handler is fully typed.
#[derive(Debug)]
struct ReducerSite<'s> {
    callee: Range<usize>,
    head: Range<usize>,
    params: Vec<(&'s str, TypeAnnotation)>,
    is_async: bool,
    flavour: Flavour<'s>,
}

pub fn rewrite_reducers(tree: &SyntaxTree<'_>, config: &Config) -> PassResult<PassOutcome> {
    let mut diagnostics = Diagnostics::new();
    let mut edits = Vec::new();
    let source = tree.source();

    for call in descendants_of_kind(tree.root(), kinds::CALL_EXPRESSION) {
        let Some(shape) = classify(call, source, config) else {
            continue;
        };
        let handler = match shape {
            CallShape::Direct { handler } => handler,
            CallShape::Explicit => {
                debug!(at = call.start_byte(), "registration already explicit");
                continue;
            }
        };

        let params = match read_params(handler, source) {
            Some(Params::Typed(params)) => params,
            Some(Params::Untyped) => {
                debug!(at = call.start_byte(), "registration skipped: untyped handler");
                if config.warn_untyped_reducers {
                    diagnostics
                        .report(DiagnosticKind::UntypedReducer, params_range(handler))
                        .message(config.source_entry_point.as_str())
                        .emit();
                }
                continue;
            }
            Some(Params::Unsupported) | None => {
                debug!(
                    at = call.start_byte(),
                    "registration skipped: parameters not all annotated identifiers"
                );
                continue;
            }
        };

        let Some(site) = ReducerSite::new(call, handler, params, source) else {
            continue;
        };

        match site.types() {
            Ok(types) => {
                debug!(at = call.start_byte(), params = types.len(), "rewriting registration");
                edits.push(Edit::replace(site.callee.clone(), config.register_reducer.as_str()));
                edits.push(Edit::replace(site.head.clone(), site.head_text(&types, config)));
            }
            Err(UnsupportedTypeNode { kind, range }) => {
                debug!(at = call.start_byte(), kind = %kind, "registration skipped: unsupported annotation");
                diagnostics
                    .report(DiagnosticKind::UnsupportedTypeNode, range)
                    .message(kind)
                    .related_to(
                        format!("in `{}` handler", config.source_entry_point),
                        site.callee.clone(),
                    )
                    .emit();
            }
        }
    }

    let required: RequiredImports = if edits.is_empty() {
        RequiredImports::new()
    } else {
        [RuntimeSymbol::RegisterReducer, RuntimeSymbol::TypeNamespace]
            .into_iter()
            .collect()
    };

    (PassOutcome::from_edits(edits, required), diagnostics)
}

fn classify<'t>(call: Node<'t>, source: &str, config: &Config) -> Option<CallShape<'t>> {
    let callee = call.child_by_field_name("function")?;
    if callee.kind() != kinds::IDENTIFIER || text(callee, source) != config.source_entry_point {
        return None;
    }

    let arguments = call.child_by_field_name("arguments")?;
    match named_children(arguments).as_slice() {
        [_, handler] if is_function(*handler) => Some(CallShape::Direct { handler: *handler }),
        [_, _, _] => Some(CallShape::Explicit),
        _ => {
            debug!(at = call.start_byte(), "registration skipped: unrecognized arguments");
            None
        }
    }
}

fn is_function(node: Node<'_>) -> bool {
    matches!(
        node.kind(),
        kinds::ARROW_FUNCTION | kinds::FUNCTION_EXPRESSION | kinds::FUNCTION
    )
}

fn read_params<'s>(handler: Node<'_>, source: &'s str) -> Option<Params<'s>> {
    // `x => ...` has no parentheses and no annotation.
    if handler.child_by_field_name("parameter").is_some() {
        return Some(Params::Untyped);
    }

    let list = handler.child_by_field_name("parameters")?;
    let params = named_children(list);

    let mut typed = Vec::with_capacity(params.len());
    let mut any_annotated = false;
    for param in &params {
        any_annotated |= param.child_by_field_name("type").is_some();
        if let Some(entry) = read_param(*param, source) {
            typed.push(entry);
        }
    }

    Some(if typed.len() == params.len() {
        Params::Typed(typed)
    } else if !any_annotated {
        Params::Untyped
    } else {
        Params::Unsupported
    })
}

/// `name: T` without default, modifiers or decorators.
fn read_param<'s>(param: Node<'_>, source: &'s str) -> Option<(&'s str, TypeAnnotation)> {
    if param.kind() != kinds::REQUIRED_PARAMETER {
        return None;
    }
    let pattern = param.child_by_field_name("pattern")?;
    let ty = param.child_by_field_name("type")?;
    if pattern.kind() != kinds::IDENTIFIER
        || param.child_by_field_name("value").is_some()
        || has_token(param, "readonly")
        || named_children(param).len() != 2
    {
        return None;
    }
    Some((text(pattern, source), TypeAnnotation::lower(ty, source)))
}

fn params_range(handler: Node<'_>) -> Range<usize> {
    handler
        .child_by_field_name("parameters")
        .or_else(|| handler.child_by_field_name("parameter"))
        .map_or_else(|| handler.byte_range(), |node| node.byte_range())
}

impl<'s> ReducerSite<'s> {
    fn new(
        call: Node<'_>,
        handler: Node<'_>,
        params: Vec<(&'s str, TypeAnnotation)>,
        source: &'s str,
    ) -> Option<Self> {
        let callee = call.child_by_field_name("function")?;
        let body = handler.child_by_field_name("body")?;

        let flavour = if handler.kind() == kinds::ARROW_FUNCTION {
            Flavour::Arrow
        } else {
            Flavour::Function {
                generator: has_token(handler, "*"),
                name: handler.child_by_field_name("name").map(|n| text(n, source)),
            }
        };

        Some(Self {
            callee: callee.byte_range(),
            head: handler.start_byte()..body.start_byte(),
            params,
            is_async: has_token(handler, "async"),
            flavour,
        })
    }

    fn types(&self) -> Result<Vec<TypeExpr>, UnsupportedTypeNode> {
        self.params.iter().map(|(_, annotation)| build(annotation)).collect()
    }

    /// Types array plus the handler head with annotations removed, up to the body.
    fn head_text(&self, types: &[TypeExpr], config: &Config) -> String {
        let names: Vec<&str> = self.params.iter().map(|(name, _)| *name).collect();
        let params = names.join(", ");
        let asyncness = if self.is_async { "async " } else { "" };

        let head = match self.flavour {
            Flavour::Arrow => format!("{asyncness}({params}) => "),
            Flavour::Function { generator, name } => {
                let star = if generator { "*" } else { "" };
                let name = name.map(|n| format!(" {n}")).unwrap_or_default();
                format!("{asyncness}function{star}{name}({params}) ")
            }
        };

        format!("{}, {head}", render_list(types, &config.type_namespace))
    }
}
