//! Parsing and small tree-sitter helpers shared by the rewrite passes.
//!
//! The grammar keeps TypeScript annotations in the tree, which is what the
//! passes read. Tree-sitter recovers from errors; any ERROR or MISSING node
//! is turned into a diagnostic and the parse fails as a whole.

use arborium_tree_sitter::{Node, Tree};
use tyreflect_langs::Lang;

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::{Error, Result};

/// Node kinds of the TypeScript grammar the passes depend on.
pub mod kinds {
    pub const PROGRAM: &str = "program";
    pub const HASH_BANG_LINE: &str = "hash_bang_line";
    pub const COMMENT: &str = "comment";

    pub const IMPORT_STATEMENT: &str = "import_statement";
    pub const AMBIENT_DECLARATION: &str = "ambient_declaration";
    pub const TYPE_ALIAS_DECLARATION: &str = "type_alias_declaration";
    pub const OBJECT_TYPE: &str = "object_type";
    pub const PROPERTY_SIGNATURE: &str = "property_signature";
    pub const PROPERTY_IDENTIFIER: &str = "property_identifier";

    pub const CALL_EXPRESSION: &str = "call_expression";
    pub const ARGUMENTS: &str = "arguments";
    pub const IDENTIFIER: &str = "identifier";
    pub const ARROW_FUNCTION: &str = "arrow_function";
    pub const FUNCTION_EXPRESSION: &str = "function_expression";
    /// Older grammar releases name function expressions `function`.
    pub const FUNCTION: &str = "function";
    pub const FORMAL_PARAMETERS: &str = "formal_parameters";
    pub const REQUIRED_PARAMETER: &str = "required_parameter";

    pub const TYPE_ANNOTATION: &str = "type_annotation";
    pub const ARRAY_TYPE: &str = "array_type";
    pub const GENERIC_TYPE: &str = "generic_type";
    pub const TYPE_ARGUMENTS: &str = "type_arguments";
    pub const TYPE_IDENTIFIER: &str = "type_identifier";
    pub const NESTED_TYPE_IDENTIFIER: &str = "nested_type_identifier";
    pub const NESTED_IDENTIFIER: &str = "nested_identifier";
    pub const MEMBER_EXPRESSION: &str = "member_expression";
    pub const PREDEFINED_TYPE: &str = "predefined_type";
}

/// One parsed file. Owns the tree, borrows the text.
pub struct SyntaxTree<'s> {
    source: &'s str,
    tree: Tree,
}

impl std::fmt::Debug for SyntaxTree<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntaxTree")
            .field("len", &self.source.len())
            .field("root", &self.root().kind())
            .finish()
    }
}

impl<'s> SyntaxTree<'s> {
    pub fn source(&self) -> &'s str {
        self.source
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text covered by `node`.
    pub fn text(&self, node: Node<'_>) -> &'s str {
        text(node, self.source)
    }
}

/// Parse `source` with `lang`, failing on any syntax error.
pub fn parse<'s>(lang: &Lang, source: &'s str, file: &str) -> Result<SyntaxTree<'s>> {
    let tree = lang
        .parse(source)
        .ok_or_else(|| Error::Language(lang.name().to_owned()))?;

    let root = tree.root_node();
    if root.has_error() {
        let mut diagnostics = Diagnostics::new();
        collect_errors(root, source, &mut diagnostics);
        return Err(Error::Parse {
            file: file.to_owned(),
            diagnostics,
        });
    }

    Ok(SyntaxTree { source, tree })
}

fn collect_errors(node: Node<'_>, source: &str, diagnostics: &mut Diagnostics) {
    if node.is_missing() {
        diagnostics
            .report(DiagnosticKind::MissingToken, node.byte_range())
            .message(node.kind())
            .emit();
        return;
    }

    if node.is_error() {
        let snippet = text(node, source).lines().next().unwrap_or_default().trim();
        let builder = diagnostics.report(DiagnosticKind::SyntaxError, node.byte_range());
        if snippet.is_empty() {
            builder.emit();
        } else {
            builder.message(format!("unexpected `{}`", truncate(snippet, 40))).emit();
        }
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() || child.is_missing() {
            collect_errors(child, source, diagnostics);
        }
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_owned(),
    }
}

pub fn text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    &source[node.byte_range()]
}

/// Named children, skipping comments.
pub fn named_children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != kinds::COMMENT)
        .collect()
}

/// Whether `node` has a direct anonymous child token `token` (`async`, `?`, ...).
pub fn has_token(node: Node<'_>, token: &str) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == token);
    found
}

/// Preorder walk below and including `root`, keeping nodes of `kind`.
pub fn descendants_of_kind<'t>(root: Node<'t>, kind: &str) -> Vec<Node<'t>> {
    let mut out = Vec::new();
    let mut cursor = root.walk();
    let mut depth = 0usize;

    loop {
        let node = cursor.node();
        if node.kind() == kind {
            out.push(node);
        }

        if cursor.goto_first_child() {
            depth += 1;
            continue;
        }

        loop {
            if depth == 0 {
                return out;
            }
            if cursor.goto_next_sibling() {
                break;
            }
            cursor.goto_parent();
            depth -= 1;
        }
    }
}
