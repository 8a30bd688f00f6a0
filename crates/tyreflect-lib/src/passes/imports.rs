//! Import reconciliation after a rewrite.
//!
//! Drops top-level imports of the placeholder and runtime modules and adds a
//! single runtime import carrying exactly the symbols the rewrite needs.

use arborium_tree_sitter::Node;
use tracing::debug;

use super::RequiredImports;
use crate::Config;
use crate::emit::Edit;
use crate::syntax::{SyntaxTree, kinds, named_children, text};

/// Edits that replace placeholder/runtime imports with one clean import.
///
/// Returns nothing when `required` is empty: files no pass touched keep their
/// imports.
pub fn reconcile_imports(
    tree: &SyntaxTree<'_>,
    config: &Config,
    required: &RequiredImports,
) -> Vec<Edit> {
    if required.is_empty() {
        return Vec::new();
    }

    let source = tree.source();
    let top_level = named_children(tree.root());
    let mut edits = Vec::new();

    for statement in &top_level {
        if statement.kind() != kinds::IMPORT_STATEMENT {
            continue;
        }
        let Some(module) = import_source(*statement, source) else {
            continue;
        };
        if module == config.placeholder_module || module == config.runtime_module {
            debug!(module, "removing import");
            let end = consume_line_break(source, statement.end_byte());
            edits.push(Edit::delete(statement.start_byte()..end));
        }
    }

    let at = match top_level.first() {
        Some(first) if first.kind() == kinds::HASH_BANG_LINE => {
            consume_line_break(source, first.end_byte())
        }
        _ => 0,
    };
    edits.push(Edit::insert(at, import_line(config, required)));

    edits
}

/// `import { a, b } from "module";` followed by a newline.
pub fn import_line(config: &Config, required: &RequiredImports) -> String {
    format!(
        "import {{ {} }} from \"{}\";\n",
        required.names(config).join(", "),
        config.runtime_module
    )
}

/// Module specifier of an import, without quotes.
fn import_source<'s>(statement: Node<'_>, source: &'s str) -> Option<&'s str> {
    let string = statement.child_by_field_name("source")?;
    let quoted = text(string, source);
    let unquoted = quoted
        .strip_prefix(['"', '\''])
        .and_then(|s| s.strip_suffix(['"', '\'']))?;
    Some(unquoted)
}

/// Extend `end` over trailing blanks and one line break, if the line ends there.
fn consume_line_break(source: &str, end: usize) -> usize {
    let rest = &source[end..];
    let trimmed = rest.trim_start_matches([' ', '\t']);
    let blanks = rest.len() - trimmed.len();

    if trimmed.starts_with("\r\n") {
        end + blanks + 2
    } else if trimmed.starts_with('\n') {
        end + blanks + 1
    } else if trimmed.is_empty() {
        source.len()
    } else {
        end
    }
}
