use arborium_tree_sitter::Node;

use crate::emit::emit;
use crate::passes::PassOutcome;
use crate::syntax::{self, SyntaxTree, descendants_of_kind};
use crate::transform::Transformed;
use crate::{Config, Transformer};

/// Parse a TypeScript fixture, panicking on syntax errors.
pub fn parse_ts(source: &str) -> SyntaxTree<'_> {
    syntax::parse(&tyreflect_langs::typescript(), source, "test.ts").expect("fixture must parse")
}

/// First node of `kind` in preorder.
pub fn first_of_kind<'t>(root: Node<'t>, kind: &str) -> Node<'t> {
    descendants_of_kind(root, kind)
        .into_iter()
        .next()
        .unwrap_or_else(|| panic!("no `{kind}` node in fixture"))
}

/// Source after applying one pass's edits.
pub fn apply(source: &str, outcome: &PassOutcome) -> String {
    match outcome {
        PassOutcome::Unchanged => source.to_owned(),
        PassOutcome::Rewritten { edits, .. } => emit(source, "test.ts", edits.clone(), false)
            .expect("edits must not overlap")
            .code,
    }
}

/// Run the transform with default config and return the rewritten code.
pub fn rewrite(source: &str) -> String {
    rewrite_with(Config::default(), source)
}

pub fn rewrite_with(config: Config, source: &str) -> String {
    match Transformer::new(config).transform(source, "test.ts") {
        Ok(Transformed::Rewritten { code, .. }) => code,
        Ok(Transformed::Unchanged { .. }) => panic!("expected a rewrite"),
        Err(err) => panic!("transform failed: {err}"),
    }
}

/// Assert the transform leaves `source` untouched.
pub fn assert_unchanged(source: &str) -> crate::Diagnostics {
    match Transformer::default().transform(source, "test.ts") {
        Ok(Transformed::Unchanged { diagnostics }) => diagnostics,
        Ok(Transformed::Rewritten { code, .. }) => panic!("expected no rewrite, got:\n{code}"),
        Err(err) => panic!("transform failed: {err}"),
    }
}
