//! Tree-sitter grammars for the languages tyreflect rewrites.
//!
//! Each grammar sits behind the [`LangImpl`] facade so the transform never
//! touches grammar crates directly. Grammars are feature-gated:
//! `lang-typescript` and `lang-tsx` are on by default.

use std::sync::Arc;

pub use arborium_tree_sitter as tree_sitter;

use tree_sitter::Language;

pub mod builtin;

pub use builtin::*;


/// User-facing language type.
pub type Lang = Arc<dyn LangImpl>;

/// Unified facade over a tree-sitter `Language`.
pub trait LangImpl: Send + Sync {
    fn name(&self) -> &str;

    /// Parse source code into a tree-sitter tree.
    ///
    /// Returns `None` when the grammar cannot be loaded into a parser
    /// (ABI mismatch) or when the parser gives up.
    fn parse(&self, source: &str) -> Option<tree_sitter::Tree>;
}

#[derive(Debug)]
pub struct LangInner {
    name: String,
    ts_lang: Language,
}

impl LangInner {
    pub fn new(name: &str, ts_lang: Language) -> Self {
        Self {
            name: name.to_owned(),
            ts_lang,
        }
    }
}

impl LangImpl for LangInner {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse(&self, source: &str) -> Option<tree_sitter::Tree> {
        let mut parser = tree_sitter::Parser::new();
        parser.set_language(&self.ts_lang).ok()?;
        parser.parse(source, None)
    }
}
