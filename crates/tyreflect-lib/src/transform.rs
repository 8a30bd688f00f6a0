//! Per-file orchestration: pre-check, parse, rewrite passes, emit.

use tracing::{debug, info_span, trace};

use crate::diagnostics::Diagnostics;
use crate::emit::{self, SourceMap};
use crate::passes::{self, PassOutcome, RequiredImports};
use crate::syntax;
use crate::{Config, Error, Result};

/// Outcome of transforming one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transformed {
    /// Nothing was rewritten. The host should keep the original text.
    Unchanged { diagnostics: Diagnostics },
    Rewritten {
        code: String,
        source_map: SourceMap,
        diagnostics: Diagnostics,
    },
}

impl Transformed {
    pub fn is_rewritten(&self) -> bool {
        matches!(self, Self::Rewritten { .. })
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        match self {
            Self::Unchanged { diagnostics } | Self::Rewritten { diagnostics, .. } => diagnostics,
        }
    }

    /// The rewritten code, or `original` when nothing changed.
    pub fn code_or<'a>(&'a self, original: &'a str) -> &'a str {
        match self {
            Self::Unchanged { .. } => original,
            Self::Rewritten { code, .. } => code,
        }
    }

    pub fn source_map(&self) -> Option<&SourceMap> {
        match self {
            Self::Unchanged { .. } => None,
            Self::Rewritten { source_map, .. } => Some(source_map),
        }
    }
}

/// Rewrites files according to one [`Config`].
///
/// Holds no per-file state, so one instance can serve many files and threads.
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    config: Config,
}

impl Transformer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Cheap textual pre-check. `false` means the file cannot contain
    /// anything to rewrite; `true` only means it is worth parsing.
    pub fn might_rewrite(&self, source: &str) -> bool {
        source.contains(self.config.source_entry_point.as_str()) || source.contains("type")
    }

    /// Transform one file. `file` selects the grammar by extension and names
    /// the source in the emitted map.
    pub fn transform(&self, source: &str, file: &str) -> Result<Transformed> {
        let _span = info_span!("transform", file).entered();

        if !self.might_rewrite(source) {
            trace!("no trigger token");
            return Ok(Transformed::Unchanged {
                diagnostics: Diagnostics::new(),
            });
        }

        let lang =
            tyreflect_langs::for_path(file).ok_or_else(|| Error::Language(file.to_owned()))?;
        let tree = syntax::parse(&lang, source, file)?;

        let (aliases, mut diagnostics) = passes::alias::rewrite_aliases(&tree, &self.config);
        let (reducers, reducer_diagnostics) = passes::reducer::rewrite_reducers(&tree, &self.config);
        diagnostics.extend(reducer_diagnostics);

        let mut edits = Vec::new();
        let mut required = RequiredImports::new();
        for outcome in [aliases, reducers] {
            if let PassOutcome::Rewritten {
                edits: pass_edits,
                required: pass_required,
            } = outcome
            {
                edits.extend(pass_edits);
                required.union(pass_required);
            }
        }

        if edits.is_empty() {
            debug!(diagnostics = diagnostics.len(), "nothing to rewrite");
            return Ok(Transformed::Unchanged { diagnostics });
        }

        edits.extend(passes::imports::reconcile_imports(&tree, &self.config, &required));
        let edit_count = edits.len();
        let emitted = emit::emit(source, file, edits, self.config.source_map_content)?;
        debug!(edits = edit_count, diagnostics = diagnostics.len(), "rewritten");

        Ok(Transformed::Rewritten {
            code: emitted.code,
            source_map: emitted.source_map,
            diagnostics,
        })
    }
}

/// Transform one file with the default [`Config`].
pub fn transform(source: &str, file: &str) -> Result<Transformed> {
    Transformer::default().transform(source, file)
}
