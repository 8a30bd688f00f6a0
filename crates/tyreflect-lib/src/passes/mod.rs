//! Rewrite passes over one parsed file.
//!
//! Each pass reads the tree and returns the edits it wants plus the runtime
//! symbols those edits reference. Passes never mutate shared state and never
//! fail; constructs they cannot handle are left byte-identical.
//!
//! Order: [`alias`], then [`reducer`] on the same tree, then [`imports`] when
//! either of the first two rewrote something.

pub mod alias;
pub mod imports;
pub mod reducer;

#[cfg(test)]
mod reducer_tests;

use std::collections::BTreeSet;

use crate::Config;
use crate::emit::Edit;

/// A name the rewritten code expects from the runtime module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuntimeSymbol {
    RegisterReducer,
    RegisterType,
    TypeNamespace,
}

impl RuntimeSymbol {
    /// Identifier under which the symbol is imported.
    pub fn name(self, config: &Config) -> &str {
        match self {
            Self::RegisterReducer => &config.register_reducer,
            Self::RegisterType => &config.register_type,
            Self::TypeNamespace => &config.type_namespace,
        }
    }
}

/// Runtime symbols referenced by a pass's edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredImports(BTreeSet<RuntimeSymbol>);

impl RequiredImports {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: RuntimeSymbol) {
        self.0.insert(symbol);
    }

    pub fn union(&mut self, other: RequiredImports) {
        self.0.extend(other.0);
    }

    pub fn contains(&self, symbol: RuntimeSymbol) -> bool {
        self.0.contains(&symbol)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Import specifiers, sorted lexicographically and deduplicated.
    pub fn names<'c>(&self, config: &'c Config) -> Vec<&'c str> {
        let names: BTreeSet<&str> = self.0.iter().map(|symbol| symbol.name(config)).collect();
        names.into_iter().collect()
    }
}

impl FromIterator<RuntimeSymbol> for RequiredImports {
    fn from_iter<I: IntoIterator<Item = RuntimeSymbol>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// What a pass did to the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassOutcome {
    Unchanged,
    Rewritten {
        edits: Vec<Edit>,
        required: RequiredImports,
    },
}

impl PassOutcome {
    pub fn from_edits(edits: Vec<Edit>, required: RequiredImports) -> Self {
        if edits.is_empty() {
            Self::Unchanged
        } else {
            Self::Rewritten { edits, required }
        }
    }

    pub fn is_rewritten(&self) -> bool {
        matches!(self, Self::Rewritten { .. })
    }
}
