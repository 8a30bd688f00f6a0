//! tyreflect: carries TypeScript type annotations into the running program.
//!
//! Reducer registrations written with typed parameters and object-shaped type
//! aliases are rewritten into calls against an explicit runtime
//! type-description API, one source file at a time.
//!
//! # Example
//!
//! ```
//! use tyreflect_lib::{Transformed, transform};
//!
//! let source = "useReducer(\"add\", (a: u32, b: u32) => {});\n";
//! let Transformed::Rewritten { code, .. } = transform(source, "src/index.ts").unwrap() else {
//!     panic!("expected a rewrite");
//! };
//! assert_eq!(
//!     code,
//!     "import { registerReducer, type } from \"spacetimedb\";\n\
//!      registerReducer(\"add\", [type.u32, type.u32], (a, b) => {});\n"
//! );
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod diagnostics;
pub mod emit;
pub mod passes;
pub mod syntax;
pub mod transform;
pub mod types;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod transform_tests;

use std::ops::Range;

pub use config::Config;
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use emit::SourceMap;
pub use transform::{Transformed, Transformer, transform};

/// Result type for rewrite passes: the pass outcome plus any diagnostics it
/// collected. Passes never fail; skipped constructs surface as diagnostics.
pub type PassResult<T> = (T, Diagnostics);

/// Errors that abort the transform of one file.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The file is not syntactically valid TypeScript.
    #[error("failed to parse `{file}` ({} syntax errors)", .diagnostics.error_count())]
    Parse {
        file: String,
        diagnostics: Diagnostics,
    },

    /// No grammar could be loaded for the file.
    #[error("no usable grammar for `{0}`")]
    Language(String),

    /// Two rewrites claimed intersecting parts of the source.
    #[error("rewrites overlap at {first:?} and {second:?}")]
    OverlappingEdits {
        first: Range<usize>,
        second: Range<usize>,
    },
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, Error>;
