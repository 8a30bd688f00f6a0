//! Type annotations and the runtime type expressions built from them.
//!
//! Two layers:
//! - [`TypeAnnotation`]: the closed set of annotation shapes read from the tree
//! - [`TypeExpr`]: the runtime expression emitted in place of the annotation
//!
//! [`build`] maps one onto the other and is the only place the scalar
//! vocabulary is consulted.

pub mod annotation;
pub mod builder;
pub mod expr;
pub mod scalar;


pub use annotation::TypeAnnotation;
pub use builder::{UnsupportedTypeNode, build};
pub use expr::TypeExpr;
pub use scalar::{SCALARS, Scalar};
