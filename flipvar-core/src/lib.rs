//! # Core types and algorithms for flipvar
//!
//! This crate holds everything about point substitutions that does not touch
//! the filesystem:
//!
//! - [Variant] and [VariantSet], with the `<from><position><to>` notation
//!   implemented as `FromStr`/`Display`
//! - [validate::check], which compares a variant with the residue it expects
//! - [mutate::apply_all], which applies a set of variants to a sequence under
//!   a [MismatchPolicy]
//!
pub mod codec;
pub mod errors;
pub mod models;
pub mod mutate;
pub mod validate;

// re-exports
pub use errors::*;
pub use models::*;
pub use mutate::*;
pub use validate::*;
