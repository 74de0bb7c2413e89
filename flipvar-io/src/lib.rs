//! # Input/Output utilities for flipvar.
//!
//! This small crate holds the file-facing side of a batch run: reading the
//! list of sequence IDs, building `<dir>/<id>.<ext>` paths, reading and
//! writing variant files, and reading and writing FASTA records through
//! `bio::io::fasta`.
//!
pub mod consts;
pub mod error;
pub mod fasta;
pub mod ids;
pub mod layout;
pub mod variants;

// re-expose core functions
pub use consts::*;
pub use error::*;
pub use fasta::*;
pub use ids::*;
pub use layout::*;
pub use variants::*;
