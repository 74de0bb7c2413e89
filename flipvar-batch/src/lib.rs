//! # Batch driver for flipvar
//!
//! Given a list of sequence IDs and a [flipvar_io::BatchLayout], applies
//! `<vardir>/<id>.var` to `<fastadir>/<id>.fasta` for every ID and writes the
//! mutated records and the flipped variants to the output directories.
//!
pub mod config;
pub mod consts;
pub mod errors;
pub mod process;
pub mod run;

// Re-exports
pub use config::*;
pub use errors::*;
pub use process::*;
pub use run::*;
