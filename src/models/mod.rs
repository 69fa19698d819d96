//! # Data Model
//!
//! Value types for a parsed docking output file.
//!
//! ## Key Components
//!
//! - [`structure`] - Initial placement of one input structure (filename,
//!   rotation, translation)
//! - [`prediction`] - One scored candidate pose, tagged with the data-row
//!   shape it was read from
//! - [`document`] - The complete parsed file with variant-guarded accessors
//!
//! A [`document::Document`] is produced wholesale by the reader in
//! [`crate::io`], or constructed directly by a caller who wants to emit a
//! new file. Once built it is read-only; structures and predictions are
//! owned exclusively by their document.

pub mod document;
pub mod prediction;
pub mod structure;
