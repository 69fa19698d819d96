//! # Dockout
//!
//! A reader and writer for the tab-delimited output files produced by
//! grid-based rigid-body docking searches, covering both the pairwise
//! format (a receptor docked against a ligand) and the symmetric-multimer
//! format (a single structure replicated by rotational symmetry).
//!
//! An output file is a short 3-5 row header describing the search grid and
//! the initial placement of the input structures, followed by one scored
//! candidate pose per row -- often millions of them. The header layout is
//! not self-describing: which named field lives in which row depends on the
//! header row count and on a switch flag embedded in the first row, and the
//! library's job is to resolve that mapping on the way in and reproduce it
//! exactly on the way out.
//!
//! ## Architecture
//!
//! The library is split into two layers:
//!
//! - **[`models`]: The Data Model.** Stateless value types for the parsed
//!   file: [`models::document::Document`] with its variant-guarded
//!   accessors, the per-row [`models::prediction::Prediction`], and the
//!   initial [`models::structure::Structure`] placements.
//!
//! - **[`io`]: The Codec.** A single-forward-pass reader (line
//!   classification, header interpretation, prediction streaming with an
//!   optional hard bound) and the inverse serializer producing canonical
//!   text. All parse failures are typed and fatal; nothing is silently
//!   defaulted.

pub mod io;
pub mod models;
