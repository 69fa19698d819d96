//! # Codec
//!
//! Reading and writing of the docking output format.
//!
//! Parsing is a single forward pass: a line classifier strips comments and
//! blank lines and splits on tabs, [`header`] buffers rows until the first
//! data-shaped row and resolves the positional header layout, and
//! [`reader`] streams the remaining rows as typed predictions, optionally
//! stopping at a caller-supplied bound. [`writer`] is the exact inverse
//! and only consumes a finished document.

pub mod error;
pub mod header;
pub(crate) mod lines;
pub mod reader;
pub mod writer;
