use crate::models::prediction::PoseVariant;
use std::io;
use thiserror::Error;

/// Errors raised while parsing a docking output file.
///
/// Every variant is fatal to the parse call; there is no partial-result
/// recovery. Line numbers are 1-based physical line numbers in the input,
/// counting comment and blank lines.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The header had an impossible row count by the time the first data
    /// row appeared (or the file ended).
    #[error("header must contain 3 to 5 rows, found {rows}")]
    HeaderShape { rows: usize },

    /// A header row was too short for the field its position demands.
    #[error("unable to obtain {field} (line {line})")]
    HeaderField { line: usize, field: &'static str },

    /// A header field failed to convert to its expected type.
    #[error("invalid {expected} '{value}' for {field} (line {line})")]
    HeaderValue {
        line: usize,
        field: &'static str,
        expected: &'static str,
        value: String,
    },

    /// A symmetric-multimer header declared a fold count below 3.
    #[error("symmetry fold must be at least 3, found {fold} (line {line})")]
    SymmetryRange { line: usize, fold: u32 },

    /// A data row had a field count matching neither row shape.
    #[error("invalid prediction row with {fields} fields (line {line})")]
    PredictionShape { line: usize, fields: usize },

    /// A prediction field failed to convert to its expected type.
    #[error("invalid {expected} '{value}' for prediction {field} (line {line})")]
    PredictionValue {
        line: usize,
        field: &'static str,
        expected: &'static str,
        value: String,
    },

    /// A row's implied variant disagreed with the variant already
    /// established by the header and the first data row.
    #[error("{found:?} prediction row conflicts with the established {expected:?} format (line {line})")]
    VariantConflict {
        line: usize,
        expected: PoseVariant,
        found: PoseVariant,
    },
}
