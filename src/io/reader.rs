//! Reading of docking output files: one forward pass that interprets the
//! header, locks the format variant, and streams the prediction rows.

use super::error::ParseError;
use super::header::{self, Header};
use super::lines::{ClassifiedLine, FieldLines};
use crate::models::document::Document;
use crate::models::prediction::{PoseVariant, Prediction};
use nalgebra::Vector3;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A partially consumed docking output file.
///
/// Constructing a `Reader` consumes and interprets the header; the
/// predictions can then be streamed with [`Reader::predictions`] without
/// ever materializing more than one row, or collected wholesale with
/// [`Reader::into_document`].
pub struct Reader<R: BufRead> {
    lines: FieldLines<R>,
    header: Header,
    expected: PoseVariant,
    /// The data row that terminated header accumulation, not yet consumed.
    pending: Option<ClassifiedLine>,
    done: bool,
}

impl<R: BufRead> Reader<R> {
    /// Consumes classified lines up to (not including) the first
    /// data-shaped row and interprets them as the header.
    ///
    /// The format variant is locked here: the header row count fixes it,
    /// and a first data row whose field count implies the other variant
    /// fails immediately.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::HeaderShape`] for an out-of-range header row
    /// count, the header field/value errors from interpretation, or
    /// [`ParseError::VariantConflict`] if the first data row disagrees
    /// with the header-derived variant.
    pub fn new(reader: R) -> Result<Self, ParseError> {
        let mut lines = FieldLines::new(reader);
        let mut rows = Vec::new();
        let mut pending = None;
        let mut first_pose = None;

        for item in &mut lines {
            let row = item?;
            if let Some(found) = row_pose(row.fields.len()) {
                first_pose = Some((found, row.line));
                pending = Some(row);
                break;
            }
            rows.push(row);
        }

        let header = header::interpret(&rows)?;
        let expected = header.layout.variant().pose_variant();
        if let Some((found, line)) = first_pose
            && found != expected
        {
            return Err(ParseError::VariantConflict {
                line,
                expected,
                found,
            });
        }

        Ok(Self {
            lines,
            header,
            expected,
            pending,
            done: false,
        })
    }

    /// The interpreted header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// A lazy, single-pass iterator over the remaining predictions.
    ///
    /// The iterator fuses after the first error; a file with millions of
    /// rows costs one row of memory at a time.
    pub fn predictions(&mut self) -> Predictions<'_, R> {
        Predictions { reader: self }
    }

    /// Reads every remaining prediction and finishes the document.
    pub fn into_document(self) -> Result<Document, ParseError> {
        self.collect_document(None)
    }

    /// Like [`Reader::into_document`], but stops after exactly
    /// `max_predictions` accepted rows. No line beyond the one holding the
    /// last accepted prediction is read, so trailing garbage past the
    /// bound can never fail the call.
    pub fn into_document_bounded(self, max_predictions: usize) -> Result<Document, ParseError> {
        self.collect_document(Some(max_predictions))
    }

    fn collect_document(mut self, max: Option<usize>) -> Result<Document, ParseError> {
        let mut predictions = Vec::new();
        if max != Some(0) {
            for item in self.predictions() {
                predictions.push(item?);
                if Some(predictions.len()) == max {
                    break;
                }
            }
        }
        let Header {
            boxsize,
            spacing,
            layout,
        } = self.header;
        Ok(Document::new(boxsize, spacing, layout, predictions))
    }

    fn parse_row(&self, row: &ClassifiedLine) -> Result<Prediction, ParseError> {
        let found = row_pose(row.fields.len()).ok_or(ParseError::PredictionShape {
            line: row.line,
            fields: row.fields.len(),
        })?;
        if found != self.expected {
            return Err(ParseError::VariantConflict {
                line: row.line,
                expected: self.expected,
                found,
            });
        }
        match found {
            PoseVariant::Standard => Ok(Prediction::standard(
                Vector3::new(
                    float_at(row, 0, "rotation x")?,
                    float_at(row, 1, "rotation y")?,
                    float_at(row, 2, "rotation z")?,
                ),
                Vector3::new(
                    int_at(row, 3, "translation x")?,
                    int_at(row, 4, "translation y")?,
                    int_at(row, 5, "translation z")?,
                ),
                float_at(row, 6, "score")?,
            )),
            PoseVariant::Symmetric => Ok(Prediction::symmetric(
                float_at(row, 0, "rotation x")?,
                float_at(row, 1, "rotation y")?,
                int_at(row, 2, "translation x")?,
                int_at(row, 3, "translation y")?,
                float_at(row, 4, "score")?,
            )),
        }
    }
}

/// Streaming iterator over the prediction rows of a [`Reader`].
pub struct Predictions<'a, R: BufRead> {
    reader: &'a mut Reader<R>,
}

impl<R: BufRead> Iterator for Predictions<'_, R> {
    type Item = Result<Prediction, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.reader.done {
            return None;
        }
        let row = match self.reader.pending.take() {
            Some(row) => row,
            None => match self.reader.lines.next() {
                None => {
                    self.reader.done = true;
                    return None;
                }
                Some(Ok(row)) => row,
                Some(Err(e)) => {
                    self.reader.done = true;
                    return Some(Err(e.into()));
                }
            },
        };
        let result = self.reader.parse_row(&row);
        if result.is_err() {
            self.reader.done = true;
        }
        Some(result)
    }
}

/// The pose variant implied by a data row's field count, if any.
fn row_pose(fields: usize) -> Option<PoseVariant> {
    match fields {
        7 => Some(PoseVariant::Standard),
        5 => Some(PoseVariant::Symmetric),
        _ => None,
    }
}

fn float_at(row: &ClassifiedLine, idx: usize, name: &'static str) -> Result<f64, ParseError> {
    let raw = &row.fields[idx];
    raw.parse().map_err(|_| ParseError::PredictionValue {
        line: row.line,
        field: name,
        expected: "float",
        value: raw.clone(),
    })
}

fn int_at(row: &ClassifiedLine, idx: usize, name: &'static str) -> Result<i32, ParseError> {
    let raw = &row.fields[idx];
    raw.parse().map_err(|_| ParseError::PredictionValue {
        line: row.line,
        field: name,
        expected: "integer",
        value: raw.clone(),
    })
}

/// Parses a complete document from a buffered reader.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first malformed row; all parse
/// failures are fatal.
pub fn read_from(reader: impl BufRead) -> Result<Document, ParseError> {
    Reader::new(reader)?.into_document()
}

/// Parses a document from a buffered reader, keeping at most
/// `max_predictions` predictions. See [`Reader::into_document_bounded`]
/// for the exact cutoff semantics.
pub fn read_from_bounded(
    reader: impl BufRead,
    max_predictions: usize,
) -> Result<Document, ParseError> {
    Reader::new(reader)?.into_document_bounded(max_predictions)
}

/// Parses a complete document from a file path.
pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Document, ParseError> {
    let file = File::open(path)?;
    read_from(BufReader::new(file))
}

/// Parses a document from a file path, keeping at most `max_predictions`
/// predictions.
pub fn read_from_path_bounded<P: AsRef<Path>>(
    path: P,
    max_predictions: usize,
) -> Result<Document, ParseError> {
    let file = File::open(path)?;
    read_from_bounded(BufReader::new(file), max_predictions)
}
