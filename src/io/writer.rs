//! Serialization of a document back to its canonical text form.
//!
//! This is the exact inverse of the reader: rows come out in the same
//! order and with the same numeric formatting the search tool itself
//! uses, including the swapped placement rows when the switch flag is
//! set. The document is trusted as already valid; no checking happens
//! here.

use crate::models::document::{Document, Layout};
use crate::models::prediction::{PoseVariant, Prediction};
use crate::models::structure::Structure;
use nalgebra::Vector3;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// A lazy, finite, single-pass sequence of the document's output lines
/// (without line terminators).
///
/// The header rows are at most five and are produced eagerly; each
/// prediction row is formatted only when the iterator reaches it, so a
/// document with millions of predictions is never materialized as text
/// all at once.
pub fn lines(document: &Document) -> impl Iterator<Item = String> + '_ {
    header_lines(document)
        .into_iter()
        .chain(document.predictions().iter().map(prediction_line))
}

/// Writes the document to `writer`, one `\n`-terminated line per row.
pub fn write_to(document: &Document, writer: &mut impl Write) -> io::Result<()> {
    for line in lines(document) {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

/// Writes the document to a file at `path`.
pub fn write_to_path<P: AsRef<Path>>(document: &Document, path: P) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_to(document, &mut writer)
}

/// Serializes the document into a single string.
pub fn to_text(document: &Document) -> String {
    let mut text = String::new();
    for line in lines(document) {
        text.push_str(&line);
        text.push('\n');
    }
    text
}

fn header_lines(document: &Document) -> Vec<String> {
    let mut rows = Vec::with_capacity(5);
    match document.layout() {
        Layout::Symmetric { symmetry, receptor } => {
            rows.push(format!(
                "{}\t{:.1}\t{}",
                document.boxsize(),
                document.spacing(),
                symmetry
            ));
            rows.push(rotation_line(&receptor.rotation));
            rows.push(placement_line(receptor));
        }
        Layout::StandardLegacy { receptor, ligand } => {
            rows.push(format!("{}\t{:.1}", document.boxsize(), document.spacing()));
            rows.push(rotation_line(&ligand.rotation));
            rows.push(placement_line(receptor));
            rows.push(placement_line(ligand));
        }
        Layout::StandardCurrent {
            switched,
            receptor,
            ligand,
        } => {
            rows.push(format!(
                "{}\t{:.1}\t{}",
                document.boxsize(),
                document.spacing(),
                u8::from(*switched)
            ));
            rows.push(rotation_line(&receptor.rotation));
            rows.push(rotation_line(&ligand.rotation));
            // The moving body's placement row comes first in the file.
            if *switched {
                rows.push(placement_line(ligand));
                rows.push(placement_line(receptor));
            } else {
                rows.push(placement_line(receptor));
                rows.push(placement_line(ligand));
            }
        }
    }
    rows
}

fn rotation_line(rotation: &Vector3<f64>) -> String {
    format!("{:.6}\t{:.6}\t{:.6}", rotation.x, rotation.y, rotation.z)
}

fn placement_line(structure: &Structure) -> String {
    format!(
        "{}\t{:.3}\t{:.3}\t{:.3}",
        structure.filename,
        structure.translation.x,
        structure.translation.y,
        structure.translation.z
    )
}

fn prediction_line(prediction: &Prediction) -> String {
    match prediction.variant {
        PoseVariant::Standard => format!(
            "{:.6}\t{:.6}\t{:.6}\t{}\t{}\t{}\t{:.3}",
            prediction.rotation.x,
            prediction.rotation.y,
            prediction.rotation.z,
            prediction.translation.x,
            prediction.translation.y,
            prediction.translation.z,
            prediction.score
        ),
        PoseVariant::Symmetric => format!(
            "{:.6}\t{:.6}\t{}\t{}\t{:.2}",
            prediction.rotation.x,
            prediction.rotation.y,
            prediction.translation.x,
            prediction.translation.y,
            prediction.score
        ),
    }
}
