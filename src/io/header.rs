//! Interpretation of the fixed 3-5 row header that precedes the
//! prediction rows.
//!
//! The header is positional and not self-describing: the same physical row
//! can mean "ligand rotation" or "receptor placement" depending on how
//! many header rows the file has and on the switch flag in the first row.
//! The mapping is resolved here as an explicit dispatch on the buffered
//! row count, one arm per sub-layout, with fixed per-row schemas doing the
//! field conversion.

use super::error::ParseError;
use super::lines::ClassifiedLine;
use crate::models::document::Layout;
use crate::models::structure::Structure;
use nalgebra::Vector3;

/// Typed contents of a header block: the grid description plus the
/// variant-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    /// Edge length of the cubic search grid, in cells.
    pub boxsize: u32,
    /// Grid cell size.
    pub spacing: f64,
    /// The variant-specific rows, resolved to named fields.
    pub layout: Layout,
}

/// Maps the buffered header rows onto a typed [`Header`].
///
/// Row count selects the sub-layout: 3 rows is the symmetric-multimer
/// header, 4 the legacy pairwise header (fixed receptor, no switch
/// support) and 5 the current pairwise header, whose two placement rows
/// swap position when the switch flag is set. Any other count fails with
/// [`ParseError::HeaderShape`].
pub(crate) fn interpret(rows: &[ClassifiedLine]) -> Result<Header, ParseError> {
    match rows {
        [first, rotation, placement] => {
            let boxsize = int_field(first, 0, "boxsize")?;
            let spacing = float_field(first, 1, "spacing")?;
            let symmetry = int_field(first, 2, "symmetry fold")?;
            if symmetry < 3 {
                return Err(ParseError::SymmetryRange {
                    line: first.line,
                    fold: symmetry,
                });
            }
            let rotation = axial_rotation_row(rotation, "receptor initial rotation")?;
            let (filename, translation) = placement_row(placement, "receptor initial placement")?;
            Ok(Header {
                boxsize,
                spacing,
                layout: Layout::Symmetric {
                    symmetry,
                    receptor: Structure {
                        filename,
                        rotation,
                        translation,
                    },
                },
            })
        }
        [first, ligand_rotation, receptor_placement, ligand_placement] => {
            let boxsize = int_field(first, 0, "boxsize")?;
            let spacing = float_field(first, 1, "spacing")?;
            let ligand_rotation = rotation_row(ligand_rotation, "ligand initial rotation")?;
            let (rec_file, rec_translation) =
                placement_row(receptor_placement, "receptor initial placement")?;
            let (lig_file, lig_translation) =
                placement_row(ligand_placement, "ligand initial placement")?;
            Ok(Header {
                boxsize,
                spacing,
                layout: Layout::StandardLegacy {
                    // The legacy search held the receptor fixed.
                    receptor: Structure {
                        filename: rec_file,
                        rotation: Vector3::zeros(),
                        translation: rec_translation,
                    },
                    ligand: Structure {
                        filename: lig_file,
                        rotation: ligand_rotation,
                        translation: lig_translation,
                    },
                },
            })
        }
        [first, receptor_rotation, ligand_rotation, fourth, fifth] => {
            let boxsize = int_field(first, 0, "boxsize")?;
            let spacing = float_field(first, 1, "spacing")?;
            let switched = flag_field(first, 2, "switch flag")?;
            let receptor_rotation = rotation_row(receptor_rotation, "receptor initial rotation")?;
            let ligand_rotation = rotation_row(ligand_rotation, "ligand initial rotation")?;
            // The moving body's placement row is written first, so the two
            // rows trade places when the roles were switched.
            let (receptor_placement, ligand_placement) =
                if switched { (fifth, fourth) } else { (fourth, fifth) };
            let (rec_file, rec_translation) =
                placement_row(receptor_placement, "receptor initial placement")?;
            let (lig_file, lig_translation) =
                placement_row(ligand_placement, "ligand initial placement")?;
            Ok(Header {
                boxsize,
                spacing,
                layout: Layout::StandardCurrent {
                    switched,
                    receptor: Structure {
                        filename: rec_file,
                        rotation: receptor_rotation,
                        translation: rec_translation,
                    },
                    ligand: Structure {
                        filename: lig_file,
                        rotation: ligand_rotation,
                        translation: lig_translation,
                    },
                },
            })
        }
        _ => Err(ParseError::HeaderShape { rows: rows.len() }),
    }
}

fn field<'a>(
    row: &'a ClassifiedLine,
    idx: usize,
    name: &'static str,
) -> Result<&'a str, ParseError> {
    row.fields
        .get(idx)
        .map(String::as_str)
        .ok_or(ParseError::HeaderField {
            line: row.line,
            field: name,
        })
}

fn int_field(row: &ClassifiedLine, idx: usize, name: &'static str) -> Result<u32, ParseError> {
    let raw = field(row, idx, name)?;
    raw.parse().map_err(|_| ParseError::HeaderValue {
        line: row.line,
        field: name,
        expected: "integer",
        value: raw.to_string(),
    })
}

fn float_field(row: &ClassifiedLine, idx: usize, name: &'static str) -> Result<f64, ParseError> {
    let raw = field(row, idx, name)?;
    raw.parse().map_err(|_| ParseError::HeaderValue {
        line: row.line,
        field: name,
        expected: "float",
        value: raw.to_string(),
    })
}

/// Reads a 0/1-style flag. Any nonzero integer counts as set.
fn flag_field(row: &ClassifiedLine, idx: usize, name: &'static str) -> Result<bool, ParseError> {
    let raw = field(row, idx, name)?;
    let value: i64 = raw.parse().map_err(|_| ParseError::HeaderValue {
        line: row.line,
        field: name,
        expected: "flag",
        value: raw.to_string(),
    })?;
    Ok(value != 0)
}

/// Reads a rotation row: exactly three Euler angles.
fn rotation_row(row: &ClassifiedLine, name: &'static str) -> Result<Vector3<f64>, ParseError> {
    if row.fields.len() != 3 {
        return Err(ParseError::HeaderField {
            line: row.line,
            field: name,
        });
    }
    Ok(Vector3::new(
        float_field(row, 0, name)?,
        float_field(row, 1, name)?,
        float_field(row, 2, name)?,
    ))
}

/// Reads the symmetric receptor rotation row, where only two angles are
/// meaningful and the third may be omitted.
fn axial_rotation_row(
    row: &ClassifiedLine,
    name: &'static str,
) -> Result<Vector3<f64>, ParseError> {
    match row.fields.len() {
        3 => rotation_row(row, name),
        2 => Ok(Vector3::new(
            float_field(row, 0, name)?,
            float_field(row, 1, name)?,
            0.0,
        )),
        _ => Err(ParseError::HeaderField {
            line: row.line,
            field: name,
        }),
    }
}

/// Reads a placement row: filename followed by three translation
/// components. Extra trailing fields are ignored.
fn placement_row(
    row: &ClassifiedLine,
    name: &'static str,
) -> Result<(String, Vector3<f64>), ParseError> {
    if row.fields.len() < 4 {
        return Err(ParseError::HeaderField {
            line: row.line,
            field: name,
        });
    }
    let translation = Vector3::new(
        float_field(row, 1, name)?,
        float_field(row, 2, name)?,
        float_field(row, 3, name)?,
    );
    Ok((row.fields[0].clone(), translation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::Variant;

    fn rows(raw: &[&[&str]]) -> Vec<ClassifiedLine> {
        raw.iter()
            .enumerate()
            .map(|(i, fields)| ClassifiedLine {
                line: i + 1,
                fields: fields.iter().map(|f| f.to_string()).collect(),
            })
            .collect()
    }

    #[test]
    fn three_rows_interpret_as_symmetric() {
        let header = interpret(&rows(&[
            &["50", "1.0", "4"],
            &["30.0", "60.0"],
            &["mol.pdb", "0.0", "0.0", "0.0"],
        ]))
        .unwrap();

        assert_eq!(header.boxsize, 50);
        assert_eq!(header.spacing, 1.0);
        match header.layout {
            Layout::Symmetric { symmetry, receptor } => {
                assert_eq!(symmetry, 4);
                assert_eq!(receptor.filename, "mol.pdb");
                assert_eq!(receptor.rotation, Vector3::new(30.0, 60.0, 0.0));
            }
            other => panic!("expected symmetric layout, got {:?}", other),
        }
    }

    #[test]
    fn symmetric_rotation_row_accepts_three_fields_too() {
        let header = interpret(&rows(&[
            &["50", "1.0", "3"],
            &["30.0", "60.0", "0.0"],
            &["mol.pdb", "0.0", "0.0", "0.0"],
        ]))
        .unwrap();
        assert_eq!(
            header.layout.variant(),
            Variant::Symmetric,
        );
    }

    #[test]
    fn four_rows_interpret_as_legacy_with_identity_receptor_rotation() {
        let header = interpret(&rows(&[
            &["100", "1.2"],
            &["0.0", "0.0", "0.0"],
            &["recA.pdb", "1.0", "2.0", "3.0"],
            &["ligB.pdb", "4.0", "5.0", "6.0"],
        ]))
        .unwrap();

        assert_eq!(header.boxsize, 100);
        assert_eq!(header.spacing, 1.2);
        match header.layout {
            Layout::StandardLegacy { receptor, ligand } => {
                assert_eq!(receptor.filename, "recA.pdb");
                assert_eq!(receptor.rotation, Vector3::zeros());
                assert_eq!(receptor.translation, Vector3::new(1.0, 2.0, 3.0));
                assert_eq!(ligand.filename, "ligB.pdb");
                assert_eq!(ligand.translation, Vector3::new(4.0, 5.0, 6.0));
            }
            other => panic!("expected legacy layout, got {:?}", other),
        }
    }

    #[test]
    fn five_rows_interpret_as_current_with_placements_in_file_order() {
        let header = interpret(&rows(&[
            &["128", "1.2", "0"],
            &["10.0", "20.0", "30.0"],
            &["40.0", "50.0", "60.0"],
            &["rec.pdb", "1.0", "2.0", "3.0"],
            &["lig.pdb", "4.0", "5.0", "6.0"],
        ]))
        .unwrap();

        match header.layout {
            Layout::StandardCurrent {
                switched,
                receptor,
                ligand,
            } => {
                assert!(!switched);
                assert_eq!(receptor.filename, "rec.pdb");
                assert_eq!(receptor.rotation, Vector3::new(10.0, 20.0, 30.0));
                assert_eq!(ligand.filename, "lig.pdb");
                assert_eq!(ligand.rotation, Vector3::new(40.0, 50.0, 60.0));
            }
            other => panic!("expected current layout, got {:?}", other),
        }
    }

    #[test]
    fn switch_flag_swaps_the_placement_rows() {
        let header = interpret(&rows(&[
            &["128", "1.2", "1"],
            &["10.0", "20.0", "30.0"],
            &["40.0", "50.0", "60.0"],
            &["lig.pdb", "4.0", "5.0", "6.0"],
            &["rec.pdb", "1.0", "2.0", "3.0"],
        ]))
        .unwrap();

        match header.layout {
            Layout::StandardCurrent {
                switched,
                receptor,
                ligand,
            } => {
                assert!(switched);
                assert_eq!(receptor.filename, "rec.pdb");
                assert_eq!(receptor.translation, Vector3::new(1.0, 2.0, 3.0));
                assert_eq!(ligand.filename, "lig.pdb");
                assert_eq!(ligand.translation, Vector3::new(4.0, 5.0, 6.0));
            }
            other => panic!("expected current layout, got {:?}", other),
        }
    }

    #[test]
    fn out_of_range_row_counts_fail_with_header_shape() {
        for count in [0usize, 1, 2, 6] {
            let raw: Vec<&[&str]> = std::iter::repeat(&["1", "2"] as &[&str])
                .take(count)
                .collect();
            let result = interpret(&rows(&raw));
            assert!(
                matches!(result, Err(ParseError::HeaderShape { rows }) if rows == count),
                "row count {} should fail the shape gate",
                count
            );
        }
    }

    #[test]
    fn symmetry_below_three_fails_with_range_error() {
        for fold in ["1", "2"] {
            let result = interpret(&rows(&[
                &["50", "1.0", fold],
                &["30.0", "60.0"],
                &["mol.pdb", "0.0", "0.0", "0.0"],
            ]));
            assert!(matches!(
                result,
                Err(ParseError::SymmetryRange { line: 1, .. })
            ));
        }
    }

    #[test]
    fn non_numeric_header_field_fails_with_value_error() {
        let result = interpret(&rows(&[
            &["100", "wide"],
            &["0.0", "0.0", "0.0"],
            &["recA.pdb", "1.0", "2.0", "3.0"],
            &["ligB.pdb", "4.0", "5.0", "6.0"],
        ]));
        assert!(matches!(
            result,
            Err(ParseError::HeaderValue {
                line: 1,
                field: "spacing",
                ..
            })
        ));
    }

    #[test]
    fn short_rotation_row_names_its_role() {
        let result = interpret(&rows(&[
            &["100", "1.2"],
            &["0.0", "0.0"],
            &["recA.pdb", "1.0", "2.0", "3.0"],
            &["ligB.pdb", "4.0", "5.0", "6.0"],
        ]));
        assert!(matches!(
            result,
            Err(ParseError::HeaderField {
                line: 2,
                field: "ligand initial rotation",
            })
        ));
    }

    #[test]
    fn short_placement_row_names_its_role() {
        let result = interpret(&rows(&[
            &["50", "1.0", "3"],
            &["30.0", "60.0"],
            &["mol.pdb", "0.0"],
        ]));
        assert!(matches!(
            result,
            Err(ParseError::HeaderField {
                line: 3,
                field: "receptor initial placement",
            })
        ));
    }

    #[test]
    fn extra_trailing_fields_on_first_row_are_ignored() {
        let header = interpret(&rows(&[
            &["100", "1.2", "9", "9"],
            &["0.0", "0.0", "0.0"],
            &["recA.pdb", "1.0", "2.0", "3.0"],
            &["ligB.pdb", "4.0", "5.0", "6.0"],
        ]))
        .unwrap();
        assert_eq!(header.layout.variant(), Variant::StandardLegacy);
    }
}
