use super::prediction::{PoseVariant, Prediction};
use super::structure::Structure;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The file-level format variant, fixed by the header row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    /// Older pairwise layout: four header rows, receptor held fixed during
    /// the search (no receptor rotation row, no switch support).
    StandardLegacy,
    /// Current pairwise layout: five header rows, with a flag recording
    /// whether the receptor/ligand roles were swapped for the search.
    StandardCurrent,
    /// Symmetric-multimer layout: three header rows, a single input
    /// structure replicated by rotational symmetry.
    Symmetric,
}

impl Variant {
    /// Returns `true` for the symmetric-multimer variant.
    pub fn is_symmetric(self) -> bool {
        self == Variant::Symmetric
    }

    /// The data-row shape this variant's predictions use.
    pub fn pose_variant(self) -> PoseVariant {
        match self {
            Variant::StandardLegacy | Variant::StandardCurrent => PoseVariant::Standard,
            Variant::Symmetric => PoseVariant::Symmetric,
        }
    }
}

/// The variant-specific part of the header.
///
/// Keeping the per-variant fields inside the matching arm means a document
/// can never hold, say, a ligand and a symmetry fold at the same time; the
/// guarded accessors on [`Document`] are the flat view over this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Layout {
    /// Four-row pairwise header. The receptor's initial rotation is the
    /// identity; only the ligand was rotated.
    StandardLegacy {
        receptor: Structure,
        ligand: Structure,
    },
    /// Five-row pairwise header. When `switched` is set, the physical file
    /// lists the ligand placement row before the receptor placement row.
    StandardCurrent {
        switched: bool,
        receptor: Structure,
        ligand: Structure,
    },
    /// Three-row symmetric-multimer header. `symmetry` is the rotational
    /// fold count and must be at least 3.
    Symmetric { symmetry: u32, receptor: Structure },
}

impl Layout {
    /// The variant tag for this layout.
    pub fn variant(&self) -> Variant {
        match self {
            Layout::StandardLegacy { .. } => Variant::StandardLegacy,
            Layout::StandardCurrent { .. } => Variant::StandardCurrent,
            Layout::Symmetric { .. } => Variant::Symmetric,
        }
    }
}

/// A field was requested from a document whose variant does not carry it.
///
/// This is a programming mistake on the caller's side, not an input
/// failure, and is therefore kept apart from [`crate::io::error::ParseError`]:
/// callers are expected to branch on [`Document::variant`] first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} is not supported for the {variant:?} variant")]
pub struct UnsupportedField {
    /// The accessor that was called.
    pub field: &'static str,
    /// The variant of the document it was called on.
    pub variant: Variant,
}

/// A complete docking output file in memory.
///
/// Produced wholesale by [`crate::io::reader`], or built with
/// [`Document::new`] by a caller who wants to emit a new file. A document
/// built directly is trusted by the serializer; the caller is responsible
/// for satisfying the format invariants (prediction shapes matching the
/// layout, symmetry fold of at least 3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    boxsize: u32,
    spacing: f64,
    layout: Layout,
    predictions: Vec<Prediction>,
}

impl Document {
    /// Creates a document from its header fields and predictions.
    pub fn new(boxsize: u32, spacing: f64, layout: Layout, predictions: Vec<Prediction>) -> Self {
        Self {
            boxsize,
            spacing,
            layout,
            predictions,
        }
    }

    /// The format variant of this document.
    pub fn variant(&self) -> Variant {
        self.layout.variant()
    }

    /// Edge length of the cubic search grid, in cells.
    pub fn boxsize(&self) -> u32 {
        self.boxsize
    }

    /// Grid cell size.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// The variant-specific header payload.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Initial placement of the receptor. Present for every variant.
    pub fn receptor(&self) -> &Structure {
        match &self.layout {
            Layout::StandardLegacy { receptor, .. }
            | Layout::StandardCurrent { receptor, .. }
            | Layout::Symmetric { receptor, .. } => receptor,
        }
    }

    /// Initial placement of the ligand.
    ///
    /// # Errors
    ///
    /// Fails with [`UnsupportedField`] on a symmetric document, which has
    /// no ligand.
    pub fn ligand(&self) -> Result<&Structure, UnsupportedField> {
        match &self.layout {
            Layout::StandardLegacy { ligand, .. } | Layout::StandardCurrent { ligand, .. } => {
                Ok(ligand)
            }
            Layout::Symmetric { .. } => Err(UnsupportedField {
                field: "ligand",
                variant: Variant::Symmetric,
            }),
        }
    }

    /// Rotational symmetry fold count.
    ///
    /// # Errors
    ///
    /// Fails with [`UnsupportedField`] on a pairwise document.
    pub fn symmetry(&self) -> Result<u32, UnsupportedField> {
        match &self.layout {
            Layout::Symmetric { symmetry, .. } => Ok(*symmetry),
            other => Err(UnsupportedField {
                field: "symmetry",
                variant: other.variant(),
            }),
        }
    }

    /// Whether the receptor/ligand roles were swapped for the search.
    ///
    /// Always `false` for [`Variant::StandardLegacy`], which predates swap
    /// support.
    ///
    /// # Errors
    ///
    /// Fails with [`UnsupportedField`] on a symmetric document, where the
    /// flag is meaningless.
    pub fn is_switched(&self) -> Result<bool, UnsupportedField> {
        match &self.layout {
            Layout::StandardLegacy { .. } => Ok(false),
            Layout::StandardCurrent { switched, .. } => Ok(*switched),
            Layout::Symmetric { .. } => Err(UnsupportedField {
                field: "is_switched",
                variant: Variant::Symmetric,
            }),
        }
    }

    /// The predictions in file order.
    pub fn predictions(&self) -> &[Prediction] {
        &self.predictions
    }
}
