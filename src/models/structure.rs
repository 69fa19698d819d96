use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// The initial placement of one input structure, as recorded in the file
/// header.
///
/// The search tool logs where each input body started: the coordinate file
/// it was read from, an initial rotation, and an initial translation. The
/// codec stores these values verbatim; no transform is ever applied to
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    /// Name of the coordinate file the structure was read from. The file
    /// itself is never opened or validated by this library.
    pub filename: String,
    /// Initial rotation as Euler angles, in degrees.
    pub rotation: Vector3<f64>,
    /// Initial translation, in the length unit of the search grid.
    pub translation: Vector3<f64>,
}

impl Structure {
    /// Creates a new `Structure` from its three header fields.
    pub fn new(filename: &str, rotation: Vector3<f64>, translation: Vector3<f64>) -> Self {
        Self {
            filename: filename.to_string(),
            rotation,
            translation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_structure_stores_all_fields() {
        let s = Structure::new(
            "receptor.pdb",
            Vector3::new(0.5, 1.5, 2.5),
            Vector3::new(10.0, 20.0, 30.0),
        );
        assert_eq!(s.filename, "receptor.pdb");
        assert_eq!(s.rotation, Vector3::new(0.5, 1.5, 2.5));
        assert_eq!(s.translation, Vector3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn structure_equality_and_clone_works() {
        let a = Structure::new("m.pdb", Vector3::zeros(), Vector3::new(1.0, 2.0, 3.0));
        let b = a.clone();
        assert_eq!(a, b);
    }
}
