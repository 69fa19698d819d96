use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// The data-row shape a prediction was read from (or will be written as).
///
/// Pairwise searches emit 7-field rows carrying a full 3D rotation and
/// translation; symmetric-multimer searches emit 5-field rows whose third
/// rotation and translation components are implicit zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoseVariant {
    /// 7-field pairwise row.
    Standard,
    /// 5-field symmetric-multimer row.
    Symmetric,
}

/// One scored candidate pose.
///
/// Predictions live in file order inside their document. That order is
/// typically rank order, but the codec neither sorts nor checks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Candidate rotation as Euler angles, in degrees. The third component
    /// is always `0.0` for [`PoseVariant::Symmetric`] poses.
    pub rotation: Vector3<f64>,
    /// Candidate translation in grid cells. The third component is always
    /// `0` for [`PoseVariant::Symmetric`] poses.
    pub translation: Vector3<i32>,
    /// Docking score. Higher is better; the codec treats it as opaque.
    pub score: f64,
    /// The row shape this pose belongs to.
    pub variant: PoseVariant,
}

impl Prediction {
    /// Creates a pairwise (7-field) prediction.
    pub fn standard(rotation: Vector3<f64>, translation: Vector3<i32>, score: f64) -> Self {
        Self {
            rotation,
            translation,
            score,
            variant: PoseVariant::Standard,
        }
    }

    /// Creates a symmetric-multimer (5-field) prediction. The unused third
    /// rotation and translation components are padded with zero.
    pub fn symmetric(rx: f64, ry: f64, tx: i32, ty: i32, score: f64) -> Self {
        Self {
            rotation: Vector3::new(rx, ry, 0.0),
            translation: Vector3::new(tx, ty, 0),
            score,
            variant: PoseVariant::Symmetric,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_prediction_keeps_all_components() {
        let p = Prediction::standard(
            Vector3::new(0.1, 0.2, 0.3),
            Vector3::new(1, 2, 3),
            10.5,
        );
        assert_eq!(p.variant, PoseVariant::Standard);
        assert_eq!(p.rotation, Vector3::new(0.1, 0.2, 0.3));
        assert_eq!(p.translation, Vector3::new(1, 2, 3));
        assert_eq!(p.score, 10.5);
    }

    #[test]
    fn symmetric_prediction_pads_third_components_with_zero() {
        let p = Prediction::symmetric(10.0, 20.0, 5, 6, 3.5);
        assert_eq!(p.variant, PoseVariant::Symmetric);
        assert_eq!(p.rotation, Vector3::new(10.0, 20.0, 0.0));
        assert_eq!(p.translation, Vector3::new(5, 6, 0));
        assert_eq!(p.score, 3.5);
    }
}
