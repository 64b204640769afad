//! 468-point face mesh in MediaPipe FaceMesh numbering.
//!
//! Only three anatomical indices are consumed here: the two ear-region
//! points that give head width, and the nose tip that anchors the overlay.
//! The numbering is fixed by the external model version; a different model
//! must not be swapped in without revalidating these indices.

use thiserror::Error;

/// Points per mesh, fixed by the external landmark model.
pub const MESH_LEN: usize = 468;

pub const LEFT_EAR: usize = 234;
pub const RIGHT_EAR: usize = 454;
pub const NOSE_TIP: usize = 6;

#[derive(Error, Debug)]
pub enum MeshError {
    #[error("mesh has {actual} points, expected {expected}")]
    WrongLength { expected: usize, actual: usize },
}

/// Ordered 3D landmark points `(x, y, z)` in native capture pixel space.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceMesh {
    points: Vec<[f64; 3]>,
}

impl FaceMesh {
    /// Wrong-length input is an external-contract violation and fails fast;
    /// it is never truncated or padded.
    pub fn new(points: Vec<[f64; 3]>) -> Result<Self, MeshError> {
        if points.len() != MESH_LEN {
            return Err(MeshError::WrongLength {
                expected: MESH_LEN,
                actual: points.len(),
            });
        }
        Ok(Self { points })
    }

    /// Builds a mesh carrying only the three semantically used points,
    /// all others at the origin. Intended for scripted replay and tests.
    pub fn from_key_points(left_ear: [f64; 3], right_ear: [f64; 3], nose_tip: [f64; 3]) -> Self {
        let mut points = vec![[0.0; 3]; MESH_LEN];
        points[LEFT_EAR] = left_ear;
        points[RIGHT_EAR] = right_ear;
        points[NOSE_TIP] = nose_tip;
        Self { points }
    }

    pub fn point(&self, index: usize) -> [f64; 3] {
        self.points[index]
    }

    pub fn left_ear(&self) -> [f64; 3] {
        self.points[LEFT_EAR]
    }

    pub fn right_ear(&self) -> [f64; 3] {
        self.points[RIGHT_EAR]
    }

    pub fn nose_tip(&self) -> [f64; 3] {
        self.points[NOSE_TIP]
    }

    /// Euclidean ear-to-ear distance in the native XY plane.
    ///
    /// Depth is ignored: the overlay is a flat image, so only the projected
    /// head width matters.
    pub fn ear_span(&self) -> f64 {
        let l = self.left_ear();
        let r = self.right_ear();
        ((r[0] - l[0]).powi(2) + (r[1] - l[1]).powi(2)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_new_accepts_full_mesh() {
        let mesh = FaceMesh::new(vec![[1.0, 2.0, 3.0]; MESH_LEN]).unwrap();
        assert_eq!(mesh.point(0), [1.0, 2.0, 3.0]);
    }

    #[rstest]
    #[case::empty(0)]
    #[case::short(467)]
    #[case::long(469)]
    fn test_new_rejects_wrong_length(#[case] len: usize) {
        let err = FaceMesh::new(vec![[0.0; 3]; len]).unwrap_err();
        match err {
            MeshError::WrongLength { expected, actual } => {
                assert_eq!(expected, MESH_LEN);
                assert_eq!(actual, len);
            }
        }
    }

    #[test]
    fn test_key_point_accessors() {
        let mesh = FaceMesh::from_key_points(
            [200.0, 300.0, 0.0],
            [440.0, 300.0, 0.0],
            [320.0, 250.0, -5.0],
        );
        assert_eq!(mesh.left_ear(), [200.0, 300.0, 0.0]);
        assert_eq!(mesh.right_ear(), [440.0, 300.0, 0.0]);
        assert_eq!(mesh.nose_tip(), [320.0, 250.0, -5.0]);
    }

    #[test]
    fn test_ear_span_horizontal() {
        let mesh =
            FaceMesh::from_key_points([200.0, 300.0, 0.0], [440.0, 300.0, 0.0], [320.0, 250.0, 0.0]);
        assert_relative_eq!(mesh.ear_span(), 240.0);
    }

    #[test]
    fn test_ear_span_diagonal() {
        // 3-4-5 triangle
        let mesh =
            FaceMesh::from_key_points([0.0, 0.0, 0.0], [30.0, 40.0, 0.0], [15.0, 20.0, 0.0]);
        assert_relative_eq!(mesh.ear_span(), 50.0);
    }

    #[test]
    fn test_ear_span_ignores_depth() {
        let mesh =
            FaceMesh::from_key_points([0.0, 0.0, 10.0], [100.0, 0.0, -40.0], [50.0, 0.0, 0.0]);
        assert_relative_eq!(mesh.ear_span(), 100.0);
    }
}
