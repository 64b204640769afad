use crate::shared::frame::Frame;

use super::face_mesh::FaceMesh;

/// One detected face: the full landmark mesh for it.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceDetection {
    pub mesh: FaceMesh,
}

/// Domain interface for per-frame facial landmark inference.
///
/// Implementations may be stateful (e.g., tracking across frames),
/// hence `&mut self`. Returning an empty list is not an error — it means
/// no face was found this frame.
pub trait LandmarkProvider: Send {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<FaceDetection>, Box<dyn std::error::Error>>;
}
