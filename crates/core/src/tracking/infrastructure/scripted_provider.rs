use crate::shared::frame::Frame;
use crate::tracking::domain::landmark_provider::{FaceDetection, LandmarkProvider};

/// Replays pre-computed detection results by frame index.
///
/// Frames past the end of the script report no detections, same as a tick
/// where the model finds no face.
pub struct ScriptedProvider {
    script: Vec<Vec<FaceDetection>>,
}

impl ScriptedProvider {
    pub fn new(script: Vec<Vec<FaceDetection>>) -> Self {
        Self { script }
    }
}

impl LandmarkProvider for ScriptedProvider {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<FaceDetection>, Box<dyn std::error::Error>> {
        Ok(self.script.get(frame.index()).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::domain::face_mesh::FaceMesh;

    fn frame(index: usize) -> Frame {
        Frame::new(vec![0u8; 4 * 4 * 3], 4, 4, 3, index)
    }

    fn detection(nose_x: f64) -> FaceDetection {
        FaceDetection {
            mesh: FaceMesh::from_key_points(
                [100.0, 200.0, 0.0],
                [300.0, 200.0, 0.0],
                [nose_x, 150.0, 0.0],
            ),
        }
    }

    #[test]
    fn test_replays_by_frame_index() {
        let mut provider =
            ScriptedProvider::new(vec![vec![detection(200.0)], vec![], vec![detection(210.0)]]);

        assert_eq!(provider.detect(&frame(0)).unwrap(), vec![detection(200.0)]);
        assert!(provider.detect(&frame(1)).unwrap().is_empty());
        assert_eq!(provider.detect(&frame(2)).unwrap(), vec![detection(210.0)]);
    }

    #[test]
    fn test_past_end_reports_no_detections() {
        let mut provider = ScriptedProvider::new(vec![vec![detection(200.0)]]);
        assert!(provider.detect(&frame(7)).unwrap().is_empty());
    }
}
