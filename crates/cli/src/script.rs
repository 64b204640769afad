use std::fs;
use std::path::Path;

use serde::Deserialize;

use wigcam_core::tracking::domain::face_mesh::FaceMesh;
use wigcam_core::tracking::domain::landmark_provider::FaceDetection;

/// One scripted tick: the three key landmarks in native capture pixels.
/// A `null` entry in the script means no face was found that tick.
#[derive(Deserialize)]
pub struct ScriptTick {
    pub left_ear: [f64; 3],
    pub right_ear: [f64; 3],
    pub nose_tip: [f64; 3],
}

/// Loads a detection script: a JSON array with one entry per tick.
pub fn load_script(path: &Path) -> Result<Vec<Vec<FaceDetection>>, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    parse_script(&text)
}

fn parse_script(text: &str) -> Result<Vec<Vec<FaceDetection>>, Box<dyn std::error::Error>> {
    let ticks: Vec<Option<ScriptTick>> = serde_json::from_str(text)?;
    Ok(ticks
        .into_iter()
        .map(|tick| match tick {
            Some(t) => vec![FaceDetection {
                mesh: FaceMesh::from_key_points(t.left_ear, t.right_ear, t.nose_tip),
            }],
            None => Vec::new(),
        })
        .collect())
}
