//! Landmark mesh → display-space overlay rectangle.
//!
//! The sizing and anchoring constants are empirical, tuned by inspection
//! against live video rather than derived anatomically. No temporal
//! smoothing happens here; each placement is an independent function of one
//! mesh, so frame-to-frame jitter follows landmark noise directly (an
//! optional EMA stage lives in `placement_smoother`).

use crate::shared::viewport::Viewport;
use crate::tracking::domain::face_mesh::FaceMesh;

/// Overlay width as a multiple of the ear-to-ear span, making the image
/// roughly head-width with some overhang.
const WIDTH_SCALE: f64 = 2.0;

/// Vertical anchor divisor: the overlay top sits `height / 1.4` above the
/// nose tip, toward the top of the head.
const VERTICAL_ANCHOR_DIVISOR: f64 = 1.4;

/// Computed on-screen position and size for the active overlay, in display
/// pixels. Fully derived — recomputed from scratch on every detection tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Places an overlay of the given aspect ratio over the tracked face.
///
/// Landmarks are read in native capture space, the result is in display
/// space, and the horizontal axis is inverted because the display mirrors
/// the capture (selfie view). Returns `None` when the viewport has a zero
/// dimension — e.g. the video element has not reported its size yet — so
/// callers skip the draw instead of dividing by zero.
pub fn place(mesh: &FaceMesh, viewport: &Viewport, aspect_ratio: f64) -> Option<Placement> {
    if !viewport.is_renderable() {
        return None;
    }

    let width = WIDTH_SCALE * mesh.ear_span();
    let height = width / aspect_ratio;

    let nose = mesh.nose_tip();
    let (nose_x, nose_y) = viewport.to_display(nose[0], nose[1]);

    let x = nose_x - width / 2.0;
    let top = nose_y - height / VERTICAL_ANCHOR_DIVISOR;

    // Mirror horizontally only; the vertical axis is unaffected.
    let left = viewport.display_width as f64 - x - width;

    Some(Placement {
        left,
        top,
        width,
        height,
    })
}
