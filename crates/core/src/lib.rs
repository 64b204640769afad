//! Landmark-driven overlay placement for live selfie video.
//!
//! The landmark model, the camera, and the compositor are external
//! collaborators behind domain traits; this crate owns the geometry that
//! turns a face mesh into a display-space placement rectangle and the
//! session state machine that drives repeated detection ticks.

pub mod capture;
pub mod overlay;
pub mod session;
pub mod shared;
pub mod tracking;
