pub mod overlay_descriptor;
pub mod placement;
pub mod placement_smoother;
pub mod wardrobe;
