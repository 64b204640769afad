pub mod face_mesh;
pub mod landmark_provider;
pub mod provider_loader;
