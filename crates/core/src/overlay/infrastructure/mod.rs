pub mod image_aspect_probe;
