use std::path::Path;

use crate::overlay::domain::overlay_descriptor::{OverlayDescriptor, DEFAULT_ASPECT_RATIO};

/// Reads an overlay asset's pixel dimensions and derives its aspect ratio.
///
/// Falls back to [`DEFAULT_ASPECT_RATIO`] when the file is missing or not a
/// decodable image — a wrong ratio only distorts the overlay, it never
/// blocks the session, so probing stays best-effort.
pub fn probe_aspect_ratio(path: &Path) -> f64 {
    match image::image_dimensions(path) {
        Ok((w, h)) if h > 0 => w as f64 / h as f64,
        Ok(_) => DEFAULT_ASPECT_RATIO,
        Err(e) => {
            log::debug!(
                "could not probe {}: {e}; assuming aspect ratio {DEFAULT_ASPECT_RATIO}",
                path.display()
            );
            DEFAULT_ASPECT_RATIO
        }
    }
}

/// Builds a descriptor for an asset path with its probed aspect ratio.
pub fn probe_descriptor(path: &Path) -> OverlayDescriptor {
    OverlayDescriptor::with_aspect_ratio(path, probe_aspect_ratio(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use image::{ImageBuffer, Rgb};

    fn write_png(dir: &tempfile::TempDir, name: &str, w: u32, h: u32) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let img = ImageBuffer::from_pixel(w, h, Rgb([200u8, 150, 100]));
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_probes_ratio_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(&dir, "wig.png", 30, 20);
        assert_relative_eq!(probe_aspect_ratio(&path), 1.5);
    }

    #[test]
    fn test_wide_asset() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(&dir, "wide.png", 100, 50);
        assert_relative_eq!(probe_aspect_ratio(&path), 2.0);
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.png");
        assert_relative_eq!(probe_aspect_ratio(&path), DEFAULT_ASPECT_RATIO);
    }

    #[test]
    fn test_descriptor_carries_probed_ratio() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(&dir, "wig.png", 60, 40);
        let descriptor = probe_descriptor(&path);
        assert_eq!(descriptor.image, path);
        assert_relative_eq!(descriptor.aspect_ratio, 1.5);
    }
}
