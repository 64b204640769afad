use std::path::PathBuf;

/// Width/height ratio assumed when an asset has not been probed.
pub const DEFAULT_ASPECT_RATIO: f64 = 1.5;

/// A selectable overlay asset: image reference plus its fixed aspect ratio.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayDescriptor {
    pub image: PathBuf,
    pub aspect_ratio: f64,
}

impl OverlayDescriptor {
    pub fn new(image: impl Into<PathBuf>) -> Self {
        Self {
            image: image.into(),
            aspect_ratio: DEFAULT_ASPECT_RATIO,
        }
    }

    pub fn with_aspect_ratio(image: impl Into<PathBuf>, aspect_ratio: f64) -> Self {
        Self {
            image: image.into(),
            aspect_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_aspect_ratio() {
        let overlay = OverlayDescriptor::new("wig.png");
        assert_relative_eq!(overlay.aspect_ratio, 1.5);
        assert_eq!(overlay.image, PathBuf::from("wig.png"));
    }

    #[test]
    fn test_explicit_aspect_ratio() {
        let overlay = OverlayDescriptor::with_aspect_ratio("wide_wig.png", 2.0);
        assert_relative_eq!(overlay.aspect_ratio, 2.0);
    }
}
