/// Maps between the two pixel spaces a live video element lives in.
///
/// Landmarks arrive in *native capture* coordinates (the raw sensor frame),
/// while overlays are positioned in *display* coordinates (the size the
/// element is actually rendered at). The two differ whenever the element is
/// scaled by layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub display_width: u32,
    pub display_height: u32,
    pub capture_width: u32,
    pub capture_height: u32,
}

impl Viewport {
    pub fn new(
        display_width: u32,
        display_height: u32,
        capture_width: u32,
        capture_height: u32,
    ) -> Self {
        Self {
            display_width,
            display_height,
            capture_width,
            capture_height,
        }
    }

    /// False when any dimension is zero — e.g. the capture element has not
    /// reported its size yet. Placement must be skipped, not attempted.
    pub fn is_renderable(&self) -> bool {
        self.display_width > 0
            && self.display_height > 0
            && self.capture_width > 0
            && self.capture_height > 0
    }

    /// Scales a native-capture point into display space.
    pub fn to_display(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x / self.capture_width as f64 * self.display_width as f64,
            y / self.capture_height as f64 * self.display_height as f64,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_identity_scaling() {
        let vp = Viewport::new(640, 480, 640, 480);
        let (x, y) = vp.to_display(320.0, 240.0);
        assert_relative_eq!(x, 320.0);
        assert_relative_eq!(y, 240.0);
    }

    #[test]
    fn test_downscaled_display() {
        // Capture 1280x960 rendered at 640x480 → every coordinate halves
        let vp = Viewport::new(640, 480, 1280, 960);
        let (x, y) = vp.to_display(1280.0, 960.0);
        assert_relative_eq!(x, 640.0);
        assert_relative_eq!(y, 480.0);
    }

    #[test]
    fn test_renderable() {
        assert!(Viewport::new(640, 480, 640, 480).is_renderable());
    }

    #[rstest]
    #[case::zero_display_width(0, 480, 640, 480)]
    #[case::zero_display_height(640, 0, 640, 480)]
    #[case::zero_capture_width(640, 480, 0, 480)]
    #[case::zero_capture_height(640, 480, 640, 0)]
    fn test_not_renderable_with_zero_dimension(
        #[case] dw: u32,
        #[case] dh: u32,
        #[case] cw: u32,
        #[case] ch: u32,
    ) {
        assert!(!Viewport::new(dw, dh, cw, ch).is_renderable());
    }
}
