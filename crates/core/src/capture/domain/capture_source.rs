use crate::shared::frame::Frame;

/// Domain interface for a live video source.
///
/// `current_frame` returns `None` until the source has produced its first
/// frame — the session uses that as the video-readiness signal. Once frames
/// flow, `native_size` must report the capture dimensions that landmark
/// coordinates are expressed in.
pub trait CaptureSource: Send {
    fn current_frame(&mut self) -> Result<Option<Frame>, Box<dyn std::error::Error>>;

    /// Native capture dimensions, `None` before the first frame.
    fn native_size(&self) -> Option<(u32, u32)>;
}
