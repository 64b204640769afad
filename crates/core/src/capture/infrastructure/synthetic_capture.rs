use crate::capture::domain::capture_source::CaptureSource;
use crate::shared::frame::Frame;

const CHANNELS: u8 = 3;

/// Capture source that emits uniform gray frames of a fixed size.
///
/// The scripted provider only looks at frame indices, so pixel content is
/// irrelevant; what matters is the readiness delay and the native size.
pub struct SyntheticCapture {
    width: u32,
    height: u32,
    /// Polls that still return `None` before the source counts as ready.
    ready_after: usize,
    polls: usize,
    frames_served: usize,
}

impl SyntheticCapture {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_ready_delay(width, height, 0)
    }

    pub fn with_ready_delay(width: u32, height: u32, ready_after: usize) -> Self {
        Self {
            width,
            height,
            ready_after,
            polls: 0,
            frames_served: 0,
        }
    }
}

impl CaptureSource for SyntheticCapture {
    fn current_frame(&mut self) -> Result<Option<Frame>, Box<dyn std::error::Error>> {
        if self.polls < self.ready_after {
            self.polls += 1;
            return Ok(None);
        }
        let len = self.width as usize * self.height as usize * CHANNELS as usize;
        let frame = Frame::new(
            vec![128u8; len],
            self.width,
            self.height,
            CHANNELS,
            self.frames_served,
        );
        self.frames_served += 1;
        Ok(Some(frame))
    }

    fn native_size(&self) -> Option<(u32, u32)> {
        if self.polls < self.ready_after && self.frames_served == 0 {
            None
        } else {
            Some((self.width, self.height))
        }
    }
}
