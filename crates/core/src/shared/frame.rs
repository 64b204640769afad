/// A single captured video frame: contiguous RGB bytes in row-major order.
///
/// Pixel data is opaque to this crate — landmark inference happens behind
/// the provider trait. Dimensions here are the *native capture* size; the
/// on-screen rendered size lives in [`crate::shared::viewport::Viewport`].
#[derive(Clone, Debug)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
    index: usize,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8, index: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
            index,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Monotonic capture index, assigned by the capture source.
    pub fn index(&self) -> usize {
        self.index
    }
}
