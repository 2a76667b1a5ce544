use ndarray::{ArrayView3, ArrayViewMut3};

/// A single captured frame: contiguous RGB bytes in row-major order.
///
/// Dimensions are fixed once the stream is open; format conversion happens
/// at the capture boundary so everything downstream sees plain RGB24.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
    tick: usize,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8, tick: usize) -> Self {
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
            tick,
        }
    }

    /// A frame filled with a single value, mostly useful in tests.
    pub fn filled(width: u32, height: u32, channels: u8, value: u8) -> Self {
        let len = (width as usize) * (height as usize) * (channels as usize);
        Self::new(vec![value; len], width, height, channels, 0)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
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

    /// Index of this frame in the capture sequence.
    pub fn tick(&self) -> usize {
        self.tick
    }

    /// Byte offset of the pixel at `(x, y)`.
    pub fn pixel_offset(&self, x: u32, y: u32) -> usize {
        ((y * self.width + x) * self.channels as u32) as usize
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }
}
