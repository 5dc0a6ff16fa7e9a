//! Tensor buffer types

/// Number of color channels fed to the model (R, G, B).
pub const INPUT_CHANNELS: usize = 3;

/// Number of channels produced by the model (one intensity per pixel).
pub const OUTPUT_CHANNELS: usize = 1;

/// Native resolution of the reference segmentation model.
pub const DEFAULT_MODEL_SIZE: usize = 512;

/// Row-major, channel-interleaved layout of a tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TensorShape {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

impl TensorShape {
    pub const fn new(width: usize, height: usize, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
        }
    }

    pub const fn input(width: usize, height: usize) -> Self {
        Self::new(width, height, INPUT_CHANNELS)
    }

    pub const fn output(width: usize, height: usize) -> Self {
        Self::new(width, height, OUTPUT_CHANNELS)
    }

    pub const fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Total number of `f32` elements.
    pub const fn len(&self) -> usize {
        self.width * self.height * self.channels
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// NHWC dimensions with a batch size of one.
    pub fn nhwc(&self) -> [usize; 4] {
        [1, self.height, self.width, self.channels]
    }
}

/// Fixed-size float arena.
///
/// The storage is allocated once and can be overwritten but never resized.
/// Readers and writers always start at element 0.
#[derive(Debug, Clone)]
pub struct TensorBuffer {
    shape: TensorShape,
    data: Box<[f32]>,
}

impl TensorBuffer {
    pub fn zeroed(shape: TensorShape) -> Self {
        Self {
            shape,
            data: vec![0.0; shape.len()].into_boxed_slice(),
        }
    }

    /// Buffer with every element set to `value`.
    pub fn filled(shape: TensorShape, value: f32) -> Self {
        Self {
            shape,
            data: vec![value; shape.len()].into_boxed_slice(),
        }
    }

    /// Wraps `data`, returning `None` when its length does not match `shape`.
    pub fn from_vec(shape: TensorShape, data: Vec<f32>) -> Option<Self> {
        if data.len() != shape.len() {
            return None;
        }
        Some(Self {
            shape,
            data: data.into_boxed_slice(),
        })
    }

    pub fn shape(&self) -> TensorShape {
        self.shape
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }
}
