use tracing::{debug, trace};

use crate::segmentation::common::error::{Result, SegmentationError};
use crate::segmentation::image::{OPAQUE_ALPHA, OPAQUE_WHITE, PackedImage, pack_gray};
use crate::segmentation::tensor::types::TensorBuffer;

/// How a model output value becomes a packed ARGB pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IntensityMapping {
    /// Shift the full 32-bit intensity into R, G and B and OR them together.
    /// Values outside `0..=255` spill into the neighbouring channels, and
    /// negative values set every bit above them.
    #[default]
    Overflow,
    /// Keep the low 8 bits of the intensity in each channel
    WrapPerChannel,
    /// Clamp the intensity to `0..=255`
    Saturate,
}

impl IntensityMapping {
    /// Intensity before it is placed into the pixel.
    ///
    /// `v * 255` is evaluated in `f32`, the `+ 0.5` in `f64`, and the result is
    /// truncated toward zero. NaN maps to 0.
    #[inline]
    pub fn intensity(value: f32) -> i32 {
        (f64::from(value * 255.0) + 0.5) as i32
    }

    #[inline]
    pub fn pixel(self, value: f32) -> u32 {
        let i = Self::intensity(value);
        match self {
            IntensityMapping::Overflow => {
                let bits = i as u32;
                OPAQUE_ALPHA | (bits << 16) | (bits << 8) | bits
            }
            IntensityMapping::WrapPerChannel => pack_gray(i as u8),
            IntensityMapping::Saturate => pack_gray(i.clamp(0, 255) as u8),
        }
    }
}

/// Converts the single-channel model output into an opaque grayscale image.
#[derive(Debug, Clone, Copy, Default)]
pub struct TensorDecoder {
    mapping: IntensityMapping,
}

impl TensorDecoder {
    pub fn new(mapping: IntensityMapping) -> Self {
        Self { mapping }
    }

    /// Builds a `width` x `height` grayscale image from `output`.
    ///
    /// With no output available the result is an opaque white placeholder of
    /// the same size.
    pub fn decode(
        &self,
        output: Option<&TensorBuffer>,
        width: usize,
        height: usize,
    ) -> Result<PackedImage> {
        let Some(output) = output else {
            debug!("No model output, producing {}x{} white placeholder", width, height);
            return Ok(PackedImage::filled(width, height, OPAQUE_WHITE));
        };

        let expected = width * height;
        if output.len() != expected || output.shape().channels != 1 {
            return Err(SegmentationError::BufferSizeMismatch {
                expected,
                actual: output.len(),
            });
        }

        trace!("Decoding {}x{} output tensor", width, height);

        let mapping = self.mapping;
        let pixels = output
            .as_slice()
            .iter()
            .map(|&v| mapping.pixel(v))
            .collect();

        Ok(PackedImage::new(width, height, pixels))
    }
}
