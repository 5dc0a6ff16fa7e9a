use tracing::trace;

use crate::segmentation::common::error::{Result, SegmentationError};
use crate::segmentation::image::PackedImage;
use crate::segmentation::tensor::normalization::Normalization;
use crate::segmentation::tensor::types::{INPUT_CHANNELS, TensorBuffer, TensorShape};

/// Converts packed ARGB images into the model's normalized input layout.
///
/// The output is row-major and channel-interleaved: `R, G, B` for pixel 0,
/// then pixel 1, and so on. Alpha is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct TensorEncoder {
    normalization: Normalization,
}

impl TensorEncoder {
    pub fn new(normalization: Normalization) -> Self {
        Self { normalization }
    }

    /// Overwrites `buffer` with the normalized channels of `image`.
    ///
    /// No scaling is performed: the image must already be at the buffer's
    /// resolution, otherwise [`SegmentationError::DimensionMismatch`] is returned
    /// and the buffer is left untouched.
    pub fn encode(&self, image: &PackedImage, buffer: &mut TensorBuffer) -> Result<()> {
        let shape = buffer.shape();
        check_image_matches(image, shape)?;
        if shape.channels != INPUT_CHANNELS || buffer.len() != shape.len() {
            return Err(SegmentationError::BufferSizeMismatch {
                expected: shape.pixel_count() * INPUT_CHANNELS,
                actual: buffer.len(),
            });
        }

        trace!("Encoding {}x{} image", image.width, image.height);

        let norm = self.normalization;
        for (dst, &pixel) in buffer
            .as_mut_slice()
            .chunks_exact_mut(INPUT_CHANNELS)
            .zip(image.pixels.iter())
        {
            dst[0] = norm.apply((pixel >> 16) as u8);
            dst[1] = norm.apply((pixel >> 8) as u8);
            dst[2] = norm.apply(pixel as u8);
        }

        Ok(())
    }

    /// Allocates a fresh input buffer for `image` and encodes into it.
    pub fn encode_new(&self, image: &PackedImage) -> Result<TensorBuffer> {
        let mut buffer = TensorBuffer::zeroed(TensorShape::input(image.width, image.height));
        self.encode(image, &mut buffer)?;
        Ok(buffer)
    }
}

/// Checks that `image` is exactly at the resolution of `shape`.
pub(crate) fn check_image_matches(image: &PackedImage, shape: TensorShape) -> Result<()> {
    if image.width != shape.width || image.height != shape.height {
        return Err(SegmentationError::DimensionMismatch {
            expected_width: shape.width,
            expected_height: shape.height,
            width: image.width,
            height: image.height,
        });
    }

    if image.pixels.len() != shape.pixel_count() {
        return Err(SegmentationError::BufferSizeMismatch {
            expected: shape.pixel_count(),
            actual: image.pixels.len(),
        });
    }

    Ok(())
}
