//! Bilinear rescaling of packed images.
//!
//! Used by the shell to bring frames to the model resolution and masks back
//! to the frame resolution. The classifier itself never rescales.

use ::image::RgbaImage;
use ::image::imageops::{self, FilterType};

use crate::segmentation::common::error::{Result, SegmentationError};
use crate::segmentation::image::types::{PackedImage, pack_argb, unpack_argb};

/// Resamples `image` to exactly `width` x `height` with a triangle filter.
pub fn resize_bilinear(image: &PackedImage, width: usize, height: usize) -> Result<PackedImage> {
    if width == 0 || height == 0 {
        return Err(SegmentationError::InvalidDimensions(width, height));
    }
    if image.width == 0 || image.height == 0 {
        return Err(SegmentationError::InvalidDimensions(image.width, image.height));
    }
    if image.pixels.len() != image.pixel_count() {
        return Err(SegmentationError::BufferSizeMismatch {
            expected: image.pixel_count(),
            actual: image.pixels.len(),
        });
    }
    if (image.width, image.height) == (width, height) {
        return Ok(image.clone());
    }

    let rgba: Vec<u8> = image
        .pixels
        .iter()
        .flat_map(|&p| {
            let [a, r, g, b] = unpack_argb(p);
            [r, g, b, a]
        })
        .collect();

    let (source_width, source_height) = to_u32(image.width, image.height)?;
    let (target_width, target_height) = to_u32(width, height)?;
    let source = RgbaImage::from_raw(source_width, source_height, rgba)
        .ok_or(SegmentationError::InvalidDimensions(image.width, image.height))?;

    let resized = imageops::resize(&source, target_width, target_height, FilterType::Triangle);

    let pixels = resized
        .into_raw()
        .chunks_exact(4)
        .map(|c| pack_argb(c[3], c[0], c[1], c[2]))
        .collect();

    Ok(PackedImage::new(width, height, pixels))
}

fn to_u32(width: usize, height: usize) -> Result<(u32, u32)> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(SegmentationError::InvalidDimensions(width, height)),
    }
}
