//! TIFF reader producing packed ARGB images.
//!
//! Supports 8-bit grayscale, RGB and RGBA TIFF files. Images without an alpha
//! channel are read as fully opaque.

use std::io::Cursor;

use ::tiff::ColorType;
use ::tiff::decoder::{Decoder, DecodingResult};
use tracing::debug;

use crate::segmentation::common::error::{Result, SegmentationError};
use crate::segmentation::image::{PackedImage, pack_argb};
use crate::segmentation::tiff::reader::TiffReader;

pub struct StandardTiffReader;

impl TiffReader for StandardTiffReader {
    fn read_tiff(&self, data: &[u8]) -> Result<PackedImage> {
        debug!("Decoding TIFF image, {} bytes", data.len());

        let mut decoder = Decoder::new(Cursor::new(data))
            .map_err(|e| SegmentationError::DecodeError(e.to_string()))?;

        let (width, height) = decoder
            .dimensions()
            .map_err(|e| SegmentationError::DecodeError(e.to_string()))?;
        let color_type = decoder
            .colortype()
            .map_err(|e| SegmentationError::DecodeError(e.to_string()))?;

        let samples = match decoder
            .read_image()
            .map_err(|e| SegmentationError::DecodeError(e.to_string()))?
        {
            DecodingResult::U8(samples) => samples,
            _ => {
                return Err(SegmentationError::UnsupportedFormat(format!(
                    "{:?} with more than 8 bits per sample",
                    color_type
                )));
            }
        };

        let channels = match color_type {
            ColorType::Gray(8) => 1,
            ColorType::RGB(8) => 3,
            ColorType::RGBA(8) => 4,
            other => {
                return Err(SegmentationError::UnsupportedFormat(format!("{:?}", other)));
            }
        };

        let (width, height) = (width as usize, height as usize);
        if samples.len() != width * height * channels {
            return Err(SegmentationError::DecodeError(format!(
                "expected {} samples for {}x{}x{}, got {}",
                width * height * channels,
                width,
                height,
                channels,
                samples.len()
            )));
        }

        let pixels = samples
            .chunks_exact(channels)
            .map(|s| match s {
                [v] => pack_argb(0xFF, *v, *v, *v),
                [r, g, b] => pack_argb(0xFF, *r, *g, *b),
                [r, g, b, a] => pack_argb(*a, *r, *g, *b),
                _ => unreachable!("chunks_exact yields {channels} samples"),
            })
            .collect();

        debug!("Decoded image: {}x{} ({:?})", width, height, color_type);
        Ok(PackedImage::new(width, height, pixels))
    }
}
