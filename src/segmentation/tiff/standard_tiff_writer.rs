use std::io::Write;

use ::tiff::encoder::compression::DeflateLevel;
use ::tiff::encoder::{Compression, TiffEncoder, colortype};
use ::tiff::tags::Predictor;
use tracing::debug;

use crate::segmentation::common::error::{Result, SegmentationError};
use crate::segmentation::image::{PackedImage, unpack_argb};
use crate::segmentation::tiff::types::{TiffCompression, TiffOutputConfig};
use crate::segmentation::tiff::writer::TiffWriter;

/// Writes packed ARGB images as 8-bit RGBA TIFF files.
pub struct StandardTiffWriter;

impl TiffWriter for StandardTiffWriter {
    fn write_tiff(
        &self,
        image: &PackedImage,
        output: &mut dyn Write,
        config: &TiffOutputConfig,
    ) -> Result<()> {
        debug!("Encoding TIFF image: {}x{}", image.width, image.height);

        if image.pixels.len() != image.pixel_count() {
            return Err(SegmentationError::BufferSizeMismatch {
                expected: image.pixel_count(),
                actual: image.pixels.len(),
            });
        }

        let rgba: Vec<u8> = image
            .pixels
            .iter()
            .flat_map(|&p| {
                let [a, r, g, b] = unpack_argb(p);
                [r, g, b, a]
            })
            .collect();

        let compression = match config.compression {
            TiffCompression::None => Compression::Uncompressed,
            TiffCompression::Lzw => Compression::Lzw,
            TiffCompression::DeflateFast => Compression::Deflate(DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => Compression::Deflate(DeflateLevel::Balanced),
            TiffCompression::DeflateBest => Compression::Deflate(DeflateLevel::Best),
        };

        let mut buffer = Vec::new();
        let mut encoder = TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| SegmentationError::EncodeError(e.to_string()))?
            .with_compression(compression);

        if let Some(predictor_val) = config.predictor {
            let predictor = match predictor_val {
                2 => Predictor::Horizontal,
                _ => Predictor::None,
            };
            encoder = encoder.with_predictor(predictor);
        }

        encoder
            .write_image::<colortype::RGBA8>(image.width as u32, image.height as u32, &rgba)
            .map_err(|e| SegmentationError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
