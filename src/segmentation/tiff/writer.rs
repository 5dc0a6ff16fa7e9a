use std::io::Write;

use crate::segmentation::common::error::Result;
use crate::segmentation::image::PackedImage;
use crate::segmentation::tiff::types::TiffOutputConfig;

pub trait TiffWriter {
    fn write_tiff(
        &self,
        image: &PackedImage,
        output: &mut dyn Write,
        config: &TiffOutputConfig,
    ) -> Result<()>;
}
