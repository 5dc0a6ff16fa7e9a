use crate::segmentation::common::error::Result;
use crate::segmentation::image::PackedImage;

pub trait TiffReader {
    fn read_tiff(&self, data: &[u8]) -> Result<PackedImage>;
}
