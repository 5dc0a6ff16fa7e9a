//! TIFF file boundary module
//!
//! Reads source images from and writes masks to 8-bit TIFF files.

mod reader;
mod standard_tiff_reader;
mod standard_tiff_writer;
pub mod types;
mod writer;

pub use reader::TiffReader;
pub use standard_tiff_reader::StandardTiffReader;
pub use standard_tiff_writer::StandardTiffWriter;
pub use types::{TiffCompression, TiffOutputConfig, TiffOutputConfigBuilder};
pub use writer::TiffWriter;
