//! Tensor conversion module
//!
//! Encoding of packed images into normalized model input and decoding of the
//! model's single-channel output back into grayscale images.

pub mod decoder;
pub mod encoder;
pub mod normalization;
pub mod types;

pub use decoder::{IntensityMapping, TensorDecoder};
pub use encoder::TensorEncoder;
pub use normalization::{IMAGE_MEAN, IMAGE_STD, Normalization};
pub use types::{
    DEFAULT_MODEL_SIZE, INPUT_CHANNELS, OUTPUT_CHANNELS, TensorBuffer, TensorShape,
};
