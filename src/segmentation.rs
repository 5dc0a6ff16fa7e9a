//! Segmentation pipeline module
//!
//! Converts packed ARGB images into the model's normalized input tensor,
//! invokes an injected inference capability, and reconstructs the model's
//! single-channel output into an opaque grayscale image.

pub mod classifier;
pub mod common;
pub mod frame;
pub mod image;
pub mod inference;
pub mod tensor;
pub mod tiff;

pub use self::common::{Result, SegmentationError};

pub use self::frame::classify_frame;
pub use self::image::{OPAQUE_WHITE, PackedImage, resize_bilinear};

pub use self::tensor::{
    IMAGE_MEAN, IMAGE_STD, IntensityMapping, Normalization, TensorBuffer, TensorDecoder,
    TensorEncoder, TensorShape,
};

pub use self::inference::InferenceRunner;
#[cfg(feature = "onnx")]
pub use self::inference::OnnxRunner;

pub use self::classifier::{
    Classifier, ClassifierConfig, ClassifierConfigBuilder, ClassifierState, InferenceFallback,
    PipelineTimings, Timer,
};

pub use self::tiff::{
    StandardTiffReader, StandardTiffWriter, TiffCompression, TiffOutputConfig, TiffReader,
    TiffWriter,
};
