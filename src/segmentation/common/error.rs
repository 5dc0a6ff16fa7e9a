use thiserror::Error;

#[derive(Error, Debug)]
pub enum SegmentationError {
    #[error("Image is {width}x{height}, model expects {expected_width}x{expected_height}")]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Tensor buffer holds {actual} values, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Failed to load model: {0}")]
    ModelLoadError(String),

    #[error("Invalid classifier configuration: {0}")]
    InvalidConfig(String),

    #[error("Inference engine unavailable: {0}")]
    EngineUnavailable(String),

    #[error("Inference failed: {0}")]
    InferenceError(String),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode TIFF image: {0}")]
    DecodeError(String),

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SegmentationError>;
