pub mod logger;
pub mod segmentation;
