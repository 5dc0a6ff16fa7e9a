//! Inference module
//!
//! The model execution capability the classifier is built around, plus the
//! optional ONNX Runtime adapter.

#[cfg(feature = "onnx")]
pub mod onnx_runner;
mod runner;

#[cfg(feature = "onnx")]
pub use onnx_runner::OnnxRunner;
pub use runner::InferenceRunner;
