//! ONNX Runtime backed inference.
//!
//! The model file is loaded once when the runner is built. Inputs are fed as a
//! single NHWC `[1, H, W, 3]` tensor and the first model output is copied back
//! into the caller's output buffer.

use std::path::Path;

use ort::session::Session;
use ort::session::builder::GraphOptimizationLevel;
use ort::value::Tensor;
use tracing::{debug, info};

use crate::segmentation::common::error::{Result, SegmentationError};
use crate::segmentation::inference::runner::InferenceRunner;
use crate::segmentation::tensor::{TensorBuffer, TensorShape};

pub struct OnnxRunner {
    session: Session,
    input_shape: TensorShape,
    output_shape: TensorShape,
}

impl OnnxRunner {
    /// Loads the model at `path` for the given input and output shapes.
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        input_shape: TensorShape,
        output_shape: TensorShape,
    ) -> Result<Self> {
        let path = path.as_ref();
        info!(model = %path.display(), "Loading ONNX model");

        if !path.exists() {
            return Err(SegmentationError::ModelLoadError(format!(
                "{}: file not found",
                path.display()
            )));
        }

        let session = Session::builder()
            .map_err(|e| load_error(path, e))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| load_error(path, e))?
            .commit_from_file(path)
            .map_err(|e| load_error(path, e))?;

        debug!(
            inputs = session.inputs.len(),
            outputs = session.outputs.len(),
            "ONNX session ready"
        );

        Ok(Self {
            session,
            input_shape,
            output_shape,
        })
    }
}

fn load_error(path: &Path, e: impl std::fmt::Display) -> SegmentationError {
    SegmentationError::ModelLoadError(format!("{}: {}", path.display(), e))
}

impl InferenceRunner for OnnxRunner {
    fn run(&mut self, input: &TensorBuffer, output: &mut TensorBuffer) -> Result<()> {
        let shape = input.shape().nhwc();
        let input_value = Tensor::from_array((shape, input.as_slice().to_vec()))
            .map_err(|e| SegmentationError::InferenceError(e.to_string()))?;

        let outputs = self
            .session
            .run(ort::inputs![input_value])
            .map_err(|e| SegmentationError::InferenceError(e.to_string()))?;

        let value = outputs
            .values()
            .next()
            .ok_or_else(|| SegmentationError::InferenceError("model produced no output".to_string()))?;

        let (_, data) = value
            .try_extract_tensor::<f32>()
            .map_err(|e| SegmentationError::InferenceError(e.to_string()))?;

        if data.len() != output.len() {
            return Err(SegmentationError::BufferSizeMismatch {
                expected: output.len(),
                actual: data.len(),
            });
        }

        output.as_mut_slice().copy_from_slice(data);
        Ok(())
    }

    fn io_shapes(&self) -> Option<(TensorShape, TensorShape)> {
        Some((self.input_shape, self.output_shape))
    }
}
