use crate::segmentation::common::error::Result;
use crate::segmentation::tensor::{TensorBuffer, TensorShape};

/// Model execution capability.
///
/// Implementations read the normalized input tensor and fill the
/// pre-allocated output tensor in place. The classifier guarantees that
/// `input` is fully written and that `output` holds exactly one float per
/// pixel before calling [`InferenceRunner::run`].
pub trait InferenceRunner {
    fn run(&mut self, input: &TensorBuffer, output: &mut TensorBuffer) -> Result<()>;

    /// Input and output shapes the underlying model was built for, if known.
    fn io_shapes(&self) -> Option<(TensorShape, TensorShape)> {
        None
    }
}

impl<T: InferenceRunner + ?Sized> InferenceRunner for Box<T> {
    fn run(&mut self, input: &TensorBuffer, output: &mut TensorBuffer) -> Result<()> {
        (**self).run(input, output)
    }

    fn io_shapes(&self) -> Option<(TensorShape, TensorShape)> {
        (**self).io_shapes()
    }
}
