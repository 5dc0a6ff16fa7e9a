//! Segmentation classifier module
//!
//! Owns the tensor buffers and the inference capability and sequences
//! encode, run and decode for each frame.

mod pipeline;
mod timing;
mod types;


pub use pipeline::Classifier;
pub use timing::{PipelineTimings, StepTiming, Timer};
pub use types::{ClassifierConfig, ClassifierConfigBuilder, ClassifierState, InferenceFallback};
