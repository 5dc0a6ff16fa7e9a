//! Classifier configuration and state types

use crate::segmentation::tensor::{DEFAULT_MODEL_SIZE, IntensityMapping, Normalization, TensorShape};

/// Lifecycle of a [`Classifier`](super::Classifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierState {
    /// Setup has not run yet; frames pass through unchanged
    Uninitialized,
    /// Buffers allocated and the inference capability is available
    Ready,
    /// Setup failed; every frame passes through unchanged
    Failed,
}

/// What to return for a frame whose inference call failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InferenceFallback {
    /// Return the input image unchanged
    #[default]
    PassThrough,
    /// Return an opaque white image of the model resolution
    Placeholder,
}

/// Configuration for the segmentation classifier
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Model input width in pixels
    pub width: usize,
    /// Model input height in pixels
    pub height: usize,
    /// Channel normalization applied before inference
    pub normalization: Normalization,
    /// Handling of model output values outside [0, 1]
    pub intensity_mapping: IntensityMapping,
    /// Result for frames whose inference call fails
    pub on_inference_error: InferenceFallback,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_MODEL_SIZE,
            height: DEFAULT_MODEL_SIZE,
            normalization: Normalization::default(),
            intensity_mapping: IntensityMapping::Overflow,
            on_inference_error: InferenceFallback::PassThrough,
        }
    }
}

impl ClassifierConfig {
    pub fn builder() -> ClassifierConfigBuilder {
        ClassifierConfigBuilder::default()
    }

    pub fn input_shape(&self) -> TensorShape {
        TensorShape::input(self.width, self.height)
    }

    pub fn output_shape(&self) -> TensorShape {
        TensorShape::output(self.width, self.height)
    }
}

/// Builder for ClassifierConfig
#[derive(Default)]
pub struct ClassifierConfigBuilder {
    width: Option<usize>,
    height: Option<usize>,
    normalization: Option<Normalization>,
    intensity_mapping: Option<IntensityMapping>,
    on_inference_error: Option<InferenceFallback>,
}

impl ClassifierConfigBuilder {
    pub fn resolution(mut self, width: usize, height: usize) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = Some(normalization);
        self
    }

    pub fn intensity_mapping(mut self, mapping: IntensityMapping) -> Self {
        self.intensity_mapping = Some(mapping);
        self
    }

    pub fn on_inference_error(mut self, fallback: InferenceFallback) -> Self {
        self.on_inference_error = Some(fallback);
        self
    }

    pub fn build(self) -> ClassifierConfig {
        let default = ClassifierConfig::default();
        ClassifierConfig {
            width: self.width.unwrap_or(default.width),
            height: self.height.unwrap_or(default.height),
            normalization: self.normalization.unwrap_or(default.normalization),
            intensity_mapping: self.intensity_mapping.unwrap_or(default.intensity_mapping),
            on_inference_error: self.on_inference_error.unwrap_or(default.on_inference_error),
        }
    }
}
