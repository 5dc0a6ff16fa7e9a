use tracing::{debug, error, info, instrument, warn};

use crate::segmentation::{
    classifier::{ClassifierConfig, ClassifierState, InferenceFallback, PipelineTimings},
    common::error::{Result, SegmentationError},
    image::PackedImage,
    inference::InferenceRunner,
    tensor::{TensorBuffer, TensorDecoder, TensorEncoder, TensorShape},
};

/// Tensors and runner owned by a ready classifier.
struct Engine<R> {
    runner: R,
    input: TensorBuffer,
    output: TensorBuffer,
}

enum Stage<R> {
    Uninitialized,
    Ready(Engine<R>),
    Failed(String),
}

/// Runs encode, inference and decode for one frame at a time.
///
/// The input and output tensors are allocated once during setup and reused
/// for every call. When setup fails the classifier stays usable: frames are
/// returned unchanged instead of raising errors.
pub struct Classifier<R: InferenceRunner> {
    config: ClassifierConfig,
    encoder: TensorEncoder,
    decoder: TensorDecoder,
    stage: Stage<R>,
}

impl<R: InferenceRunner> Classifier<R> {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            encoder: TensorEncoder::new(config.normalization),
            decoder: TensorDecoder::new(config.intensity_mapping),
            config,
            stage: Stage::Uninitialized,
        }
    }

    /// Creates a classifier and runs setup with an already built runner.
    pub fn with_runner(config: ClassifierConfig, runner: R) -> Self {
        Self::from_loader(config, || Ok(runner))
    }

    /// Creates a classifier and runs setup with `loader`.
    pub fn from_loader<F>(config: ClassifierConfig, loader: F) -> Self
    where
        F: FnOnce() -> Result<R>,
    {
        let mut classifier = Self::new(config);
        classifier.initialize(loader);
        classifier
    }

    /// One-time setup of the inference capability and the tensor buffers.
    ///
    /// Errors are logged and leave the classifier in
    /// [`ClassifierState::Failed`]. Only the first call has any effect.
    #[instrument(skip(self, loader), fields(width = self.config.width, height = self.config.height))]
    pub fn initialize<F>(&mut self, loader: F) -> ClassifierState
    where
        F: FnOnce() -> Result<R>,
    {
        if !matches!(self.stage, Stage::Uninitialized) {
            warn!(state = ?self.state(), "Classifier already initialized; ignoring");
            return self.state();
        }

        let outcome = self
            .validate_config()
            .and_then(|()| loader())
            .and_then(|runner| self.prepare(runner));

        self.stage = match outcome {
            Ok(engine) => {
                info!("Created segmentation classifier");
                Stage::Ready(engine)
            }
            Err(e) => {
                error!(error = %e, "Classifier setup failed; frames will pass through unchanged");
                Stage::Failed(e.to_string())
            }
        };

        self.state()
    }

    fn validate_config(&self) -> Result<()> {
        if self.config.width == 0 || self.config.height == 0 {
            return Err(SegmentationError::InvalidConfig(format!(
                "resolution {}x{} is empty",
                self.config.width, self.config.height
            )));
        }

        let norm = self.config.normalization;
        if norm.std == 0.0 || !norm.std.is_finite() || !norm.mean.is_finite() {
            return Err(SegmentationError::InvalidConfig(format!(
                "normalization mean={} std={} is not usable",
                norm.mean, norm.std
            )));
        }

        Ok(())
    }

    fn prepare(&self, runner: R) -> Result<Engine<R>> {
        let input_shape = self.config.input_shape();
        let output_shape = self.config.output_shape();

        if let Some((model_input, model_output)) = runner.io_shapes() {
            if model_input != input_shape || model_output != output_shape {
                return Err(SegmentationError::ModelLoadError(format!(
                    "model expects {:?} -> {:?}, classifier configured for {:?} -> {:?}",
                    model_input, model_output, input_shape, output_shape
                )));
            }
        }

        debug!(
            input_len = input_shape.len(),
            output_len = output_shape.len(),
            "Allocating tensor buffers"
        );

        Ok(Engine {
            runner,
            input: TensorBuffer::zeroed(input_shape),
            output: TensorBuffer::zeroed(output_shape),
        })
    }

    /// Segments `image` and returns the grayscale mask.
    ///
    /// Only [`SegmentationError::DimensionMismatch`] (and the related
    /// [`SegmentationError::BufferSizeMismatch`] for a malformed image) are
    /// returned; a missing engine or a failed inference call never is.
    pub fn classify(&mut self, image: &PackedImage) -> Result<PackedImage> {
        self.classify_with_timings(image).map(|(mask, _)| mask)
    }

    #[instrument(skip(self, image), fields(width = image.width, height = image.height))]
    pub fn classify_with_timings(
        &mut self,
        image: &PackedImage,
    ) -> Result<(PackedImage, PipelineTimings)> {
        let mut timings = PipelineTimings::new();

        let engine = match &mut self.stage {
            Stage::Ready(engine) => engine,
            Stage::Uninitialized => {
                warn!("Image classifier has not been initialized; skipped");
                return Ok((image.clone(), timings));
            }
            Stage::Failed(reason) => {
                debug!(reason = %reason, "Image classifier unavailable; passing frame through");
                return Ok((image.clone(), timings));
            }
        };

        timings.measure("encode", || {
            let _span = tracing::info_span!("encode").entered();
            self.encoder.encode(image, &mut engine.input)
        })?;

        let ran = timings.measure("run", || {
            let _span = tracing::info_span!("run").entered();
            engine.runner.run(&engine.input, &mut engine.output)
        });

        let output = match ran {
            Ok(()) => Some(&engine.output),
            Err(e) => {
                error!(error = %e, "Inference failed; frame bypassed");
                match self.config.on_inference_error {
                    InferenceFallback::PassThrough => return Ok((image.clone(), timings)),
                    InferenceFallback::Placeholder => None,
                }
            }
        };

        let shape = engine.output.shape();
        let mask = timings.measure("decode", || {
            let _span = tracing::info_span!("decode").entered();
            self.decoder.decode(output, shape.width, shape.height)
        })?;

        timings.log_summary();
        Ok((mask, timings))
    }

    pub fn state(&self) -> ClassifierState {
        match self.stage {
            Stage::Uninitialized => ClassifierState::Uninitialized,
            Stage::Ready(_) => ClassifierState::Ready,
            Stage::Failed(_) => ClassifierState::Failed,
        }
    }

    /// Reason recorded when setup failed.
    pub fn failure_reason(&self) -> Option<&str> {
        match &self.stage {
            Stage::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn input_shape(&self) -> TensorShape {
        self.config.input_shape()
    }

    pub fn output_shape(&self) -> TensorShape {
        self.config.output_shape()
    }

    pub fn runner(&self) -> Option<&R> {
        match &self.stage {
            Stage::Ready(engine) => Some(&engine.runner),
            _ => None,
        }
    }

    pub(crate) fn buffers(&self) -> Option<(&TensorBuffer, &TensorBuffer)> {
        match &self.stage {
            Stage::Ready(engine) => Some((&engine.input, &engine.output)),
            _ => None,
        }
    }
}
