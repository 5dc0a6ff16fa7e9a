//! Shell-side frame classification.
//!
//! Frames of any size are scaled to the model resolution, classified, and
//! the mask is scaled back to the frame size. When the classifier is not
//! ready the frame is returned untouched without any rescaling.

use tracing::{debug, instrument};

use crate::segmentation::classifier::{Classifier, ClassifierState, PipelineTimings};
use crate::segmentation::common::error::Result;
use crate::segmentation::image::{PackedImage, resize_bilinear};
use crate::segmentation::inference::InferenceRunner;

#[instrument(skip(classifier, frame), fields(width = frame.width, height = frame.height))]
pub fn classify_frame<R: InferenceRunner>(
    classifier: &mut Classifier<R>,
    frame: &PackedImage,
) -> Result<(PackedImage, PipelineTimings)> {
    if classifier.state() != ClassifierState::Ready {
        return classifier.classify_with_timings(frame);
    }

    let shape = classifier.input_shape();
    let needs_scaling = (frame.width, frame.height) != (shape.width, shape.height);
    let mut timings = PipelineTimings::new();

    let model_frame = if needs_scaling {
        debug!(
            "Scaling {}x{} frame to {}x{}",
            frame.width, frame.height, shape.width, shape.height
        );
        Some(timings.measure("scale_in", || {
            resize_bilinear(frame, shape.width, shape.height)
        })?)
    } else {
        None
    };

    let (mask, phases) = classifier.classify_with_timings(model_frame.as_ref().unwrap_or(frame))?;
    for step in phases.steps() {
        timings.add_step(step.name, step.duration);
    }

    let mask = if needs_scaling {
        timings.measure("scale_out", || resize_bilinear(&mask, frame.width, frame.height))?
    } else {
        mask
    };

    Ok((mask, timings))
}
