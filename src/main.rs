use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use seg_classifier_rs::logger;
use seg_classifier_rs::segmentation::{
    Classifier, ClassifierConfig, ClassifierState, InferenceRunner, Result, StandardTiffReader,
    StandardTiffWriter, TiffCompression, TiffOutputConfig, TiffReader, TiffWriter, Timer,
    classify_frame,
};
use tracing::{error, info, warn};

const DEFAULT_MODEL_PATH: &str = "graph.onnx";

fn main() -> anyhow::Result<()> {
    logger::init("info");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        bail!("usage: seg_classifier_rs <input.tiff> <output.tiff> [model.onnx]");
    }
    let input_path = PathBuf::from(&args[0]);
    let output_path = PathBuf::from(&args[1]);
    let model_path = PathBuf::from(args.get(2).map(String::as_str).unwrap_or(DEFAULT_MODEL_PATH));

    info!("Starting segmentation classifier...");

    let config = ClassifierConfig::default();
    let setup = Timer::start("setup");
    let mut classifier =
        Classifier::from_loader(config.clone(), || load_runner(&model_path, &config));
    info!(
        "Timecost for classifier setup: {:.3}ms",
        setup.elapsed().as_secs_f64() * 1000.0
    );
    if classifier.state() != ClassifierState::Ready {
        warn!("Inference unavailable, output will be a copy of the input");
    }

    let input_data = std::fs::read(&input_path)
        .with_context(|| format!("reading {}", input_path.display()))?;
    let image = StandardTiffReader
        .read_tiff(&input_data)
        .with_context(|| format!("decoding {}", input_path.display()))?;

    let (mask, timings) = match classify_frame(&mut classifier, &image) {
        Ok(result) => result,
        Err(e) => {
            error!("Classification failed: {}", e);
            return Err(e.into());
        }
    };
    for step in timings.steps() {
        info!("Timecost to {}: {:.3}ms", step.name, step.duration.as_secs_f64() * 1000.0);
    }
    info!(
        "TOTAL Timecost to classify frame: {:.3}ms",
        timings.total_duration().as_secs_f64() * 1000.0
    );

    let output_config = TiffOutputConfig::builder()
        .compression(TiffCompression::DeflateFast)
        .build();
    let mut output_file = std::fs::File::create(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    StandardTiffWriter.write_tiff(&mask, &mut output_file, &output_config)?;

    info!(output = %output_path.display(), "Mask written");
    Ok(())
}

#[cfg(feature = "onnx")]
fn load_runner(model_path: &Path, config: &ClassifierConfig) -> Result<Box<dyn InferenceRunner>> {
    use seg_classifier_rs::segmentation::OnnxRunner;

    let runner = OnnxRunner::from_file(model_path, config.input_shape(), config.output_shape())?;
    Ok(Box::new(runner))
}

#[cfg(not(feature = "onnx"))]
fn load_runner(model_path: &Path, _config: &ClassifierConfig) -> Result<Box<dyn InferenceRunner>> {
    use seg_classifier_rs::segmentation::SegmentationError;

    Err(SegmentationError::EngineUnavailable(format!(
        "cannot load {}: built without the `onnx` feature",
        model_path.display()
    )))
}
