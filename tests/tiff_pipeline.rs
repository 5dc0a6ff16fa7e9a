use std::io::Cursor;

use seg_classifier_rs::segmentation::{
    Classifier, ClassifierConfig, InferenceRunner, PackedImage, Result, SegmentationError,
    StandardTiffReader, StandardTiffWriter, TensorBuffer, TiffCompression, TiffOutputConfig,
    TiffReader, TiffWriter, classify_frame,
};
use seg_classifier_rs::segmentation::image::{pack_argb, pack_gray};

/// Output intensity is the pixel's linear index.
struct IndexRunner;

impl InferenceRunner for IndexRunner {
    fn run(&mut self, _input: &TensorBuffer, output: &mut TensorBuffer) -> Result<()> {
        for (i, v) in output.as_mut_slice().iter_mut().enumerate() {
            *v = (i % 256) as f32 / 255.0;
        }
        Ok(())
    }
}

struct ConstantRunner(f32);

impl InferenceRunner for ConstantRunner {
    fn run(&mut self, _input: &TensorBuffer, output: &mut TensorBuffer) -> Result<()> {
        output.as_mut_slice().fill(self.0);
        Ok(())
    }
}

fn sample_image(width: usize, height: usize) -> PackedImage {
    let pixels = (0..width * height)
        .map(|i| pack_argb(0xFF, i as u8, (i / 2) as u8, 255 - i as u8))
        .collect();
    PackedImage::new(width, height, pixels)
}

#[test]
fn test_tiff_round_trip_preserves_pixels() {
    let image = PackedImage::new(
        3,
        2,
        vec![
            0xFF00_0000,
            0x80FF_0000,
            0xFF00_FF00,
            0x0000_00FF,
            0xFF12_3456,
            0xFFFF_FFFF,
        ],
    );

    for compression in [
        TiffCompression::None,
        TiffCompression::Lzw,
        TiffCompression::DeflateBalanced,
    ] {
        let config = TiffOutputConfig::builder().compression(compression).build();
        let mut encoded = Cursor::new(Vec::new());
        StandardTiffWriter
            .write_tiff(&image, &mut encoded, &config)
            .unwrap();

        let decoded = StandardTiffReader.read_tiff(encoded.get_ref()).unwrap();
        assert_eq!(decoded, image, "compression {:?}", compression);
    }
}

#[test]
fn test_classify_tiff_file() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("input.tiff");
    let output_path = dir.path().join("mask.tiff");
    let (width, height) = (16, 8);

    let mut input_file = std::fs::File::create(&input_path).unwrap();
    StandardTiffWriter
        .write_tiff(&sample_image(width, height), &mut input_file, &TiffOutputConfig::default())
        .unwrap();
    drop(input_file);

    let config = ClassifierConfig::builder().resolution(width, height).build();
    let mut classifier = Classifier::with_runner(config, IndexRunner);
    let image = StandardTiffReader
        .read_tiff(&std::fs::read(&input_path).unwrap())
        .unwrap();
    let mask = classifier.classify(&image).unwrap();

    let mut output_file = std::fs::File::create(&output_path).unwrap();
    StandardTiffWriter
        .write_tiff(&mask, &mut output_file, &TiffOutputConfig::default())
        .unwrap();
    drop(output_file);

    let written = StandardTiffReader
        .read_tiff(&std::fs::read(&output_path).unwrap())
        .unwrap();
    assert_eq!((written.width, written.height), (width, height));
    for y in 0..height {
        for x in 0..width {
            let index = y * width + x;
            assert_eq!(written.get(x, y), Some(pack_gray(index as u8)));
        }
    }
}

#[test]
fn test_wrong_resolution_from_file_is_an_error() {
    let mut encoded = Cursor::new(Vec::new());
    StandardTiffWriter
        .write_tiff(&sample_image(10, 10), &mut encoded, &TiffOutputConfig::default())
        .unwrap();
    let image = StandardTiffReader.read_tiff(encoded.get_ref()).unwrap();

    let mut classifier = Classifier::with_runner(ClassifierConfig::default(), IndexRunner);
    let result = classifier.classify(&image);

    assert!(matches!(
        result,
        Err(SegmentationError::DimensionMismatch { width: 10, height: 10, .. })
    ));
}

#[test]
fn test_garbage_input_is_decode_error() {
    let result = StandardTiffReader.read_tiff(b"definitely not a tiff");
    assert!(matches!(result, Err(SegmentationError::DecodeError(_))));
}

#[test]
fn test_classify_frame_at_any_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("frame.tiff");
    let output_path = dir.path().join("frame_mask.tiff");
    let (width, height) = (300, 200);

    let mut input_file = std::fs::File::create(&input_path).unwrap();
    StandardTiffWriter
        .write_tiff(&sample_image(width, height), &mut input_file, &TiffOutputConfig::default())
        .unwrap();
    drop(input_file);

    let mut classifier = Classifier::with_runner(ClassifierConfig::default(), ConstantRunner(0.5));
    let frame = StandardTiffReader
        .read_tiff(&std::fs::read(&input_path).unwrap())
        .unwrap();
    let (mask, timings) = classify_frame(&mut classifier, &frame).unwrap();

    let mut output_file = std::fs::File::create(&output_path).unwrap();
    StandardTiffWriter
        .write_tiff(&mask, &mut output_file, &TiffOutputConfig::default())
        .unwrap();
    drop(output_file);

    let written = StandardTiffReader
        .read_tiff(&std::fs::read(&output_path).unwrap())
        .unwrap();
    assert_eq!((written.width, written.height), (width, height));
    assert!(written.pixels.iter().all(|&p| p == 0xFF80_8080));

    let names: Vec<&str> = timings.steps().iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["scale_in", "encode", "run", "decode", "scale_out"]);
}

#[test]
fn test_classify_frame_at_model_resolution_skips_scaling() {
    let config = ClassifierConfig::builder().resolution(16, 8).build();
    let mut classifier = Classifier::with_runner(config, IndexRunner);

    let (mask, timings) = classify_frame(&mut classifier, &sample_image(16, 8)).unwrap();

    assert_eq!(mask.get(3, 1), Some(pack_gray(19)));
    let names: Vec<&str> = timings.steps().iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["encode", "run", "decode"]);
}

#[test]
fn test_classify_frame_without_engine_returns_frame() {
    let mut classifier: Classifier<ConstantRunner> =
        Classifier::from_loader(ClassifierConfig::default(), || {
            Err(SegmentationError::EngineUnavailable("no backend".to_string()))
        });
    let frame = sample_image(30, 20);

    let (result, timings) = classify_frame(&mut classifier, &frame).unwrap();

    assert_eq!(result, frame);
    assert!(timings.is_empty());
}
