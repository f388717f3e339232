// ============================================================
// Integration Tests — Full Preparation Run
// ============================================================
// Runs PrepareUseCase end to end over a small Flickr8k-shaped
// temp tree. A fake normalizer stands in for the Inception
// transform, so no real image decoding is involved:
//
//   BlankNormalizer   → blank 299×299 image for every path
//   FailingNormalizer → errors on one chosen file name

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use caption_prep::{
    application::prepare_use_case::{CaptionStats, ImageStats, PrepareConfig, PrepareUseCase},
    domain::traits::ImageNormalizer,
    imaging::normalizer::INCEPTION_INPUT_SIZE,
    infra::manifest::RunManifest,
};
use image::RgbImage;

/// Returns a blank 299×299 image for every path.
struct BlankNormalizer;

impl ImageNormalizer for BlankNormalizer {
    fn normalize(&self, _path: &Path) -> Result<RgbImage> {
        Ok(RgbImage::new(INCEPTION_INPUT_SIZE, INCEPTION_INPUT_SIZE))
    }
}

/// Fails on one specific file name.
struct FailingNormalizer(&'static str);

impl ImageNormalizer for FailingNormalizer {
    fn normalize(&self, path: &Path) -> Result<RgbImage> {
        if path.file_name().and_then(|n| n.to_str()) == Some(self.0) {
            anyhow::bail!("cannot decode '{}'", path.display());
        }
        Ok(RgbImage::new(4, 4))
    }
}

const TOKENS: &str = "\
1000268201_693b08cb0e.jpg#0 A girl in a pink dress .
1000268201_693b08cb0e.jpg#1 A little girl climbing into a wooden playhouse .
1001773457_577c3a7d70.jpg#0 A black dog and a spotted dog are fighting
1002674143_1b742ab4b8.jpg#0 A little girl covered in paint sits in front of a painted rainbow .
1003163366_44323f5815.jpg#0 A man lays on a bench while his dog sits by him .

";

fn fixture(root: &Path) -> PrepareConfig {
    let raw = root.join("raw");
    let images = raw.join("Flicker8k_Dataset");
    fs::create_dir_all(&images).unwrap();

    fs::write(raw.join("Flickr8k.token.txt"), TOKENS).unwrap();
    for name in [
        "1000268201_693b08cb0e.jpg",
        "1001773457_577c3a7d70.jpg",
        "1002674143_1b742ab4b8.jpg",
        "1003163366_44323f5815.jpg",
        "9999999999_unlisted.jpg",
    ] {
        fs::write(images.join(name), b"not decoded by the fake").unwrap();
    }

    fs::write(raw.join("train.txt"), "1000268201_693b08cb0e.jpg\n1001773457_577c3a7d70.jpg\n").unwrap();
    fs::write(raw.join("dev.txt"), "1002674143_1b742ab4b8.jpg\n").unwrap();
    // Listed in both train and test: test wins
    fs::write(raw.join("test.txt"), "1003163366_44323f5815.jpg\n1001773457_577c3a7d70.jpg\n").unwrap();

    PrepareConfig {
        captions_file:        raw.join("Flickr8k.token.txt"),
        images_dir:           images,
        output_captions_file: root.join("processed/captions.txt"),
        output_images_dir:    root.join("processed/images"),
        train_list:           raw.join("train.txt"),
        val_list:             raw.join("dev.txt"),
        test_list:            raw.join("test.txt"),
        show_progress:        false,
    }
}

fn file_names(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn full_run_writes_captions_and_partitions() {
    let root   = tempfile::tempdir().unwrap();
    let config = fixture(root.path());

    let report = PrepareUseCase::new(config.clone(), BlankNormalizer).execute().unwrap();

    assert_eq!(report.captions, CaptionStats { identifiers: 4, captions: 5 });
    assert_eq!(report.images, ImageStats { train: 1, val: 1, test: 2, unlisted: 1 });

    let captions = fs::read_to_string(&config.output_captions_file).unwrap();
    let lines: Vec<&str> = captions.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "1000268201_693b08cb0e startseq  girl in pink dress endseq");
    assert_eq!(
        lines[2],
        "1001773457_577c3a7d70 startseq  black dog and spotted dog are fighting endseq"
    );

    let images = &config.output_images_dir;
    assert_eq!(
        file_names(&images.join("train")),
        BTreeSet::from(["1000268201_693b08cb0e.jpg".to_string()])
    );
    assert_eq!(
        file_names(&images.join("val")),
        BTreeSet::from(["1002674143_1b742ab4b8.jpg".to_string()])
    );
    assert_eq!(
        file_names(&images.join("test")),
        BTreeSet::from([
            "1001773457_577c3a7d70.jpg".to_string(),
            "1003163366_44323f5815.jpg".to_string(),
        ])
    );

    let written = image::open(images.join("val/1002674143_1b742ab4b8.jpg")).unwrap().to_rgb8();
    assert_eq!(written.dimensions(), (INCEPTION_INPUT_SIZE, INCEPTION_INPUT_SIZE));

    let manifest = RunManifest::load(images).unwrap();
    assert_eq!(manifest.report, report);
    assert_eq!(manifest.config, config);
}

#[test]
fn rerun_is_byte_identical_and_clears_stale_output() {
    let root   = tempfile::tempdir().unwrap();
    let config = fixture(root.path());
    let use_case = PrepareUseCase::new(config.clone(), BlankNormalizer);

    use_case.execute().unwrap();
    let first_captions = fs::read(&config.output_captions_file).unwrap();
    let first_names: Vec<BTreeSet<String>> = ["train", "val", "test"]
        .iter()
        .map(|p| file_names(&config.output_images_dir.join(p)))
        .collect();

    // Leftovers from an older run must not survive
    let stale: PathBuf = config.output_images_dir.join("train/stale.jpg");
    fs::write(&stale, b"old").unwrap();

    use_case.execute().unwrap();
    let second_captions = fs::read(&config.output_captions_file).unwrap();
    let second_names: Vec<BTreeSet<String>> = ["train", "val", "test"]
        .iter()
        .map(|p| file_names(&config.output_images_dir.join(p)))
        .collect();

    assert_eq!(first_captions, second_captions);
    assert_eq!(first_names, second_names);
    assert!(!stale.exists());
}

#[test]
fn one_bad_image_aborts_the_run() {
    let root   = tempfile::tempdir().unwrap();
    let config = fixture(root.path());

    let err = PrepareUseCase::new(config.clone(), FailingNormalizer("1002674143_1b742ab4b8.jpg"))
        .execute()
        .unwrap_err();

    assert!(format!("{err:#}").contains("1002674143_1b742ab4b8.jpg"));
    // Train was processed before val failed; test never started
    assert!(config.output_images_dir.join("train/1000268201_693b08cb0e.jpg").exists());
    assert_eq!(file_names(&config.output_images_dir.join("test")).len(), 0);
    assert!(RunManifest::load(&config.output_images_dir).is_err());
}

#[test]
fn missing_membership_list_is_fatal() {
    let root   = tempfile::tempdir().unwrap();
    let mut config = fixture(root.path());
    config.val_list = root.path().join("raw/missing.txt");

    let err = PrepareUseCase::new(config, BlankNormalizer).execute().unwrap_err();
    assert!(format!("{err:#}").contains("missing.txt"));
}
