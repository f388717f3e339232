// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Two subcommands:
//   prepare  — full run: captions file + partitioned images
//   captions — regenerate only the captions file
//
// Every path flag defaults to the Flickr8k layout under ./data.
// `--config` loads a JSON PrepareConfig instead of the flags.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::prepare_use_case::{
    PrepareConfig, DEFAULT_CAPTIONS_FILE, DEFAULT_IMAGES_DIR, DEFAULT_OUTPUT_CAPTIONS_FILE,
    DEFAULT_OUTPUT_IMAGES_DIR, DEFAULT_TEST_LIST, DEFAULT_TRAIN_LIST, DEFAULT_VAL_LIST,
};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clean captions and normalize images into train/val/test
    Prepare(PrepareArgs),

    /// Clean captions only; images are left untouched
    Captions(CaptionsArgs),
}

/// All arguments for the `prepare` command
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// JSON configuration file; when given, path flags are ignored
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Raw caption token file (<id>.jpg#<n> <caption>)
    #[arg(long, default_value = DEFAULT_CAPTIONS_FILE)]
    pub captions_file: PathBuf,

    /// Flat directory of source .jpg images
    #[arg(long, default_value = DEFAULT_IMAGES_DIR)]
    pub images_dir: PathBuf,

    /// Where the cleaned captions file is written
    #[arg(long, default_value = DEFAULT_OUTPUT_CAPTIONS_FILE)]
    pub output_captions_file: PathBuf,

    /// Root of the train/ val/ test/ image tree (deleted and recreated)
    #[arg(long, default_value = DEFAULT_OUTPUT_IMAGES_DIR)]
    pub output_images_dir: PathBuf,

    /// List of training image filenames, one per line
    #[arg(long, default_value = DEFAULT_TRAIN_LIST)]
    pub train_list: PathBuf,

    /// List of validation image filenames, one per line
    #[arg(long, default_value = DEFAULT_VAL_LIST)]
    pub val_list: PathBuf,

    /// List of test image filenames, one per line
    #[arg(long, default_value = DEFAULT_TEST_LIST)]
    pub test_list: PathBuf,

    /// Hide progress bars
    #[arg(long)]
    pub quiet: bool,
}

/// Convert CLI PrepareArgs into the application-layer PrepareConfig.
/// The application layer never sees clap types.
impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepareConfig {
            captions_file:        a.captions_file,
            images_dir:           a.images_dir,
            output_captions_file: a.output_captions_file,
            output_images_dir:    a.output_images_dir,
            train_list:           a.train_list,
            val_list:             a.val_list,
            test_list:            a.test_list,
            show_progress:        !a.quiet,
        }
    }
}

/// All arguments for the `captions` command
#[derive(Args, Debug)]
pub struct CaptionsArgs {
    /// JSON configuration file; when given, path flags are ignored
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Raw caption token file (<id>.jpg#<n> <caption>)
    #[arg(long, default_value = DEFAULT_CAPTIONS_FILE)]
    pub captions_file: PathBuf,

    /// Where the cleaned captions file is written
    #[arg(long, default_value = DEFAULT_OUTPUT_CAPTIONS_FILE)]
    pub output_captions_file: PathBuf,

    /// Hide progress bars
    #[arg(long)]
    pub quiet: bool,
}

impl From<CaptionsArgs> for PrepareConfig {
    fn from(a: CaptionsArgs) -> Self {
        PrepareConfig {
            captions_file:        a.captions_file,
            output_captions_file: a.output_captions_file,
            show_progress:        !a.quiet,
            ..PrepareConfig::default()
        }
    }
}
