//! Captioned-image dataset preparation.
//!
//! Cleans a Flickr8k-style caption file into `startseq … endseq`
//! training captions and writes 299×299 InceptionV3-normalized
//! images into `train/`, `val/`, and `test/` according to three
//! filename lists.
//!
//! Layers, outermost first: [`cli`] → [`application`] →
//! [`data`] / [`imaging`] / [`infra`], all sharing the plain
//! types in [`domain`].

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod imaging;
pub mod infra;
