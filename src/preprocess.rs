//! Deterministic preprocessing between the decoded grid and the classifier
//! input. No learned parameters; the channel means are fixed constants from
//! the backbone's training-time preprocessing.

use crate::config;
use crate::error::{PredictError, Result};
use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage};
use tracing::debug;

/// A preprocessed image: flat f32 buffer plus its batched NHWC shape
#[derive(Debug, Clone)]
pub struct InputTensor {
    data: Vec<f32>,
    shape: [i64; 4],
}

impl InputTensor {
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn shape(&self) -> [i64; 4] {
        self.shape
    }
}

/// Turn a decoded grayscale grid into the classifier's input: 3-channel
/// replication, bilinear resize to the training resolution, f32 cast,
/// RGB->BGR flip with per-channel mean subtraction, leading batch axis.
pub fn preprocess(gray: &GrayImage) -> Result<InputTensor> {
    if gray.width() == 0 || gray.height() == 0 {
        return Err(PredictError::EmptyImage);
    }

    let rgb = DynamicImage::ImageLuma8(gray.clone()).to_rgb8();
    debug!("replicated to 3 channels: {}x{}", rgb.width(), rgb.height());

    let side = config::INPUT_SIDE;
    let resized = imageops::resize(&rgb, side, side, FilterType::Triangle);
    debug!("resized to {side}x{side}");

    let [mean_b, mean_g, mean_r] = config::CHANNEL_MEANS_BGR;
    let mut data = Vec::with_capacity((side * side * 3) as usize);
    for pixel in resized.pixels() {
        let [r, g, b] = pixel.0;
        data.push(b as f32 - mean_b);
        data.push(g as f32 - mean_g);
        data.push(r as f32 - mean_r);
    }

    Ok(InputTensor {
        data,
        shape: [1, side as i64, side as i64, 3],
    })
}
