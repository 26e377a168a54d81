use image::{imageops::FilterType, DynamicImage};
use tract_onnx::prelude::tract_ndarray::{Array4, ArrayView4};
use tract_onnx::prelude::Tensor;

use crate::gesture_classifier::error::DecodeError;
use crate::gesture_classifier::gesture::RawImage;

pub const INPUT_WIDTH: u32 = 224;
pub const INPUT_HEIGHT: u32 = 224;
pub const INPUT_CHANNELS: usize = 3;
pub const INPUT_SHAPE: [usize; 4] = [1, INPUT_HEIGHT as usize, INPUT_WIDTH as usize, INPUT_CHANNELS];

/// Bicubic. Tensor values depend on this, so it must not change without retraining.
pub const RESIZE_FILTER: FilterType = FilterType::CatmullRom;

/// The model was trained against `x / 127 - 1`, not `x / 127.5 - 1`.
pub const NORMALIZATION_DIVISOR: f32 = 127.0;

/// Model input: one RGB image in NHWC layout.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTensor {
    data: Array4<f32>,
}

impl NormalizedTensor {
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn view(&self) -> ArrayView4<'_, f32> {
        self.data.view()
    }

    pub fn values(&self) -> impl Iterator<Item = f32> + '_ {
        self.data.iter().copied()
    }

    pub fn to_tensor(&self) -> Tensor {
        Tensor::from(self.data.clone())
    }
}

pub fn normalize(value: u8) -> f32 {
    value as f32 / NORMALIZATION_DIVISOR - 1.0
}

pub fn preprocess(raw: &RawImage) -> Result<NormalizedTensor, DecodeError> {
    let image = image::load_from_memory(raw.as_bytes())?;
    Ok(preprocess_image(&image))
}

/// Stretches to the input size (no letterboxing), drops alpha, normalizes.
pub fn preprocess_image(image: &DynamicImage) -> NormalizedTensor {
    let resized = image.resize_exact(INPUT_WIDTH, INPUT_HEIGHT, RESIZE_FILTER);
    let rgb = resized.to_rgb8();

    let data = Array4::from_shape_fn(
        (1, INPUT_HEIGHT as usize, INPUT_WIDTH as usize, INPUT_CHANNELS),
        |(_, y, x, c)| normalize(rgb.get_pixel(x as u32, y as u32)[c]),
    );

    NormalizedTensor { data }
}
