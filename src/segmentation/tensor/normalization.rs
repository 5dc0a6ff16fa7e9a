//! Normalization constants for the model input

/// Mean of the training set channel values.
pub const IMAGE_MEAN: f32 = 119.751_007_080_078_12;

/// Standard deviation of the training set channel values.
pub const IMAGE_STD: f32 = 49.687_732_696_533_2;

/// Linear rescaling applied identically to the R, G and B channel bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    pub mean: f32,
    pub std: f32,
}

impl Default for Normalization {
    fn default() -> Self {
        Self {
            mean: IMAGE_MEAN,
            std: IMAGE_STD,
        }
    }
}

impl Normalization {
    pub const fn new(mean: f32, std: f32) -> Self {
        Self { mean, std }
    }

    #[inline]
    pub fn apply(&self, channel: u8) -> f32 {
        (f32::from(channel) - self.mean) / self.std
    }

    /// Inverse of [`Normalization::apply`], before rounding back to a byte.
    #[inline]
    pub fn invert(&self, value: f32) -> f32 {
        value * self.std + self.mean
    }
}
