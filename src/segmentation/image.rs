//! Image boundary module
//!
//! Packed 32-bit ARGB images as exchanged with the UI shell, and the bilinear
//! rescaling the shell applies around the classifier.

pub mod resize;
pub mod types;

pub use resize::resize_bilinear;
pub use types::{OPAQUE_ALPHA, OPAQUE_WHITE, PackedImage, pack_argb, pack_gray, unpack_argb};
