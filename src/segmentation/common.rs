//! Common utilities module
//!
//! This module contains the error type shared across the segmentation pipeline.

pub mod error;

pub use error::{Result, SegmentationError};
