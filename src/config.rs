// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Decoder configuration.
//!
//! This module defines the [`DecoderConfig`] struct, which fixes the decoding
//! parameters for a [`PoseDecoder`](crate::PoseDecoder): output stride, score
//! threshold, maximum pose count, and NMS radius.

use crate::error::{DecodeError, Result};

/// Configuration for multi-person pose decoding.
///
/// This struct uses a builder pattern for convenient construction. Values are
/// validated once by [`PoseDecoder::new`](crate::PoseDecoder::new), not on
/// every frame.
///
/// # Example
///
/// ```rust
/// use posenet_decoder::DecoderConfig;
///
/// let config = DecoderConfig::new()
///     .with_output_stride(16)
///     .with_score_threshold(0.5)
///     .with_max_poses(100)
///     .with_nms_radius(20.0);
/// ```
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    /// Output stride of the network: one heatmap cell covers `stride × stride`
    /// input pixels, so `pixel = grid_index * stride + offset`.
    pub output_stride: usize,
    /// Minimum heatmap score (0.0 to 1.0) for a cell to qualify as a root
    /// candidate.
    pub score_threshold: f32,
    /// Maximum number of poses returned per frame.
    pub max_poses: usize,
    /// Non-maximum suppression radius in pixels. Keypoints strictly closer
    /// than this count as overlapping during root dedup and pose suppression.
    pub nms_radius: f32,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            output_stride: 16,
            score_threshold: 0.5,
            max_poses: 100,
            nms_radius: 20.0,
        }
    }
}

impl DecoderConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output stride.
    #[must_use]
    pub const fn with_output_stride(mut self, stride: usize) -> Self {
        self.output_stride = stride;
        self
    }

    /// Set the root candidate score threshold (0.0 to 1.0).
    #[must_use]
    pub const fn with_score_threshold(mut self, threshold: f32) -> Self {
        self.score_threshold = threshold;
        self
    }

    /// Set the maximum number of poses returned per frame.
    #[must_use]
    pub const fn with_max_poses(mut self, max: usize) -> Self {
        self.max_poses = max;
        self
    }

    /// Set the NMS radius in pixels.
    #[must_use]
    pub const fn with_nms_radius(mut self, radius: f32) -> Self {
        self.nms_radius = radius;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::ConfigError`] if the score threshold lies
    /// outside `[0, 1]`, the output stride is zero, or the NMS radius is
    /// negative or non-finite.
    pub fn validate(&self) -> Result<()> {
        if !self.score_threshold.is_finite() || !(0.0..=1.0).contains(&self.score_threshold) {
            return Err(DecodeError::ConfigError(format!(
                "score_threshold must be in [0, 1], got {}",
                self.score_threshold
            )));
        }
        if self.output_stride == 0 {
            return Err(DecodeError::ConfigError(
                "output_stride must be at least 1".to_string(),
            ));
        }
        if !self.nms_radius.is_finite() || self.nms_radius < 0.0 {
            return Err(DecodeError::ConfigError(format!(
                "nms_radius must be finite and non-negative, got {}",
                self.nms_radius
            )));
        }
        Ok(())
    }
}
