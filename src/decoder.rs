// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Multi-person pose decoder.
//!
//! Ties the pipeline together: heatmap peaks seed skeleton growth in
//! descending score order, an early root dedup skips peaks already claimed by
//! a built pose, and pose-level NMS picks the final ranked list. Decoding is
//! a pure function of the input tensors and the fixed configuration, so the
//! same tensors always produce the same poses.

use crate::builder::{build_pose, refine_point};
use crate::config::DecoderConfig;
use crate::error::Result;
use crate::peaks::find_peaks;
use crate::results::Pose;
use crate::suppression::suppress_poses;
use crate::tensors::DecoderOutputs;

/// Decodes multi-person poses from PoseNet-style network outputs.
///
/// The decoder holds only immutable configuration; [`decode`](Self::decode)
/// takes `&self` and keeps no state between frames, so a single instance can
/// be shared freely across a capture/decode pipeline.
#[derive(Debug, Clone)]
pub struct PoseDecoder {
    config: DecoderConfig,
}

impl PoseDecoder {
    /// Create a decoder, validating the configuration up front.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::ConfigError`](crate::DecodeError::ConfigError)
    /// for out-of-range thresholds, a zero stride, or a bad NMS radius.
    pub fn new(config: DecoderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the decoder configuration.
    #[must_use]
    pub const fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode one frame's output tensors into a ranked pose list.
    ///
    /// # Arguments
    ///
    /// * `outputs` - The four raw network output tensors for one frame.
    ///
    /// # Returns
    ///
    /// Poses in descending score order, at most `max_poses` long, with
    /// keypoint coordinates in the detector's pixel space. No detections is
    /// an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::ShapeError`](crate::DecodeError::ShapeError)
    /// if the tensor shapes do not match the expected part/edge layout.
    pub fn decode(&self, outputs: &DecoderOutputs<'_>) -> Result<Vec<Pose>> {
        let grid = outputs.validate()?;
        let stride = self.config.output_stride;
        let radius_squared = self.config.nms_radius * self.config.nms_radius;

        let roots = find_peaks(&outputs.heatmap, self.config.score_threshold);

        let mut candidates: Vec<Pose> = Vec::new();
        for root in &roots {
            let (root_y, root_x) = refine_point(outputs, root.part, root.y, root.x, stride);

            // Early dedup: a root already claimed by a built pose's same-part
            // keypoint would regrow that pose, not a new person.
            let claimed = candidates.iter().any(|pose| {
                pose.keypoint(root.part).is_some_and(|kp| {
                    let dy = kp.y - root_y;
                    let dx = kp.x - root_x;
                    dy * dy + dx * dx < radius_squared
                })
            });
            if claimed {
                continue;
            }

            candidates.push(build_pose(root, outputs, stride, grid));
        }

        Ok(suppress_poses(
            candidates,
            self.config.max_poses,
            self.config.nms_radius,
        ))
    }
}
