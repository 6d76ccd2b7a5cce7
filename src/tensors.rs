// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Borrowed views of the raw network output tensors.
//!
//! All four tensors use NHWC axis order `(batch, height, width, channel)`
//! with batch fixed at 1, matching the TensorFlow PoseNet export:
//!
//! - heatmap: one channel per body part (17);
//! - offsets: 34 channels, y components in `0..17`, x components in `17..34`;
//! - displacements: 32 channels each, y components in `0..16` (one per pose
//!   chain edge), x components in `16..32`.

use ndarray::ArrayView4;

use crate::error::{DecodeError, Result};
use crate::parts::{BodyPart, NUM_PARTS};
use crate::skeleton::NUM_EDGES;

/// The four raw output tensors of one inference pass.
///
/// Views are borrowed; the decoder never copies or mutates them.
#[derive(Debug, Clone, Copy)]
pub struct DecoderOutputs<'a> {
    /// Per-part confidence heatmap, channels = [`NUM_PARTS`].
    pub heatmap: ArrayView4<'a, f32>,
    /// Sub-cell offset field, channels = `2 * NUM_PARTS`.
    pub offsets: ArrayView4<'a, f32>,
    /// Parent → child displacement field, channels = `2 * NUM_EDGES`.
    pub displacements_fwd: ArrayView4<'a, f32>,
    /// Child → parent displacement field, channels = `2 * NUM_EDGES`.
    pub displacements_bwd: ArrayView4<'a, f32>,
}

impl<'a> DecoderOutputs<'a> {
    /// Bundle the four output tensor views.
    #[must_use]
    pub const fn new(
        heatmap: ArrayView4<'a, f32>,
        offsets: ArrayView4<'a, f32>,
        displacements_fwd: ArrayView4<'a, f32>,
        displacements_bwd: ArrayView4<'a, f32>,
    ) -> Self {
        Self {
            heatmap,
            offsets,
            displacements_fwd,
            displacements_bwd,
        }
    }

    /// Validate tensor shapes against the fixed part and edge counts.
    ///
    /// # Returns
    ///
    /// * The shared spatial grid size `(height, width)`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::ShapeError`] if any batch dimension is not 1,
    /// the spatial dimensions disagree across tensors, or a channel count
    /// does not match the expected layout.
    pub fn validate(&self) -> Result<(usize, usize)> {
        let named = [
            ("heatmap", &self.heatmap, NUM_PARTS),
            ("offsets", &self.offsets, 2 * NUM_PARTS),
            ("displacements_fwd", &self.displacements_fwd, 2 * NUM_EDGES),
            ("displacements_bwd", &self.displacements_bwd, 2 * NUM_EDGES),
        ];

        let shape = self.heatmap.shape();
        let (height, width) = (shape[1], shape[2]);
        if height == 0 || width == 0 {
            return Err(DecodeError::ShapeError(format!(
                "heatmap has empty spatial dimensions {height}x{width}"
            )));
        }

        for (name, tensor, channels) in named {
            let shape = tensor.shape();
            if shape[0] != 1 {
                return Err(DecodeError::ShapeError(format!(
                    "{name} batch dimension must be 1, got {}",
                    shape[0]
                )));
            }
            if (shape[1], shape[2]) != (height, width) {
                return Err(DecodeError::ShapeError(format!(
                    "{name} spatial dimensions {}x{} do not match heatmap {height}x{width}",
                    shape[1], shape[2]
                )));
            }
            if shape[3] != channels {
                return Err(DecodeError::ShapeError(format!(
                    "{name} must have {channels} channels, got {}",
                    shape[3]
                )));
            }
        }

        Ok((height, width))
    }

    /// Heatmap confidence for a part at a grid cell.
    #[inline]
    pub(crate) fn score(&self, y: usize, x: usize, part: BodyPart) -> f32 {
        self.heatmap[[0, y, x, part.index()]]
    }

    /// Offset vector `(dy, dx)` for a part at a grid cell, in pixels.
    #[inline]
    pub(crate) fn offset(&self, y: usize, x: usize, part: BodyPart) -> (f32, f32) {
        let index = part.index();
        (
            self.offsets[[0, y, x, index]],
            self.offsets[[0, y, x, NUM_PARTS + index]],
        )
    }

    /// Forward (parent → child) displacement `(dy, dx)` for an edge, in pixels.
    #[inline]
    pub(crate) fn displacement_fwd(&self, y: usize, x: usize, edge: usize) -> (f32, f32) {
        (
            self.displacements_fwd[[0, y, x, edge]],
            self.displacements_fwd[[0, y, x, NUM_EDGES + edge]],
        )
    }

    /// Backward (child → parent) displacement `(dy, dx)` for an edge, in pixels.
    #[inline]
    pub(crate) fn displacement_bwd(&self, y: usize, x: usize, edge: usize) -> (f32, f32) {
        (
            self.displacements_bwd[[0, y, x, edge]],
            self.displacements_bwd[[0, y, x, NUM_EDGES + edge]],
        )
    }
}
