// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Skeleton growth from a single root candidate.
//!
//! Starting from one heatmap peak, the builder walks the pose chain in both
//! directions, hopping from each known keypoint to its neighbor with the
//! displacement field and refining every landing cell with the offset field.
//! Parts whose displaced position leaves the tensor grid stay empty; the pose
//! is still produced.

use crate::parts::BodyPart;
use crate::peaks::PartCandidate;
use crate::results::{Keypoint, Pose};
use crate::skeleton::POSE_CHAIN;
use crate::tensors::DecoderOutputs;

/// Displacement direction along a pose chain edge.
#[derive(Clone, Copy)]
enum Direction {
    /// Parent → child, forward displacement channels.
    Forward,
    /// Child → parent, backward displacement channels.
    Backward,
}

/// Refine a grid cell to pixel coordinates with the offset field.
///
/// `pixel = grid_index * stride + offset`, exact floating point, no rounding.
pub(crate) fn refine_point(
    outputs: &DecoderOutputs<'_>,
    part: BodyPart,
    y: usize,
    x: usize,
    stride: usize,
) -> (f32, f32) {
    let (offset_y, offset_x) = outputs.offset(y, x, part);
    (
        y as f32 * stride as f32 + offset_y,
        x as f32 * stride as f32 + offset_x,
    )
}

/// Grow a full pose from one root candidate.
///
/// The pose chain is a tree rooted at the nose, so one backward sweep
/// (children to parents, in reverse edge order) followed by one forward sweep
/// reaches every part regardless of which part the root peak belongs to.
pub(crate) fn build_pose(
    root: &PartCandidate,
    outputs: &DecoderOutputs<'_>,
    stride: usize,
    grid: (usize, usize),
) -> Pose {
    let mut pose = Pose::empty();

    let (root_y, root_x) = refine_point(outputs, root.part, root.y, root.x, stride);
    pose.set_keypoint(Keypoint::new(root.part, root_x, root_y, root.score));

    for edge in (0..POSE_CHAIN.len()).rev() {
        let (parent, child) = POSE_CHAIN[edge];
        if pose.keypoint(parent).is_none() {
            if let Some(source) = pose.keypoint(child).copied() {
                if let Some(target) =
                    traverse(&source, parent, edge, Direction::Backward, outputs, stride, grid)
                {
                    pose.set_keypoint(target);
                }
            }
        }
    }

    for (edge, &(parent, child)) in POSE_CHAIN.iter().enumerate() {
        if pose.keypoint(child).is_none() {
            if let Some(source) = pose.keypoint(parent).copied() {
                if let Some(target) =
                    traverse(&source, child, edge, Direction::Forward, outputs, stride, grid)
                {
                    pose.set_keypoint(target);
                }
            }
        }
    }

    pose.update_score();
    pose
}

/// Estimate one keypoint from an already-placed neighbor.
///
/// Reads the displacement vector at the source keypoint's grid cell, adds it
/// to the source's pixel position, snaps the displaced point to the nearest
/// grid cell, and refines there with the offset field. Returns `None` when
/// the displaced point snaps outside the grid, leaving the slot empty.
fn traverse(
    source: &Keypoint,
    target_part: BodyPart,
    edge: usize,
    direction: Direction,
    outputs: &DecoderOutputs<'_>,
    stride: usize,
    grid: (usize, usize),
) -> Option<Keypoint> {
    let (height, width) = grid;
    let stride_f = stride as f32;

    // The source position is continuous; its cell index is clamped back into
    // the grid because offsets may push a keypoint slightly past the border.
    let source_y = clamp_to_grid(source.y / stride_f, height);
    let source_x = clamp_to_grid(source.x / stride_f, width);

    let (displacement_y, displacement_x) = match direction {
        Direction::Forward => outputs.displacement_fwd(source_y, source_x, edge),
        Direction::Backward => outputs.displacement_bwd(source_y, source_x, edge),
    };

    let displaced_y = source.y + displacement_y;
    let displaced_x = source.x + displacement_x;

    let target_y = snap_to_grid(displaced_y / stride_f, height)?;
    let target_x = snap_to_grid(displaced_x / stride_f, width)?;

    let (pixel_y, pixel_x) = refine_point(outputs, target_part, target_y, target_x, stride);
    let score = outputs.score(target_y, target_x, target_part);
    Some(Keypoint::new(target_part, pixel_x, pixel_y, score))
}

/// Round a continuous grid coordinate to the nearest cell, rejecting
/// out-of-bounds results.
fn snap_to_grid(coordinate: f32, size: usize) -> Option<usize> {
    let rounded = coordinate.round();
    if rounded < 0.0 || rounded >= size as f32 {
        return None;
    }
    Some(rounded as usize)
}

/// Round a continuous grid coordinate to the nearest in-bounds cell.
fn clamp_to_grid(coordinate: f32, size: usize) -> usize {
    let rounded = coordinate.round().max(0.0);
    (rounded as usize).min(size - 1)
}
