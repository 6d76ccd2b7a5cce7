// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Pose-level non-maximum suppression.
//!
//! Greedy over the descending-score candidate list: a pose is dropped when
//! enough of its keypoints sit within the NMS radius of the corresponding
//! keypoints of an already-accepted pose.

use crate::parts::NUM_PARTS;
use crate::results::Pose;

/// Fraction of all part slots that must overlap for a candidate to count as a
/// duplicate of an accepted pose.
const DUPLICATE_FRACTION: f32 = 0.5;

/// Suppress overlapping candidate poses.
///
/// Candidates are ranked by pose score (descending, stable) and accepted
/// greedily until `max_poses` is reached. A candidate is rejected when, for
/// some accepted pose, more than [`DUPLICATE_FRACTION`] of all part slots
/// hold keypoints in both poses strictly within `nms_radius` pixels of each
/// other. The strict comparison makes a radius of zero suppress nothing.
///
/// # Arguments
///
/// * `candidates` - Candidate poses from the builder, any order.
/// * `max_poses` - Hard cap on the returned count; zero yields an empty list.
/// * `nms_radius` - Keypoint overlap radius in pixels.
///
/// # Returns
///
/// Accepted poses in descending score order, at most `max_poses` long.
#[must_use]
pub fn suppress_poses(mut candidates: Vec<Pose>, max_poses: usize, nms_radius: f32) -> Vec<Pose> {
    if max_poses == 0 {
        return Vec::new();
    }

    candidates.sort_by(|a, b| b.score().total_cmp(&a.score()));

    let radius_squared = nms_radius * nms_radius;
    let mut accepted: Vec<Pose> = Vec::new();

    for candidate in candidates {
        if accepted.len() >= max_poses {
            break;
        }
        let duplicate = accepted
            .iter()
            .any(|pose| is_duplicate(pose, &candidate, radius_squared));
        if !duplicate {
            accepted.push(candidate);
        }
    }

    accepted
}

fn is_duplicate(accepted: &Pose, candidate: &Pose, radius_squared: f32) -> bool {
    let overlapping = candidate
        .keypoints()
        .filter(|keypoint| {
            accepted.keypoint(keypoint.part).is_some_and(|other| {
                let dy = keypoint.y - other.y;
                let dx = keypoint.x - other.x;
                dy * dy + dx * dx < radius_squared
            })
        })
        .count();

    overlapping as f32 > DUPLICATE_FRACTION * NUM_PARTS as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::ALL_PARTS;
    use crate::results::Keypoint;

    /// Full pose with every keypoint at (x, y) and the given score.
    fn pose_at(x: f32, y: f32, score: f32) -> Pose {
        let mut pose = Pose::empty();
        for part in ALL_PARTS {
            pose.set_keypoint(Keypoint::new(part, x, y, score));
        }
        pose.update_score();
        pose
    }

    #[test]
    fn test_empty_input() {
        assert!(suppress_poses(Vec::new(), 10, 20.0).is_empty());
    }

    #[test]
    fn test_max_poses_zero_returns_empty() {
        let candidates = vec![pose_at(0.0, 0.0, 0.9), pose_at(100.0, 100.0, 0.8)];
        assert!(suppress_poses(candidates, 0, 20.0).is_empty());
    }

    #[test]
    fn test_cap_applies_to_distinct_poses() {
        let candidates = vec![
            pose_at(0.0, 0.0, 0.9),
            pose_at(200.0, 0.0, 0.8),
            pose_at(400.0, 0.0, 0.7),
        ];
        let kept = suppress_poses(candidates, 2, 20.0);
        assert_eq!(kept.len(), 2);
        // Mean over 17 summed f32s accumulates rounding; compare loosely.
        assert!((kept[0].score() - 0.9).abs() < 1e-6);
        assert!((kept[1].score() - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_overlapping_pose_suppressed_keeping_higher_score() {
        let candidates = vec![pose_at(10.0, 10.0, 0.6), pose_at(12.0, 11.0, 0.9)];
        let kept = suppress_poses(candidates, 10, 20.0);
        assert_eq!(kept.len(), 1);
        assert!((kept[0].score() - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_far_apart_poses_both_kept() {
        let candidates = vec![pose_at(10.0, 10.0, 0.9), pose_at(300.0, 300.0, 0.6)];
        let kept = suppress_poses(candidates, 10, 20.0);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_zero_radius_suppresses_nothing() {
        // Even coincident poses survive a zero radius; only the cap applies.
        let candidates = vec![pose_at(10.0, 10.0, 0.9), pose_at(10.0, 10.0, 0.8)];
        let kept = suppress_poses(candidates, 10, 0.0);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_partial_overlap_below_fraction_kept() {
        // Overlap on 8 of 17 parts (below half); the rest far away.
        let mut near = Pose::empty();
        let mut far = Pose::empty();
        for (i, part) in ALL_PARTS.iter().enumerate() {
            near.set_keypoint(Keypoint::new(*part, 0.0, 0.0, 0.9));
            let offset = if i < 8 { 1.0 } else { 500.0 };
            far.set_keypoint(Keypoint::new(*part, offset, 0.0, 0.5));
        }
        near.update_score();
        far.update_score();

        let kept = suppress_poses(vec![near, far], 10, 20.0);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_output_sorted_by_score_descending() {
        let candidates = vec![
            pose_at(0.0, 0.0, 0.3),
            pose_at(200.0, 0.0, 0.9),
            pose_at(400.0, 0.0, 0.6),
        ];
        let kept = suppress_poses(candidates, 10, 20.0);
        let scores: Vec<f32> = kept.iter().map(Pose::score).collect();
        assert_eq!(scores.len(), 3);
        for (score, expected) in scores.iter().zip([0.9, 0.6, 0.3]) {
            assert!((score - expected).abs() < 1e-6);
        }
    }
}
