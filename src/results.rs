// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Result types for decoded poses.
//!
//! A [`Pose`] holds one optional [`Keypoint`] slot per [`BodyPart`], so the
//! "at most one keypoint per part" invariant is guaranteed by construction.
//! An absent slot is the explicit marker for a part the decoder could not
//! reach; no magic score values are used.

use crate::parts::{BodyPart, NUM_PARTS};

/// A single decoded keypoint in detector pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keypoint {
    /// Which body part this keypoint is.
    pub part: BodyPart,
    /// Horizontal position in pixels (grid index × output stride + offset).
    pub x: f32,
    /// Vertical position in pixels (grid index × output stride + offset).
    pub y: f32,
    /// Confidence score in [0, 1], taken from the heatmap at the resolved cell.
    pub score: f32,
}

impl Keypoint {
    /// Create a new keypoint.
    #[must_use]
    pub const fn new(part: BodyPart, x: f32, y: f32, score: f32) -> Self {
        Self { part, x, y, score }
    }
}

/// A decoded multi-person pose candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    keypoints: [Option<Keypoint>; NUM_PARTS],
    score: f32,
}

impl Pose {
    /// Create a pose with every part slot empty and a zero score.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            keypoints: [None; NUM_PARTS],
            score: 0.0,
        }
    }

    /// Get the keypoint decoded for a part, if any.
    #[must_use]
    pub fn keypoint(&self, part: BodyPart) -> Option<&Keypoint> {
        self.keypoints[part.index()].as_ref()
    }

    /// Set the keypoint slot for a part.
    pub(crate) fn set_keypoint(&mut self, keypoint: Keypoint) {
        self.keypoints[keypoint.part.index()] = Some(keypoint);
    }

    /// Iterate over the present keypoints in part order.
    pub fn keypoints(&self) -> impl Iterator<Item = &Keypoint> {
        self.keypoints.iter().filter_map(Option::as_ref)
    }

    /// Get the number of present keypoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keypoints.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check whether no keypoint was decoded at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keypoints.iter().all(Option::is_none)
    }

    /// Get the aggregate pose score: the mean of the present keypoints' scores.
    #[must_use]
    pub const fn score(&self) -> f32 {
        self.score
    }

    /// Recompute the aggregate score from the current keypoint slots.
    ///
    /// The reduction is the arithmetic mean over present keypoints only, so
    /// unreachable parts do not drag a partially visible person below the
    /// suppression ranking of a fully visible one. An all-empty pose scores 0.
    pub(crate) fn update_score(&mut self) {
        let count = self.len();
        if count == 0 {
            self.score = 0.0;
        } else {
            let sum: f32 = self.keypoints().map(|kp| kp.score).sum();
            self.score = sum / count as f32;
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::ALL_PARTS;

    #[test]
    fn test_empty_pose() {
        let pose = Pose::empty();
        assert!(pose.is_empty());
        assert_eq!(pose.len(), 0);
        assert_eq!(pose.score(), 0.0);
        for part in ALL_PARTS {
            assert!(pose.keypoint(part).is_none());
        }
    }

    #[test]
    fn test_one_slot_per_part() {
        let mut pose = Pose::empty();
        pose.set_keypoint(Keypoint::new(BodyPart::Nose, 1.0, 2.0, 0.5));
        pose.set_keypoint(Keypoint::new(BodyPart::Nose, 3.0, 4.0, 0.9));
        assert_eq!(pose.len(), 1);
        let nose = pose.keypoint(BodyPart::Nose).unwrap();
        assert_eq!(nose.x, 3.0);
        assert_eq!(nose.score, 0.9);
    }

    #[test]
    fn test_score_is_mean_of_present_keypoints() {
        let mut pose = Pose::empty();
        pose.set_keypoint(Keypoint::new(BodyPart::Nose, 0.0, 0.0, 0.8));
        pose.set_keypoint(Keypoint::new(BodyPart::LeftEye, 0.0, 0.0, 0.4));
        pose.update_score();
        assert!((pose.score() - 0.6).abs() < f32::EPSILON);
    }
}
