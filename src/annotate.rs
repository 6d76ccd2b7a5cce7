// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Skeleton overlay drawing.
//!
//! Draws decoded poses onto an RGB buffer: one line segment per pose chain
//! edge and a filled marker per joint. The caller supplies horizontal and
//! vertical scale factors mapping decode space to display space (the decoder
//! works at the detector resolution, the frame is usually larger).

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};

use crate::results::Pose;
use crate::skeleton::POSE_CHAIN;

/// Joint marker color.
pub const JOINT_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Limb segment color.
pub const LIMB_COLOR: Rgb<u8> = Rgb([255, 128, 0]);

/// Joint marker radius in pixels.
const JOINT_RADIUS: i32 = 3;

/// Draw pose skeletons onto an image.
///
/// Poses scoring below `min_pose_score` are skipped entirely; keypoints below
/// `min_part_score` draw neither their marker nor their limbs. Keypoint
/// coordinates are multiplied by `scale_x`/`scale_y` before drawing, with the
/// final integer cast happening here and nowhere earlier.
///
/// # Arguments
///
/// * `image` - Target RGB buffer, mutated in place.
/// * `poses` - Decoded poses in detector pixel space.
/// * `scale_x` - Horizontal decode-to-display scale factor.
/// * `scale_y` - Vertical decode-to-display scale factor.
/// * `min_pose_score` - Minimum aggregate score for a pose to be drawn.
/// * `min_part_score` - Minimum keypoint score for a joint to be drawn.
pub fn draw_poses(
    image: &mut RgbImage,
    poses: &[Pose],
    scale_x: f32,
    scale_y: f32,
    min_pose_score: f32,
    min_part_score: f32,
) {
    for pose in poses {
        if pose.score() < min_pose_score {
            continue;
        }

        for &(part_a, part_b) in &POSE_CHAIN {
            let a = pose.keypoint(part_a).filter(|kp| kp.score >= min_part_score);
            let b = pose.keypoint(part_b).filter(|kp| kp.score >= min_part_score);
            if let (Some(a), Some(b)) = (a, b) {
                draw_line_segment_mut(
                    image,
                    (a.x * scale_x, a.y * scale_y),
                    (b.x * scale_x, b.y * scale_y),
                    LIMB_COLOR,
                );
            }
        }

        for keypoint in pose.keypoints() {
            if keypoint.score >= min_part_score {
                draw_filled_circle_mut(
                    image,
                    (
                        (keypoint.x * scale_x) as i32,
                        (keypoint.y * scale_y) as i32,
                    ),
                    JOINT_RADIUS,
                    JOINT_COLOR,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::{BodyPart, ALL_PARTS};
    use crate::results::Keypoint;

    fn full_pose(x: f32, y: f32, score: f32) -> Pose {
        let mut pose = Pose::empty();
        for part in ALL_PARTS {
            pose.set_keypoint(Keypoint::new(part, x, y, score));
        }
        pose.update_score();
        pose
    }

    #[test]
    fn test_draws_joint_markers() {
        let mut image = RgbImage::new(64, 64);
        let poses = vec![full_pose(32.0, 32.0, 0.9)];
        draw_poses(&mut image, &poses, 1.0, 1.0, 0.15, 0.02);
        assert_eq!(*image.get_pixel(32, 32), JOINT_COLOR);
    }

    #[test]
    fn test_low_scoring_pose_not_drawn() {
        let mut image = RgbImage::new(64, 64);
        let poses = vec![full_pose(32.0, 32.0, 0.1)];
        draw_poses(&mut image, &poses, 1.0, 1.0, 0.15, 0.02);
        assert_eq!(*image.get_pixel(32, 32), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_scale_factors_applied() {
        let mut image = RgbImage::new(128, 128);
        let poses = vec![full_pose(30.0, 20.0, 0.9)];
        draw_poses(&mut image, &poses, 2.0, 3.0, 0.15, 0.02);
        assert_eq!(*image.get_pixel(60, 60), JOINT_COLOR);
        assert_eq!(*image.get_pixel(30, 20), Rgb([0, 0, 0]));
    }

    #[test]
    fn test_limbs_drawn_between_present_keypoints() {
        let mut pose = Pose::empty();
        pose.set_keypoint(Keypoint::new(BodyPart::Nose, 10.0, 10.0, 0.9));
        pose.set_keypoint(Keypoint::new(BodyPart::LeftEye, 30.0, 10.0, 0.9));
        pose.update_score();

        let mut image = RgbImage::new(64, 64);
        draw_poses(&mut image, &[pose], 1.0, 1.0, 0.15, 0.02);
        // A point on the segment between the two joints is limb-colored.
        assert_eq!(*image.get_pixel(20, 10), LIMB_COLOR);
    }
}
