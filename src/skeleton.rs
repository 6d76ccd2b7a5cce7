// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use crate::parts::BodyPart;

/// Number of displacement edges in the pose chain.
pub const NUM_EDGES: usize = 16;

/// PoseNet displacement chain (parent, child) pairs in displacement channel order.
///
/// Edge `k`'s forward displacement channels point parent → child and its
/// backward channels point child → parent. The chain is a spanning tree rooted
/// at the nose, so a pose grown from any single part can reach every other part.
pub const POSE_CHAIN: [(BodyPart, BodyPart); NUM_EDGES] = [
    (BodyPart::Nose, BodyPart::LeftEye),           // 0
    (BodyPart::LeftEye, BodyPart::LeftEar),        // 1
    (BodyPart::Nose, BodyPart::RightEye),          // 2
    (BodyPart::RightEye, BodyPart::RightEar),      // 3
    (BodyPart::Nose, BodyPart::LeftShoulder),      // 4
    (BodyPart::LeftShoulder, BodyPart::LeftElbow), // 5
    (BodyPart::LeftElbow, BodyPart::LeftWrist),    // 6
    (BodyPart::LeftShoulder, BodyPart::LeftHip),   // 7
    (BodyPart::LeftHip, BodyPart::LeftKnee),       // 8
    (BodyPart::LeftKnee, BodyPart::LeftAnkle),     // 9
    (BodyPart::Nose, BodyPart::RightShoulder),     // 10
    (BodyPart::RightShoulder, BodyPart::RightElbow), // 11
    (BodyPart::RightElbow, BodyPart::RightWrist),  // 12
    (BodyPart::RightShoulder, BodyPart::RightHip), // 13
    (BodyPart::RightHip, BodyPart::RightKnee),     // 14
    (BodyPart::RightKnee, BodyPart::RightAnkle),   // 15
];
