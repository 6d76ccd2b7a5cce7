// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Body part enumeration for PoseNet-style models.
//!
//! The 17 parts follow the COCO keypoint convention in the exact order the
//! network lays out its heatmap channels, so `BodyPart::index` doubles as
//! the heatmap channel index.

/// Number of body parts (heatmap channels) produced by the network.
pub const NUM_PARTS: usize = 17;

/// A named body part, in heatmap channel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyPart {
    /// Nose.
    Nose,
    /// Left eye.
    LeftEye,
    /// Right eye.
    RightEye,
    /// Left ear.
    LeftEar,
    /// Right ear.
    RightEar,
    /// Left shoulder.
    LeftShoulder,
    /// Right shoulder.
    RightShoulder,
    /// Left elbow.
    LeftElbow,
    /// Right elbow.
    RightElbow,
    /// Left wrist.
    LeftWrist,
    /// Right wrist.
    RightWrist,
    /// Left hip.
    LeftHip,
    /// Right hip.
    RightHip,
    /// Left knee.
    LeftKnee,
    /// Right knee.
    RightKnee,
    /// Left ankle.
    LeftAnkle,
    /// Right ankle.
    RightAnkle,
}

/// All body parts in heatmap channel order.
pub const ALL_PARTS: [BodyPart; NUM_PARTS] = [
    BodyPart::Nose,
    BodyPart::LeftEye,
    BodyPart::RightEye,
    BodyPart::LeftEar,
    BodyPart::RightEar,
    BodyPart::LeftShoulder,
    BodyPart::RightShoulder,
    BodyPart::LeftElbow,
    BodyPart::RightElbow,
    BodyPart::LeftWrist,
    BodyPart::RightWrist,
    BodyPart::LeftHip,
    BodyPart::RightHip,
    BodyPart::LeftKnee,
    BodyPart::RightKnee,
    BodyPart::LeftAnkle,
    BodyPart::RightAnkle,
];

impl BodyPart {
    /// Get the heatmap channel index for this part.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Get the part for a heatmap channel index.
    ///
    /// # Returns
    ///
    /// * `Some(part)` for indices below [`NUM_PARTS`], `None` otherwise.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        ALL_PARTS.get(index).copied()
    }

    /// Get the wire name used by the original model ("leftWrist", "nose", ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEye => "leftEye",
            Self::RightEye => "rightEye",
            Self::LeftEar => "leftEar",
            Self::RightEar => "rightEar",
            Self::LeftShoulder => "leftShoulder",
            Self::RightShoulder => "rightShoulder",
            Self::LeftElbow => "leftElbow",
            Self::RightElbow => "rightElbow",
            Self::LeftWrist => "leftWrist",
            Self::RightWrist => "rightWrist",
            Self::LeftHip => "leftHip",
            Self::RightHip => "rightHip",
            Self::LeftKnee => "leftKnee",
            Self::RightKnee => "rightKnee",
            Self::LeftAnkle => "leftAnkle",
            Self::RightAnkle => "rightAnkle",
        }
    }

    /// Look up a part by its wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_PARTS.iter().copied().find(|part| part.name() == name)
    }
}

impl std::fmt::Display for BodyPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
