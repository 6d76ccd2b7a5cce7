// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

#![cfg_attr(docsrs, feature(doc_cfg))]

//! # PoseNet Multi-Person Pose Decoder
//!
//! Decoding library for PoseNet-style multi-person 2D pose estimation
//! networks. The network's four raw output tensors go in, a ranked list of
//! decoded poses comes out; camera capture, inference execution, and display
//! rendering stay with the calling application.
//!
//! ## Features
//!
//! - **Pure Decoding** - No inference runtime, no I/O; a pure function of the
//!   frame's tensors plus fixed configuration
//! - **Greedy Multi-Pose Assembly** - Heatmap peak extraction, displacement
//!   driven skeleton growth, and pose-level non-maximum suppression
//! - **Structural Invariants** - One keypoint slot per body part, enforced by
//!   types rather than runtime checks
//! - **Overlay Drawing** - Optional skeleton annotation onto an `RgbImage`
//!   with caller-supplied display scale factors
//!
//! ## Quick Start
//!
//! ```no_run
//! use ndarray::Array4;
//! use posenet_decoder::{BodyPart, DecoderConfig, DecoderOutputs, PoseDecoder};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Raw NHWC output tensors from the inference runtime.
//!     let heatmap = Array4::<f32>::zeros((1, 22, 22, 17));
//!     let offsets = Array4::<f32>::zeros((1, 22, 22, 34));
//!     let displacements_fwd = Array4::<f32>::zeros((1, 22, 22, 32));
//!     let displacements_bwd = Array4::<f32>::zeros((1, 22, 22, 32));
//!
//!     let decoder = PoseDecoder::new(
//!         DecoderConfig::new()
//!             .with_output_stride(16)
//!             .with_score_threshold(0.5)
//!             .with_max_poses(100)
//!             .with_nms_radius(20.0),
//!     )?;
//!
//!     let outputs = DecoderOutputs::new(
//!         heatmap.view(),
//!         offsets.view(),
//!         displacements_fwd.view(),
//!         displacements_bwd.view(),
//!     );
//!
//!     for pose in decoder.decode(&outputs)? {
//!         if let Some(nose) = pose.keypoint(BodyPart::Nose) {
//!             println!("pose {:.2}: nose at ({:.1}, {:.1})", pose.score(), nose.x, nose.y);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! Decoding runs three stages over the tensors, in one direction:
//!
//! 1. [`find_peaks`] scans each part's heatmap for local maxima above the
//!    score threshold, ordered by descending score.
//! 2. Each unused peak seeds a pose: the root cell is refined to pixel
//!    coordinates with the offset field, then the fixed pose chain is
//!    traversed in both directions, estimating each neighboring part from
//!    the displacement fields and refining again. Unreachable parts stay
//!    empty rather than aborting the pose.
//! 3. [`suppress_poses`] drops candidates whose keypoints overlap an
//!    already-accepted pose and caps the result at the configured maximum.
//!
//! All returned coordinates live in the detector's pixel space
//! (`grid index × output stride + offset`); mapping to display resolution is
//! the caller's job, typically via [`draw_poses`].

// Modules
/// Skeleton overlay drawing.
pub mod annotate;
/// Skeleton growth from root candidates.
mod builder;
/// Decoder configuration.
pub mod config;
/// The top-level decoder.
pub mod decoder;
/// Error types.
pub mod error;
/// Body part enumeration.
pub mod parts;
/// Heatmap peak finding.
pub mod peaks;
/// Decoded pose types.
pub mod results;
/// Pose chain constants.
pub mod skeleton;
/// Pose-level non-maximum suppression.
pub mod suppression;
/// Raw output tensor views.
pub mod tensors;

// Re-export main types
pub use annotate::draw_poses;
pub use config::DecoderConfig;
pub use decoder::PoseDecoder;
pub use error::{DecodeError, Result};
pub use parts::{BodyPart, ALL_PARTS, NUM_PARTS};
pub use peaks::{find_peaks, PartCandidate};
pub use results::{Keypoint, Pose};
pub use skeleton::{NUM_EDGES, POSE_CHAIN};
pub use suppression::suppress_poses;
pub use tensors::DecoderOutputs;
