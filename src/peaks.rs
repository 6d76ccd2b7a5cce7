// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Heatmap peak finding.
//!
//! Scans each per-part confidence heatmap for local maxima above a score
//! threshold. The resulting candidates seed pose growth, so their ordering is
//! load-bearing: descending score, with scan order (part-major, then row,
//! then column) breaking ties.

use ndarray::ArrayView4;

use crate::parts::{BodyPart, ALL_PARTS};

/// Window radius (in grid cells) for the local-maximum test.
const LOCAL_MAXIMUM_RADIUS: usize = 1;

/// A candidate root point: a local maximum of one part's heatmap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartCandidate {
    /// Heatmap confidence at the peak cell.
    pub score: f32,
    /// The part whose heatmap produced the peak.
    pub part: BodyPart,
    /// Grid row of the peak.
    pub y: usize,
    /// Grid column of the peak.
    pub x: usize,
}

/// Find candidate root points in the heatmap.
///
/// A cell qualifies if its score is at least `threshold` and strictly greater
/// than every in-bounds neighbor within one cell, which
/// collapses near-identical duplicate peaks per part. Equal-valued plateau
/// cells suppress each other and yield no candidate.
///
/// # Arguments
///
/// * `heatmap` - NHWC heatmap tensor, one channel per part.
/// * `threshold` - Minimum qualifying score.
///
/// # Returns
///
/// Candidates sorted by descending score; ties keep scan order.
///
/// # Panics
///
/// Panics if the heatmap has fewer than [`NUM_PARTS`](crate::NUM_PARTS)
/// channels. Decoding via
/// [`PoseDecoder::decode`](crate::PoseDecoder::decode) validates shapes
/// first and surfaces a [`ShapeError`](crate::DecodeError::ShapeError)
/// instead.
#[must_use]
pub fn find_peaks(heatmap: &ArrayView4<'_, f32>, threshold: f32) -> Vec<PartCandidate> {
    let shape = heatmap.shape();
    let (height, width) = (shape[1], shape[2]);

    let mut candidates = Vec::new();
    for part in ALL_PARTS {
        for y in 0..height {
            for x in 0..width {
                let score = heatmap[[0, y, x, part.index()]];
                if score < threshold {
                    continue;
                }
                if is_local_maximum(heatmap, part, y, x, score, height, width) {
                    candidates.push(PartCandidate { score, part, y, x });
                }
            }
        }
    }

    // Stable sort keeps scan order for equal scores.
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates
}

fn is_local_maximum(
    heatmap: &ArrayView4<'_, f32>,
    part: BodyPart,
    y: usize,
    x: usize,
    score: f32,
    height: usize,
    width: usize,
) -> bool {
    let y_start = y.saturating_sub(LOCAL_MAXIMUM_RADIUS);
    let y_end = (y + LOCAL_MAXIMUM_RADIUS).min(height - 1);
    let x_start = x.saturating_sub(LOCAL_MAXIMUM_RADIUS);
    let x_end = (x + LOCAL_MAXIMUM_RADIUS).min(width - 1);

    for ny in y_start..=y_end {
        for nx in x_start..=x_end {
            if (ny, nx) == (y, x) {
                continue;
            }
            if heatmap[[0, ny, nx, part.index()]] >= score {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::NUM_PARTS;
    use ndarray::Array4;

    fn heatmap(h: usize, w: usize) -> Array4<f32> {
        Array4::zeros((1, h, w, NUM_PARTS))
    }

    #[test]
    fn test_all_zero_heatmap_has_no_peaks() {
        let hm = heatmap(8, 8);
        assert!(find_peaks(&hm.view(), 0.5).is_empty());
    }

    #[test]
    fn test_single_peak_found() {
        let mut hm = heatmap(8, 8);
        hm[[0, 3, 4, BodyPart::Nose.index()]] = 0.9;
        let peaks = find_peaks(&hm.view(), 0.5);
        assert_eq!(peaks.len(), 1);
        assert_eq!(peaks[0].part, BodyPart::Nose);
        assert_eq!((peaks[0].y, peaks[0].x), (3, 4));
        assert!((peaks[0].score - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn test_neighbor_suppresses_weaker_cell() {
        let mut hm = heatmap(8, 8);
        hm[[0, 3, 4, BodyPart::Nose.index()]] = 0.9;
        hm[[0, 3, 5, BodyPart::Nose.index()]] = 0.8; // adjacent, weaker
        let peaks = find_peaks(&hm.view(), 0.5);
        assert_eq!(peaks.len(), 1);
        assert_eq!((peaks[0].y, peaks[0].x), (3, 4));
    }

    #[test]
    fn test_plateau_yields_no_candidate() {
        let mut hm = heatmap(8, 8);
        hm[[0, 3, 4, BodyPart::Nose.index()]] = 0.9;
        hm[[0, 3, 5, BodyPart::Nose.index()]] = 0.9;
        assert!(find_peaks(&hm.view(), 0.5).is_empty());
    }

    #[test]
    fn test_corner_peak_found() {
        let mut hm = heatmap(8, 8);
        hm[[0, 0, 0, BodyPart::LeftAnkle.index()]] = 0.7;
        let peaks = find_peaks(&hm.view(), 0.5);
        assert_eq!(peaks.len(), 1);
        assert_eq!((peaks[0].y, peaks[0].x), (0, 0));
    }

    #[test]
    fn test_peaks_sorted_descending() {
        let mut hm = heatmap(10, 10);
        hm[[0, 1, 1, BodyPart::Nose.index()]] = 0.6;
        hm[[0, 5, 5, BodyPart::Nose.index()]] = 0.9;
        hm[[0, 8, 2, BodyPart::LeftEye.index()]] = 0.7;
        let peaks = find_peaks(&hm.view(), 0.5);
        let scores: Vec<f32> = peaks.iter().map(|p| p.score).collect();
        assert_eq!(scores, vec![0.9, 0.7, 0.6]);
    }

    #[test]
    fn test_ties_keep_scan_order() {
        let mut hm = heatmap(10, 10);
        hm[[0, 5, 5, BodyPart::LeftEye.index()]] = 0.8;
        hm[[0, 1, 1, BodyPart::Nose.index()]] = 0.8;
        let peaks = find_peaks(&hm.view(), 0.5);
        assert_eq!(peaks.len(), 2);
        // Nose channel precedes leftEye in scan order.
        assert_eq!(peaks[0].part, BodyPart::Nose);
        assert_eq!(peaks[1].part, BodyPart::LeftEye);
    }

    #[test]
    #[should_panic]
    fn test_undersized_channel_axis_panics() {
        // Documented precondition: the free function expects a full-width
        // channel axis; decode() rejects such tensors with ShapeError first.
        let hm = Array4::<f32>::zeros((1, 8, 8, NUM_PARTS - 1));
        let _ = find_peaks(&hm.view(), 0.5);
    }

    #[test]
    fn test_raising_threshold_never_adds_peaks() {
        let mut hm = heatmap(12, 12);
        hm[[0, 2, 2, BodyPart::Nose.index()]] = 0.4;
        hm[[0, 6, 6, BodyPart::Nose.index()]] = 0.6;
        hm[[0, 9, 3, BodyPart::LeftHip.index()]] = 0.8;
        let mut previous = usize::MAX;
        for threshold in [0.0, 0.3, 0.5, 0.7, 0.9, 1.0] {
            let count = find_peaks(&hm.view(), threshold).len();
            assert!(count <= previous);
            previous = count;
        }
    }
}
