//! PoseNet keypoint layout and frame decoding
//!
//! JavaScript hands over each frame as two flat typed arrays:
//! - keypoints: `x, y, score` for all 17 PoseNet keypoints, pose after pose
//! - edges: `pose, keypoint_a, keypoint_b` triples from the skeleton

use crate::joints::{Keypoint, LegKeypoints, Point2D, Side};
use super::error::BridgeError;

// ============================================================================
// KEYPOINT INDICES (PoseNet - 17 total)
// ============================================================================

pub const NOSE: usize = 0;
pub const LEFT_EYE: usize = 1;
pub const RIGHT_EYE: usize = 2;
pub const LEFT_EAR: usize = 3;
pub const RIGHT_EAR: usize = 4;
pub const LEFT_SHOULDER: usize = 5;
pub const RIGHT_SHOULDER: usize = 6;
pub const LEFT_ELBOW: usize = 7;
pub const RIGHT_ELBOW: usize = 8;
pub const LEFT_WRIST: usize = 9;
pub const RIGHT_WRIST: usize = 10;
pub const LEFT_HIP: usize = 11;
pub const RIGHT_HIP: usize = 12;
pub const LEFT_KNEE: usize = 13;
pub const RIGHT_KNEE: usize = 14;
pub const LEFT_ANKLE: usize = 15;
pub const RIGHT_ANKLE: usize = 16;

pub const KEYPOINT_COUNT: usize = 17;
pub const VALUES_PER_KEYPOINT: usize = 3;
pub const VALUES_PER_POSE: usize = KEYPOINT_COUNT * VALUES_PER_KEYPOINT;
pub const VALUES_PER_EDGE: usize = 3;

/// Part names as reported by PoseNet, indexed like the constants above
pub const KEYPOINT_NAMES: [&str; KEYPOINT_COUNT] = [
    "nose",
    "leftEye",
    "rightEye",
    "leftEar",
    "rightEar",
    "leftShoulder",
    "rightShoulder",
    "leftElbow",
    "rightElbow",
    "leftWrist",
    "rightWrist",
    "leftHip",
    "rightHip",
    "leftKnee",
    "rightKnee",
    "leftAnkle",
    "rightAnkle",
];

/// Knee, hip, ankle and shoulder indices for a side
pub fn tracked_indices(side: Side) -> [usize; 4] {
    match side {
        Side::Left => [LEFT_KNEE, LEFT_HIP, LEFT_ANKLE, LEFT_SHOULDER],
        Side::Right => [RIGHT_KNEE, RIGHT_HIP, RIGHT_ANKLE, RIGHT_SHOULDER],
    }
}

// ============================================================================
// FRAME DATA
// ============================================================================

/// One detected person
#[derive(Clone, Debug, PartialEq)]
pub struct Pose {
    pub keypoints: [Keypoint; KEYPOINT_COUNT],
}

impl Pose {
    fn from_values(values: &[f64]) -> Self {
        let mut keypoints = [Keypoint::missing(); KEYPOINT_COUNT];
        for (kp, chunk) in keypoints
            .iter_mut()
            .zip(values.chunks_exact(VALUES_PER_KEYPOINT))
        {
            *kp = Keypoint::new(chunk[0], chunk[1], chunk[2]);
        }
        Self { keypoints }
    }

    /// The four keypoints the angle engine needs for `side`
    pub fn leg(&self, side: Side) -> LegKeypoints {
        let [knee, hip, ankle, shoulder] = tracked_indices(side);
        LegKeypoints {
            knee: self.keypoints[knee],
            hip: self.keypoints[hip],
            ankle: self.keypoints[ankle],
            shoulder: self.keypoints[shoulder],
        }
    }
}

/// A skeleton connection within one pose
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkeletonEdge {
    pub pose: usize,
    pub from: usize,
    pub to: usize,
}

/// Everything the keypoint source reported for one video frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PoseFrame {
    pub poses: Vec<Pose>,
    pub edges: Vec<SkeletonEdge>,
}

impl PoseFrame {
    /// The pose that drives the angle engine
    pub fn primary(&self) -> Option<&Pose> {
        self.poses.first()
    }

    /// Endpoints of every skeleton edge. Edges pointing outside the
    /// frame are skipped.
    pub fn edge_segments(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        self.edges.iter().filter_map(|edge| {
            let pose = self.poses.get(edge.pose)?;
            let from = pose.keypoints.get(edge.from)?;
            let to = pose.keypoints.get(edge.to)?;
            Some((from.position, to.position))
        })
    }
}

/// Decode the flat arrays received from JavaScript.
///
/// Only the buffer shapes are checked. Coordinates and scores are taken
/// as-is, NaN included.
pub fn decode_frame(keypoints: &[f64], edges: &[u32]) -> Result<PoseFrame, BridgeError> {
    if keypoints.len() % VALUES_PER_POSE != 0 {
        return Err(BridgeError::KeypointLength(keypoints.len()));
    }
    if edges.len() % VALUES_PER_EDGE != 0 {
        return Err(BridgeError::EdgeLength(edges.len()));
    }

    let poses: Vec<Pose> = keypoints
        .chunks_exact(VALUES_PER_POSE)
        .map(Pose::from_values)
        .collect();

    let edges = edges
        .chunks_exact(VALUES_PER_EDGE)
        .map(|chunk| {
            let edge = SkeletonEdge {
                pose: chunk[0] as usize,
                from: chunk[1] as usize,
                to: chunk[2] as usize,
            };
            if edge.pose >= poses.len() {
                return Err(BridgeError::EdgePoseOutOfRange {
                    pose: edge.pose,
                    poses: poses.len(),
                });
            }
            for idx in [edge.from, edge.to] {
                if idx >= KEYPOINT_COUNT {
                    return Err(BridgeError::EdgeKeypointOutOfRange(idx));
                }
            }
            Ok(edge)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PoseFrame { poses, edges })
}
