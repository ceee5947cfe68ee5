//! Joint angle calculation from atan2 bearings
//!
//! Every angle is the difference of two bearings taken from the same
//! vertex, converted to degrees and then mapped through the side's
//! convention. Results are not reduced modulo 360.

use std::f64::consts::PI;

use super::point::{Keypoint, Point2D};
use super::side::Side;

const DEGREES_PER_RADIAN: f64 = 180.0 / PI;

/// The tracked angles, each measured at one vertex keypoint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AngleKind {
    /// Measured at the knee
    KneeFlexion,
    /// Measured at the hip
    HipFlexion,
    /// Measured at the ankle
    Dorsiflexion,
    /// Labelled at the shoulder, measured at the hip
    TrunkLean,
}

impl AngleKind {
    /// Order shared by `AngleReading::values` and `SessionMaxima::values`
    pub const ALL: [AngleKind; 4] = [
        AngleKind::KneeFlexion,
        AngleKind::HipFlexion,
        AngleKind::Dorsiflexion,
        AngleKind::TrunkLean,
    ];
}

/// Four joint angles in degrees, derived from a single pose
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleReading {
    pub knee_flexion: f64,
    pub hip_flexion: f64,
    pub dorsiflexion: f64,
    pub trunk_lean: f64,
}

impl AngleReading {
    pub fn get(&self, kind: AngleKind) -> f64 {
        match kind {
            AngleKind::KneeFlexion => self.knee_flexion,
            AngleKind::HipFlexion => self.hip_flexion,
            AngleKind::Dorsiflexion => self.dorsiflexion,
            AngleKind::TrunkLean => self.trunk_lean,
        }
    }

    /// Angles in knee, hip, dorsiflexion, trunk lean order
    pub fn values(&self) -> [f64; 4] {
        [
            self.knee_flexion,
            self.hip_flexion,
            self.dorsiflexion,
            self.trunk_lean,
        ]
    }
}

/// The four keypoints of the tracked side
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegKeypoints {
    pub knee: Keypoint,
    pub hip: Keypoint,
    pub ankle: Keypoint,
    pub shoulder: Keypoint,
}

impl LegKeypoints {
    /// Keypoint an angle's label is anchored to, which is also the keypoint
    /// whose confidence gates that angle's maximum
    pub fn anchor(&self, kind: AngleKind) -> Keypoint {
        match kind {
            AngleKind::KneeFlexion => self.knee,
            AngleKind::HipFlexion => self.hip,
            AngleKind::Dorsiflexion => self.ankle,
            AngleKind::TrunkLean => self.shoulder,
        }
    }

    /// Keypoints in the same order as `AngleReading::values`.
    /// Each angle is gated on the confidence of its vertex:
    /// knee, hip, ankle, shoulder.
    pub fn gating_order(&self) -> [Keypoint; 4] {
        AngleKind::ALL.map(|kind| self.anchor(kind))
    }

    pub fn angles(&self, side: Side) -> AngleReading {
        compute_angles(side, self.knee, self.hip, self.ankle, self.shoulder)
    }
}

/// Bearing from `vertex` to `a` minus bearing from `vertex` to `b`, in degrees
fn bearing_difference(vertex: Point2D, a: Point2D, b: Point2D) -> f64 {
    (vertex.bearing_to(a) - vertex.bearing_to(b)) * DEGREES_PER_RADIAN
}

/// Compute knee flexion, hip flexion, ankle dorsiflexion and trunk lean.
///
/// Reference points:
/// - `ankle_knee`: directly below the knee, at ankle height
/// - `shoulder_hip`: directly below the shoulder, at hip height
///
/// Missing coordinates (NaN) produce NaN angles.
pub fn compute_angles(
    side: Side,
    knee: Keypoint,
    hip: Keypoint,
    ankle: Keypoint,
    shoulder: Keypoint,
) -> AngleReading {
    let (knee, hip) = (knee.position, hip.position);
    let (ankle, shoulder) = (ankle.position, shoulder.position);
    let ankle_knee = Point2D::new(knee.x, ankle.y);
    let shoulder_hip = Point2D::new(shoulder.x, hip.y);

    let conv = side.conventions();

    AngleReading {
        knee_flexion: conv.knee.apply(bearing_difference(knee, ankle, hip)),
        hip_flexion: conv.hip.apply(bearing_difference(hip, knee, shoulder)),
        dorsiflexion: conv.dorsiflexion.apply(bearing_difference(ankle, ankle_knee, knee)),
        trunk_lean: conv.trunk_lean.apply(bearing_difference(hip, shoulder_hip, shoulder)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_leg() -> LegKeypoints {
        LegKeypoints {
            knee: Keypoint::new(100.0, 100.0, 0.9),
            hip: Keypoint::new(100.0, 50.0, 0.9),
            ankle: Keypoint::new(120.0, 150.0, 0.9),
            shoulder: Keypoint::new(80.0, 20.0, 0.9),
        }
    }

    #[test]
    fn test_left_knee_matches_bearing_difference() {
        let reading = sample_leg().angles(Side::Left);
        let expected = (50.0_f64.atan2(20.0) - (-50.0_f64).atan2(0.0)) * (180.0 / PI);
        assert!((reading.knee_flexion - expected).abs() < 1e-9);
    }

    #[test]
    fn test_left_complements() {
        let leg = sample_leg();
        let reading = leg.angles(Side::Left);

        let hip = ((50.0_f64).atan2(0.0) - (-30.0_f64).atan2(-20.0)) * (180.0 / PI);
        // ankle_knee = (100, 150)
        let dorsi = ((0.0_f64).atan2(-20.0) - (-50.0_f64).atan2(-20.0)) * (180.0 / PI);
        // shoulder_hip = (80, 50)
        let trunk = ((0.0_f64).atan2(-20.0) - (-30.0_f64).atan2(-20.0)) * (180.0 / PI);

        assert!((reading.hip_flexion - (360.0 - hip)).abs() < 1e-9);
        assert!((reading.dorsiflexion - (360.0 - dorsi)).abs() < 1e-9);
        assert!((reading.trunk_lean - (360.0 - trunk)).abs() < 1e-9);
    }

    #[test]
    fn test_right_side_uses_opposite_conventions() {
        let leg = sample_leg();
        let left = leg.angles(Side::Left);
        let right = leg.angles(Side::Right);

        assert_ne!(left, right);
        assert!((right.knee_flexion - (360.0 - left.knee_flexion)).abs() < 1e-9);
        assert!((right.hip_flexion - (360.0 - left.hip_flexion)).abs() < 1e-9);
        assert!((right.dorsiflexion - (360.0 - left.dorsiflexion)).abs() < 1e-9);
        assert!((right.trunk_lean - (360.0 - left.trunk_lean)).abs() < 1e-9);
    }

    #[test]
    fn test_switching_back_restores_convention() {
        let leg = sample_leg();
        let side = Side::Left;
        assert_eq!(leg.angles(side), leg.angles(side.toggled().toggled()));
    }

    #[test]
    fn test_straight_leg_reads_180_on_left() {
        // hip above knee above ankle on a vertical line
        let leg = LegKeypoints {
            knee: Keypoint::new(0.0, 100.0, 1.0),
            hip: Keypoint::new(0.0, 0.0, 1.0),
            ankle: Keypoint::new(0.0, 200.0, 1.0),
            shoulder: Keypoint::new(0.0, -100.0, 1.0),
        };
        let reading = leg.angles(Side::Left);
        assert!((reading.knee_flexion - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_unnormalized_output_is_kept() {
        // knee bent backwards: raw difference is negative, no modulo applied
        let leg = LegKeypoints {
            knee: Keypoint::new(0.0, 0.0, 1.0),
            hip: Keypoint::new(1.0, 1.0, 1.0),
            ankle: Keypoint::new(-1.0, -1.0, 1.0),
            shoulder: Keypoint::new(1.0, 2.0, 1.0),
        };
        let reading = leg.angles(Side::Left);
        assert!((reading.knee_flexion - (-180.0)).abs() < 1e-9);
    }

    #[test]
    fn test_nan_propagates() {
        let mut leg = sample_leg();
        leg.ankle = Keypoint::missing();
        let reading = leg.angles(Side::Left);
        assert!(reading.knee_flexion.is_nan());
        assert!(reading.dorsiflexion.is_nan());
        // hip and trunk do not use the ankle
        assert!(reading.hip_flexion.is_finite());
        assert!(reading.trunk_lean.is_finite());
    }

    proptest! {
        #[test]
        fn prop_angles_within_atan2_range(
            coords in prop::array::uniform8(-2000.0f64..2000.0),
            right in any::<bool>(),
        ) {
            let side = if right { Side::Right } else { Side::Left };
            let reading = compute_angles(
                side,
                Keypoint::new(coords[0], coords[1], 1.0),
                Keypoint::new(coords[2], coords[3], 1.0),
                Keypoint::new(coords[4], coords[5], 1.0),
                Keypoint::new(coords[6], coords[7], 1.0),
            );
            for value in reading.values() {
                prop_assert!(value > -720.0 && value < 720.0);
            }
        }
    }
}
