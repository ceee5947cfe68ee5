//! Session maxima - the most-flexed angle seen since the last reset
//!
//! Flexion is reported as degrees below the straight 180° baseline, so the
//! "maximum" flexion is the numerically smallest accepted reading.

use super::angles::{AngleKind, AngleReading, LegKeypoints};
use super::config::AngleConfig;

/// Round to the nearest integer, ties toward +∞
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Best (smallest) accepted angle per joint
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionMaxima {
    pub max_knee: f64,
    pub max_hip: f64,
    pub max_dorsiflexion: f64,
    pub max_trunk_lean: f64,
}

impl SessionMaxima {
    /// All four maxima at `baseline`
    pub fn new(baseline: f64) -> Self {
        Self {
            max_knee: baseline,
            max_hip: baseline,
            max_dorsiflexion: baseline,
            max_trunk_lean: baseline,
        }
    }

    pub fn get(&self, kind: AngleKind) -> f64 {
        match kind {
            AngleKind::KneeFlexion => self.max_knee,
            AngleKind::HipFlexion => self.max_hip,
            AngleKind::Dorsiflexion => self.max_dorsiflexion,
            AngleKind::TrunkLean => self.max_trunk_lean,
        }
    }

    /// Maxima in knee, hip, dorsiflexion, trunk lean order
    pub fn values(&self) -> [f64; 4] {
        [
            self.max_knee,
            self.max_hip,
            self.max_dorsiflexion,
            self.max_trunk_lean,
        ]
    }

    fn values_mut(&mut self) -> [&mut f64; 4] {
        [
            &mut self.max_knee,
            &mut self.max_hip,
            &mut self.max_dorsiflexion,
            &mut self.max_trunk_lean,
        ]
    }

    pub fn reset(&mut self, baseline: f64) {
        *self = Self::new(baseline);
    }
}

impl Default for SessionMaxima {
    fn default() -> Self {
        Self::new(AngleConfig::default().baseline)
    }
}

/// Fold one reading into the maxima.
///
/// Each angle is accepted independently when its vertex keypoint is
/// confident enough and the angle lies strictly between the noise floor
/// and the current maximum. Accepted values are stored rounded. NaN
/// readings or confidences fail every comparison and are skipped.
pub fn update_maxima(
    reading: &AngleReading,
    keypoints: &LegKeypoints,
    maxima: SessionMaxima,
    config: &AngleConfig,
) -> SessionMaxima {
    let mut next = maxima;
    let gates = keypoints.gating_order();

    for ((current, angle), keypoint) in next
        .values_mut()
        .into_iter()
        .zip(reading.values())
        .zip(gates)
    {
        if keypoint.confidence > config.confidence_threshold
            && angle > config.angle_floor
            && angle < *current
        {
            *current = round_half_up(angle);
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::joints::point::Keypoint;
    use proptest::prelude::*;

    fn keypoints(confidence: f64) -> LegKeypoints {
        let kp = Keypoint::new(0.0, 0.0, confidence);
        LegKeypoints {
            knee: kp,
            hip: kp,
            ankle: kp,
            shoulder: kp,
        }
    }

    /// Fold `reading` into untouched maxima with default gates
    fn from_baseline(reading: &AngleReading, confidence: f64) -> SessionMaxima {
        let config = AngleConfig::default();
        update_maxima(reading, &keypoints(confidence), SessionMaxima::default(), &config)
    }

    fn knee_only(knee_flexion: f64) -> AngleReading {
        AngleReading {
            knee_flexion,
            hip_flexion: f64::NAN,
            dorsiflexion: f64::NAN,
            trunk_lean: f64::NAN,
        }
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(44.5), 45.0);
        assert_eq!(round_half_up(44.49), 44.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.51), -3.0);
        assert!(round_half_up(f64::NAN).is_nan());
    }

    #[test]
    fn test_more_flexed_reading_updates() {
        let config = AngleConfig::default();
        let maxima = from_baseline(&knee_only(45.0), 0.9);
        assert_eq!(maxima.max_knee, 45.0);
        assert_eq!(maxima.max_hip, 180.0);

        let maxima = update_maxima(&knee_only(60.0), &keypoints(0.9), maxima, &config);
        assert_eq!(maxima.max_knee, 45.0);
    }

    #[test]
    fn test_below_floor_never_updates() {
        for confidence in [0.6, 0.9, 1.0] {
            let maxima = from_baseline(&knee_only(10.0), confidence);
            assert_eq!(maxima.max_knee, 180.0);
        }
        let maxima = from_baseline(&knee_only(20.0), 1.0);
        assert_eq!(maxima.max_knee, 180.0);
    }

    #[test]
    fn test_low_confidence_skips() {
        let maxima = from_baseline(&knee_only(45.0), 0.5);
        assert_eq!(maxima.max_knee, 180.0);
    }

    #[test]
    fn test_each_angle_gated_by_its_own_keypoint() {
        let config = AngleConfig::default();
        let mut kps = keypoints(0.9);
        kps.ankle.confidence = 0.1;
        let reading = AngleReading {
            knee_flexion: 90.0,
            hip_flexion: 100.0,
            dorsiflexion: 70.0,
            trunk_lean: 30.4,
        };
        let maxima = update_maxima(&reading, &kps, SessionMaxima::default(), &config);
        assert_eq!(maxima.values(), [90.0, 100.0, 180.0, 30.0]);
    }

    #[test]
    fn test_nan_reading_is_noop() {
        let maxima = from_baseline(&knee_only(f64::NAN), 0.9);
        assert_eq!(maxima, SessionMaxima::default());

        let maxima = from_baseline(&knee_only(45.0), f64::NAN);
        assert_eq!(maxima, SessionMaxima::default());
    }

    #[test]
    fn test_reset_restores_baseline() {
        let config = AngleConfig::default();
        let reading = AngleReading {
            knee_flexion: 90.0,
            hip_flexion: 100.0,
            dorsiflexion: 70.0,
            trunk_lean: 30.0,
        };
        let mut maxima = from_baseline(&reading, 0.9);
        maxima.reset(config.baseline);
        assert_eq!(maxima.values(), [180.0; 4]);
    }

    proptest! {
        #[test]
        fn prop_maxima_non_increasing_and_floored(
            readings in prop::collection::vec(prop::array::uniform4(-400.0f64..700.0), 1..40),
        ) {
            let config = AngleConfig::default();
            let kps = keypoints(0.9);
            let mut maxima = SessionMaxima::default();
            for values in readings {
                let reading = AngleReading {
                    knee_flexion: values[0],
                    hip_flexion: values[1],
                    dorsiflexion: values[2],
                    trunk_lean: values[3],
                };
                let next = update_maxima(&reading, &kps, maxima, &config);
                for (before, after) in maxima.values().into_iter().zip(next.values()) {
                    prop_assert!(after <= before);
                    prop_assert!(after >= 20.0 && after <= 180.0);
                }
                maxima = next;
            }
        }

        #[test]
        fn prop_update_is_idempotent(values in prop::array::uniform4(0.0f64..360.0)) {
            let config = AngleConfig::default();
            let kps = keypoints(0.9);
            let reading = AngleReading {
                knee_flexion: values[0],
                hip_flexion: values[1],
                dorsiflexion: values[2],
                trunk_lean: values[3],
            };
            let once = update_maxima(&reading, &kps, SessionMaxima::default(), &config);
            let twice = update_maxima(&reading, &kps, once, &config);
            prop_assert_eq!(once, twice);
        }
    }
}
