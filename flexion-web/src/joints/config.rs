//! Tunable thresholds for the angle engine

use thiserror::Error;

/// Reasons an `AngleConfig` is rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("confidence threshold must be within [0, 1], got {0}")]
    ConfidenceOutOfRange(f64),

    #[error("baseline must be a whole number within (0, 180], got {0}")]
    BaselineOutOfRange(f64),

    #[error("angle floor must be within [0, {baseline}), got {floor}")]
    FloorOutOfRange { floor: f64, baseline: f64 },

    #[error("label offset must be finite, got ({0}, {1})")]
    NonFiniteOffset(f64, f64),
}

/// Gates and display constants for the angle engine
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleConfig {
    /// A maximum updates only when its keypoint's confidence is strictly above this
    pub confidence_threshold: f64,
    /// Readings at or below this are treated as noise
    pub angle_floor: f64,
    /// Value every maximum resets to ("nothing recorded yet")
    pub baseline: f64,
    /// Keypoints are drawn as markers when their confidence is strictly above this
    pub marker_confidence: f64,
    /// Pixel offset from a keypoint to its angle label
    pub label_offset: (f64, f64),
}

impl Default for AngleConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.5,
            angle_floor: 20.0,
            baseline: 180.0,
            marker_confidence: 0.5,
            label_offset: (20.0, 10.0),
        }
    }
}

impl AngleConfig {
    /// Defaults with custom gates
    pub fn with_gates(confidence_threshold: f64, angle_floor: f64) -> Result<Self, ConfigError> {
        let config = Self {
            confidence_threshold,
            angle_floor,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for threshold in [self.confidence_threshold, self.marker_confidence] {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::ConfidenceOutOfRange(threshold));
            }
        }
        // maxima are stored rounded, so a fractional baseline could be overshot
        if !(self.baseline > 0.0 && self.baseline <= 180.0) || self.baseline.fract() != 0.0 {
            return Err(ConfigError::BaselineOutOfRange(self.baseline));
        }
        if !(self.angle_floor >= 0.0 && self.angle_floor < self.baseline) {
            return Err(ConfigError::FloorOutOfRange {
                floor: self.angle_floor,
                baseline: self.baseline,
            });
        }
        let (dx, dy) = self.label_offset;
        if !dx.is_finite() || !dy.is_finite() {
            return Err(ConfigError::NonFiniteOffset(dx, dy));
        }
        Ok(())
    }
}
