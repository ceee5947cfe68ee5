//! Angle session - side selection, running maxima and the last reading

use super::angles::{AngleReading, LegKeypoints};
use super::config::{AngleConfig, ConfigError};
use super::maxima::{update_maxima, SessionMaxima};
use super::side::Side;

/// Last processed pose and the angles derived from it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedFrame {
    pub keypoints: LegKeypoints,
    pub reading: AngleReading,
}

/// All mutable state of one tracking session.
///
/// Every operation replaces the state it touches in one step, so a reader
/// never observes a reading from one pose paired with maxima from another.
#[derive(Clone, Debug, PartialEq)]
pub struct AngleSession {
    config: AngleConfig,
    side: Side,
    maxima: SessionMaxima,
    last: Option<TrackedFrame>,
}

impl AngleSession {
    pub fn new(config: AngleConfig) -> Self {
        Self {
            config,
            side: Side::default(),
            maxima: SessionMaxima::new(config.baseline),
            last: None,
        }
    }

    pub fn config(&self) -> &AngleConfig {
        &self.config
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn maxima(&self) -> SessionMaxima {
        self.maxima
    }

    /// Most recent frame, `None` until a pose arrives or after a reset
    pub fn last_frame(&self) -> Option<&TrackedFrame> {
        self.last.as_ref()
    }

    /// Compute angles for the tracked side's keypoints and fold them into the maxima
    pub fn process(&mut self, keypoints: LegKeypoints) -> AngleReading {
        let reading = keypoints.angles(self.side);
        self.maxima = update_maxima(&reading, &keypoints, self.maxima, &self.config);
        self.last = Some(TrackedFrame { keypoints, reading });
        reading
    }

    /// Track the other side. Maxima recorded for the previous side are discarded.
    pub fn switch_side(&mut self) -> Side {
        self.side = self.side.toggled();
        self.reset_maxima();
        self.side
    }

    /// Restore every maximum to the baseline and forget the last reading
    pub fn reset_maxima(&mut self) {
        self.maxima.reset(self.config.baseline);
        self.last = None;
    }

    /// Replace the configuration. Maxima are reset since they were gated by the old one.
    pub fn set_config(&mut self, config: AngleConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.reset_maxima();
        Ok(())
    }
}

impl Default for AngleSession {
    fn default() -> Self {
        Self::new(AngleConfig::default())
    }
}
