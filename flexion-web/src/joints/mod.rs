//! Joints module - angle engine for knee, hip, ankle and trunk
//!
//! Re-exports only. All logic in submodules.

mod point;
mod side;
mod angles;
mod maxima;
mod config;
mod session;

pub use point::{Keypoint, Point2D};
pub use side::{AngleConvention, Side, SideConventions};
pub use angles::{compute_angles, AngleKind, AngleReading, LegKeypoints};
pub use maxima::{round_half_up, update_maxima, SessionMaxima};
pub use config::{AngleConfig, ConfigError};
pub use session::{AngleSession, TrackedFrame};
