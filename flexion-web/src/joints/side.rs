//! Tracked side and the per-side angle conventions
//!
//! With the camera facing the subject, the left and right legs are mirror
//! images of each other. Each angle is reported either as the raw bearing
//! difference or as its complement from 360, and the two sides use
//! opposite choices so a larger number below 180 always means more flexion.

use std::fmt;

/// Which side of the body is being tracked
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    /// The other side
    pub fn toggled(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Lowercase label shown to the user
    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    /// Conventions used to turn raw bearing differences into reported angles
    pub fn conventions(self) -> &'static SideConventions {
        match self {
            Side::Left => &LEFT_CONVENTIONS,
            Side::Right => &RIGHT_CONVENTIONS,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a raw bearing difference (degrees) to a reported angle:
/// `offset + sign * raw`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleConvention {
    pub offset: f64,
    pub sign: f64,
}

impl AngleConvention {
    /// Reported as-is
    pub const DIRECT: Self = Self { offset: 0.0, sign: 1.0 };
    /// Reported as `360 - raw`
    pub const COMPLEMENT: Self = Self { offset: 360.0, sign: -1.0 };

    pub fn apply(&self, raw_degrees: f64) -> f64 {
        self.offset + self.sign * raw_degrees
    }
}

/// One convention per tracked angle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SideConventions {
    pub knee: AngleConvention,
    pub hip: AngleConvention,
    pub dorsiflexion: AngleConvention,
    pub trunk_lean: AngleConvention,
}

const LEFT_CONVENTIONS: SideConventions = SideConventions {
    knee: AngleConvention::DIRECT,
    hip: AngleConvention::COMPLEMENT,
    dorsiflexion: AngleConvention::COMPLEMENT,
    trunk_lean: AngleConvention::COMPLEMENT,
};

const RIGHT_CONVENTIONS: SideConventions = SideConventions {
    knee: AngleConvention::COMPLEMENT,
    hip: AngleConvention::DIRECT,
    dorsiflexion: AngleConvention::DIRECT,
    trunk_lean: AngleConvention::DIRECT,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_two_cycle() {
        assert_eq!(Side::Left.toggled(), Side::Right);
        assert_eq!(Side::Right.toggled(), Side::Left);
        assert_eq!(Side::Left.toggled().toggled(), Side::Left);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Side::Left.label(), "left");
        assert_eq!(Side::Right.to_string(), "right");
    }

    #[test]
    fn test_conventions_are_mirrored() {
        let left = Side::Left.conventions();
        let right = Side::Right.conventions();
        assert_eq!(left.knee, right.hip);
        assert_eq!(left.hip, right.knee);
        assert_ne!(left.knee, right.knee);
        assert_ne!(left.dorsiflexion, right.dorsiflexion);
        assert_ne!(left.trunk_lean, right.trunk_lean);
    }

    #[test]
    fn test_complement_matches_subtraction() {
        for raw in [-359.5, -90.0, 0.0, 12.25, 181.0, 359.9] {
            assert_eq!(AngleConvention::COMPLEMENT.apply(raw), 360.0 - raw);
            assert_eq!(AngleConvention::DIRECT.apply(raw), raw);
        }
    }
}
