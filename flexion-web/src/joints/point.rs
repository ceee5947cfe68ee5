//! Point and keypoint types shared by the angle engine

/// A 2D position in video pixel coordinates (y grows downward)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Bearing from `self` to `to` in radians, in (-π, π]
    pub fn bearing_to(&self, to: Point2D) -> f64 {
        (to.y - self.y).atan2(to.x - self.x)
    }
}

/// A detected keypoint: position plus detector confidence (0-1)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keypoint {
    pub position: Point2D,
    pub confidence: f64,
}

impl Keypoint {
    pub const fn new(x: f64, y: f64, confidence: f64) -> Self {
        Self {
            position: Point2D::new(x, y),
            confidence,
        }
    }

    /// Placeholder for a keypoint the source did not report.
    /// Every angle built from it is NaN and every gate on it fails.
    pub const fn missing() -> Self {
        Self::new(f64::NAN, f64::NAN, f64::NAN)
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }
}

impl Default for Keypoint {
    fn default() -> Self {
        Self::missing()
    }
}
