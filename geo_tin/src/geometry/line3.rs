//! Basic 3D line types used throughout the crate.

use super::{distance3, Point3};

/// Representation of a 3D line segment between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Line3 {
    pub start: Point3,
    pub end: Point3,
}

impl Line3 {
    /// Creates a new line segment.
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }

    /// Returns the length of the line segment.
    pub fn length(&self) -> f64 {
        distance3(&self.start, &self.end)
    }

    /// Returns the midpoint of the line segment. The start point's tag is kept.
    pub fn midpoint(&self) -> Point3 {
        Point3 {
            x: (self.start.x + self.end.x) / 2.0,
            y: (self.start.y + self.end.y) / 2.0,
            z: (self.start.z + self.end.z) / 2.0,
            crs: self.start.crs.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line3_length_midpoint() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 2.0, 2.0);
        let line = Line3::new(a, b);
        assert!((line.length() - 3.0).abs() < 1e-6);
        assert_eq!(line.midpoint(), Point3::new(0.5, 1.0, 1.0));
    }
}
