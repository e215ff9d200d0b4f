//! Line-segment mesh derived from a TIN, used for wireframe display.

use crate::error::{TinError, TinResult};
use crate::geometry::{Line3, Point3};

/// A set of points joined by line segments given as index pairs.
///
/// Segments are kept in insertion order and are not deduplicated: an edge
/// shared by two triangles appears twice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimpleMesh {
    points: Vec<Point3>,
    segments: Vec<(usize, usize)>,
}

impl SimpleMesh {
    /// Creates a mesh over `points` without any segments.
    pub fn new(points: Vec<Point3>) -> Self {
        Self {
            points,
            segments: Vec::new(),
        }
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn segments(&self) -> &[(usize, usize)] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Appends the segment `start -> end`.
    pub fn add_segment(&mut self, start: usize, end: usize) {
        self.segments.push((start, end));
    }

    /// Resolves segment `i` to its end points.
    pub fn line(&self, i: usize) -> TinResult<Line3> {
        let &(a, b) = self.segments.get(i).ok_or(TinError::SegmentIndexOutOfRange {
            index: i,
            len: self.segments.len(),
        })?;
        let point = |idx: usize| {
            self.points
                .get(idx)
                .cloned()
                .ok_or(TinError::PointIndexOutOfRange {
                    index: idx,
                    len: self.points.len(),
                })
        };
        Ok(Line3::new(point(a)?, point(b)?))
    }
}
