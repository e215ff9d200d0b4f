//! Triangle view used for area, perimeter, interpolation and containment
//! queries.
//!
//! A [`Triangle`] borrows its three corners from storage owned elsewhere,
//! usually the vertex list of an [`IndexedTin`](crate::dtm::IndexedTin). It is
//! built on demand and cannot outlive a mutation of that storage.

use nalgebra::{Matrix2, Vector2};

use super::{distance3, Point3};
use crate::crs::Crs;
use crate::error::{TinError, TinResult};

/// Below this magnitude the x-y determinant of a triangle is treated as zero.
pub const DEGENERATE_TOLERANCE: f64 = 1e-6;

/// A triangle that might be arbitrarily oriented in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<'a> {
    corners: [&'a Point3; 3],
}

impl<'a> Triangle<'a> {
    /// Creates a triangle view over three corner points.
    ///
    /// Fails if two corners carry different reference-system tags.
    pub fn new(p0: &'a Point3, p1: &'a Point3, p2: &'a Point3) -> TinResult<Self> {
        Crs::ensure_compatible(p0.crs.as_ref(), p1.crs.as_ref())?;
        Crs::ensure_compatible(p0.crs.as_ref(), p2.crs.as_ref())?;
        Crs::ensure_compatible(p1.crs.as_ref(), p2.crs.as_ref())?;
        Ok(Self {
            corners: [p0, p1, p2],
        })
    }

    pub fn corners(&self) -> [&'a Point3; 3] {
        self.corners
    }

    /// The first reference-system tag found on the corners.
    pub fn crs(&self) -> Option<&'a Crs> {
        self.corners.iter().find_map(|p| p.crs.as_ref())
    }

    /// Triangle area using Heron's formula over the 3D edge lengths.
    ///
    /// Collinear corners give an area of (approximately) zero.
    pub fn area(&self) -> f64 {
        let [p0, p1, p2] = self.corners;
        let l01 = distance3(p0, p1);
        let l02 = distance3(p0, p2);
        let l12 = distance3(p1, p2);
        let s = (l01 + l02 + l12) / 2.0;
        // Rounding can push the product slightly below zero for flat triangles.
        (s * (s - l01) * (s - l02) * (s - l12)).max(0.0).sqrt()
    }

    /// Sum of the 3D edge lengths in corner order 0 -> 1 -> 2 -> 0.
    pub fn circumference(&self) -> f64 {
        let [p0, p1, p2] = self.corners;
        distance3(p0, p1) + distance3(p1, p2) + distance3(p2, p0)
    }

    /// Centroid of the three corners.
    pub fn centroid(&self) -> Point3 {
        let [p0, p1, p2] = self.corners;
        Point3 {
            x: (p0.x + p1.x + p2.x) / 3.0,
            y: (p0.y + p1.y + p2.y) / 3.0,
            z: (p0.z + p1.z + p2.z) / 3.0,
            crs: self.crs().cloned(),
        }
    }

    /// Interpolates the elevation of the triangle's plane at `(pt.x, pt.y)`.
    ///
    /// The z-coordinate of `pt` is ignored. Positions outside the triangle are
    /// extrapolated; use [`Triangle::is_inside_xy`] first if that matters.
    pub fn interpolate_z(&self, pt: &Point3) -> TinResult<f64> {
        let (s0, s1) = self.affine_params(pt)?;
        let [p0, p1, p2] = self.corners;
        Ok(p2.z + s0 * (p0.z - p2.z) + s1 * (p1.z - p2.z))
    }

    /// Checks, in the x-y plane, whether `pt` lies inside the triangle.
    ///
    /// With `include_edge` set, points on the edge opposite corner 2 count as
    /// inside as well. The z-coordinate of `pt` is ignored.
    pub fn is_inside_xy(&self, pt: &Point3, include_edge: bool) -> TinResult<bool> {
        let (s0, s1) = self.affine_params(pt)?;
        if !(0.0..=1.0).contains(&s0) || !(0.0..=1.0).contains(&s1) {
            return Ok(false);
        }
        let sum = s0 + s1;
        Ok(sum < 1.0 || (sum == 1.0 && include_edge))
    }

    /// Solves `p2 + s0 * (p0 - p2) + s1 * (p1 - p2) = pt` in the x-y plane
    /// with Cramer's rule.
    fn affine_params(&self, pt: &Point3) -> TinResult<(f64, f64)> {
        Crs::ensure_compatible(self.crs(), pt.crs.as_ref())?;
        let [p0, p1, p2] = self.corners;
        let dir0 = Vector2::new(p0.x - p2.x, p0.y - p2.y);
        let dir1 = Vector2::new(p1.x - p2.x, p1.y - p2.y);
        let rhs = Vector2::new(pt.x - p2.x, pt.y - p2.y);

        let det = Matrix2::from_columns(&[dir0, dir1]).determinant();
        if det.abs() < DEGENERATE_TOLERANCE {
            return Err(TinError::DegenerateTriangle { determinant: det });
        }
        let s0 = Matrix2::from_columns(&[rhs, dir1]).determinant() / det;
        let s1 = Matrix2::from_columns(&[dir0, rhs]).determinant() / det;
        Ok((s0, s1))
    }
}

impl std::fmt::Display for Triangle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [p0, p1, p2] = self.corners;
        write!(f, "[{}, {}, {}]", p0, p1, p2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn right_triangle() -> [Point3; 3] {
        [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(0.0, 3.0, 0.0),
        ]
    }

    #[test]
    fn area_and_circumference() {
        let [a, b, c] = right_triangle();
        let tri = Triangle::new(&a, &b, &c).unwrap();
        assert!((tri.area() - 6.0).abs() < 1e-9);
        assert!((tri.circumference() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn area_uses_3d_lengths() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 1.0);
        let tri = Triangle::new(&a, &b, &c).unwrap();
        assert!((tri.area() - 2f64.sqrt() / 2.0).abs() < 1e-9);
    }

    #[test]
    fn collinear_area_is_zero() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 1.0, 1.0);
        let c = Point3::new(2.0, 2.0, 2.0);
        let tri = Triangle::new(&a, &b, &c).unwrap();
        assert!(tri.area().abs() < 1e-6);
    }

    #[test]
    fn interpolate_on_sloped_plane() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(2.0, 0.0, 2.0);
        let c = Point3::new(0.0, 2.0, 0.0);
        let tri = Triangle::new(&a, &b, &c).unwrap();
        let z = tri.interpolate_z(&Point3::new(1.0, 0.0, 99.0)).unwrap();
        assert!((z - 1.0).abs() < 1e-9);
        // extrapolation outside the triangle
        let z = tri.interpolate_z(&Point3::new(4.0, 4.0, 0.0)).unwrap();
        assert!((z - 4.0).abs() < 1e-9);
    }

    #[test]
    fn interpolate_reproduces_corners() {
        let a = Point3::new(1.0, 1.0, 10.0);
        let b = Point3::new(5.0, 2.0, 20.0);
        let c = Point3::new(2.0, 6.0, 30.0);
        let tri = Triangle::new(&a, &b, &c).unwrap();
        for p in [&a, &b, &c] {
            assert!((tri.interpolate_z(p).unwrap() - p.z).abs() < 1e-9);
        }
    }

    #[test]
    fn centroid_is_inside() {
        let [a, b, c] = right_triangle();
        let tri = Triangle::new(&a, &b, &c).unwrap();
        let centroid = tri.centroid();
        assert!(tri.is_inside_xy(&centroid, false).unwrap());
        assert!(tri.is_inside_xy(&centroid, true).unwrap());
    }

    #[test]
    fn outside_point() {
        let [a, b, c] = right_triangle();
        let tri = Triangle::new(&a, &b, &c).unwrap();
        assert!(!tri.is_inside_xy(&Point3::new(4.0, 3.0, 0.0), true).unwrap());
        assert!(!tri.is_inside_xy(&Point3::new(-1.0, 1.0, 0.0), true).unwrap());
    }

    #[test]
    fn hypotenuse_depends_on_edge_flag() {
        // s0 = s1 = 0.5 lies exactly on the edge between corners 0 and 1.
        let a = Point3::new(2.0, 0.0, 0.0);
        let b = Point3::new(0.0, 2.0, 0.0);
        let c = Point3::new(0.0, 0.0, 0.0);
        let tri = Triangle::new(&a, &b, &c).unwrap();
        let pt = Point3::new(1.0, 1.0, 0.0);
        assert!(!tri.is_inside_xy(&pt, false).unwrap());
        assert!(tri.is_inside_xy(&pt, true).unwrap());
    }

    #[test]
    fn collinear_xy_is_degenerate() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 1.0, 5.0);
        let c = Point3::new(2.0, 2.0, -5.0);
        let tri = Triangle::new(&a, &b, &c).unwrap();
        let pt = Point3::new(1.0, 0.0, 0.0);
        assert!(matches!(
            tri.interpolate_z(&pt),
            Err(TinError::DegenerateTriangle { .. })
        ));
        assert!(matches!(
            tri.is_inside_xy(&pt, true),
            Err(TinError::DegenerateTriangle { .. })
        ));
    }

    #[test]
    fn mixed_corner_tags_are_rejected() {
        let a = Point3::new(0.0, 0.0, 0.0).with_crs(Crs::wgs84());
        let b = Point3::new(1.0, 0.0, 0.0).with_crs(Crs::web_mercator());
        let c = Point3::new(0.0, 1.0, 0.0);
        assert!(matches!(
            Triangle::new(&a, &b, &c),
            Err(TinError::CrsMismatch { .. })
        ));
    }

    #[test]
    fn query_tag_must_match() {
        let a = Point3::new(0.0, 0.0, 0.0).with_crs(Crs::wgs84());
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);
        let tri = Triangle::new(&a, &b, &c).unwrap();
        let pt = Point3::new(0.2, 0.2, 0.0).with_crs(Crs::web_mercator());
        assert!(matches!(
            tri.interpolate_z(&pt),
            Err(TinError::CrsMismatch { .. })
        ));
    }

    #[test]
    fn display() {
        let [a, b, c] = right_triangle();
        let tri = Triangle::new(&a, &b, &c).unwrap();
        assert_eq!(tri.to_string(), "[(0, 0, 0), (4, 0, 0), (0, 3, 0)]");
    }
}
