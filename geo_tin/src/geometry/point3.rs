//! Basic 3D point type used throughout the crate.

use crate::crs::Crs;
use crate::error::TinResult;

/// Representation of a 3D point with an optional reference-system tag.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crs: Option<Crs>,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z, crs: None }
    }

    /// Returns this point tagged with `crs`.
    pub fn with_crs(mut self, crs: Crs) -> Self {
        self.crs = Some(crs);
        self
    }

    /// Copies the coordinates and the reference-system tag of `other` into
    /// this point.
    pub fn set(&mut self, other: &Point3) {
        self.x = other.x;
        self.y = other.y;
        self.z = other.z;
        self.crs.clone_from(&other.crs);
    }

    /// Euclidean 3D distance to `other`.
    ///
    /// Fails if both points carry reference-system tags that differ.
    pub fn distance(&self, other: &Point3) -> TinResult<f64> {
        Crs::ensure_compatible(self.crs.as_ref(), other.crs.as_ref())?;
        Ok(super::distance3(self, other))
    }

    /// Euclidean distance in the x-y plane.
    pub fn distance_xy(&self, other: &Point3) -> TinResult<f64> {
        Crs::ensure_compatible(self.crs.as_ref(), other.crs.as_ref())?;
        Ok((other.x - self.x).hypot(other.y - self.y))
    }
}

impl std::fmt::Display for Point3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
