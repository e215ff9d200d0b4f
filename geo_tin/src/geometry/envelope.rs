//! Axis-aligned bounding volume built incrementally from points.

use super::Point3;
use crate::crs::Crs;
use crate::error::{TinError, TinResult};

/// An axis-aligned bounding box in x, y and z.
///
/// An `Envelope` always holds bounds: it is created from a first point and
/// only grows afterwards. "No bounds yet" is expressed by the absence of an
/// envelope (`Option<Envelope>`), so `min <= max` holds on every axis of
/// every value of this type.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Envelope {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
    zmin: f64,
    zmax: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    crs: Option<Crs>,
}

impl Envelope {
    /// Creates an envelope whose six bounds equal the coordinates of `p`.
    pub fn from_point(p: &Point3) -> Self {
        Self {
            xmin: p.x,
            xmax: p.x,
            ymin: p.y,
            ymax: p.y,
            zmin: p.z,
            zmax: p.z,
            crs: p.crs.clone(),
        }
    }

    /// Folds [`Envelope::absorb`] over `points`.
    ///
    /// Fails with [`TinError::EmptyTin`] when `points` yields nothing.
    pub fn from_points<'a, I>(points: I) -> TinResult<Self>
    where
        I: IntoIterator<Item = &'a Point3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next().ok_or(TinError::EmptyTin)?;
        let mut env = Self::from_point(first);
        for p in iter {
            env.absorb(p)?;
        }
        Ok(env)
    }

    /// Extends the bounds so that they contain `p`.
    ///
    /// Axes on which `p` already lies inside stay untouched. Fails if `p`
    /// carries a reference-system tag different from the envelope's.
    pub fn absorb(&mut self, p: &Point3) -> TinResult<()> {
        Crs::ensure_compatible(self.crs.as_ref(), p.crs.as_ref())?;
        if self.crs.is_none() {
            self.crs.clone_from(&p.crs);
        }
        self.xmin = self.xmin.min(p.x);
        self.xmax = self.xmax.max(p.x);
        self.ymin = self.ymin.min(p.y);
        self.ymax = self.ymax.max(p.y);
        self.zmin = self.zmin.min(p.z);
        self.zmax = self.zmax.max(p.z);
        Ok(())
    }

    pub fn x_min(&self) -> f64 {
        self.xmin
    }

    pub fn x_max(&self) -> f64 {
        self.xmax
    }

    pub fn y_min(&self) -> f64 {
        self.ymin
    }

    pub fn y_max(&self) -> f64 {
        self.ymax
    }

    pub fn z_min(&self) -> f64 {
        self.zmin
    }

    pub fn z_max(&self) -> f64 {
        self.zmax
    }

    /// Extent along x.
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Extent along y.
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Extent along z.
    pub fn depth(&self) -> f64 {
        self.zmax - self.zmin
    }

    /// Reference-system tag adopted from the absorbed points.
    pub fn crs(&self) -> Option<&Crs> {
        self.crs.as_ref()
    }

    /// Returns `true` if `(x, y)` lies inside or on the x-y footprint.
    pub fn contains_xy(&self, x: f64, y: f64) -> bool {
        x >= self.xmin && x <= self.xmax && y >= self.ymin && y <= self.ymax
    }
}
