//! Indexed triangulated irregular network.

use log::{debug, trace, warn};

use crate::config::{IndexValidation, TinSettings};
use crate::error::{TinError, TinResult};
use crate::geometry::{Envelope, Point3, Triangle};
use crate::mesh::SimpleMesh;

/// Cached bounding volume of the vertex list.
#[derive(Debug, Clone, Default)]
enum BoundsCache {
    /// No envelope computed since construction or the last point list
    /// reallocation.
    #[default]
    Never,
    /// Computed before, but a vertex has changed since.
    Invalid,
    Valid(Envelope),
}

/// Triangulated Irregular Network stored as a vertex list and a list of
/// index triples into it.
///
/// Triangles share vertices by index. Geometric triangle views are resolved
/// on demand by [`IndexedTin::get_triangle`]. The envelope of the vertices is
/// computed lazily and cached until a vertex changes.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IndexedTin {
    vertices: Vec<Point3>,
    triangles: Vec<[usize; 3]>,
    #[serde(skip)]
    bounds: BoundsCache,
    #[serde(default)]
    settings: TinSettings,
}

impl IndexedTin {
    /// Creates a TIN holding `number_of_points` vertices at the origin and
    /// `number_of_triangles` index triples `[0, 0, 0]`.
    pub fn new(number_of_points: usize, number_of_triangles: usize) -> Self {
        Self::with_settings(number_of_points, number_of_triangles, &TinSettings::default())
    }

    /// Same as [`IndexedTin::new`] with explicit settings.
    pub fn with_settings(
        number_of_points: usize,
        number_of_triangles: usize,
        settings: &TinSettings,
    ) -> Self {
        Self {
            vertices: vec![Point3::default(); number_of_points],
            triangles: vec![[0; 3]; number_of_triangles],
            bounds: BoundsCache::Never,
            settings: settings.clone(),
        }
    }

    /// Builds a TIN from the provided vertices using Delaunay triangulation on
    /// the XY plane.
    pub fn from_points(points: Vec<Point3>) -> Self {
        let coords: Vec<delaunator::Point> = points
            .iter()
            .map(|p| delaunator::Point { x: p.x, y: p.y })
            .collect();
        let triangulation = delaunator::triangulate(&coords);
        let triangles: Vec<[usize; 3]> = triangulation
            .triangles
            .chunks(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();
        debug!(
            "triangulated {} points into {} triangles",
            points.len(),
            triangles.len()
        );
        Self {
            vertices: points,
            triangles,
            bounds: BoundsCache::Never,
            settings: TinSettings::default(),
        }
    }

    pub fn number_of_points(&self) -> usize {
        self.vertices.len()
    }

    pub fn number_of_triangles(&self) -> usize {
        self.triangles.len()
    }

    pub fn settings(&self) -> &TinSettings {
        &self.settings
    }

    /// The vertex list.
    pub fn points(&self) -> &[Point3] {
        &self.vertices
    }

    /// The stored index triples.
    pub fn triangle_indices(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    /// Returns the `i`-th vertex.
    pub fn get_point(&self, i: usize) -> TinResult<&Point3> {
        self.vertices.get(i).ok_or(TinError::PointIndexOutOfRange {
            index: i,
            len: self.vertices.len(),
        })
    }

    /// Copies `p` into the `i`-th vertex.
    ///
    /// A move can both grow and shrink the bounds, so a cached envelope is
    /// dropped and recomputed on the next query.
    pub fn set_point(&mut self, i: usize, p: &Point3) -> TinResult<()> {
        let len = self.vertices.len();
        let vertex = self
            .vertices
            .get_mut(i)
            .ok_or(TinError::PointIndexOutOfRange { index: i, len })?;
        vertex.set(p);
        self.set_bounds_invalid();
        Ok(())
    }

    /// Resolves the `i`-th index triple against the current vertex list.
    pub fn get_triangle(&self, i: usize) -> TinResult<Triangle<'_>> {
        let [a, b, c] = self.get_triangle_vertex_indices(i)?;
        Triangle::new(
            self.resolve_vertex(i, a)?,
            self.resolve_vertex(i, b)?,
            self.resolve_vertex(i, c)?,
        )
    }

    /// Stores the index triple `(a, b, c)` at position `i`.
    ///
    /// Under [`IndexValidation::Eager`] the vertex indices must address
    /// existing points; under [`IndexValidation::Deferred`] they are checked
    /// by [`IndexedTin::get_triangle`].
    pub fn set_triangle(&mut self, i: usize, a: usize, b: usize, c: usize) -> TinResult<()> {
        if i >= self.triangles.len() {
            return Err(TinError::TriangleIndexOutOfRange {
                index: i,
                len: self.triangles.len(),
            });
        }
        if self.settings.index_validation == IndexValidation::Eager {
            for vertex in [a, b, c] {
                self.resolve_vertex(i, vertex)?;
            }
        }
        self.triangles[i] = [a, b, c];
        Ok(())
    }

    /// Returns the raw index triple stored at position `i`.
    pub fn get_triangle_vertex_indices(&self, i: usize) -> TinResult<[usize; 3]> {
        self.triangles
            .get(i)
            .copied()
            .ok_or(TinError::TriangleIndexOutOfRange {
                index: i,
                len: self.triangles.len(),
            })
    }

    /// Iterates over all triangles in storage order.
    pub fn triangles(&self) -> impl Iterator<Item = TinResult<Triangle<'_>>> + '_ {
        (0..self.triangles.len()).map(move |i| self.get_triangle(i))
    }

    /// Replaces the vertex list by `number_of_points` points at the origin.
    ///
    /// The triangle list is cleared as well, since its indices would no
    /// longer refer to meaningful vertices.
    pub fn new_point_list(&mut self, number_of_points: usize) {
        debug!(
            "reallocating TIN point list: {} -> {} points, dropping {} triangles",
            self.vertices.len(),
            number_of_points,
            self.triangles.len()
        );
        self.vertices = vec![Point3::default(); number_of_points];
        self.triangles = Vec::new();
        self.bounds = BoundsCache::Never;
    }

    /// Replaces the triangle list by `number_of_triangles` triples `[0, 0, 0]`.
    /// The vertices are kept.
    pub fn new_triangle_list(&mut self, number_of_triangles: usize) {
        debug!(
            "reallocating TIN triangle list: {} -> {} triangles",
            self.triangles.len(),
            number_of_triangles
        );
        self.triangles = vec![[0; 3]; number_of_triangles];
    }

    /// Returns the bounding box of all vertices, computing it if necessary.
    ///
    /// Fails with [`TinError::EmptyTin`] on a TIN without points, or with
    /// [`TinError::CrsMismatch`] if the vertices carry different tags.
    pub fn try_envelope(&mut self) -> TinResult<&Envelope> {
        if !self.bounds_valid() {
            let env = Envelope::from_points(&self.vertices)?;
            debug!("computed TIN envelope over {} points", self.vertices.len());
            self.bounds = BoundsCache::Valid(env);
        }
        match &self.bounds {
            BoundsCache::Valid(env) => Ok(env),
            _ => Err(TinError::EnvelopeUnavailable),
        }
    }

    /// Returns the bounding box of all vertices, or `None` if no bounds are
    /// available (e.g. the TIN has no points).
    pub fn envelope(&mut self) -> Option<&Envelope> {
        self.try_envelope()
            .map_err(|e| warn!("TIN envelope not available: {}", e))
            .ok()
    }

    /// Lowest elevation of the TIN.
    ///
    /// Fails with [`TinError::EnvelopeUnavailable`] until an envelope has been
    /// computed successfully; afterwards a vertex change triggers a
    /// recomputation.
    pub fn minimal_elevation(&mut self) -> TinResult<f64> {
        self.elevation_bounds().map(|env| env.z_min())
    }

    /// Highest elevation of the TIN. See [`IndexedTin::minimal_elevation`].
    pub fn maximal_elevation(&mut self) -> TinResult<f64> {
        self.elevation_bounds().map(|env| env.z_max())
    }

    /// Drops the cached envelope.
    ///
    /// Batch editors may call this before a run of [`IndexedTin::set_point`]
    /// calls; the envelope is recomputed once on the next query.
    pub fn set_bounds_invalid(&mut self) {
        if let BoundsCache::Valid(_) = self.bounds {
            trace!("TIN envelope invalidated");
            self.bounds = BoundsCache::Invalid;
        }
    }

    /// Returns `true` while a computed envelope is cached.
    pub fn bounds_valid(&self) -> bool {
        matches!(self.bounds, BoundsCache::Valid(_))
    }

    /// Deletes the `i`-th triangle; the following triangles move down by one.
    #[deprecated(note = "triangle indices after `i` change; rebuild the triangle list instead")]
    pub fn delete_triangle(&mut self, i: usize) -> TinResult<()> {
        if i >= self.triangles.len() {
            return Err(TinError::TriangleIndexOutOfRange {
                index: i,
                len: self.triangles.len(),
            });
        }
        self.triangles.remove(i);
        Ok(())
    }

    /// Builds a wireframe mesh holding a copy of the vertices and the three
    /// edges of every triangle. Shared edges appear once per triangle.
    pub fn wireframe(&self) -> SimpleMesh {
        let mut mesh = SimpleMesh::new(self.vertices.clone());
        for &[a, b, c] in &self.triangles {
            mesh.add_segment(a, b);
            mesh.add_segment(b, c);
            mesh.add_segment(c, a);
        }
        mesh
    }

    /// Returns the elevation at (x, y) if the point lies within the TIN.
    ///
    /// The first triangle containing the position (edges included) is used;
    /// degenerate or unresolvable triangles are skipped.
    pub fn elevation_at(&self, x: f64, y: f64) -> Option<f64> {
        let pt = Point3::new(x, y, 0.0);
        self.triangles()
            .filter_map(Result::ok)
            .find_map(|tri| match tri.is_inside_xy(&pt, true) {
                Ok(true) => tri.interpolate_z(&pt).ok(),
                _ => None,
            })
    }

    /// Total 3D area of all triangles.
    pub fn surface_area(&self) -> TinResult<f64> {
        self.triangles().map(|tri| tri.map(|t| t.area())).sum()
    }

    fn resolve_vertex(&self, triangle: usize, vertex: usize) -> TinResult<&Point3> {
        self.vertices
            .get(vertex)
            .ok_or(TinError::DanglingVertexIndex {
                triangle,
                vertex,
                len: self.vertices.len(),
            })
    }

    fn elevation_bounds(&mut self) -> TinResult<&Envelope> {
        if let BoundsCache::Never = self.bounds {
            return Err(TinError::EnvelopeUnavailable);
        }
        self.try_envelope()
    }
}
