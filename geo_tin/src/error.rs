//! Error type shared by the geometry primitives and the TIN structure.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type TinResult<T> = Result<T, TinError>;

/// Failures reported by points, triangles and TIN structures.
///
/// Every failure is synchronous and deterministic: the same query on the
/// same data fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TinError {
    /// A point index outside `0..len`.
    #[error("point index {index} out of range (number of points: {len})")]
    PointIndexOutOfRange { index: usize, len: usize },

    /// A triangle index outside `0..len`.
    #[error("triangle index {index} out of range (number of triangles: {len})")]
    TriangleIndexOutOfRange { index: usize, len: usize },

    /// A mesh segment index outside `0..len`.
    #[error("segment index {index} out of range (number of segments: {len})")]
    SegmentIndexOutOfRange { index: usize, len: usize },

    /// A stored index triple references a vertex that does not exist.
    #[error("triangle {triangle} references vertex {vertex}, but the TIN holds {len} points")]
    DanglingVertexIndex {
        triangle: usize,
        vertex: usize,
        len: usize,
    },

    /// The triangle's x-y projection is (nearly) collinear.
    #[error("degenerate triangle (x-y determinant {determinant:e})")]
    DegenerateTriangle { determinant: f64 },

    /// Tried to access an empty TIN.
    #[error("tried to access empty TIN")]
    EmptyTin,

    /// No envelope could be computed for the TIN.
    #[error("TIN envelope not available")]
    EnvelopeUnavailable,

    /// Two operands carry different reference-system tags.
    #[error("reference system mismatch: expected {expected}, found {found}")]
    CrsMismatch { expected: String, found: String },
}
