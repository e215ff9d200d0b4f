//! Basic geometry primitives for TIN operations.

mod envelope;
mod line3;
mod point3;
mod triangle;

pub use envelope::Envelope;
pub use line3::Line3;
pub use point3::Point3;
pub use triangle::{Triangle, DEGENERATE_TOLERANCE};

/// Calculates the Euclidean distance between two 3D points.
///
/// Reference-system tags are not checked; see [`Point3::distance`].
pub fn distance3(a: &Point3, b: &Point3) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2) + (b.z - a.z).powi(2)).sqrt()
}
