//! Core library for triangulated irregular networks (TINs).
//!
//! Points, envelopes and triangle geometry live in [`geometry`]; the indexed
//! TIN structure in [`dtm`].

pub mod config;
pub mod crs;
pub mod dtm;
pub mod error;
pub mod geometry;
pub mod mesh;

pub use config::{IndexValidation, TinSettings};
pub use crs::Crs;
pub use dtm::IndexedTin;
pub use error::{TinError, TinResult};
pub use geometry::{Envelope, Point3, Triangle};
pub use mesh::SimpleMesh;
