//! Coordinate reference system tags carried by points and envelopes.

use crate::error::{TinError, TinResult};

/// Reference-system tag attached to points and envelopes.
///
/// The tag is opaque: two tags are compared by their definition text and
/// never interpreted or transformed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Crs {
    definition: String,
    epsg: Option<u32>,
}

impl Crs {
    /// Creates a new CRS from the given EPSG code.
    pub fn from_epsg(code: u32) -> Self {
        Self {
            definition: format!("EPSG:{}", code),
            epsg: Some(code),
        }
    }

    /// Tag given by a free-form definition (Proj4, WKT, ...), without an
    /// EPSG code.
    pub fn from_definition(definition: &str) -> Self {
        Self {
            definition: definition.to_string(),
            epsg: None,
        }
    }

    /// Returns the EPSG code for this CRS, if available.
    pub fn epsg(&self) -> Option<u32> {
        self.epsg
    }

    /// Returns the underlying definition string.
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// WGS84 (EPSG:4326).
    pub fn wgs84() -> Self {
        Self::from_epsg(4326)
    }

    /// Web Mercator (EPSG:3857).
    pub fn web_mercator() -> Self {
        Self::from_epsg(3857)
    }

    /// Checks that two optional tags may be combined.
    ///
    /// An unset tag is compatible with anything; two set tags must be equal.
    pub fn ensure_compatible(expected: Option<&Crs>, found: Option<&Crs>) -> TinResult<()> {
        match (expected, found) {
            (Some(a), Some(b)) if a != b => Err(TinError::CrsMismatch {
                expected: a.definition.clone(),
                found: b.definition.clone(),
            }),
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for Crs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.definition)
    }
}
