//! Settings controlling how a TIN checks the data written into it.

use thiserror::Error;

/// When triangle vertex indices are checked against the point list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexValidation {
    /// Reject out-of-range vertex indices in `set_triangle`.
    #[default]
    Eager,
    /// Store any index triple; out-of-range indices surface when the
    /// triangle is read back.
    Deferred,
}

/// Settings applied to an [`IndexedTin`](crate::dtm::IndexedTin).
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TinSettings {
    #[serde(default)]
    pub index_validation: IndexValidation,
}

/// Errors raised while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl TinSettings {
    /// Parses settings from a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Saves these settings to a JSON file.
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads settings from a JSON file.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_eager() {
        assert_eq!(TinSettings::default().index_validation, IndexValidation::Eager);
        let parsed = TinSettings::from_json_str("{}").unwrap();
        assert_eq!(parsed.index_validation, IndexValidation::Eager);
    }

    #[test]
    fn parses_deferred() {
        let parsed = TinSettings::from_json_str(r#"{"index_validation":"deferred"}"#).unwrap();
        assert_eq!(parsed.index_validation, IndexValidation::Deferred);
    }

    #[test]
    fn rejects_unknown_policy() {
        let err = TinSettings::from_json_str(r#"{"index_validation":"lazy"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
