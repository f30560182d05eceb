use crate::shared::error::DepsizeError;
use serde_json::Value;

/// The parts of a package index document the size walker needs
///
/// Built from the raw JSON so that a document of unexpected shape can be
/// reported in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    version: String,
    artifact_size: u64,
    requires_dist: Vec<String>,
}

impl PackageMetadata {
    /// Extracts the latest version, the byte size of its first artifact and the
    /// declared requirements.
    ///
    /// # Errors
    /// `DepsizeError::CalculationFailed` when `info.version` is missing, the
    /// release list for that version is missing or empty, or the first
    /// artifact has no integer `size`.
    pub fn from_document(package: &str, document: &Value) -> Result<Self, DepsizeError> {
        let failed = || DepsizeError::CalculationFailed {
            package: package.to_string(),
            data: serde_json::to_string_pretty(document).unwrap_or_else(|_| document.to_string()),
        };

        let info = document.get("info").ok_or_else(failed)?;
        let version = info
            .get("version")
            .and_then(Value::as_str)
            .ok_or_else(failed)?;

        let artifact_size = document
            .get("releases")
            .and_then(|releases| releases.get(version))
            .and_then(Value::as_array)
            .and_then(|artifacts| artifacts.first())
            .and_then(|artifact| artifact.get("size"))
            .and_then(Value::as_u64)
            .ok_or_else(failed)?;

        // null and absent both mean "no dependencies"
        let requires_dist = info
            .get("requires_dist")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            version: version.to_string(),
            artifact_size,
            requires_dist,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn artifact_size(&self) -> u64 {
        self.artifact_size
    }

    pub fn requires_dist(&self) -> &[String] {
        &self.requires_dist
    }
}
