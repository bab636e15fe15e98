use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::condition::{Condition, SeverityClass};
use crate::error::CatalogError;
use crate::ConditionCatalog;

/// One condition as written in a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionSpec {
    pub symptoms: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub specialist: Option<String>,
    #[serde(default)]
    pub minor: bool,
}

/// Catalog configuration in its on-disk shape:
///
/// ```json
/// { "Flu": { "symptoms": ["fever", "cough"], "specialist": "General Practitioner", "minor": true } }
/// ```
///
/// Key order in the JSON object is kept and becomes the catalog order.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    entries: Vec<(String, ConditionSpec)>,
}

impl CatalogConfig {
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let entries = raw
            .into_iter()
            .map(|(name, value)| Ok((name, serde_json::from_value(value)?)))
            .collect::<Result<Vec<_>, CatalogError>>()?;
        Ok(Self { entries })
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            conditions = config.entries.len(),
            "catalog config loaded"
        );
        Ok(config)
    }

    pub fn entries(&self) -> &[(String, ConditionSpec)] {
        &self.entries
    }

    /// Validate every entry and build the catalog.
    pub fn into_catalog(self) -> Result<ConditionCatalog, CatalogError> {
        let conditions = self
            .entries
            .into_iter()
            .map(|(name, spec)| {
                let severity = if spec.minor {
                    SeverityClass::Minor
                } else {
                    SeverityClass::Other
                };
                Condition::new(name, spec.symptoms, spec.specialist, severity)
            })
            .collect::<Result<Vec<_>, _>>()?;
        ConditionCatalog::new(conditions)
    }
}
