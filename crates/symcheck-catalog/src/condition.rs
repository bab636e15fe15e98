use serde::Serialize;
use ts_rs::TS;

use crate::error::CatalogError;

/// Specialist recommended when a condition does not name one.
pub const DEFAULT_SPECIALIST: &str = "General Practitioner";

/// Whether a condition is mild enough to suggest telemedicine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityClass {
    Minor,
    #[default]
    Other,
}

/// A catalog entry: a named condition and the canonical symptoms it presents with.
///
/// Symptoms are stored trimmed, lowercased and without duplicates, in the
/// order they were first given. A condition always has at least one symptom.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Condition {
    name: String,
    symptoms: Vec<String>,
    specialist: String,
    severity: SeverityClass,
}

impl Condition {
    pub fn new<S: AsRef<str>>(
        name: impl Into<String>,
        symptoms: impl IntoIterator<Item = S>,
        specialist: Option<String>,
        severity: SeverityClass,
    ) -> Result<Self, CatalogError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(CatalogError::BlankName);
        }

        let mut canonical: Vec<String> = Vec::new();
        for symptom in symptoms {
            let symptom = normalize_symptom(symptom.as_ref());
            if !symptom.is_empty() && !canonical.contains(&symptom) {
                canonical.push(symptom);
            }
        }
        if canonical.is_empty() {
            return Err(CatalogError::NoSymptoms(name));
        }

        let specialist = specialist
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SPECIALIST.to_string());

        Ok(Self {
            name,
            symptoms: canonical,
            specialist,
            severity,
        })
    }

    /// Build an entry from data already in canonical form.
    pub(crate) fn from_static(
        name: &str,
        symptoms: &[&str],
        specialist: &str,
        severity: SeverityClass,
    ) -> Self {
        Self {
            name: name.to_string(),
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            specialist: specialist.to_string(),
            severity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    pub fn specialist(&self) -> &str {
        &self.specialist
    }

    pub fn severity(&self) -> SeverityClass {
        self.severity
    }

    pub fn is_minor(&self) -> bool {
        self.severity == SeverityClass::Minor
    }

    pub fn has_symptom(&self, symptom: &str) -> bool {
        self.symptoms.iter().any(|s| s == symptom)
    }
}

/// Trim and lowercase a single symptom string.
pub fn normalize_symptom(raw: &str) -> String {
    raw.trim().to_lowercase()
}
