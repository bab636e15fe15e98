use serde::{Deserialize, Serialize};

/// Separator for free-text symptom entry.
pub const DELIMITER: char = ',';

/// User-provided symptoms after normalization: trimmed, lowercased, no
/// empty entries. Order is preserved and duplicates are kept; scoring
/// treats the input as a set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomInput(Vec<String>);

impl SymptomInput {
    /// Parse comma-separated free text, e.g. `"Fever, headache ,,nausea"`.
    pub fn parse(text: &str) -> Self {
        Self::from_selections(text.split(DELIMITER))
    }

    /// Normalize symptoms picked individually (e.g. from a vocabulary list).
    pub fn from_selections<S: AsRef<str>>(items: impl IntoIterator<Item = S>) -> Self {
        Self(
            items
                .into_iter()
                .map(|s| symcheck_catalog::normalize_symptom(s.as_ref()))
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }

    pub fn extend(&mut self, other: SymptomInput) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}
