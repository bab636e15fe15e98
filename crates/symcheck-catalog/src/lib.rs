//! symcheck-catalog
//!
//! Static reference data for the symptom checker: which conditions exist,
//! which symptoms each presents with, and which specialist to see.
//! Read-only once built.

pub mod condition;
pub mod config;
pub mod error;

mod builtin;

use std::collections::BTreeSet;
use std::sync::LazyLock;

pub use condition::{Condition, DEFAULT_SPECIALIST, SeverityClass, normalize_symptom};
pub use config::{CatalogConfig, ConditionSpec};
pub use error::CatalogError;

/// An ordered, immutable set of conditions.
///
/// Definition order is significant: scoring iterates in this order and
/// breaks ties in favour of the earliest condition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionCatalog {
    conditions: Vec<Condition>,
}

impl ConditionCatalog {
    /// Build a catalog, rejecting duplicate names.
    ///
    /// An empty list is accepted here; call [`ConditionCatalog::ensure_non_empty`]
    /// before handing the catalog to the scoring engine.
    pub fn new(conditions: Vec<Condition>) -> Result<Self, CatalogError> {
        for (i, condition) in conditions.iter().enumerate() {
            if conditions[..i].iter().any(|c| c.name() == condition.name()) {
                return Err(CatalogError::DuplicateCondition(condition.name().to_string()));
            }
        }
        Ok(Self { conditions })
    }

    /// The reference seven-condition catalog, built once per process.
    pub fn builtin() -> &'static ConditionCatalog {
        static BUILTIN: LazyLock<ConditionCatalog> = LazyLock::new(|| ConditionCatalog {
            conditions: builtin::conditions(),
        });
        &BUILTIN
    }

    pub fn ensure_non_empty(&self) -> Result<(), CatalogError> {
        if self.conditions.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        Ok(())
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn condition(&self, name: &str) -> Option<&Condition> {
        self.conditions.iter().find(|c| c.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.conditions.iter().map(Condition::name)
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn symptoms_of(&self, name: &str) -> Result<&[String], CatalogError> {
        self.condition(name)
            .map(Condition::symptoms)
            .ok_or_else(|| CatalogError::UnknownCondition(name.to_string()))
    }

    /// The specialist to recommend for `name`.
    ///
    /// Falls back to [`DEFAULT_SPECIALIST`] for names without a mapping.
    pub fn specialist_for(&self, name: &str) -> &str {
        self.condition(name)
            .map(Condition::specialist)
            .unwrap_or(DEFAULT_SPECIALIST)
    }

    pub fn is_minor(&self, name: &str) -> bool {
        self.condition(name).is_some_and(Condition::is_minor)
    }

    /// Sorted, deduplicated union of every condition's symptoms.
    pub fn all_symptoms(&self) -> Vec<String> {
        self.conditions
            .iter()
            .flat_map(|c| c.symptoms().iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
