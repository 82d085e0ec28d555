//! Company Values Step
//!
//! Selected values are stored as entered. Suggestions are catalog keys,
//! so a view renders every value through the text lookup: keys translate,
//! free text falls through verbatim.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Predefined value suggestions (catalog keys)
pub const SUGGESTED_VALUES: &[&str] = &[
    "value.innovation",
    "value.transparency",
    "value.customerFocus",
    "value.diversity",
    "value.excellence",
    "value.integrity",
    "value.teamwork",
    "value.accountability",
    "value.growthMindset",
    "value.ownership",
    "value.passion",
    "value.quality",
    "value.respect",
    "value.trust",
    "value.adaptability",
];

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompanyValues {
    pub selected: Vec<String>,
    pub description: String,
}

impl CompanyValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a suggestion or free-text value; blank and repeated values are refused
    pub fn add_value(&self, value: &str) -> DomainResult<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(DomainError::InvalidInput("empty value".to_string()));
        }
        if self.selected.iter().any(|v| v == value) {
            return Err(DomainError::Duplicate(value.to_string()));
        }
        let mut next = self.clone();
        next.selected.push(value.to_string());
        Ok(next)
    }

    pub fn remove_value(&self, value: &str) -> Self {
        let mut next = self.clone();
        next.selected.retain(|v| v != value);
        next
    }

    pub fn set_description(&self, description: &str) -> Self {
        Self {
            description: description.to_string(),
            ..self.clone()
        }
    }

    /// Suggestions not yet selected, in display order
    pub fn suggestions(&self) -> Vec<&'static str> {
        SUGGESTED_VALUES
            .iter()
            .copied()
            .filter(|s| !self.selected.iter().any(|v| v == s))
            .collect()
    }

    pub fn can_advance(&self) -> bool {
        !self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_blocks_without_values() {
        assert!(!CompanyValues::new().can_advance());
    }

    #[test]
    fn test_add_suggestion_releases_gate() {
        let values = CompanyValues::new().add_value("value.innovation").unwrap();
        assert!(values.can_advance());
        assert!(!values.suggestions().contains(&"value.innovation"));
        assert_eq!(values.suggestions().len(), SUGGESTED_VALUES.len() - 1);
    }

    #[test]
    fn test_add_free_text_is_trimmed() {
        let values = CompanyValues::new().add_value("  Radical Candor ").unwrap();
        assert_eq!(values.selected, vec!["Radical Candor".to_string()]);
    }

    #[test]
    fn test_rejects_blank_and_duplicate() {
        let values = CompanyValues::new().add_value("Trust").unwrap();
        assert!(matches!(values.add_value("   "), Err(DomainError::InvalidInput(_))));
        assert!(matches!(values.add_value("Trust"), Err(DomainError::Duplicate(_))));
    }

    #[test]
    fn test_remove_value_restores_suggestion() {
        let values = CompanyValues::new()
            .add_value("value.trust")
            .unwrap()
            .remove_value("value.trust");
        assert!(!values.can_advance());
        assert_eq!(values.suggestions().len(), SUGGESTED_VALUES.len());
    }

    #[test]
    fn test_description_is_optional() {
        let values = CompanyValues::new().set_description("Remote-first");
        assert_eq!(values.description, "Remote-first");
        assert!(!values.can_advance());
    }
}
