// src/domain/category/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const NAME_MAX_CHARS: usize = 50;
const DESCRIPTION_MAX_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("category id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CategoryId> for i64 {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trimmed category name, unique across categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName(String);

impl CategoryName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::validation("category name is required"));
        }
        if value.chars().count() > NAME_MAX_CHARS {
            return Err(DomainError::validation(format!(
                "category name cannot be more than {NAME_MAX_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDescription(String);

impl CategoryDescription {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(DomainError::validation(format!(
                "description cannot be more than {DESCRIPTION_MAX_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    /// Blank input clears the description.
    pub fn parse_optional(value: Option<String>) -> DomainResult<Option<Self>> {
        match value {
            Some(text) if !text.trim().is_empty() => Self::new(text).map(Some),
            _ => Ok(None),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        let name = CategoryName::new("  Rust  ").unwrap();
        assert_eq!(name.as_str(), "Rust");
    }

    #[test]
    fn blank_name_is_rejected() {
        assert!(CategoryName::new("   ").is_err());
    }

    #[test]
    fn name_length_is_bounded() {
        assert!(CategoryName::new("a".repeat(50)).is_ok());
        assert!(CategoryName::new("a".repeat(51)).is_err());
    }

    #[test]
    fn description_length_is_bounded() {
        assert!(CategoryDescription::new("d".repeat(200)).is_ok());
        assert!(CategoryDescription::new("d".repeat(201)).is_err());
    }

    #[test]
    fn blank_description_clears() {
        assert!(CategoryDescription::parse_optional(Some("  ".into())).unwrap().is_none());
        assert!(CategoryDescription::parse_optional(None).unwrap().is_none());
    }

    #[test]
    fn id_must_be_positive() {
        assert!(CategoryId::new(0).is_err());
        assert!(CategoryId::new(3).is_ok());
    }
}
