// src/domain/slug/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// URL-safe identifier: `[a-z0-9-]`, no leading, trailing or doubled hyphen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(DomainError::Validation(format!(
                "slug '{value}' may only contain lowercase letters, digits and hyphens"
            )));
        }
        if value.starts_with('-') || value.ends_with('-') || value.contains("--") {
            return Err(DomainError::Validation(format!(
                "slug '{value}' has a misplaced hyphen"
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

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_normalized_tokens() {
        assert_eq!(Slug::new("ao-so-mi-2").unwrap().as_str(), "ao-so-mi-2");
    }

    #[test]
    fn rejects_malformed_tokens() {
        for bad in ["", "Ao", "ao so", "-ao", "ao-", "ao--so", "áo"] {
            assert!(
                matches!(Slug::new(bad), Err(DomainError::Validation(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
