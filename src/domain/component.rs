//! Component entity and name validation.

use crate::error::ScaffoldError;
use regex::Regex;
use std::fmt;

/// A validated React component name.
///
/// Names must be usable as identifiers in the generated module
/// (`Button`, `UserCard`), so anything that would not survive string
/// interpolation into the template is rejected up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentName(String);

impl ComponentName {
    /// Validate and wrap a component name
    pub fn new(name: &str) -> Result<Self, ScaffoldError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ScaffoldError::InvalidName(
                "name cannot be empty".to_string(),
            ));
        }

        let identifier = Regex::new(r"^[A-Za-z][A-Za-z0-9]*$").unwrap();
        if !identifier.is_match(name) {
            return Err(ScaffoldError::InvalidName(format!(
                "'{}' must start with a letter and contain only letters and digits",
                name
            )));
        }

        Ok(Self(name.to_string()))
    }

    /// The component name as entered (typically PascalCase)
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased class token used in the template and stylesheet
    pub fn class_token(&self) -> String {
        format!("{}-container", self.0.to_lowercase())
    }

    /// Filename of the component module (`Button.tsx`)
    pub fn component_filename(&self) -> String {
        format!("{}.tsx", self.0)
    }

    /// Filename of the barrel file re-exporting the component
    pub fn index_filename(&self) -> &'static str {
        "index.ts"
    }

    /// Filename of the scoped stylesheet (`Button.module.css`)
    pub fn stylesheet_filename(&self) -> String {
        format!("{}.module.css", self.0)
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(ComponentName::new("Button").is_ok());
        assert!(ComponentName::new("UserCard2").is_ok());
        assert!(ComponentName::new("nav").is_ok());
    }

    #[test]
    fn test_invalid_names() {
        assert!(ComponentName::new("").is_err());
        assert!(ComponentName::new("   ").is_err());
        assert!(ComponentName::new("2Cool").is_err());
        assert!(ComponentName::new("User-Card").is_err());
        assert!(ComponentName::new("User Card").is_err());
        assert!(ComponentName::new("../escape").is_err());
        assert!(ComponentName::new("nested/Name").is_err());
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let name = ComponentName::new("  Button  ").unwrap();
        assert_eq!(name.as_str(), "Button");
    }

    #[test]
    fn test_derived_names() {
        let name = ComponentName::new("UserCard").unwrap();
        assert_eq!(name.class_token(), "usercard-container");
        assert_eq!(name.component_filename(), "UserCard.tsx");
        assert_eq!(name.index_filename(), "index.ts");
        assert_eq!(name.stylesheet_filename(), "UserCard.module.css");
    }
}
