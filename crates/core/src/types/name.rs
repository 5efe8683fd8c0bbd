//! Customer name type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`CustomerName`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum CustomerNameError {
    /// The input is empty after trimming whitespace.
    #[error("please enter your name or table")]
    Empty,
    /// The input string is too long.
    #[error("name must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// The name (or table) an order is placed under.
///
/// Parsing trims leading and trailing whitespace; an input that is empty
/// after trimming is rejected, so a whitespace-only name can never reach the
/// order service.
///
/// ## Examples
///
/// ```
/// use snackwatch_core::CustomerName;
///
/// assert_eq!(CustomerName::parse("  Alice ").unwrap().as_str(), "Alice");
/// assert!(CustomerName::parse("").is_err());
/// assert!(CustomerName::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct CustomerName(String);

impl CustomerName {
    /// Maximum length of a customer name, in characters.
    pub const MAX_LENGTH: usize = 100;

    /// Parse a `CustomerName` from a string, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty or longer than
    /// [`Self::MAX_LENGTH`] characters.
    pub fn parse(s: &str) -> Result<Self, CustomerNameError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(CustomerNameError::Empty);
        }

        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(CustomerNameError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `CustomerName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CustomerName {
    type Err = CustomerNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for CustomerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(CustomerName::parse("Alice").unwrap().as_str(), "Alice");
        assert_eq!(CustomerName::parse("Table 4").unwrap().as_str(), "Table 4");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let name = CustomerName::parse("  Alice \t").unwrap();
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(
            CustomerName::parse(""),
            Err(CustomerNameError::Empty)
        ));
    }

    #[test]
    fn test_parse_whitespace_only() {
        assert!(matches!(
            CustomerName::parse("   \t\n "),
            Err(CustomerNameError::Empty)
        ));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "a".repeat(CustomerName::MAX_LENGTH + 1);
        assert!(matches!(
            CustomerName::parse(&long),
            Err(CustomerNameError::TooLong { .. })
        ));
    }

    #[test]
    fn test_max_length_is_allowed() {
        let max = "a".repeat(CustomerName::MAX_LENGTH);
        assert!(CustomerName::parse(&max).is_ok());
    }

    #[test]
    fn test_display_and_from_str() {
        let name: CustomerName = " Bob ".parse().unwrap();
        assert_eq!(format!("{name}"), "Bob");
    }

    #[test]
    fn test_serde_serializes_transparent() {
        let name = CustomerName::parse("Alice").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Alice\"");
    }
}
