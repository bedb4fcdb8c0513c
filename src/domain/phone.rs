//! Phone value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

/// A type-safe wrapper for phone numbers.
///
/// A phone number is exactly ten ASCII digits: no separators, no country
/// code. Two phones are equal when their digit strings are equal.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Phone;
///
/// let phone = Phone::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` carrying the offending text
    /// if it is not exactly ten digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Validate phone format.
    pub fn is_valid(phone: &str) -> bool {
        PHONE_REGEX.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = Phone::new("0501234567").unwrap();
        assert_eq!(phone.as_str(), "0501234567");
        assert_eq!(phone.to_string(), "0501234567");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(Phone::new("").is_err());
        assert!(Phone::new("123456789").is_err());
        assert!(Phone::new("12345678901").is_err());
        assert!(Phone::new("050-123-4567").is_err());
        assert!(Phone::new("+380501234567").is_err());
        assert!(Phone::new("05012345a7").is_err());
        assert!(Phone::new(" 0501234567").is_err());
        assert!(Phone::new("0501234567\n").is_err());
        assert!(Phone::new("0000000000").is_ok());
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are Unicode digits but not phone digits.
        assert!(Phone::new("٠١٢٣٤٥٦٧٨٩").is_err());
    }

    #[test]
    fn test_phone_error_carries_offending_text() {
        let err = Phone::new("12-34").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("12-34".to_string()));
        assert_eq!(err.to_string(), "Phone number 12-34 should consist of 10 digits");
    }

    #[test]
    fn test_phone_equality_by_value() {
        assert_eq!(Phone::new("1112223333").unwrap(), Phone::new("1112223333").unwrap());
        assert_ne!(Phone::new("1112223333").unwrap(), Phone::new("1112223334").unwrap());
    }

    #[test]
    fn test_phone_serialization() {
        let phone = Phone::new("0501234567").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"0501234567\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<Phone, _> = serde_json::from_str("\"050-123\"");
        assert!(result.is_err());
    }
}
