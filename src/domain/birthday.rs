//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual format birthdays are entered, displayed and stored in.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A contact's date of birth.
///
/// Parsed from the strict `DD.MM.YYYY` format and stored as a calendar
/// date. Strings with the right shape but naming a day that does not
/// exist (`30.02.1990`) are rejected.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("15.06.1990").unwrap();
/// assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 6, 15).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not have
    /// the `DD.MM.YYYY` shape or is not a real calendar date.
    pub fn new(text: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_REGEX.is_match(text) {
            return Err(ValidationError::InvalidBirthday(text.to_string()));
        }

        NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(text.to_string()))
    }

    /// The birth date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Month of birth (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of month of birth (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

// Serde support - serialize in the same format users type
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
