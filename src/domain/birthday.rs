//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Input and display format for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Earliest accepted year. Year 0000 is not a calendar year.
pub const MIN_YEAR: i32 = 1;

static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("Failed to compile birthday regex")
});

/// A contact's birthday.
///
/// Parsed from `DD.MM.YYYY` and stored as a calendar date. Both the shape
/// of the input and the date itself are checked, so `"1.7.1990"` and
/// `"31.02.2020"` are rejected alike.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
/// use chrono::Datelike;
///
/// let birthday = Birthday::new("16.07.1990").unwrap();
/// assert_eq!(birthday.date().month(), 7);
/// assert_eq!(birthday.to_string(), "16.07.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the input does not match
    /// the pattern or does not name a real calendar date.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_PATTERN.is_match(raw) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }

        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .ok()
            .filter(|date| date.year() >= MIN_YEAR)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidBirthday(raw.to_string()))
    }

    /// Wrap an already valid calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The birth date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    pub fn in_year(&self, year: i32) -> NaiveDate {
        self.0.with_year(year).unwrap_or_else(|| {
            NaiveDate::from_ymd_opt(year, 2, 28).unwrap_or(self.0)
        })
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize as DD.MM.YYYY
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// Serde support - deserialize from DD.MM.YYYY with validation
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
