//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown in place of the birthday when none has been recorded.
pub const BIRTHDAY_NOT_SET: &str = "Not set";

/// A single contact: a name, its phone numbers, and an optional birthday.
///
/// Phones keep insertion order and may repeat. Every mutation that takes
/// raw input validates it first, so a failed call leaves the record as it
/// was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(raw)?);
        Ok(())
    }

    /// Remove every phone equal to `raw`. Does nothing when none match.
    pub fn remove_phone(&mut self, raw: &str) {
        self.phones.retain(|phone| phone.as_str() != raw);
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// Returns `Ok(true)` when a phone was replaced and `Ok(false)` when `old`
    /// is not on the record. `new` is only validated when `old` is found.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        match self.phones.iter().position(|phone| phone.as_str() == old) {
            Some(index) => {
                self.phones[index] = PhoneNumber::new(new)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// First phone equal to `raw`, if any.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.as_str() == raw)
    }

    /// Validate `raw` and store it as the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    /// Phones joined with `"; "`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: ",
            self.name,
            self.phones_display()
        )?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => f.write_str(BIRTHDAY_NOT_SET),
        }
    }
}
