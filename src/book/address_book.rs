//! In-memory address book keyed by contact name.

use super::clock::{Clock, SystemClock};
use super::upcoming::{BirthdayPolicy, UpcomingBirthday, DEFAULT_BIRTHDAY_POLICY};
use crate::domain::Name;
use crate::models::Record;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// An address book shared between threads.
///
/// Every operation is cheap, so one lock guards the whole book.
pub type SharedAddressBook = Arc<Mutex<AddressBook>>;

/// Records keyed by name.
///
/// Names are unique. Adding a record whose name is already present replaces
/// the stored record and keeps its position, so iteration always follows
/// the order in which names were first added.
///
/// Lookups go through a name index, so add and find are O(1). Delete
/// shifts the later records down and is O(n).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<Name, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap this book for use from several threads.
    pub fn into_shared(self) -> SharedAddressBook {
        Arc::new(Mutex::new(self))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Insert `record`, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => self.records[index] = record,
            None => {
                self.index.insert(record.name().clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Look up a record by its exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|index| &self.records[index])
    }

    /// Look up a record by its exact name for editing.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        let index = self.position(name)?;
        self.records.get_mut(index)
    }

    /// Remove the record called `name`, returning it if it was present.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.index.remove(name)?;
        for index in self.index.values_mut() {
            if *index > removed {
                *index -= 1;
            }
        }
        Some(self.records.remove(removed))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &Name> {
        self.records.iter().map(Record::name)
    }

    /// Contacts whose birthday falls within `policy`'s window from `today`.
    ///
    /// Records without a birthday are skipped. Results follow insertion order.
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        policy: &BirthdayPolicy,
    ) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                policy
                    .occurrence(birthday, today)
                    .map(|date| UpcomingBirthday {
                        name: record.name().clone(),
                        date,
                    })
            })
            .collect()
    }

    /// Names of contacts with a birthday in the default window from `today`.
    pub fn upcoming_birthday_names(&self, today: NaiveDate) -> Vec<Name> {
        self.upcoming_birthdays(today, &DEFAULT_BIRTHDAY_POLICY)
            .into_iter()
            .map(|upcoming| upcoming.name)
            .collect()
    }

    /// Upcoming birthdays from the local calendar date with the default policy.
    pub fn get_upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays(SystemClock.today(), &DEFAULT_BIRTHDAY_POLICY)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
