//! Test fixtures and sample data.
//!
//! The John/Jane book mirrors the example session the assistant was
//! designed around.

use chrono::{Datelike, NaiveDate};
use contact_book::{AddressBook, Clock, Record, SystemClock};

#[allow(dead_code)]
/// A record with the given phones and optional birthday.
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name);
    for phone in phones {
        record.add_phone(phone).expect("fixture phone must be valid");
    }
    if let Some(raw) = birthday {
        record.add_birthday(raw).expect("fixture birthday must be valid");
    }
    record
}

#[allow(dead_code)]
/// John (two phones, 16.07.1990) and Jane (one phone, 20.07.1995).
pub fn john_and_jane() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record(
        "John",
        &["1234567890", "5555555555"],
        Some("16.07.1990"),
    ));
    book.add_record(sample_record("Jane", &["9876543210"], Some("20.07.1995")));
    book
}

#[allow(dead_code)]
/// `day.month` of the current year.
pub fn this_year(day: u32, month: u32) -> NaiveDate {
    let year = SystemClock.today().year();
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date must be valid")
}

#[allow(dead_code)]
/// A fixed calendar date.
pub fn date(day: u32, month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date must be valid")
}
