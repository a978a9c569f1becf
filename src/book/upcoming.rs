//! Upcoming birthday window.
//!
//! Only calendar dates take part: "today" is a `NaiveDate`, so the answer is
//! the same at 00:01 and at 23:59.

use crate::domain::{Birthday, Name};
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use std::fmt;

/// How far ahead to look for birthdays and what to do at the end of a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayPolicy {
    /// Size of the window after today. The window is inclusive on both ends,
    /// so `7` covers today plus the following seven days.
    pub window_days: u32,

    /// When `true`, a birthday that already passed this year is also tried in
    /// the next year, so 2 January is upcoming on 28 December. When `false`
    /// only this year's occurrence counts.
    pub wrap_year_end: bool,
}

/// Seven days ahead, no wrap into the next year.
pub const DEFAULT_BIRTHDAY_POLICY: BirthdayPolicy = BirthdayPolicy {
    window_days: 7,
    wrap_year_end: false,
};

impl Default for BirthdayPolicy {
    fn default() -> Self {
        DEFAULT_BIRTHDAY_POLICY
    }
}

impl BirthdayPolicy {
    /// Last day of the window starting at `today`.
    pub fn window_end(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_add_days(Days::new(u64::from(self.window_days)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// The date `birthday` is celebrated within the window, if it is.
    pub fn occurrence(&self, birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
        let end = self.window_end(today);
        let this_year = birthday.in_year(today.year());

        if this_year >= today {
            return (this_year <= end).then_some(this_year);
        }

        if self.wrap_year_end {
            let next_year = birthday.in_year(today.year() + 1);
            return (next_year <= end).then_some(next_year);
        }

        None
    }
}

/// A contact whose birthday falls inside the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: Name,

    /// The day the birthday is celebrated, not the birth date.
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDate,
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&Birthday::from_date(*date))
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, Birthday::from_date(self.date))
    }
}
