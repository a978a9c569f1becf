//! The address book and its birthday query.

pub mod address_book;
pub mod clock;
pub mod upcoming;

pub use address_book::{AddressBook, SharedAddressBook};
pub use clock::{Clock, FixedClock, SystemClock};
pub use upcoming::{BirthdayPolicy, UpcomingBirthday, DEFAULT_BIRTHDAY_POLICY};
