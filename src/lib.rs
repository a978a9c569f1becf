//! Contact Book - an in-memory address book with a command-line assistant.
//!
//! Contacts have a name, any number of phone numbers, and an optional
//! birthday. The book answers which birthdays fall in the coming days.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact record
//! - **book**: The address book and the upcoming-birthdays query
//! - **matching**: Similar-name suggestions for lookups that miss
//! - **assistant**: Command parsing, dispatch, and the REPL
//! - **config**: Configuration from environment variables and flags
//! - **error**: Error types for the layers around the core

pub mod assistant;
pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;

pub use assistant::{run_repl, Assistant, Reply};
pub use book::{
    AddressBook, BirthdayPolicy, Clock, FixedClock, SharedAddressBook, SystemClock,
    UpcomingBirthday, DEFAULT_BIRTHDAY_POLICY,
};
pub use config::{CliArgs, Config};
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError};
pub use matching::NameMatcher;
pub use models::Record;
