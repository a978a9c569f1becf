//! Data models for the contact book.
//!
//! A `Record` is one contact. The collection that owns records lives in
//! the `book` module.

pub mod record;

pub use record::{Record, BIRTHDAY_NOT_SET};
