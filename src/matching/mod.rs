//! Similar-name suggestions for lookups that miss.
//!
//! Names are keys and lookups are exact, so a typo in a command finds
//! nothing. This module ranks stored names against the typed one.

pub mod name_matcher;

pub use name_matcher::{NameMatch, NameMatcher};
