//! Domain value objects and types.
//!
//! Each value object validates its input at construction time, so a
//! `PhoneNumber` or `Birthday` that exists is always well formed. `Name`
//! is plain text and accepts anything.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::PhoneNumber;
