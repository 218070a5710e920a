//! Shared models

mod member;
mod serial_key;

pub use member::{MarriedDetails, Member, PersonalDetails, DEFAULT_FEMALE_GENDERS};
pub use serial_key::{normalize_serial_key, normalize_serial_list, SerialKey, SerialKeyError};
