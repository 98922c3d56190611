//! Presentation helpers for parsed values.

mod phone;

pub use phone::{LibPhoneFormatter, Passthrough, PhoneFormatter, formatter_for};
