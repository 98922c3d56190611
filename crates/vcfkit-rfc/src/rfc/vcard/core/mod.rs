//! vCard core models.
//!
//! These types are shared by the parser and the serializer:
//! - `Contact`: one parsed card with merge rules for repeated properties
//! - `PropertyValue` / `ParameterMap`: a property occurrence and its parameters
//! - `StructuredName` / `Address`: component views of N and ADR values

mod contact;
mod parameter;
mod property;
mod structured;

pub use contact::Contact;
pub use parameter::{ParamValue, ParameterMap, QUOTED_PRINTABLE, names as param_names, types};
pub use property::{OtherValue, PropertyValue, names};
pub use structured::{Address, StructuredName};
