//! Domain value objects and validation rules.
//!
//! This module contains type-safe wrappers for person names and phone
//! numbers together with the pure validation functions behind them. The
//! functions return at most one error per field, picking the first rule
//! that fails.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::{Field, ValidationError};
pub use name::{validate_name, PersonName, MAX_NAME_LENGTH};
pub use phone::{validate_phone, PhoneNumber};
