//! Built-in typed validators.
//!
//! Each validator is a small struct implementing [`Validate`](crate::foundation::Validate)
//! over `str`: value in, verdict out. The registry-facing rule set in
//! [`crate::rules`] wraps these with declarative names and parameters.

pub mod date;
pub mod domain;
pub mod email;
pub mod length;
pub mod number;
pub mod pattern;
pub mod personnummer;
pub mod phone;
pub mod strength;
pub mod url;
pub mod vat;

pub use date::{Birthdate, DateFormat, Time, parse_date};
pub use domain::Domain;
pub use email::Email;
pub use length::{Length, LengthBound, length};
pub use number::{Float, Integer, Number};
pub use pattern::Pattern;
pub use personnummer::Personnummer;
pub use phone::{Phone, SwedishMobile};
pub use strength::{Strength, level, score};
pub use url::Url;
pub use vat::UkVat;
