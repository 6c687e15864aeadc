//! Field validation for Fieldguard
//!
//! Stateless validators for phone numbers, postal codes, names, passwords,
//! service identifiers, ISO country codes, URLs, dates, and the two Ukrainian
//! registration numbers that carry a check digit: the company code (EDRPOU)
//! and the individual taxpayer number (TIN).
//!
//! Every validator is total. It never returns an error for bad input; it
//! returns a [`ValidationOutcome`] whose `passed` flag is false.
//!
//! # Examples
//!
//! ## Shorthand functions
//!
//! ```
//! use fieldguard_validation::validators;
//!
//! assert!(validators::phone_number("+380501234567").is_success());
//! assert!(validators::service_name("abc123").is_failure());
//!
//! let outcome = validators::ukraine_company_edrpou("14360570");
//! assert!(outcome.passed());
//! assert_eq!(outcome.message(), "is a valid Ukraine company EDRPOU");
//! ```
//!
//! ## Validators as values
//!
//! ```
//! use fieldguard_validation::{PatternValidator, TinValidator, Validator};
//!
//! let tin = TinValidator;
//! assert!(tin.validate("1234567899".into()).is_success());
//! assert!(tin.validate("1234567890".into()).is_failure());
//!
//! let postal = PatternValidator::postal_code();
//! assert!(postal.check("K1A 0B1".into()));
//! ```
//!
//! ## Deterministic birthdays
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use fieldguard_validation::{BirthdayValidator, FixedClock, ValidationConfig, Validator};
//!
//! let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let birthday = BirthdayValidator::with_clock(&ValidationConfig::default(), FixedClock(now));
//!
//! assert!(birthday.check("1990-01-01".into()));
//! assert!(!birthday.check("2999-01-01".into()));
//! ```
//!
//! ## Collecting field errors
//!
//! ```
//! use fieldguard_validation::{Validate, ValidationErrors, validators};
//!
//! struct SignUp {
//!     name: String,
//!     phone: String,
//! }
//!
//! impl Validate for SignUp {
//!     fn validate(&self) -> Result<(), ValidationErrors> {
//!         let mut errors = ValidationErrors::default();
//!         errors.collect(validators::name(&self.name).into_result("name"));
//!         errors.collect(validators::phone_number(&self.phone).into_result("phone"));
//!         errors.into_result()
//!     }
//! }
//!
//! let input = SignUp {
//!     name: "Olena".to_string(),
//!     phone: "call me".to_string(),
//! };
//! let errors = input.validate().unwrap_err();
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors.errors[0].to_string(), "phone is not a valid phone number");
//! ```

pub mod checksum;
mod clock;
mod config;
mod errors;
mod outcome;
mod patterns;
mod registry;
mod traits;
pub mod validators;

pub use checksum::{validate_edrpou, validate_tin};
pub use clock::*;
pub use config::*;
pub use errors::*;
pub use outcome::*;
pub use patterns::*;
pub use registry::*;
pub use traits::*;
pub use validators::{
    BirthdayValidator, DateValidator, EdrpouValidator, PatternValidator, TinValidator,
    UrlListValidator, UrlValidator,
};
