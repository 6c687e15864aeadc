// Validation traits

use crate::{ValidationErrors, ValidationOutcome, ValidatorKind};
use fieldguard_log::trace;

/// Input handed to a validator: a single string or a list of strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    List(&'a [String]),
}

impl<'a> FieldValue<'a> {
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            FieldValue::Text(text) => Some(text),
            FieldValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&'a [String]> {
        match *self {
            FieldValue::List(items) => Some(items),
            FieldValue::Text(_) => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, FieldValue::List(_))
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::Text(value.as_str())
    }
}

impl<'a> From<&'a [String]> for FieldValue<'a> {
    fn from(value: &'a [String]) -> Self {
        FieldValue::List(value)
    }
}

impl<'a> From<&'a Vec<String>> for FieldValue<'a> {
    fn from(value: &'a Vec<String>) -> Self {
        FieldValue::List(value.as_slice())
    }
}

/// A named, stateless predicate over a field value.
///
/// Implementations must be pure: the same input always yields the same
/// outcome (time-dependent validators read time only through a [`Clock`](crate::Clock)).
/// A value of the wrong shape (a list for a scalar validator, or the other
/// way round) is simply invalid.
pub trait Validator: Send + Sync {
    /// Which validator this is
    fn kind(&self) -> ValidatorKind;

    /// External name, e.g. `phoneNumber`
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Run the check
    fn check(&self, value: FieldValue<'_>) -> bool;

    /// Run the check and wrap the answer with the validator's messages
    fn validate(&self, value: FieldValue<'_>) -> ValidationOutcome {
        let passed = self.check(value);
        trace!(target: "fieldguard::validation", "{} passed={}", self.name(), passed);
        ValidationOutcome::new(self.kind(), passed)
    }
}

/// Trait for validatable types, typically request DTOs
pub trait Validate {
    /// Validate every field and return all failures
    fn validate(&self) -> Result<(), ValidationErrors>;
}
