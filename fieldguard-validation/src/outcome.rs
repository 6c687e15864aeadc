// Validator kinds and validation outcomes

use crate::{UnknownKind, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every built-in validator, identified by its external name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidatorKind {
    PhoneNumber,
    PhoneNumberCode,
    Name,
    PostalCode,
    IsoCountryCode,
    Password,
    CompanyName,
    ServiceName,
    UkraineCompanyEdrpou,
    UkraineTin,
    Birthday,
    Date,
    Url,
    ArrayUrls,
}

impl ValidatorKind {
    /// All kinds, in declaration order.
    pub const ALL: [ValidatorKind; 14] = [
        ValidatorKind::PhoneNumber,
        ValidatorKind::PhoneNumberCode,
        ValidatorKind::Name,
        ValidatorKind::PostalCode,
        ValidatorKind::IsoCountryCode,
        ValidatorKind::Password,
        ValidatorKind::CompanyName,
        ValidatorKind::ServiceName,
        ValidatorKind::UkraineCompanyEdrpou,
        ValidatorKind::UkraineTin,
        ValidatorKind::Birthday,
        ValidatorKind::Date,
        ValidatorKind::Url,
        ValidatorKind::ArrayUrls,
    ];

    /// External validator name.
    pub fn name(self) -> &'static str {
        match self {
            ValidatorKind::PhoneNumber => "phoneNumber",
            ValidatorKind::PhoneNumberCode => "phoneNumberCode",
            ValidatorKind::Name => "name",
            ValidatorKind::PostalCode => "postalCode",
            ValidatorKind::IsoCountryCode => "isoCountryCode",
            ValidatorKind::Password => "password",
            ValidatorKind::CompanyName => "companyName",
            ValidatorKind::ServiceName => "serviceName",
            ValidatorKind::UkraineCompanyEdrpou => "ukraineCompanyEdrpou",
            ValidatorKind::UkraineTin => "ukraineTin",
            ValidatorKind::Birthday => "birthday",
            ValidatorKind::Date => "date",
            ValidatorKind::Url => "url",
            ValidatorKind::ArrayUrls => "arrayUrls",
        }
    }

    /// Look a kind up by its external name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Whether this validator takes a list of strings rather than one string.
    pub fn takes_list(self) -> bool {
        matches!(self, ValidatorKind::ArrayUrls)
    }

    pub fn success_message(self) -> &'static str {
        match self {
            ValidatorKind::PhoneNumber => "is a valid phone number",
            ValidatorKind::PhoneNumberCode => "is a valid phone code",
            ValidatorKind::Name => "is a valid name",
            ValidatorKind::PostalCode => "is a valid postal code",
            ValidatorKind::IsoCountryCode => "is a valid ISO country code",
            ValidatorKind::Password => "is a valid password",
            ValidatorKind::CompanyName => "is a valid company name",
            ValidatorKind::ServiceName => "is a valid service name",
            ValidatorKind::UkraineCompanyEdrpou => "is a valid Ukraine company EDRPOU",
            ValidatorKind::UkraineTin => "is a valid Ukraine TIN",
            ValidatorKind::Birthday => "is a valid birthday",
            ValidatorKind::Date => "is a valid date",
            ValidatorKind::Url => "is a valid URL",
            ValidatorKind::ArrayUrls => "contains only valid URLs",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            ValidatorKind::PhoneNumber => "is not a valid phone number",
            ValidatorKind::PhoneNumberCode => "is not a valid phone code",
            ValidatorKind::Name => "is not a valid name",
            ValidatorKind::PostalCode => "is not a valid postal code",
            ValidatorKind::IsoCountryCode => "is not a valid ISO country code",
            ValidatorKind::Password => "is not a valid password",
            ValidatorKind::CompanyName => "is not a valid company name",
            ValidatorKind::ServiceName => "is not a valid service name",
            ValidatorKind::UkraineCompanyEdrpou => "is not a valid Ukraine company EDRPOU",
            ValidatorKind::UkraineTin => "is not a valid Ukraine TIN",
            ValidatorKind::Birthday => "is not a valid birthday",
            ValidatorKind::Date => "is not a valid date",
            ValidatorKind::Url => "is not a valid URL",
            ValidatorKind::ArrayUrls => "contains an invalid URL or is empty",
        }
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValidatorKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// Result of running one validator over one input.
///
/// Both messages are fixed per [`ValidatorKind`]; nothing from the input ever
/// ends up in an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    kind: ValidatorKind,
    passed: bool,
    success_message: &'static str,
    failure_message: &'static str,
}

impl ValidationOutcome {
    pub fn new(kind: ValidatorKind, passed: bool) -> Self {
        Self {
            kind,
            passed,
            success_message: kind.success_message(),
            failure_message: kind.failure_message(),
        }
    }

    pub fn kind(&self) -> ValidatorKind {
        self.kind
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn is_success(&self) -> bool {
        self.passed
    }

    pub fn is_failure(&self) -> bool {
        !self.passed
    }

    pub fn success_message(&self) -> &'static str {
        self.success_message
    }

    pub fn failure_message(&self) -> &'static str {
        self.failure_message
    }

    /// The message that describes this outcome.
    pub fn message(&self) -> &'static str {
        if self.passed {
            self.success_message
        } else {
            self.failure_message
        }
    }

    /// Convert into a field-level error for callers that aggregate failures.
    pub fn into_result(self, field: &str) -> Result<(), ValidationError> {
        if self.passed {
            Ok(())
        } else {
            Err(ValidationError::new(field, self.failure_message).with_constraint(self.kind.name()))
        }
    }
}
