// Built-in validators

use crate::checksum::{validate_edrpou, validate_tin};
use crate::{
    Clock, FieldValue, Pattern, SystemClock, ValidationConfig, ValidationOutcome, Validator,
    ValidatorKind, DEFAULT_MAX_INPUT_LEN,
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use url::Url;

/// Full-match of one library pattern, with an input size cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternValidator {
    kind: ValidatorKind,
    pattern: Pattern,
    max_input_len: usize,
}

impl PatternValidator {
    pub fn new(kind: ValidatorKind, pattern: Pattern) -> Self {
        Self {
            kind,
            pattern,
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }

    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn phone_number() -> Self {
        Self::new(ValidatorKind::PhoneNumber, Pattern::PhoneNumber)
    }

    pub fn phone_number_code() -> Self {
        Self::new(ValidatorKind::PhoneNumberCode, Pattern::PhoneNumberCode)
    }

    pub fn person_name() -> Self {
        Self::new(ValidatorKind::Name, Pattern::Name)
    }

    pub fn postal_code() -> Self {
        Self::new(ValidatorKind::PostalCode, Pattern::PostalCode)
    }

    pub fn iso_country_code() -> Self {
        Self::new(ValidatorKind::IsoCountryCode, Pattern::IsoCountryCode)
    }

    pub fn password() -> Self {
        Self::new(ValidatorKind::Password, Pattern::Password)
    }

    pub fn company_name() -> Self {
        Self::new(ValidatorKind::CompanyName, Pattern::CompanyName)
    }

    pub fn service_name() -> Self {
        Self::new(ValidatorKind::ServiceName, Pattern::ServiceName)
    }

    /// Every pattern-backed validator, with the given input cap.
    pub fn all(max_input_len: usize) -> [PatternValidator; 8] {
        [
            Self::phone_number(),
            Self::phone_number_code(),
            Self::person_name(),
            Self::postal_code(),
            Self::iso_country_code(),
            Self::password(),
            Self::company_name(),
            Self::service_name(),
        ]
        .map(|v| v.with_max_input_len(max_input_len))
    }
}

impl Validator for PatternValidator {
    fn kind(&self) -> ValidatorKind {
        self.kind
    }

    fn check(&self, value: FieldValue<'_>) -> bool {
        match value.as_text() {
            Some(text) if text.len() <= self.max_input_len => self.pattern.is_full_match(text),
            _ => false,
        }
    }
}

/// Ukrainian company registration number (8 digits, weighted check digit).
#[derive(Debug, Clone, Copy, Default)]
pub struct EdrpouValidator;

impl Validator for EdrpouValidator {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::UkraineCompanyEdrpou
    }

    fn check(&self, value: FieldValue<'_>) -> bool {
        value.as_text().is_some_and(validate_edrpou)
    }
}

/// Ukrainian individual taxpayer number (10 digits, weighted check digit).
#[derive(Debug, Clone, Copy, Default)]
pub struct TinValidator;

impl Validator for TinValidator {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::UkraineTin
    }

    fn check(&self, value: FieldValue<'_>) -> bool {
        value.as_text().is_some_and(validate_tin)
    }
}

fn parse_date(input: &str, format: &str, max_input_len: usize) -> Option<NaiveDate> {
    if input.len() > max_input_len {
        return None;
    }
    // chrono tolerates leading spaces, signed years and unpadded fields;
    // only the exact rendering of the parsed date is accepted
    NaiveDate::parse_from_str(input, format)
        .ok()
        .filter(|date| date.format(format).to_string() == input)
}

/// A date string that parses under the configured format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateValidator {
    format: String,
    max_input_len: usize,
}

impl DateValidator {
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            format: config.date_format.clone(),
            max_input_len: config.max_input_len,
        }
    }
}

impl Default for DateValidator {
    fn default() -> Self {
        Self::new(&ValidationConfig::default())
    }
}

impl Validator for DateValidator {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Date
    }

    fn check(&self, value: FieldValue<'_>) -> bool {
        value
            .as_text()
            .and_then(|text| parse_date(text, &self.format, self.max_input_len))
            .is_some()
    }
}

/// A date, taken as midnight UTC, that lies strictly before the clock's "now".
#[derive(Debug, Clone)]
pub struct BirthdayValidator<C = SystemClock> {
    clock: C,
    format: String,
    max_input_len: usize,
}

impl BirthdayValidator<SystemClock> {
    pub fn new(config: &ValidationConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for BirthdayValidator<SystemClock> {
    fn default() -> Self {
        Self::new(&ValidationConfig::default())
    }
}

impl<C: Clock> BirthdayValidator<C> {
    pub fn with_clock(config: &ValidationConfig, clock: C) -> Self {
        Self {
            clock,
            format: config.date_format.clone(),
            max_input_len: config.max_input_len,
        }
    }

    /// Check against an explicit instant instead of the clock.
    pub fn check_at(&self, input: &str, now: DateTime<Utc>) -> bool {
        let Some(date) = parse_date(input, &self.format, self.max_input_len) else {
            return false;
        };
        let Some(midnight) = date.and_hms_opt(0, 0, 0) else {
            return false;
        };
        Utc.from_utc_datetime(&midnight) < now
    }
}

impl<C: Clock> Validator for BirthdayValidator<C> {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Birthday
    }

    fn check(&self, value: FieldValue<'_>) -> bool {
        value
            .as_text()
            .is_some_and(|text| self.check_at(text, self.clock.now()))
    }
}

fn is_url(input: &str, max_input_len: usize) -> bool {
    // Url::parse strips surrounding spaces; a raw field with any whitespace is not a URL
    input.len() <= max_input_len
        && !input.chars().any(char::is_whitespace)
        && Url::parse(input).is_ok()
}

/// A single absolute URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlValidator {
    max_input_len: usize,
}

impl UrlValidator {
    pub fn new(max_input_len: usize) -> Self {
        Self { max_input_len }
    }
}

impl Default for UrlValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INPUT_LEN)
    }
}

impl Validator for UrlValidator {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Url
    }

    fn check(&self, value: FieldValue<'_>) -> bool {
        value
            .as_text()
            .is_some_and(|text| is_url(text, self.max_input_len))
    }
}

/// A non-empty list whose every element is an absolute URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlListValidator {
    max_input_len: usize,
}

impl UrlListValidator {
    pub fn new(max_input_len: usize) -> Self {
        Self { max_input_len }
    }
}

impl Default for UrlListValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INPUT_LEN)
    }
}

impl Validator for UrlListValidator {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::ArrayUrls
    }

    fn check(&self, value: FieldValue<'_>) -> bool {
        match value.as_list() {
            Some(items) if !items.is_empty() => {
                items.iter().all(|item| is_url(item, self.max_input_len))
            }
            _ => false,
        }
    }
}

// Shorthand entry points using the default configuration

pub fn phone_number(input: &str) -> ValidationOutcome {
    PatternValidator::phone_number().validate(input.into())
}

pub fn phone_number_code(input: &str) -> ValidationOutcome {
    PatternValidator::phone_number_code().validate(input.into())
}

pub fn name(input: &str) -> ValidationOutcome {
    PatternValidator::person_name().validate(input.into())
}

pub fn postal_code(input: &str) -> ValidationOutcome {
    PatternValidator::postal_code().validate(input.into())
}

pub fn iso_country_code(input: &str) -> ValidationOutcome {
    PatternValidator::iso_country_code().validate(input.into())
}

pub fn password(input: &str) -> ValidationOutcome {
    PatternValidator::password().validate(input.into())
}

pub fn company_name(input: &str) -> ValidationOutcome {
    PatternValidator::company_name().validate(input.into())
}

pub fn service_name(input: &str) -> ValidationOutcome {
    PatternValidator::service_name().validate(input.into())
}

pub fn ukraine_company_edrpou(input: &str) -> ValidationOutcome {
    EdrpouValidator.validate(input.into())
}

pub fn ukraine_tin(input: &str) -> ValidationOutcome {
    TinValidator.validate(input.into())
}

/// Birthday check against the system clock.
pub fn birthday(input: &str) -> ValidationOutcome {
    birthday_at(input, Utc::now())
}

/// Birthday check against an explicit "now".
pub fn birthday_at(input: &str, now: DateTime<Utc>) -> ValidationOutcome {
    let validator = BirthdayValidator::default();
    ValidationOutcome::new(ValidatorKind::Birthday, validator.check_at(input, now))
}

pub fn date(input: &str) -> ValidationOutcome {
    DateValidator::default().validate(input.into())
}

pub fn url(input: &str) -> ValidationOutcome {
    UrlValidator::default().validate(input.into())
}

pub fn array_urls(items: &[String]) -> ValidationOutcome {
    UrlListValidator::default().validate(items.into())
}
