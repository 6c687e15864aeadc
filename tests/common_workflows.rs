//! Integration tests for common Fieldguard workflows.
//!
//! These tests exercise the crate the way a request-handling layer would:
//! pick validators by name, run them over raw field values, and fold the
//! failures into one error body.

use chrono::{TimeZone, Utc};
use fieldguard::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

// =============================================================================
// Registration form
// =============================================================================

struct CompanyRegistration {
    company_name: String,
    edrpou: String,
    director_tin: String,
    phone: String,
    country: String,
    website_urls: Vec<String>,
}

impl Validate for CompanyRegistration {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        errors.collect(validators::company_name(&self.company_name).into_result("companyName"));
        errors.collect(validators::ukraine_company_edrpou(&self.edrpou).into_result("edrpou"));
        errors.collect(validators::ukraine_tin(&self.director_tin).into_result("directorTin"));
        errors.collect(validators::phone_number(&self.phone).into_result("phone"));
        errors.collect(validators::iso_country_code(&self.country).into_result("country"));
        errors.collect(validators::array_urls(&self.website_urls).into_result("websiteUrls"));
        errors.into_result()
    }
}

fn valid_registration() -> CompanyRegistration {
    CompanyRegistration {
        company_name: "Freedom Space LLC".to_string(),
        edrpou: "32855961".to_string(),
        director_tin: "1234567899".to_string(),
        phone: "+380501234567".to_string(),
        country: "UA".to_string(),
        website_urls: vec!["https://freedom.space".to_string()],
    }
}

#[test]
fn test_valid_registration_passes() {
    assert!(valid_registration().validate().is_ok());
}

#[test]
fn test_invalid_registration_reports_each_field() {
    let form = CompanyRegistration {
        edrpou: "32855962".to_string(),
        director_tin: "123456789".to_string(),
        website_urls: Vec::new(),
        ..valid_registration()
    };

    let errors = form.validate().unwrap_err();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.get_field_errors("edrpou")[0].constraint, "ukraineCompanyEdrpou");
    assert_eq!(errors.get_field_errors("directorTin")[0].message, "is not a valid Ukraine TIN");
    assert_eq!(errors.get_field_errors("websiteUrls").len(), 1);

    let body = errors.to_json();
    assert_eq!(body["errors"].as_array().map(|a| a.len()), Some(3));
    // The rejected value is never echoed back
    assert!(!body.to_string().contains("32855962"));
}

// =============================================================================
// Name-driven validation through the registry
// =============================================================================

#[test]
fn test_registry_driven_form() {
    let registry = ValidatorRegistry::new();
    let fields: HashMap<&str, (&str, &str)> = HashMap::from([
        ("phone", ("phoneNumber", "+38 050 123 45 67")),
        ("code", ("phoneNumberCode", "12345")),
        ("zip", ("postalCode", "90210-1234")),
        ("service", ("serviceName", "abc123")),
    ]);

    let mut errors = ValidationErrors::default();
    for (field, (validator, value)) in &fields {
        let outcome = registry.validate(validator, (*value).into()).unwrap();
        errors.collect(outcome.into_result(field));
    }

    let mut failed: Vec<_> = errors.errors.iter().map(|e| e.field.as_str()).collect();
    failed.sort();
    assert_eq!(failed, vec!["code", "service"]);
}

#[test]
fn test_registry_with_injected_clock() {
    let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
    let registry = ValidatorRegistry::with_clock(ValidationConfig::default(), FixedClock(now));

    assert!(registry.validate("birthday", "2029-12-31".into()).unwrap().is_success());
    assert!(registry.validate("birthday", "2030-01-01".into()).unwrap().is_failure());
    assert!(registry.validate("birthday", "31.12.2029".into()).unwrap().is_failure());
}

#[test]
fn test_registry_shared_between_threads() {
    let registry = Arc::new(ValidatorRegistry::new());

    let handles: Vec<_> = ["14360570", "14360571", "32855961", "0000605"]
        .into_iter()
        .map(|code| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                registry
                    .validate("ukraineCompanyEdrpou", code.into())
                    .unwrap()
                    .passed()
            })
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![true, false, true, false]);
}

// =============================================================================
// Outcome rendering
// =============================================================================

#[test]
fn test_outcome_serializes_for_responses() {
    let outcome = validators::postal_code("K1A 0B1");
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["kind"], "postalCode");
    assert_eq!(json["passed"], true);
    assert_eq!(json["successMessage"], "is a valid postal code");
    assert_eq!(json["failureMessage"], "is not a valid postal code");
}

#[test]
fn test_checksum_functions_reexported() {
    assert!(fieldguard::validate_edrpou("14360570"));
    assert!(fieldguard::validate_tin("1234567899"));
    assert!(fieldguard::checksum::validate_edrpou("00000035"));
}
