//! Fuzz target for the validator registry.
//!
//! Every validator must return an outcome for any input without panicking,
//! and must agree with itself when run twice.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use fieldguard_validation::{ValidatorRegistry, validate_edrpou, validate_tin};
use std::sync::LazyLock;

static REGISTRY: LazyLock<ValidatorRegistry> = LazyLock::new(ValidatorRegistry::new);

/// Arbitrary field input for fuzzing.
#[derive(Debug, Arbitrary)]
struct FuzzField {
    /// Scalar field value
    text: String,
    /// List field value
    list: Vec<String>,
}

fuzz_target!(|field: FuzzField| {
    for name in REGISTRY.names() {
        let (first, second) = if name == "arrayUrls" {
            (
                REGISTRY.validate(name, (&field.list).into()),
                REGISTRY.validate(name, (&field.list).into()),
            )
        } else {
            (
                REGISTRY.validate(name, field.text.as_str().into()),
                REGISTRY.validate(name, field.text.as_str().into()),
            )
        };

        let (Ok(first), Ok(second)) = (first, second) else {
            panic!("{name} rejected a well-shaped input");
        };
        if name != "birthday" {
            assert_eq!(first, second, "{name} is not deterministic");
        }
    }

    if validate_edrpou(&field.text) {
        assert!(field.text.len() == 8 && field.text.bytes().all(|b| b.is_ascii_digit()));
    }
    if validate_tin(&field.text) {
        assert!(field.text.len() == 10 && field.text.bytes().all(|b| b.is_ascii_digit()));
    }
});
