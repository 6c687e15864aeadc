// Registry of named validators

use crate::{
    BirthdayValidator, Clock, DateValidator, EdrpouValidator, FieldValue, PatternValidator,
    RegistryError, SystemClock, TinValidator, UrlListValidator, UrlValidator, ValidationConfig,
    ValidationOutcome, Validator,
};
use fieldguard_log::debug;
use std::collections::HashMap;
use std::sync::Arc;

/// Every built-in validator, addressable by its external name.
///
/// The registry holds no mutable state after construction and can be shared
/// across threads behind an `Arc`.
///
/// ```
/// use fieldguard_validation::{FieldValue, ValidatorRegistry};
///
/// let registry = ValidatorRegistry::new();
/// let outcome = registry.validate("ukraineCompanyEdrpou", "14360570".into()).unwrap();
/// assert!(outcome.is_success());
///
/// let urls = vec!["https://example.com".to_string()];
/// assert!(registry.validate("arrayUrls", FieldValue::from(&urls)).unwrap().is_success());
/// assert!(registry.validate("email", "a@b.c".into()).is_err());
/// ```
#[derive(Clone)]
pub struct ValidatorRegistry {
    validators: HashMap<&'static str, Arc<dyn Validator>>,
    config: ValidationConfig,
}

impl ValidatorRegistry {
    /// Registry with the default configuration and the system clock
    pub fn new() -> Self {
        Self::with_config(ValidationConfig::default())
    }

    /// Registry with a custom configuration and the system clock
    pub fn with_config(config: ValidationConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Registry with a custom configuration and clock for `birthday`
    pub fn with_clock<C>(config: ValidationConfig, clock: C) -> Self
    where
        C: Clock + 'static,
    {
        let mut registry = Self {
            validators: HashMap::new(),
            config,
        };

        let max_len = registry.config.max_input_len;
        for validator in PatternValidator::all(max_len) {
            registry.insert(Arc::new(validator));
        }
        registry.insert(Arc::new(EdrpouValidator));
        registry.insert(Arc::new(TinValidator));
        registry.insert(Arc::new(DateValidator::new(&registry.config)));
        registry.insert(Arc::new(BirthdayValidator::with_clock(&registry.config, clock)));
        registry.insert(Arc::new(UrlValidator::new(max_len)));
        registry.insert(Arc::new(UrlListValidator::new(max_len)));

        registry
    }

    fn insert(&mut self, validator: Arc<dyn Validator>) -> Option<Arc<dyn Validator>> {
        self.validators.insert(validator.name(), validator)
    }

    /// Add a validator under its kind's name, replacing any existing one
    pub fn register(&mut self, validator: Box<dyn Validator>) {
        let name = validator.name();
        if self.insert(Arc::from(validator)).is_some() {
            debug!(target: "fieldguard::registry", "Replaced validator {}", name);
        } else {
            debug!(target: "fieldguard::registry", "Registered validator {}", name);
        }
    }

    /// The configuration the built-in validators were created with
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn get(&self, name: &str) -> Option<&dyn Validator> {
        self.validators.get(name).map(|v| v.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.validators.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.validators.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Run the named validator.
    ///
    /// An unknown name or a value of the wrong shape is reported as an error,
    /// since both mean the caller wired the field up incorrectly.
    pub fn validate(
        &self,
        name: &str,
        value: FieldValue<'_>,
    ) -> Result<ValidationOutcome, RegistryError> {
        let Some(validator) = self.validators.get(name) else {
            debug!(target: "fieldguard::registry", "Unknown validator requested: {}", name);
            return Err(RegistryError::UnknownValidator(name.to_string()));
        };

        let expects_list = validator.kind().takes_list();
        if expects_list != value.is_list() {
            return Err(RegistryError::InputShape {
                validator: validator.name(),
                expected: if expects_list {
                    "a list of strings"
                } else {
                    "a single string"
                },
            });
        }

        Ok(validator.validate(value))
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("validators", &self.names())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedClock, ValidatorKind};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_registers_every_kind() {
        let registry = ValidatorRegistry::new();
        assert_eq!(registry.len(), ValidatorKind::ALL.len());
        for kind in ValidatorKind::ALL {
            let validator = registry.get(kind.name()).unwrap();
            assert_eq!(validator.kind(), kind);
        }
    }

    #[test]
    fn test_names_sorted() {
        let names = ValidatorRegistry::new().names();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.contains(&"ukraineTin"));
    }

    #[test]
    fn test_unknown_validator() {
        let registry = ValidatorRegistry::new();
        assert_eq!(
            registry.validate("email", "a@b.c".into()),
            Err(RegistryError::UnknownValidator("email".to_string()))
        );
        assert!(!registry.contains("email"));
    }

    #[test]
    fn test_shape_mismatch() {
        let registry = ValidatorRegistry::new();
        let list = vec!["+380501234567".to_string()];

        assert!(matches!(
            registry.validate("phoneNumber", (&list).into()),
            Err(RegistryError::InputShape { validator: "phoneNumber", .. })
        ));
        assert!(matches!(
            registry.validate("arrayUrls", "https://a.com".into()),
            Err(RegistryError::InputShape { validator: "arrayUrls", .. })
        ));
    }

    #[test]
    fn test_clock_is_injected() {
        let now = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let registry = ValidatorRegistry::with_clock(ValidationConfig::default(), FixedClock(now));

        assert!(registry.validate("birthday", "1999-12-31".into()).unwrap().is_success());
        assert!(registry.validate("birthday", "2000-01-02".into()).unwrap().is_failure());
    }

    #[test]
    fn test_config_cap_applies() {
        let registry = ValidatorRegistry::with_config(ValidationConfig::default().with_max_input_len(8));
        assert!(registry.validate("password", "12345678".into()).unwrap().is_success());
        assert!(registry.validate("password", "123456789".into()).unwrap().is_failure());
    }

    #[test]
    fn test_register_replaces() {
        struct Strict;

        impl Validator for Strict {
            fn kind(&self) -> ValidatorKind {
                ValidatorKind::Password
            }

            fn check(&self, value: FieldValue<'_>) -> bool {
                value.as_text().is_some_and(|t| t.len() >= 12)
            }
        }

        let mut registry = ValidatorRegistry::new();
        registry.register(Box::new(Strict));

        assert_eq!(registry.len(), ValidatorKind::ALL.len());
        assert!(registry.validate("password", "12345678".into()).unwrap().is_failure());
        assert!(registry.validate("password", "123456789012".into()).unwrap().is_success());
    }

    #[test]
    fn test_shared_across_threads() {
        let registry = Arc::new(ValidatorRegistry::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    registry
                        .validate("ukraineTin", "1234567899".into())
                        .map(|o| o.is_success())
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(true));
        }
    }
}
