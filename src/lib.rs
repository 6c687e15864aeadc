// Fieldguard - field validators for request data
//
// This library bundles stateless validators for common form fields and the
// Ukrainian EDRPOU/TIN check-digit algorithms, plus the logging facade they use.

// Re-export validation functionality
pub use fieldguard_validation::*;

// Re-export member crates
pub use fieldguard_log;
pub use fieldguard_validation;

#[cfg(feature = "tracing")]
pub use fieldguard_log::tracing_compat;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        BirthdayValidator,
        Clock,
        FieldValue,
        FixedClock,
        SystemClock,
        Validate,
        ValidationConfig,
        ValidationError,
        ValidationErrors,
        ValidationOutcome,
        Validator,
        ValidatorKind,
        ValidatorRegistry,
        validate_edrpou,
        validate_tin,
        validators,
    };
}
