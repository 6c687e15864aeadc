// Fixed pattern library

use once_cell::sync::Lazy;
use regex::Regex;

const PHONE_NUMBER: &str = r"^(\s*)?(\+)?([-()+]?\d[- _():=+]?){5,15}(\s*)?$";
const PHONE_NUMBER_CODE: &str = r"^\d{6}$";
const NAME: &str = r"^(([a-zA-Z'` -]{1,100})|([а-яА-ЯЁёІіЇїҐґЄє'` -]{1,100}))$";
const POSTAL_CODE: &str = r"(^\d{5}(-\d{4})?$)|(^[ABCEGHJKLMNPRSTVXY]\d[A-Z][- ]*\d[A-Z]\d$)";
const ISO_COUNTRY_CODE: &str = r"^[A-Z]{2}$";
const PASSWORD: &str = r"^.{8,}$";
const COMPANY_NAME: &str = r"^.{6,255}$";
const SERVICE_NAME: &str = r"^[a-z-]{1,100}$";

// Patterns are compile-time constants; a failure here is caught by `test_all_patterns_compile`.
macro_rules! lazy_regex {
    ($name:ident, $source:expr) => {
        static $name: Lazy<Regex> =
            Lazy::new(|| Regex::new($source).expect("built-in pattern must compile"));
    };
}

lazy_regex!(PHONE_NUMBER_REGEX, PHONE_NUMBER);
lazy_regex!(PHONE_NUMBER_CODE_REGEX, PHONE_NUMBER_CODE);
lazy_regex!(NAME_REGEX, NAME);
lazy_regex!(POSTAL_CODE_REGEX, POSTAL_CODE);
lazy_regex!(ISO_COUNTRY_CODE_REGEX, ISO_COUNTRY_CODE);
lazy_regex!(PASSWORD_REGEX, PASSWORD);
lazy_regex!(COMPANY_NAME_REGEX, COMPANY_NAME);
lazy_regex!(SERVICE_NAME_REGEX, SERVICE_NAME);

/// A named, immutable regular expression from the built-in library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// International phone number, 5 to 15 digit groups with an optional `+`
    PhoneNumber,
    /// Six digit verification code
    PhoneNumberCode,
    /// Latin or Cyrillic personal name, 1 to 100 characters
    Name,
    /// US ZIP (5 or 5+4) or Canadian postal code
    PostalCode,
    /// Two uppercase letters
    IsoCountryCode,
    /// At least 8 characters
    Password,
    /// 6 to 255 characters
    CompanyName,
    /// Lowercase letters and hyphens, 1 to 100 characters
    ServiceName,
}

impl Pattern {
    /// Every pattern in the library.
    pub const ALL: [Pattern; 8] = [
        Pattern::PhoneNumber,
        Pattern::PhoneNumberCode,
        Pattern::Name,
        Pattern::PostalCode,
        Pattern::IsoCountryCode,
        Pattern::Password,
        Pattern::CompanyName,
        Pattern::ServiceName,
    ];

    /// Raw pattern text.
    pub fn source(self) -> &'static str {
        match self {
            Pattern::PhoneNumber => PHONE_NUMBER,
            Pattern::PhoneNumberCode => PHONE_NUMBER_CODE,
            Pattern::Name => NAME,
            Pattern::PostalCode => POSTAL_CODE,
            Pattern::IsoCountryCode => ISO_COUNTRY_CODE,
            Pattern::Password => PASSWORD,
            Pattern::CompanyName => COMPANY_NAME,
            Pattern::ServiceName => SERVICE_NAME,
        }
    }

    /// Compiled regex, built on first use and shared for the process lifetime.
    pub fn regex(self) -> &'static Regex {
        match self {
            Pattern::PhoneNumber => &PHONE_NUMBER_REGEX,
            Pattern::PhoneNumberCode => &PHONE_NUMBER_CODE_REGEX,
            Pattern::Name => &NAME_REGEX,
            Pattern::PostalCode => &POSTAL_CODE_REGEX,
            Pattern::IsoCountryCode => &ISO_COUNTRY_CODE_REGEX,
            Pattern::Password => &PASSWORD_REGEX,
            Pattern::CompanyName => &COMPANY_NAME_REGEX,
            Pattern::ServiceName => &SERVICE_NAME_REGEX,
        }
    }

    /// Returns true only when a match covers the whole input.
    pub fn is_full_match(self, input: &str) -> bool {
        self.regex()
            .find(input)
            .is_some_and(|m| m.start() == 0 && m.end() == input.len())
    }
}
