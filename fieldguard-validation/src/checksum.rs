// Check-digit algorithms for Ukrainian registration numbers

use std::ops::RangeInclusive;

/// Number of digits in an EDRPOU code.
pub const EDRPOU_LENGTH: usize = 8;

/// Number of digits in an individual TIN.
pub const TIN_LENGTH: usize = 10;

/// Codes in this range use the shifted weight tables.
pub const EDRPOU_MID_RANGE: RangeInclusive<u32> = 30_000_000..=60_000_000;

pub const EDRPOU_WEIGHTS_LOW: [u32; 7] = [1, 2, 3, 4, 5, 6, 7];
pub const EDRPOU_WEIGHTS_LOW_RETRY: [u32; 7] = [3, 4, 5, 6, 7, 8, 9];
pub const EDRPOU_WEIGHTS_MID: [u32; 7] = [7, 1, 2, 3, 4, 5, 6];
pub const EDRPOU_WEIGHTS_MID_RETRY: [u32; 7] = [9, 3, 4, 5, 6, 7, 8];

pub const TIN_WEIGHTS: [i64; 9] = [-1, 5, 7, 9, 4, 6, 10, 5, 7];

const MODULUS: u32 = 11;

/// Parse exactly `N` ASCII digits.
///
/// Signs, whitespace, separators and non-ASCII digits are rejected. The
/// length check happens before anything else, so arbitrarily long input is
/// refused without any arithmetic.
pub fn parse_digits<const N: usize>(input: &str) -> Option<[u32; N]> {
    let bytes = input.as_bytes();
    if bytes.len() != N {
        return None;
    }

    let mut digits = [0u32; N];
    for (slot, byte) in digits.iter_mut().zip(bytes) {
        if !byte.is_ascii_digit() {
            return None;
        }
        *slot = u32::from(byte - b'0');
    }
    Some(digits)
}

fn weighted_sum(digits: &[u32], weights: &[u32; 7]) -> u32 {
    digits.iter().zip(weights).map(|(d, w)| d * w).sum()
}

/// Compute the EDRPOU check value for the first seven digits.
///
/// The result is in `0..=10`. A value of 10 means both weight tables produced
/// 10, which no digit can match.
pub fn edrpou_checksum(digits: &[u32; EDRPOU_LENGTH]) -> u32 {
    let value = digits.iter().fold(0u32, |acc, d| acc * 10 + d);
    let (primary, retry) = if EDRPOU_MID_RANGE.contains(&value) {
        (&EDRPOU_WEIGHTS_MID, &EDRPOU_WEIGHTS_MID_RETRY)
    } else {
        (&EDRPOU_WEIGHTS_LOW, &EDRPOU_WEIGHTS_LOW_RETRY)
    };

    let body = &digits[..EDRPOU_LENGTH - 1];
    let checksum = weighted_sum(body, primary) % MODULUS;
    if checksum == 10 {
        weighted_sum(body, retry) % MODULUS
    } else {
        checksum
    }
}

/// Compute the TIN check value for the first nine digits, in `0..=10`.
pub fn tin_checksum(digits: &[u32; TIN_LENGTH]) -> u32 {
    let sum: i64 = digits
        .iter()
        .zip(TIN_WEIGHTS.iter())
        .map(|(&d, &w)| i64::from(d) * w)
        .sum();
    // The leading weight is negative, so the sum can dip below zero.
    sum.rem_euclid(i64::from(MODULUS)) as u32
}

/// Validate a Ukrainian company registration number (EDRPOU).
///
/// ```
/// use fieldguard_validation::validate_edrpou;
///
/// assert!(validate_edrpou("14360570"));
/// assert!(!validate_edrpou("14360571"));
/// assert!(!validate_edrpou("1436057"));
/// ```
pub fn validate_edrpou(input: &str) -> bool {
    match parse_digits::<EDRPOU_LENGTH>(input) {
        Some(digits) => edrpou_checksum(&digits) == digits[EDRPOU_LENGTH - 1],
        None => false,
    }
}

/// Validate a Ukrainian individual taxpayer number (TIN).
///
/// ```
/// use fieldguard_validation::validate_tin;
///
/// assert!(validate_tin("1234567899"));
/// assert!(!validate_tin("1234567890"));
/// ```
pub fn validate_tin(input: &str) -> bool {
    match parse_digits::<TIN_LENGTH>(input) {
        Some(digits) => tin_checksum(&digits) == digits[TIN_LENGTH - 1],
        None => false,
    }
}
