// SPDX-License-Identifier: MPL-2.0
//! Form field predicates.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Accepted digit counts for a phone number, country code included.
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 10..=13;

/// Returns the ASCII digits of `text`, dropping everything else.
#[must_use]
pub fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Checks the `local@domain.tld` shape. No other verification is done.
#[must_use]
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks that `phone` holds 10 to 13 digits once punctuation is removed.
#[must_use]
pub fn validate_phone(phone: &str) -> bool {
    PHONE_DIGITS.contains(&digits_only(phone).len())
}
