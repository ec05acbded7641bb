//! Format checks for contact details.
//!
//! Both checks are full-string matches against patterns compiled once and
//! shared read-only across threads.

use regex::Regex;

lazy_static::lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^\w+([\.-]?\w+)*@\w+([\.-]?\w+)*(\.\w{2,3})+$").expect("valid regex");
    static ref PHONE_NUMBER_REGEX: Regex = Regex::new(r"^\d{1,10}$").expect("valid regex");
}

/// Returns `true` when `value` is a well-formed email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Returns `true` when `value` is made of one to ten digits.
pub fn is_valid_phone_number(value: &str) -> bool {
    PHONE_NUMBER_REGEX.is_match(value)
}
