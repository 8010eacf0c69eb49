//! Validation of user entered row fields

use regex::Regex;
use std::sync::LazyLock;

static POSITIVE_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][0-9]*$").expect("Invalid positive integer pattern"));

/// Pace used when the field is left blank
pub const DEFAULT_PACE: &str = "1";

pub trait Validator<T: ?Sized> {
    fn is_valid(&self, input: &T) -> bool;
}

/// Accepts strictly positive integers without leading zeros that fit a `u32`
#[derive(Debug, Clone, Copy, Default)]
pub struct PositiveIntegerValidator;

impl Validator<str> for PositiveIntegerValidator {
    fn is_valid(&self, input: &str) -> bool {
        POSITIVE_INTEGER.is_match(input) && input.parse::<u32>().is_ok()
    }
}

/// Accepts any signed 32 bit integer, rejects blank input
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerStringValidator;

impl Validator<str> for IntegerStringValidator {
    fn is_valid(&self, input: &str) -> bool {
        input.parse::<i32>().is_ok()
    }
}

/// Parse a pace field. Blank means [`DEFAULT_PACE`].
pub fn parse_pace(raw: &str) -> Option<u32> {
    let pace = if raw.trim().is_empty() {
        DEFAULT_PACE
    } else {
        raw.trim()
    };
    if PositiveIntegerValidator.is_valid(pace) {
        pace.parse().ok()
    } else {
        None
    }
}
