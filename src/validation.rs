//! Weight input validation
//!
//! The heap engine assumes validated input; everything entered by the user
//! passes through here first.

use crate::config::{MAX_WEIGHT, MIN_WEIGHT};
use crate::errors::WeightError;

/// Parse and range-check a weight typed by the user
pub fn parse_weight(input: &str) -> Result<u32, WeightError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(WeightError::Empty);
    }
    let value: i64 = trimmed.parse().map_err(|_| WeightError::Empty)?;
    check_range(value)
}

/// Range-check an already numeric weight
pub fn validate_weight(weight: u32) -> Result<u32, WeightError> {
    check_range(i64::from(weight))
}

fn check_range(value: i64) -> Result<u32, WeightError> {
    if value < i64::from(MIN_WEIGHT) {
        Err(WeightError::NotPositive)
    } else if value > i64::from(MAX_WEIGHT) {
        Err(WeightError::TooHigh)
    } else {
        // In range, so it fits
        Ok(value as u32)
    }
}
