use crate::units::types::{CssUnit, ScaledValue};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A signed decimal immediately followed by a unit: "2.5rem", "-.5em", "16px"
    /// `%` is recognised lexically but has no pixel mapping, so it is rejected
    /// after matching.
    static ref CSS_VALUE_PATTERN: Regex = Regex::new(r"^(-?\d*\.?\d+)(rem|px|em|%)$").unwrap();

    /// A bare signed decimal: "1", "-0.5", ".25"
    static ref NUMERIC_VALUE_PATTERN: Regex = Regex::new(r"^-?\d*\.?\d+$").unwrap();
}

/// Extract a `(number, unit)` pair from text such as `"2.5rem"`
pub fn parse_value(text: &str) -> Option<ScaledValue> {
    let caps = CSS_VALUE_PATTERN.captures(text.trim())?;

    let unit = caps[2].parse::<CssUnit>().ok()?;
    let number = caps[1].parse::<f64>().ok()?;

    Some(ScaledValue::new(number, unit))
}

/// Parse a bare signed decimal with no unit
pub fn parse_numeric_value(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if !NUMERIC_VALUE_PATTERN.is_match(trimmed) {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Check that text is a plain number (the pattern form fields are validated with)
pub fn is_numeric_value(text: &str) -> bool {
    NUMERIC_VALUE_PATTERN.is_match(text.trim())
}

/// Inclusive range check
pub fn validate_numeric_range(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}
