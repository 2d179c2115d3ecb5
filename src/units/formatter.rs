use crate::units::types::CssUnit;

/// Decimal places kept in every number we emit
pub const DECIMAL_PRECISION: u32 = 3;

/// Format a number with the default precision of 3 decimal places
pub fn format_number(value: f64) -> String {
    format_number_with_precision(value, DECIMAL_PRECISION)
}

/// Round `value` to `precision` decimal places and render the shortest
/// decimal string for it.
///
/// Rounding happens on the float before it is turned into text, so noise like
/// `0.1 + 0.2` never reaches the output. Integers render without a decimal
/// point and non-finite input renders as `"0"`.
pub fn format_number_with_precision(value: f64, precision: u32) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let multiplier = 10f64.powi(precision as i32);
    let rounded = (value * multiplier).round() / multiplier;

    // Too large to scale: already coarser than the requested precision
    let rounded = if rounded.is_finite() { rounded } else { value };

    // Collapse -0 so tiny negative values don't render as "-0"
    if rounded == 0.0 {
        return "0".to_string();
    }

    // f64's Display is the shortest round-trip representation and never
    // carries trailing zeros or a dangling decimal point
    rounded.to_string()
}

/// Format a `<number><unit>` pair, e.g. `2.5rem`
pub fn format_css_value(value: f64, unit: CssUnit) -> String {
    format!("{}{}", format_number(value), unit)
}
