use crate::units::error::UnitError;
use crate::units::types::{CssUnit, RootFontSize};

/// Pixel size of 1rem for a root font size mode
pub fn base_font_size_px(mode: RootFontSize) -> f64 {
    match mode {
        RootFontSize::Standard => 16.0,
        RootFontSize::Simplified => 10.0,
    }
}

/// Convert a value in `unit` to pixels.
///
/// `rem` and `em` are both resolved against the root font size; nested `em`
/// contexts are not modelled.
pub fn to_pixels(value: f64, unit: CssUnit, base_font_size_px: f64) -> Result<f64, UnitError> {
    if !value.is_finite() || !base_font_size_px.is_finite() {
        return Err(UnitError::InvalidNumber);
    }

    match unit {
        CssUnit::Rem | CssUnit::Em => Ok(value * base_font_size_px),
        CssUnit::Px => Ok(value),
    }
}

/// Same as [`to_pixels`] for a unit that is still raw text (e.g. the unit of
/// the additive constant inside a preferred value).
pub fn unit_str_to_pixels(
    value: f64,
    unit: &str,
    base_font_size_px: f64,
) -> Result<f64, UnitError> {
    let unit = unit.parse::<CssUnit>()?;
    to_pixels(value, unit, base_font_size_px)
}

/// Inverse of [`to_pixels`] for font-relative units
pub fn from_pixels(px_value: f64, unit: CssUnit, base_font_size_px: f64) -> f64 {
    if unit.is_font_relative() {
        px_value / base_font_size_px
    } else {
        px_value
    }
}

pub fn px_to_rem(px_value: f64, mode: RootFontSize) -> f64 {
    px_value / base_font_size_px(mode)
}
