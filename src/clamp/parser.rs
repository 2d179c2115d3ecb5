use crate::clamp::config::{DeviceWidthLimits, ScaleConfig, PARSE_DEVICE_WIDTH_LIMITS};
use crate::clamp::error::ClampError;
use crate::units::{
    base_font_size_px, format_number, parse_numeric_value, parse_value, to_pixels,
    unit_str_to_pixels, CssUnit, RootFontSize, ScaledValue,
};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// `clamp(A, B, C)` with three top-level arguments, keyword in any case
    static ref CLAMP_PATTERN: Regex =
        Regex::new(r"(?i)^clamp\(\s*([^,]+),\s*([^,]+),\s*([^)]+)\s*\)$").unwrap();

    /// Preferred value: `<n>vw <+|-> <m><unit>`. The unit is any word here and
    /// is checked against the supported units when converted.
    static ref PREFERRED_PATTERN: Regex =
        Regex::new(r"^(-?\d*\.?\d+)vw\s*([-+])\s*(-?\d*\.?\d+)(\w+)$").unwrap();
}

/// Reported for arithmetic failures instead of their details
pub const PARSING_ERROR_MESSAGE: &str = "Parsing error occurred";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ScaleConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl From<Result<ScaleConfig, ClampError>> for ParseResult {
    fn from(result: Result<ScaleConfig, ClampError>) -> Self {
        match result {
            Ok(config) => ParseResult {
                is_valid: true,
                config: Some(config),
                error_message: None,
            },
            Err(e) => {
                let message = if e.is_internal() {
                    log::error!("Clamp parsing error: {}", e);
                    PARSING_ERROR_MESSAGE.to_string()
                } else {
                    e.to_string()
                };
                ParseResult {
                    is_valid: false,
                    config: None,
                    error_message: Some(message),
                }
            }
        }
    }
}

/// Shape-only check, cheap enough to run on every keystroke
pub fn is_clamp_function(text: &str) -> bool {
    CLAMP_PATTERN.is_match(text.trim())
}

/// Recover the config that generates `text`, using the absolute device width
/// envelope (100px to 10000px).
pub fn parse_clamp_function(text: &str, root_font_size: RootFontSize) -> ParseResult {
    parse_clamp_function_with_limits(text, root_font_size, PARSE_DEVICE_WIDTH_LIMITS)
}

/// Like [`parse_clamp_function`] with caller-supplied device width limits
pub fn parse_clamp_function_with_limits(
    text: &str,
    root_font_size: RootFontSize,
    limits: DeviceWidthLimits,
) -> ParseResult {
    ParseResult::from(try_parse_with_limits(text, root_font_size, limits))
}

/// Fallible form of [`parse_clamp_function`]
pub fn try_parse(text: &str, root_font_size: RootFontSize) -> Result<ScaleConfig, ClampError> {
    try_parse_with_limits(text, root_font_size, PARSE_DEVICE_WIDTH_LIMITS)
}

pub fn try_parse_with_limits(
    text: &str,
    root_font_size: RootFontSize,
    limits: DeviceWidthLimits,
) -> Result<ScaleConfig, ClampError> {
    log::debug!(
        "Starting clamp function parsing: '{}' ({})",
        text,
        root_font_size
    );

    let caps = CLAMP_PATTERN.captures(text.trim()).ok_or_else(|| {
        log::warn!("Invalid clamp function format: '{}'", text);
        ClampError::InvalidFormat
    })?;

    let (min_part, preferred_part, max_part) = (&caps[1], &caps[2], &caps[3]);

    let (min, max) = match (parse_bound(min_part), parse_bound(max_part)) {
        (Some(min), Some(max)) => (min, max),
        _ => {
            log::warn!(
                "Unable to parse min/max values: '{}', '{}'",
                min_part.trim(),
                max_part.trim()
            );
            return Err(ClampError::UnableToParseMinMax);
        }
    };

    if min.unit != max.unit {
        log::warn!("Min and max values use different units: {} / {}", min.unit, max.unit);
        return Err(ClampError::DifferentUnits {
            min: min.unit,
            max: max.unit,
        });
    }

    let preferred = parse_preferred(preferred_part.trim()).ok_or_else(|| {
        log::warn!("Unable to parse preferred value: '{}'", preferred_part.trim());
        ClampError::UnableToParsePreferred
    })?;

    if preferred.vw_coefficient == 0.0 || !preferred.vw_coefficient.is_finite() {
        log::warn!("Invalid slope in clamp function: {}vw", preferred.vw_coefficient);
        return Err(ClampError::InvalidSlope);
    }

    let (min_device, max_device) = device_widths(min, max, &preferred, root_font_size)?;

    if min_device >= max_device || !limits.contains(min_device) || !limits.contains(max_device) {
        log::warn!(
            "Calculated device widths are out of valid range: {} .. {}",
            min_device,
            max_device
        );
        return Err(ClampError::DeviceWidthOutOfRange {
            min_device,
            max_device,
            limits,
        });
    }

    let config = ScaleConfig {
        root_font_size,
        min_device_width: min_device,
        max_device_width: max_device,
        min_value: format_number(min.number),
        max_value: format_number(max.number),
        unit: min.unit,
        convert_px_to_rem: false,
    };

    log::info!("Clamp function parsed successfully: {:?}", config);
    Ok(config)
}

/// The `Nvw ± M<unit>` middle argument
#[derive(Debug, Clone, PartialEq)]
struct PreferredValue {
    vw_coefficient: f64,
    /// Signed constant, in `constant_unit`
    constant: f64,
    constant_unit: String,
}

fn parse_preferred(text: &str) -> Option<PreferredValue> {
    let caps = PREFERRED_PATTERN.captures(text)?;

    let vw_coefficient = caps[1].parse::<f64>().ok()?;
    let magnitude = caps[3].parse::<f64>().ok()?;
    let constant = if &caps[2] == "-" { -magnitude } else { magnitude };

    Some(PreferredValue {
        vw_coefficient,
        constant,
        constant_unit: caps[4].to_string(),
    })
}

/// A bound is `<number><unit>`, or a bare number taken as px
fn parse_bound(text: &str) -> Option<ScaledValue> {
    let trimmed = text.trim();
    parse_value(trimmed).or_else(|| {
        parse_numeric_value(trimmed).map(|number| ScaledValue::new(number, CssUnit::Px))
    })
}

/// Solve `bound_px = slope * width + constant_px` for the width at each bound,
/// rounded to whole pixels
fn device_widths(
    min: ScaledValue,
    max: ScaledValue,
    preferred: &PreferredValue,
    root_font_size: RootFontSize,
) -> Result<(f64, f64), ClampError> {
    let base_font_size = base_font_size_px(root_font_size);

    let min_px = to_pixels(min.number, min.unit, base_font_size)?;
    let max_px = to_pixels(max.number, max.unit, base_font_size)?;
    let constant_px =
        unit_str_to_pixels(preferred.constant.abs(), &preferred.constant_unit, base_font_size)?
            * preferred.constant.signum();

    let slope = preferred.vw_coefficient / 100.0;
    let min_device = ((min_px - constant_px) / slope).round();
    let max_device = ((max_px - constant_px) / slope).round();

    if !min_device.is_finite() || !max_device.is_finite() {
        return Err(ClampError::Calculation);
    }

    Ok((min_device, max_device))
}
