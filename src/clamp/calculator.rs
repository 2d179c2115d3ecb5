use crate::clamp::config::ScaleConfig;
use crate::clamp::error::ClampError;
use crate::clamp::generator::{render_clamp, LinearFunction};
use crate::units::{
    base_font_size_px, parse_numeric_value, px_to_rem, to_pixels, CssUnit, ScaledValue,
};
use serde::{Deserialize, Serialize};

/// Shown in place of a result when the calculation fails
pub const PLACEHOLDER_RESULT: &str = "clamp(min, preferred, max)";

/// Outcome of [`calculate_clamp`]. `result` always holds something
/// displayable; `details` is only set on success.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub is_valid: bool,
    pub result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<LinearFunction>,
}

impl CalculationResult {
    pub fn success(result: String, details: LinearFunction) -> Self {
        Self {
            is_valid: true,
            result,
            error_message: None,
            details: Some(details),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            result: PLACEHOLDER_RESULT.to_string(),
            error_message: Some(message.into()),
            details: None,
        }
    }
}

/// A generated clamp() expression and the line behind it
#[derive(Debug, Clone, PartialEq)]
pub struct ClampOutput {
    pub css: String,
    pub line: LinearFunction,
}

impl From<Result<ClampOutput, ClampError>> for CalculationResult {
    fn from(result: Result<ClampOutput, ClampError>) -> Self {
        match result {
            Ok(output) => CalculationResult::success(output.css, output.line),
            Err(e) if e.is_internal() => {
                log::error!("Clamp calculation error: {}", e);
                CalculationResult::failure(ClampError::Calculation.to_string())
            }
            Err(e) => CalculationResult::failure(e.to_string()),
        }
    }
}

/// Generate the clamp() expression for a config.
///
/// Never fails outright: every problem is reported through
/// `is_valid = false` and `error_message`.
pub fn calculate_clamp(config: &ScaleConfig) -> CalculationResult {
    CalculationResult::from(try_calculate(config))
}

/// Fallible form of [`calculate_clamp`]
pub fn try_calculate(config: &ScaleConfig) -> Result<ClampOutput, ClampError> {
    log::debug!("Starting clamp calculation: {:?}", config);

    if config.min_value.trim().is_empty() || config.max_value.trim().is_empty() {
        log::warn!(
            "Missing required values: min='{}', max='{}'",
            config.min_value,
            config.max_value
        );
        return Err(ClampError::MissingValues);
    }

    let (min_num, max_num) = match (
        parse_numeric_value(&config.min_value),
        parse_numeric_value(&config.max_value),
    ) {
        (Some(min), Some(max)) => (min, max),
        _ => {
            log::warn!(
                "Invalid numeric values: min='{}', max='{}'",
                config.min_value,
                config.max_value
            );
            return Err(ClampError::InvalidNumericValues);
        }
    };

    if min_num >= max_num {
        log::warn!("Min value >= max value: {} >= {}", min_num, max_num);
        return Err(ClampError::MinNotLessThanMax);
    }

    if !config.min_device_width.is_finite() || !config.max_device_width.is_finite() {
        log::warn!(
            "Non-finite device widths: {} .. {}",
            config.min_device_width,
            config.max_device_width
        );
        return Err(ClampError::Calculation);
    }

    if config.min_device_width >= config.max_device_width {
        log::warn!(
            "Min device width >= max device width: {} >= {}",
            config.min_device_width,
            config.max_device_width
        );
        return Err(ClampError::InvalidDeviceRange);
    }

    let (min, max) = output_values(config, min_num, max_num);

    let base_font_size = base_font_size_px(config.root_font_size);
    let min_px = to_pixels(min.number, min.unit, base_font_size)?;
    let max_px = to_pixels(max.number, max.unit, base_font_size)?;

    let line = LinearFunction::through_points(
        config.min_device_width,
        min_px,
        config.max_device_width,
        max_px,
    );
    if !line.is_finite() {
        return Err(ClampError::Calculation);
    }

    let css = render_clamp(&line, min, max, base_font_size);
    log::info!("Clamp calculation completed successfully: {}", css);

    Ok(ClampOutput { css, line })
}

/// Endpoints in the unit they will be written in
fn output_values(config: &ScaleConfig, min_num: f64, max_num: f64) -> (ScaledValue, ScaledValue) {
    if config.unit == CssUnit::Px && config.convert_px_to_rem {
        let min = px_to_rem(min_num, config.root_font_size);
        let max = px_to_rem(max_num, config.root_font_size);
        log::debug!(
            "Converted px to rem: ({}, {}) -> ({}, {})",
            min_num,
            max_num,
            min,
            max
        );
        return (
            ScaledValue::new(min, CssUnit::Rem),
            ScaledValue::new(max, CssUnit::Rem),
        );
    }

    (
        ScaledValue::new(min_num, config.unit),
        ScaledValue::new(max_num, config.unit),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::RootFontSize;
    use pretty_assertions::assert_eq;

    fn px_config(min: &str, max: &str) -> ScaleConfig {
        ScaleConfig {
            unit: CssUnit::Px,
            ..ScaleConfig::with_values(min, max)
        }
    }

    #[test]
    fn test_rem_scenario() {
        let result = calculate_clamp(&ScaleConfig::with_values("1", "2.5"));
        assert!(result.is_valid);
        assert_eq!(result.result, "clamp(1rem, 2.294vw + 0.541rem, 2.5rem)");
        assert_eq!(result.error_message, None);

        let details = result.details.unwrap();
        assert!((details.slope - 24.0 / 1046.0).abs() < 1e-12);
        assert!((details.vw_coefficient - 2400.0 / 1046.0).abs() < 1e-9);
    }

    #[test]
    fn test_px_values() {
        let config = ScaleConfig {
            min_device_width: 300.0,
            max_device_width: 700.0,
            ..px_config("17", "37")
        };
        let result = calculate_clamp(&config);
        assert_eq!(result.result, "clamp(17px, 5vw + 2px, 37px)");
    }

    #[test]
    fn test_convert_px_to_rem() {
        let config = ScaleConfig {
            min_device_width: 400.0,
            max_device_width: 800.0,
            convert_px_to_rem: true,
            ..px_config("16", "32")
        };
        let result = calculate_clamp(&config);
        assert!(result.is_valid);
        assert_eq!(result.result, "clamp(1rem, 4vw + 0rem, 2rem)");
    }

    #[test]
    fn test_convert_flag_ignored_for_rem() {
        let config = ScaleConfig {
            convert_px_to_rem: true,
            ..ScaleConfig::with_values("1", "2.5")
        };
        let result = calculate_clamp(&config);
        assert_eq!(result.result, "clamp(1rem, 2.294vw + 0.541rem, 2.5rem)");
    }

    #[test]
    fn test_simplified_root_font_size() {
        let config = ScaleConfig {
            root_font_size: RootFontSize::Simplified,
            min_device_width: 400.0,
            max_device_width: 800.0,
            convert_px_to_rem: true,
            ..px_config("20", "40")
        };
        let result = calculate_clamp(&config);
        assert_eq!(result.result, "clamp(2rem, 5vw + 0rem, 4rem)");
    }

    #[test]
    fn test_em_bounds() {
        let config = ScaleConfig {
            unit: CssUnit::Em,
            ..ScaleConfig::with_values("1", "2.5")
        };
        let result = calculate_clamp(&config);
        assert_eq!(result.result, "clamp(1em, 2.294vw + 0.541rem, 2.5em)");
    }

    #[test]
    fn test_negative_intercept() {
        let config = ScaleConfig {
            min_device_width: 400.0,
            max_device_width: 800.0,
            ..px_config("0", "40")
        };
        let result = calculate_clamp(&config);
        assert_eq!(result.result, "clamp(0px, 10vw - 40px, 40px)");
    }

    #[test]
    fn test_min_not_less_than_max() {
        let result = calculate_clamp(&ScaleConfig::with_values("5", "2"));
        assert!(!result.is_valid);
        assert_eq!(
            result.error_message.as_deref(),
            Some("Minimum value must be less than maximum value")
        );
        assert_eq!(result.result, PLACEHOLDER_RESULT);
        assert_eq!(result.details, None);

        let result = calculate_clamp(&ScaleConfig::with_values("2", "2"));
        assert!(!result.is_valid);
    }

    #[test]
    fn test_missing_values() {
        let result = calculate_clamp(&ScaleConfig::default());
        assert!(!result.is_valid);
        assert_eq!(
            result.error_message.as_deref(),
            Some("Minimum and maximum values are required")
        );

        let result = calculate_clamp(&ScaleConfig::with_values("1", "  "));
        assert!(!result.is_valid);
    }

    #[test]
    fn test_invalid_numbers() {
        let result = calculate_clamp(&ScaleConfig::with_values("1rem", "2"));
        assert_eq!(
            result.error_message.as_deref(),
            Some("Invalid numeric values")
        );

        let result = calculate_clamp(&ScaleConfig::with_values("1", "two"));
        assert_eq!(
            result.error_message.as_deref(),
            Some("Invalid numeric values")
        );
    }

    #[test]
    fn test_device_range_rejected() {
        let config = ScaleConfig {
            min_device_width: 1366.0,
            max_device_width: 320.0,
            ..ScaleConfig::with_values("1", "2")
        };
        let result = calculate_clamp(&config);
        assert!(!result.is_valid);
        assert_eq!(
            result.error_message.as_deref(),
            Some("Minimum width must be less than maximum width")
        );

        let config = ScaleConfig {
            min_device_width: 800.0,
            max_device_width: 800.0,
            ..ScaleConfig::with_values("1", "2")
        };
        assert_eq!(
            try_calculate(&config),
            Err(ClampError::InvalidDeviceRange)
        );

        let config = ScaleConfig {
            min_device_width: f64::NAN,
            ..ScaleConfig::with_values("1", "2")
        };
        assert!(!calculate_clamp(&config).is_valid);
    }

    #[test]
    fn test_non_finite_width_is_calculation_error() {
        let config = ScaleConfig {
            max_device_width: f64::INFINITY,
            ..ScaleConfig::with_values("1", "2")
        };
        let result = calculate_clamp(&config);
        assert!(!result.is_valid);
        assert_eq!(
            result.error_message.as_deref(),
            Some("Calculation error occurred")
        );
    }

    #[test]
    fn test_result_json_shape() {
        let json = serde_json::to_value(calculate_clamp(&ScaleConfig::with_values("5", "2"))).unwrap();
        assert_eq!(json["isValid"], false);
        assert_eq!(json["result"], PLACEHOLDER_RESULT);
        assert!(json.get("details").is_none());

        let json = serde_json::to_value(calculate_clamp(&ScaleConfig::with_values("1", "2"))).unwrap();
        assert_eq!(json["isValid"], true);
        assert!(json["details"]["vwCoefficient"].is_number());
        assert!(json.get("errorMessage").is_none());
    }
}
