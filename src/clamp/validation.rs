use crate::clamp::config::{
    ScaleConfig, MAX_DEVICE_INPUT_LIMITS, MAX_VALUE_RANGE, MIN_DEVICE_INPUT_LIMITS,
    MIN_VALUE_RANGE,
};
use crate::units::{is_numeric_value, parse_numeric_value, validate_numeric_range};
use std::fmt;

#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub field: ConfigField,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// Form field an issue is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    MinDeviceWidth,
    MaxDeviceWidth,
    MinValue,
    MaxValue,
}

impl ConfigField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigField::MinDeviceWidth => "minDeviceWidth",
            ConfigField::MaxDeviceWidth => "maxDeviceWidth",
            ConfigField::MinValue => "minValue",
            ConfigField::MaxValue => "maxValue",
        }
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, field: ConfigField, message: impl Into<String>) {
        self.errors.push(ValidationIssue {
            severity: IssueSeverity::Error,
            field,
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: ConfigField, message: impl Into<String>) {
        self.warnings.push(ValidationIssue {
            severity: IssueSeverity::Warning,
            field,
            message: message.into(),
        });
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_issues(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }

    /// First error reported for a field, if any
    pub fn error_for(&self, field: ConfigField) -> Option<&str> {
        self.errors
            .iter()
            .find(|issue| issue.field == field)
            .map(|issue| issue.message.as_str())
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.errors.is_empty() {
            writeln!(f, "Errors:")?;
            for error in &self.errors {
                writeln!(f, "  [{}] {}", error.field.as_str(), error.message)?;
            }
        }

        if !self.warnings.is_empty() {
            writeln!(f, "Warnings:")?;
            for warning in &self.warnings {
                writeln!(f, "  [{}] {}", warning.field.as_str(), warning.message)?;
            }
        }

        Ok(())
    }
}

/// Field-level checks for a config as entered in a form.
///
/// Stricter than [`calculate_clamp`](crate::clamp::calculate_clamp): device
/// widths must also sit inside the manual-input limits.
pub fn validate_config(config: &ScaleConfig) -> ValidationResult {
    let mut result = ValidationResult::new();

    let min_device = config.min_device_width;
    let max_device = config.max_device_width;

    if !min_device.is_finite() {
        result.add_error(ConfigField::MinDeviceWidth, "Minimum device width is required");
    } else if !MIN_DEVICE_INPUT_LIMITS.contains(min_device) {
        result.add_error(
            ConfigField::MinDeviceWidth,
            format!(
                "Value must be between {} and {} px",
                MIN_DEVICE_INPUT_LIMITS.min, MIN_DEVICE_INPUT_LIMITS.max
            ),
        );
    } else if max_device.is_finite() && min_device >= max_device {
        result.add_error(
            ConfigField::MinDeviceWidth,
            "Minimum width must be less than maximum width",
        );
    }

    if !max_device.is_finite() {
        result.add_error(ConfigField::MaxDeviceWidth, "Maximum device width is required");
    } else if !MAX_DEVICE_INPUT_LIMITS.contains(max_device) {
        result.add_error(
            ConfigField::MaxDeviceWidth,
            format!(
                "Value must be between {} and {} px",
                MAX_DEVICE_INPUT_LIMITS.min, MAX_DEVICE_INPUT_LIMITS.max
            ),
        );
    } else if min_device.is_finite() && max_device <= min_device {
        result.add_error(
            ConfigField::MaxDeviceWidth,
            "Maximum width must be greater than minimum width",
        );
    }

    let min_value = validate_value_field(
        &mut result,
        ConfigField::MinValue,
        &config.min_value,
        "Minimum value is required",
        "Must be a valid number (e.g., 1, 16, 2.5, -0.5)",
    );
    let max_value = validate_value_field(
        &mut result,
        ConfigField::MaxValue,
        &config.max_value,
        "Maximum value is required",
        "Must be a valid number (e.g., 5, 80, 3.5, -1.2)",
    );

    if let (Some(min), Some(max)) = (min_value, max_value) {
        if min >= max {
            result.add_error(
                ConfigField::MinValue,
                "Minimum value must be less than maximum value",
            );
            result.add_error(
                ConfigField::MaxValue,
                "Maximum value must be greater than minimum value",
            );
        }
    }

    result
}

fn validate_value_field(
    result: &mut ValidationResult,
    field: ConfigField,
    text: &str,
    required_message: &str,
    pattern_message: &str,
) -> Option<f64> {
    if text.trim().is_empty() {
        result.add_error(field, required_message);
        return None;
    }

    if !is_numeric_value(text) {
        result.add_error(field, pattern_message);
        return None;
    }

    let value = parse_numeric_value(text)?;
    if !validate_numeric_range(value, MIN_VALUE_RANGE, MAX_VALUE_RANGE) {
        result.add_warning(
            field,
            format!(
                "Value is outside the usual range {} to {}",
                MIN_VALUE_RANGE, MAX_VALUE_RANGE
            ),
        );
    }

    Some(value)
}
