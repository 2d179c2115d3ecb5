use crate::units::{CssUnit, RootFontSize};
use serde::{Deserialize, Serialize};

/// Device width used as the lower breakpoint when none is given
pub const DEFAULT_MIN_DEVICE_WIDTH: f64 = 320.0;
/// Device width used as the upper breakpoint when none is given
pub const DEFAULT_MAX_DEVICE_WIDTH: f64 = 1366.0;

/// Everything needed to generate one clamp() expression
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScaleConfig {
    pub root_font_size: RootFontSize,

    // Viewport widths (px) where scaling starts and stops
    #[serde(alias = "minDevice")]
    pub min_device_width: f64,
    #[serde(alias = "maxDevice")]
    pub max_device_width: f64,

    // Kept as text: these come straight from form fields
    pub min_value: String,
    pub max_value: String,

    pub unit: CssUnit,

    #[serde(alias = "convertToRem")]
    pub convert_px_to_rem: bool,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            root_font_size: RootFontSize::Standard,
            min_device_width: DEFAULT_MIN_DEVICE_WIDTH,
            max_device_width: DEFAULT_MAX_DEVICE_WIDTH,
            min_value: String::new(),
            max_value: String::new(),
            unit: CssUnit::Rem,
            convert_px_to_rem: false,
        }
    }
}

impl ScaleConfig {
    /// Default config with the two bounds filled in
    pub fn with_values(min_value: impl Into<String>, max_value: impl Into<String>) -> Self {
        Self {
            min_value: min_value.into(),
            max_value: max_value.into(),
            ..Self::default()
        }
    }

    pub fn load_from_file<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: ScaleConfig = toml::from_str(content)?;
        Ok(config)
    }
}

/// Fixed starting point for a fresh form
pub fn default_config() -> ScaleConfig {
    ScaleConfig::default()
}

/// Inclusive envelope of plausible device widths (px)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct DeviceWidthLimits {
    pub min: f64,
    pub max: f64,
}

impl DeviceWidthLimits {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, width: f64) -> bool {
        width >= self.min && width <= self.max
    }
}

/// Absolute bounds applied when recovering device widths from a clamp() string
pub const PARSE_DEVICE_WIDTH_LIMITS: DeviceWidthLimits = DeviceWidthLimits::new(100.0, 10000.0);

impl Default for DeviceWidthLimits {
    fn default() -> Self {
        PARSE_DEVICE_WIDTH_LIMITS
    }
}

// Limits for manually entered values; tighter than what the parser accepts
pub const MIN_DEVICE_INPUT_LIMITS: DeviceWidthLimits = DeviceWidthLimits::new(100.0, 2000.0);
pub const MAX_DEVICE_INPUT_LIMITS: DeviceWidthLimits = DeviceWidthLimits::new(400.0, 10000.0);
pub const MIN_VALUE_RANGE: f64 = -1000.0;
pub const MAX_VALUE_RANGE: f64 = 1000.0;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.root_font_size, RootFontSize::Standard);
        assert_eq!(config.min_device_width, 320.0);
        assert_eq!(config.max_device_width, 1366.0);
        assert_eq!(config.unit, CssUnit::Rem);
        assert!(!config.convert_px_to_rem);
        assert!(config.min_value.is_empty());
        assert!(config.max_value.is_empty());
    }

    #[test]
    fn test_load_from_str_fills_defaults() {
        let config = ScaleConfig::load_from_str(
            r#"
minValue = "16"
maxValue = "40"
unit = "px"
convertPxToRem = true
"#,
        )
        .unwrap();

        assert_eq!(
            config,
            ScaleConfig {
                min_value: "16".to_string(),
                max_value: "40".to_string(),
                unit: CssUnit::Px,
                convert_px_to_rem: true,
                ..ScaleConfig::default()
            }
        );
    }

    #[test]
    fn test_load_from_str_accepts_short_names() {
        let config = ScaleConfig::load_from_str(
            r#"
rootFontSize = "62.5"
minDevice = 375.0
maxDevice = 1440.0
minValue = "1"
maxValue = "2"
convertToRem = false
"#,
        )
        .unwrap();

        assert_eq!(config.root_font_size, RootFontSize::Simplified);
        assert_eq!(config.min_device_width, 375.0);
        assert_eq!(config.max_device_width, 1440.0);
    }

    #[test]
    fn test_load_from_str_rejects_unknown_unit() {
        assert!(ScaleConfig::load_from_str(r#"unit = "vh""#).is_err());
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(ScaleConfig::with_values("1", "2")).unwrap();
        assert_eq!(json["rootFontSize"], "standard");
        assert_eq!(json["minDeviceWidth"], 320.0);
        assert_eq!(json["minValue"], "1");
        assert_eq!(json["convertPxToRem"], false);
    }

    #[test]
    fn test_device_width_limits() {
        let limits = DeviceWidthLimits::default();
        assert!(limits.contains(100.0));
        assert!(limits.contains(10000.0));
        assert!(!limits.contains(99.0));
        assert!(!limits.contains(10001.0));
    }
}
