use crate::units::error::UnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length units a clamp() bound can be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CssUnit {
    Rem,
    Px,
    Em,
}

impl CssUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            CssUnit::Rem => "rem",
            CssUnit::Px => "px",
            CssUnit::Em => "em",
        }
    }

    /// Font-relative units scale with the root font size
    pub fn is_font_relative(&self) -> bool {
        matches!(self, CssUnit::Rem | CssUnit::Em)
    }
}

impl fmt::Display for CssUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CssUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rem" => Ok(CssUnit::Rem),
            "px" => Ok(CssUnit::Px),
            "em" => Ok(CssUnit::Em),
            other => Err(UnitError::UnsupportedUnit(other.to_string())),
        }
    }
}

/// Convention fixing what 1rem means in pixels.
///
/// `Standard` is the browser default (100%, 1rem = 16px). `Simplified` is the
/// 62.5% trick where 1rem = 10px.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RootFontSize {
    #[default]
    #[serde(alias = "100")]
    Standard,
    #[serde(alias = "62.5")]
    Simplified,
}

impl RootFontSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            RootFontSize::Standard => "standard",
            RootFontSize::Simplified => "simplified",
        }
    }
}

impl fmt::Display for RootFontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RootFontSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "100" | "100%" => Ok(RootFontSize::Standard),
            "simplified" | "62.5" | "62.5%" => Ok(RootFontSize::Simplified),
            other => Err(format!(
                "Unknown root font size '{}' (expected standard or simplified)",
                other
            )),
        }
    }
}

/// A single `<number><unit>` point on the output line
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ScaledValue {
    pub number: f64,
    pub unit: CssUnit,
}

impl ScaledValue {
    pub fn new(number: f64, unit: CssUnit) -> Self {
        Self { number, unit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_from_str() {
        assert_eq!("rem".parse::<CssUnit>().unwrap(), CssUnit::Rem);
        assert_eq!("px".parse::<CssUnit>().unwrap(), CssUnit::Px);
        assert_eq!("em".parse::<CssUnit>().unwrap(), CssUnit::Em);
        assert_eq!(
            "vh".parse::<CssUnit>(),
            Err(UnitError::UnsupportedUnit("vh".to_string()))
        );
        // Unit names are case sensitive, like the CSS we emit
        assert!("REM".parse::<CssUnit>().is_err());
    }

    #[test]
    fn test_root_font_size_from_str() {
        assert_eq!("standard".parse(), Ok(RootFontSize::Standard));
        assert_eq!("100".parse(), Ok(RootFontSize::Standard));
        assert_eq!("Simplified".parse(), Ok(RootFontSize::Simplified));
        assert_eq!("62.5%".parse(), Ok(RootFontSize::Simplified));
        assert!("75".parse::<RootFontSize>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&CssUnit::Rem).unwrap();
        assert_eq!(json, "\"rem\"");

        let mode: RootFontSize = serde_json::from_str("\"62.5\"").unwrap();
        assert_eq!(mode, RootFontSize::Simplified);
        let mode: RootFontSize = serde_json::from_str("\"standard\"").unwrap();
        assert_eq!(mode, RootFontSize::Standard);
    }
}
