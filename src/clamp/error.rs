use crate::clamp::config::DeviceWidthLimits;
use crate::units::{CssUnit, UnitError};
use std::fmt;

/// Coarse classification of a [`ClampError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidFormat,
    UnableToParseValue,
    UnitMismatch,
    OutOfRange,
    InvalidNumber,
    UnsupportedUnit,
    CalculationError,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClampError {
    // Generation
    MissingValues,
    InvalidNumericValues,
    MinNotLessThanMax,
    InvalidDeviceRange,

    // Parsing
    InvalidFormat,
    UnableToParseMinMax,
    DifferentUnits {
        min: CssUnit,
        max: CssUnit,
    },
    UnableToParsePreferred,
    InvalidSlope,
    DeviceWidthOutOfRange {
        min_device: f64,
        max_device: f64,
        limits: DeviceWidthLimits,
    },

    // Shared
    Unit(UnitError),
    Calculation,
}

impl ClampError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClampError::MissingValues
            | ClampError::InvalidNumericValues
            | ClampError::UnableToParseMinMax
            | ClampError::UnableToParsePreferred => ErrorKind::UnableToParseValue,
            ClampError::InvalidFormat => ErrorKind::InvalidFormat,
            ClampError::DifferentUnits { .. } => ErrorKind::UnitMismatch,
            ClampError::MinNotLessThanMax
            | ClampError::InvalidDeviceRange
            | ClampError::DeviceWidthOutOfRange { .. } => ErrorKind::OutOfRange,
            ClampError::Unit(UnitError::InvalidNumber) => ErrorKind::InvalidNumber,
            ClampError::Unit(UnitError::UnsupportedUnit(_)) => ErrorKind::UnsupportedUnit,
            ClampError::InvalidSlope | ClampError::Calculation => ErrorKind::CalculationError,
        }
    }

    /// True for failures of the arithmetic itself rather than of the input's
    /// shape. These are reported with a generic message at the boundary.
    pub fn is_internal(&self) -> bool {
        matches!(self, ClampError::Unit(_) | ClampError::Calculation)
    }
}

impl fmt::Display for ClampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClampError::MissingValues => write!(f, "Minimum and maximum values are required"),
            ClampError::InvalidNumericValues => write!(f, "Invalid numeric values"),
            ClampError::MinNotLessThanMax => {
                write!(f, "Minimum value must be less than maximum value")
            }
            ClampError::InvalidDeviceRange => {
                write!(f, "Minimum width must be less than maximum width")
            }
            ClampError::InvalidFormat => write!(f, "Invalid clamp() function format"),
            ClampError::UnableToParseMinMax => write!(f, "Unable to parse min/max values"),
            ClampError::DifferentUnits { .. } => {
                write!(f, "Min and max values must use the same unit")
            }
            ClampError::UnableToParsePreferred => write!(
                f,
                "Unable to parse preferred value (expected format: Xvw ± Yunit)"
            ),
            ClampError::InvalidSlope => write!(f, "Invalid slope in clamp function"),
            ClampError::DeviceWidthOutOfRange {
                min_device,
                max_device,
                limits,
            } => write!(
                f,
                "Calculated device widths are out of valid range ({}px to {}px, allowed {}px to {}px)",
                min_device, max_device, limits.min, limits.max
            ),
            ClampError::Unit(e) => write!(f, "{}", e),
            ClampError::Calculation => write!(f, "Calculation error occurred"),
        }
    }
}

impl std::error::Error for ClampError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClampError::Unit(e) => Some(e),
            _ => None,
        }
    }
}

impl From<UnitError> for ClampError {
    fn from(e: UnitError) -> Self {
        ClampError::Unit(e)
    }
}
