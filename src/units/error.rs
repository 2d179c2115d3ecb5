use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    InvalidNumber,
    UnsupportedUnit(String),
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitError::InvalidNumber => write!(f, "Invalid numeric values"),
            UnitError::UnsupportedUnit(unit) => write!(f, "Unsupported unit: {}", unit),
        }
    }
}

impl std::error::Error for UnitError {}
