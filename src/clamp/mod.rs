// Fluid-scaling clamp() expressions: generation from a config and recovery of
// the config from an existing expression.

pub mod calculator;
pub mod config;
pub mod error;
pub mod generator;
pub mod parser;
pub mod validation;


pub use calculator::{calculate_clamp, try_calculate, CalculationResult, ClampOutput};
pub use config::{default_config, DeviceWidthLimits, ScaleConfig, PARSE_DEVICE_WIDTH_LIMITS};
pub use error::{ClampError, ErrorKind};
pub use generator::{generate_clamp_function, render_clamp, LinearFunction};
pub use parser::{
    is_clamp_function, parse_clamp_function, parse_clamp_function_with_limits, try_parse,
    try_parse_with_limits, ParseResult,
};
pub use validation::{validate_config, ConfigField, IssueSeverity, ValidationResult};
