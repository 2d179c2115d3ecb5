pub mod clamp;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use clamp::{
    calculate_clamp, default_config, is_clamp_function, parse_clamp_function, CalculationResult,
    ClampError, ParseResult, ScaleConfig,
};
pub use units::{CssUnit, RootFontSize, ScaledValue};
