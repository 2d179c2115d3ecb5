// CSS length units, root font sizes and the numeric helpers shared by the
// clamp generator and parser.

pub mod converter;
pub mod error;
pub mod formatter;
pub mod tokenizer;
pub mod types;

pub use converter::{base_font_size_px, from_pixels, px_to_rem, to_pixels, unit_str_to_pixels};
pub use error::UnitError;
pub use formatter::{format_css_value, format_number, format_number_with_precision};
pub use tokenizer::{is_numeric_value, parse_numeric_value, parse_value, validate_numeric_range};
pub use types::{CssUnit, RootFontSize, ScaledValue};
