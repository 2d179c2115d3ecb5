use crate::clamp::config::ScaleConfig;
use crate::units::{format_css_value, format_number, from_pixels, CssUnit, ScaledValue};
use serde::{Deserialize, Serialize};

/// Line through (min device width, min px) and (max device width, max px)
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinearFunction {
    /// px of output per px of device width
    pub slope: f64,
    /// Output in px at a zero-width viewport
    pub y_intercept: f64,
    /// Slope per 1vw (1% of the viewport width)
    pub vw_coefficient: f64,
}

impl LinearFunction {
    /// The caller guarantees `x1 != x2`
    pub fn through_points(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let slope = (y2 - y1) / (x2 - x1);
        let y_intercept = y1 - slope * x1;

        Self {
            slope,
            y_intercept,
            vw_coefficient: slope * 100.0,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.slope.is_finite() && self.y_intercept.is_finite() && self.vw_coefficient.is_finite()
    }
}

/// Build the clamp() string for two endpoints already resolved to pixels.
///
/// `config.min_device_width < config.max_device_width` must hold.
pub fn generate_clamp_function(
    config: &ScaleConfig,
    min: ScaledValue,
    max: ScaledValue,
    min_px: f64,
    max_px: f64,
    base_font_size_px: f64,
) -> String {
    let line = LinearFunction::through_points(
        config.min_device_width,
        min_px,
        config.max_device_width,
        max_px,
    );
    render_clamp(&line, min, max, base_font_size_px)
}

/// Render a line and its two bounds as `clamp(MIN, Nvw ± Munit, MAX)`
pub fn render_clamp(
    line: &LinearFunction,
    min: ScaledValue,
    max: ScaledValue,
    base_font_size_px: f64,
) -> String {
    let intercept = from_pixels(line.y_intercept, min.unit, base_font_size_px);

    // em bounds still get a rem constant: the constant is resolved against
    // the root, not the element's own font size
    let constant_unit = match min.unit {
        CssUnit::Em => CssUnit::Rem,
        other => other,
    };
    let sign = if intercept >= 0.0 { '+' } else { '-' };

    format!(
        "clamp({}, {}vw {} {}{}, {})",
        format_css_value(min.number, min.unit),
        format_number(line.vw_coefficient),
        sign,
        format_number(intercept.abs()),
        constant_unit,
        format_css_value(max.number, max.unit),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_through_points() {
        let line = LinearFunction::through_points(300.0, 17.0, 700.0, 37.0);
        assert_eq!(line.slope, 0.05);
        assert_eq!(line.y_intercept, 2.0);
        assert_eq!(line.vw_coefficient, 5.0);
        assert!(line.is_finite());
    }

    #[test]
    fn test_vertical_line_is_not_finite() {
        let line = LinearFunction::through_points(500.0, 10.0, 500.0, 20.0);
        assert!(!line.is_finite());
    }

    #[test]
    fn test_generate_px() {
        let config = ScaleConfig {
            min_device_width: 300.0,
            max_device_width: 700.0,
            unit: CssUnit::Px,
            ..ScaleConfig::with_values("17", "37")
        };
        let css = generate_clamp_function(
            &config,
            ScaledValue::new(17.0, CssUnit::Px),
            ScaledValue::new(37.0, CssUnit::Px),
            17.0,
            37.0,
            16.0,
        );
        assert_eq!(css, "clamp(17px, 5vw + 2px, 37px)");
    }

    #[test]
    fn test_negative_intercept() {
        // 0px at 400px wide, 40px at 800px wide
        let config = ScaleConfig {
            min_device_width: 400.0,
            max_device_width: 800.0,
            unit: CssUnit::Px,
            ..ScaleConfig::with_values("0", "40")
        };
        let css = generate_clamp_function(
            &config,
            ScaledValue::new(0.0, CssUnit::Px),
            ScaledValue::new(40.0, CssUnit::Px),
            0.0,
            40.0,
            16.0,
        );
        assert_eq!(css, "clamp(0px, 10vw - 40px, 40px)");
    }

    #[test]
    fn test_em_bounds_use_rem_constant() {
        let line = LinearFunction::through_points(400.0, 16.0, 800.0, 32.0);
        let css = render_clamp(
            &line,
            ScaledValue::new(1.0, CssUnit::Em),
            ScaledValue::new(2.0, CssUnit::Em),
            16.0,
        );
        assert_eq!(css, "clamp(1em, 4vw + 0rem, 2em)");
    }
}
