// WebAssembly bindings for the form layer
use crate::clamp;
use crate::units::RootFontSize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ClampWasm {}

impl Default for ClampWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ClampWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {}
    }

    /// Generate a clamp() expression from a JSON ScaleConfig
    /// Returns JSON string of the CalculationResult
    #[wasm_bindgen]
    pub fn calculate_clamp(&self, config_json: &str) -> Result<String, JsValue> {
        let config: clamp::ScaleConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config JSON: {}", e)))?;

        let result = clamp::calculate_clamp(&config);

        serde_json::to_string(&result)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }

    /// Recover a ScaleConfig from a clamp() expression
    /// root_font_size: "standard" | "simplified" (or "100" | "62.5")
    /// Returns JSON string of the ParseResult
    #[wasm_bindgen]
    pub fn parse_clamp_function(
        &self,
        text: &str,
        root_font_size: &str,
    ) -> Result<String, JsValue> {
        let root_font_size: RootFontSize = root_font_size
            .parse()
            .map_err(|e: String| JsValue::from_str(&e))?;

        let result = clamp::parse_clamp_function(text, root_font_size);

        serde_json::to_string(&result)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }

    #[wasm_bindgen]
    pub fn is_clamp_function(&self, text: &str) -> bool {
        clamp::is_clamp_function(text)
    }

    /// Returns JSON string of the default ScaleConfig
    #[wasm_bindgen]
    pub fn default_config(&self) -> Result<String, JsValue> {
        serde_json::to_string(&clamp::default_config())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize config: {}", e)))
    }
}
