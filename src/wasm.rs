// WebAssembly bindings for hosting the converter as a serverless function
use crate::convert::Converter;
use crate::http;
use crate::units::UnitCategory;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct UnitconvWasm {}

impl Default for UnitconvWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl UnitconvWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {}
    }

    /// Serve a request path such as "/length/meter/kilometer/5"
    /// Returns JSON string: {"status": 200, "body": "0.005"}
    #[wasm_bindgen]
    pub fn handle_request(&self, path: &str) -> Result<String, JsValue> {
        let response = http::handle(path);

        serde_json::to_string(&response)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize response: {}", e)))
    }

    /// Convert between two units of a category
    /// Returns JSON string of the tagged conversion result
    #[wasm_bindgen]
    pub fn convert(
        &self,
        category: &str,
        source: &str,
        target: &str,
        input: f64,
    ) -> Result<String, JsValue> {
        let category = UnitCategory::from_segment(category)
            .ok_or_else(|| JsValue::from_str(&format!("Unit category '{}' not found", category)))?;

        let result = Converter::new(category).convert(source, target, input);

        serde_json::to_string(&result)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }

    /// List unit names of a category in table order
    /// Returns JSON array of names
    #[wasm_bindgen]
    pub fn list_units(&self, category: &str) -> Result<String, JsValue> {
        let category = UnitCategory::from_segment(category)
            .ok_or_else(|| JsValue::from_str(&format!("Unit category '{}' not found", category)))?;

        serde_json::to_string(&category.table().list_names())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize units: {}", e)))
    }
}
