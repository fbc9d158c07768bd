//! WebAssembly bindings for Voxel Life.
//!
//! Lets a browser renderer request the point cloud directly.

use wasm_bindgen::prelude::*;

use crate::{compute::simulate, schema::RunConfig};

/// Initialize WASM module with panic hook and logging.
#[wasm_bindgen(start)]
pub fn init() {
    // Set panic hook for better error messages in browser
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
}

/// Run a simulation and return `{ config, stats, points }`.
///
/// # Arguments
/// * `config_json` - JSON string containing RunConfig; missing fields take defaults
#[wasm_bindgen(js_name = generatePoints)]
pub fn generate_points(config_json: &str) -> Result<JsValue, JsValue> {
    let config = RunConfig::from_json_str(config_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?;

    let output = simulate(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&output)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Run the default 14x10, 20-generation scene.
#[wasm_bindgen(js_name = generateDefaultPoints)]
pub fn generate_default_points() -> Result<JsValue, JsValue> {
    generate_points("{}")
}
