//! Chart.js Bindings
//!
//! Minimal bindings for the global `Chart` constructor loaded by the page.

use gestionale_fibra::ChartConfig;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// A live Chart.js instance
    #[derive(Debug, Clone)]
    pub type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(canvas: &JsValue, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(method)]
    pub fn destroy(this: &Chart);
}

/// Draw `config` onto `canvas`
pub fn draw(canvas: &JsValue, config: &ChartConfig) -> Result<Chart, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let config = config.serialize(&serializer)?;
    Chart::new(canvas, &config)
}
