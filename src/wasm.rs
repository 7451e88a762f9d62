//! WebAssembly bindings.
//!
//! Exposes the one-shot planner to JavaScript. Requests and responses use
//! the same camelCase JSON shapes as [`plan`](crate::plan).

use wasm_bindgen::prelude::*;

use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::models::{Fleet, LatLng};
use crate::plan::{plan as run_plan, PlanRequest};

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

fn planner_error(e: PlannerError) -> JsValue {
    to_js_error(e)
}

/// Plans every scenario for a request object.
///
/// `config` is an optional partial `PlannerConfig` object; omitted fields use
/// the defaults.
#[wasm_bindgen]
pub fn plan(request: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let request: PlanRequest = serde_wasm_bindgen::from_value(request).map_err(to_js_error)?;
    let config: PlannerConfig = if config.is_undefined() || config.is_null() {
        PlannerConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(to_js_error)?
    };
    config.validate().map_err(planner_error)?;

    let response = run_plan(&config, &request).map_err(planner_error)?;
    serde_wasm_bindgen::to_value(&response).map_err(to_js_error)
}

/// The standard sedan / van / bus catalog.
#[wasm_bindgen(js_name = standardFleet)]
pub fn standard_fleet() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&Fleet::standard()).map_err(to_js_error)
}

/// Great-circle distance in km between two `{lat, lng}` objects.
#[wasm_bindgen(js_name = distanceKm)]
pub fn distance_km(from: JsValue, to: JsValue) -> Result<f64, JsValue> {
    let from: LatLng = serde_wasm_bindgen::from_value(from).map_err(to_js_error)?;
    let to: LatLng = serde_wasm_bindgen::from_value(to).map_err(to_js_error)?;
    Ok(crate::distance::haversine_km(&from, &to))
}
