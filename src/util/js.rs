//! Conversions between `JsValue` and `serde_json::Value`.

use serde_json::Value;
use wasm_bindgen::JsValue;

/// Convert a JS payload object to JSON. `undefined`, `null`, and anything
/// that fails to stringify become `Value::Null`.
pub fn to_json(value: &JsValue) -> Value {
    if value.is_undefined() || value.is_null() {
        return Value::Null;
    }
    let raw = match js_sys::JSON::stringify(value) {
        Ok(s) => s.as_string(),
        Err(e) => {
            log::warn!("payload could not be stringified: {e:?}");
            return Value::Null;
        }
    };
    let Some(raw) = raw else {
        log::warn!("payload stringified to a non-string");
        return Value::Null;
    };
    match serde_json::from_str(&raw) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("payload is not valid JSON: {e}");
            Value::Null
        }
    }
}

/// Convert JSON to a plain JS object for `pushEvent`.
pub fn from_json(value: &Value) -> Option<JsValue> {
    match js_sys::JSON::parse(&value.to_string()) {
        Ok(js) => Some(js),
        Err(e) => {
            log::warn!("failed to build JS payload: {e:?}");
            None
        }
    }
}
