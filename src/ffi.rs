//! C ABI bindings.
//!
//! JSON in, JSON out. Every string returned by this module is allocated by
//! Rust and must be released with [`commute_free_string`].
//!
//! Responses are either the serialized [`PlanResponse`](crate::plan::PlanResponse)
//! or `{"error": "..."}`.

use std::ffi::{CStr, CString};

use libc::c_char;
use serde::Serialize;
use tracing::warn;

use crate::config::PlannerConfig;
use crate::plan::{plan, PlanRequest};

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn error_json(message: impl Into<String>) -> String {
    let body = ErrorBody {
        error: message.into(),
    };
    serde_json::to_string(&body).unwrap_or_else(|_| r#"{"error":"serialization failed"}"#.into())
}

fn into_c_string(s: String) -> *mut c_char {
    // JSON output never contains interior NULs, but stay total anyway
    match CString::new(s) {
        Ok(c) => c.into_raw(),
        Err(_) => CString::new(error_json("response contained NUL"))
            .map(CString::into_raw)
            .unwrap_or(std::ptr::null_mut()),
    }
}

/// Plans a JSON request and returns the JSON response.
pub(crate) fn plan_json(request: &str, config: Option<&str>) -> String {
    let config = match config {
        Some(json) => match serde_json::from_str::<PlannerConfig>(json) {
            Ok(c) => c,
            Err(e) => return error_json(format!("invalid config: {e}")),
        },
        None => PlannerConfig::default(),
    };
    if let Err(e) = config.validate() {
        return error_json(e.to_string());
    }

    let request: PlanRequest = match serde_json::from_str(request) {
        Ok(r) => r,
        Err(e) => return error_json(format!("invalid request: {e}")),
    };

    match plan(&config, &request) {
        Ok(response) => serde_json::to_string(&response).unwrap_or_else(|e| error_json(e.to_string())),
        Err(e) => {
            warn!(error = %e, "plan request failed");
            error_json(e.to_string())
        }
    }
}

/// Plans every scenario for a JSON request.
///
/// `config_json` may be null to use the default configuration.
///
/// # Safety
///
/// `request_json` must be a valid NUL-terminated string. `config_json` must
/// be null or a valid NUL-terminated string. The result must be released with
/// [`commute_free_string`].
#[no_mangle]
pub unsafe extern "C" fn commute_plan(
    request_json: *const c_char,
    config_json: *const c_char,
) -> *mut c_char {
    if request_json.is_null() {
        return into_c_string(error_json("request is null"));
    }
    let request = match CStr::from_ptr(request_json).to_str() {
        Ok(s) => s,
        Err(_) => return into_c_string(error_json("request is not valid UTF-8")),
    };
    let config = if config_json.is_null() {
        None
    } else {
        match CStr::from_ptr(config_json).to_str() {
            Ok(s) => Some(s),
            Err(_) => return into_c_string(error_json("config is not valid UTF-8")),
        }
    };
    into_c_string(plan_json(request, config))
}

/// Releases a string returned by this library.
///
/// # Safety
///
/// `s` must be null or a pointer previously returned by this library, not
/// yet freed.
#[no_mangle]
pub unsafe extern "C" fn commute_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
