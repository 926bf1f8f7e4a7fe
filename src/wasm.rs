//! WASM bindings for textab
//!
//! This module provides JavaScript-accessible functions for LaTeX table-body
//! generation.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{Cell, FormatOptions, Table};

/// Row-formatting options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct FormatRowsOptions {
    /// Display text substituted for `null` cells
    #[serde(default = "default_nonestring")]
    pub nonestring: String,
}

#[cfg(feature = "wasm")]
impl Default for FormatRowsOptions {
    fn default() -> Self {
        Self {
            nonestring: default_nonestring(),
        }
    }
}

#[cfg(feature = "wasm")]
fn default_nonestring() -> String {
    "None".to_string()
}

/// Formatting result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct FormatRowsResult {
    /// The generated table body
    pub output: String,
    /// Whether the formatting was successful
    pub success: bool,
    /// Error message if formatting failed
    pub error: Option<String>,
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Format a table of rows into LaTeX tabular-row syntax
///
/// # Arguments
/// * `rows` - array of arrays of cell values; `null` entries become the
///   missing-value placeholder
/// * `options` - `{ nonestring?: string }`
///
/// # Returns
/// `{ output, success, error }`
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "formatRows")]
pub fn format_rows_wasm(rows: JsValue, options: JsValue) -> JsValue {
    let opts: FormatRowsOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();

    let result = match serde_wasm_bindgen::from_value::<Vec<Vec<Option<String>>>>(rows) {
        Ok(rows) => {
            let table = Table::from(
                rows.into_iter()
                    .map(|row| row.into_iter().map(Cell::from).collect::<Vec<_>>())
                    .collect::<Vec<_>>(),
            );
            let format_opts = FormatOptions::with_nonestring(opts.nonestring);
            FormatRowsResult {
                output: crate::rows_to_latex_with_options(&table, &format_opts),
                success: true,
                error: None,
            }
        }
        Err(e) => FormatRowsResult {
            output: String::new(),
            success: false,
            error: Some(format!(
                "Formatting failed: expected an array of arrays of cells ({})",
                e
            )),
        },
    };

    serde_wasm_bindgen::to_value(&result).unwrap()
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
