//! # textab
//!
//! LaTeX table-body generator for automated lab reports, written in Rust.
//!
//! ## Features
//!
//! - **Tabular Rows**: converts in-memory tables into `$cell$&$cell$\\` body
//!   lines, ready to embed in a `tabular`/`array` environment
//! - **Missing Values**: a distinguished marker rendered as a configurable
//!   `\text{...}` placeholder
//! - **Sink Abstraction**: write to any `std::io::Write` destination, or to a
//!   closable `TableSink`
//! - **Serde Support**: optional derives on the table data model
//! - **WASM Support**: compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Rendering rows
//!
//! ```rust
//! use textab::{rows_to_latex, Cell, Table};
//!
//! let table = Table::from(vec![
//!     vec![Cell::from(1), Cell::Missing, Cell::from(3)],
//!     vec![Cell::from("a"), Cell::from("b")],
//! ]);
//!
//! let body = rows_to_latex(&table);
//! assert_eq!(body, "$1$&$\\text{None}$&$3$\\\\\n$a$&$b$\\\\\n");
//! ```
//!
//! ### Writing to a sink
//!
//! ```rust
//! use textab::{write_rows, FormatOptions, Cell, Table};
//!
//! let table = Table::from(vec![vec![Cell::from(1.5), Cell::from(2.5)]]);
//!
//! let mut out = Vec::new();
//! write_rows(&table, &mut out, &FormatOptions::default()).unwrap();
//! assert_eq!(out, b"$1.5$&$2.5$\\\\\n");
//! ```

/// Core table model and rendering
pub mod core;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export the table data model
pub use crate::core::options::FormatOptions;
pub use crate::core::table::{Cell, Row, Table};

// Re-export rendering operations
pub use crate::core::render::{render_rows, write_rows, write_rows_to_sink};

// Re-export utilities
pub use crate::utils::error::{FormatError, FormatResult};
pub use crate::utils::sink::{MemorySink, TableSink, WriterSink};

/// Render a table into LaTeX tabular-row syntax with default options
///
/// # Arguments
/// * `table` - the table to render
///
/// # Returns
/// The table body as LaTeX tabular-row text
pub fn rows_to_latex(table: &Table) -> String {
    render_rows(table, &FormatOptions::default())
}

/// Render a table into LaTeX tabular-row syntax with custom options
///
/// # Arguments
/// * `table` - the table to render
/// * `options` - rendering options
///
/// # Returns
/// The table body as LaTeX tabular-row text
pub fn rows_to_latex_with_options(table: &Table, options: &FormatOptions) -> String {
    render_rows(table, options)
}
