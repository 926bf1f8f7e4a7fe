//! LaTeX tabular-row rendering and sink writing
//!
//! Converts an in-memory `Table` into tabular-row syntax: each cell wrapped
//! in `$...$`, cells separated by `&`, rows terminated by `\\` and a
//! newline. The output is a table *body*; the caller supplies the
//! surrounding `tabular`/`array` environment.

use std::io::Write;

use crate::core::options::FormatOptions;
use crate::core::table::Table;
use crate::utils::error::{FormatError, FormatResult};
use crate::utils::sink::TableSink;

/// Render a table into LaTeX tabular-row syntax
///
/// Cells are emitted in row order, each wrapped in `$...$` and followed by
/// `&`. After every row, exactly one trailing character is trimmed from the
/// accumulated buffer (normally the last `&`) before the `\\` terminator
/// and newline are appended. The trim is unconditional: a row with no cells
/// removes the previous row's newline instead.
///
/// Cell text is passed through without escaping; LaTeX-special characters
/// in values reach the output verbatim.
pub fn render_rows(table: &Table, options: &FormatOptions) -> String {
    let mut output = String::new();

    for row in table.rows() {
        for cell in row.cells() {
            output.push('$');
            output.push_str(&cell.to_latex(&options.nonestring));
            output.push('$');
            output.push('&');
        }
        // one trailing char is always trimmed, even when this row
        // appended nothing
        output.pop();
        output.push_str("\\\\\n");
    }

    output
}

/// Write a table's rendered rows to any `std::io::Write` destination
///
/// The full body is rendered first and written in a single call. The caller
/// keeps ownership of the writer and manages its lifetime; closing (and
/// flushing) happens when the writer leaves the caller's scope.
pub fn write_rows<W: Write>(
    table: &Table,
    sink: &mut W,
    options: &FormatOptions,
) -> FormatResult<()> {
    let rendered = render_rows(table, options);
    sink.write_all(rendered.as_bytes())
        .map_err(|e| FormatError::sink_write(e.to_string()))
}

/// Write a table's rendered rows to a `TableSink`, optionally closing it
///
/// The sink receives exactly one `write_text` call, even for an empty
/// table. With `close_after`, the sink is closed once the write completes;
/// a failed close is reported as `SinkClose` and does not undo the write.
pub fn write_rows_to_sink<S: TableSink>(
    table: &Table,
    sink: &mut S,
    close_after: bool,
    options: &FormatOptions,
) -> FormatResult<()> {
    let rendered = render_rows(table, options);
    sink.write_text(&rendered)?;
    if close_after {
        sink.close()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::Cell;
    use crate::utils::sink::MemorySink;

    fn table(rows: Vec<Vec<Cell>>) -> Table {
        Table::from(rows)
    }

    #[test]
    fn test_single_row() {
        let t = table(vec![vec![Cell::from(1), Cell::from(2), Cell::from(3)]]);
        let out = render_rows(&t, &FormatOptions::default());
        assert_eq!(out, "$1$&$2$&$3$\\\\\n");
    }

    #[test]
    fn test_missing_cell_default_placeholder() {
        let t = table(vec![vec![Cell::from(1), Cell::Missing]]);
        let out = render_rows(&t, &FormatOptions::default());
        assert_eq!(out, "$1$&$\\text{None}$\\\\\n");
    }

    #[test]
    fn test_missing_cell_custom_placeholder() {
        let t = table(vec![vec![Cell::Missing]]);
        let out = render_rows(&t, &FormatOptions::with_nonestring("NA"));
        assert_eq!(out, "$\\text{NA}$\\\\\n");
    }

    #[test]
    fn test_empty_table_renders_empty() {
        let t = Table::new();
        assert_eq!(render_rows(&t, &FormatOptions::default()), "");
    }

    #[test]
    fn test_zero_cell_row_trims_previous_newline() {
        // the unconditional trim reaches into the previous row's terminator
        let t = table(vec![vec![Cell::from(1)], vec![], vec![Cell::from(2)]]);
        let out = render_rows(&t, &FormatOptions::default());
        assert_eq!(out, "$1$\\\\\\\\\n$2$\\\\\n");
    }

    #[test]
    fn test_zero_cell_first_row() {
        // nothing to trim at the start of the buffer
        let t = table(vec![vec![]]);
        let out = render_rows(&t, &FormatOptions::default());
        assert_eq!(out, "\\\\\n");
    }

    #[test]
    fn test_no_escaping_of_special_characters() {
        let t = table(vec![vec![Cell::from("50%"), Cell::from("a_b")]]);
        let out = render_rows(&t, &FormatOptions::default());
        assert_eq!(out, "$50%$&$a_b$\\\\\n");
    }

    #[test]
    fn test_write_rows_to_vec() {
        let t = table(vec![vec![Cell::from("a"), Cell::from("b")]]);
        let mut buf = Vec::new();
        write_rows(&t, &mut buf, &FormatOptions::default()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "$a$&$b$\\\\\n");
    }

    #[test]
    fn test_write_rows_to_sink_close_flag() {
        let t = table(vec![vec![Cell::from(1)]]);

        let mut open_sink = MemorySink::new();
        write_rows_to_sink(&t, &mut open_sink, false, &FormatOptions::default()).unwrap();
        assert!(!open_sink.is_closed());

        let mut closed_sink = MemorySink::new();
        write_rows_to_sink(&t, &mut closed_sink, true, &FormatOptions::default()).unwrap();
        assert!(closed_sink.is_closed());
        assert_eq!(closed_sink.contents(), "$1$\\\\\n");
    }

    #[test]
    fn test_write_rows_to_closed_sink_fails() {
        let t = table(vec![vec![Cell::from(1)]]);
        let mut sink = MemorySink::new();
        sink.close().unwrap();

        let err = write_rows_to_sink(&t, &mut sink, false, &FormatOptions::default()).unwrap_err();
        assert!(matches!(err, FormatError::SinkWrite { .. }));
    }
}
