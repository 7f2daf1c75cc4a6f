//! `.xlsx` rendering of a `ReportTable`.
//!
//! Header row is bold and frozen; currency cells are written as numbers with
//! a peso format so spreadsheets can sum them, dates as `dd/mm/yyyy` text.

#[cfg(test)]
#[path = "excel_test.rs"]
mod excel_test;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use super::{CellValue, ColumnKind, ExportError, ReportTable, format_cell};

const CURRENCY_FORMAT: &str = "\"$\" #,##0";
const SHEET_NAME_MAX: usize = 31;
/// Excel column width units per unit of relative column width.
const WIDTH_SCALE: f64 = 8.0;

/// # Errors
///
/// `ExportError::Excel` when the workbook cannot be built or serialized.
pub fn render(table: &ReportTable) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name(&table.title))?;
    write_sheet(sheet, table)?;
    Ok(workbook.save_to_buffer()?)
}

fn write_sheet(sheet: &mut Worksheet, table: &ReportTable) -> Result<(), XlsxError> {
    let bold = Format::new().set_bold();
    let money = Format::new().set_num_format(CURRENCY_FORMAT);

    for (col, header) in (0u16..).zip(&table.columns) {
        sheet.write_string_with_format(0, col, header.title, &bold)?;
        sheet.set_column_width(col, f64::from(header.width) * WIDTH_SCALE)?;
    }
    sheet.set_freeze_panes(1, 0)?;

    for (row, cells) in (1u32..).zip(&table.rows) {
        for ((col, cell), header) in (0u16..).zip(cells).zip(&table.columns) {
            match (header.kind, cell) {
                (_, CellValue::Empty) => {}
                (ColumnKind::Currency, CellValue::Number(n)) => {
                    sheet.write_number_with_format(row, col, *n, &money)?;
                }
                (_, CellValue::Number(n)) => {
                    sheet.write_number(row, col, *n)?;
                }
                (kind, other) => {
                    sheet.write_string(row, col, format_cell(kind, other))?;
                }
            }
        }
    }
    Ok(())
}

/// Worksheet names are capped at 31 chars and exclude `[]:*?/\`.
fn sheet_name(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .take(SHEET_NAME_MAX)
        .collect();
    let cleaned = cleaned.trim().trim_matches('\'').to_owned();
    if cleaned.is_empty() { "Reporte".to_owned() } else { cleaned }
}
