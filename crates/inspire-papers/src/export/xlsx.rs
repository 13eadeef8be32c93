//! Excel export.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::error::ExportResult;
use crate::models::{COLUMNS, OutputRow, PUBLISHING_YEAR_COLUMN};

/// Name of the single worksheet.
pub const SHEET_NAME: &str = "Sheet1";

/// Write rows to an `.xlsx` workbook at `path`, replacing any existing file.
///
/// Row 0 holds the bold column headers; each report row follows in order.
/// Null and empty values leave the cell blank. An integral publishing year
/// is stored as a number, everything else as text.
pub fn write_xlsx(rows: &[OutputRow], path: &Path) -> ExportResult<()> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let excel_row = index as u32 + 1;
        for (col, cell) in row.cells().into_iter().enumerate() {
            let Some(value) = cell.filter(|v| !v.is_empty()) else {
                continue;
            };

            match numeric_year(col, value) {
                Some(year) => worksheet.write_number(excel_row, col as u16, year)?,
                None => worksheet.write_string(excel_row, col as u16, value)?,
            };
        }
    }

    workbook.save(path)?;

    tracing::debug!(path = %path.display(), rows = rows.len(), "Wrote Excel report");
    Ok(())
}

fn numeric_year(col: usize, value: &str) -> Option<i32> {
    if col == PUBLISHING_YEAR_COLUMN { value.trim().parse().ok() } else { None }
}
