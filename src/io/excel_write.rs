use std::path::Path;

use rust_xlsxwriter::Workbook;
use tracing::instrument;

use crate::error::Result;
use crate::report::ReportTable;

/// Excel caps sheet names at 31 characters.
const MAX_SHEET_NAME: usize = 31;

/// Writes the provided report tables to the given path, one sheet per table.
#[instrument(level = "info", skip(tables), fields(path = %path.display(), sheets = tables.len()))]
pub fn write_reports(path: &Path, tables: &[ReportTable]) -> Result<()> {
    let mut workbook_writer = Workbook::new();

    for (table_idx, table) in tables.iter().enumerate() {
        let worksheet = workbook_writer.add_worksheet();
        worksheet.set_name(sheet_name(&table.title, table_idx))?;

        for (col_idx, header) in table.columns.iter().enumerate() {
            worksheet.write_string(0, col_idx as u16, header)?;
        }

        for (row_idx, row) in table.rows.iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                worksheet.write_string((row_idx + 1) as u32, col_idx as u16, cell)?;
            }
        }

        if table.columns.is_empty() {
            continue;
        }

        let mut excel_table = rust_xlsxwriter::Table::new();
        excel_table.set_autofilter(true);

        let col_end = (table.columns.len() as u16).saturating_sub(1);
        let row_end = if table.rows.is_empty() {
            1
        } else {
            table.rows.len() as u32
        };
        worksheet.add_table(0, 0, row_end, col_end, &excel_table)?;
    }

    workbook_writer.save(path)?;
    Ok(())
}

fn sheet_name(title: &str, idx: usize) -> String {
    let cleaned: String = title
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .take(MAX_SHEET_NAME)
        .collect();
    if cleaned.trim().is_empty() {
        format!("Sheet{}", idx + 1)
    } else {
        cleaned
    }
}
