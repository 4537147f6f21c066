use std::path::Path;

use calamine::{DataType, Range, Reader, Xlsx, open_workbook};
use tracing::{debug, instrument};

use crate::error::{Result, StatsError};
use crate::io::table::{Cell, Table};

/// Declared sheet names ending with this suffix hold revision rows.
pub const REVISION_SUFFIX: &str = "Revision";

/// Physical row holding the real header. The two rows above it are template
/// artifacts of the export.
const HEADER_ROW: u32 = 2;

/// Header retitlings applied to every sheet before concatenation, as
/// `(old title, current title)` pairs.
pub type HeaderRenames<'a> = &'a [(&'a str, &'a str)];

/// Reads a multi-sheet export and splits it into the `(original, revision)`
/// tables. Each sheet is routed by its declared name, which is the text of
/// cell A1 (falling back to the sheet tab name when A1 is blank).
#[instrument(level = "info", skip(renames), fields(path = %path.display()))]
pub fn read_original_revision(path: &Path, renames: HeaderRenames<'_>) -> Result<(Table, Table)> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let mut original = Vec::new();
    let mut revision = Vec::new();

    for sheet_name in workbook.sheet_names().to_owned() {
        let range = read_required_sheet(&mut workbook, &sheet_name)?;
        let declared = declared_name(&range).unwrap_or_else(|| sheet_name.trim().to_string());
        let mut table = sheet_to_table(&range, HEADER_ROW);
        for (from, to) in renames {
            table.rename_column(from, to);
        }
        debug!(
            sheet = %sheet_name,
            declared = %declared,
            rows = table.len(),
            "loaded sheet"
        );
        if declared.ends_with(REVISION_SUFFIX) {
            revision.push(table);
        } else {
            original.push(table);
        }
    }

    Ok((Table::concat(original), Table::concat(revision)))
}

/// Reads the first sheet of a workbook whose header is the first row.
#[instrument(level = "info", fields(path = %path.display()))]
pub fn read_first_sheet(path: &Path) -> Result<Table> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| StatsError::InvalidWorkbook("workbook has no sheets".into()))?;
    let range = read_required_sheet(&mut workbook, &sheet_name)?;
    Ok(sheet_to_table(&range, 0))
}

fn read_required_sheet<R: std::io::Read + std::io::Seek>(
    workbook: &mut Xlsx<R>,
    name: &str,
) -> Result<Range<DataType>> {
    let range_result = workbook
        .worksheet_range(name)
        .ok_or_else(|| StatsError::InvalidWorkbook(format!("missing sheet '{name}'")))?;
    let range = range_result.map_err(StatsError::from)?;
    Ok(range)
}

fn declared_name(range: &Range<DataType>) -> Option<String> {
    let name = cell_to_string(range.get_value((0, 0)));
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Builds a table from the physical row `header_row` onwards. Columns with a
/// blank header are ignored and fully blank data rows are skipped.
fn sheet_to_table(range: &Range<DataType>, header_row: u32) -> Table {
    let Some((start_row, start_col)) = range.start() else {
        return Table::default();
    };
    let Some((end_row, end_col)) = range.end() else {
        return Table::default();
    };
    if header_row < start_row || header_row > end_row {
        return Table::default();
    }

    let mut table = Table::default();
    let mut mapping = Vec::new();
    for col in start_col..=end_col {
        let header = cell_to_string(range.get_value((header_row, col)));
        let header = header.trim();
        if header.is_empty() {
            continue;
        }
        let idx = table.add_column(header.to_string());
        mapping.push((col, idx));
    }

    for row in header_row + 1..=end_row {
        let mut cells = vec![None; table.columns().len()];
        for &(col, idx) in &mapping {
            cells[idx] = range.get_value((row, col)).and_then(to_cell);
        }
        if cells.iter().all(Option::is_none) {
            continue;
        }
        table.push_row(cells);
    }

    table
}

fn to_cell(value: &DataType) -> Option<Cell> {
    match value {
        DataType::Empty => None,
        DataType::String(value) if value.trim().is_empty() => None,
        DataType::String(value) => Some(Cell::Text(value.clone())),
        DataType::Int(value) => Some(Cell::Int(*value)),
        DataType::Float(value) => Some(Cell::Float(*value)),
        DataType::Bool(value) => Some(Cell::Bool(*value)),
        DataType::Error(_) => None,
        other => Some(Cell::Text(other.to_string())),
    }
}

fn cell_to_string(cell: Option<&DataType>) -> String {
    match cell {
        Some(DataType::String(value)) => value.clone(),
        Some(DataType::Float(value)) => value.to_string(),
        Some(DataType::Int(value)) => value.to_string(),
        Some(DataType::Bool(value)) => value.to_string(),
        Some(DataType::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
