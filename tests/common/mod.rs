//! Builders for export workbooks shaped like the platform's downloads.

#![allow(dead_code)]

use std::path::Path;

use cmt_stats::import::columns::{PAPER_ID, papers as col};
use rust_xlsxwriter::Workbook;

/// One worksheet of an export: tab name, declared name in A1, the header
/// written on the third row, and data rows below it.
pub struct ExportSheet<'a> {
    pub tab: &'a str,
    pub declared: &'a str,
    pub header: Vec<&'a str>,
    pub rows: Vec<Vec<String>>,
}

/// Writes a multi-sheet export. Values that parse as numbers are stored as
/// numeric cells and blank values are left empty.
pub fn write_export(path: &Path, sheets: &[ExportSheet<'_>]) {
    let mut workbook = Workbook::new();
    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.tab).expect("sheet name");
        if !sheet.declared.is_empty() {
            worksheet.write_string(0, 0, sheet.declared).expect("declared name");
        }
        worksheet.write_string(1, 0, "Template").expect("template row");
        for (col_idx, header) in sheet.header.iter().enumerate() {
            worksheet
                .write_string(2, col_idx as u16, *header)
                .expect("header");
        }
        for (row_idx, row) in sheet.rows.iter().enumerate() {
            write_row(worksheet, 3 + row_idx as u32, row);
        }
    }
    workbook.save(path).expect("export saved");
}

/// Writes a single-sheet workbook with the header on the first row.
pub fn write_simple(path: &Path, header: &[&str], rows: &[Vec<String>]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (col_idx, header) in header.iter().enumerate() {
        worksheet
            .write_string(0, col_idx as u16, *header)
            .expect("header");
    }
    for (row_idx, row) in rows.iter().enumerate() {
        write_row(worksheet, 1 + row_idx as u32, row);
    }
    workbook.save(path).expect("workbook saved");
}

fn write_row(worksheet: &mut rust_xlsxwriter::Worksheet, row: u32, values: &[String]) {
    for (col_idx, value) in values.iter().enumerate() {
        let col = col_idx as u16;
        if value.is_empty() {
            continue;
        }
        match value.parse::<f64>() {
            Ok(number) => worksheet.write_number(row, col, number).expect("number cell"),
            Err(_) => worksheet.write_string(row, col, value).expect("text cell"),
        };
    }
}

/// Every column of the papers export.
pub fn paper_header() -> Vec<&'static str> {
    vec![
        PAPER_ID,
        col::TITLE,
        col::ABSTRACT,
        col::PRIMARY_AUTHOR_NAME,
        col::PRIMARY_AUTHOR_EMAIL,
        col::TRACK_NAME,
        col::PRIMARY_SUBJECT_AREA,
        col::SECONDARY_SUBJECT_AREAS,
        col::CONFLICTS,
        col::ASSIGNED,
        col::COMPLETED,
        col::BIDS,
        col::DISCUSSION,
        col::STATUS,
        col::EMBARGO_AGREEMENT,
        col::CONFLICT_AGREEMENT,
        col::CATEGORY,
        col::AUTHORS_AGREEMENT,
        col::AVAILABILITY,
        col::AUTHORS,
        col::AUTHOR_EMAILS,
        col::REVIEWERS,
        col::REVIEWER_EMAILS,
        col::METAREVIEWERS,
        col::METAREVIEWER_EMAILS,
        col::SENIORMETAREVIEWERS,
        col::SENIORMETAREVIEWER_EMAILS,
    ]
}

/// A papers row in [`paper_header`] order. Columns not named in `values`
/// get a plausible default.
pub fn paper_row(values: &[(&str, &str)]) -> Vec<String> {
    paper_header()
        .into_iter()
        .map(|column| {
            values
                .iter()
                .find(|(name, _)| *name == column)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| default_paper_value(column).to_string())
        })
        .collect()
}

fn default_paper_value(column: &str) -> &'static str {
    match column {
        col::TRACK_NAME => "Research -> January 2021",
        col::CONFLICTS => "2",
        col::ASSIGNED => "3",
        col::COMPLETED => "100%",
        col::BIDS => "4",
        col::DISCUSSION => "0 (0)",
        col::STATUS => "Reject",
        col::EMBARGO_AGREEMENT | col::CONFLICT_AGREEMENT | col::AUTHORS_AGREEMENT => "Agreed",
        col::CATEGORY => "Regular Research Paper",
        _ => "",
    }
}

pub fn strings<const N: usize>(values: [&str; N]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
