mod common;

use cmt_stats::StatsError;
use cmt_stats::io::excel_read::{read_first_sheet, read_original_revision};
use cmt_stats::io::table::Cell;
use common::{ExportSheet, strings, write_export};
use tempfile::tempdir;

#[test]
fn sheets_are_split_by_declared_revision_suffix() {
    let dir = tempdir().expect("temporary directory");
    let path = dir.path().join("papers.xlsx");
    write_export(
        &path,
        &[
            ExportSheet {
                tab: "Jan 2021",
                declared: "Jan 2021",
                header: vec!["Paper ID", "Paper Title"],
                rows: vec![
                    strings(["1", "Fast Joins"]),
                    strings(["2", "Slow Joins"]),
                    strings(["3", "Any Joins"]),
                ],
            },
            ExportSheet {
                tab: "Jan 2021 Revision",
                declared: "Jan 2021 Revision",
                header: vec!["Paper ID", "Paper Title"],
                rows: vec![
                    strings(["101", "Fast Joins (Revision)"]),
                    strings(["102", "Slow Joins (Revision)"]),
                ],
            },
        ],
    );

    let (original, revision) = read_original_revision(&path, &[]).expect("export read");

    assert_eq!(original.len(), 3);
    assert_eq!(revision.len(), 2);
    let ids: Vec<i64> = revision
        .rows()
        .map(|row| row.int("Paper ID").expect("paper id"))
        .collect();
    assert_eq!(ids, [101, 102]);
}

#[test]
fn declared_name_in_first_cell_wins_over_tab_name() {
    let dir = tempdir().expect("temporary directory");
    let path = dir.path().join("papers.xlsx");
    write_export(
        &path,
        &[
            ExportSheet {
                tab: "Sheet1",
                declared: "Feb 2021 Revision",
                header: vec!["Paper ID"],
                rows: vec![strings(["201"])],
            },
            ExportSheet {
                tab: "Mar 2021 Revision",
                declared: "",
                header: vec!["Paper ID"],
                rows: vec![strings(["301"])],
            },
        ],
    );

    let (original, revision) = read_original_revision(&path, &[]).expect("export read");

    assert!(original.is_empty());
    assert_eq!(revision.len(), 2);
}

#[test]
fn concatenated_sheets_carry_the_union_of_columns() {
    let dir = tempdir().expect("temporary directory");
    let path = dir.path().join("papers.xlsx");
    write_export(
        &path,
        &[
            ExportSheet {
                tab: "Jan 2021",
                declared: "Jan 2021",
                header: vec!["Paper ID", "Paper Title"],
                rows: vec![strings(["1", "Fast Joins"])],
            },
            ExportSheet {
                tab: "Feb 2021",
                declared: "Feb 2021",
                header: vec!["Paper ID", "Abstract"],
                rows: vec![strings(["2", "About joins"])],
            },
        ],
    );

    let (original, _) = read_original_revision(&path, &[]).expect("export read");

    assert_eq!(original.columns(), ["Paper ID", "Paper Title", "Abstract"]);
    let rows: Vec<_> = original.rows().collect();
    assert_eq!(rows[0].value("Abstract").expect("column"), None);
    assert_eq!(
        rows[1].value("Abstract").expect("column"),
        Some(&Cell::Text("About joins".to_string()))
    );
}

#[test]
fn header_renames_apply_before_concatenation() {
    let dir = tempdir().expect("temporary directory");
    let path = dir.path().join("reviews.xlsx");
    write_export(
        &path,
        &[
            ExportSheet {
                tab: "Jan 2021",
                declared: "Jan 2021",
                header: vec!["Paper ID", "Q14 (Old)"],
                rows: vec![strings(["1", "yes"])],
            },
            ExportSheet {
                tab: "Feb 2021",
                declared: "Feb 2021",
                header: vec!["Paper ID", "Q14 (New)"],
                rows: vec![strings(["2", "no"])],
            },
        ],
    );

    let (original, _) =
        read_original_revision(&path, &[("Q14 (New)", "Q14 (Old)")]).expect("export read");

    assert_eq!(original.columns(), ["Paper ID", "Q14 (Old)"]);
    let answers: Vec<String> = original
        .rows()
        .map(|row| row.text("Q14 (Old)").expect("answer"))
        .collect();
    assert_eq!(answers, ["yes", "no"]);
}

#[test]
fn unreadable_workbooks_are_reported() {
    let dir = tempdir().expect("temporary directory");

    let missing = read_first_sheet(&dir.path().join("absent.xlsx")).expect_err("no file");
    assert!(matches!(missing, StatsError::ExcelRead(_)), "unexpected error: {missing}");

    let not_excel = dir.path().join("mapping.xlsx");
    std::fs::write(&not_excel, "Revision ID\tOriginalSubmission ID\n").expect("text file");
    let garbled = read_first_sheet(&not_excel).expect_err("not a workbook");
    assert!(matches!(garbled, StatsError::ExcelRead(_)), "unexpected error: {garbled}");
}
