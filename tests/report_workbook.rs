use calamine::{Reader, Xlsx, open_workbook};
use cmt_stats::io::excel_read::read_first_sheet;
use cmt_stats::io::excel_write::write_reports;
use cmt_stats::report::ReportTable;
use tempfile::tempdir;

#[test]
fn report_workbook_round_trips_through_the_reader() {
    let mut mapping = ReportTable::new(
        "Suggested mapping",
        ["Revision ID", "OriginalSubmission ID", "Revision Title", "IsAlreadyMapped?"],
    );
    mapping.push(["101", "1", "Fast Joins (Revision)", "false"]);
    mapping.push(["102", "", "Unmatched", "false"]);
    let empty = ReportTable::new("Mismatched titles", ["Revision ID", "Revision Title"]);

    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("reports.xlsx");
    write_reports(&path, &[mapping, empty]).expect("Excel written");

    let workbook: Xlsx<_> = open_workbook(&path).expect("workbook opened");
    assert_eq!(
        workbook.sheet_names().to_owned(),
        ["Suggested mapping", "Mismatched titles"]
    );

    let table = read_first_sheet(&path).expect("Excel read");
    assert_eq!(
        table.columns(),
        ["Revision ID", "OriginalSubmission ID", "Revision Title", "IsAlreadyMapped?"]
    );
    let rows: Vec<_> = table.rows().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].int("OriginalSubmission ID").expect("id"), 1);
    assert_eq!(rows[1].value("OriginalSubmission ID").expect("column"), None);
    assert_eq!(rows[1].text("Revision Title").expect("title"), "Unmatched");
}

#[test]
fn long_titles_are_cut_to_valid_sheet_names() {
    let table = ReportTable::new(
        "Acceptance by track (submission) with a very long title",
        ["Track"],
    );
    let temp_dir = tempdir().expect("temporary directory");
    let path = temp_dir.path().join("long.xlsx");

    write_reports(&path, &[table]).expect("Excel written");

    let workbook: Xlsx<_> = open_workbook(&path).expect("workbook opened");
    let names = workbook.sheet_names().to_owned();
    assert_eq!(names.len(), 1);
    assert_eq!(names[0].chars().count(), 31);
}
