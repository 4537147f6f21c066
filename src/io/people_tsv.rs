use std::path::Path;

use csv::ReaderBuilder;
use tracing::instrument;

use crate::error::Result;
use crate::io::table::{Cell, Table};

/// The export prefixes its first header with a comment marker.
const COMMENTED_FIRST_COLUMN: &str = "# First Name";

/// Reads the tab-separated people export into a table of text cells. Empty
/// fields are treated as absent and double-quoted fields are unquoted.
#[instrument(level = "info", fields(path = %path.display()))]
pub fn read_people_export(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let mut table = Table::new(headers.iter().map(|header| header.trim().to_string()));
    table.rename_column(COMMENTED_FIRST_COLUMN, "First Name");

    for record in reader.records() {
        let record = record?;
        let cells = record
            .iter()
            .map(|field| (!field.is_empty()).then(|| Cell::Text(field.to_string())))
            .collect();
        table.push_row(cells);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_export_and_renames_first_column() {
        let dir = tempdir().expect("temporary directory");
        let path = dir.path().join("people.txt");
        fs::write(
            &path,
            "# First Name\tMiddle Initial (optional)\tLast Name\tE-mail\tOrganization\tCountry\n\
             Ada\t\tLovelace\tada@x.org\tAnalytical\tUnited Kingdom\n\
             Alan\tM\tTuring\talan@x.org\tBletchley\t\n",
        )
        .expect("export written");

        let table = read_people_export(&path).expect("export read");

        assert_eq!(table.len(), 2);
        assert!(table.has_column("First Name"));
        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows[0].opt_text("Middle Initial (optional)").unwrap(), None);
        assert_eq!(rows[1].opt_text("Country").unwrap(), None);
        assert_eq!(rows[1].text("E-mail").unwrap(), "alan@x.org");
    }

    #[test]
    fn quoted_fields_lose_their_quotes() {
        let dir = tempdir().expect("temporary directory");
        let path = dir.path().join("people.txt");
        fs::write(
            &path,
            "# First Name\tLast Name\tE-mail\tOrganization\n\
             \"Grace\"\tHopper\tgrace@x.org\t\"Navy\tYale\"\n",
        )
        .expect("export written");

        let table = read_people_export(&path).expect("export read");

        let row = table.rows().next().unwrap();
        assert_eq!(row.text("First Name").unwrap(), "Grace");
        assert_eq!(row.text("Organization").unwrap(), "Navy\tYale");
    }
}
