use std::path::Path;

use tracing::{info, instrument};

use crate::config::RowErrorPolicy;
use crate::db::{Database, people};
use crate::error::Result;
use crate::import::ImportSummary;
use crate::import::columns::people as col;
use crate::io::people_tsv::read_people_export;
use crate::io::table::Row;
use crate::model::NewPerson;
use crate::parse::full_name;

/// Loads the people export, the only source that carries countries.
#[instrument(level = "info", skip(db), fields(path = %path.display()))]
pub async fn import_people(
    db: &Database,
    path: &Path,
    policy: RowErrorPolicy,
) -> Result<ImportSummary> {
    let mut table = read_people_export(path)?;
    table.fill_missing(
        &[
            col::FIRST_NAME,
            col::MIDDLE_INITIAL,
            col::LAST_NAME,
            col::ORGANIZATION,
        ],
        "",
    )?;

    let mut summary = ImportSummary::default();
    for row in table.rows() {
        match import_row(db, &row).await {
            Ok(()) => summary.imported += 1,
            Err(err) => summary.record_failure(policy, "person", row.number(), err)?,
        }
    }
    info!(%summary, "people imported");
    Ok(summary)
}

async fn import_row(db: &Database, row: &Row<'_>) -> Result<()> {
    let person = NewPerson {
        name: full_name(
            &row.text(col::FIRST_NAME)?,
            &row.text(col::MIDDLE_INITIAL)?,
            &row.text(col::LAST_NAME)?,
        ),
        email: row.text(col::EMAIL)?,
        affiliation: row.text(col::ORGANIZATION)?,
        country: row.opt_text(col::COUNTRY)?,
    };
    let mut tx = db.begin().await?;
    people::resolve(&mut tx, &person).await?;
    tx.commit().await?;
    Ok(())
}
