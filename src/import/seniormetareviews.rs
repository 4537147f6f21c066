use std::path::Path;

use tracing::{info, instrument};

use crate::config::RowErrorPolicy;
use crate::db::{Database, people, reviews};
use crate::error::Result;
use crate::import::ImportSummary;
use crate::import::columns::{PAPER_ID, seniormetareviews as col};
use crate::import::reviews::reviewer_of;
use crate::io::excel_read::read_original_revision;
use crate::io::table::Row;
use crate::model::PaperKind;

/// Loads the senior meta-reviews workbook. Only the `(paper, reviewer)`
/// assignment is recorded. The reviewer headers are assumed, see
/// [`col::REVIEWER_NAME`].
#[instrument(level = "info", skip(db), fields(path = %path.display()))]
pub async fn import_seniormetareviews(
    db: &Database,
    path: &Path,
    policy: RowErrorPolicy,
) -> Result<ImportSummary> {
    let (original, revision) = read_original_revision(path, &[])?;

    let mut summary = ImportSummary::default();
    for (table, kind) in [
        (&original, PaperKind::Submission),
        (&revision, PaperKind::Revision),
    ] {
        for row in table.rows() {
            match import_row(db, &row, kind).await {
                Ok(()) => summary.imported += 1,
                Err(err) => summary.record_failure(policy, "seniormetareview", row.number(), err)?,
            }
        }
    }
    info!(%summary, "seniormetareviews imported");
    Ok(summary)
}

async fn import_row(db: &Database, row: &Row<'_>, kind: PaperKind) -> Result<()> {
    let person = reviewer_of(row, col::REVIEWER_NAME, col::REVIEWER_EMAIL)?;
    let paper_id = row.int(PAPER_ID)?;

    let mut tx = db.begin().await?;
    let reviewer = people::resolve(&mut tx, &person).await?;
    reviews::insert_seniormetareview(&mut tx, kind, paper_id, reviewer).await?;
    tx.commit().await?;
    Ok(())
}
