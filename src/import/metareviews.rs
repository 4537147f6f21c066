use std::path::Path;

use tracing::{info, instrument};

use crate::config::RowErrorPolicy;
use crate::db::{Database, people, reviews};
use crate::error::Result;
use crate::import::ImportSummary;
use crate::import::columns::{PAPER_ID, metareviews as col};
use crate::import::reviews::reviewer_of;
use crate::io::excel_read::read_original_revision;
use crate::io::table::Row;
use crate::model::{RevisionMetareview, SubmissionMetareview};

/// Loads the meta-reviews workbook. Paper rows must already exist.
#[instrument(level = "info", skip(db), fields(path = %path.display()))]
pub async fn import_metareviews(
    db: &Database,
    path: &Path,
    policy: RowErrorPolicy,
) -> Result<ImportSummary> {
    let (mut original, revision) = read_original_revision(path, &[])?;
    original.fill_missing(&[col::REVISION_ITEMS], "")?;

    let mut summary = ImportSummary::default();
    for row in original.rows() {
        match import_submission_row(db, &row).await {
            Ok(()) => summary.imported += 1,
            Err(err) => summary.record_failure(policy, "submission metareview", row.number(), err)?,
        }
    }
    for row in revision.rows() {
        match import_revision_row(db, &row).await {
            Ok(()) => summary.imported += 1,
            Err(err) => summary.record_failure(policy, "revision metareview", row.number(), err)?,
        }
    }
    info!(%summary, "metareviews imported");
    Ok(summary)
}

async fn import_submission_row(db: &Database, row: &Row<'_>) -> Result<()> {
    let person = reviewer_of(row, col::REVIEWER_NAME, col::REVIEWER_EMAIL)?;
    let metareview = SubmissionMetareview {
        submission_id: row.int(PAPER_ID)?,
        overall_rating: row.text(col::OVERALL_RATING)?,
        summary: row.text(col::SUMMARY)?,
        revision_items: row.text(col::REVISION_ITEMS)?,
    };

    let mut tx = db.begin().await?;
    let reviewer = people::resolve(&mut tx, &person).await?;
    reviews::insert_submission_metareview(&mut tx, reviewer, &metareview).await?;
    tx.commit().await?;
    Ok(())
}

async fn import_revision_row(db: &Database, row: &Row<'_>) -> Result<()> {
    let person = reviewer_of(row, col::REVIEWER_NAME, col::REVIEWER_EMAIL)?;
    let metareview = RevisionMetareview {
        revision_id: row.int(PAPER_ID)?,
        overall_rating: row.text(col::OVERALL_RATING)?,
        comments: row.text(col::REVISION_COMMENTS)?,
    };

    let mut tx = db.begin().await?;
    let reviewer = people::resolve(&mut tx, &person).await?;
    reviews::insert_revision_metareview(&mut tx, reviewer, &metareview).await?;
    tx.commit().await?;
    Ok(())
}
