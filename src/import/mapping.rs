use std::path::Path;

use tracing::{info, instrument, warn};

use crate::db::{Database, papers};
use crate::error::Result;
use crate::import::ImportSummary;
use crate::import::columns::mapping as col;
use crate::io::excel_read::read_first_sheet;
use crate::io::table::Table;

/// Links revisions to the submissions they revise from a two-column
/// `(Revision ID, OriginalSubmission ID)` workbook. All updates share one
/// transaction. Rows without an original submission id are skipped, which
/// lets the advisory mapping suggestions be fed back unedited.
#[instrument(level = "info", skip(db), fields(path = %path.display()))]
pub async fn import_mapping(db: &Database, path: &Path) -> Result<ImportSummary> {
    let table = read_first_sheet(path)?;
    let pairs = mapping_pairs(&table)?;

    let mut tx = db.begin().await?;
    let unmatched = papers::link_revisions(&mut tx, &pairs).await?;
    tx.commit().await?;

    let summary = ImportSummary {
        imported: pairs.len() - unmatched.len(),
        failed: unmatched.len(),
    };
    info!(%summary, "submission/revision mapping imported");
    Ok(summary)
}

/// Extracts `(revision id, submission id)` pairs.
pub fn mapping_pairs(table: &Table) -> Result<Vec<(i64, i64)>> {
    let mut pairs = Vec::with_capacity(table.len());
    for row in table.rows() {
        let revision_id = row.int(col::REVISION_ID)?;
        if row.value(col::ORIGINAL_SUBMISSION_ID)?.is_none() {
            warn!(revision_id, "no original submission given, skipping");
            continue;
        }
        pairs.push((revision_id, row.int(col::ORIGINAL_SUBMISSION_ID)?));
    }
    Ok(pairs)
}
