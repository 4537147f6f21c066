use std::path::Path;

use tracing::{debug, info, instrument};

use crate::config::RowErrorPolicy;
use crate::db::{Database, papers, people};
use crate::error::Result;
use crate::import::ImportSummary;
use crate::import::columns::{PAPER_ID, papers as col};
use crate::io::excel_read::read_original_revision;
use crate::io::table::{Row, Table};
use crate::model::{
    NewPerson, NewRevision, NewSubmission, PaperFields, PaperKind, PaperRole, PersonId,
    RoleAssignment,
};
use crate::parse::separate_name_affiliation_email;

/// Columns that may be blank in the export and default to empty text.
const OPTIONAL_TEXT_COLUMNS: &[&str] = &[
    col::ABSTRACT,
    col::PRIMARY_SUBJECT_AREA,
    col::SECONDARY_SUBJECT_AREAS,
    col::REVIEWERS,
    col::REVIEWER_EMAILS,
    col::METAREVIEWERS,
    col::METAREVIEWER_EMAILS,
    col::SENIORMETAREVIEWERS,
    col::SENIORMETAREVIEWER_EMAILS,
    col::AVAILABILITY,
];

/// Listing columns per role as `(role, names column, emails column)`.
const ROLE_LISTINGS: [(PaperRole, &str, &str); 4] = [
    (PaperRole::Author, col::AUTHORS, col::AUTHOR_EMAILS),
    (PaperRole::Reviewer, col::REVIEWERS, col::REVIEWER_EMAILS),
    (
        PaperRole::Metareviewer,
        col::METAREVIEWERS,
        col::METAREVIEWER_EMAILS,
    ),
    (
        PaperRole::Seniormetareviewer,
        col::SENIORMETAREVIEWERS,
        col::SENIORMETAREVIEWER_EMAILS,
    ),
];

/// Loads the papers workbook: original submissions first, then revisions.
#[instrument(level = "info", skip(db), fields(path = %path.display()))]
pub async fn import_papers(
    db: &Database,
    path: &Path,
    policy: RowErrorPolicy,
) -> Result<ImportSummary> {
    let (mut original, mut revision) = read_original_revision(path, &[])?;
    original.fill_missing(OPTIONAL_TEXT_COLUMNS, "")?;
    revision.fill_missing(OPTIONAL_TEXT_COLUMNS, "")?;

    let mut summary = import_kind(db, &original, PaperKind::Submission, policy).await?;
    summary += import_kind(db, &revision, PaperKind::Revision, policy).await?;
    Ok(summary)
}

async fn import_kind(
    db: &Database,
    table: &Table,
    kind: PaperKind,
    policy: RowErrorPolicy,
) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();
    for row in table.rows() {
        match import_row(db, &row, kind).await {
            Ok(()) => summary.imported += 1,
            Err(err) => summary.record_failure(policy, kind.paper_table(), row.number(), err)?,
        }
    }
    info!(%kind, %summary, "papers imported");
    Ok(summary)
}

/// Writes one paper in three transactions: the people it references, the
/// paper itself, and its role rows. A failure in a later step leaves the
/// earlier steps committed.
async fn import_row(db: &Database, row: &Row<'_>, kind: PaperKind) -> Result<()> {
    let mut tx = db.begin().await?;
    let mut roles = Vec::new();
    for (role, names, emails) in ROLE_LISTINGS {
        let listed = separate_name_affiliation_email(&row.text(names)?, &row.text(emails)?);
        for (position, entry) in listed.into_iter().enumerate() {
            let person = NewPerson {
                name: entry.name,
                email: entry.email,
                affiliation: entry.affiliation,
                country: None,
            };
            roles.push(RoleAssignment {
                role,
                position: position as i64,
                person: people::resolve(&mut tx, &person).await?,
            });
        }
    }
    let primary_author = NewPerson::bare(
        row.text(col::PRIMARY_AUTHOR_NAME)?.trim(),
        row.text(col::PRIMARY_AUTHOR_EMAIL)?.trim(),
    );
    let primary_author = people::resolve(&mut tx, &primary_author).await?;
    tx.commit().await?;

    let paper = paper_fields(row, primary_author)?;
    let paper_id = paper.id;
    let mut tx = db.begin().await?;
    match kind {
        PaperKind::Submission => {
            papers::insert_submission(&mut tx, &NewSubmission { paper }).await?;
        }
        PaperKind::Revision => {
            let revision = NewRevision {
                paper,
                submission_id: None,
            };
            papers::insert_revision(&mut tx, &revision).await?;
        }
    }
    tx.commit().await?;

    let roles = collapse_duplicates(roles);
    let mut tx = db.begin().await?;
    papers::insert_roles(&mut tx, kind, paper_id, &roles).await?;
    tx.commit().await?;
    debug!(%kind, paper_id, roles = roles.len(), "paper imported");
    Ok(())
}

fn paper_fields(row: &Row<'_>, primary_author: PersonId) -> Result<PaperFields> {
    Ok(PaperFields {
        id: row.int(PAPER_ID)?,
        title: row.text(col::TITLE)?,
        abstract_text: row.text(col::ABSTRACT)?,
        track_name: row.text(col::TRACK_NAME)?,
        primary_subject_area: row.text(col::PRIMARY_SUBJECT_AREA)?,
        secondary_subject_areas: row.text(col::SECONDARY_SUBJECT_AREAS)?,
        conflicts: row.int(col::CONFLICTS)?,
        assigned: row.int(col::ASSIGNED)?,
        completed: row.float(col::COMPLETED)?,
        bids: row.int(col::BIDS)?,
        discussion: row.text(col::DISCUSSION)?,
        status: row.text(col::STATUS)?,
        embargo_agreement: row.text(col::EMBARGO_AGREEMENT)?,
        conflict_agreement: row.text(col::CONFLICT_AGREEMENT)?,
        category: row.text(col::CATEGORY)?,
        authors_agreement: row.text(col::AUTHORS_AGREEMENT)?,
        availability: row.text(col::AVAILABILITY)?,
        primary_author,
    })
}

/// Identical entries (same role, position, and person) are written once.
fn collapse_duplicates(mut roles: Vec<RoleAssignment>) -> Vec<RoleAssignment> {
    roles.sort();
    roles.dedup();
    roles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_keeps_distinct_positions() {
        let entry = |role, position, person| RoleAssignment {
            role,
            position,
            person: PersonId(person),
        };
        let roles = collapse_duplicates(vec![
            entry(PaperRole::Reviewer, 0, 7),
            entry(PaperRole::Author, 1, 2),
            entry(PaperRole::Author, 0, 1),
            entry(PaperRole::Reviewer, 0, 7),
        ]);

        assert_eq!(
            roles,
            vec![
                entry(PaperRole::Author, 0, 1),
                entry(PaperRole::Author, 1, 2),
                entry(PaperRole::Reviewer, 0, 7),
            ]
        );
    }
}
