use std::path::Path;

use tracing::{info, instrument};

use crate::config::RowErrorPolicy;
use crate::db::{Database, people, reviews};
use crate::error::Result;
use crate::import::ImportSummary;
use crate::import::columns::{PAPER_ID, reviews as col};
use crate::io::excel_read::read_original_revision;
use crate::io::table::Row;
use crate::model::{NewPerson, RevisionReview, SubmissionReview};

/// The reproducibility question was retitled between export versions.
const HEADER_RENAMES: &[(&str, &str)] = &[(col::REPRODUCIBILITY_RETITLED, col::REPRODUCIBILITY)];

const SUBMISSION_OPTIONAL: &[&str] = &[
    col::STRENGTHS,
    col::WEAKNESSES,
    col::DETAILS,
    col::REPRODUCIBILITY,
    col::REVISION_ITEMS,
    col::CONFIDENTIAL_COMMENTS,
    col::EXTERNAL_REVIEWER,
];

const REVISION_OPTIONAL: &[&str] = &[
    col::REVISION_COMMENTS_AUTHORS,
    col::REVISION_CONFIDENTIAL_COMMENTS,
];

/// Loads the reviews workbook. Each review row is one transaction covering
/// the reviewer lookup and the review insert.
#[instrument(level = "info", skip(db), fields(path = %path.display()))]
pub async fn import_reviews(
    db: &Database,
    path: &Path,
    policy: RowErrorPolicy,
) -> Result<ImportSummary> {
    let (mut original, mut revision) = read_original_revision(path, HEADER_RENAMES)?;
    original.fill_missing(SUBMISSION_OPTIONAL, "")?;
    revision.fill_missing(REVISION_OPTIONAL, "")?;

    let mut summary = ImportSummary::default();
    for row in original.rows() {
        match import_submission_row(db, &row).await {
            Ok(()) => summary.imported += 1,
            Err(err) => summary.record_failure(policy, "submission review", row.number(), err)?,
        }
    }
    for row in revision.rows() {
        match import_revision_row(db, &row).await {
            Ok(()) => summary.imported += 1,
            Err(err) => summary.record_failure(policy, "revision review", row.number(), err)?,
        }
    }
    info!(%summary, "reviews imported");
    Ok(summary)
}

pub(crate) fn reviewer_of(row: &Row<'_>, name: &str, email: &str) -> Result<NewPerson> {
    Ok(NewPerson::bare(
        row.text(name)?.trim(),
        row.text(email)?.trim(),
    ))
}

async fn import_submission_row(db: &Database, row: &Row<'_>) -> Result<()> {
    let person = reviewer_of(row, col::REVIEWER_NAME, col::REVIEWER_EMAIL)?;
    let review = SubmissionReview {
        submission_id: row.int(PAPER_ID)?,
        overall_rating: row.text(col::OVERALL_RATING)?,
        relevance: row.text(col::RELEVANCE)?,
        revision_possible: row.text(col::REVISION_POSSIBLE)?,
        paper_flavor: row.text(col::PAPER_FLAVOR)?,
        summary: row.text(col::SUMMARY)?,
        strengths: row.text(col::STRENGTHS)?,
        weaknesses: row.text(col::WEAKNESSES)?,
        novelty: row.text(col::NOVELTY)?,
        significance: row.text(col::SIGNIFICANCE)?,
        technical_depth: row.text(col::TECHNICAL_DEPTH)?,
        experiments: row.text(col::EXPERIMENTS)?,
        presentation: row.text(col::PRESENTATION)?,
        details: row.text(col::DETAILS)?,
        reproducibility: row.text(col::REPRODUCIBILITY)?,
        revision_items: row.text(col::REVISION_ITEMS)?,
        confidence: row.text(col::CONFIDENCE)?,
        confidential_comments: row.text(col::CONFIDENTIAL_COMMENTS)?,
        external_reviewer: row.text(col::EXTERNAL_REVIEWER)?,
        trainee_agreement: row.text(col::TRAINEE_AGREEMENT)?,
    };

    let mut tx = db.begin().await?;
    let reviewer = people::resolve(&mut tx, &person).await?;
    reviews::insert_submission_review(&mut tx, reviewer, &review).await?;
    tx.commit().await?;
    Ok(())
}

async fn import_revision_row(db: &Database, row: &Row<'_>) -> Result<()> {
    let person = reviewer_of(row, col::REVIEWER_NAME, col::REVIEWER_EMAIL)?;
    let review = RevisionReview {
        revision_id: row.int(PAPER_ID)?,
        recommendation: row.text(col::REVISION_RECOMMENDATION)?,
        revision_addressed: row.text(col::REVISION_ADDRESSED)?,
        justification: row.text(col::REVISION_JUSTIFICATION)?,
        comments_authors: row.text(col::REVISION_COMMENTS_AUTHORS)?,
        confidential_comments: row.text(col::REVISION_CONFIDENTIAL_COMMENTS)?,
    };

    let mut tx = db.begin().await?;
    let reviewer = people::resolve(&mut tx, &person).await?;
    reviews::insert_revision_review(&mut tx, reviewer, &review).await?;
    tx.commit().await?;
    Ok(())
}
