use sqlx::SqliteConnection;

use crate::error::Result;
use crate::model::{
    PaperKind, PersonId, RevisionMetareview, RevisionReview, SubmissionMetareview,
    SubmissionReview,
};

pub async fn insert_submission_review(
    conn: &mut SqliteConnection,
    reviewer: PersonId,
    review: &SubmissionReview,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO submission_review (submission_id, reviewer_id, overall_rating, relevance, \
         revision_possible, paper_flavor, summary, strengths, weaknesses, novelty, significance, \
         technical_depth, experiments, presentation, details, reproducibility, revision_items, \
         confidence, confidential_comments, external_reviewer, trainee_agreement) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(review.submission_id)
    .bind(reviewer.0)
    .bind(&review.overall_rating)
    .bind(&review.relevance)
    .bind(&review.revision_possible)
    .bind(&review.paper_flavor)
    .bind(&review.summary)
    .bind(&review.strengths)
    .bind(&review.weaknesses)
    .bind(&review.novelty)
    .bind(&review.significance)
    .bind(&review.technical_depth)
    .bind(&review.experiments)
    .bind(&review.presentation)
    .bind(&review.details)
    .bind(&review.reproducibility)
    .bind(&review.revision_items)
    .bind(&review.confidence)
    .bind(&review.confidential_comments)
    .bind(&review.external_reviewer)
    .bind(&review.trainee_agreement)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

pub async fn insert_revision_review(
    conn: &mut SqliteConnection,
    reviewer: PersonId,
    review: &RevisionReview,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO revision_review (revision_id, reviewer_id, recommendation, \
         revision_addressed, justification, comments_authors, confidential_comments) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(review.revision_id)
    .bind(reviewer.0)
    .bind(&review.recommendation)
    .bind(&review.revision_addressed)
    .bind(&review.justification)
    .bind(&review.comments_authors)
    .bind(&review.confidential_comments)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

pub async fn insert_submission_metareview(
    conn: &mut SqliteConnection,
    reviewer: PersonId,
    metareview: &SubmissionMetareview,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO submission_metareview (submission_id, reviewer_id, overall_rating, \
         summary, revision_items) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(metareview.submission_id)
    .bind(reviewer.0)
    .bind(&metareview.overall_rating)
    .bind(&metareview.summary)
    .bind(&metareview.revision_items)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

pub async fn insert_revision_metareview(
    conn: &mut SqliteConnection,
    reviewer: PersonId,
    metareview: &RevisionMetareview,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO revision_metareview (revision_id, reviewer_id, overall_rating, comments) \
         VALUES (?, ?, ?, ?)",
    )
    .bind(metareview.revision_id)
    .bind(reviewer.0)
    .bind(&metareview.overall_rating)
    .bind(&metareview.comments)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

/// Senior meta-reviews carry no answers, only the `(paper, reviewer)` pair.
pub async fn insert_seniormetareview(
    conn: &mut SqliteConnection,
    kind: PaperKind,
    paper_id: i64,
    reviewer: PersonId,
) -> Result<()> {
    let sql = format!(
        "INSERT INTO {} ({}, reviewer_id) VALUES (?, ?)",
        kind.seniormetareview_table(),
        kind.paper_column()
    );
    sqlx::query(&sql)
        .bind(paper_id)
        .bind(reviewer.0)
        .execute(&mut *conn)
        .await?;
    Ok(())
}
