//! Reports about the link between submissions and their revisions.

use std::collections::{BTreeMap, HashMap};

use futures::TryStreamExt;
use tracing::{debug, instrument};

use crate::db::Database;
use crate::error::Result;
use crate::model::{PaperRole, RevisionStatus, SubmissionStatus};
use crate::parse::strip_revision_suffix;
use crate::report::ReportTable;

const REVISION_REQUESTED: [SubmissionStatus; 2] =
    [SubmissionStatus::MajorRevision, SubmissionStatus::MinorRevision];

/// Submissions whose decision asked for a revision but that no revision row
/// points at yet.
#[instrument(level = "info", skip_all)]
pub async fn submissions_needing_revision(db: &Database) -> Result<ReportTable> {
    let rows: Vec<(i64, String, String, String)> = sqlx::query_as(
        "SELECT s.id, s.title, p.name, p.email
         FROM submission s
         JOIN people p ON p.id = s.primary_author_id
         LEFT JOIN revision r ON r.submission_id = s.id
         WHERE s.status IN (?, ?) AND r.id IS NULL
         ORDER BY s.id",
    )
    .bind(REVISION_REQUESTED[0].as_str())
    .bind(REVISION_REQUESTED[1].as_str())
    .fetch_all(db.pool())
    .await?;

    let mut table = ReportTable::new(
        "Submissions needing a revision",
        [
            "Paper ID",
            "Paper Title",
            "Primary Contact Author Name",
            "Primary Contact Author Email",
        ],
    );
    for (id, title, name, email) in rows {
        table.push([id.to_string(), title, name, email]);
    }
    Ok(table)
}

/// Accepted submissions and revisions, ordered by paper id.
#[instrument(level = "info", skip_all)]
pub async fn accepted_papers(db: &Database) -> Result<ReportTable> {
    let rows: Vec<(i64, String, String, String, String)> = sqlx::query_as(
        "SELECT id, title, name, email, track_name FROM (
             SELECT s.id, s.title, p.name, p.email, s.track_name
             FROM submission s JOIN people p ON p.id = s.primary_author_id
             WHERE s.status = ?
             UNION ALL
             SELECT r.id, r.title, p.name, p.email, r.track_name
             FROM revision r JOIN people p ON p.id = r.primary_author_id
             WHERE r.status = ?
         ) ORDER BY id",
    )
    .bind(SubmissionStatus::Accept.as_str())
    .bind(RevisionStatus::Accept.as_str())
    .fetch_all(db.pool())
    .await?;

    let mut table = ReportTable::new(
        "Accepted papers",
        [
            "Paper ID",
            "Paper Title",
            "Primary Contact Author Name",
            "Primary Contact Author Email",
            "Track Name",
        ],
    );
    for (id, title, name, email, track) in rows {
        table.push([id.to_string(), title, name, email, track]);
    }
    Ok(table)
}

/// Title variants tried in order when matching a revision to a submission.
fn title_candidates(title: &str) -> [&str; 4] {
    let stripped = strip_revision_suffix(title);
    [title, title.trim(), stripped, stripped.trim()]
}

/// Advisory revision to submission mapping. Unlinked revisions are matched
/// by title against unlinked submissions that asked for a revision; already
/// linked pairs are listed too. The output has the layout the mapping
/// importer reads, with an empty submission id where nothing matched.
#[instrument(level = "info", skip_all)]
pub async fn suggest_mapping(db: &Database) -> Result<ReportTable> {
    let candidates: Vec<(i64, String)> = sqlx::query_as(
        "SELECT s.id, s.title
         FROM submission s
         LEFT JOIN revision r ON r.submission_id = s.id
         WHERE s.status IN (?, ?) AND r.id IS NULL",
    )
    .bind(REVISION_REQUESTED[0].as_str())
    .bind(REVISION_REQUESTED[1].as_str())
    .fetch_all(db.pool())
    .await?;
    let by_title: HashMap<String, i64> = candidates
        .into_iter()
        .map(|(id, title)| (title, id))
        .collect();

    let mut table = ReportTable::new(
        "Suggested mapping",
        [
            "Revision ID",
            "OriginalSubmission ID",
            "Revision Title",
            "IsAlreadyMapped?",
        ],
    );

    let mut unlinked = sqlx::query_as::<_, (i64, String)>(
        "SELECT id, title FROM revision WHERE submission_id IS NULL ORDER BY id",
    )
    .fetch(db.pool());
    let mut matched = 0usize;
    while let Some((revision_id, title)) = unlinked.try_next().await? {
        let suggestion = title_candidates(&title)
            .into_iter()
            .find_map(|candidate| by_title.get(candidate).copied());
        if suggestion.is_some() {
            matched += 1;
        }
        table.push([
            revision_id.to_string(),
            suggestion.map(|id| id.to_string()).unwrap_or_default(),
            title,
            false.to_string(),
        ]);
    }
    drop(unlinked);
    debug!(matched, "title matches suggested");

    let linked: Vec<(i64, i64, String)> = sqlx::query_as(
        "SELECT r.id, r.submission_id, r.title
         FROM revision r JOIN submission s ON s.id = r.submission_id
         ORDER BY r.id",
    )
    .fetch_all(db.pool())
    .await?;
    for (revision_id, submission_id, title) in linked {
        table.push([
            revision_id.to_string(),
            submission_id.to_string(),
            title,
            true.to_string(),
        ]);
    }
    Ok(table)
}

/// Linked pairs whose titles differ even after trimming and removing the
/// revision suffix.
#[instrument(level = "info", skip_all)]
pub async fn mismatched_titles(db: &Database) -> Result<ReportTable> {
    let rows: Vec<(i64, i64, String, String)> = sqlx::query_as(
        "SELECT s.id, r.id, s.title, r.title
         FROM revision r JOIN submission s ON s.id = r.submission_id
         ORDER BY r.id",
    )
    .fetch_all(db.pool())
    .await?;

    let mut table = ReportTable::new(
        "Mismatched titles",
        [
            "OriginalSubmission ID",
            "Revision ID",
            "OriginalSubmission Title",
            "Revision Title",
        ],
    );
    for (submission_id, revision_id, original, revised) in rows {
        let same = title_candidates(&revised)
            .into_iter()
            .any(|candidate| candidate == original);
        if !same {
            table.push([submission_id.to_string(), revision_id.to_string(), original, revised]);
        }
    }
    Ok(table)
}

/// Ordered author ids and labels of one paper.
type AuthorList = Vec<(i64, String)>;

/// Linked pairs whose ordered author lists differ, including pure
/// reorderings. Authors are shown as `Name (email)`.
#[instrument(level = "info", skip_all)]
pub async fn mismatched_authors(db: &Database) -> Result<ReportTable> {
    let original: Vec<(i64, i64, i64, String)> = sqlx::query_as(
        "SELECT r.id, r.submission_id, p.id, p.name || ' (' || p.email || ')'
         FROM revision r
         JOIN submission_people m ON m.submission_id = r.submission_id
         JOIN people p ON p.id = m.people_id
         WHERE m.relation_type = ?
         ORDER BY r.id, m.position",
    )
    .bind(PaperRole::Author.as_str())
    .fetch_all(db.pool())
    .await?;
    let revised: Vec<(i64, i64, i64, String)> = sqlx::query_as(
        "SELECT r.id, r.submission_id, p.id, p.name || ' (' || p.email || ')'
         FROM revision r
         JOIN revision_people m ON m.revision_id = r.id
         JOIN people p ON p.id = m.people_id
         WHERE r.submission_id IS NOT NULL AND m.relation_type = ?
         ORDER BY r.id, m.position",
    )
    .bind(PaperRole::Author.as_str())
    .fetch_all(db.pool())
    .await?;

    // (revision, submission) -> (original authors, revision authors)
    let mut pairs: BTreeMap<(i64, i64), (AuthorList, AuthorList)> = BTreeMap::new();
    for (revision_id, submission_id, person, label) in original {
        pairs
            .entry((revision_id, submission_id))
            .or_default()
            .0
            .push((person, label));
    }
    for (revision_id, submission_id, person, label) in revised {
        pairs
            .entry((revision_id, submission_id))
            .or_default()
            .1
            .push((person, label));
    }

    let mut table = ReportTable::new(
        "Mismatched authors",
        [
            "OriginalSubmission ID",
            "Revision ID",
            "Removed Authors",
            "Added Authors",
            "OriginalSubmission Authors",
            "Revision Authors",
        ],
    );
    for ((revision_id, submission_id), (before, after)) in pairs {
        if ids(&before).eq(ids(&after)) {
            continue;
        }
        table.push([
            submission_id.to_string(),
            revision_id.to_string(),
            labels_missing_from(&before, &after),
            labels_missing_from(&after, &before),
            labels_missing_from(&before, &[]),
            labels_missing_from(&after, &[]),
        ]);
    }
    Ok(table)
}

fn ids(authors: &[(i64, String)]) -> impl Iterator<Item = i64> + '_ {
    authors.iter().map(|(id, _)| *id)
}

/// Labels of `authors` whose id does not occur in `other`, joined in order.
fn labels_missing_from(authors: &[(i64, String)], other: &[(i64, String)]) -> String {
    authors
        .iter()
        .filter(|(id, _)| !ids(other).any(|other_id| other_id == *id))
        .map(|(_, label)| label.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_cover_suffix_and_whitespace_variants() {
        assert_eq!(
            title_candidates(" Fast Joins (Revision)"),
            [" Fast Joins (Revision)", "Fast Joins (Revision)", " Fast Joins", "Fast Joins"]
        );
    }

    #[test]
    fn missing_labels_keep_listing_order() {
        let before = vec![(1, "A (a@x)".to_string()), (2, "B (b@x)".to_string())];
        let after = vec![(3, "C (c@x)".to_string()), (1, "A (a@x)".to_string())];

        assert_eq!(labels_missing_from(&before, &after), "B (b@x)");
        assert_eq!(labels_missing_from(&after, &before), "C (c@x)");
        assert_eq!(labels_missing_from(&after, &[]), "C (c@x); A (a@x)");
    }
}
