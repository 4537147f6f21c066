use sqlx::SqliteConnection;
use tracing::{debug, warn};

use crate::error::Result;
use crate::model::{NewRevision, NewSubmission, PaperFields, PaperKind, RoleAssignment};

const PAPER_INSERT_COLUMNS: &str = "id, title, abstract, track_name, primary_subject_area, \
    secondary_subject_areas, conflicts, assigned, completed, bids, discussion, status, \
    embargo_agreement, conflict_agreement, category, authors_agreement, availability, \
    primary_author_id";

pub async fn insert_submission(conn: &mut SqliteConnection, submission: &NewSubmission) -> Result<()> {
    let sql = format!(
        "INSERT INTO submission ({PAPER_INSERT_COLUMNS}) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
    );
    bind_paper(sqlx::query(&sql), &submission.paper)
        .execute(&mut *conn)
        .await?;
    debug!(id = submission.paper.id, "inserted submission");
    Ok(())
}

pub async fn insert_revision(conn: &mut SqliteConnection, revision: &NewRevision) -> Result<()> {
    let sql = format!(
        "INSERT INTO revision ({PAPER_INSERT_COLUMNS}, submission_id) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
    );
    bind_paper(sqlx::query(&sql), &revision.paper)
        .bind(revision.submission_id)
        .execute(&mut *conn)
        .await?;
    debug!(id = revision.paper.id, "inserted revision");
    Ok(())
}

type SqliteQuery<'q> = sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>>;

fn bind_paper<'q>(query: SqliteQuery<'q>, paper: &'q PaperFields) -> SqliteQuery<'q> {
    query
        .bind(paper.id)
        .bind(&paper.title)
        .bind(&paper.abstract_text)
        .bind(&paper.track_name)
        .bind(&paper.primary_subject_area)
        .bind(&paper.secondary_subject_areas)
        .bind(paper.conflicts)
        .bind(paper.assigned)
        .bind(paper.completed)
        .bind(paper.bids)
        .bind(&paper.discussion)
        .bind(&paper.status)
        .bind(&paper.embargo_agreement)
        .bind(&paper.conflict_agreement)
        .bind(&paper.category)
        .bind(&paper.authors_agreement)
        .bind(&paper.availability)
        .bind(paper.primary_author.0)
}

/// Inserts role join rows for one paper.
pub async fn insert_roles(
    conn: &mut SqliteConnection,
    kind: PaperKind,
    paper_id: i64,
    roles: &[RoleAssignment],
) -> Result<()> {
    let sql = format!(
        "INSERT INTO {} ({}, people_id, relation_type, position) VALUES (?, ?, ?, ?)",
        kind.people_table(),
        kind.paper_column()
    );
    for role in roles {
        sqlx::query(&sql)
            .bind(paper_id)
            .bind(role.person.0)
            .bind(role.role.as_str())
            .bind(role.position)
            .execute(&mut *conn)
            .await?;
    }
    debug!(%kind, paper_id, roles = roles.len(), "inserted roles");
    Ok(())
}

/// Points each revision at the submission it revises. Returns the revision
/// ids that matched no row.
pub async fn link_revisions(conn: &mut SqliteConnection, pairs: &[(i64, i64)]) -> Result<Vec<i64>> {
    let mut unmatched = Vec::new();
    for &(revision_id, submission_id) in pairs {
        let affected = sqlx::query("UPDATE revision SET submission_id = ? WHERE id = ?")
            .bind(submission_id)
            .bind(revision_id)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        if affected == 0 {
            warn!(revision_id, submission_id, "mapping names an unknown revision");
            unmatched.push(revision_id);
        }
    }
    Ok(unmatched)
}

/// Role rows of one paper ordered by role and position.
pub async fn roles_of(
    conn: &mut SqliteConnection,
    kind: PaperKind,
    paper_id: i64,
) -> Result<Vec<(String, i64, i64)>> {
    let sql = format!(
        "SELECT relation_type, position, people_id FROM {} WHERE {} = ? \
         ORDER BY relation_type, position",
        kind.people_table(),
        kind.paper_column()
    );
    Ok(sqlx::query_as(&sql)
        .bind(paper_id)
        .fetch_all(&mut *conn)
        .await?)
}
