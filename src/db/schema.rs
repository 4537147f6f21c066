use tracing::{debug, info, instrument};

use crate::db::Database;
use crate::error::Result;
use crate::model::{PaperKind, PaperRole};

/// Name and `CREATE TABLE` statement of one table.
#[derive(Debug, Clone)]
pub struct TableDefinition {
    pub name: &'static str,
    pub create: String,
}

/// Columns shared by both paper tables.
const PAPER_COLUMNS: &str = "
    id INTEGER PRIMARY KEY NOT NULL,
    title TEXT NOT NULL,
    abstract TEXT NOT NULL,
    track_name TEXT NOT NULL,
    primary_subject_area TEXT NOT NULL,
    secondary_subject_areas TEXT NOT NULL,
    conflicts INTEGER NOT NULL,
    assigned INTEGER NOT NULL,
    completed REAL NOT NULL,
    bids INTEGER NOT NULL,
    discussion VARCHAR(100) NOT NULL,
    status VARCHAR(100) NOT NULL,
    embargo_agreement TEXT NOT NULL,
    conflict_agreement TEXT NOT NULL,
    category TEXT NOT NULL,
    authors_agreement TEXT NOT NULL,
    availability TEXT NOT NULL,
    primary_author_id INTEGER NOT NULL REFERENCES people (id)";

/// All tables in creation order; every table only references tables listed
/// before it.
pub fn table_definitions() -> Vec<TableDefinition> {
    let mut tables = vec![
        TableDefinition {
            name: "people",
            create: "CREATE TABLE people (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                affiliation TEXT NOT NULL,
                country TEXT,
                UNIQUE (name, email)
            )"
            .to_string(),
        },
        TableDefinition {
            name: "submission",
            create: format!("CREATE TABLE submission ({PAPER_COLUMNS}\n)"),
        },
        TableDefinition {
            name: "revision",
            create: format!(
                "CREATE TABLE revision ({PAPER_COLUMNS},
    submission_id INTEGER REFERENCES submission (id)\n)"
            ),
        },
    ];

    for kind in [PaperKind::Submission, PaperKind::Revision] {
        tables.push(people_mapping_table(kind));
    }
    for (name, kind) in [
        ("submission_review", PaperKind::Submission),
        ("revision_review", PaperKind::Revision),
    ] {
        tables.push(review_table(name, kind, review_columns(kind)));
    }
    for (name, kind) in [
        ("submission_metareview", PaperKind::Submission),
        ("revision_metareview", PaperKind::Revision),
    ] {
        tables.push(review_table(name, kind, metareview_columns(kind)));
    }
    for kind in [PaperKind::Submission, PaperKind::Revision] {
        tables.push(review_table(kind.seniormetareview_table(), kind, &[]));
    }
    tables
}

/// Drops every table and creates the schema from scratch in one transaction.
#[instrument(level = "info", skip_all)]
pub async fn recreate(db: &Database) -> Result<()> {
    let tables = table_definitions();
    let mut tx = db.begin().await?;
    for table in tables.iter().rev() {
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", table.name))
            .execute(&mut *tx)
            .await?;
    }
    for table in &tables {
        debug!(table = table.name, "creating table");
        sqlx::query(&table.create).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    info!(tables = tables.len(), "schema recreated");
    Ok(())
}

fn people_mapping_table(kind: PaperKind) -> TableDefinition {
    let roles = PaperRole::ALL
        .iter()
        .map(|role| format!("'{role}'"))
        .collect::<Vec<_>>()
        .join(", ");
    let paper = kind.paper_table();
    let column = kind.paper_column();
    TableDefinition {
        name: kind.people_table(),
        create: format!(
            "CREATE TABLE {table} (
    {column} INTEGER NOT NULL REFERENCES {paper} (id),
    people_id INTEGER NOT NULL REFERENCES people (id),
    relation_type TEXT NOT NULL CHECK (relation_type IN ({roles})),
    position INTEGER NOT NULL,
    PRIMARY KEY ({column}, people_id, relation_type)
)",
            table = kind.people_table(),
        ),
    }
}

fn review_columns(kind: PaperKind) -> &'static [&'static str] {
    match kind {
        PaperKind::Submission => &[
            "overall_rating",
            "relevance",
            "revision_possible",
            "paper_flavor",
            "summary",
            "strengths",
            "weaknesses",
            "novelty",
            "significance",
            "technical_depth",
            "experiments",
            "presentation",
            "details",
            "reproducibility",
            "revision_items",
            "confidence",
            "confidential_comments",
            "external_reviewer",
            "trainee_agreement",
        ],
        PaperKind::Revision => &[
            "recommendation",
            "revision_addressed",
            "justification",
            "comments_authors",
            "confidential_comments",
        ],
    }
}

fn metareview_columns(kind: PaperKind) -> &'static [&'static str] {
    match kind {
        PaperKind::Submission => &["overall_rating", "summary", "revision_items"],
        PaperKind::Revision => &["overall_rating", "comments"],
    }
}

/// Review-like tables share the `(paper, reviewer)` composite key and differ
/// only in their answer columns.
fn review_table(name: &'static str, kind: PaperKind, answers: &[&str]) -> TableDefinition {
    let paper = kind.paper_table();
    let column = kind.paper_column();
    let answers: String = answers
        .iter()
        .map(|answer| format!("    {answer} TEXT NOT NULL,\n"))
        .collect();
    TableDefinition {
        name,
        create: format!(
            "CREATE TABLE {name} (
    {column} INTEGER NOT NULL REFERENCES {paper} (id),
    reviewer_id INTEGER NOT NULL REFERENCES people (id),
{answers}    PRIMARY KEY ({column}, reviewer_id)
)"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_listed_after_their_references() {
        let tables = table_definitions();
        for (idx, table) in tables.iter().enumerate() {
            for (later_idx, later) in tables.iter().enumerate() {
                let reference = format!("REFERENCES {} (", later.name);
                if table.create.contains(&reference) {
                    assert!(
                        later_idx < idx,
                        "{} references {} which is created later",
                        table.name,
                        later.name
                    );
                }
            }
        }
    }

    #[test]
    fn defines_every_review_kind_for_both_paper_kinds() {
        let names: Vec<_> = table_definitions().iter().map(|t| t.name).collect();
        for expected in [
            "people",
            "submission",
            "revision",
            "submission_people",
            "revision_people",
            "submission_review",
            "revision_review",
            "submission_metareview",
            "revision_metareview",
            "submission_seniormetareview",
            "revision_seniormetareview",
        ] {
            assert!(names.contains(&expected), "missing table {expected}");
        }
    }

    #[tokio::test]
    async fn recreate_drops_existing_rows() {
        let db = Database::in_memory().await.unwrap();
        recreate(&db).await.unwrap();
        sqlx::query("INSERT INTO people (name, email, affiliation) VALUES ('A', 'a@x', '')")
            .execute(db.pool())
            .await
            .unwrap();

        recreate(&db).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM people")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
