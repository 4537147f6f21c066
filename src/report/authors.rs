//! How many people hold a given number of papers per decision status.

use std::collections::{BTreeMap, BTreeSet};

use tracing::instrument;

use crate::db::Database;
use crate::error::Result;
use crate::model::{PaperKind, PaperRole};
use crate::report::ReportTable;

/// Primary authors and all authors, for submissions then revisions. Each
/// table has one row per paper count and one column per status; cells hold
/// the number of people.
#[instrument(level = "info", skip_all)]
pub async fn people_counts(db: &Database) -> Result<Vec<ReportTable>> {
    let mut tables = Vec::new();
    for kind in [PaperKind::Submission, PaperKind::Revision] {
        tables.push(primary_authors(db, kind).await?);
        tables.push(authors(db, kind).await?);
    }
    Ok(tables)
}

async fn primary_authors(db: &Database, kind: PaperKind) -> Result<ReportTable> {
    let paper = kind.paper_table();
    let counts: Vec<(i64, String, i64)> = sqlx::query_as(&format!(
        "SELECT n_papers, status, COUNT(*) FROM (
             SELECT primary_author_id, status, COUNT(*) AS n_papers
             FROM {paper}
             GROUP BY primary_author_id, status
         )
         GROUP BY n_papers, status"
    ))
    .fetch_all(db.pool())
    .await?;
    Ok(pivot(format!("Primary authors ({kind})"), counts))
}

async fn authors(db: &Database, kind: PaperKind) -> Result<ReportTable> {
    let paper = kind.paper_table();
    let people = kind.people_table();
    let column = kind.paper_column();
    let counts: Vec<(i64, String, i64)> = sqlx::query_as(&format!(
        "SELECT n_papers, status, COUNT(*) FROM (
             SELECT m.people_id, p.status, COUNT(*) AS n_papers
             FROM {people} m JOIN {paper} p ON p.id = m.{column}
             WHERE m.relation_type = ?
             GROUP BY m.people_id, p.status
         )
         GROUP BY n_papers, status"
    ))
    .bind(PaperRole::Author.as_str())
    .fetch_all(db.pool())
    .await?;
    Ok(pivot(format!("Authors ({kind})"), counts))
}

/// Turns `(papers, status, people)` triples into a papers by status grid,
/// filling absent combinations with zero.
fn pivot(title: String, counts: Vec<(i64, String, i64)>) -> ReportTable {
    let statuses: BTreeSet<&str> = counts.iter().map(|(_, status, _)| status.as_str()).collect();
    let mut grid: BTreeMap<i64, BTreeMap<&str, i64>> = BTreeMap::new();
    for (papers, status, people) in &counts {
        grid.entry(*papers).or_default().insert(status.as_str(), *people);
    }

    let mut table = ReportTable::new(
        title,
        std::iter::once("Papers").chain(statuses.iter().copied()),
    );
    for (papers, by_status) in grid {
        let row = std::iter::once(papers.to_string()).chain(
            statuses
                .iter()
                .map(|status| by_status.get(status).copied().unwrap_or(0).to_string()),
        );
        table.push(row);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pivot_fills_missing_cells_with_zero() {
        let table = pivot(
            "Authors".to_string(),
            vec![
                (1, "Reject".to_string(), 10),
                (1, "Accept".to_string(), 4),
                (2, "Reject".to_string(), 3),
            ],
        );

        assert_eq!(table.columns, ["Papers", "Accept", "Reject"]);
        assert_eq!(table.rows, vec![vec!["1", "4", "10"], vec!["2", "0", "3"]]);
    }
}
