//! Read-only aggregation queries over an imported schema.
//!
//! Every report produces one or more [`ReportTable`]s that can be printed,
//! serialised to JSON, or written to a workbook with
//! [`excel_write`](crate::io::excel_write).

pub mod authors;
pub mod ratings;
pub mod revisions;

use std::fmt;

use serde::Serialize;
use tracing::instrument;

use crate::db::Database;
use crate::error::Result;

/// A rendered report: a titled grid of text cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportTable {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    pub fn new<I, S>(title: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.rows.push(row.into_iter().map(|cell| cell.to_string()).collect());
    }

    /// Values of one column, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.columns.iter().position(|column| column == name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).map(String::as_str).unwrap_or_default())
                .collect(),
        )
    }
}

impl fmt::Display for ReportTable {
    /// Left-aligned plain text grid preceded by the title.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
        for row in &self.rows {
            for (idx, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(idx) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }

        writeln!(f, "{}", self.title)?;
        let write_line = |f: &mut fmt::Formatter<'_>, cells: &[String]| -> fmt::Result {
            let line = cells
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("  ");
            writeln!(f, "{}", line.trim_end())
        };
        write_line(f, &self.columns)?;
        for row in &self.rows {
            write_line(f, row)?;
        }
        Ok(())
    }
}

/// The available reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportName {
    NeedingRevision,
    Accepted,
    SuggestMapping,
    MismatchedTitles,
    MismatchedAuthors,
    PeopleCounts,
    AcceptanceByTrack,
    RatingVsConfidence,
}

impl ReportName {
    /// Base file name used when the report is written to disk.
    pub fn file_stem(self) -> &'static str {
        match self {
            ReportName::NeedingRevision => "submissions_needing_a_revision",
            ReportName::Accepted => "accepted",
            ReportName::SuggestMapping => "RevisionToOriginalSubmission",
            ReportName::MismatchedTitles => "mismatched_titles",
            ReportName::MismatchedAuthors => "mismatched_authors",
            ReportName::PeopleCounts => "people_counts",
            ReportName::AcceptanceByTrack => "acceptance_by_track",
            ReportName::RatingVsConfidence => "rating_vs_confidence",
        }
    }
}

/// Runs the named report.
#[instrument(level = "info", skip(db))]
pub async fn run(db: &Database, name: ReportName) -> Result<Vec<ReportTable>> {
    Ok(match name {
        ReportName::NeedingRevision => vec![revisions::submissions_needing_revision(db).await?],
        ReportName::Accepted => vec![revisions::accepted_papers(db).await?],
        ReportName::SuggestMapping => vec![revisions::suggest_mapping(db).await?],
        ReportName::MismatchedTitles => vec![revisions::mismatched_titles(db).await?],
        ReportName::MismatchedAuthors => vec![revisions::mismatched_authors(db).await?],
        ReportName::PeopleCounts => authors::people_counts(db).await?,
        ReportName::AcceptanceByTrack => ratings::acceptance_by_track(db).await?,
        ReportName::RatingVsConfidence => vec![ratings::rating_vs_confidence(db).await?],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_aligns_columns() {
        let mut table = ReportTable::new("Papers", ["Paper ID", "Title"]);
        table.push(["1", "Fast Joins"]);
        table.push(["12345678", "X"]);

        let rendered = table.to_string();

        assert_eq!(
            rendered,
            "Papers\nPaper ID  Title\n1         Fast Joins\n12345678  X\n"
        );
    }

    #[test]
    fn column_lookup_by_name() {
        let mut table = ReportTable::new("t", ["a", "b"]);
        table.push(["1", "2"]);
        assert_eq!(table.column("b"), Some(vec!["2"]));
        assert_eq!(table.column("c"), None);
    }
}
