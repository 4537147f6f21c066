//! Decision rates and reviewer rating statistics.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{instrument, warn};

use crate::db::Database;
use crate::error::Result;
use crate::model::{PaperKind, RevisionStatus, SubmissionStatus};
use crate::report::ReportTable;

const TRACK_PREFIX: &str = "Research -> ";
const TRACK_REVISION_SUFFIX: &str = " Revision";

/// Shortens a dated research track such as `Research -> March 2021` to
/// `21/03`. Other names are kept as they are.
pub fn track_label(track: &str) -> String {
    let Some(date) = track.strip_prefix(TRACK_PREFIX) else {
        return track.to_string();
    };
    let date = date.strip_suffix(TRACK_REVISION_SUFFIX).unwrap_or(date);
    match NaiveDate::parse_from_str(&format!("1 {date}"), "%d %B %Y") {
        Ok(date) => date.format("%y/%m").to_string(),
        Err(err) => {
            warn!(track, %err, "track name has no recognisable date");
            track.to_string()
        }
    }
}

/// Share of positive decisions per track. For submissions, accept and both
/// revision outcomes count as positive; for revisions only accept does.
#[instrument(level = "info", skip_all)]
pub async fn acceptance_by_track(db: &Database) -> Result<Vec<ReportTable>> {
    let submission_positive = [
        SubmissionStatus::Accept,
        SubmissionStatus::MinorRevision,
        SubmissionStatus::MajorRevision,
    ]
    .map(SubmissionStatus::as_str);
    let revision_positive = [RevisionStatus::Accept].map(RevisionStatus::as_str);

    Ok(vec![
        track_rates(
            db,
            PaperKind::Submission,
            &submission_positive,
            "Acceptance/Revision Rate",
        )
        .await?,
        track_rates(db, PaperKind::Revision, &revision_positive, "Acceptance Rate").await?,
    ])
}

async fn track_rates(
    db: &Database,
    kind: PaperKind,
    positive: &[&str],
    rate_column: &str,
) -> Result<ReportTable> {
    let counts: Vec<(String, String, i64)> = sqlx::query_as(&format!(
        "SELECT track_name, status, COUNT(*) FROM {} GROUP BY track_name, status",
        kind.paper_table()
    ))
    .fetch_all(db.pool())
    .await?;

    // label -> (positive, total)
    let mut tracks: BTreeMap<String, (i64, i64)> = BTreeMap::new();
    for (track, status, count) in counts {
        let entry = tracks.entry(track_label(&track)).or_default();
        if positive.contains(&status.as_str()) {
            entry.0 += count;
        }
        entry.1 += count;
    }

    let mut table = ReportTable::new(
        format!("Acceptance by track ({kind})"),
        ["Track", "Accepted", "Total", rate_column],
    );
    for (track, (accepted, total)) in tracks {
        let rate = accepted as f64 / total as f64;
        table.push([track, accepted.to_string(), total.to_string(), format!("{rate:.3}")]);
    }
    Ok(table)
}

/// Number of original submission reviews per overall rating and reviewer
/// confidence, followed by per-confidence totals under the rating `All`.
#[instrument(level = "info", skip_all)]
pub async fn rating_vs_confidence(db: &Database) -> Result<ReportTable> {
    let counts: Vec<(String, String, i64)> = sqlx::query_as(
        "SELECT overall_rating, confidence, COUNT(*)
         FROM submission_review
         GROUP BY overall_rating, confidence
         ORDER BY overall_rating, confidence",
    )
    .fetch_all(db.pool())
    .await?;

    let mut totals: BTreeMap<String, i64> = BTreeMap::new();
    let mut table = ReportTable::new("Rating vs confidence", ["Rating", "Confidence", "Count"]);
    for (rating, confidence, count) in counts {
        *totals.entry(confidence.clone()).or_default() += count;
        table.push([rating, confidence, count.to_string()]);
    }
    for (confidence, count) in totals {
        table.push(["All".to_string(), confidence, count.to_string()]);
    }
    Ok(table)
}
