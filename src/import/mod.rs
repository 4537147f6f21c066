//! Batch importers, one per export file.
//!
//! Importers run strictly one after another and process their rows
//! sequentially; later importers rely on rows written by earlier ones. Each
//! row is written in its own transaction(s), so a failed row never rolls back
//! rows that were already committed.

pub mod columns;
pub mod mapping;
pub mod metareviews;
pub mod papers;
pub mod people;
pub mod reviews;
pub mod seniormetareviews;

use std::fmt;
use std::path::Path;

use tracing::{info, instrument, warn};

use crate::config::{Config, RowErrorPolicy};
use crate::db::{Database, schema};
use crate::error::{Result, StatsError};

pub use mapping::import_mapping;
pub use metareviews::import_metareviews;
pub use papers::import_papers;
pub use people::import_people;
pub use reviews::import_reviews;
pub use seniormetareviews::import_seniormetareviews;

/// Row counts of one importer run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub failed: usize,
}

impl ImportSummary {
    /// Applies `policy` to a failed row: aborting returns the error,
    /// continuing counts it.
    fn record_failure(
        &mut self,
        policy: RowErrorPolicy,
        what: &str,
        row: usize,
        error: StatsError,
    ) -> Result<()> {
        match policy {
            RowErrorPolicy::Abort => Err(error),
            RowErrorPolicy::Continue => {
                warn!(what, row, %error, "row failed, continuing");
                self.failed += 1;
                Ok(())
            }
        }
    }
}

impl std::ops::AddAssign for ImportSummary {
    fn add_assign(&mut self, rhs: Self) {
        self.imported += rhs.imported;
        self.failed += rhs.failed;
    }
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} imported, {} failed", self.imported, self.failed)
    }
}

/// The importers in the order they must run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    People,
    Papers,
    Reviews,
    Metareviews,
    Seniormetareviews,
    Mapping,
}

impl ImportKind {
    pub const ORDER: [ImportKind; 6] = [
        ImportKind::People,
        ImportKind::Papers,
        ImportKind::Reviews,
        ImportKind::Metareviews,
        ImportKind::Seniormetareviews,
        ImportKind::Mapping,
    ];
}

impl fmt::Display for ImportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImportKind::People => "people",
            ImportKind::Papers => "papers",
            ImportKind::Reviews => "reviews",
            ImportKind::Metareviews => "metareviews",
            ImportKind::Seniormetareviews => "seniormetareviews",
            ImportKind::Mapping => "mapping",
        };
        f.write_str(name)
    }
}

/// Runs a single importer against the file configured for it. Returns
/// `None` when the importer has no file configured.
#[instrument(level = "info", skip(db, config))]
pub async fn run_one(
    db: &Database,
    config: &Config,
    kind: ImportKind,
) -> Result<Option<ImportSummary>> {
    let files = &config.files;
    let policy = config.on_row_error;
    let summary = match kind {
        ImportKind::People => import_people(db, require(&files.people)?, policy).await?,
        ImportKind::Papers => import_papers(db, require(&files.papers)?, policy).await?,
        ImportKind::Reviews => import_reviews(db, require(&files.reviews)?, policy).await?,
        ImportKind::Metareviews => {
            import_metareviews(db, require(&files.metareviews)?, policy).await?
        }
        ImportKind::Seniormetareviews => match &files.seniormetareviews {
            Some(path) => import_seniormetareviews(db, require(path)?, policy).await?,
            None => return Ok(None),
        },
        ImportKind::Mapping => import_mapping(db, require(&files.mapping)?).await?,
    };
    info!(%kind, %summary, "importer finished");
    Ok(Some(summary))
}

/// Drops and recreates the schema, then runs every importer in order.
#[instrument(level = "info", skip_all)]
pub async fn import_all(db: &Database, config: &Config) -> Result<ImportSummary> {
    schema::recreate(db).await?;
    let mut total = ImportSummary::default();
    for kind in ImportKind::ORDER {
        if let Some(summary) = run_one(db, config, kind).await? {
            total += summary;
        }
    }
    info!(%total, "import finished");
    Ok(total)
}

fn require(path: &Path) -> Result<&Path> {
    if path.exists() {
        Ok(path)
    } else {
        Err(StatsError::MissingInput(path.to_path_buf()))
    }
}
