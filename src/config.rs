//! Run configuration: where the database lives and which exports to load.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, StatsError};

/// What an importer does when one row's transaction fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowErrorPolicy {
    /// Stop the run and return the error.
    #[default]
    Abort,
    /// Log the failure, count it, and continue with the next row.
    Continue,
}

/// Input exports, one per importer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct InputFiles {
    pub people: PathBuf,
    pub papers: PathBuf,
    pub reviews: PathBuf,
    pub metareviews: PathBuf,
    /// Senior meta-reviews are not part of every export set.
    pub seniormetareviews: Option<PathBuf>,
    pub mapping: PathBuf,
}

impl Default for InputFiles {
    fn default() -> Self {
        Self {
            people: PathBuf::from("data/AllPeopleVLDB.txt"),
            papers: PathBuf::from("data/AllPapersThroughJuly.xlsx"),
            reviews: PathBuf::from("data/PVLDBReviewsApril2020-July2021.xlsx"),
            metareviews: PathBuf::from("data/PVLDBMetaReviewsApril2020-July2021.xlsx"),
            seniormetareviews: None,
            mapping: PathBuf::from("data/RevisionToOriginalSubmission.xlsx"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database_url: String,
    pub files: InputFiles,
    /// Directory receiving report workbooks.
    pub output_dir: PathBuf,
    pub on_row_error: RowErrorPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://cmt_stats.db".to_string(),
            files: InputFiles::default(),
            output_dir: PathBuf::from("reports"),
            on_row_error: RowErrorPolicy::Abort,
        }
    }
}

impl Config {
    /// Loads a TOML configuration file. Keys that are absent keep their
    /// defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(StatsError::MissingInput(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        if config.database_url.trim().is_empty() {
            return Err(StatsError::Config("database_url must not be empty".into()));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            database_url = "sqlite://vldb.db"
            on_row_error = "continue"

            [files]
            papers = "exports/papers.xlsx"
            "#,
        )
        .unwrap();

        assert_eq!(config.database_url, "sqlite://vldb.db");
        assert_eq!(config.on_row_error, RowErrorPolicy::Continue);
        assert_eq!(config.files.papers, PathBuf::from("exports/papers.xlsx"));
        assert_eq!(config.files.people, InputFiles::default().people);
        assert_eq!(config.output_dir, PathBuf::from("reports"));
    }

    #[test]
    fn empty_database_url_is_rejected() {
        let err = Config::from_toml("database_url = \" \"").unwrap_err();
        assert!(matches!(err, StatsError::Config(_)));
    }

    #[test]
    fn file_is_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cmt-stats.toml");
        fs::write(
            &path,
            "output_dir = \"out\"\n[files]\nseniormetareviews = \"smr.xlsx\"\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();

        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.files.seniormetareviews, Some(PathBuf::from("smr.xlsx")));
        assert_eq!(config.database_url, Config::default().database_url);
    }

    #[test]
    fn absent_file_is_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = Config::from_file(&path).unwrap_err();

        assert!(matches!(err, StatsError::MissingInput(ref missing) if *missing == path));
    }

    #[test]
    fn unknown_policy_is_a_parse_error() {
        let err = Config::from_toml("on_row_error = \"retry\"").unwrap_err();
        assert!(matches!(err, StatsError::ConfigParse(_)));
    }
}
