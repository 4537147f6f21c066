//! Core library for the cmt-stats command line application.
//!
//! The crate loads conference-management exports into a relational schema
//! and runs read-only reports over it. Spreadsheet adapters live under
//! [`io`], the record types under [`model`], the schema and row writers
//! under [`db`], the batch importers under [`import`], and the aggregation
//! queries under [`report`].

pub mod config;
pub mod db;
pub mod error;
pub mod import;
pub mod io;
pub mod model;
pub mod parse;
pub mod report;

pub use error::{Result, StatsError};
