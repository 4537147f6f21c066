//! Adapters between the platform's exports and flat [`table::Table`] values.

pub mod excel_read;
pub mod excel_write;
pub mod people_tsv;
pub mod table;
