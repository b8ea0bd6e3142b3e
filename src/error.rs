// src/error.rs
//! Error types for kuchnia infrastructure
//!
//! Request-level outcomes (unknown category, validation failures) are routed
//! as control flow in the handlers; this enum covers the fallible startup
//! paths only.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// SQLite error while declaring the schema
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}
