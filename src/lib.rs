// src/lib.rs

//! Kuchnia Recipe Server
//!
//! Small web application serving recipe collections grouped by category:
//! server-rendered views, form-posted submissions, in-memory state.
//!
//! # Architecture
//!
//! - Store-first: all recipe state lives in an owned [`store::CategoryStore`]
//!   handed to the handlers at startup, reset on restart
//! - Categories: seeded once at process start, never deleted
//! - Recipes: append-only, immutable once accepted
//! - Validation: pure, accumulating field checks in [`validate`]

pub mod db;
mod error;
pub mod server;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
pub use store::{Category, CategoryStore, CategorySummary, Recipe};
pub use validate::{split_ingredients, RecipeDraft};
